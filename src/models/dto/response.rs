use serde::Serialize;

use crate::models::domain::{KeywordSet, VideoResult};

/// Video results for one curation run, one list per language tag.
#[derive(Debug, Clone, Serialize)]
pub struct LocalizedVideos {
    pub source_language: Vec<VideoResult>,
    pub target_language: Vec<VideoResult>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CurateResponse {
    pub keywords: KeywordSet,
    pub videos: LocalizedVideos,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curate_response_serializes_both_language_lists() {
        let response = CurateResponse {
            keywords: KeywordSet {
                source_language: vec!["laço".to_string()],
                target_language: vec!["loop".to_string()],
            },
            videos: LocalizedVideos {
                source_language: vec![],
                target_language: vec![],
            },
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["keywords"]["source_language"][0], "laço");
        assert!(json["videos"]["source_language"].as_array().unwrap().is_empty());
        assert!(json["videos"]["target_language"].as_array().unwrap().is_empty());
    }
}
