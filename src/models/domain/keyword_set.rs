use serde::{Deserialize, Serialize};

/// Bilingual keyword set produced by the keyword extractor and consumed by
/// the video finder. Order is preserved from the model's reply; duplicates
/// are not removed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordSet {
    pub source_language: Vec<String>,
    pub target_language: Vec<String>,
}

impl KeywordSet {
    pub fn is_empty(&self) -> bool {
        self.source_language.is_empty() && self.target_language.is_empty()
    }

    /// Source-language keywords first, then target-language ones.
    pub fn all_keywords(&self) -> impl Iterator<Item = &str> {
        self.source_language
            .iter()
            .chain(self.target_language.iter())
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_keywords_preserves_order_and_duplicates() {
        let keywords = KeywordSet {
            source_language: vec!["laço".to_string(), "for".to_string()],
            target_language: vec!["loop".to_string(), "for".to_string()],
        };

        let all: Vec<&str> = keywords.all_keywords().collect();
        assert_eq!(all, vec!["laço", "for", "loop", "for"]);
    }

    #[test]
    fn is_empty_requires_both_halves_empty() {
        assert!(KeywordSet::default().is_empty());

        let partial = KeywordSet {
            source_language: vec![],
            target_language: vec!["loop".to_string()],
        };
        assert!(!partial.is_empty());
    }
}
