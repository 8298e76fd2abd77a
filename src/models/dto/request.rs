use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct YouTubeLinksRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[validate(length(max = 2000))]
    pub description: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CurateRequest {
    #[validate(length(min = 1))]
    pub text: String,
}
