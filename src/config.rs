use std::env;

use secrecy::SecretString;

#[derive(Clone, Debug)]
pub struct Config {
    pub openai_api_key: SecretString,
    pub youtube_api_key: SecretString,
    pub youtube_search_url: String,
    pub keyword_model: String,
    pub link_model: String,
    pub quiz_model: String,
    pub quiz_max_tokens: u32,
    pub max_keywords: usize,
    pub max_video_results: u32,
    pub source_language: String,
    pub source_language_name: String,
    pub target_language: String,
    pub target_language_name: String,
    pub search_region: String,
    pub recency_window_days: i64,
    pub request_timeout_secs: u64,
    pub web_server_host: String,
    pub web_server_port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            openai_api_key: SecretString::from(env::var("OPENAI_API_KEY").unwrap_or_default()),
            youtube_api_key: SecretString::from(env::var("YOUTUBE_API_KEY").unwrap_or_default()),
            youtube_search_url: env::var("YOUTUBE_SEARCH_URL")
                .unwrap_or_else(|_| "https://www.googleapis.com/youtube/v3/search".to_string()),
            keyword_model: env::var("KEYWORD_MODEL").unwrap_or_else(|_| "gpt-3.5-turbo".to_string()),
            link_model: env::var("LINK_MODEL").unwrap_or_else(|_| "gpt-4".to_string()),
            quiz_model: env::var("QUIZ_MODEL").unwrap_or_else(|_| "gpt-4o".to_string()),
            quiz_max_tokens: env::var("QUIZ_MAX_TOKENS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8192),
            max_keywords: env::var("MAX_KEYWORDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
            max_video_results: env::var("MAX_VIDEO_RESULTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3),
            source_language: env::var("SOURCE_LANGUAGE").unwrap_or_else(|_| "pt".to_string()),
            source_language_name: env::var("SOURCE_LANGUAGE_NAME")
                .unwrap_or_else(|_| "Portuguese".to_string()),
            target_language: env::var("TARGET_LANGUAGE").unwrap_or_else(|_| "en".to_string()),
            target_language_name: env::var("TARGET_LANGUAGE_NAME")
                .unwrap_or_else(|_| "English".to_string()),
            search_region: env::var("SEARCH_REGION").unwrap_or_else(|_| "BR".to_string()),
            recency_window_days: env::var("RECENCY_WINDOW_DAYS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(365),
            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
        }
    }

    /// Validate that production-critical configuration is set
    /// Panics if required API keys are missing
    pub fn validate_for_production(&self) {
        use secrecy::ExposeSecret;

        if self.openai_api_key.expose_secret().is_empty() {
            panic!("FATAL: OPENAI_API_KEY is not set! Set OPENAI_API_KEY environment variable.");
        }

        if self.youtube_api_key.expose_secret().is_empty() {
            panic!("FATAL: YOUTUBE_API_KEY is not set! Set YOUTUBE_API_KEY environment variable.");
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            openai_api_key: SecretString::from("test-openai-key".to_string()),
            youtube_api_key: SecretString::from("test-youtube-key".to_string()),
            youtube_search_url: "https://www.googleapis.com/youtube/v3/search".to_string(),
            keyword_model: "gpt-3.5-turbo".to_string(),
            link_model: "gpt-4".to_string(),
            quiz_model: "gpt-4o".to_string(),
            quiz_max_tokens: 8192,
            max_keywords: 5,
            max_video_results: 3,
            source_language: "pt".to_string(),
            source_language_name: "Portuguese".to_string(),
            target_language: "en".to_string(),
            target_language_name: "English".to_string(),
            search_region: "BR".to_string(),
            recency_window_days: 365,
            request_timeout_secs: 30,
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env_with_defaults() {
        let config = Config::from_env();

        // Should use env vars if set, or fall back to defaults
        assert!(!config.youtube_search_url.is_empty());
        assert!(!config.quiz_model.is_empty());
        assert!(config.quiz_max_tokens > 0);
        assert!(config.max_video_results > 0);
    }

    #[test]
    fn test_test_config() {
        let config = Config::test_config();

        assert_eq!(config.source_language, "pt");
        assert_eq!(config.target_language, "en");
        assert_eq!(config.search_region, "BR");
        assert_eq!(config.recency_window_days, 365);
    }
}
