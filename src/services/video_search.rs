use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use thiserror::Error;

use crate::config::Config;
use crate::errors::AppError;
use crate::models::domain::{KeywordSet, VideoResult};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SearchError {
    /// The provider's quota is exhausted account-wide; retrying other
    /// keywords is pointless.
    #[error("video search quota exceeded")]
    QuotaExceeded,

    /// The provider answered with an error envelope.
    #[error("video search provider error: {0}")]
    Provider(String),

    /// The request never produced a provider reply (network, timeout,
    /// malformed body). Recoverable per keyword.
    #[error("video search transport error: {0}")]
    Transport(String),
}

impl From<SearchError> for AppError {
    fn from(err: SearchError) -> Self {
        match err {
            SearchError::QuotaExceeded => AppError::QuotaExceeded(
                "the video search quota has been exceeded, try again later".into(),
            ),
            SearchError::Provider(message) => AppError::SearchFailed(message),
            SearchError::Transport(message) => AppError::SearchFailed(message),
        }
    }
}

/// Filters applied to the first query for each keyword. The fallback retry
/// drops all of them at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFilters {
    pub region: String,
    pub relevance_language: String,
    pub published_after: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub keyword: String,
    pub max_results: u32,
    pub filters: Option<SearchFilters>,
}

/// Seam to the video search provider.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VideoSearchProvider: Send + Sync {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<VideoResult>, SearchError>;
}

/// YouTube Data API v3 `search` endpoint client.
pub struct YouTubeSearchProvider {
    http: reqwest::Client,
    api_key: SecretString,
    base_url: String,
}

impl YouTubeSearchProvider {
    pub fn new(config: &Config) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .expect("failed to build the video search HTTP client");

        Self {
            http,
            api_key: config.youtube_api_key.clone(),
            base_url: config.youtube_search_url.clone(),
        }
    }

    fn query_params(&self, query: &SearchQuery) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("part", "snippet".to_string()),
            ("q", query.keyword.clone()),
            ("type", "video".to_string()),
            ("key", self.api_key.expose_secret().to_string()),
            ("maxResults", query.max_results.to_string()),
            ("order", "viewCount".to_string()),
            ("videoCaption", "any".to_string()),
        ];

        if let Some(filters) = &query.filters {
            params.push(("regionCode", filters.region.clone()));
            params.push(("relevanceLanguage", filters.relevance_language.clone()));
            params.push((
                "publishedAfter",
                filters
                    .published_after
                    .to_rfc3339_opts(SecondsFormat::Secs, true),
            ));
        }

        params
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    error: Option<ErrorEnvelope>,
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    errors: Vec<ErrorDetail>,
    #[serde(default)]
    message: String,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    #[serde(default)]
    reason: String,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: ItemId,
    snippet: Snippet,
}

#[derive(Debug, Deserialize)]
struct ItemId {
    #[serde(rename = "videoId")]
    video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Snippet {
    title: String,
    #[serde(rename = "channelTitle")]
    channel_title: String,
    #[serde(rename = "publishedAt")]
    published_at: DateTime<Utc>,
}

#[async_trait]
impl VideoSearchProvider for YouTubeSearchProvider {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<VideoResult>, SearchError> {
        let response = self
            .http
            .get(&self.base_url)
            .query(&self.query_params(query))
            .send()
            .await
            .map_err(|err| SearchError::Transport(err.to_string()))?;

        let page: SearchResponse = response
            .json()
            .await
            .map_err(|err| SearchError::Transport(err.to_string()))?;

        if let Some(error) = page.error {
            let reason = error
                .errors
                .first()
                .map(|detail| detail.reason.as_str())
                .unwrap_or_default();
            if reason == "quotaExceeded" {
                return Err(SearchError::QuotaExceeded);
            }
            return Err(SearchError::Provider(error.message));
        }

        let videos = page
            .items
            .into_iter()
            .filter_map(|item| {
                let video_id = item.id.video_id?;
                Some(VideoResult {
                    title: item.snippet.title,
                    channel: item.snippet.channel_title,
                    published_at: item.snippet.published_at,
                    url: format!("https://www.youtube.com/watch?v={video_id}"),
                })
            })
            .collect();

        Ok(videos)
    }
}

/// Per-keyword search with the empty-result fallback and the quota
/// short-circuit.
pub struct VideoFinder {
    provider: Arc<dyn VideoSearchProvider>,
    config: Arc<Config>,
}

impl VideoFinder {
    pub fn new(provider: Arc<dyn VideoSearchProvider>, config: Arc<Config>) -> Self {
        Self { provider, config }
    }

    /// Searches the provider for every keyword in the set, source language
    /// first, and aggregates the hits into one ordered list capped at
    /// `max_results` in total.
    ///
    /// Quota exhaustion and provider-envelope errors abort the whole loop;
    /// transport failures skip the keyword.
    pub async fn search_videos(
        &self,
        keywords: &KeywordSet,
        max_results: u32,
        relevance_language: &str,
    ) -> Result<Vec<VideoResult>, SearchError> {
        let published_after =
            Utc::now() - chrono::Duration::days(self.config.recency_window_days);
        let mut videos = Vec::new();

        for keyword in keywords.all_keywords() {
            let query = SearchQuery {
                keyword: keyword.to_string(),
                max_results,
                filters: Some(SearchFilters {
                    region: self.config.search_region.clone(),
                    relevance_language: relevance_language.to_string(),
                    published_after,
                }),
            };

            match self.search_keyword(&query).await {
                Ok(items) => videos.extend(items),
                Err(SearchError::Transport(message)) => {
                    log::warn!("video search for '{keyword}' failed: {message}");
                }
                Err(err) => return Err(err),
            }
        }

        videos.truncate(max_results as usize);
        Ok(videos)
    }

    /// Runs the filtered query, retrying once with every filter removed when
    /// it comes back empty.
    async fn search_keyword(&self, query: &SearchQuery) -> Result<Vec<VideoResult>, SearchError> {
        let items = self.provider.search(query).await?;
        if !items.is_empty() {
            return Ok(items);
        }

        log::info!(
            "no videos found for '{}' with filters, retrying unrestricted",
            query.keyword
        );
        let unrestricted = SearchQuery {
            filters: None,
            ..query.clone()
        };
        self.provider.search(&unrestricted).await
    }
}
