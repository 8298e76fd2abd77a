use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One search hit from the video provider, projected down to the fields the
/// service returns. Constructed once per provider item and never mutated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoResult {
    pub title: String,
    pub channel: String,
    pub published_at: DateTime<Utc>,
    pub url: String,
}
