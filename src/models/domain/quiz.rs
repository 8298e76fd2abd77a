use serde::{Deserialize, Serialize};

use crate::models::domain::quiz_question::QuizQuestion;

/// Hard cap applied to the description after generation.
pub const MAX_DESCRIPTION_CHARS: usize = 200;

/// A generated quiz document. Built fresh per request, serialized straight
/// into the response and discarded; there is no update path.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Quiz {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub questions: Vec<QuizQuestion>,
}

impl Quiz {
    /// Truncates the description to `max_chars` characters. Character-based
    /// so a multi-byte boundary can never split.
    pub fn truncate_description(&mut self, max_chars: usize) {
        if let Some(description) = &self.description {
            if description.chars().count() > max_chars {
                self.description = Some(description.chars().take(max_chars).collect());
            }
        }
    }
}
