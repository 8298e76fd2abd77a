use std::sync::Mutex;

use crate::services::DiagnosticSink;

/// Diagnostic sink that records every capture for assertions.
#[derive(Default)]
pub struct CollectingSink {
    captures: Mutex<Vec<(String, String)>>,
}

impl CollectingSink {
    pub fn captures(&self) -> Vec<(String, String)> {
        self.captures.lock().unwrap().clone()
    }
}

impl DiagnosticSink for CollectingSink {
    fn capture(&self, context: &str, raw: &str) {
        self.captures
            .lock()
            .unwrap()
            .push((context.to_string(), raw.to_string()));
    }
}

pub mod fixtures {
    use chrono::{TimeZone, Utc};

    use crate::models::domain::VideoResult;

    /// Creates a video result with a fixed channel and timestamp.
    pub fn video(title: &str) -> VideoResult {
        VideoResult {
            title: title.to_string(),
            channel: "Test Channel".to_string(),
            published_at: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
            url: "https://www.youtube.com/watch?v=abc123".to_string(),
        }
    }

    /// Serialized quiz reply with `count` minimal short-answer questions.
    pub fn quiz_reply_with_questions(count: usize) -> String {
        let questions: Vec<String> = (0..count)
            .map(|i| {
                format!(
                    r#"{{"question_id": "q-{i}", "type": "short_answer", "level": "basic",
                        "question": "Question {i}?", "correct_answers": ["answer"]}}"#
                )
            })
            .collect();

        format!(
            r#"{{"title": "Generated Quiz", "description": "About the material",
                "questions": [{}]}}"#,
            questions.join(",")
        )
    }
}
