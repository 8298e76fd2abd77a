use std::sync::Arc;

use crate::config::Config;
use crate::constants::prompts;
use crate::errors::{AppError, AppResult};
use crate::models::domain::quiz::{Quiz, MAX_DESCRIPTION_CHARS};
use crate::services::chat_client::{ChatClient, ChatMessage, ChatRequest};
use crate::services::diagnostics::DiagnosticSink;
use crate::services::normalizer;

/// Generates a gamified quiz document from extracted PDF text.
pub struct QuizService {
    chat: Arc<dyn ChatClient>,
    diagnostics: Arc<dyn DiagnosticSink>,
    config: Arc<Config>,
}

impl QuizService {
    pub fn new(
        chat: Arc<dyn ChatClient>,
        diagnostics: Arc<dyn DiagnosticSink>,
        config: Arc<Config>,
    ) -> Self {
        Self {
            chat,
            diagnostics,
            config,
        }
    }

    /// Builds the fixed-shape quiz prompt around `pdf_text`, sends it with an
    /// elevated reply-length budget and parses the repaired JSON reply.
    /// Unlike keyword extraction, a reply that cannot be parsed is fatal.
    ///
    /// The question count and per-type distribution are not enforced; the
    /// actual count is logged and the document returned as generated.
    pub async fn generate_quiz(&self, pdf_text: &str) -> AppResult<Quiz> {
        if pdf_text.trim().is_empty() {
            return Err(AppError::GenerationFailed(
                "no study material to generate a quiz from".into(),
            ));
        }

        let prompt = prompts::quiz_generation_prompt(pdf_text);
        log::debug!("sending quiz prompt of {} characters", prompt.len());

        let request = ChatRequest {
            model: self.config.quiz_model.clone(),
            messages: vec![
                ChatMessage::system(prompts::QUIZ_SYSTEM_PROMPT),
                ChatMessage::user(prompt),
            ],
            temperature: Some(0.7),
            max_tokens: Some(self.config.quiz_max_tokens),
        };
        let reply = self.chat.complete(request).await?;

        let outcome = normalizer::normalize_and_parse(extract_json_body(&reply));
        let value = match outcome.value {
            Some(value) => value,
            None => {
                self.diagnostics.capture("quiz generation", &reply);
                return Err(AppError::GenerationFailed(
                    "the generated quiz document could not be parsed".into(),
                ));
            }
        };

        let mut quiz: Quiz = serde_json::from_value(value).map_err(|err| {
            self.diagnostics.capture("quiz generation", &reply);
            AppError::GenerationFailed(format!(
                "the generated quiz document did not match the expected shape: {err}"
            ))
        })?;

        quiz.truncate_description(MAX_DESCRIPTION_CHARS);
        log::info!(
            "generated quiz '{}' with {} questions",
            quiz.title,
            quiz.questions.len()
        );
        Ok(quiz)
    }
}

/// Slices the reply to the span between the first `{` and the last `}`,
/// dropping any prose the model added around the JSON body.
fn extract_json_body(reply: &str) -> &str {
    match (reply.find('{'), reply.rfind('}')) {
        (Some(first), Some(last)) if first <= last => &reply[first..=last],
        _ => reply,
    }
}
