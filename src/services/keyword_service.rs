use std::sync::Arc;

use crate::config::Config;
use crate::constants::prompts;
use crate::models::domain::KeywordSet;
use crate::services::chat_client::{ChatClient, ChatMessage, ChatRequest};
use crate::services::diagnostics::DiagnosticSink;
use crate::services::normalizer;

/// Chained extract-then-translate keyword extraction.
pub struct KeywordService {
    chat: Arc<dyn ChatClient>,
    diagnostics: Arc<dyn DiagnosticSink>,
    config: Arc<Config>,
}

impl KeywordService {
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

    /// Extracts up to `max_keywords` source-language keywords from `text`,
    /// then translates the list into the target language.
    ///
    /// Never fails the request pipeline: a failed extraction yields an empty
    /// set, a failed translation keeps the extracted half. Causes are logged.
    pub async fn extract_keywords(&self, text: &str, max_keywords: usize) -> KeywordSet {
        let extraction = ChatRequest {
            model: self.config.keyword_model.clone(),
            messages: vec![
                ChatMessage::system(prompts::KEYWORD_SYSTEM_PROMPT),
                ChatMessage::user(prompts::keyword_extraction_prompt(
                    text,
                    max_keywords,
                    &self.config.source_language_name,
                )),
            ],
            temperature: Some(0.3),
            max_tokens: None,
        };

        let source_language = match self.chat.complete(extraction).await {
            Ok(reply) => self.parse_keywords(&reply, "keyword extraction"),
            Err(err) => {
                log::error!("keyword extraction failed: {err}");
                return KeywordSet::default();
            }
        };

        let serialized = serde_json::json!(source_language).to_string();
        let translation = ChatRequest {
            model: self.config.keyword_model.clone(),
            messages: vec![
                ChatMessage::system(prompts::TRANSLATION_SYSTEM_PROMPT),
                ChatMessage::user(prompts::keyword_translation_prompt(
                    &serialized,
                    &self.config.target_language_name,
                )),
            ],
            temperature: Some(0.2),
            max_tokens: None,
        };

        let target_language = match self.chat.complete(translation).await {
            Ok(reply) => self.parse_keywords(&reply, "keyword translation"),
            Err(err) => {
                log::error!("keyword translation failed: {err}");
                Vec::new()
            }
        };

        KeywordSet {
            source_language,
            target_language,
        }
    }

    fn parse_keywords(&self, reply: &str, context: &str) -> Vec<String> {
        let (keywords, degraded) = normalizer::keyword_list(reply);
        if degraded {
            log::warn!("{context} reply was not a JSON list, used line-split fallback");
            self.diagnostics.capture(context, reply);
        }
        keywords
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use crate::services::chat_client::MockChatClient;
    use crate::test_utils::CollectingSink;
    use mockall::Sequence;

    fn service(chat: MockChatClient, sink: Arc<CollectingSink>) -> KeywordService {
        KeywordService::new(Arc::new(chat), sink, Arc::new(Config::test_config()))
    }

    #[tokio::test]
    async fn chains_extraction_and_translation() {
        let mut chat = MockChatClient::new();
        let mut seq = Sequence::new();

        chat.expect_complete()
            .times(1)
            .in_sequence(&mut seq)
            .withf(|request| {
                request.temperature == Some(0.3)
                    && request.messages[1].content.contains("loops in python")
            })
            .returning(|_| Ok(r#"["laço", "função"]"#.to_string()));
        chat.expect_complete()
            .times(1)
            .in_sequence(&mut seq)
            .withf(|request| {
                // The translation prompt embeds the serialized extracted list.
                request.temperature == Some(0.2)
                    && request.messages[1].content.contains(r#"["laço","função"]"#)
            })
            .returning(|_| Ok(r#"["loop", "function"]"#.to_string()));

        let sink = Arc::new(CollectingSink::default());
        let keywords = service(chat, sink.clone())
            .extract_keywords("loops in python", 5)
            .await;

        assert_eq!(keywords.source_language, vec!["laço", "função"]);
        assert_eq!(keywords.target_language, vec!["loop", "function"]);
        assert!(sink.captures().is_empty());
    }

    #[tokio::test]
    async fn translation_failure_keeps_extracted_half() {
        let mut chat = MockChatClient::new();
        let mut seq = Sequence::new();

        chat.expect_complete()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(r#"["laço", "função"]"#.to_string()));
        chat.expect_complete()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Err(AppError::GenerationFailed("timeout".into())));

        let sink = Arc::new(CollectingSink::default());
        let keywords = service(chat, sink).extract_keywords("loops", 5).await;

        assert_eq!(keywords.source_language, vec!["laço", "função"]);
        assert!(keywords.target_language.is_empty());
    }

    #[tokio::test]
    async fn extraction_failure_yields_empty_set_without_translation_call() {
        let mut chat = MockChatClient::new();

        chat.expect_complete()
            .times(1)
            .returning(|_| Err(AppError::GenerationFailed("service unavailable".into())));

        let sink = Arc::new(CollectingSink::default());
        let keywords = service(chat, sink).extract_keywords("loops", 5).await;

        assert!(keywords.is_empty());
    }

    #[tokio::test]
    async fn degraded_replies_go_through_fallback_and_sink() {
        let mut chat = MockChatClient::new();
        let mut seq = Sequence::new();

        chat.expect_complete()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok("- laço\n- função".to_string()));
        chat.expect_complete()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(r#"["loop", "function"]"#.to_string()));

        let sink = Arc::new(CollectingSink::default());
        let keywords = service(chat, sink.clone()).extract_keywords("loops", 5).await;

        assert_eq!(keywords.source_language, vec!["laço", "função"]);
        assert_eq!(sink.captures().len(), 1);
        assert_eq!(sink.captures()[0].0, "keyword extraction");
    }
}
