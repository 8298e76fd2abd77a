use std::collections::BTreeMap;
use std::sync::Arc;

use crate::config::Config;
use crate::constants::prompts;
use crate::errors::AppResult;
use crate::services::chat_client::{ChatClient, ChatMessage, ChatRequest};

/// Builds one YouTube search link per configured language from a content
/// title and description, using a model-produced search-optimized phrase.
pub struct LinkService {
    chat: Arc<dyn ChatClient>,
    config: Arc<Config>,
}

impl LinkService {
    pub fn new(chat: Arc<dyn ChatClient>, config: Arc<Config>) -> Self {
        Self { chat, config }
    }

    /// One chat call per language, strictly sequential. Any failure fails
    /// the whole request.
    pub async fn youtube_links(
        &self,
        title: &str,
        description: &str,
    ) -> AppResult<BTreeMap<String, String>> {
        let languages = [
            (
                self.config.source_language.clone(),
                self.config.source_language_name.clone(),
            ),
            (
                self.config.target_language.clone(),
                self.config.target_language_name.clone(),
            ),
        ];

        let mut links = BTreeMap::new();
        for (code, name) in languages {
            let request = ChatRequest {
                model: self.config.link_model.clone(),
                messages: vec![
                    ChatMessage::system(prompts::SEARCH_PHRASE_SYSTEM_PROMPT),
                    ChatMessage::user(prompts::search_phrase_prompt(title, description, &name)),
                ],
                temperature: None,
                max_tokens: None,
            };

            let phrase = self.chat.complete(request).await?;
            log::debug!("search phrase for '{code}': {phrase}");
            links.insert(code, search_url(&phrase));
        }

        Ok(links)
    }
}

/// Turns a search phrase into a YouTube results URL, joining terms with `+`.
fn search_url(phrase: &str) -> String {
    let query = phrase.trim().replace(' ', "+");
    format!("https://www.youtube.com/results?search_query={query}")
}
