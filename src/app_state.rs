use std::sync::Arc;

use crate::{
    config::Config,
    services::{
        ChatClient, DiagnosticSink, KeywordService, LinkService, LogDiagnosticSink,
        OpenAiChatClient, QuizService, VideoFinder, VideoSearchProvider, YouTubeSearchProvider,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub keyword_service: Arc<KeywordService>,
    pub quiz_service: Arc<QuizService>,
    pub link_service: Arc<LinkService>,
    pub video_finder: Arc<VideoFinder>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let chat_client: Arc<dyn ChatClient> = Arc::new(OpenAiChatClient::new(&config));
        let provider: Arc<dyn VideoSearchProvider> = Arc::new(YouTubeSearchProvider::new(&config));
        let diagnostics: Arc<dyn DiagnosticSink> = Arc::new(LogDiagnosticSink);

        Self::with_components(config, chat_client, provider, diagnostics)
    }

    /// Wires the services from explicit collaborators; tests inject fakes
    /// here instead of the real clients.
    pub fn with_components(
        config: Config,
        chat_client: Arc<dyn ChatClient>,
        provider: Arc<dyn VideoSearchProvider>,
        diagnostics: Arc<dyn DiagnosticSink>,
    ) -> Self {
        let config = Arc::new(config);

        Self {
            keyword_service: Arc::new(KeywordService::new(
                chat_client.clone(),
                diagnostics.clone(),
                config.clone(),
            )),
            quiz_service: Arc::new(QuizService::new(
                chat_client.clone(),
                diagnostics,
                config.clone(),
            )),
            link_service: Arc::new(LinkService::new(chat_client, config.clone())),
            video_finder: Arc::new(VideoFinder::new(provider, config.clone())),
            config,
        }
    }
}
