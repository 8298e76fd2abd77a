pub mod chat_client;
pub mod diagnostics;
pub mod keyword_service;
pub mod link_service;
pub mod normalizer;
pub mod pdf;
pub mod quiz_service;
pub mod video_search;

pub use chat_client::{ChatClient, ChatMessage, ChatRequest, ChatRole, OpenAiChatClient};
pub use diagnostics::{DiagnosticSink, LogDiagnosticSink};
pub use keyword_service::KeywordService;
pub use link_service::LinkService;
pub use quiz_service::QuizService;
pub use video_search::{
    SearchError, SearchFilters, SearchQuery, VideoFinder, VideoSearchProvider,
    YouTubeSearchProvider,
};
