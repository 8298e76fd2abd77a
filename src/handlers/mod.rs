pub mod curate_handler;
pub mod health_handler;
pub mod quiz_handler;
pub mod youtube_handler;

pub use curate_handler::curate;
pub use health_handler::health_check;
pub use quiz_handler::generate_quiz;
pub use youtube_handler::youtube_links;
