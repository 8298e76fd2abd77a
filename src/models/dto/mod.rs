pub mod request;
pub mod response;

pub use request::{CurateRequest, YouTubeLinksRequest};
pub use response::{CurateResponse, LocalizedVideos};
