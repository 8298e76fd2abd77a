use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{CurateRequest, CurateResponse, LocalizedVideos},
};

#[post("/api/curate")]
pub async fn curate(
    state: web::Data<AppState>,
    request: web::Json<CurateRequest>,
) -> Result<HttpResponse, AppError> {
    request.validate()?;

    let keywords = state
        .keyword_service
        .extract_keywords(&request.text, state.config.max_keywords)
        .await;

    let max_results = state.config.max_video_results;
    let source_language = state
        .video_finder
        .search_videos(&keywords, max_results, &state.config.source_language)
        .await?;
    let target_language = state
        .video_finder
        .search_videos(&keywords, max_results, &state.config.target_language)
        .await?;

    Ok(HttpResponse::Ok().json(CurateResponse {
        keywords,
        videos: LocalizedVideos {
            source_language,
            target_language,
        },
    }))
}
