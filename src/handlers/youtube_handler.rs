use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::{app_state::AppState, errors::AppError, models::dto::YouTubeLinksRequest};

#[post("/youtube-links")]
pub async fn youtube_links(
    state: web::Data<AppState>,
    request: web::Json<YouTubeLinksRequest>,
) -> Result<HttpResponse, AppError> {
    request.validate()?;

    let links = state
        .link_service
        .youtube_links(&request.title, &request.description)
        .await?;
    Ok(HttpResponse::Ok().json(links))
}
