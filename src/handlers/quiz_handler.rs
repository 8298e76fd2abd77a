use actix_multipart::form::{bytes::Bytes, MultipartForm};
use actix_web::{post, web, HttpResponse};

use crate::{app_state::AppState, errors::AppError, services::pdf};

#[derive(Debug, MultipartForm)]
pub struct QuizUpload {
    file: Bytes,
}

#[post("/generate-quiz")]
pub async fn generate_quiz(
    state: web::Data<AppState>,
    MultipartForm(upload): MultipartForm<QuizUpload>,
) -> Result<HttpResponse, AppError> {
    let file_name = upload.file.file_name.clone().unwrap_or_default();
    log::info!(
        "received quiz upload '{file_name}' ({} bytes)",
        upload.file.data.len()
    );

    if !file_name.to_lowercase().ends_with(".pdf") {
        return Err(AppError::ValidationError(
            "the uploaded file must be a PDF".into(),
        ));
    }

    let text = pdf::extract_text(&upload.file.data);
    if text.trim().is_empty() {
        return Err(AppError::UnreadableDocument(
            "no text could be extracted from the PDF".into(),
        ));
    }
    log::debug!("extracted {} characters from '{file_name}'", text.len());

    let quiz = state.quiz_service.generate_quiz(&text).await?;
    Ok(HttpResponse::Ok().json(quiz))
}
