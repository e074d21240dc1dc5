//! Axum route handlers for résumé upload and job recommendations.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::recommend::{recommend, RecommendationResponse};
use crate::state::AppState;

const FILE_FIELD: &str = "file";

/// POST /extract_skills
/// POST /api/v1/recommendations
///
/// Accepts a multipart upload with a `file` field holding a résumé PDF.
/// The document is only held in memory for the duration of the request.
pub async fn handle_extract_skills(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<RecommendationResponse>, AppError> {
    let upload_id = Uuid::new_v4();
    let (file_name, document) = read_document(multipart).await?;

    info!(
        %upload_id,
        file_name = file_name.as_deref().unwrap_or("<unnamed>"),
        bytes = document.len(),
        "Résumé uploaded"
    );

    let response = recommend(upload_id, document, &state.catalog).await?;
    Ok(Json(response))
}

/// Pulls the `file` field out of the multipart body. Other fields are ignored.
async fn read_document(mut multipart: Multipart) -> Result<(Option<String>, Bytes), AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let file_name = field.file_name().map(String::from);
        let data = field.bytes().await?;
        if data.is_empty() {
            return Err(AppError::Validation("Uploaded file is empty".to_string()));
        }
        return Ok((file_name, data));
    }

    Err(AppError::Validation("No file uploaded".to_string()))
}
