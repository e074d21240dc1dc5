use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ChatStatus {
    Success,
    Error,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub status: ChatStatus,
    pub message: String,
}

/// POST /chat
///
/// Assistant failures are reported in the body with `status: "error"`;
/// the HTTP status stays 200.
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Json<ChatResponse> {
    match state.assistant.ask(&request.message).await {
        Ok(reply) => Json(ChatResponse {
            status: ChatStatus::Success,
            message: reply,
        }),
        Err(e) => {
            warn!("Career assistant call failed: {e}");
            Json(ChatResponse {
                status: ChatStatus::Error,
                message: e.to_string(),
            })
        }
    }
}
