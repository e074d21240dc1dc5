pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::assistant::handlers as assistant_handlers;
use crate::matching::handlers as matching_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Résumé → recommendations
        .route(
            "/extract_skills",
            post(matching_handlers::handle_extract_skills),
        )
        .route(
            "/api/v1/recommendations",
            post(matching_handlers::handle_extract_skills),
        )
        // Career assistant
        .route("/chat", post(assistant_handlers::handle_chat))
        .layer(DefaultBodyLimit::max(upload_limit))
        .with_state(state)
}
