mod assistant;
mod config;
mod errors;
mod matching;
mod models;
mod routes;
mod state;
#[cfg(test)]
mod test_utils;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::assistant::GeminiAssistant;
use crate::config::Config;
use crate::matching::catalog::JobCatalog;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting SkillMatch API v{}", env!("CARGO_PKG_VERSION"));

    // Load the job catalog once; a missing or corrupt catalog is fatal.
    let catalog = JobCatalog::load(&config.jobs_catalog_path)?;
    if catalog.is_empty() {
        warn!("Job catalog is empty; every upload will return no jobs");
    }

    // Initialize career assistant
    let assistant =
        GeminiAssistant::new(config.gemini_api_key.clone(), config.gemini_model.clone())?;
    info!("Career assistant initialized (model: {})", assistant.model());

    let state = AppState {
        catalog: Arc::new(catalog),
        assistant: Arc::new(assistant),
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
