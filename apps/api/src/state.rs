use std::sync::Arc;

use crate::assistant::CareerAssistant;
use crate::config::Config;
use crate::matching::catalog::JobCatalog;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Loaded once at startup; never mutated afterwards.
    pub catalog: Arc<JobCatalog>,
    /// Pluggable assistant backend. Default: Gemini.
    pub assistant: Arc<dyn CareerAssistant>,
    pub config: Config,
}
