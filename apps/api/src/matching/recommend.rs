//! Recommendation pipeline: document bytes → skills → ranked jobs + search link.

use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::catalog::JobCatalog;
use crate::matching::matcher::{match_jobs, MatchResult};
use crate::matching::query::classify;
use crate::matching::skill_extractor::extract_skills_from_pdf;

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub upload_id: Uuid,
    pub skills: Vec<String>,
    pub jobs: Vec<MatchResult>,
    pub job_search_url: String,
    pub show_apply_button: bool,
    pub job_types: Vec<String>,
    pub generated_at: DateTime<Utc>,
}

/// Runs the full pipeline for one uploaded document.
///
/// PDF decoding is CPU-bound and runs on the blocking pool; `Bytes` moves into
/// the closure without copying the upload.
pub async fn recommend(
    upload_id: Uuid,
    document: Bytes,
    catalog: &JobCatalog,
) -> Result<RecommendationResponse, AppError> {
    let skills = tokio::task::spawn_blocking(move || extract_skills_from_pdf(&document))
        .await
        .map_err(|e| {
            AppError::Internal(anyhow::anyhow!("spawn_blocking failed in extraction: {e}"))
        })??;

    Ok(recommend_for_skills(upload_id, skills, catalog))
}

/// Matching and classification over an already-extracted skill list.
/// An empty skill list is valid and yields no jobs.
pub fn recommend_for_skills(
    upload_id: Uuid,
    skills: Vec<String>,
    catalog: &JobCatalog,
) -> RecommendationResponse {
    let jobs = match_jobs(&skills, catalog);
    let query = classify(&skills);

    info!(
        %upload_id,
        skills = skills.len(),
        matched_jobs = jobs.len(),
        catalog_size = catalog.len(),
        technical = query.show_apply_button,
        "Recommendations computed"
    );

    RecommendationResponse {
        upload_id,
        skills,
        jobs,
        job_search_url: query.url,
        show_apply_button: query.show_apply_button,
        job_types: query.job_types,
        generated_at: Utc::now(),
    }
}
