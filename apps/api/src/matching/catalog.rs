//! Job Catalog — the static set of postings every résumé is matched against.
//!
//! Loaded once at startup from a JSON array and shared read-only behind an `Arc`.
//! Each posting is tokenized at load time so requests only pay for intersection.

use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::matching::tokenizer::{token_set, TokenSet};
use crate::models::job::JobPosting;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read job catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("job catalog is not a valid JSON list of postings: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// A posting together with the token set of all its searchable fields.
#[derive(Debug, Clone)]
pub struct IndexedJob {
    pub posting: JobPosting,
    pub tokens: TokenSet,
}

impl IndexedJob {
    pub fn new(posting: JobPosting) -> Self {
        let tokens = token_set(posting.searchable_text());
        Self { posting, tokens }
    }
}

/// Immutable, ordered job catalog. Order is the source file order.
#[derive(Debug, Clone, Default)]
pub struct JobCatalog {
    jobs: Vec<IndexedJob>,
}

impl JobCatalog {
    pub fn new(postings: Vec<JobPosting>) -> Self {
        Self {
            jobs: postings.into_iter().map(IndexedJob::new).collect(),
        }
    }

    /// Reads and parses the catalog file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let catalog = Self::from_json(&raw)?;
        info!(
            jobs = catalog.len(),
            path = %path.display(),
            "Job catalog loaded"
        );
        Ok(catalog)
    }

    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let postings: Vec<JobPosting> = serde_json::from_str(raw)?;
        Ok(Self::new(postings))
    }

    pub fn jobs(&self) -> &[IndexedJob] {
        &self.jobs
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"[
        {
            "job_title": "Backend Developer",
            "job_description": "Build APIs in Python",
            "experience_level": "Mid",
            "location": "Remote",
            "company_name": "Acme",
            "skills": ["Python", "SQL"]
        },
        {"job_title": "Sales Associate"}
    ]"#;

    #[test]
    fn test_from_json_preserves_order_and_indexes_tokens() {
        let catalog = JobCatalog::from_json(SAMPLE).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.jobs()[0].posting.job_title, "Backend Developer");
        assert_eq!(catalog.jobs()[1].posting.job_title, "Sales Associate");

        let tokens = &catalog.jobs()[0].tokens;
        for t in ["backend", "developer", "apis", "python", "mid", "remote", "acme", "sql"] {
            assert!(tokens.contains(t), "missing token {t}");
        }
        // "Python" appears twice but is counted once
        assert_eq!(tokens.len(), 10);
    }

    #[test]
    fn test_empty_array_is_valid() {
        let catalog = JobCatalog::from_json("[]").unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        assert!(matches!(
            JobCatalog::from_json("{\"job_title\": \"not a list\"}"),
            Err(CatalogError::Malformed(_))
        ));
        assert!(matches!(
            JobCatalog::from_json("[{\"job_title\": "),
            Err(CatalogError::Malformed(_))
        ));
    }

    #[test]
    fn test_load_reads_file_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let catalog = JobCatalog::load(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("jobs.json");

        let err = JobCatalog::load(&missing).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
        assert!(err.to_string().contains("jobs.json"));
    }
}
