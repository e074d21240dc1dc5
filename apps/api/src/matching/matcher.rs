//! Matcher — scores catalog jobs by token overlap with the candidate's skills.
//!
//! Algorithm:
//! 1. candidate_tokens = ∪ tokenize(skill)
//! 2. matched = candidate_tokens ∩ job.tokens
//! 3. Skip jobs with no overlap (never zero-scored)
//! 4. match_percentage = round(|matched| / |job.tokens| × 100, 2)
//! 5. Stable sort by percentage descending; ties keep catalog order

use std::cmp::Ordering;
use std::collections::BTreeSet;

use serde::Serialize;

use crate::matching::catalog::JobCatalog;
use crate::matching::tokenizer::token_set;
use crate::models::job::JobPosting;

/// One recommended job.
#[derive(Debug, Clone, Serialize)]
pub struct MatchResult {
    pub job: JobPosting,
    /// 0 < match_percentage ≤ 100, two decimal places.
    pub match_percentage: f64,
    /// Serialized sorted for stable output; order carries no meaning.
    pub matched_tokens: BTreeSet<String>,
}

/// Scores every job in `catalog` against the candidate's skills.
pub fn match_jobs<S: AsRef<str>>(candidate_skills: &[S], catalog: &JobCatalog) -> Vec<MatchResult> {
    let candidate_tokens = token_set(candidate_skills.iter().map(|s| s.as_ref()));
    if candidate_tokens.is_empty() {
        return Vec::new();
    }

    let mut results: Vec<MatchResult> = catalog
        .jobs()
        .iter()
        .filter_map(|job| {
            let matched: BTreeSet<String> = job
                .tokens
                .intersection(&candidate_tokens)
                .cloned()
                .collect();
            // Empty job token sets fall out here too, before any division.
            if matched.is_empty() {
                return None;
            }
            Some(MatchResult {
                job: job.posting.clone(),
                match_percentage: match_percentage(matched.len(), job.tokens.len()),
                matched_tokens: matched,
            })
        })
        .collect();

    // `sort_by` is stable.
    results.sort_by(|a, b| {
        b.match_percentage
            .partial_cmp(&a.match_percentage)
            .unwrap_or(Ordering::Equal)
    });

    results
}

/// `matched / total × 100`, rounded to two decimals.
///
/// Rounds the exact binary value half-to-even: 1/32 → 3.125 → 3.12.
pub fn match_percentage(matched: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let raw = matched as f64 / total as f64 * 100.0;
    format!("{raw:.2}").parse().unwrap_or(raw)
}
