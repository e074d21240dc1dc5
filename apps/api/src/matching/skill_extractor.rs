//! Skill Extractor — pulls a flat skill list out of a résumé PDF.
//!
//! The skills section is located heuristically: the first line containing
//! "skills" (case-insensitive) opens the section, and the first blank line after
//! it closes the section. Lines in between are comma-separated skill lists.
//! A section split across paragraphs is only read up to its first blank line.

use std::panic::{self, AssertUnwindSafe};

use thiserror::Error;
use tracing::debug;

const SECTION_MARKER: &str = "skills";

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("document is empty")]
    Empty,

    #[error("could not read PDF: {0}")]
    Pdf(String),
}

/// Scanner state while walking document lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// No marker line seen yet.
    Searching,
    /// Inside the skills block; a blank line ends the scan.
    InSection,
}

/// Extracts skills from raw PDF bytes.
///
/// CPU-bound; async callers should run this inside `spawn_blocking`.
pub fn extract_skills_from_pdf(bytes: &[u8]) -> Result<Vec<String>, ExtractionError> {
    let pages = extract_pages(bytes)?;
    debug!(pages = pages.len(), "PDF text extracted");
    Ok(extract_skills_from_pages(&pages))
}

/// Joins page texts with a single newline and scans for skills.
///
/// pdf-extract opens every page with blank lines; those page-boundary newlines
/// are stripped so a skills block can continue onto the next page. Pages with
/// no text are skipped entirely.
pub fn extract_skills_from_pages<S: AsRef<str>>(pages: &[S]) -> Vec<String> {
    let mut text = String::new();
    for page in pages {
        let page = page.as_ref().trim_matches(|c: char| c == '\n' || c == '\r');
        if page.trim().is_empty() {
            continue;
        }
        text.push_str(page);
        text.push('\n');
    }
    extract_skills_from_text(&text)
}

/// Runs the two-state section scan over already-extracted text.
pub fn extract_skills_from_text(text: &str) -> Vec<String> {
    let mut skills = Vec::new();
    let mut state = ScanState::Searching;

    for line in text.lines().map(str::trim) {
        match state {
            ScanState::Searching => {
                if line.to_lowercase().contains(SECTION_MARKER) {
                    state = ScanState::InSection;
                }
            }
            ScanState::InSection => {
                if line.is_empty() {
                    break;
                }
                skills.extend(
                    line.split(',')
                        .map(str::trim)
                        .filter(|s| !s.is_empty())
                        .map(String::from),
                );
            }
        }
    }

    skills
}

/// Decodes the PDF page by page. Decoder panics on malformed input are
/// reported as `ExtractionError::Pdf` rather than unwinding into the caller.
fn extract_pages(bytes: &[u8]) -> Result<Vec<String>, ExtractionError> {
    if bytes.is_empty() {
        return Err(ExtractionError::Empty);
    }

    match panic::catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem_by_pages(bytes)
    })) {
        Ok(Ok(pages)) => Ok(pages),
        Ok(Err(e)) => Err(ExtractionError::Pdf(e.to_string())),
        Err(_) => Err(ExtractionError::Pdf(
            "PDF decoder failed on malformed input".to_string(),
        )),
    }
}
