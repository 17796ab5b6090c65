//! Bracket reference extraction.
//!
//! Finds every non-overlapping `[[...]]` span in free text and returns the
//! inner text. The span is non-greedy, so `[[a]][[b]]` yields two references.
//! Empty brackets yield an empty reference; unterminated ones yield nothing.

use once_cell::sync::Lazy;
use regex::Regex;

static REFERENCE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[\[(.*?)\]\]").expect("reference pattern is valid")
});

/// Extract bracketed item references in order of appearance.
///
/// Duplicates and empty strings are preserved.
pub fn extract_references(text: &str) -> Vec<String> {
    let references: Vec<String> = REFERENCE_PATTERN
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect();

    tracing::debug!("Extracted {} references", references.len());
    references
}
