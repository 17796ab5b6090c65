use serde::{Deserialize, Serialize};

/// Pairing of an extracted reference to the catalog name it resolved to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Raw text found between the brackets
    pub candidate: String,

    /// Best-matching catalog name
    pub item_name: String,

    /// Similarity score (0.0 - 1.0)
    pub score: f64,
}

impl MatchResult {
    pub fn new(candidate: impl Into<String>, item_name: impl Into<String>, score: f64) -> Self {
        Self {
            candidate: candidate.into(),
            item_name: item_name.into(),
            score,
        }
    }

    /// Check if the reference was typed exactly (ignoring case/whitespace)
    pub fn is_exact(&self) -> bool {
        self.score >= 1.0
    }

    /// Get display string for logging
    pub fn display(&self) -> String {
        format!("[[{}]] → {} ({:.2})", self.candidate, self.item_name, self.score)
    }
}
