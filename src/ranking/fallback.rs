use rapidfuzz::distance::jaro_winkler;

use crate::ranking::{normalize, Ranker};

/// Rapidfuzz Jaro-Winkler ranker, favours shared prefixes
pub struct JaroWinklerRanker;

impl JaroWinklerRanker {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JaroWinklerRanker {
    fn default() -> Self {
        Self::new()
    }
}

impl Ranker for JaroWinklerRanker {
    fn similarity(&self, query: &str, candidate: &str) -> f64 {
        let query_lower = normalize(query);
        let name_lower = normalize(candidate);

        // Jaro-Winkler similarity (0.0 - 1.0)
        jaro_winkler::normalized_similarity(query_lower.chars(), name_lower.chars())
    }

    fn name(&self) -> &str {
        "jaro-winkler"
    }
}
