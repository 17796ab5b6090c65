use std::collections::HashMap;

use crate::ranking::{normalize, Ranker};

/// Sørensen–Dice coefficient over character bigrams.
///
/// Whitespace is ignored and comparison is case-insensitive, so
/// `"tesla bolt"` scores 1.0 against `"Tesla Bolt"`.
pub struct DiceRanker;

impl DiceRanker {
    pub fn new() -> Self {
        Self
    }

    fn prepare(text: &str) -> Vec<char> {
        normalize(text).chars().filter(|c| !c.is_whitespace()).collect()
    }
}

impl Default for DiceRanker {
    fn default() -> Self {
        Self::new()
    }
}

impl Ranker for DiceRanker {
    fn similarity(&self, query: &str, candidate: &str) -> f64 {
        let a = Self::prepare(query);
        let b = Self::prepare(candidate);

        if a == b {
            return 1.0;
        }
        if a.len() < 2 || b.len() < 2 {
            return 0.0;
        }

        let mut bigrams: HashMap<(char, char), usize> = HashMap::new();
        for pair in a.windows(2) {
            *bigrams.entry((pair[0], pair[1])).or_insert(0) += 1;
        }

        let mut shared = 0usize;
        for pair in b.windows(2) {
            if let Some(count) = bigrams.get_mut(&(pair[0], pair[1])) {
                if *count > 0 {
                    *count -= 1;
                    shared += 1;
                }
            }
        }

        (2.0 * shared as f64) / ((a.len() - 1) + (b.len() - 1)) as f64
    }

    fn name(&self) -> &str {
        "dice"
    }
}
