pub mod dice;
pub mod fallback;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use crate::error::ItemBotError;

pub use dice::DiceRanker;
pub use fallback::JaroWinklerRanker;

/// Trait for string similarity implementations
pub trait Ranker: Send + Sync {
    /// Similarity of `query` to `candidate` in [0.0, 1.0], 1.0 meaning identical
    fn similarity(&self, query: &str, candidate: &str) -> f64;

    /// Get ranker name for logging
    fn name(&self) -> &str;
}

/// Candidate name with similarity score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedCandidate<'a> {
    pub name: &'a str,
    pub score: f64,
}

impl<'a> RankedCandidate<'a> {
    pub fn new(name: &'a str, score: f64) -> Self {
        Self { name, score }
    }
}

/// Highest-scoring name. Ties go to the first name in iteration order.
pub fn best_match<'a>(
    ranker: &dyn Ranker,
    query: &str,
    names: impl IntoIterator<Item = &'a str>,
) -> Option<RankedCandidate<'a>> {
    let mut best: Option<RankedCandidate<'a>> = None;

    for name in names {
        let score = ranker.similarity(query, name);
        match best {
            Some(ref current) if score <= current.score => {}
            _ => best = Some(RankedCandidate::new(name, score)),
        }
    }

    best
}

/// All names sorted by score descending; equal scores keep iteration order
pub fn rank<'a>(
    ranker: &dyn Ranker,
    query: &str,
    names: impl IntoIterator<Item = &'a str>,
) -> Vec<RankedCandidate<'a>> {
    let mut ranked: Vec<RankedCandidate<'a>> = names
        .into_iter()
        .map(|name| RankedCandidate::new(name, ranker.similarity(query, name)))
        .collect();

    // Sort by score descending (stable)
    ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));

    ranked
}

/// NFC + lowercase, shared by every ranker
pub(crate) fn normalize(text: &str) -> String {
    text.nfc().collect::<String>().to_lowercase()
}

/// Selectable similarity metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Metric {
    /// Sørensen–Dice over character bigrams
    #[default]
    Dice,
    JaroWinkler,
}

impl Metric {
    pub fn ranker(self) -> Arc<dyn Ranker> {
        match self {
            Metric::Dice => Arc::new(DiceRanker::new()),
            Metric::JaroWinkler => Arc::new(JaroWinklerRanker::new()),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Dice => f.write_str("dice"),
            Metric::JaroWinkler => f.write_str("jaro-winkler"),
        }
    }
}

impl FromStr for Metric {
    type Err = ItemBotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dice" | "bigram" => Ok(Metric::Dice),
            "jaro-winkler" | "jaro_winkler" | "jarowinkler" => Ok(Metric::JaroWinkler),
            other => Err(ItemBotError::Config(format!("Unknown match metric: {}", other))),
        }
    }
}
