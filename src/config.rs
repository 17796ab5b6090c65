//! Engine configuration.
//!
//! Values come from environment variables (or any string map, for tests) and
//! are validated once at load time. The pipeline never re-checks them per call.

use std::collections::HashMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{ItemBotError, Result};
use crate::ranking::Metric;

/// Default minimum similarity a reference needs to count as a match
pub const DEFAULT_MIN_CONFIDENCE: f64 = 0.35;

/// Only the first N references of a comment are considered
pub const DEFAULT_MAX_CANDIDATES: usize = 10;

/// At most N items are rendered per reply
pub const DEFAULT_MAX_RESULTS: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Minimum similarity score in [0.0, 1.0]
    pub min_confidence: f64,

    pub max_candidates: usize,

    pub max_results: usize,

    pub metric: Metric,

    /// JSON catalog file
    pub catalog_path: PathBuf,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_confidence: DEFAULT_MIN_CONFIDENCE,
            max_candidates: DEFAULT_MAX_CANDIDATES,
            max_results: DEFAULT_MAX_RESULTS,
            metric: Metric::default(),
            catalog_path: PathBuf::from("items.json"),
        }
    }
}

impl EngineConfig {
    /// Load from process environment
    pub fn from_env() -> Result<Self> {
        let vars: HashMap<String, String> = std::env::vars().collect();
        Self::from_map(&vars)
    }

    /// Load from a key/value map with the same keys as the environment.
    ///
    /// Missing keys fall back to defaults; present but unparsable values are
    /// errors.
    pub fn from_map(vars: &HashMap<String, String>) -> Result<Self> {
        let defaults = Self::default();

        let config = Self {
            min_confidence: parse_var(vars, "MIN_CONFIDENCE")?.unwrap_or(defaults.min_confidence),
            max_candidates: parse_var(vars, "MAX_CANDIDATES")?.unwrap_or(defaults.max_candidates),
            max_results: parse_var(vars, "MAX_RESULTS")?.unwrap_or(defaults.max_results),
            metric: parse_var(vars, "MATCH_METRIC")?.unwrap_or(defaults.metric),
            catalog_path: vars
                .get("CATALOG_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.catalog_path),
        };

        config.validate()?;
        Ok(config)
    }

    /// Reject thresholds outside [0, 1] and zero caps
    pub fn validate(&self) -> Result<()> {
        if !self.min_confidence.is_finite() || !(0.0..=1.0).contains(&self.min_confidence) {
            return Err(ItemBotError::Config(format!(
                "MIN_CONFIDENCE must be within [0, 1], got {}",
                self.min_confidence
            )));
        }
        if self.max_candidates == 0 {
            return Err(ItemBotError::Config("MAX_CANDIDATES must be at least 1".to_string()));
        }
        if self.max_results == 0 {
            return Err(ItemBotError::Config("MAX_RESULTS must be at least 1".to_string()));
        }
        Ok(())
    }

    pub fn with_min_confidence(mut self, min_confidence: f64) -> Self {
        self.min_confidence = min_confidence;
        self
    }
}

fn parse_var<T>(vars: &HashMap<String, String>, key: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match vars.get(key).map(|v| v.trim()).filter(|v| !v.is_empty()) {
        None => Ok(None),
        Some(raw) => raw
            .parse::<T>()
            .map(Some)
            .map_err(|e| ItemBotError::Config(format!("Invalid {} '{}': {}", key, raw, e))),
    }
}
