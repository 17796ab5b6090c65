use std::sync::Arc;

use crate::catalog::CatalogIndex;
use crate::config::{EngineConfig, DEFAULT_MAX_CANDIDATES, DEFAULT_MAX_RESULTS, DEFAULT_MIN_CONFIDENCE};
use crate::core::{Item, MatchResult};
use crate::ranking::{best_match, DiceRanker, Ranker};

/// Matching limits
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchOptions {
    pub min_confidence: f64,
    pub max_candidates: usize,
    pub max_results: usize,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            min_confidence: DEFAULT_MIN_CONFIDENCE,
            max_candidates: DEFAULT_MAX_CANDIDATES,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

impl From<&EngineConfig> for MatchOptions {
    fn from(config: &EngineConfig) -> Self {
        Self {
            min_confidence: config.min_confidence,
            max_candidates: config.max_candidates,
            max_results: config.max_results,
        }
    }
}

/// Resolves extracted references to catalog items
pub struct ItemMatcher {
    catalog: Arc<CatalogIndex>,
    ranker: Arc<dyn Ranker>,
    options: MatchOptions,
}

impl ItemMatcher {
    /// Create matcher with the Dice ranker and default limits
    pub fn new(catalog: Arc<CatalogIndex>) -> Self {
        Self::with_ranker(catalog, Arc::new(DiceRanker::new()), MatchOptions::default())
    }

    pub fn with_ranker(
        catalog: Arc<CatalogIndex>,
        ranker: Arc<dyn Ranker>,
        options: MatchOptions,
    ) -> Self {
        Self { catalog, ranker, options }
    }

    pub fn catalog(&self) -> &CatalogIndex {
        &self.catalog
    }

    pub fn options(&self) -> MatchOptions {
        self.options
    }

    pub fn ranker_name(&self) -> &str {
        self.ranker.name()
    }

    /// Best catalog name per candidate, in candidate order.
    ///
    /// Only the first `max_candidates` candidates are scored. Candidates whose
    /// best score is below `min_confidence` are dropped, and the survivors are
    /// truncated to `max_results`.
    pub fn match_references<S: AsRef<str>>(
        &self,
        candidates: &[S],
        min_confidence: f64,
    ) -> Vec<MatchResult> {
        let considered = &candidates[..candidates.len().min(self.options.max_candidates)];
        if considered.len() < candidates.len() {
            tracing::debug!(
                "Ignoring {} references beyond the first {}",
                candidates.len() - considered.len(),
                self.options.max_candidates
            );
        }

        let matches: Vec<MatchResult> = considered
            .iter()
            .map(AsRef::as_ref)
            .filter_map(|candidate| {
                let best = best_match(self.ranker.as_ref(), candidate, self.catalog.all_names())?;
                if best.score < min_confidence {
                    tracing::debug!(
                        "Dropped [[{}]]: best {} scored {:.2} < {:.2}",
                        candidate,
                        best.name,
                        best.score,
                        min_confidence
                    );
                    return None;
                }
                Some(MatchResult::new(candidate, best.name, best.score))
            })
            .take(self.options.max_results)
            .collect();

        for m in &matches {
            tracing::debug!("Matched {} [{}]", m.display(), self.ranker.name());
        }

        matches
    }

    /// Resolved item records for the confident matches, in candidate order
    pub fn match_items<S: AsRef<str>>(&self, candidates: &[S], min_confidence: f64) -> Vec<&Item> {
        self.match_references(candidates, min_confidence)
            .iter()
            .filter_map(|m| self.catalog.lookup(&m.item_name))
            .collect()
    }

    /// `match_items` with the configured threshold
    pub fn match_items_default<S: AsRef<str>>(&self, candidates: &[S]) -> Vec<&Item> {
        self.match_items(candidates, self.options.min_confidence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking::JaroWinklerRanker;

    fn catalog() -> Arc<CatalogIndex> {
        Arc::new(CatalogIndex::build(vec![
            Item::new("Extra Stamina", 500),
            Item::new("Burst Fire", 3000),
            Item::new("Tesla Bolt", 500),
            Item::new("Mystic Burst", 1250),
        ]))
    }

    fn names(items: &[&Item]) -> Vec<String> {
        items.iter().map(|i| i.name.clone()).collect()
    }

    #[test]
    fn test_match_preserves_candidate_order() {
        let matcher = ItemMatcher::new(catalog());
        let items = matcher.match_items(&["tesla bolt", "burst fire"], 0.35);
        assert_eq!(names(&items), vec!["Tesla Bolt", "Burst Fire"]);
    }

    #[test]
    fn test_threshold_one_rejects_near_miss() {
        let matcher = ItemMatcher::new(catalog());
        assert!(matcher.match_items(&["burst fir"], 1.0).is_empty());
        assert_eq!(names(&matcher.match_items(&["burst fir"], 0.35)), vec!["Burst Fire"]);
    }

    #[test]
    fn test_empty_candidate_is_dropped() {
        let matcher = ItemMatcher::new(catalog());
        assert!(matcher.match_items(&[""], 0.35).is_empty());
    }

    #[test]
    fn test_no_candidates() {
        let matcher = ItemMatcher::new(catalog());
        let empty: [&str; 0] = [];
        assert!(matcher.match_items(&empty, 0.35).is_empty());
    }

    #[test]
    fn test_at_most_three_results() {
        let matcher = ItemMatcher::new(catalog());
        let candidates = ["tesla bolt", "burst fire", "extra stamina", "mystic burst", "tesla bolt"];

        let items = matcher.match_items(&candidates, 0.35);
        assert_eq!(names(&items), vec!["Tesla Bolt", "Burst Fire", "Extra Stamina"]);
    }

    #[test]
    fn test_only_first_ten_candidates_considered() {
        let matcher = ItemMatcher::new(catalog());
        let mut candidates = vec!["zzzz"; 10];
        candidates.extend(["tesla bolt"; 5]);

        assert_eq!(candidates.len(), 15);
        assert!(matcher.match_items(&candidates, 0.35).is_empty());
    }

    #[test]
    fn test_duplicates_preserved() {
        let matcher = ItemMatcher::new(catalog());
        let items = matcher.match_items(&["tesla bolt", "Tesla Bolt"], 0.35);
        assert_eq!(names(&items), vec!["Tesla Bolt", "Tesla Bolt"]);
    }

    #[test]
    fn test_match_references_carries_scores() {
        let matcher = ItemMatcher::new(catalog());
        let results = matcher.match_references(&["TESLA BOLT", "burst fir"], 0.35);

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].candidate, "TESLA BOLT");
        assert!(results[0].is_exact());
        assert_eq!(results[1].item_name, "Burst Fire");
        assert!(results[1].score < 1.0);
    }

    #[test]
    fn test_custom_ranker_and_options() {
        let options = MatchOptions {
            max_results: 1,
            ..MatchOptions::default()
        };
        let matcher = ItemMatcher::with_ranker(catalog(), Arc::new(JaroWinklerRanker::new()), options);

        let items = matcher.match_items_default(&["tesla blot", "burst fire"]);
        assert_eq!(names(&items), vec!["Tesla Bolt"]);
        assert_eq!(matcher.ranker_name(), "jaro-winkler");
    }
}
