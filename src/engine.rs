use std::sync::Arc;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::catalog::{CatalogIndex, DuplicatePolicy};
use crate::config::EngineConfig;
use crate::core::{Item, MatchResult};
use crate::extract::extract_references;
use crate::matcher::{ItemMatcher, MatchOptions};
use crate::render::{compose_reply, ReplyStyle};
use crate::error::Result;
use crate::stats::{PipelineStats, StatsSnapshot};

/// A forum comment handed in by the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub body: String,
}

impl Comment {
    pub fn new(id: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            body: body.into(),
        }
    }
}

/// Where a comment ended up in the extract → match → render pipeline
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CommentOutcome {
    /// No `[[...]]` references in the text
    NoReferences,
    /// References found, none cleared the confidence threshold
    NoMatches { referenced: usize },
    /// Reply composed and ready to post
    Reply {
        referenced: usize,
        matches: Vec<MatchResult>,
        body: String,
    },
}

impl CommentOutcome {
    pub fn reply_body(&self) -> Option<&str> {
        match self {
            CommentOutcome::Reply { body, .. } => Some(body),
            _ => None,
        }
    }
}

/// Reply planned for one comment of a batch
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlannedReply {
    pub comment_id: String,
    pub matches: Vec<MatchResult>,
    pub body: String,
}

/// Result of processing a batch of comments
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub scanned: usize,
    pub replies: Vec<PlannedReply>,
}

impl BatchReport {
    /// Human-readable digest of every composed reply
    pub fn summary(&self) -> String {
        let bodies: Vec<&str> = self.replies.iter().map(|r| r.body.as_str()).collect();
        format!(
            "FOUND {} comments!\n\n{}",
            self.replies.len(),
            bodies.join("\n\n------\n\n")
        )
    }
}

/// Main reply pipeline orchestrator
pub struct ReplyEngine {
    matcher: ItemMatcher,
    style: ReplyStyle,
    stats: PipelineStats,
}

impl ReplyEngine {
    /// Create engine with default matching limits and reply style
    pub fn new(catalog: Arc<CatalogIndex>) -> Self {
        Self {
            matcher: ItemMatcher::new(catalog),
            style: ReplyStyle::default(),
            stats: PipelineStats::new(),
        }
    }

    /// Create engine over an already-built catalog using `config` limits
    pub fn from_config(catalog: Arc<CatalogIndex>, config: &EngineConfig) -> Self {
        let matcher = ItemMatcher::with_ranker(
            catalog,
            config.metric.ranker(),
            MatchOptions::from(config),
        );

        Self {
            matcher,
            style: ReplyStyle::default(),
            stats: PipelineStats::new(),
        }
    }

    /// Load the catalog named by `config` and build the engine
    pub fn load(config: &EngineConfig) -> Result<Self> {
        config.validate()?;
        let catalog = CatalogIndex::from_path(&config.catalog_path, DuplicatePolicy::Overwrite)?;
        tracing::info!(
            "Reply engine ready: {} items, metric {}, min confidence {}",
            catalog.len(),
            config.metric,
            config.min_confidence
        );
        Ok(Self::from_config(Arc::new(catalog), config))
    }

    pub fn with_style(mut self, style: ReplyStyle) -> Self {
        self.style = style;
        self
    }

    pub fn catalog(&self) -> &CatalogIndex {
        self.matcher.catalog()
    }

    pub fn matcher(&self) -> &ItemMatcher {
        &self.matcher
    }

    /// Run one comment through extraction, matching, rendering and composition
    pub fn process_comment(&self, text: &str) -> CommentOutcome {
        let references = extract_references(text);
        if references.is_empty() {
            self.stats.record_comment(0, 0, false);
            return CommentOutcome::NoReferences;
        }

        let options = self.matcher.options();
        let matches = self.matcher.match_references(&references, options.min_confidence);
        tracing::debug!("Matched {} out of {} items", matches.len(), references.len());

        let items: Vec<&Item> = matches
            .iter()
            .filter_map(|m| self.catalog().lookup(&m.item_name))
            .collect();

        match compose_reply(&items, &self.style) {
            Some(body) => {
                self.stats.record_comment(references.len(), items.len(), true);
                CommentOutcome::Reply {
                    referenced: references.len(),
                    matches,
                    body,
                }
            }
            None => {
                self.stats.record_comment(references.len(), 0, false);
                CommentOutcome::NoMatches {
                    referenced: references.len(),
                }
            }
        }
    }

    /// Process comments in parallel; replies keep the input order
    pub fn process_batch(&self, comments: &[Comment]) -> BatchReport {
        self.stats.record_batch();

        let replies: Vec<PlannedReply> = comments
            .par_iter()
            .filter_map(|comment| match self.process_comment(&comment.body) {
                CommentOutcome::Reply { matches, body, .. } => Some(PlannedReply {
                    comment_id: comment.id.clone(),
                    matches,
                    body,
                }),
                _ => None,
            })
            .collect();

        tracing::info!("Scanned {} comments, {} replies planned", comments.len(), replies.len());

        BatchReport {
            scanned: comments.len(),
            replies,
        }
    }

    /// Get pipeline statistics
    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }
}
