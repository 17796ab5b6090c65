use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use serde::Serialize;

/// In-process pipeline counters. Names follow the bot's stats endpoint.
#[derive(Debug)]
pub struct PipelineStats {
    batch_requests: AtomicU64,
    scanned_comments: AtomicU64,
    referenced_items: AtomicU64,
    matched_items: AtomicU64,
    composed_replies: AtomicU64,
    started_at: DateTime<Utc>,
}

/// One named counter value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatEntry {
    pub name: &'static str,
    pub value: u64,
}

/// Point-in-time copy of the counters
#[derive(Debug, Clone, Serialize)]
pub struct StatsSnapshot {
    pub started_at: DateTime<Utc>,
    pub stats: Vec<StatEntry>,
}

impl StatsSnapshot {
    pub fn get(&self, name: &str) -> Option<u64> {
        self.stats.iter().find(|s| s.name == name).map(|s| s.value)
    }
}

impl PipelineStats {
    pub fn new() -> Self {
        Self {
            batch_requests: AtomicU64::new(0),
            scanned_comments: AtomicU64::new(0),
            referenced_items: AtomicU64::new(0),
            matched_items: AtomicU64::new(0),
            composed_replies: AtomicU64::new(0),
            started_at: Utc::now(),
        }
    }

    pub fn record_batch(&self) {
        self.batch_requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_comment(&self, referenced: usize, matched: usize, composed: bool) {
        self.scanned_comments.fetch_add(1, Ordering::Relaxed);
        self.referenced_items.fetch_add(referenced as u64, Ordering::Relaxed);
        self.matched_items.fetch_add(matched as u64, Ordering::Relaxed);
        if composed {
            self.composed_replies.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        let entry = |name: &'static str, counter: &AtomicU64| StatEntry {
            name,
            value: counter.load(Ordering::Relaxed),
        };

        StatsSnapshot {
            started_at: self.started_at,
            stats: vec![
                entry("batch-requests", &self.batch_requests),
                entry("scanned-comments", &self.scanned_comments),
                entry("referenced-items", &self.referenced_items),
                entry("matched-items", &self.matched_items),
                entry("composed-replies", &self.composed_replies),
            ],
        }
    }
}

impl Default for PipelineStats {
    fn default() -> Self {
        Self::new()
    }
}
