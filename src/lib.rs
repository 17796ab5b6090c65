//! # Deadlock Item Bot
//!
//! Turns forum comments into item info replies:
//! - `[[item name]]` reference extraction
//! - Fuzzy matching against a read-only item catalog (Dice bigrams or Jaro-Winkler)
//! - Deterministic markdown rendering of stats, abilities and build links
//! - Reply composition with an issue-report footer
//!
//! ## Example Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use deadlock_item_bot::{CatalogIndex, Item, ReplyEngine};
//!
//! let catalog = CatalogIndex::build(vec![Item::new("Tesla Bolt", 500)]);
//! let engine = ReplyEngine::new(Arc::new(catalog));
//!
//! let outcome = engine.process_comment("check out [[tesla bolt]]");
//! assert!(outcome.reply_body().unwrap().starts_with("### Tesla Bolt  ($500)"));
//! ```

pub mod core;
pub mod catalog;
pub mod extract;
pub mod ranking;
pub mod matcher;
pub mod render;
pub mod engine;
pub mod stats;
pub mod config;
pub mod error;

// Re-export primary types
pub use crate::core::{Ability, AbilityDetail, Item, ItemRef, MatchResult, StatModifier};
pub use catalog::{CatalogIndex, DuplicatePolicy};
pub use extract::extract_references;
pub use matcher::{ItemMatcher, MatchOptions};
pub use render::{compose_reply, render_item, ReplyStyle};
pub use engine::{BatchReport, Comment, CommentOutcome, PlannedReply, ReplyEngine};
pub use config::EngineConfig;
pub use error::{ItemBotError, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
