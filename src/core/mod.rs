pub mod item;
pub mod match_result;

pub use item::{Ability, AbilityDetail, Item, ItemRef, StatModifier};
pub use match_result::MatchResult;
