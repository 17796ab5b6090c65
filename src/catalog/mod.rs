use std::collections::HashMap;
use std::path::Path;

use crate::core::{Item, ItemRef};
use crate::error::{ItemBotError, Result};

/// What to do when two catalog entries share a name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Later entry replaces the earlier record but keeps its position (logged)
    #[default]
    Overwrite,
    /// Fail the build
    Reject,
}

/// Read-only name → item index over a catalog snapshot.
///
/// Names keep the declaration order of their first appearance. That order is
/// the fuzzy-match universe and decides ties between equally scored names.
#[derive(Debug, Clone, Default)]
pub struct CatalogIndex {
    items: Vec<Item>,
    by_name: HashMap<String, usize>,
}

impl CatalogIndex {
    /// Build with the default (overwrite) duplicate policy
    pub fn build(items: impl IntoIterator<Item = Item>) -> Self {
        // Overwrite never rejects
        Self::build_with_policy(items, DuplicatePolicy::Overwrite).unwrap_or_default()
    }

    /// Build in one pass, applying `policy` to duplicate names
    pub fn build_with_policy(
        items: impl IntoIterator<Item = Item>,
        policy: DuplicatePolicy,
    ) -> Result<Self> {
        let mut index = Self::default();

        for item in items {
            if let Some(&slot) = index.by_name.get(&item.name) {
                match policy {
                    DuplicatePolicy::Reject => {
                        return Err(ItemBotError::DuplicateItem(item.name));
                    }
                    DuplicatePolicy::Overwrite => {
                        tracing::warn!("Duplicate catalog entry '{}', later record wins", item.name);
                        index.items[slot] = item;
                    }
                }
                continue;
            }

            index.by_name.insert(item.name.clone(), index.items.len());
            index.items.push(item);
        }

        index.warn_dangling_links();
        tracing::info!("Catalog index built with {} items", index.items.len());

        Ok(index)
    }

    /// Parse a JSON array of items
    pub fn from_json_str(json: &str, policy: DuplicatePolicy) -> Result<Self> {
        let items: Vec<Item> = serde_json::from_str(json)?;
        Self::build_with_policy(items, policy)
    }

    /// Load a JSON catalog file
    pub fn from_path(path: impl AsRef<Path>, policy: DuplicatePolicy) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading catalog from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json, policy)
    }

    pub fn lookup(&self, name: &str) -> Option<&Item> {
        self.by_name.get(name).map(|&slot| &self.items[slot])
    }

    /// Like `lookup`, but an absent name is an error
    pub fn get(&self, name: &str) -> Result<&Item> {
        self.lookup(name)
            .ok_or_else(|| ItemBotError::UnknownItem(name.to_string()))
    }

    /// Resolve a weak link against this snapshot
    pub fn resolve(&self, link: &ItemRef) -> Option<&Item> {
        self.lookup(link.name())
    }

    /// All names, in declaration order
    pub fn all_names(&self) -> impl Iterator<Item = &str> + Clone + '_ {
        self.items.iter().map(|item| item.name.as_str())
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn warn_dangling_links(&self) {
        for item in &self.items {
            for link in item.links() {
                if self.resolve(link).is_none() {
                    tracing::warn!("Item '{}' links to unknown item '{}'", item.name, link.name());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Item> {
        vec![
            Item::new("Extra Stamina", 500).with_builds_into("Superior Stamina"),
            Item::new("Superior Stamina", 3000).with_pre_req("Extra Stamina"),
            Item::new("Tesla Bolt", 500),
        ]
    }

    #[test]
    fn test_lookup_and_names() {
        let index = CatalogIndex::build(sample());

        assert_eq!(index.len(), 3);
        assert_eq!(index.lookup("Tesla Bolt").map(|i| i.price), Some(500));
        assert!(index.lookup("tesla bolt").is_none());
        assert_eq!(
            index.all_names().collect::<Vec<_>>(),
            vec!["Extra Stamina", "Superior Stamina", "Tesla Bolt"]
        );
    }

    #[test]
    fn test_resolve_links() {
        let index = CatalogIndex::build(sample());
        let stamina = index.lookup("Superior Stamina").unwrap();

        let pre_req = index.resolve(stamina.pre_req.as_ref().unwrap()).unwrap();
        assert_eq!(pre_req.name, "Extra Stamina");
        assert!(index.resolve(&ItemRef::new("Missing")).is_none());
    }

    #[test]
    fn test_duplicate_overwrite_keeps_first_position() {
        let mut items = sample();
        items.push(Item::new("Extra Stamina", 750));

        let index = CatalogIndex::build(items);
        assert_eq!(index.len(), 3);
        assert_eq!(index.lookup("Extra Stamina").unwrap().price, 750);
        assert_eq!(index.all_names().next(), Some("Extra Stamina"));
    }

    #[test]
    fn test_duplicate_reject() {
        let mut items = sample();
        items.push(Item::new("Tesla Bolt", 1));

        let err = CatalogIndex::build_with_policy(items, DuplicatePolicy::Reject).unwrap_err();
        assert!(matches!(err, ItemBotError::DuplicateItem(name) if name == "Tesla Bolt"));
    }

    #[test]
    fn test_from_json_str() {
        let json = r#"[{"name": "Tesla Bolt", "price": 500}, {"name": "Burst Fire", "price": 3000}]"#;
        let index = CatalogIndex::from_json_str(json, DuplicatePolicy::default()).unwrap();

        assert_eq!(index.len(), 2);
        assert!(index.get("Burst Fire").is_ok());
        assert!(matches!(index.get("Nope"), Err(ItemBotError::UnknownItem(_))));
    }

    #[test]
    fn test_empty_catalog() {
        let index = CatalogIndex::build(Vec::new());
        assert!(index.is_empty());
        assert_eq!(index.all_names().count(), 0);
    }
}
