use serde::{Deserialize, Serialize};

/// Deserialize a numeric amount from a number or a numeric string
fn deserialize_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum AmountValue {
        Number(f64),
        String(String),
    }

    match AmountValue::deserialize(deserializer)? {
        AmountValue::Number(n) => Ok(n),
        AmountValue::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| Error::custom(format!("Invalid amount string: {}", s))),
    }
}

/// Weak reference to another catalog item, by name.
///
/// The upstream dataset embeds the whole linked item, so a bare name string
/// and any object carrying a `name` field both deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ItemRef(pub String);

impl ItemRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for ItemRef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Named {
            name: String,
        }

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RefValue {
            Name(String),
            Object(Named),
        }

        Ok(match RefValue::deserialize(deserializer)? {
            RefValue::Name(name) => ItemRef(name),
            RefValue::Object(named) => ItemRef(named.name),
        })
    }
}

/// A single stat line, e.g. `+12% Weapon Damage`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatModifier {
    #[serde(deserialize_with = "deserialize_amount")]
    pub amount: f64,

    /// Unit label appended to the amount (`%`, `m`, `s`, or empty)
    #[serde(default)]
    pub unit: String,

    pub stat: String,
}

impl StatModifier {
    pub fn new(amount: f64, unit: impl Into<String>, stat: impl Into<String>) -> Self {
        Self {
            amount,
            unit: unit.into(),
            stat: stat.into(),
        }
    }
}

/// A detail line under a passive or active ability
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbilityDetail {
    /// Ordinal label printed verbatim before the amount
    #[serde(default)]
    pub ordinal: String,

    #[serde(deserialize_with = "deserialize_amount")]
    pub amount: f64,

    #[serde(default)]
    pub unit: String,

    pub stat: String,
}

impl AbilityDetail {
    pub fn new(
        ordinal: impl Into<String>,
        amount: f64,
        unit: impl Into<String>,
        stat: impl Into<String>,
    ) -> Self {
        Self {
            ordinal: ordinal.into(),
            amount,
            unit: unit.into(),
            stat: stat.into(),
        }
    }
}

/// Passive or active ability descriptor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ability {
    pub description: String,

    /// Cooldown in seconds
    #[serde(default)]
    pub cooldown: Option<f64>,

    #[serde(default)]
    pub details: Vec<AbilityDetail>,
}

impl Ability {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            cooldown: None,
            details: Vec::new(),
        }
    }

    pub fn with_cooldown(mut self, seconds: f64) -> Self {
        self.cooldown = Some(seconds);
        self
    }

    pub fn with_detail(mut self, detail: AbilityDetail) -> Self {
        self.details.push(detail);
        self
    }
}

/// Catalog item record. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Item name, unique within a catalog
    pub name: String,

    /// Shop price in souls
    pub price: u32,

    #[serde(default)]
    pub stats: Vec<StatModifier>,

    /// Item that must be owned before this one can be bought
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pre_req: Option<ItemRef>,

    /// Item this one is a component of
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub builds_into: Option<ItemRef>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passive: Option<Ability>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<Ability>,
}

impl Item {
    /// Create a new Item with required fields
    pub fn new(name: impl Into<String>, price: u32) -> Self {
        Self {
            name: name.into(),
            price,
            stats: Vec::new(),
            pre_req: None,
            builds_into: None,
            passive: None,
            active: None,
        }
    }

    pub fn with_stat(mut self, stat: StatModifier) -> Self {
        self.stats.push(stat);
        self
    }

    pub fn with_pre_req(mut self, name: impl Into<String>) -> Self {
        self.pre_req = Some(ItemRef::new(name));
        self
    }

    pub fn with_builds_into(mut self, name: impl Into<String>) -> Self {
        self.builds_into = Some(ItemRef::new(name));
        self
    }

    pub fn with_passive(mut self, ability: Ability) -> Self {
        self.passive = Some(ability);
        self
    }

    pub fn with_active(mut self, ability: Ability) -> Self {
        self.active = Some(ability);
        self
    }

    /// Outgoing weak links (prerequisite first, then builds-into)
    pub fn links(&self) -> impl Iterator<Item = &ItemRef> {
        self.pre_req.iter().chain(self.builds_into.iter())
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Deserialize from JSON string
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_creation() {
        let item = Item::new("Tesla Bolt", 500)
            .with_stat(StatModifier::new(12.0, "%", "Spirit Power"))
            .with_builds_into("Mystic Reach");

        assert_eq!(item.name, "Tesla Bolt");
        assert_eq!(item.price, 500);
        assert_eq!(item.stats.len(), 1);
        assert_eq!(item.builds_into.as_ref().map(ItemRef::name), Some("Mystic Reach"));
        assert!(item.pre_req.is_none());
    }

    #[test]
    fn test_links_order() {
        let item = Item::new("Burst Fire", 3000)
            .with_builds_into("Lucky Shot")
            .with_pre_req("Rapid Rounds");

        let names: Vec<&str> = item.links().map(ItemRef::name).collect();
        assert_eq!(names, vec!["Rapid Rounds", "Lucky Shot"]);
    }

    #[test]
    fn test_deserialize_upstream_shape() {
        let json = r#"{
            "name": "Burst Fire",
            "price": 3000,
            "stats": [{"amount": "12", "unit": "%", "stat": "Fire Rate"}],
            "preReq": {"name": "Rapid Rounds", "price": 500},
            "passive": {
                "description": "Gain fire rate on hit.",
                "cooldown": 10,
                "details": [{"ordinal": "+", "amount": 30, "unit": "%", "stat": "Fire Rate"}]
            }
        }"#;

        let item = Item::from_json(json).unwrap();
        assert_eq!(item.stats[0].amount, 12.0);
        assert_eq!(item.pre_req, Some(ItemRef::new("Rapid Rounds")));
        assert!(item.builds_into.is_none());

        let passive = item.passive.unwrap();
        assert_eq!(passive.cooldown, Some(10.0));
        assert_eq!(passive.details[0].ordinal, "+");
        assert!(item.active.is_none());
    }

    #[test]
    fn test_deserialize_bare_link_and_defaults() {
        let json = r#"{"name": "Extra Stamina", "price": 500, "buildsInto": "Superior Stamina"}"#;
        let item = Item::from_json(json).unwrap();

        assert!(item.stats.is_empty());
        assert_eq!(item.builds_into, Some(ItemRef::new("Superior Stamina")));
    }

    #[test]
    fn test_invalid_amount_rejected() {
        let json = r#"{"name": "X", "price": 1, "stats": [{"amount": "lots", "stat": "Health"}]}"#;
        assert!(Item::from_json(json).is_err());
    }

    #[test]
    fn test_serialization() {
        let item = Item::new("Tesla Bolt", 500).with_pre_req("Mystic Burst");
        let json = item.to_json().unwrap();
        let deserialized = Item::from_json(&json).unwrap();
        assert_eq!(item, deserialized);
    }
}
