use thiserror::Error;

/// Main error type for the item bot
#[derive(Error, Debug)]
pub enum ItemBotError {
    /// Filesystem errors (catalog loading)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid configuration value, rejected at load time
    #[error("Configuration error: {0}")]
    Config(String),

    /// Two catalog entries share a name
    #[error("Duplicate item name in catalog: {0}")]
    DuplicateItem(String),

    /// Lookup of a name that is not in the catalog
    #[error("Unknown item: {0}")]
    UnknownItem(String),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

impl From<String> for ItemBotError {
    fn from(s: String) -> Self {
        ItemBotError::Other(s)
    }
}

impl From<&str> for ItemBotError {
    fn from(s: &str) -> Self {
        ItemBotError::Other(s.to_string())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ItemBotError>;
