//! Error types for plugkit values

use thiserror::Error;

/// Value-handling error types
#[derive(Debug, Error)]
pub enum ValueError {
    /// A configured security limit was exceeded while ingesting input.
    #[error("Limit exceeded: {0}")]
    LimitExceeded(String),
    /// The top-level serialized value is a scalar, not a collection.
    #[error("Top-level value is not a collection")]
    NotACollection,
    /// JSON parsing or serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ValueError>;
