//! Error types for the document model.

use thiserror::Error;

/// Errors raised when a raw document does not fit the typed model.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The JSON did not match the document shape.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A mapping key is not a positive integer.
    #[error("invalid {collection} key: {key:?}")]
    InvalidKey {
        collection: &'static str,
        key: String,
    },

    /// A mapping key disagrees with the id carried by its entry.
    #[error("{collection} key {key:?} does not match entry id {id}")]
    KeyMismatch {
        collection: &'static str,
        key: String,
        id: u32,
    },
}

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;
