//! Error types for the client layer.

use thiserror::Error;
use vendorlist_index::IndexError;

/// A failed fetch or an unusable fetched document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to fetch {url}: {message}")]
pub struct FetchError {
    pub url: String,
    pub message: String,
}

impl FetchError {
    pub fn new(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            message: message.into(),
        }
    }
}

/// Errors from loading vendor lists and changing language.
#[derive(Debug, Error)]
pub enum ClientError {
    /// A network load was requested but no base URL is configured.
    #[error("vendor list base URL is not configured")]
    BaseUrlUnset,

    /// The language code is not two ASCII letters.
    #[error("invalid language code {0:?}: expected two letters")]
    InvalidLanguage(String),

    /// Vendor list versions start at 1.
    #[error("invalid vendor list version: {0}")]
    InvalidVersion(u32),

    /// Retrieval or parsing of a fetched document failed.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The document could not be indexed.
    #[error("index error: {0}")]
    Index(#[from] IndexError),
}

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;
