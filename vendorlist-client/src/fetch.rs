//! Retrieval of published documents.

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::config::GvlConfig;
use crate::error::FetchError;

/// Retrieves a JSON document by URL.
///
/// Implementations report any transport, status or decoding problem as a
/// [`FetchError`]. No retries are expected.
#[async_trait]
pub trait DocumentFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<serde_json::Value, FetchError>;
}

/// [`DocumentFetcher`] over HTTP(S).
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Wraps an existing client.
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Builds a client using the timeout from `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialised.
    pub fn from_config(config: &GvlConfig) -> reqwest::Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl DocumentFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<serde_json::Value, FetchError> {
        debug!("Fetching {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::new(url, format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(url, format!("HTTP {status}")));
        }

        response
            .json()
            .await
            .map_err(|e| FetchError::new(url, format!("invalid JSON: {e}")))
    }
}
