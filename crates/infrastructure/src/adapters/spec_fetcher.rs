//! Specification fetcher implementation using reqwest.

use reqwest::Client;

use spyglass_application::ports::{FetchError, SpecFetcher};

/// reqwest-backed implementation of the `SpecFetcher` port.
#[derive(Debug, Clone, Default)]
pub struct ReqwestSpecFetcher {
    client: Client,
}

impl ReqwestSpecFetcher {
    /// Creates a fetcher with a default reqwest client.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing reqwest client.
    #[must_use]
    pub const fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl SpecFetcher for ReqwestSpecFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))
    }
}
