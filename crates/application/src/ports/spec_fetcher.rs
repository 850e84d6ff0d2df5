//! Specification fetch port

use std::future::Future;

use thiserror::Error;

/// Failures while fetching a specification by URL.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The server answered with a non-2xx status.
    #[error("HTTP error, status: {0}")]
    Status(u16),

    /// The fetch failed at the network level.
    #[error("{0}")]
    Network(String),
}

/// Port for retrieving specification text from a URL.
///
/// File content and pasted text never pass through this port; the
/// loader's contract is identical regardless of source.
pub trait SpecFetcher: Send + Sync {
    /// Fetches the document at `url` as plain text.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] for non-2xx statuses and network
    /// failures. Not retried by the loader.
    fn fetch_text(&self, url: &str) -> impl Future<Output = Result<String, FetchError>> + Send;
}
