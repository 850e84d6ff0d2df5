//! HTTP client port

use std::collections::BTreeMap;
use std::future::Future;

use thiserror::Error;

use spyglass_domain::RequestSpec;

/// A raw HTTP exchange as seen by the transport adapter.
///
/// The dispatcher turns this into a `ResponseRecord`: body parsing and
/// duration stamping are dispatcher concerns, not transport concerns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpExchange {
    /// HTTP status code.
    pub status: u16,
    /// Canonical reason phrase (e.g. "OK", "Not Found").
    pub status_text: String,
    /// Response headers as a flat string mapping.
    pub headers: BTreeMap<String, String>,
    /// Raw response body text.
    pub body: String,
}

/// Failures to reach the server at all.
///
/// An HTTP response with any status — including 4xx/5xx — is never a
/// transport error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The request URL could not be parsed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// DNS resolution failed.
    #[error("DNS resolution failed for {host}")]
    Dns {
        /// Host that failed to resolve.
        host: String,
    },

    /// The server refused the connection.
    #[error("connection refused by {host}")]
    ConnectionRefused {
        /// Host that refused.
        host: String,
    },

    /// The connection could not be established.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The transport timed out.
    #[error("request timed out")]
    Timeout,

    /// Any other transport-level failure.
    #[error("{0}")]
    Other(String),
}

/// Port for executing built requests.
///
/// Implementations must treat every received HTTP status as a successful
/// exchange and reserve `TransportError` for failures to reach the
/// server.
pub trait HttpClient: Send + Sync {
    /// Executes the request and returns the raw exchange.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] when the server cannot be reached.
    fn execute(
        &self,
        request: &RequestSpec,
    ) -> impl Future<Output = Result<HttpExchange, TransportError>> + Send;
}
