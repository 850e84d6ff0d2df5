//! HTTP client implementation using reqwest.
//!
//! Implements the `HttpClient` port. Every received HTTP status —
//! including 4xx/5xx — is returned as a successful exchange; only
//! failures to reach the server map to `TransportError`.

use std::collections::BTreeMap;

use reqwest::{Client, Method};
use url::Url;

use spyglass_application::ports::{HttpClient, HttpExchange, TransportError};
use spyglass_domain::{HttpMethod, RequestSpec};

/// reqwest-backed implementation of the `HttpClient` port.
///
/// No per-request timeout is applied: a hang in the transport blocks
/// that one dispatch indefinitely, matching the core's resource model.
pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    /// Creates a client with default settings.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] if the client cannot be constructed.
    pub fn new() -> Result<Self, TransportError> {
        let client = Client::builder()
            .user_agent("Spyglass/0.1.0")
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(|e| TransportError::Other(e.to_string()))?;

        Ok(Self { client })
    }

    /// Wraps an existing reqwest client.
    #[must_use]
    pub const fn with_client(client: Client) -> Self {
        Self { client }
    }

    const fn to_reqwest_method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Delete => Method::DELETE,
            HttpMethod::Patch => Method::PATCH,
            HttpMethod::Options => Method::OPTIONS,
            HttpMethod::Head => Method::HEAD,
        }
    }

    fn map_error(error: &reqwest::Error) -> TransportError {
        if error.is_timeout() {
            return TransportError::Timeout;
        }

        if error.is_connect() {
            let message = error.to_string();
            let host = error
                .url()
                .and_then(Url::host_str)
                .unwrap_or("unknown")
                .to_string();

            let lowered = message.to_lowercase();
            if lowered.contains("dns") || lowered.contains("resolve") {
                return TransportError::Dns { host };
            }
            if lowered.contains("refused") {
                return TransportError::ConnectionRefused { host };
            }
            return TransportError::ConnectionFailed(message);
        }

        TransportError::Other(error.to_string())
    }
}

impl HttpClient for ReqwestHttpClient {
    async fn execute(&self, request: &RequestSpec) -> Result<HttpExchange, TransportError> {
        let url = Url::parse(&request.full_url())
            .map_err(|e| TransportError::InvalidUrl(format!("{e}: {}", request.url)))?;

        let mut builder = self
            .client
            .request(Self::to_reqwest_method(request.method), url);

        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        if let Some(body) = &request.body {
            let serialized = serde_json::to_string(body)
                .map_err(|e| TransportError::Other(e.to_string()))?;
            builder = builder.body(serialized);
        }

        let response = builder.send().await.map_err(|e| Self::map_error(&e))?;

        let status = response.status();
        let status_text = status
            .canonical_reason()
            .unwrap_or_default()
            .to_string();

        let headers: BTreeMap<String, String> = response
            .headers()
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("<binary>").to_string()))
            .collect();

        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Other(format!("failed to read body: {e}")))?;

        Ok(HttpExchange {
            status: status.as_u16(),
            status_text,
            headers,
            body,
        })
    }
}
