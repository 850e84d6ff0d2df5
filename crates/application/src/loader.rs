//! Specification loading
//!
//! Accepts raw text or an absolute http(s) URL, determines whether the
//! content is JSON or YAML, and produces a [`SpecDocument`] or a typed
//! error. Every failure path is a returned error value the caller can
//! render directly; nothing here panics.

use serde_json::Value;
use thiserror::Error;

use spyglass_domain::SpecDocument;

use crate::ports::{FetchError, SpecFetcher};

/// Errors produced by the loader.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SpecLoadError {
    /// A URL-sourced fetch failed (HTTP status or network). Not retried.
    #[error("failed to load specification")]
    Fetch(#[source] FetchError),

    /// The content is neither valid JSON nor valid YAML.
    #[error("could not parse specification, expected valid JSON or YAML")]
    Parse,
}

impl SpecLoadError {
    /// The user-facing message.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// The underlying cause, when one exists.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::Fetch(source) => Some(source.to_string()),
            Self::Parse => None,
        }
    }
}

/// Parses specification text, trying JSON first and YAML second.
///
/// No schema validation is performed beyond the parse itself: a
/// syntactically valid but semantically incomplete document (e.g.
/// missing `paths`) is accepted and resolves to an empty endpoint list
/// downstream.
///
/// # Errors
///
/// Returns [`SpecLoadError::Parse`] when both parsers reject the text.
pub fn parse_spec_text(content: &str) -> Result<SpecDocument, SpecLoadError> {
    if let Ok(value) = serde_json::from_str::<Value>(content) {
        return Ok(SpecDocument::new(value));
    }

    serde_yaml::from_str::<Value>(content)
        .map(SpecDocument::new)
        .map_err(|_| SpecLoadError::Parse)
}

/// Loads specification documents from text, file content, or URLs.
pub struct SpecLoader<F: SpecFetcher> {
    fetcher: F,
}

impl<F: SpecFetcher> SpecLoader<F> {
    /// Creates a loader around a fetcher implementation.
    pub const fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// Loads and parses a specification.
    ///
    /// Input starting with `http://` or `https://` is fetched as text
    /// first; anything else (pasted text, file content read by the
    /// caller) is parsed as-is. The contract is identical regardless of
    /// source.
    ///
    /// # Errors
    ///
    /// Returns [`SpecLoadError::Fetch`] when a URL fetch fails and
    /// [`SpecLoadError::Parse`] when the content is neither JSON nor
    /// YAML.
    pub async fn load(&self, input: &str) -> Result<SpecDocument, SpecLoadError> {
        let content = if is_absolute_http_url(input) {
            self.fetcher
                .fetch_text(input)
                .await
                .map_err(SpecLoadError::Fetch)?
        } else {
            input.to_string()
        };

        parse_spec_text(&content)
    }
}

fn is_absolute_http_url(input: &str) -> bool {
    input.starts_with("http://") || input.starts_with("https://")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    struct StaticFetcher {
        response: Result<String, FetchError>,
    }

    impl SpecFetcher for StaticFetcher {
        async fn fetch_text(&self, _url: &str) -> Result<String, FetchError> {
            self.response.clone()
        }
    }

    fn loader_with(response: Result<String, FetchError>) -> SpecLoader<StaticFetcher> {
        SpecLoader::new(StaticFetcher { response })
    }

    #[test]
    fn test_parse_valid_json() {
        let doc = parse_spec_text(r#"{"openapi": "3.0.0", "paths": {}}"#).unwrap();
        assert_eq!(doc.as_value(), &json!({ "openapi": "3.0.0", "paths": {} }));
    }

    #[test]
    fn test_parse_falls_back_to_yaml() {
        let doc = parse_spec_text("openapi: 3.0.0\npaths:\n  /pods:\n    get:\n      summary: List\n").unwrap();
        assert_eq!(
            doc.as_value()["paths"]["/pods"]["get"]["summary"],
            json!("List")
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let result = parse_spec_text("{not json: , broken");
        assert_eq!(result.unwrap_err(), SpecLoadError::Parse);
    }

    #[test]
    fn test_yaml_and_json_resolve_identically() {
        let json_doc = parse_spec_text(r#"{"paths": {"/pods": {"get": {}}}}"#).unwrap();
        let yaml_doc = parse_spec_text("paths:\n  /pods:\n    get: {}\n").unwrap();
        assert_eq!(
            json_doc.endpoints().len(),
            yaml_doc.endpoints().len()
        );
    }

    #[tokio::test]
    async fn test_load_fetches_urls() {
        let loader = loader_with(Ok(r#"{"openapi": "3.0.0"}"#.to_string()));
        let doc = loader.load("https://example.com/openapi.json").await.unwrap();
        assert_eq!(doc.as_value()["openapi"], json!("3.0.0"));
    }

    #[tokio::test]
    async fn test_load_passes_text_through() {
        let loader = loader_with(Err(FetchError::Network("unused".to_string())));
        let doc = loader.load(r#"{"openapi": "3.0.0"}"#).await.unwrap();
        assert_eq!(doc.as_value()["openapi"], json!("3.0.0"));
    }

    #[tokio::test]
    async fn test_load_surfaces_fetch_failure_with_detail() {
        let loader = loader_with(Err(FetchError::Status(503)));
        let err = loader
            .load("https://example.com/openapi.json")
            .await
            .unwrap_err();

        assert_eq!(err.message(), "failed to load specification");
        assert_eq!(err.detail(), Some("HTTP error, status: 503".to_string()));
    }

    #[test]
    fn test_parse_error_has_no_detail() {
        let err = parse_spec_text("{oops").unwrap_err();
        assert_eq!(
            err.message(),
            "could not parse specification, expected valid JSON or YAML"
        );
        assert_eq!(err.detail(), None);
    }
}
