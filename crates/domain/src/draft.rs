//! Request draft state

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// User-supplied values for the currently selected endpoint.
///
/// Reset whenever the selection changes. Never persisted directly; only
/// the dispatch outcome built from a draft reaches the history store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestDraft {
    /// Target server URL.
    pub server_url: String,
    /// Parameter name to supplied value (path and query share one map,
    /// mirroring the single value table the editor presents).
    pub params: BTreeMap<String, String>,
    /// Header name to supplied value.
    pub headers: BTreeMap<String, String>,
    /// Raw request body text; empty means no body.
    pub body: String,
}

impl RequestDraft {
    /// Creates an empty draft targeting the given server.
    #[must_use]
    pub fn for_server(server_url: impl Into<String>) -> Self {
        Self {
            server_url: server_url.into(),
            ..Self::default()
        }
    }

    /// Sets a parameter value.
    pub fn set_param(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.params.insert(name.into(), value.into());
    }

    /// Sets a header value.
    pub fn set_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.headers.insert(name.into(), value.into());
    }

    /// Looks up a supplied parameter value.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_for_server() {
        let draft = RequestDraft::for_server("https://api.example.com");
        assert_eq!(draft.server_url, "https://api.example.com");
        assert!(draft.params.is_empty());
        assert!(draft.body.is_empty());
    }

    #[test]
    fn test_set_and_get_values() {
        let mut draft = RequestDraft::default();
        draft.set_param("podId", "42");
        draft.set_header("X-Request-Id", "abc");

        assert_eq!(draft.param("podId"), Some("42"));
        assert_eq!(draft.headers.get("X-Request-Id").map(String::as_str), Some("abc"));
        assert_eq!(draft.param("missing"), None);
    }
}
