//! Built request specification

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::method::HttpMethod;

/// A fully assembled HTTP request, ready for dispatch.
///
/// Produced by [`crate::builder::build_request`]; the dispatcher treats
/// it as an opaque value and never re-derives anything from the draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestSpec {
    /// HTTP method.
    pub method: HttpMethod,
    /// Server URL joined with the (substituted) path template.
    pub url: String,
    /// Query pairs in declaration order; already filtered of empties.
    pub query: Vec<(String, String)>,
    /// Outgoing header pairs.
    pub headers: Vec<(String, String)>,
    /// Parsed JSON body, when the draft supplied one.
    pub body: Option<Value>,
}

impl RequestSpec {
    /// Returns the URL with the encoded query string appended.
    ///
    /// Pair encoding is delegated to `serde_urlencoded`; the path part is
    /// carried verbatim.
    #[must_use]
    pub fn full_url(&self) -> String {
        if self.query.is_empty() {
            return self.url.clone();
        }
        match serde_urlencoded::to_string(&self.query) {
            Ok(encoded) => format!("{}?{}", self.url, encoded),
            Err(_) => self.url.clone(),
        }
    }
}
