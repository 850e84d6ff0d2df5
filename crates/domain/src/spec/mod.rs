//! Specification document model
//!
//! An immutable, parsed OpenAPI document and the resolution logic that
//! turns it into `(path, method, operation)` triples. No schema
//! validation happens here: a syntactically valid but semantically
//! incomplete document (e.g. missing `paths`) simply resolves to an
//! empty endpoint list.

mod operation;
mod parameter;

pub use operation::{Endpoint, Operation, ResponseDeclaration, UNTITLED_OPERATION};
pub use parameter::{ParameterDeclaration, ParameterLocation, ParameterSet};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::method::HttpMethod;

/// An immutable parsed specification document.
///
/// YAML input is converted into the same value tree at parse time, so a
/// single representation backs both formats. Replacing a project's
/// specification produces a new document; nothing mutates in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpecDocument {
    raw: Value,
}

impl SpecDocument {
    /// Wraps a parsed value tree as a specification document.
    #[must_use]
    pub const fn new(raw: Value) -> Self {
        Self { raw }
    }

    /// Returns the underlying value tree.
    #[must_use]
    pub const fn as_value(&self) -> &Value {
        &self.raw
    }

    /// Returns the document's `info.title`, if declared.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.raw
            .get("info")
            .and_then(|info| info.get("title"))
            .and_then(Value::as_str)
    }

    /// Enumerates every `(path, method, operation)` triple.
    ///
    /// Only the seven recognized methods are considered; any other key
    /// under a path item (`parameters`, `$ref`, vendor extensions) is
    /// ignored at the method position.
    #[must_use]
    pub fn endpoints(&self) -> Vec<Endpoint> {
        let Some(paths) = self.raw.get("paths").and_then(Value::as_object) else {
            return Vec::new();
        };

        let mut endpoints = Vec::new();
        for (path, path_item) in paths {
            for method in HttpMethod::all() {
                if let Some(operation) = path_item.get(method.spec_key()) {
                    endpoints.push(Endpoint {
                        path: path.clone(),
                        method: *method,
                        operation: Operation::new(operation.clone()),
                    });
                }
            }
        }
        endpoints
    }

    /// Resolves the operation at a given path and method.
    #[must_use]
    pub fn operation(&self, path: &str, method: HttpMethod) -> Option<Operation> {
        self.raw
            .get("paths")
            .and_then(|paths| paths.get(path))
            .and_then(|item| item.get(method.spec_key()))
            .map(|op| Operation::new(op.clone()))
    }

    /// Resolves the default server URL.
    ///
    /// Returns the first entry of `servers` if the document declares any;
    /// otherwise the caller-supplied application origin.
    #[must_use]
    pub fn default_server(&self, fallback_origin: &str) -> String {
        self.raw
            .get("servers")
            .and_then(Value::as_array)
            .and_then(|servers| servers.first())
            .and_then(|server| server.get("url"))
            .and_then(Value::as_str)
            .map_or_else(|| fallback_origin.to_string(), ToString::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn sample_doc() -> SpecDocument {
        SpecDocument::new(json!({
            "openapi": "3.0.0",
            "info": { "title": "Pet Store" },
            "paths": {
                "/pods/{podId}": {
                    "parameters": [{ "name": "ignored", "in": "query" }],
                    "x-vendor": true,
                    "get": { "summary": "Get a pod" },
                    "delete": { "summary": "Delete a pod" }
                },
                "/pods": {
                    "post": { "summary": "Create a pod" }
                }
            }
        }))
    }

    #[test]
    fn test_endpoint_enumeration_filters_non_methods() {
        let endpoints = sample_doc().endpoints();
        assert_eq!(endpoints.len(), 3);
        assert!(
            endpoints
                .iter()
                .all(|e| e.path.starts_with("/pods"))
        );
        // `parameters` and `x-vendor` keys are not operations.
        assert!(
            endpoints
                .iter()
                .any(|e| e.method == HttpMethod::Delete)
        );
    }

    #[test]
    fn test_operation_lookup() {
        let doc = sample_doc();
        let op = doc.operation("/pods", HttpMethod::Post);
        assert_eq!(op.map(|o| o.summary().to_string()).as_deref(), Some("Create a pod"));
        assert!(doc.operation("/pods", HttpMethod::Put).is_none());
        assert!(doc.operation("/missing", HttpMethod::Get).is_none());
    }

    #[test]
    fn test_missing_paths_is_empty() {
        let doc = SpecDocument::new(json!({ "openapi": "3.0.0" }));
        assert!(doc.endpoints().is_empty());
    }

    #[test]
    fn test_default_server_prefers_first_entry() {
        let doc = SpecDocument::new(json!({
            "servers": [
                { "url": "https://api.example.com" },
                { "url": "https://staging.example.com" }
            ]
        }));
        assert_eq!(
            doc.default_server("http://localhost:3000"),
            "https://api.example.com"
        );
    }

    #[test]
    fn test_default_server_falls_back_to_origin() {
        let doc = SpecDocument::new(json!({ "paths": {} }));
        assert_eq!(
            doc.default_server("http://localhost:3000"),
            "http://localhost:3000"
        );
    }

    #[test]
    fn test_title() {
        assert_eq!(sample_doc().title(), Some("Pet Store"));
        assert!(SpecDocument::new(json!({})).title().is_none());
    }
}
