//! Operation view over a path-item method entry

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::parameter::ParameterSet;
use crate::method::HttpMethod;

/// Placeholder summary for operations that declare neither a summary nor
/// a description.
pub const UNTITLED_OPERATION: &str = "untitled operation";

/// One HTTP-method handler under a path, as declared by the document.
///
/// Wraps the raw operation object; accessors are tolerant of missing or
/// malformed fields and never panic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Operation {
    raw: Value,
}

impl Operation {
    /// Creates an operation view over a raw operation object.
    #[must_use]
    pub const fn new(raw: Value) -> Self {
        Self { raw }
    }

    /// Returns the raw operation object.
    #[must_use]
    pub const fn as_value(&self) -> &Value {
        &self.raw
    }

    /// Resolves the display summary: `summary`, then `description`, then
    /// a literal placeholder.
    #[must_use]
    pub fn summary(&self) -> &str {
        self.raw
            .get("summary")
            .or_else(|| self.raw.get("description"))
            .and_then(Value::as_str)
            .unwrap_or(UNTITLED_OPERATION)
    }

    /// Returns the long description, if declared.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.raw.get("description").and_then(Value::as_str)
    }

    /// Returns the declared `operationId`, if any.
    #[must_use]
    pub fn operation_id(&self) -> Option<&str> {
        self.raw.get("operationId").and_then(Value::as_str)
    }

    /// Partitions the operation's inline parameter declarations by
    /// location. `$ref` declarations are excluded from every bucket.
    #[must_use]
    pub fn parameters(&self) -> ParameterSet {
        match self.raw.get("parameters").and_then(Value::as_array) {
            Some(values) => ParameterSet::from_values(values),
            None => ParameterSet::default(),
        }
    }

    /// Returns true if the operation declares a request body.
    #[must_use]
    pub fn has_request_body(&self) -> bool {
        self.raw.get("requestBody").is_some()
    }

    /// Returns the declared `application/json` request example, if any.
    #[must_use]
    pub fn request_example(&self) -> Option<&Value> {
        self.raw
            .get("requestBody")
            .and_then(|body| body.get("content"))
            .and_then(|content| content.get("application/json"))
            .and_then(|media| media.get("example"))
    }

    /// Enumerates the declared responses in document order.
    #[must_use]
    pub fn responses(&self) -> Vec<ResponseDeclaration> {
        let Some(responses) = self.raw.get("responses").and_then(Value::as_object) else {
            return Vec::new();
        };

        responses
            .iter()
            .map(|(status, response)| ResponseDeclaration {
                status: status.clone(),
                description: response
                    .get("description")
                    .and_then(Value::as_str)
                    .map(ToString::to_string),
                example: response
                    .get("content")
                    .and_then(|content| content.get("application/json"))
                    .and_then(|media| media.get("example"))
                    .cloned(),
            })
            .collect()
    }
}

/// One declared response of an operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseDeclaration {
    /// Status code key as written in the document (e.g. "200", "default").
    pub status: String,
    /// Optional response description.
    pub description: Option<String>,
    /// Optional `application/json` example for display.
    pub example: Option<Value>,
}

/// An enumerated `(path, method, operation)` triple.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Endpoint {
    /// Path template (e.g. `/pods/{podId}`).
    pub path: String,
    /// HTTP method of the operation.
    pub method: HttpMethod,
    /// The operation declaration.
    pub operation: Operation,
}

impl Endpoint {
    /// Returns a stable identifier for the endpoint.
    ///
    /// Prefers the declared `operationId`; otherwise derives
    /// `METHOD_path` with non-alphanumeric path characters replaced by
    /// underscores.
    #[must_use]
    pub fn operation_id(&self) -> String {
        if let Some(id) = self.operation.operation_id() {
            return id.to_string();
        }

        let sanitized: String = self
            .path
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect();
        format!("{}_{}", self.method.as_str(), sanitized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn endpoint(raw: Value) -> Endpoint {
        Endpoint {
            path: "/pods/{podId}".to_string(),
            method: HttpMethod::Get,
            operation: Operation::new(raw),
        }
    }

    #[test]
    fn test_summary_prefers_summary() {
        let op = Operation::new(json!({ "summary": "Get a pod", "description": "Longer text" }));
        assert_eq!(op.summary(), "Get a pod");
    }

    #[test]
    fn test_summary_falls_back_to_description() {
        let op = Operation::new(json!({ "description": "Longer text" }));
        assert_eq!(op.summary(), "Longer text");
    }

    #[test]
    fn test_summary_placeholder() {
        let op = Operation::new(json!({}));
        assert_eq!(op.summary(), UNTITLED_OPERATION);
    }

    #[test]
    fn test_operation_id_fallback() {
        let ep = endpoint(json!({}));
        assert_eq!(ep.operation_id(), "GET__pods__podId_");

        let named = endpoint(json!({ "operationId": "GetPod" }));
        assert_eq!(named.operation_id(), "GetPod");
    }

    #[test]
    fn test_request_example() {
        let op = Operation::new(json!({
            "requestBody": {
                "content": {
                    "application/json": { "example": { "name": "pod1" } }
                }
            }
        }));
        assert!(op.has_request_body());
        assert_eq!(op.request_example(), Some(&json!({ "name": "pod1" })));
    }

    #[test]
    fn test_responses_enumeration() {
        let op = Operation::new(json!({
            "responses": {
                "200": {
                    "description": "OK",
                    "content": { "application/json": { "example": { "id": "1" } } }
                },
                "404": { "description": "Not found" }
            }
        }));

        let responses = op.responses();
        assert_eq!(responses.len(), 2);
        assert_eq!(responses[0].status, "200");
        assert_eq!(responses[0].example, Some(json!({ "id": "1" })));
        assert_eq!(responses[1].status, "404");
        assert!(responses[1].example.is_none());
    }

    #[test]
    fn test_missing_responses_is_empty() {
        let op = Operation::new(json!({}));
        assert!(op.responses().is_empty());
    }
}
