//! Parameter declaration types

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Where a declared parameter is placed in the outgoing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    /// Substituted into the `{name}` token of the path template.
    Path,
    /// Serialized into the URL query string.
    Query,
    /// Merged into the outgoing header set.
    Header,
}

impl ParameterLocation {
    /// Parses the `in` field of a parameter object.
    ///
    /// Returns `None` for locations the request builder does not place
    /// (e.g. `cookie`).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "path" => Some(Self::Path),
            "query" => Some(Self::Query),
            "header" => Some(Self::Header),
            _ => None,
        }
    }
}

/// Metadata describing one expected input of an operation.
///
/// The schema is carried for display only; supplied values are never
/// validated against it at request time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterDeclaration {
    /// Parameter name, unique within an operation + location pair.
    pub name: String,
    /// Placement of the parameter in the request.
    pub location: ParameterLocation,
    /// Whether the document marks the parameter as required.
    pub required: bool,
    /// Optional human-readable description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Optional schema value, kept verbatim for display.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<Value>,
}

impl ParameterDeclaration {
    /// Extracts a declaration from a parameter object in the document.
    ///
    /// Returns `None` for `$ref` references (the resolver does not
    /// dereference components), for objects without a usable `name` or
    /// `in`, and for unsupported locations.
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        if value.get("$ref").is_some() {
            return None;
        }

        let name = value.get("name")?.as_str()?.to_string();
        let location = ParameterLocation::parse(value.get("in")?.as_str()?)?;
        let required = value
            .get("required")
            .and_then(Value::as_bool)
            .unwrap_or(false);
        let description = value
            .get("description")
            .and_then(Value::as_str)
            .map(ToString::to_string);
        let schema = value.get("schema").cloned();

        Some(Self {
            name,
            location,
            required,
            description,
            schema,
        })
    }
}

/// Parameter declarations of one operation, partitioned by location.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParameterSet {
    /// Path-location declarations.
    pub path: Vec<ParameterDeclaration>,
    /// Query-location declarations.
    pub query: Vec<ParameterDeclaration>,
    /// Header-location declarations.
    pub header: Vec<ParameterDeclaration>,
}

impl ParameterSet {
    /// Partitions a list of parameter objects by location.
    ///
    /// Declarations that [`ParameterDeclaration::from_value`] rejects are
    /// excluded from every bucket.
    #[must_use]
    pub fn from_values(values: &[Value]) -> Self {
        let mut set = Self::default();
        for declaration in values.iter().filter_map(ParameterDeclaration::from_value) {
            match declaration.location {
                ParameterLocation::Path => set.path.push(declaration),
                ParameterLocation::Query => set.query.push(declaration),
                ParameterLocation::Header => set.header.push(declaration),
            }
        }
        set
    }

    /// Returns path and query declarations in declaration order.
    ///
    /// The draft editor presents these two buckets as a single value
    /// table, so they are frequently consumed together.
    pub fn path_and_query(&self) -> impl Iterator<Item = &ParameterDeclaration> {
        self.path.iter().chain(self.query.iter())
    }

    /// Returns true if no declarations survived partitioning.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.path.is_empty() && self.query.is_empty() && self.header.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_declaration_from_value() {
        let value = json!({
            "name": "podId",
            "in": "path",
            "required": true,
            "description": "Pod identifier",
            "schema": { "type": "string" }
        });

        let declaration = ParameterDeclaration::from_value(&value).unwrap();
        assert_eq!(declaration.name, "podId");
        assert_eq!(declaration.location, ParameterLocation::Path);
        assert!(declaration.required);
        assert_eq!(declaration.description.as_deref(), Some("Pod identifier"));
    }

    #[test]
    fn test_ref_declaration_is_excluded() {
        let value = json!({ "$ref": "#/components/parameters/PodId" });
        assert!(ParameterDeclaration::from_value(&value).is_none());
    }

    #[test]
    fn test_cookie_location_is_excluded() {
        let value = json!({ "name": "session", "in": "cookie" });
        assert!(ParameterDeclaration::from_value(&value).is_none());
    }

    #[test]
    fn test_required_defaults_to_false() {
        let value = json!({ "name": "q", "in": "query" });
        let declaration = ParameterDeclaration::from_value(&value).unwrap();
        assert!(!declaration.required);
    }

    #[test]
    fn test_partition_by_location() {
        let values = vec![
            json!({ "name": "id", "in": "path", "required": true }),
            json!({ "name": "q", "in": "query" }),
            json!({ "name": "X-Request-Id", "in": "header" }),
            json!({ "$ref": "#/components/parameters/Skipped" }),
        ];

        let set = ParameterSet::from_values(&values);
        assert_eq!(set.path.len(), 1);
        assert_eq!(set.query.len(), 1);
        assert_eq!(set.header.len(), 1);
        assert_eq!(set.path_and_query().count(), 2);
        assert!(!set.is_empty());
    }
}
