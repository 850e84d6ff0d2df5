//! Endpoint selection state

use serde::{Deserialize, Serialize};

use crate::method::HttpMethod;

/// The `(path, method)` pair identifying the currently inspected endpoint.
///
/// Transient view state: created when the user picks an endpoint, cleared
/// when they navigate away or re-select the same endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointSelection {
    /// Path template of the selected endpoint.
    pub path: String,
    /// HTTP method of the selected endpoint.
    pub method: HttpMethod,
}

impl EndpointSelection {
    /// Creates a selection for the given endpoint.
    #[must_use]
    pub fn new(path: impl Into<String>, method: HttpMethod) -> Self {
        Self {
            path: path.into(),
            method,
        }
    }

    /// Applies toggle semantics: picking the endpoint that is already
    /// selected clears the selection, picking any other replaces it.
    #[must_use]
    pub fn toggle(current: Option<&Self>, next: Self) -> Option<Self> {
        match current {
            Some(selected) if *selected == next => None,
            _ => Some(next),
        }
    }
}
