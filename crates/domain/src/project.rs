//! Project entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{DomainError, DomainResult};
use crate::spec::SpecDocument;

/// A durable project: one imported specification plus its metadata.
///
/// Owned by the persistence store; the core reads and writes it only
/// through the store's contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Optional description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The specification document this project owns.
    pub spec: SpecDocument,
    /// Optional default server URL for dispatches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_url: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp; bumped on every store update.
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Creates a new project around a specification document.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidIdentifier`] when the name is empty
    /// or whitespace-only.
    pub fn new(name: impl Into<String>, spec: SpecDocument) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::InvalidIdentifier(
                "project name must not be empty".to_string(),
            ));
        }

        let now = Utc::now();
        Ok(Self {
            id: crate::generate_id(),
            name,
            description: None,
            spec,
            server_url: None,
            created_at: now,
            updated_at: now,
        })
    }

    /// Adds a description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the default server URL.
    #[must_use]
    pub fn with_server_url(mut self, server_url: impl Into<String>) -> Self {
        self.server_url = Some(server_url.into());
        self
    }
}
