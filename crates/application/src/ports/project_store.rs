//! Project and history storage port

use std::future::Future;

use thiserror::Error;
use uuid::Uuid;

use spyglass_domain::{HistoryEntry, Project, SpecDocument};

/// Failures of the durable store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The requested entity does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// The underlying storage medium failed.
    #[error("storage I/O error: {0}")]
    Io(String),

    /// Stored data could not be serialized or deserialized.
    #[error("storage serialization error: {0}")]
    Serialization(String),
}

/// A partial project update; `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectPatch {
    /// New display name.
    pub name: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// Replacement specification document.
    pub spec: Option<SpecDocument>,
    /// New default server URL.
    pub server_url: Option<String>,
}

impl ProjectPatch {
    /// A patch that replaces the project's specification document.
    #[must_use]
    pub fn spec(spec: SpecDocument) -> Self {
        Self {
            spec: Some(spec),
            ..Self::default()
        }
    }
}

/// Port for durable project and history storage.
///
/// The core never accesses storage directly; every read and write goes
/// through this contract. History is append-only: entries are removed
/// only by [`ProjectStore::clear_project_history`].
pub trait ProjectStore: Send + Sync {
    /// Persists a new project.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when the project cannot be written.
    fn create_project(
        &self,
        project: Project,
    ) -> impl Future<Output = Result<Project, StoreError>> + Send;

    /// Applies a partial update and bumps the project's update timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when no project has the id.
    fn update_project(
        &self,
        id: Uuid,
        patch: ProjectPatch,
    ) -> impl Future<Output = Result<Project, StoreError>> + Send;

    /// Looks up one project.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when the store cannot be read.
    fn get_project(
        &self,
        id: Uuid,
    ) -> impl Future<Output = Result<Option<Project>, StoreError>> + Send;

    /// Returns all projects ordered by last update, newest first.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when the store cannot be read.
    fn all_projects(&self) -> impl Future<Output = Result<Vec<Project>, StoreError>> + Send;

    /// Deletes a project.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when the deletion cannot be persisted.
    fn delete_project(&self, id: Uuid) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Appends a history entry.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when the entry cannot be written.
    fn add_history(
        &self,
        entry: HistoryEntry,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Returns a project's history in insertion order.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when the store cannot be read.
    fn project_history(
        &self,
        project_id: Uuid,
    ) -> impl Future<Output = Result<Vec<HistoryEntry>, StoreError>> + Send;

    /// Removes every history entry of one project.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when the removal cannot be persisted.
    fn clear_project_history(
        &self,
        project_id: Uuid,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;
}
