//! File-system project and history persistence.
//!
//! Stores projects and history in the platform-specific config
//! directory:
//! - Linux/macOS: ~/.config/spyglass/{projects,history}.json
//! - Windows: %APPDATA%/spyglass/{projects,history}.json

use std::path::PathBuf;

use chrono::Utc;
use tokio::fs;
use uuid::Uuid;

use spyglass_application::ports::{ProjectPatch, ProjectStore, StoreError};
use spyglass_domain::{HistoryEntry, Project};

use crate::serialization::{SerializationError, from_json_bytes, to_json_stable_bytes};

const PROJECTS_FILE: &str = "projects.json";
const HISTORY_FILE: &str = "history.json";

impl From<SerializationError> for StoreError {
    fn from(error: SerializationError) -> Self {
        Self::Serialization(error.to_string())
    }
}

/// File-system implementation of the `ProjectStore` port.
///
/// Both files are read and rewritten whole on each operation; the store
/// tolerates missing files by treating them as empty.
#[derive(Debug, Clone)]
pub struct FileProjectStore {
    root: PathBuf,
}

impl FileProjectStore {
    /// Creates a store rooted in the platform config directory.
    ///
    /// Returns `None` when no config directory can be determined.
    #[must_use]
    pub fn in_config_dir() -> Option<Self> {
        dirs::config_dir().map(|dir| Self {
            root: dir.join("spyglass"),
        })
    }

    /// Creates a store rooted at an explicit directory.
    #[must_use]
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn projects_path(&self) -> PathBuf {
        self.root.join(PROJECTS_FILE)
    }

    fn history_path(&self) -> PathBuf {
        self.root.join(HISTORY_FILE)
    }

    async fn load_projects(&self) -> Result<Vec<Project>, StoreError> {
        Self::load_file(self.projects_path()).await
    }

    async fn save_projects(&self, projects: &[Project]) -> Result<(), StoreError> {
        self.save_file(self.projects_path(), projects).await
    }

    async fn load_history(&self) -> Result<Vec<HistoryEntry>, StoreError> {
        Self::load_file(self.history_path()).await
    }

    async fn save_history(&self, history: &[HistoryEntry]) -> Result<(), StoreError> {
        self.save_file(self.history_path(), history).await
    }

    async fn load_file<T: serde::de::DeserializeOwned>(
        path: PathBuf,
    ) -> Result<Vec<T>, StoreError> {
        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read(&path)
            .await
            .map_err(|e| StoreError::Io(e.to_string()))?;
        Ok(from_json_bytes(&content)?)
    }

    async fn save_file<T: serde::Serialize>(
        &self,
        path: PathBuf,
        value: &[T],
    ) -> Result<(), StoreError> {
        fs::create_dir_all(&self.root)
            .await
            .map_err(|e| StoreError::Io(e.to_string()))?;

        let content = to_json_stable_bytes(&value)?;
        fs::write(&path, content)
            .await
            .map_err(|e| StoreError::Io(e.to_string()))
    }
}

impl ProjectStore for FileProjectStore {
    async fn create_project(&self, project: Project) -> Result<Project, StoreError> {
        let mut projects = self.load_projects().await?;
        projects.push(project.clone());
        self.save_projects(&projects).await?;
        Ok(project)
    }

    async fn update_project(&self, id: Uuid, patch: ProjectPatch) -> Result<Project, StoreError> {
        let mut projects = self.load_projects().await?;

        let project = projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| StoreError::NotFound(format!("project {id}")))?;

        if let Some(name) = patch.name {
            project.name = name;
        }
        if let Some(description) = patch.description {
            project.description = Some(description);
        }
        if let Some(spec) = patch.spec {
            project.spec = spec;
        }
        if let Some(server_url) = patch.server_url {
            project.server_url = Some(server_url);
        }
        project.updated_at = Utc::now();

        let updated = project.clone();
        self.save_projects(&projects).await?;
        Ok(updated)
    }

    async fn get_project(&self, id: Uuid) -> Result<Option<Project>, StoreError> {
        let projects = self.load_projects().await?;
        Ok(projects.into_iter().find(|p| p.id == id))
    }

    async fn all_projects(&self) -> Result<Vec<Project>, StoreError> {
        let mut projects = self.load_projects().await?;
        projects.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(projects)
    }

    async fn delete_project(&self, id: Uuid) -> Result<(), StoreError> {
        let mut projects = self.load_projects().await?;
        projects.retain(|p| p.id != id);
        self.save_projects(&projects).await
    }

    async fn add_history(&self, entry: HistoryEntry) -> Result<(), StoreError> {
        let mut history = self.load_history().await?;
        history.push(entry);
        self.save_history(&history).await
    }

    async fn project_history(&self, project_id: Uuid) -> Result<Vec<HistoryEntry>, StoreError> {
        let history = self.load_history().await?;
        Ok(history
            .into_iter()
            .filter(|e| e.project_id == project_id)
            .collect())
    }

    async fn clear_project_history(&self, project_id: Uuid) -> Result<(), StoreError> {
        let mut history = self.load_history().await?;
        history.retain(|e| e.project_id != project_id);
        self.save_history(&history).await
    }
}
