//! Project use cases
//!
//! Composed workflows over the loader and the project store: creating a
//! project from freshly loaded specification input, and re-importing a
//! specification into an existing project.

use uuid::Uuid;

use spyglass_domain::Project;

use crate::error::ApplicationResult;
use crate::loader::SpecLoader;
use crate::ports::{ProjectPatch, ProjectStore, SpecFetcher};

/// Loads a specification and creates a project around it.
///
/// # Errors
///
/// Returns an error when the input cannot be loaded or parsed, when the
/// name is empty, or when the store rejects the write.
pub async fn create_project_from_input<F: SpecFetcher, S: ProjectStore>(
    loader: &SpecLoader<F>,
    store: &S,
    name: &str,
    input: &str,
) -> ApplicationResult<Project> {
    let spec = loader.load(input).await?;
    let project = Project::new(name, spec)?;
    Ok(store.create_project(project).await?)
}

/// Re-imports a specification into an existing project.
///
/// The project's document is replaced wholesale — documents are
/// immutable, so the store ends up with a new one — and its update
/// timestamp is bumped.
///
/// # Errors
///
/// Returns an error when the input cannot be loaded or parsed, or when
/// the project does not exist.
pub async fn import_into_project<F: SpecFetcher, S: ProjectStore>(
    loader: &SpecLoader<F>,
    store: &S,
    project_id: Uuid,
    input: &str,
) -> ApplicationResult<Project> {
    let spec = loader.load(input).await?;
    Ok(store
        .update_project(project_id, ProjectPatch::spec(spec))
        .await?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::Mutex;

    use spyglass_domain::HistoryEntry;

    use crate::error::ApplicationError;
    use crate::ports::{FetchError, StoreError};

    struct StaticFetcher;

    impl SpecFetcher for StaticFetcher {
        async fn fetch_text(&self, _url: &str) -> Result<String, FetchError> {
            Err(FetchError::Network("offline".to_string()))
        }
    }

    #[derive(Default)]
    struct MemoryStore {
        projects: Mutex<Vec<Project>>,
    }

    impl ProjectStore for MemoryStore {
        async fn create_project(&self, project: Project) -> Result<Project, StoreError> {
            self.projects
                .lock()
                .map_err(|e| StoreError::Io(e.to_string()))?
                .push(project.clone());
            Ok(project)
        }

        async fn update_project(
            &self,
            id: Uuid,
            patch: ProjectPatch,
        ) -> Result<Project, StoreError> {
            let mut projects = self
                .projects
                .lock()
                .map_err(|e| StoreError::Io(e.to_string()))?;
            let project = projects
                .iter_mut()
                .find(|p| p.id == id)
                .ok_or_else(|| StoreError::NotFound(format!("project {id}")))?;
            if let Some(spec) = patch.spec {
                project.spec = spec;
            }
            Ok(project.clone())
        }

        async fn get_project(&self, id: Uuid) -> Result<Option<Project>, StoreError> {
            Ok(self
                .projects
                .lock()
                .map_err(|e| StoreError::Io(e.to_string()))?
                .iter()
                .find(|p| p.id == id)
                .cloned())
        }

        async fn all_projects(&self) -> Result<Vec<Project>, StoreError> {
            Ok(self
                .projects
                .lock()
                .map_err(|e| StoreError::Io(e.to_string()))?
                .clone())
        }

        async fn delete_project(&self, _id: Uuid) -> Result<(), StoreError> {
            Ok(())
        }

        async fn add_history(&self, _entry: HistoryEntry) -> Result<(), StoreError> {
            Ok(())
        }

        async fn project_history(
            &self,
            _project_id: Uuid,
        ) -> Result<Vec<HistoryEntry>, StoreError> {
            Ok(Vec::new())
        }

        async fn clear_project_history(&self, _project_id: Uuid) -> Result<(), StoreError> {
            Ok(())
        }
    }

    fn loader() -> SpecLoader<StaticFetcher> {
        SpecLoader::new(StaticFetcher)
    }

    #[tokio::test]
    async fn test_create_project_from_pasted_text() {
        let store = MemoryStore::default();
        let project = create_project_from_input(
            &loader(),
            &store,
            "Pet Store",
            r#"{"openapi": "3.0.0", "paths": {}}"#,
        )
        .await
        .unwrap();

        assert_eq!(project.name, "Pet Store");
        assert_eq!(store.get_project(project.id).await.unwrap(), Some(project));
    }

    #[tokio::test]
    async fn test_create_project_rejects_empty_name() {
        let store = MemoryStore::default();
        let result =
            create_project_from_input(&loader(), &store, "  ", r#"{"openapi": "3.0.0"}"#).await;
        assert!(matches!(result, Err(ApplicationError::Domain(_))));
    }

    #[tokio::test]
    async fn test_create_project_surfaces_load_errors() {
        let store = MemoryStore::default();
        let result = create_project_from_input(&loader(), &store, "Broken", "{not json: , broken")
            .await;
        assert!(matches!(result, Err(ApplicationError::Load(_))));
    }

    #[tokio::test]
    async fn test_import_replaces_the_document() {
        let store = MemoryStore::default();
        let project = create_project_from_input(
            &loader(),
            &store,
            "Pet Store",
            r#"{"openapi": "3.0.0", "paths": {}}"#,
        )
        .await
        .unwrap();

        let updated = import_into_project(
            &loader(),
            &store,
            project.id,
            "paths:\n  /pods:\n    get: {}\n",
        )
        .await
        .unwrap();

        assert_eq!(updated.spec.endpoints().len(), 1);
    }

    #[tokio::test]
    async fn test_import_into_unknown_project_fails() {
        let store = MemoryStore::default();
        let result = import_into_project(
            &loader(),
            &store,
            spyglass_domain::generate_id(),
            r#"{"openapi": "3.0.0"}"#,
        )
        .await;
        assert!(matches!(result, Err(ApplicationError::Store(_))));
    }
}
