//! Port abstraction for project persistence adapters.
use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{NewProject, Project, ProjectPatch};

use super::RepositoryError;

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Return every project record.
    async fn list(&self) -> Result<Vec<Project>, RepositoryError>;

    /// Fetch a project by identifier.
    async fn find(&self, id: Uuid) -> Result<Option<Project>, RepositoryError>;

    /// Persist a new project, returning it with generated id and timestamps.
    async fn insert(&self, new: NewProject) -> Result<Project, RepositoryError>;

    /// Merge the patch onto the record. `None` when the id is unknown.
    async fn update(
        &self,
        id: Uuid,
        patch: ProjectPatch,
    ) -> Result<Option<Project>, RepositoryError>;

    /// Remove the record. `false` when the id is unknown.
    async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError>;
}
