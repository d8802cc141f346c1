//! Port abstraction for subsidy persistence adapters.
use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{NewSubsidy, Subsidy, SubsidyPatch};

use super::RepositoryError;

#[async_trait]
pub trait SubsidyRepository: Send + Sync {
    /// Return every subsidy record.
    async fn list(&self) -> Result<Vec<Subsidy>, RepositoryError>;

    /// Fetch a subsidy by identifier.
    async fn find(&self, id: Uuid) -> Result<Option<Subsidy>, RepositoryError>;

    /// Persist a new subsidy, returning it with generated id and timestamps.
    async fn insert(&self, new: NewSubsidy) -> Result<Subsidy, RepositoryError>;

    /// Merge the patch onto the record. `None` when the id is unknown.
    async fn update(
        &self,
        id: Uuid,
        patch: SubsidyPatch,
    ) -> Result<Option<Subsidy>, RepositoryError>;

    /// Remove the record. `false` when the id is unknown.
    async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError>;
}
