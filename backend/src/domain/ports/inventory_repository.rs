//! Port abstraction for inventory persistence adapters.
use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{InventoryItem, InventoryPatch, NewInventoryItem};

use super::RepositoryError;

#[async_trait]
pub trait InventoryRepository: Send + Sync {
    /// Return every inventory item.
    async fn list(&self) -> Result<Vec<InventoryItem>, RepositoryError>;

    /// Fetch an item by identifier.
    async fn find(&self, id: Uuid) -> Result<Option<InventoryItem>, RepositoryError>;

    /// Persist a new item, returning it with generated id and timestamps.
    async fn insert(&self, new: NewInventoryItem) -> Result<InventoryItem, RepositoryError>;

    /// Merge the patch onto the record. `None` when the id is unknown.
    async fn update(
        &self,
        id: Uuid,
        patch: InventoryPatch,
    ) -> Result<Option<InventoryItem>, RepositoryError>;

    /// Remove the record. `false` when the id is unknown.
    async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError>;
}
