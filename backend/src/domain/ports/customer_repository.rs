//! Port abstraction for customer persistence adapters.
use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Customer, CustomerPatch, NewCustomer};

use super::RepositoryError;

#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Return every customer record.
    async fn list(&self) -> Result<Vec<Customer>, RepositoryError>;

    /// Fetch a customer by identifier.
    async fn find(&self, id: Uuid) -> Result<Option<Customer>, RepositoryError>;

    /// Persist a new customer, returning it with generated id and timestamps.
    async fn insert(&self, new: NewCustomer) -> Result<Customer, RepositoryError>;

    /// Merge the patch onto the record. `None` when the id is unknown.
    async fn update(
        &self,
        id: Uuid,
        patch: CustomerPatch,
    ) -> Result<Option<Customer>, RepositoryError>;

    /// Remove the record. `false` when the id is unknown.
    async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError>;
}
