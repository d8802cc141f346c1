//! Port abstraction for quote persistence adapters.
use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{NewQuote, Quote, QuotePatch};

use super::RepositoryError;

#[async_trait]
pub trait QuoteRepository: Send + Sync {
    /// Return every quote record.
    async fn list(&self) -> Result<Vec<Quote>, RepositoryError>;

    /// Fetch a quote by identifier.
    async fn find(&self, id: Uuid) -> Result<Option<Quote>, RepositoryError>;

    /// Persist a new quote, returning it with generated id and timestamps.
    async fn insert(&self, new: NewQuote) -> Result<Quote, RepositoryError>;

    /// Merge the patch onto the record. `None` when the id is unknown.
    async fn update(&self, id: Uuid, patch: QuotePatch)
        -> Result<Option<Quote>, RepositoryError>;

    /// Remove the record. `false` when the id is unknown.
    async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError>;
}
