//! Port abstraction for account persistence adapters.
use async_trait::async_trait;

use crate::domain::{NewUser, User};

use super::RepositoryError;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new account. Fails with [`RepositoryError::Conflict`] when
    /// the email is already registered.
    async fn insert(&self, new: NewUser) -> Result<User, RepositoryError>;

    /// Fetch an account by its (lowercased) email.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;
}
