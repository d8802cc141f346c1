//! Persistence ports. Handlers depend on these traits only, so the store
//! behind them (PostgreSQL or the in-memory fallback) stays swappable.

mod customer_repository;
mod inventory_repository;
mod project_repository;
mod quote_repository;
mod subsidy_repository;
mod user_repository;

pub use customer_repository::CustomerRepository;
pub use inventory_repository::InventoryRepository;
pub use project_repository::ProjectRepository;
pub use quote_repository::QuoteRepository;
pub use subsidy_repository::SubsidyRepository;
pub use user_repository::UserRepository;

/// Errors raised by repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    /// Store connection could not be established or was lost.
    #[error("repository connection failed: {message}")]
    Connection { message: String },

    /// Query or mutation failed during execution.
    #[error("repository query failed: {message}")]
    Query { message: String },

    /// A store-level uniqueness constraint rejected the write.
    #[error("{message}")]
    Conflict { message: String },
}

impl RepositoryError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }

    /// Create a conflict error with the given message.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_accept_str() {
        assert_eq!(
            RepositoryError::connection("refused").to_string(),
            "repository connection failed: refused"
        );
        assert_eq!(
            RepositoryError::query("timeout").to_string(),
            "repository query failed: timeout"
        );
        assert_eq!(
            RepositoryError::conflict("email already registered").to_string(),
            "email already registered"
        );
    }
}
