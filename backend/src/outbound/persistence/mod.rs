//! PostgreSQL persistence adapters using Diesel.
//!
//! Thin adapters only: each repository translates between row structs and
//! domain types, mapping database failures onto [`RepositoryError`]. Row
//! structs and the schema stay private to this module.
//!
//! [`RepositoryError`]: crate::domain::ports::RepositoryError

mod diesel_customer_repository;
mod diesel_inventory_repository;
mod diesel_project_repository;
mod diesel_quote_repository;
mod diesel_subsidy_repository;
mod diesel_user_repository;
mod error_map;
mod models;
mod pool;
mod schema;

pub use diesel_customer_repository::DieselCustomerRepository;
pub use diesel_inventory_repository::DieselInventoryRepository;
pub use diesel_project_repository::DieselProjectRepository;
pub use diesel_quote_repository::DieselQuoteRepository;
pub use diesel_subsidy_repository::DieselSubsidyRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use pool::{DbPool, PoolConfig, PoolError};

use diesel::Connection;
use diesel_async::async_connection_wrapper::AsyncConnectionWrapper;
use diesel_async::AsyncPgConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

use crate::domain::ports::RepositoryError;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Apply any pending embedded migrations.
///
/// The migration harness is synchronous, so this opens a dedicated wrapped
/// connection on a blocking thread rather than borrowing from the pool.
pub async fn run_migrations(database_url: &str) -> Result<(), RepositoryError> {
    let url = database_url.to_owned();
    tokio::task::spawn_blocking(move || {
        let mut conn = AsyncConnectionWrapper::<AsyncPgConnection>::establish(&url)
            .map_err(|err| RepositoryError::connection(err.to_string()))?;
        conn.run_pending_migrations(MIGRATIONS)
            .map(|_| ())
            .map_err(|err| RepositoryError::query(err.to_string()))
    })
    .await
    .map_err(|err| RepositoryError::connection(err.to_string()))?
}
