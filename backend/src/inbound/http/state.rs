//! Shared HTTP adapter state.
//!
//! Handlers receive this via `actix_web::web::Data`, so they depend only on
//! the domain ports and stay testable without a database.

use std::sync::Arc;

use crate::domain::ports::{
    CustomerRepository, InventoryRepository, ProjectRepository, QuoteRepository,
    SubsidyRepository, UserRepository,
};
use crate::domain::InsightsService;
use crate::outbound::memory::InMemoryStore;

/// Dependency bundle for HTTP handlers: one port per entity plus the
/// dashboard aggregation service.
#[derive(Clone)]
pub struct HttpState {
    pub customers: Arc<dyn CustomerRepository>,
    pub quotes: Arc<dyn QuoteRepository>,
    pub subsidies: Arc<dyn SubsidyRepository>,
    pub projects: Arc<dyn ProjectRepository>,
    pub inventory: Arc<dyn InventoryRepository>,
    pub users: Arc<dyn UserRepository>,
    pub insights: InsightsService,
}

impl HttpState {
    /// Construct state from the six repository ports.
    pub fn new(
        customers: Arc<dyn CustomerRepository>,
        quotes: Arc<dyn QuoteRepository>,
        subsidies: Arc<dyn SubsidyRepository>,
        projects: Arc<dyn ProjectRepository>,
        inventory: Arc<dyn InventoryRepository>,
        users: Arc<dyn UserRepository>,
    ) -> Self {
        let insights = InsightsService::new(
            customers.clone(),
            projects.clone(),
            inventory.clone(),
            quotes.clone(),
        );
        Self {
            customers,
            quotes,
            subsidies,
            projects,
            inventory,
            users,
            insights,
        }
    }

    /// State backed by the in-memory store, used when no database is
    /// configured and by the test suites.
    pub fn in_memory() -> Self {
        let store = Arc::new(InMemoryStore::default());
        Self::new(
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
            store,
        )
    }
}
