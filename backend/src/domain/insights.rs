//! Dashboard insights: summary statistics over customers, projects,
//! inventory, and quotes.
//!
//! The computation is a pure fold over full collection scans. There is no
//! caching and the four scans are not isolated from concurrent writes; a
//! report may mix pre- and post-update values, which is acceptable for a
//! dashboard. Any failing scan fails the whole request.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::{
    CustomerRepository, InventoryRepository, ProjectRepository, QuoteRepository, RepositoryError,
};
use crate::domain::{Customer, CustomerType, InventoryItem, Project, Quote};

/// Notional value of one unit of stock, used for the dashboard stock-value
/// figure.
pub const STOCK_UNIT_PRICE: i64 = 1_000;

/// Summary object consumed by the dashboard view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardInsights {
    pub total_customers: u64,
    /// Mean of `energy_needs`, rendered with two decimals ("0.00" when
    /// there are no customers).
    pub avg_energy_needs: String,
    pub residential_count: u64,
    pub commercial_count: u64,
    pub total_projects: u64,
    pub active_projects: u64,
    pub low_stock_count: u64,
    pub total_stock_value: i64,
    pub total_subsidies_applied: f64,
}

/// Fold the four collections into the dashboard summary.
pub fn compute_insights(
    customers: &[Customer],
    projects: &[Project],
    inventory: &[InventoryItem],
    quotes: &[Quote],
) -> DashboardInsights {
    let avg_energy_needs = if customers.is_empty() {
        "0.00".to_owned()
    } else {
        let sum: f64 = customers.iter().map(|c| c.energy_needs).sum();
        format!("{:.2}", sum / customers.len() as f64)
    };
    let residential_count = customers
        .iter()
        .filter(|c| c.customer_type == CustomerType::Residential)
        .count() as u64;
    let commercial_count = customers
        .iter()
        .filter(|c| c.customer_type == CustomerType::Commercial)
        .count() as u64;
    let active_projects = projects.iter().filter(|p| p.status.is_active()).count() as u64;
    let low_stock_count = inventory.iter().filter(|i| i.is_low_stock()).count() as u64;
    let total_stock_value: i64 = inventory
        .iter()
        .map(|i| i64::from(i.stock_level) * STOCK_UNIT_PRICE)
        .sum();
    let total_subsidies_applied: f64 = quotes.iter().map(|q| q.subsidy_applied).sum();

    DashboardInsights {
        total_customers: customers.len() as u64,
        avg_energy_needs,
        residential_count,
        commercial_count,
        total_projects: projects.len() as u64,
        active_projects,
        low_stock_count,
        total_stock_value,
        total_subsidies_applied,
    }
}

/// Scans the four collections through their ports and combines the scalars.
#[derive(Clone)]
pub struct InsightsService {
    customers: Arc<dyn CustomerRepository>,
    projects: Arc<dyn ProjectRepository>,
    inventory: Arc<dyn InventoryRepository>,
    quotes: Arc<dyn QuoteRepository>,
}

impl InsightsService {
    /// Bundle the repositories the aggregation reads from.
    pub fn new(
        customers: Arc<dyn CustomerRepository>,
        projects: Arc<dyn ProjectRepository>,
        inventory: Arc<dyn InventoryRepository>,
        quotes: Arc<dyn QuoteRepository>,
    ) -> Self {
        Self {
            customers,
            projects,
            inventory,
            quotes,
        }
    }

    /// Recompute the summary from scratch.
    pub async fn compute(&self) -> Result<DashboardInsights, RepositoryError> {
        let customers = self.customers.list().await?;
        let projects = self.projects.list().await?;
        let inventory = self.inventory.list().await?;
        let quotes = self.quotes.list().await?;
        Ok(compute_insights(&customers, &projects, &inventory, &quotes))
    }
}
