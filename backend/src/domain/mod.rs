//! Domain model: entities, validation, aggregation, auth, and the ports the
//! adapters implement.

pub mod auth;
mod customer;
mod error;
pub mod insights;
mod inventory;
pub mod ports;
mod project;
mod quote;
mod subsidy;
mod user;
pub mod validation;

pub use customer::{Customer, CustomerPatch, CustomerType, NewCustomer};
pub use error::{DomainError, ErrorCode};
pub use insights::{DashboardInsights, InsightsService, STOCK_UNIT_PRICE};
pub use inventory::{InventoryItem, InventoryPatch, NewInventoryItem, DEFAULT_THRESHOLD};
pub use project::{NewProject, Project, ProjectPatch, ProjectStatus};
pub use quote::{NewQuote, Quote, QuotePatch};
pub use subsidy::{NewSubsidy, Subsidy, SubsidyPatch};
pub use user::{is_valid_email, NewUser, User, ValidatedCredentials, MIN_PASSWORD_LEN};
