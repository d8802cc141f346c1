//! Diesel row structs and their conversions to and from domain types.
//!
//! Internal to the persistence layer; nothing here leaks to the domain.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::{
    Customer, CustomerPatch, CustomerType, InventoryItem, InventoryPatch, NewCustomer,
    NewInventoryItem, NewProject, NewQuote, NewSubsidy, NewUser, Project, ProjectPatch,
    ProjectStatus, Quote, QuotePatch, Subsidy, SubsidyPatch, User,
};

use super::schema::{customers, inventory_items, projects, quotes, subsidies, users};

fn customer_type_to_str(value: CustomerType) -> &'static str {
    match value {
        CustomerType::Residential => "residential",
        CustomerType::Commercial => "commercial",
    }
}

fn customer_type_from_str(value: &str, id: Uuid) -> CustomerType {
    match value {
        "commercial" => CustomerType::Commercial,
        "residential" => CustomerType::Residential,
        other => {
            tracing::warn!(
                value = other,
                customer_id = %id,
                "unrecognised customer_type value, defaulting to residential"
            );
            CustomerType::Residential
        }
    }
}

fn project_status_to_str(value: ProjectStatus) -> &'static str {
    match value {
        ProjectStatus::Pending => "pending",
        ProjectStatus::Ongoing => "ongoing",
        ProjectStatus::Completed => "completed",
    }
}

fn project_status_from_str(value: &str, id: Uuid) -> ProjectStatus {
    match value {
        "ongoing" => ProjectStatus::Ongoing,
        "completed" => ProjectStatus::Completed,
        "pending" => ProjectStatus::Pending,
        other => {
            tracing::warn!(
                value = other,
                project_id = %id,
                "unrecognised project status value, defaulting to pending"
            );
            ProjectStatus::Pending
        }
    }
}

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = customers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CustomerRow {
    pub id: Uuid,
    pub name: String,
    pub contact: String,
    pub energy_needs: f64,
    pub customer_type: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<CustomerRow> for Customer {
    fn from(row: CustomerRow) -> Self {
        let customer_type = customer_type_from_str(&row.customer_type, row.id);
        Self {
            id: row.id,
            name: row.name,
            contact: row.contact,
            energy_needs: row.energy_needs,
            customer_type,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = customers)]
pub struct NewCustomerRow {
    pub name: String,
    pub contact: String,
    pub energy_needs: f64,
    pub customer_type: &'static str,
}

impl From<NewCustomer> for NewCustomerRow {
    fn from(new: NewCustomer) -> Self {
        Self {
            name: new.name,
            contact: new.contact,
            energy_needs: new.energy_needs,
            customer_type: customer_type_to_str(new.customer_type),
        }
    }
}

#[derive(Debug, AsChangeset)]
#[diesel(table_name = customers)]
pub struct CustomerChangeset {
    pub name: Option<String>,
    pub contact: Option<String>,
    pub energy_needs: Option<f64>,
    pub customer_type: Option<&'static str>,
}

impl From<CustomerPatch> for CustomerChangeset {
    fn from(patch: CustomerPatch) -> Self {
        Self {
            name: patch.name,
            contact: patch.contact,
            energy_needs: patch.energy_needs,
            customer_type: patch.customer_type.map(customer_type_to_str),
        }
    }
}

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = quotes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct QuoteRow {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub system_size: f64,
    pub cost: f64,
    pub subsidy_applied: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<QuoteRow> for Quote {
    fn from(row: QuoteRow) -> Self {
        Self {
            id: row.id,
            customer_id: row.customer_id,
            system_size: row.system_size,
            cost: row.cost,
            subsidy_applied: row.subsidy_applied,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = quotes)]
pub struct NewQuoteRow {
    pub customer_id: Uuid,
    pub system_size: f64,
    pub cost: f64,
    pub subsidy_applied: f64,
}

impl From<NewQuote> for NewQuoteRow {
    fn from(new: NewQuote) -> Self {
        Self {
            customer_id: new.customer_id,
            system_size: new.system_size,
            cost: new.cost,
            subsidy_applied: new.subsidy_applied,
        }
    }
}

#[derive(Debug, AsChangeset)]
#[diesel(table_name = quotes)]
pub struct QuoteChangeset {
    pub customer_id: Option<Uuid>,
    pub system_size: Option<f64>,
    pub cost: Option<f64>,
    pub subsidy_applied: Option<f64>,
}

impl From<QuotePatch> for QuoteChangeset {
    fn from(patch: QuotePatch) -> Self {
        Self {
            customer_id: patch.customer_id,
            system_size: patch.system_size,
            cost: patch.cost,
            subsidy_applied: patch.subsidy_applied,
        }
    }
}

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = subsidies)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct SubsidyRow {
    pub id: Uuid,
    pub name: String,
    pub eligibility_criteria: String,
    pub amount: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<SubsidyRow> for Subsidy {
    fn from(row: SubsidyRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            eligibility_criteria: row.eligibility_criteria,
            amount: row.amount,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = subsidies)]
pub struct NewSubsidyRow {
    pub name: String,
    pub eligibility_criteria: String,
    pub amount: f64,
}

impl From<NewSubsidy> for NewSubsidyRow {
    fn from(new: NewSubsidy) -> Self {
        Self {
            name: new.name,
            eligibility_criteria: new.eligibility_criteria,
            amount: new.amount,
        }
    }
}

#[derive(Debug, AsChangeset)]
#[diesel(table_name = subsidies)]
pub struct SubsidyChangeset {
    pub name: Option<String>,
    pub eligibility_criteria: Option<String>,
    pub amount: Option<f64>,
}

impl From<SubsidyPatch> for SubsidyChangeset {
    fn from(patch: SubsidyPatch) -> Self {
        Self {
            name: patch.name,
            eligibility_criteria: patch.eligibility_criteria,
            amount: patch.amount,
        }
    }
}

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = projects)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProjectRow {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub status: String,
    pub milestones: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ProjectRow> for Project {
    fn from(row: ProjectRow) -> Self {
        let status = project_status_from_str(&row.status, row.id);
        Self {
            id: row.id,
            customer_id: row.customer_id,
            status,
            milestones: row.milestones,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = projects)]
pub struct NewProjectRow {
    pub customer_id: Uuid,
    pub status: &'static str,
    pub milestones: Vec<String>,
}

impl From<NewProject> for NewProjectRow {
    fn from(new: NewProject) -> Self {
        Self {
            customer_id: new.customer_id,
            status: project_status_to_str(new.status),
            milestones: new.milestones,
        }
    }
}

#[derive(Debug, AsChangeset)]
#[diesel(table_name = projects)]
pub struct ProjectChangeset {
    pub customer_id: Option<Uuid>,
    pub status: Option<&'static str>,
    pub milestones: Option<Vec<String>>,
}

impl From<ProjectPatch> for ProjectChangeset {
    fn from(patch: ProjectPatch) -> Self {
        Self {
            customer_id: patch.customer_id,
            status: patch.status.map(project_status_to_str),
            milestones: patch.milestones,
        }
    }
}

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = inventory_items)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct InventoryRow {
    pub id: Uuid,
    pub item_name: String,
    pub stock_level: i32,
    pub threshold: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<InventoryRow> for InventoryItem {
    fn from(row: InventoryRow) -> Self {
        Self {
            id: row.id,
            item_name: row.item_name,
            stock_level: row.stock_level,
            threshold: row.threshold,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = inventory_items)]
pub struct NewInventoryRow {
    pub item_name: String,
    pub stock_level: i32,
    pub threshold: i32,
}

impl From<NewInventoryItem> for NewInventoryRow {
    fn from(new: NewInventoryItem) -> Self {
        Self {
            item_name: new.item_name,
            stock_level: new.stock_level,
            threshold: new.threshold,
        }
    }
}

#[derive(Debug, AsChangeset)]
#[diesel(table_name = inventory_items)]
pub struct InventoryChangeset {
    pub item_name: Option<String>,
    pub stock_level: Option<i32>,
    pub threshold: Option<i32>,
}

impl From<InventoryPatch> for InventoryChangeset {
    fn from(patch: InventoryPatch) -> Self {
        Self {
            item_name: patch.item_name,
            stock_level: patch.stock_level,
            threshold: patch.threshold,
        }
    }
}

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserRow {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            email: row.email,
            password_hash: row.password_hash,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = users)]
pub struct NewUserRow {
    pub email: String,
    pub password_hash: String,
}

impl From<NewUser> for NewUserRow {
    fn from(new: NewUser) -> Self {
        Self {
            email: new.email,
            password_hash: new.password_hash,
        }
    }
}
