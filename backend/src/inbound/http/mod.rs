//! HTTP inbound adapter exposing the REST endpoints.

pub mod auth;
pub mod customers;
pub mod dashboard;
pub mod error;
pub mod health;
pub mod inventory;
pub mod projects;
pub mod quotes;
pub mod state;
pub mod subsidies;
#[cfg(test)]
pub mod test_utils;
pub mod users;

pub use error::{ApiError, ApiResult};

use actix_web::{web, Scope};

/// Everything mounted under `/api`. Registration and login are open; the
/// remaining handlers require a bearer token via the [`auth::AuthedUser`]
/// extractor.
pub fn api_scope() -> Scope {
    web::scope("/api")
        .service(users::register)
        .service(users::login)
        .service(customers::list_customers)
        .service(customers::create_customer)
        .service(customers::update_customer)
        .service(customers::delete_customer)
        .service(quotes::list_quotes)
        .service(quotes::get_quote)
        .service(quotes::create_quote)
        .service(quotes::update_quote)
        .service(quotes::delete_quote)
        .service(subsidies::list_subsidies)
        .service(subsidies::eligible_subsidies)
        .service(subsidies::create_subsidy)
        .service(subsidies::update_subsidy)
        .service(subsidies::delete_subsidy)
        .service(projects::list_projects)
        .service(projects::create_project)
        .service(projects::update_project)
        .service(projects::delete_project)
        .service(inventory::list_inventory)
        .service(inventory::low_stock)
        .service(inventory::create_inventory)
        .service(inventory::update_inventory)
        .service(inventory::delete_inventory)
        .service(dashboard::insights)
}
