//! OpenAPI documentation configuration.
//!
//! Generates the specification served by Swagger UI in debug builds.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::{CustomerType, DashboardInsights, ProjectStatus};
use crate::inbound::http::customers::{
    CreateCustomerRequest, CustomerResponse, UpdateCustomerRequest,
};
use crate::inbound::http::error::MessageBody;
use crate::inbound::http::inventory::{
    CreateInventoryRequest, InventoryResponse, UpdateInventoryRequest,
};
use crate::inbound::http::projects::{CreateProjectRequest, ProjectResponse, UpdateProjectRequest};
use crate::inbound::http::quotes::{CreateQuoteRequest, QuoteResponse, UpdateQuoteRequest};
use crate::inbound::http::subsidies::{
    CreateSubsidyRequest, SubsidyResponse, UpdateSubsidyRequest,
};
use crate::inbound::http::users::{CredentialsRequest, TokenResponse, UserResponse};

/// Enrich the generated document with the bearer token security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);
        components.add_security_scheme(
            "BearerToken",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .description(Some("Token issued by POST /api/auth/login."))
                    .build(),
            ),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "SolarOps backend API",
        description = "Business-management API for a solar installation company."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("BearerToken" = [])),
    paths(
        crate::inbound::http::users::register,
        crate::inbound::http::users::login,
        crate::inbound::http::customers::list_customers,
        crate::inbound::http::customers::create_customer,
        crate::inbound::http::customers::update_customer,
        crate::inbound::http::customers::delete_customer,
        crate::inbound::http::quotes::list_quotes,
        crate::inbound::http::quotes::get_quote,
        crate::inbound::http::quotes::create_quote,
        crate::inbound::http::quotes::update_quote,
        crate::inbound::http::quotes::delete_quote,
        crate::inbound::http::subsidies::list_subsidies,
        crate::inbound::http::subsidies::eligible_subsidies,
        crate::inbound::http::subsidies::create_subsidy,
        crate::inbound::http::subsidies::update_subsidy,
        crate::inbound::http::subsidies::delete_subsidy,
        crate::inbound::http::projects::list_projects,
        crate::inbound::http::projects::create_project,
        crate::inbound::http::projects::update_project,
        crate::inbound::http::projects::delete_project,
        crate::inbound::http::inventory::list_inventory,
        crate::inbound::http::inventory::low_stock,
        crate::inbound::http::inventory::create_inventory,
        crate::inbound::http::inventory::update_inventory,
        crate::inbound::http::inventory::delete_inventory,
        crate::inbound::http::dashboard::insights,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        MessageBody,
        CustomerType,
        ProjectStatus,
        DashboardInsights,
        CredentialsRequest,
        UserResponse,
        TokenResponse,
        CreateCustomerRequest,
        UpdateCustomerRequest,
        CustomerResponse,
        CreateQuoteRequest,
        UpdateQuoteRequest,
        QuoteResponse,
        CreateSubsidyRequest,
        UpdateSubsidyRequest,
        SubsidyResponse,
        CreateProjectRequest,
        UpdateProjectRequest,
        ProjectResponse,
        CreateInventoryRequest,
        UpdateInventoryRequest,
        InventoryResponse,
    )),
    tags(
        (name = "auth", description = "Registration and token issuance"),
        (name = "customers", description = "Customer relationship records"),
        (name = "quotes", description = "Installation quotes"),
        (name = "subsidies", description = "Subsidy programmes"),
        (name = "projects", description = "Installation project tracking"),
        (name = "inventory", description = "Stock levels and thresholds"),
        (name = "dashboard", description = "Aggregated business insights"),
        (name = "health", description = "Liveness and readiness probes")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_registers_the_api_paths() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;
        assert!(paths.contains_key("/api/auth/login"));
        assert!(paths.contains_key("/api/customers"));
        assert!(paths.contains_key("/api/inventory/low-stock"));
        assert!(paths.contains_key("/api/dashboard/insights"));
        assert!(paths.contains_key("/health/ready"));
    }

    #[test]
    fn document_carries_the_bearer_scheme() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("BearerToken"));
    }
}
