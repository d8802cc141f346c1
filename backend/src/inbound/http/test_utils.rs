//! Test helpers for inbound HTTP components.

use actix_web::{web, App};
use uuid::Uuid;

use crate::domain::auth::TokenService;
use crate::inbound::http::state::HttpState;

/// Token service with a fixed secret and a generous TTL for tests.
pub fn test_tokens() -> TokenService {
    TokenService::new("test-secret", 3600)
}

/// Authorization header for a freshly issued token.
pub fn bearer(tokens: &TokenService) -> (&'static str, String) {
    let token = tokens.issue(Uuid::new_v4()).expect("issue test token");
    ("Authorization", format!("Bearer {token}"))
}

/// App with the full `/api` scope mounted over the given state.
pub fn test_app(
    state: HttpState,
    tokens: TokenService,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .app_data(web::Data::new(tokens))
        .service(super::api_scope())
}
