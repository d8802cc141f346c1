//! Server construction and middleware wiring.

mod config;

pub use config::{AppConfig, ConfigError};

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use tracing::{info, warn};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use crate::domain::auth::TokenService;
#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::inbound::http::health::{live, ready, HealthState};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{api_scope, ApiError};
use crate::middleware::Trace;
use crate::outbound::persistence::{
    run_migrations, DbPool, DieselCustomerRepository, DieselInventoryRepository,
    DieselProjectRepository, DieselQuoteRepository, DieselSubsidyRepository,
    DieselUserRepository, PoolConfig,
};

/// Build the repository state: Diesel adapters over a pool when
/// `DATABASE_URL` is configured, the in-memory store otherwise.
async fn build_state(config: &AppConfig) -> std::io::Result<HttpState> {
    match &config.database_url {
        Some(url) => {
            run_migrations(url)
                .await
                .map_err(|err| std::io::Error::other(format!("migrations failed: {err}")))?;
            let pool = DbPool::new(PoolConfig::new(url))
                .await
                .map_err(|err| std::io::Error::other(format!("pool construction failed: {err}")))?;
            info!("using the PostgreSQL store");
            Ok(HttpState::new(
                Arc::new(DieselCustomerRepository::new(pool.clone())),
                Arc::new(DieselQuoteRepository::new(pool.clone())),
                Arc::new(DieselSubsidyRepository::new(pool.clone())),
                Arc::new(DieselProjectRepository::new(pool.clone())),
                Arc::new(DieselInventoryRepository::new(pool.clone())),
                Arc::new(DieselUserRepository::new(pool)),
            ))
        }
        None => {
            warn!("DATABASE_URL not set; using the in-memory store");
            Ok(HttpState::in_memory())
        }
    }
}

/// CORS layer from the configured origin allow-list. An empty list keeps the
/// permissive development behaviour.
fn build_cors(allowed_origins: &[String]) -> Cors {
    if allowed_origins.is_empty() {
        return Cors::permissive();
    }
    let mut cors = Cors::default()
        .allow_any_method()
        .allow_any_header()
        .max_age(3600);
    for origin in allowed_origins {
        cors = cors.allowed_origin(origin);
    }
    cors
}

/// Malformed JSON bodies get the same `{"message": ...}` envelope as
/// validation failures.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| ApiError::invalid_request(err.to_string()).into())
}

/// Bind and run the HTTP server until shutdown.
pub async fn run(config: AppConfig) -> std::io::Result<()> {
    let state = build_state(&config).await?;
    let tokens = TokenService::new(&config.jwt_secret, config.jwt_ttl_secs);
    let health = web::Data::new(HealthState::new());
    let server_health = health.clone();
    let allowed_origins = config.allowed_origins.clone();

    let server = HttpServer::new(move || {
        let app = App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(tokens.clone()))
            .app_data(server_health.clone())
            .app_data(json_config())
            .wrap(Trace)
            .wrap(build_cors(&allowed_origins))
            .service(api_scope())
            .service(ready)
            .service(live);

        #[cfg(debug_assertions)]
        let app =
            app.service(SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()));

        app
    })
    .bind(("0.0.0.0", config.port))?;

    info!(port = config.port, "listening");
    health.mark_ready();
    server.run().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use serde_json::Value;

    #[actix_web::test]
    async fn malformed_json_returns_the_message_envelope() {
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(HttpState::in_memory()))
                .app_data(web::Data::new(TokenService::new("test-secret", 3600)))
                .app_data(json_config())
                .service(api_scope()),
        )
        .await;

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/auth/register")
                .insert_header(("Content-Type", "application/json"))
                .set_payload("{not json")
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(res).await;
        assert!(body.get("message").is_some());
    }
}
