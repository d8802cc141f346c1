//! Environment-driven application configuration.

use std::env;

/// Default listening port, matching the deployment manifests.
const DEFAULT_PORT: u16 = 5000;

/// Default token lifetime: one day.
const DEFAULT_JWT_TTL_SECS: i64 = 86_400;

/// Configuration failures surfaced at startup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be set")]
    Missing { name: &'static str },

    #[error("{name} is invalid: {message}")]
    Invalid { name: &'static str, message: String },
}

/// Runtime settings read from the environment.
///
/// `DATABASE_URL` is optional; without it the server keeps everything in
/// the in-memory store, which suits local development and CI.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: Option<String>,
    pub jwt_secret: String,
    pub jwt_ttl_secs: i64,
    pub port: u16,
    pub allowed_origins: Vec<String>,
}

impl AppConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = env::var("DATABASE_URL").ok().filter(|v| !v.is_empty());
        let jwt_secret = env::var("JWT_SECRET")
            .ok()
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::Missing { name: "JWT_SECRET" })?;
        let jwt_ttl_secs = parse_env("JWT_TTL_SECS", DEFAULT_JWT_TTL_SECS)?;
        let port = parse_env("PORT", DEFAULT_PORT)?;
        let allowed_origins = env::var("ALLOWED_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(str::to_owned)
                    .collect()
            })
            .unwrap_or_default();
        Ok(Self {
            database_url,
            jwt_secret,
            jwt_ttl_secs,
            port,
            allowed_origins,
        })
    }
}

fn parse_env<T>(name: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) if !raw.is_empty() => raw.parse().map_err(|err: T::Err| ConfigError::Invalid {
            name,
            message: err.to_string(),
        }),
        _ => Ok(default),
    }
}
