//! Registration and login. These are the only routes outside the bearer
//! gate, so neither handler takes the [`AuthedUser`] extractor.
//!
//! [`AuthedUser`]: crate::inbound::http::auth::AuthedUser

use actix_web::{post, web, HttpResponse};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::auth::{hash_password, verify_password, TokenService};
use crate::domain::ports::RepositoryError;
use crate::domain::{DomainError, NewUser, User, ValidatedCredentials};
use crate::inbound::http::error::{ApiError, MessageBody};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::ApiResult;

/// Message for a failed login; deliberately does not reveal whether the
/// email is registered.
const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Payload for both register and login.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CredentialsRequest {
    pub email: String,
    pub password: String,
}

/// Public view of an account, without the password hash.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        Self {
            id: value.id,
            email: value.email,
            created_at: value.created_at,
        }
    }
}

/// Login success body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    pub token: String,
}

/// Create an account.
#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = CredentialsRequest,
    responses(
        (status = 201, description = "Registered", body = UserResponse),
        (status = 400, description = "Validation failure or duplicate email", body = MessageBody)
    ),
    tags = ["auth"]
)]
#[post("/auth/register")]
pub async fn register(
    state: web::Data<HttpState>,
    payload: web::Json<CredentialsRequest>,
) -> ApiResult<HttpResponse> {
    let payload = payload.into_inner();
    let credentials = ValidatedCredentials::validated(&payload.email, &payload.password)?;
    let password_hash = hash_password(&credentials.password)?;
    let user = state
        .users
        .insert(NewUser {
            email: credentials.email,
            password_hash,
        })
        .await
        .map_err(|error| match error {
            RepositoryError::Conflict { .. } => {
                ApiError::from(DomainError::invalid_request("Email already registered"))
            }
            other => ApiError::from(other),
        })?;
    Ok(HttpResponse::Created().json(UserResponse::from(user)))
}

/// Exchange credentials for a bearer token.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = CredentialsRequest,
    responses(
        (status = 200, description = "Token issued", body = TokenResponse),
        (status = 401, description = "Bad credentials", body = MessageBody)
    ),
    tags = ["auth"]
)]
#[post("/auth/login")]
pub async fn login(
    state: web::Data<HttpState>,
    tokens: web::Data<TokenService>,
    payload: web::Json<CredentialsRequest>,
) -> ApiResult<web::Json<TokenResponse>> {
    let payload = payload.into_inner();
    let email = payload.email.trim().to_lowercase();
    let user = state
        .users
        .find_by_email(&email)
        .await?
        .ok_or_else(|| DomainError::unauthorized(INVALID_CREDENTIALS))?;
    if !verify_password(&payload.password, &user.password_hash) {
        return Err(DomainError::unauthorized(INVALID_CREDENTIALS).into());
    }
    let token = tokens.issue(user.id)?;
    Ok(web::Json(TokenResponse { token }))
}
