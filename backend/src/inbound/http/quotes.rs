//! Quote endpoints.
//!
//! Create and update verify that the referenced customer exists, so a quote
//! can never point at a dangling customer id.

use actix_web::{delete, get, post, put, web, HttpResponse};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{DomainError, NewQuote, Quote, QuotePatch};
use crate::inbound::http::auth::AuthedUser;
use crate::inbound::http::error::MessageBody;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::ApiResult;

/// Creation payload for `POST /api/quotes`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuoteRequest {
    pub customer_id: Uuid,
    #[serde(default)]
    pub system_size: f64,
    #[serde(default)]
    pub cost: f64,
    #[serde(default)]
    pub subsidy_applied: f64,
}

/// Partial update payload for `PUT /api/quotes/{id}`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateQuoteRequest {
    pub customer_id: Option<Uuid>,
    pub system_size: Option<f64>,
    pub cost: Option<f64>,
    pub subsidy_applied: Option<f64>,
}

impl From<UpdateQuoteRequest> for QuotePatch {
    fn from(value: UpdateQuoteRequest) -> Self {
        Self {
            customer_id: value.customer_id,
            system_size: value.system_size,
            cost: value.cost,
            subsidy_applied: value.subsidy_applied,
        }
    }
}

/// Wire representation of a quote record.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub system_size: f64,
    pub cost: f64,
    pub subsidy_applied: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Quote> for QuoteResponse {
    fn from(value: Quote) -> Self {
        Self {
            id: value.id,
            customer_id: value.customer_id,
            system_size: value.system_size,
            cost: value.cost,
            subsidy_applied: value.subsidy_applied,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

async fn require_customer(state: &HttpState, customer_id: Uuid) -> ApiResult<()> {
    if state.customers.find(customer_id).await?.is_none() {
        return Err(DomainError::invalid_request("Customer not found").into());
    }
    Ok(())
}

/// List all quotes.
#[utoipa::path(
    get,
    path = "/api/quotes",
    responses(
        (status = 200, description = "Quotes", body = [QuoteResponse]),
        (status = 401, description = "Unauthorised", body = MessageBody)
    ),
    tags = ["quotes"]
)]
#[get("/quotes")]
pub async fn list_quotes(
    _user: AuthedUser,
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<QuoteResponse>>> {
    let quotes = state.quotes.list().await?;
    Ok(web::Json(
        quotes.into_iter().map(QuoteResponse::from).collect(),
    ))
}

/// Fetch one quote by id.
#[utoipa::path(
    get,
    path = "/api/quotes/{id}",
    responses(
        (status = 200, description = "Quote", body = QuoteResponse),
        (status = 401, description = "Unauthorised", body = MessageBody),
        (status = 404, description = "Unknown id", body = MessageBody)
    ),
    tags = ["quotes"]
)]
#[get("/quotes/{id}")]
pub async fn get_quote(
    _user: AuthedUser,
    state: web::Data<HttpState>,
    path: web::Path<Uuid>,
) -> ApiResult<web::Json<QuoteResponse>> {
    let quote = state
        .quotes
        .find(path.into_inner())
        .await?
        .ok_or_else(|| DomainError::not_found("Quote not found"))?;
    Ok(web::Json(QuoteResponse::from(quote)))
}

/// Generate a quote for a customer.
#[utoipa::path(
    post,
    path = "/api/quotes",
    request_body = CreateQuoteRequest,
    responses(
        (status = 201, description = "Created", body = QuoteResponse),
        (status = 400, description = "Validation failure", body = MessageBody),
        (status = 401, description = "Unauthorised", body = MessageBody)
    ),
    tags = ["quotes"]
)]
#[post("/quotes")]
pub async fn create_quote(
    _user: AuthedUser,
    state: web::Data<HttpState>,
    payload: web::Json<CreateQuoteRequest>,
) -> ApiResult<HttpResponse> {
    let payload = payload.into_inner();
    let new = NewQuote::validated(
        payload.customer_id,
        payload.system_size,
        payload.cost,
        payload.subsidy_applied,
    )?;
    require_customer(&state, new.customer_id).await?;
    let quote = state.quotes.insert(new).await?;
    Ok(HttpResponse::Created().json(QuoteResponse::from(quote)))
}

/// Update a quote by id, merging only the provided fields.
#[utoipa::path(
    put,
    path = "/api/quotes/{id}",
    request_body = UpdateQuoteRequest,
    responses(
        (status = 200, description = "Updated", body = QuoteResponse),
        (status = 400, description = "Validation failure", body = MessageBody),
        (status = 401, description = "Unauthorised", body = MessageBody),
        (status = 404, description = "Unknown id", body = MessageBody)
    ),
    tags = ["quotes"]
)]
#[put("/quotes/{id}")]
pub async fn update_quote(
    _user: AuthedUser,
    state: web::Data<HttpState>,
    path: web::Path<Uuid>,
    payload: web::Json<UpdateQuoteRequest>,
) -> ApiResult<web::Json<QuoteResponse>> {
    let patch = QuotePatch::from(payload.into_inner());
    patch.validate()?;
    if let Some(customer_id) = patch.customer_id {
        require_customer(&state, customer_id).await?;
    }
    let quote = state
        .quotes
        .update(path.into_inner(), patch)
        .await?
        .ok_or_else(|| DomainError::not_found("Quote not found"))?;
    Ok(web::Json(QuoteResponse::from(quote)))
}

/// Delete a quote by id.
#[utoipa::path(
    delete,
    path = "/api/quotes/{id}",
    responses(
        (status = 200, description = "Deleted", body = MessageBody),
        (status = 401, description = "Unauthorised", body = MessageBody),
        (status = 404, description = "Unknown id", body = MessageBody)
    ),
    tags = ["quotes"]
)]
#[delete("/quotes/{id}")]
pub async fn delete_quote(
    _user: AuthedUser,
    state: web::Data<HttpState>,
    path: web::Path<Uuid>,
) -> ApiResult<web::Json<MessageBody>> {
    if !state.quotes.delete(path.into_inner()).await? {
        return Err(DomainError::not_found("Quote not found").into());
    }
    Ok(web::Json(MessageBody::new("Quote deleted")))
}
