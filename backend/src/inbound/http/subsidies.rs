//! Subsidy programme endpoints.

use actix_web::{delete, get, post, put, web, HttpResponse};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{DomainError, NewSubsidy, Subsidy, SubsidyPatch};
use crate::inbound::http::auth::AuthedUser;
use crate::inbound::http::error::MessageBody;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::ApiResult;

/// Creation payload for `POST /api/subsidies`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubsidyRequest {
    pub name: String,
    pub eligibility_criteria: String,
    #[serde(default)]
    pub amount: f64,
}

/// Partial update payload for `PUT /api/subsidies/{id}`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSubsidyRequest {
    pub name: Option<String>,
    pub eligibility_criteria: Option<String>,
    pub amount: Option<f64>,
}

impl From<UpdateSubsidyRequest> for SubsidyPatch {
    fn from(value: UpdateSubsidyRequest) -> Self {
        Self {
            name: value.name,
            eligibility_criteria: value.eligibility_criteria,
            amount: value.amount,
        }
    }
}

/// Wire representation of a subsidy record.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubsidyResponse {
    pub id: Uuid,
    pub name: String,
    pub eligibility_criteria: String,
    pub amount: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Subsidy> for SubsidyResponse {
    fn from(value: Subsidy) -> Self {
        Self {
            id: value.id,
            name: value.name,
            eligibility_criteria: value.eligibility_criteria,
            amount: value.amount,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

/// List all subsidy programmes.
#[utoipa::path(
    get,
    path = "/api/subsidies",
    responses(
        (status = 200, description = "Subsidies", body = [SubsidyResponse]),
        (status = 401, description = "Unauthorised", body = MessageBody)
    ),
    tags = ["subsidies"]
)]
#[get("/subsidies")]
pub async fn list_subsidies(
    _user: AuthedUser,
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<SubsidyResponse>>> {
    let subsidies = state.subsidies.list().await?;
    Ok(web::Json(
        subsidies.into_iter().map(SubsidyResponse::from).collect(),
    ))
}

/// Subsidies a given customer may claim. Currently every programme is
/// offered once the customer id resolves; criteria matching stays a manual
/// step for the sales team.
#[utoipa::path(
    get,
    path = "/api/subsidies/eligibility/{customerId}",
    responses(
        (status = 200, description = "Claimable subsidies", body = [SubsidyResponse]),
        (status = 401, description = "Unauthorised", body = MessageBody),
        (status = 404, description = "Unknown customer", body = MessageBody)
    ),
    tags = ["subsidies"]
)]
#[get("/subsidies/eligibility/{customer_id}")]
pub async fn eligible_subsidies(
    _user: AuthedUser,
    state: web::Data<HttpState>,
    path: web::Path<Uuid>,
) -> ApiResult<web::Json<Vec<SubsidyResponse>>> {
    if state.customers.find(path.into_inner()).await?.is_none() {
        return Err(DomainError::not_found("Customer not found").into());
    }
    let subsidies = state.subsidies.list().await?;
    Ok(web::Json(
        subsidies.into_iter().map(SubsidyResponse::from).collect(),
    ))
}

/// Add a subsidy programme.
#[utoipa::path(
    post,
    path = "/api/subsidies",
    request_body = CreateSubsidyRequest,
    responses(
        (status = 201, description = "Created", body = SubsidyResponse),
        (status = 400, description = "Validation failure", body = MessageBody),
        (status = 401, description = "Unauthorised", body = MessageBody)
    ),
    tags = ["subsidies"]
)]
#[post("/subsidies")]
pub async fn create_subsidy(
    _user: AuthedUser,
    state: web::Data<HttpState>,
    payload: web::Json<CreateSubsidyRequest>,
) -> ApiResult<HttpResponse> {
    let payload = payload.into_inner();
    let new = NewSubsidy::validated(payload.name, payload.eligibility_criteria, payload.amount)?;
    let subsidy = state.subsidies.insert(new).await?;
    Ok(HttpResponse::Created().json(SubsidyResponse::from(subsidy)))
}

/// Update a subsidy by id, merging only the provided fields.
#[utoipa::path(
    put,
    path = "/api/subsidies/{id}",
    request_body = UpdateSubsidyRequest,
    responses(
        (status = 200, description = "Updated", body = SubsidyResponse),
        (status = 400, description = "Validation failure", body = MessageBody),
        (status = 401, description = "Unauthorised", body = MessageBody),
        (status = 404, description = "Unknown id", body = MessageBody)
    ),
    tags = ["subsidies"]
)]
#[put("/subsidies/{id}")]
pub async fn update_subsidy(
    _user: AuthedUser,
    state: web::Data<HttpState>,
    path: web::Path<Uuid>,
    payload: web::Json<UpdateSubsidyRequest>,
) -> ApiResult<web::Json<SubsidyResponse>> {
    let patch = SubsidyPatch::from(payload.into_inner());
    patch.validate()?;
    let subsidy = state
        .subsidies
        .update(path.into_inner(), patch)
        .await?
        .ok_or_else(|| DomainError::not_found("Subsidy not found"))?;
    Ok(web::Json(SubsidyResponse::from(subsidy)))
}

/// Delete a subsidy by id.
#[utoipa::path(
    delete,
    path = "/api/subsidies/{id}",
    responses(
        (status = 200, description = "Deleted", body = MessageBody),
        (status = 401, description = "Unauthorised", body = MessageBody),
        (status = 404, description = "Unknown id", body = MessageBody)
    ),
    tags = ["subsidies"]
)]
#[delete("/subsidies/{id}")]
pub async fn delete_subsidy(
    _user: AuthedUser,
    state: web::Data<HttpState>,
    path: web::Path<Uuid>,
) -> ApiResult<web::Json<MessageBody>> {
    if !state.subsidies.delete(path.into_inner()).await? {
        return Err(DomainError::not_found("Subsidy not found").into());
    }
    Ok(web::Json(MessageBody::new("Subsidy deleted")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CustomerType, NewCustomer};
    use crate::inbound::http::test_utils::{bearer, test_app, test_tokens};
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use serde_json::json;

    #[actix_web::test]
    async fn create_update_delete_flow() {
        let state = HttpState::in_memory();
        let tokens = test_tokens();
        let auth = bearer(&tokens);
        let app = actix_test::init_service(test_app(state, tokens)).await;

        let created = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/subsidies")
                .insert_header(auth.clone())
                .set_json(json!({
                    "name": "Rooftop PV grant",
                    "eligibilityCriteria": "Residential, energyNeeds > 500",
                    "amount": 2000.0
                }))
                .to_request(),
        )
        .await;
        assert_eq!(created.status(), StatusCode::CREATED);
        let created: SubsidyResponse = actix_test::read_body_json(created).await;

        let updated = actix_test::call_service(
            &app,
            actix_test::TestRequest::put()
                .uri(&format!("/api/subsidies/{}", created.id))
                .insert_header(auth.clone())
                .set_json(json!({ "amount": 2500.0 }))
                .to_request(),
        )
        .await;
        assert_eq!(updated.status(), StatusCode::OK);
        let updated: SubsidyResponse = actix_test::read_body_json(updated).await;
        assert_eq!(updated.amount, 2500.0);
        assert_eq!(updated.name, "Rooftop PV grant");

        let deleted = actix_test::call_service(
            &app,
            actix_test::TestRequest::delete()
                .uri(&format!("/api/subsidies/{}", created.id))
                .insert_header(auth)
                .to_request(),
        )
        .await;
        assert_eq!(deleted.status(), StatusCode::OK);
        let body: MessageBody = actix_test::read_body_json(deleted).await;
        assert_eq!(body.message, "Subsidy deleted");
    }

    #[actix_web::test]
    async fn missing_criteria_is_a_validation_error() {
        let state = HttpState::in_memory();
        let tokens = test_tokens();
        let auth = bearer(&tokens);
        let app = actix_test::init_service(test_app(state, tokens)).await;

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/subsidies")
                .insert_header(auth)
                .set_json(json!({ "name": "Grant", "eligibilityCriteria": "", "amount": 1.0 }))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: MessageBody = actix_test::read_body_json(res).await;
        assert_eq!(body.message, "Eligibility criteria is required");
    }

    #[actix_web::test]
    async fn eligibility_lists_programmes_for_known_customers_only() {
        let state = HttpState::in_memory();
        let tokens = test_tokens();
        let auth = bearer(&tokens);
        let customer = state
            .customers
            .insert(
                NewCustomer::validated(
                    "Ada".into(),
                    "ada@example.com".into(),
                    600.0,
                    CustomerType::Residential,
                )
                .expect("valid customer"),
            )
            .await
            .expect("insert customer");
        state
            .subsidies
            .insert(
                NewSubsidy::validated("Grant".into(), "Residential".into(), 1000.0)
                    .expect("valid subsidy"),
            )
            .await
            .expect("insert subsidy");
        let app = actix_test::init_service(test_app(state, tokens)).await;

        let ok = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri(&format!("/api/subsidies/eligibility/{}", customer.id))
                .insert_header(auth.clone())
                .to_request(),
        )
        .await;
        assert_eq!(ok.status(), StatusCode::OK);
        let subsidies: Vec<SubsidyResponse> = actix_test::read_body_json(ok).await;
        assert_eq!(subsidies.len(), 1);

        let missing = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri(&format!("/api/subsidies/eligibility/{}", Uuid::new_v4()))
                .insert_header(auth)
                .to_request(),
        )
        .await;
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    }
}
