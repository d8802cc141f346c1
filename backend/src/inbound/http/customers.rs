//! Customer CRM endpoints.
//!
//! ```text
//! GET    /api/customers
//! POST   /api/customers
//! PUT    /api/customers/{id}
//! DELETE /api/customers/{id}
//! ```

use actix_web::{delete, get, post, put, web, HttpResponse};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::ports::RepositoryError;
use crate::domain::{Customer, CustomerPatch, CustomerType, DomainError, NewCustomer};
use crate::inbound::http::auth::AuthedUser;
use crate::inbound::http::error::{ApiError, MessageBody};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::ApiResult;

/// Creation payload for `POST /api/customers`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerRequest {
    pub name: String,
    pub contact: String,
    #[serde(default)]
    pub energy_needs: f64,
    #[serde(default, rename = "type")]
    pub customer_type: CustomerType,
}

/// Partial update payload for `PUT /api/customers/{id}`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCustomerRequest {
    pub name: Option<String>,
    pub contact: Option<String>,
    pub energy_needs: Option<f64>,
    #[serde(rename = "type")]
    pub customer_type: Option<CustomerType>,
}

impl From<UpdateCustomerRequest> for CustomerPatch {
    fn from(value: UpdateCustomerRequest) -> Self {
        Self {
            name: value.name,
            contact: value.contact,
            energy_needs: value.energy_needs,
            customer_type: value.customer_type,
        }
    }
}

/// Wire representation of a customer record.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerResponse {
    pub id: Uuid,
    pub name: String,
    pub contact: String,
    pub energy_needs: f64,
    #[serde(rename = "type")]
    pub customer_type: CustomerType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Customer> for CustomerResponse {
    fn from(value: Customer) -> Self {
        Self {
            id: value.id,
            name: value.name,
            contact: value.contact,
            energy_needs: value.energy_needs,
            customer_type: value.customer_type,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

/// List all customers.
#[utoipa::path(
    get,
    path = "/api/customers",
    responses(
        (status = 200, description = "Customers", body = [CustomerResponse]),
        (status = 401, description = "Unauthorised", body = MessageBody)
    ),
    tags = ["customers"]
)]
#[get("/customers")]
pub async fn list_customers(
    _user: AuthedUser,
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<CustomerResponse>>> {
    let customers = state.customers.list().await?;
    Ok(web::Json(
        customers.into_iter().map(CustomerResponse::from).collect(),
    ))
}

/// Add a customer.
#[utoipa::path(
    post,
    path = "/api/customers",
    request_body = CreateCustomerRequest,
    responses(
        (status = 201, description = "Created", body = CustomerResponse),
        (status = 400, description = "Validation failure", body = MessageBody),
        (status = 401, description = "Unauthorised", body = MessageBody)
    ),
    tags = ["customers"]
)]
#[post("/customers")]
pub async fn create_customer(
    _user: AuthedUser,
    state: web::Data<HttpState>,
    payload: web::Json<CreateCustomerRequest>,
) -> ApiResult<HttpResponse> {
    let payload = payload.into_inner();
    let new = NewCustomer::validated(
        payload.name,
        payload.contact,
        payload.energy_needs,
        payload.customer_type,
    )?;
    let customer = state.customers.insert(new).await?;
    Ok(HttpResponse::Created().json(CustomerResponse::from(customer)))
}

/// Update a customer by id, merging only the provided fields.
#[utoipa::path(
    put,
    path = "/api/customers/{id}",
    request_body = UpdateCustomerRequest,
    responses(
        (status = 200, description = "Updated", body = CustomerResponse),
        (status = 400, description = "Validation failure", body = MessageBody),
        (status = 401, description = "Unauthorised", body = MessageBody),
        (status = 404, description = "Unknown id", body = MessageBody)
    ),
    tags = ["customers"]
)]
#[put("/customers/{id}")]
pub async fn update_customer(
    _user: AuthedUser,
    state: web::Data<HttpState>,
    path: web::Path<Uuid>,
    payload: web::Json<UpdateCustomerRequest>,
) -> ApiResult<web::Json<CustomerResponse>> {
    let patch = CustomerPatch::from(payload.into_inner());
    patch.validate()?;
    let customer = state
        .customers
        .update(path.into_inner(), patch)
        .await?
        .ok_or_else(|| DomainError::not_found("Customer not found"))?;
    Ok(web::Json(CustomerResponse::from(customer)))
}

/// Delete a customer by id.
#[utoipa::path(
    delete,
    path = "/api/customers/{id}",
    responses(
        (status = 200, description = "Deleted", body = MessageBody),
        (status = 400, description = "Customer still referenced", body = MessageBody),
        (status = 401, description = "Unauthorised", body = MessageBody),
        (status = 404, description = "Unknown id", body = MessageBody)
    ),
    tags = ["customers"]
)]
#[delete("/customers/{id}")]
pub async fn delete_customer(
    _user: AuthedUser,
    state: web::Data<HttpState>,
    path: web::Path<Uuid>,
) -> ApiResult<web::Json<MessageBody>> {
    let deleted = state
        .customers
        .delete(path.into_inner())
        .await
        .map_err(|error| match error {
            RepositoryError::Conflict { .. } => ApiError::from(DomainError::invalid_request(
                "Customer has existing quotes or projects",
            )),
            other => ApiError::from(other),
        })?;
    if !deleted {
        return Err(DomainError::not_found("Customer not found").into());
    }
    Ok(web::Json(MessageBody::new("Customer deleted")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inbound::http::test_utils::{bearer, test_app, test_tokens};
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use serde_json::{json, Value};

    #[actix_web::test]
    async fn create_then_list_round_trips_the_payload() {
        let state = HttpState::in_memory();
        let tokens = test_tokens();
        let auth = bearer(&tokens);
        let app = actix_test::init_service(test_app(state, tokens)).await;

        let created = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/customers")
                .insert_header(auth.clone())
                .set_json(json!({
                    "name": "Ada Lovelace",
                    "contact": "ada@example.com",
                    "energyNeeds": 420.5,
                    "type": "commercial"
                }))
                .to_request(),
        )
        .await;
        assert_eq!(created.status(), StatusCode::CREATED);
        let created: Value = actix_test::read_body_json(created).await;
        assert!(created.get("id").is_some());
        assert!(created.get("createdAt").is_some());
        assert!(created.get("updatedAt").is_some());

        let listed = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/customers")
                .insert_header(auth)
                .to_request(),
        )
        .await;
        assert_eq!(listed.status(), StatusCode::OK);
        let listed: Value = actix_test::read_body_json(listed).await;
        let first = &listed.as_array().expect("array")[0];
        assert_eq!(first.get("name").and_then(Value::as_str), Some("Ada Lovelace"));
        assert_eq!(first.get("contact").and_then(Value::as_str), Some("ada@example.com"));
        assert_eq!(first.get("energyNeeds").and_then(Value::as_f64), Some(420.5));
        assert_eq!(first.get("type").and_then(Value::as_str), Some("commercial"));
    }

    #[actix_web::test]
    async fn creation_defaults_type_and_energy_needs() {
        let state = HttpState::in_memory();
        let tokens = test_tokens();
        let auth = bearer(&tokens);
        let app = actix_test::init_service(test_app(state, tokens)).await;

        let created = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/customers")
                .insert_header(auth)
                .set_json(json!({ "name": "Grace", "contact": "grace@example.com" }))
                .to_request(),
        )
        .await;
        assert_eq!(created.status(), StatusCode::CREATED);
        let created: Value = actix_test::read_body_json(created).await;
        assert_eq!(created.get("type").and_then(Value::as_str), Some("residential"));
        assert_eq!(created.get("energyNeeds").and_then(Value::as_f64), Some(0.0));
    }

    #[actix_web::test]
    async fn blank_name_is_a_validation_error() {
        let state = HttpState::in_memory();
        let tokens = test_tokens();
        let auth = bearer(&tokens);
        let app = actix_test::init_service(test_app(state, tokens)).await;

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/customers")
                .insert_header(auth)
                .set_json(json!({ "name": "  ", "contact": "x@example.com" }))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: MessageBody = actix_test::read_body_json(res).await;
        assert_eq!(body.message, "Name is required");
    }

    #[actix_web::test]
    async fn update_merges_fields_and_preserves_id_and_created_at() {
        let state = HttpState::in_memory();
        let tokens = test_tokens();
        let auth = bearer(&tokens);
        let customer = state
            .customers
            .insert(
                NewCustomer::validated(
                    "Ada".into(),
                    "ada@example.com".into(),
                    100.0,
                    CustomerType::Residential,
                )
                .expect("valid customer"),
            )
            .await
            .expect("insert customer");
        let app = actix_test::init_service(test_app(state, tokens)).await;

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::put()
                .uri(&format!("/api/customers/{}", customer.id))
                .insert_header(auth)
                .set_json(json!({ "energyNeeds": 250.0 }))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        let updated: CustomerResponse = actix_test::read_body_json(res).await;
        assert_eq!(updated.id, customer.id);
        assert_eq!(updated.created_at, customer.created_at);
        assert_eq!(updated.energy_needs, 250.0);
        assert_eq!(updated.name, "Ada");
    }

    #[actix_web::test]
    async fn unknown_ids_are_not_found() {
        let state = HttpState::in_memory();
        let tokens = test_tokens();
        let auth = bearer(&tokens);
        let app = actix_test::init_service(test_app(state, tokens)).await;
        let missing = Uuid::new_v4();

        let update = actix_test::call_service(
            &app,
            actix_test::TestRequest::put()
                .uri(&format!("/api/customers/{missing}"))
                .insert_header(auth.clone())
                .set_json(json!({ "name": "Ada" }))
                .to_request(),
        )
        .await;
        assert_eq!(update.status(), StatusCode::NOT_FOUND);

        let delete = actix_test::call_service(
            &app,
            actix_test::TestRequest::delete()
                .uri(&format!("/api/customers/{missing}"))
                .insert_header(auth)
                .to_request(),
        )
        .await;
        assert_eq!(delete.status(), StatusCode::NOT_FOUND);
        let body: MessageBody = actix_test::read_body_json(delete).await;
        assert_eq!(body.message, "Customer not found");
    }

    #[actix_web::test]
    async fn deleting_a_referenced_customer_is_rejected() {
        let state = HttpState::in_memory();
        let tokens = test_tokens();
        let auth = bearer(&tokens);
        let app = actix_test::init_service(test_app(state, tokens)).await;

        let customer = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/customers")
                .insert_header(auth.clone())
                .set_json(json!({ "name": "Ada", "contact": "ada@example.com" }))
                .to_request(),
        )
        .await;
        let customer: Value = actix_test::read_body_json(customer).await;
        let customer_id = customer.get("id").and_then(Value::as_str).expect("id").to_owned();

        let quote = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/quotes")
                .insert_header(auth.clone())
                .set_json(json!({ "customerId": customer_id, "systemSize": 5.0, "cost": 9000.0 }))
                .to_request(),
        )
        .await;
        assert_eq!(quote.status(), StatusCode::CREATED);
        let quote: Value = actix_test::read_body_json(quote).await;
        let quote_id = quote.get("id").and_then(Value::as_str).expect("id").to_owned();

        let rejected = actix_test::call_service(
            &app,
            actix_test::TestRequest::delete()
                .uri(&format!("/api/customers/{customer_id}"))
                .insert_header(auth.clone())
                .to_request(),
        )
        .await;
        assert_eq!(rejected.status(), StatusCode::BAD_REQUEST);
        let body: MessageBody = actix_test::read_body_json(rejected).await;
        assert_eq!(body.message, "Customer has existing quotes or projects");

        // The quote must still resolve to its customer.
        let quotes = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/quotes")
                .insert_header(auth.clone())
                .to_request(),
        )
        .await;
        let quotes: Value = actix_test::read_body_json(quotes).await;
        assert_eq!(quotes.as_array().map(Vec::len), Some(1));

        actix_test::call_service(
            &app,
            actix_test::TestRequest::delete()
                .uri(&format!("/api/quotes/{quote_id}"))
                .insert_header(auth.clone())
                .to_request(),
        )
        .await;
        let deleted = actix_test::call_service(
            &app,
            actix_test::TestRequest::delete()
                .uri(&format!("/api/customers/{customer_id}"))
                .insert_header(auth)
                .to_request(),
        )
        .await;
        assert_eq!(deleted.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn requests_without_a_token_are_unauthorised() {
        let state = HttpState::in_memory();
        let app = actix_test::init_service(test_app(state, test_tokens())).await;
        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/api/customers").to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }
}
