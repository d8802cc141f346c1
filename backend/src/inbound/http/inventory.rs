//! Inventory endpoints, including the low-stock report the dashboard links to.

use actix_web::{delete, get, post, put, web, HttpResponse};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    DomainError, InventoryItem, InventoryPatch, NewInventoryItem, DEFAULT_THRESHOLD,
};
use crate::inbound::http::auth::AuthedUser;
use crate::inbound::http::error::MessageBody;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::ApiResult;

fn default_threshold() -> i32 {
    DEFAULT_THRESHOLD
}

/// Creation payload for `POST /api/inventory`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateInventoryRequest {
    pub item_name: String,
    pub stock_level: i32,
    #[serde(default = "default_threshold")]
    pub threshold: i32,
}

/// Partial update payload for `PUT /api/inventory/{id}`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInventoryRequest {
    pub item_name: Option<String>,
    pub stock_level: Option<i32>,
    pub threshold: Option<i32>,
}

impl From<UpdateInventoryRequest> for InventoryPatch {
    fn from(value: UpdateInventoryRequest) -> Self {
        Self {
            item_name: value.item_name,
            stock_level: value.stock_level,
            threshold: value.threshold,
        }
    }
}

/// Wire representation of a stock item.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InventoryResponse {
    pub id: Uuid,
    pub item_name: String,
    pub stock_level: i32,
    pub threshold: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<InventoryItem> for InventoryResponse {
    fn from(value: InventoryItem) -> Self {
        Self {
            id: value.id,
            item_name: value.item_name,
            stock_level: value.stock_level,
            threshold: value.threshold,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

/// List all stock items.
#[utoipa::path(
    get,
    path = "/api/inventory",
    responses(
        (status = 200, description = "Stock items", body = [InventoryResponse]),
        (status = 401, description = "Unauthorised", body = MessageBody)
    ),
    tags = ["inventory"]
)]
#[get("/inventory")]
pub async fn list_inventory(
    _user: AuthedUser,
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<InventoryResponse>>> {
    let items = state.inventory.list().await?;
    Ok(web::Json(
        items.into_iter().map(InventoryResponse::from).collect(),
    ))
}

/// Items whose stock level has fallen below their own threshold.
#[utoipa::path(
    get,
    path = "/api/inventory/low-stock",
    responses(
        (status = 200, description = "Items below threshold", body = [InventoryResponse]),
        (status = 401, description = "Unauthorised", body = MessageBody)
    ),
    tags = ["inventory"]
)]
#[get("/inventory/low-stock")]
pub async fn low_stock(
    _user: AuthedUser,
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<InventoryResponse>>> {
    let items = state.inventory.list().await?;
    Ok(web::Json(
        items
            .into_iter()
            .filter(InventoryItem::is_low_stock)
            .map(InventoryResponse::from)
            .collect(),
    ))
}

/// Add a stock item.
#[utoipa::path(
    post,
    path = "/api/inventory",
    request_body = CreateInventoryRequest,
    responses(
        (status = 201, description = "Created", body = InventoryResponse),
        (status = 400, description = "Validation failure", body = MessageBody),
        (status = 401, description = "Unauthorised", body = MessageBody)
    ),
    tags = ["inventory"]
)]
#[post("/inventory")]
pub async fn create_inventory(
    _user: AuthedUser,
    state: web::Data<HttpState>,
    payload: web::Json<CreateInventoryRequest>,
) -> ApiResult<HttpResponse> {
    let payload = payload.into_inner();
    let new = NewInventoryItem::validated(payload.item_name, payload.stock_level, payload.threshold)?;
    let item = state.inventory.insert(new).await?;
    Ok(HttpResponse::Created().json(InventoryResponse::from(item)))
}

/// Update a stock item by id, merging only the provided fields.
#[utoipa::path(
    put,
    path = "/api/inventory/{id}",
    request_body = UpdateInventoryRequest,
    responses(
        (status = 200, description = "Updated", body = InventoryResponse),
        (status = 400, description = "Validation failure", body = MessageBody),
        (status = 401, description = "Unauthorised", body = MessageBody),
        (status = 404, description = "Unknown id", body = MessageBody)
    ),
    tags = ["inventory"]
)]
#[put("/inventory/{id}")]
pub async fn update_inventory(
    _user: AuthedUser,
    state: web::Data<HttpState>,
    path: web::Path<Uuid>,
    payload: web::Json<UpdateInventoryRequest>,
) -> ApiResult<web::Json<InventoryResponse>> {
    let patch = InventoryPatch::from(payload.into_inner());
    patch.validate()?;
    let item = state
        .inventory
        .update(path.into_inner(), patch)
        .await?
        .ok_or_else(|| DomainError::not_found("Inventory item not found"))?;
    Ok(web::Json(InventoryResponse::from(item)))
}

/// Delete a stock item by id.
#[utoipa::path(
    delete,
    path = "/api/inventory/{id}",
    responses(
        (status = 200, description = "Deleted", body = MessageBody),
        (status = 401, description = "Unauthorised", body = MessageBody),
        (status = 404, description = "Unknown id", body = MessageBody)
    ),
    tags = ["inventory"]
)]
#[delete("/inventory/{id}")]
pub async fn delete_inventory(
    _user: AuthedUser,
    state: web::Data<HttpState>,
    path: web::Path<Uuid>,
) -> ApiResult<web::Json<MessageBody>> {
    if !state.inventory.delete(path.into_inner()).await? {
        return Err(DomainError::not_found("Inventory item not found").into());
    }
    Ok(web::Json(MessageBody::new("Item deleted")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inbound::http::test_utils::{bearer, test_app, test_tokens};
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use serde_json::json;

    #[actix_web::test]
    async fn creation_applies_the_default_threshold() {
        let state = HttpState::in_memory();
        let tokens = test_tokens();
        let auth = bearer(&tokens);
        let app = actix_test::init_service(test_app(state, tokens)).await;

        let created = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/inventory")
                .insert_header(auth)
                .set_json(json!({ "itemName": "Panel 400W", "stockLevel": 25 }))
                .to_request(),
        )
        .await;
        assert_eq!(created.status(), StatusCode::CREATED);
        let created: InventoryResponse = actix_test::read_body_json(created).await;
        assert_eq!(created.threshold, DEFAULT_THRESHOLD);
    }

    #[actix_web::test]
    async fn low_stock_filters_on_each_items_own_threshold() {
        let state = HttpState::in_memory();
        let tokens = test_tokens();
        let auth = bearer(&tokens);
        for (name, stock, threshold) in [
            ("Panel 400W", 5, 10),
            ("Inverter 5kW", 12, 10),
            ("Mounting rail", 30, 40),
            ("Cable drum", 10, 10),
        ] {
            state
                .inventory
                .insert(
                    NewInventoryItem::validated(name.into(), stock, threshold)
                        .expect("valid item"),
                )
                .await
                .expect("insert item");
        }
        let app = actix_test::init_service(test_app(state, tokens)).await;

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/inventory/low-stock")
                .insert_header(auth)
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        let mut items: Vec<InventoryResponse> = actix_test::read_body_json(res).await;
        items.sort_by(|a, b| a.item_name.cmp(&b.item_name));
        let names: Vec<&str> = items.iter().map(|i| i.item_name.as_str()).collect();
        assert_eq!(names, vec!["Mounting rail", "Panel 400W"]);
    }

    #[actix_web::test]
    async fn negative_stock_is_a_validation_error() {
        let state = HttpState::in_memory();
        let tokens = test_tokens();
        let auth = bearer(&tokens);
        let app = actix_test::init_service(test_app(state, tokens)).await;

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/inventory")
                .insert_header(auth)
                .set_json(json!({ "itemName": "Panel", "stockLevel": -3 }))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: MessageBody = actix_test::read_body_json(res).await;
        assert_eq!(body.message, "Stock level cannot be negative");
    }

    #[actix_web::test]
    async fn restock_update_clears_the_low_stock_report() {
        let state = HttpState::in_memory();
        let tokens = test_tokens();
        let auth = bearer(&tokens);
        let item = state
            .inventory
            .insert(NewInventoryItem::validated("Panel".into(), 2, 10).expect("valid item"))
            .await
            .expect("insert item");
        let app = actix_test::init_service(test_app(state, tokens)).await;

        let updated = actix_test::call_service(
            &app,
            actix_test::TestRequest::put()
                .uri(&format!("/api/inventory/{}", item.id))
                .insert_header(auth.clone())
                .set_json(json!({ "stockLevel": 50 }))
                .to_request(),
        )
        .await;
        assert_eq!(updated.status(), StatusCode::OK);

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/inventory/low-stock")
                .insert_header(auth)
                .to_request(),
        )
        .await;
        let items: Vec<InventoryResponse> = actix_test::read_body_json(res).await;
        assert!(items.is_empty());
    }
}
