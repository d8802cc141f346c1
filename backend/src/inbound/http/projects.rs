//! Installation project endpoints.

use actix_web::{delete, get, post, put, web, HttpResponse};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{DomainError, NewProject, Project, ProjectPatch, ProjectStatus};
use crate::inbound::http::auth::AuthedUser;
use crate::inbound::http::error::MessageBody;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::ApiResult;

/// Creation payload for `POST /api/projects`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    pub customer_id: Uuid,
    #[serde(default)]
    pub status: ProjectStatus,
    #[serde(default)]
    pub milestones: Vec<String>,
}

/// Partial update payload for `PUT /api/projects/{id}`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectRequest {
    pub customer_id: Option<Uuid>,
    pub status: Option<ProjectStatus>,
    pub milestones: Option<Vec<String>>,
}

impl From<UpdateProjectRequest> for ProjectPatch {
    fn from(value: UpdateProjectRequest) -> Self {
        Self {
            customer_id: value.customer_id,
            status: value.status,
            milestones: value.milestones,
        }
    }
}

/// Wire representation of a project record.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectResponse {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub status: ProjectStatus,
    pub milestones: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Project> for ProjectResponse {
    fn from(value: Project) -> Self {
        Self {
            id: value.id,
            customer_id: value.customer_id,
            status: value.status,
            milestones: value.milestones,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

/// List all projects.
#[utoipa::path(
    get,
    path = "/api/projects",
    responses(
        (status = 200, description = "Projects", body = [ProjectResponse]),
        (status = 401, description = "Unauthorised", body = MessageBody)
    ),
    tags = ["projects"]
)]
#[get("/projects")]
pub async fn list_projects(
    _user: AuthedUser,
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<ProjectResponse>>> {
    let projects = state.projects.list().await?;
    Ok(web::Json(
        projects.into_iter().map(ProjectResponse::from).collect(),
    ))
}

/// Open a project for a customer.
#[utoipa::path(
    post,
    path = "/api/projects",
    request_body = CreateProjectRequest,
    responses(
        (status = 201, description = "Created", body = ProjectResponse),
        (status = 400, description = "Validation failure", body = MessageBody),
        (status = 401, description = "Unauthorised", body = MessageBody)
    ),
    tags = ["projects"]
)]
#[post("/projects")]
pub async fn create_project(
    _user: AuthedUser,
    state: web::Data<HttpState>,
    payload: web::Json<CreateProjectRequest>,
) -> ApiResult<HttpResponse> {
    let payload = payload.into_inner();
    let new = NewProject::validated(payload.customer_id, payload.status, payload.milestones)?;
    if state.customers.find(new.customer_id).await?.is_none() {
        return Err(DomainError::invalid_request("Customer not found").into());
    }
    let project = state.projects.insert(new).await?;
    Ok(HttpResponse::Created().json(ProjectResponse::from(project)))
}

/// Update a project by id, merging only the provided fields. Milestones are
/// replaced wholesale when present.
#[utoipa::path(
    put,
    path = "/api/projects/{id}",
    request_body = UpdateProjectRequest,
    responses(
        (status = 200, description = "Updated", body = ProjectResponse),
        (status = 400, description = "Validation failure", body = MessageBody),
        (status = 401, description = "Unauthorised", body = MessageBody),
        (status = 404, description = "Unknown id", body = MessageBody)
    ),
    tags = ["projects"]
)]
#[put("/projects/{id}")]
pub async fn update_project(
    _user: AuthedUser,
    state: web::Data<HttpState>,
    path: web::Path<Uuid>,
    payload: web::Json<UpdateProjectRequest>,
) -> ApiResult<web::Json<ProjectResponse>> {
    let patch = ProjectPatch::from(payload.into_inner());
    if let Some(customer_id) = patch.customer_id {
        if state.customers.find(customer_id).await?.is_none() {
            return Err(DomainError::invalid_request("Customer not found").into());
        }
    }
    let project = state
        .projects
        .update(path.into_inner(), patch)
        .await?
        .ok_or_else(|| DomainError::not_found("Project not found"))?;
    Ok(web::Json(ProjectResponse::from(project)))
}

/// Delete a project by id.
#[utoipa::path(
    delete,
    path = "/api/projects/{id}",
    responses(
        (status = 200, description = "Deleted", body = MessageBody),
        (status = 401, description = "Unauthorised", body = MessageBody),
        (status = 404, description = "Unknown id", body = MessageBody)
    ),
    tags = ["projects"]
)]
#[delete("/projects/{id}")]
pub async fn delete_project(
    _user: AuthedUser,
    state: web::Data<HttpState>,
    path: web::Path<Uuid>,
) -> ApiResult<web::Json<MessageBody>> {
    if !state.projects.delete(path.into_inner()).await? {
        return Err(DomainError::not_found("Project not found").into());
    }
    Ok(web::Json(MessageBody::new("Project deleted")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CustomerType, NewCustomer};
    use crate::inbound::http::test_utils::{bearer, test_app, test_tokens};
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use serde_json::json;

    async fn seed_customer(state: &HttpState) -> Uuid {
        state
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
            .expect("insert customer")
            .id
    }

    #[actix_web::test]
    async fn creation_defaults_to_pending_with_no_milestones() {
        let state = HttpState::in_memory();
        let tokens = test_tokens();
        let auth = bearer(&tokens);
        let customer_id = seed_customer(&state).await;
        let app = actix_test::init_service(test_app(state, tokens)).await;

        let created = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/projects")
                .insert_header(auth)
                .set_json(json!({ "customerId": customer_id }))
                .to_request(),
        )
        .await;
        assert_eq!(created.status(), StatusCode::CREATED);
        let created: ProjectResponse = actix_test::read_body_json(created).await;
        assert_eq!(created.status, ProjectStatus::Pending);
        assert!(created.milestones.is_empty());
    }

    #[actix_web::test]
    async fn creation_rejects_unknown_customer() {
        let state = HttpState::in_memory();
        let tokens = test_tokens();
        let auth = bearer(&tokens);
        let app = actix_test::init_service(test_app(state, tokens)).await;

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/projects")
                .insert_header(auth)
                .set_json(json!({ "customerId": Uuid::new_v4() }))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: MessageBody = actix_test::read_body_json(res).await;
        assert_eq!(body.message, "Customer not found");
    }

    #[actix_web::test]
    async fn milestones_are_replaced_in_submitted_order() {
        let state = HttpState::in_memory();
        let tokens = test_tokens();
        let auth = bearer(&tokens);
        let customer_id = seed_customer(&state).await;
        let project = state
            .projects
            .insert(
                NewProject::validated(
                    customer_id,
                    ProjectStatus::Pending,
                    vec!["Site survey".into()],
                )
                .expect("valid project"),
            )
            .await
            .expect("insert project");
        let app = actix_test::init_service(test_app(state, tokens)).await;

        let updated = actix_test::call_service(
            &app,
            actix_test::TestRequest::put()
                .uri(&format!("/api/projects/{}", project.id))
                .insert_header(auth)
                .set_json(json!({
                    "status": "ongoing",
                    "milestones": ["Site survey", "Permits", "Installation"]
                }))
                .to_request(),
        )
        .await;
        assert_eq!(updated.status(), StatusCode::OK);
        let updated: ProjectResponse = actix_test::read_body_json(updated).await;
        assert_eq!(updated.status, ProjectStatus::Ongoing);
        assert_eq!(
            updated.milestones,
            vec!["Site survey", "Permits", "Installation"]
        );
    }

    #[actix_web::test]
    async fn delete_confirms_with_a_message() {
        let state = HttpState::in_memory();
        let tokens = test_tokens();
        let auth = bearer(&tokens);
        let customer_id = seed_customer(&state).await;
        let project = state
            .projects
            .insert(
                NewProject::validated(customer_id, ProjectStatus::Completed, Vec::new())
                    .expect("valid project"),
            )
            .await
            .expect("insert project");
        let app = actix_test::init_service(test_app(state, tokens)).await;

        let deleted = actix_test::call_service(
            &app,
            actix_test::TestRequest::delete()
                .uri(&format!("/api/projects/{}", project.id))
                .insert_header(auth)
                .to_request(),
        )
        .await;
        assert_eq!(deleted.status(), StatusCode::OK);
        let body: MessageBody = actix_test::read_body_json(deleted).await;
        assert_eq!(body.message, "Project deleted");
    }
}
