//! Dashboard insights endpoint.

use actix_web::{get, web};

use crate::domain::DashboardInsights;
use crate::inbound::http::auth::AuthedUser;
use crate::inbound::http::error::MessageBody;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::ApiResult;

/// Recompute the dashboard summary from the live collections.
#[utoipa::path(
    get,
    path = "/api/dashboard/insights",
    responses(
        (status = 200, description = "Summary statistics", body = DashboardInsights),
        (status = 401, description = "Unauthorised", body = MessageBody),
        (status = 500, description = "A collection scan failed", body = MessageBody)
    ),
    tags = ["dashboard"]
)]
#[get("/dashboard/insights")]
pub async fn insights(
    _user: AuthedUser,
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<DashboardInsights>> {
    let insights = state.insights.compute().await?;
    Ok(web::Json(insights))
}
