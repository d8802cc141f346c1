//! Bearer-token extractor guarding the protected routes.
//!
//! Handlers opt in by taking an [`AuthedUser`] parameter. Extraction reads
//! `Authorization: Bearer <token>`, verifies it against the shared secret,
//! and exposes the decoded user id. `/api/auth/*` handlers simply do not
//! take the extractor.

use actix_web::{dev::Payload, web, FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};
use uuid::Uuid;

use crate::domain::auth::TokenService;
use crate::domain::DomainError;
use crate::inbound::http::error::ApiError;

/// Message returned when the Authorization header is absent.
pub const NO_TOKEN: &str = "No token provided";

/// Identity decoded from a verified bearer token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthedUser {
    pub user_id: Uuid,
}

fn authenticate(req: &HttpRequest) -> Result<AuthedUser, ApiError> {
    let tokens = req
        .app_data::<web::Data<TokenService>>()
        .ok_or_else(|| ApiError::from(DomainError::internal("token service not configured")))?;
    let token = req
        .headers()
        .get(actix_web::http::header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or_else(|| ApiError::from(DomainError::unauthorized(NO_TOKEN)))?;
    let user_id = tokens.verify(token)?;
    Ok(AuthedUser { user_id })
}

impl FromRequest for AuthedUser {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::auth::INVALID_TOKEN;
    use crate::inbound::http::error::MessageBody;
    use actix_web::http::StatusCode;
    use actix_web::{test, App, HttpResponse};

    fn tokens() -> TokenService {
        TokenService::new("test-secret", 3600)
    }

    async fn probe(header: Option<&str>, service: TokenService) -> (StatusCode, String) {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(service))
                .route(
                    "/guarded",
                    web::get().to(|user: AuthedUser| async move {
                        HttpResponse::Ok().body(user.user_id.to_string())
                    }),
                ),
        )
        .await;
        let mut req = test::TestRequest::get().uri("/guarded");
        if let Some(value) = header {
            req = req.insert_header(("Authorization", value));
        }
        let res = test::call_service(&app, req.to_request()).await;
        let status = res.status();
        let body = test::read_body(res).await;
        (status, String::from_utf8_lossy(&body).into_owned())
    }

    #[actix_web::test]
    async fn missing_header_is_unauthorised() {
        let (status, body) = probe(None, tokens()).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        let body: MessageBody = serde_json::from_str(&body).expect("error envelope");
        assert_eq!(body.message, NO_TOKEN);
    }

    #[actix_web::test]
    async fn malformed_token_is_unauthorised() {
        let (status, body) = probe(Some("Bearer not-a-jwt"), tokens()).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        let body: MessageBody = serde_json::from_str(&body).expect("error envelope");
        assert_eq!(body.message, INVALID_TOKEN);
    }

    #[actix_web::test]
    async fn expired_token_is_unauthorised() {
        let expired = TokenService::new("test-secret", -120)
            .issue(Uuid::new_v4())
            .expect("issue token");
        let (status, body) = probe(Some(&format!("Bearer {expired}")), tokens()).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        let body: MessageBody = serde_json::from_str(&body).expect("error envelope");
        assert_eq!(body.message, INVALID_TOKEN);
    }

    #[actix_web::test]
    async fn valid_token_reaches_the_handler() {
        let service = tokens();
        let user_id = Uuid::new_v4();
        let token = service.issue(user_id).expect("issue token");
        let (status, body) = probe(Some(&format!("Bearer {token}")), service).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, user_id.to_string());
    }
}
