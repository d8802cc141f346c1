//! Mapping from domain errors to HTTP responses.
//!
//! Keeps the domain free of transport concerns: every handler returns
//! [`ApiResult`], and failures serialise as the `{"message": ...}` envelope
//! with a status code matching the [`ErrorCode`].

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::domain::ports::RepositoryError;
use crate::domain::{DomainError, ErrorCode};
use crate::middleware::TraceId;

/// Generic message used to redact internal failures outside debug builds.
const INTERNAL_MESSAGE: &str = "Something went wrong!";

/// JSON body `{"message": ...}` used for errors and delete confirmations.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MessageBody {
    pub message: String,
    /// Set on internal errors so a response can be matched to its log line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
}

impl MessageBody {
    /// Wrap a message string.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            trace_id: None,
        }
    }
}

/// HTTP-facing error wrapping a [`DomainError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError(DomainError);

impl ApiError {
    /// Stable machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        self.0.code()
    }

    /// Human-readable message.
    pub fn message(&self) -> &str {
        self.0.message()
    }

    /// Convenience constructor for 400 responses.
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self(DomainError::invalid_request(message))
    }
}

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        Self(error)
    }
}

impl From<RepositoryError> for ApiError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::Conflict { message } => Self(DomainError::invalid_request(message)),
            other => Self(DomainError::internal(other.to_string())),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ApiError {}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self.0.code() {
            ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
            ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut body = MessageBody::new(self.0.message());
        if self.0.code() == ErrorCode::InternalError {
            let trace_id = TraceId::current();
            error!(
                trace_id = ?trace_id,
                message = self.0.message(),
                "internal error"
            );
            if !cfg!(debug_assertions) {
                body.message = INTERNAL_MESSAGE.to_owned();
            }
            body.trace_id = trace_id.map(|id| id.to_string());
        }
        HttpResponse::build(self.status_code()).json(body)
    }
}

/// Convenience alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;
