//! API error types with IntoResponse
//!
//! Errors are converted to JSON responses with appropriate status codes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Validation failed (400)
    Validation(ValidationError),

    /// Unique constraint hit (409)
    Conflict { resource: &'static str, key: String },

    /// Database absent or failing (503, retryable)
    Unavailable { detail: String },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::Validation(e) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "validation_error",
                    "detail": e.to_string()
                }),
            ),
            Self::Conflict { resource, key } => (
                StatusCode::CONFLICT,
                json!({
                    "error": "conflict",
                    "detail": format!("{} '{}' already exists", resource, key)
                }),
            ),
            Self::Unavailable { detail } => {
                tracing::warn!("Database unavailable: {}", detail);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    json!({
                        "error": "service_unavailable",
                        "detail": detail
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::Duplicate { resource, key } => Self::Conflict { resource, key },
            DbError::Unavailable => Self::Unavailable {
                detail: "database not connected".into(),
            },
            DbError::Sqlx(e) => Self::Unavailable {
                detail: format!("database error: {}", e),
            },
        }
    }
}
