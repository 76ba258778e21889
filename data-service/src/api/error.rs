//! Maps `DomainError` onto HTTP responses via one shared `IntoResponse` impl so every
//! handler can propagate with `?` instead of repeating a `map_err` match.

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use shared::DomainError;

pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self.0 {
            DomainError::ValidationFailure(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            DomainError::AuthorizationFailure(msg) => (StatusCode::FORBIDDEN, msg.clone()),
            DomainError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            DomainError::ConflictState(msg) => (StatusCode::CONFLICT, msg.clone()),
            DomainError::DatabaseError(msg) => {
                tracing::error!(error = %msg, "database error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal error".to_string())
            }
            DomainError::ExternalServiceError(msg) => {
                tracing::error!(error = %msg, "external service error");
                (StatusCode::BAD_GATEWAY, "upstream service error".to_string())
            }
            DomainError::SolverTimeout(msg) => {
                tracing::warn!(error = %msg, "solver timed out, best incumbent returned");
                (StatusCode::OK, msg.clone())
            }
            DomainError::IndexRace(msg) => {
                tracing::warn!(error = %msg, "day-index race, refetch required");
                (StatusCode::CONFLICT, msg.clone())
            }
            DomainError::NotificationFailure(msg) => {
                tracing::warn!(error = %msg, "notification dispatch failed, swallowed");
                (StatusCode::OK, String::new())
            }
            DomainError::InternalError(msg) => {
                tracing::error!(error = %msg, "internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal error".to_string())
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
