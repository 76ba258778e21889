pub mod solve_handlers;

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

pub use solve_handlers::solve;

/// Health check handler
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}
