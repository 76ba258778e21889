//! `AuthContext` extractor: reads already-resolved identity headers set by an upstream
//! gateway/auth-service. This core never validates a JWT — it only trusts and branches
//! on what it is handed.

use axum::extract::FromRequestParts;
use axum::http::{request::Parts, StatusCode};
use axum::response::IntoResponse;
use axum::{async_trait, Json};
use serde_json::json;
use shared::Role;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    pub tenant_id: Uuid,
    /// Opaque employee token (matches `employee_id`/`assigned_employees` elsewhere in
    /// this core — never a UUID).
    pub user_id: String,
    pub role: Role,
}

impl AuthContext {
    pub fn require_moderator(&self) -> Result<(), AuthRejection> {
        if self.role.can_moderate() {
            Ok(())
        } else {
            Err(AuthRejection::Forbidden("manager or owner role required".to_string()))
        }
    }
}

pub enum AuthRejection {
    Unauthenticated(String),
    Forbidden(String),
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AuthRejection::Unauthenticated(msg) => (StatusCode::UNAUTHORIZED, msg),
            AuthRejection::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

fn header_str<'a>(parts: &'a Parts, name: &str) -> Option<&'a str> {
    parts.headers.get(name)?.to_str().ok()
}

fn parse_role(raw: &str) -> Option<Role> {
    match raw.to_ascii_uppercase().as_str() {
        "EMPLOYEE" => Some(Role::Employee),
        "MANAGER" => Some(Role::Manager),
        "OWNER" => Some(Role::Owner),
        _ => None,
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthContext
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user_id = header_str(parts, "x-user-id")
            .filter(|raw| !raw.is_empty())
            .ok_or_else(|| AuthRejection::Unauthenticated("missing x-user-id".to_string()))?
            .to_string();

        let tenant_id = header_str(parts, "x-tenant-id")
            .ok_or_else(|| AuthRejection::Forbidden("missing x-tenant-id".to_string()))
            .and_then(|raw| {
                Uuid::parse_str(raw)
                    .map_err(|_| AuthRejection::Forbidden("malformed x-tenant-id".to_string()))
            })?;

        let role = header_str(parts, "x-role")
            .ok_or_else(|| AuthRejection::Forbidden("missing x-role".to_string()))
            .and_then(|raw| {
                parse_role(raw).ok_or_else(|| AuthRejection::Forbidden(format!("unknown role: {raw}")))
            })?;

        Ok(AuthContext { tenant_id, user_id, role })
    }
}
