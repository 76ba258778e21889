use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use shared::ApiResponse;
use uuid::Uuid;

use crate::api::auth::AuthContext;
use crate::api::error::ApiError;
use crate::api::requests::{CreateTransferRequestBody, ModerateTransferRequest};
use crate::api::state::AppState;
use crate::presentation::TransferRequestResponse;

/// Raises a drop or claim request against a shift.
#[utoipa::path(
    post,
    path = "/api/v1/schedule/shift-transfer",
    request_body = CreateTransferRequestBody,
    responses((status = 200, description = "Transfer request created", body = ApiResponse<TransferRequestResponse>)),
    tag = "transfers"
)]
pub async fn create(
    State(state): State<AppState>,
    auth: AuthContext,
    Json(request): Json<CreateTransferRequestBody>,
) -> Result<impl IntoResponse, ApiError> {
    let created = state
        .transfer_service
        .create(auth.tenant_id, &request.shift_uid, &auth.user_id, request.action, request.target_employee, request.note)
        .await?;
    Ok(Json(ApiResponse::success("transfer request created", TransferRequestResponse::from(created))))
}

/// Approves a pending transfer; requires manager/owner role.
#[utoipa::path(
    post,
    path = "/api/v1/schedule/shift-transfer/{id}/approve",
    params(("id" = Uuid, Path, description = "Transfer request ID")),
    request_body = ModerateTransferRequest,
    responses(
        (status = 200, description = "Transfer approved", body = ApiResponse<TransferRequestResponse>),
        (status = 403, description = "Forbidden"),
    ),
    tag = "transfers"
)]
pub async fn approve(
    State(state): State<AppState>,
    auth: AuthContext,
    Path(id): Path<Uuid>,
    Json(request): Json<ModerateTransferRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let moderated = state
        .transfer_service
        .approve(auth.tenant_id, id, auth.role, &auth.user_id, request.manager_note)
        .await?;
    Ok(Json(ApiResponse::success("transfer approved", TransferRequestResponse::from(moderated))))
}

/// Rejects a pending transfer; requires manager/owner role.
#[utoipa::path(
    post,
    path = "/api/v1/schedule/shift-transfer/{id}/reject",
    params(("id" = Uuid, Path, description = "Transfer request ID")),
    request_body = ModerateTransferRequest,
    responses(
        (status = 200, description = "Transfer rejected", body = ApiResponse<TransferRequestResponse>),
        (status = 403, description = "Forbidden"),
    ),
    tag = "transfers"
)]
pub async fn reject(
    State(state): State<AppState>,
    auth: AuthContext,
    Path(id): Path<Uuid>,
    Json(request): Json<ModerateTransferRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let moderated = state
        .transfer_service
        .reject(auth.tenant_id, id, auth.role, &auth.user_id, request.manager_note)
        .await?;
    Ok(Json(ApiResponse::success("transfer rejected", TransferRequestResponse::from(moderated))))
}
