use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use shared::ApiResponse;

use crate::api::auth::AuthContext;
use crate::api::error::ApiError;
use crate::api::requests::{
    default_template_request::to_raw_template_items, BulkDefaultTemplateRequest, UpsertDefaultTemplateRequest,
    WeekTemplateQuery,
};
use crate::api::state::AppState;
use crate::presentation::DefaultTemplateEntryResponse;

const DEFAULT_LOCATION: &str = "default";

/// Upserts one weekday's default template row, or the wildcard fallback row when
/// `weekday` is omitted.
#[utoipa::path(
    post,
    path = "/api/v1/demand/default",
    request_body = UpsertDefaultTemplateRequest,
    responses((status = 200, description = "Template saved", body = ApiResponse<DefaultTemplateEntryResponse>)),
    tag = "default-templates"
)]
pub async fn upsert(
    State(state): State<AppState>,
    auth: AuthContext,
    Json(request): Json<UpsertDefaultTemplateRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let location = request.location.unwrap_or_else(|| DEFAULT_LOCATION.to_string());
    let raw = to_raw_template_items(request.items);

    let row = state
        .default_template_service
        .upsert(auth.tenant_id, &location, request.weekday, raw)
        .await?;

    let response = DefaultTemplateEntryResponse {
        weekday: row.weekday.unwrap_or(-1),
        items: row.items.0,
        inherited: false,
    };
    Ok(Json(ApiResponse::success("template saved", response)))
}

/// Atomically replaces every weekday row for a location.
#[utoipa::path(
    post,
    path = "/api/v1/demand/default/bulk",
    request_body = BulkDefaultTemplateRequest,
    responses((status = 200, description = "Templates replaced", body = ApiResponse<Vec<DefaultTemplateEntryResponse>>)),
    tag = "default-templates"
)]
pub async fn bulk_replace(
    State(state): State<AppState>,
    auth: AuthContext,
    Json(request): Json<BulkDefaultTemplateRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let location = request.location.unwrap_or_else(|| DEFAULT_LOCATION.to_string());
    let entries = request
        .entries
        .into_iter()
        .map(|e| (e.weekday, to_raw_template_items(e.items)))
        .collect();

    let rows = state.default_template_service.replace_bulk(auth.tenant_id, &location, entries).await?;

    let response: Vec<DefaultTemplateEntryResponse> = rows
        .into_iter()
        .map(|row| DefaultTemplateEntryResponse {
            weekday: row.weekday.unwrap_or(-1),
            items: row.items.0,
            inherited: false,
        })
        .collect();
    Ok(Json(ApiResponse::success("templates replaced", response)))
}

/// Returns all 7 weekdays for a location, each flagged `inherited` when backed only by
/// the wildcard row.
#[utoipa::path(
    get,
    path = "/api/v1/demand/default/week",
    params(WeekTemplateQuery),
    responses((status = 200, description = "Weekly template", body = ApiResponse<Vec<DefaultTemplateEntryResponse>>)),
    tag = "default-templates"
)]
pub async fn week(
    State(state): State<AppState>,
    auth: AuthContext,
    Query(query): Query<WeekTemplateQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let location = query.location.unwrap_or_else(|| DEFAULT_LOCATION.to_string());
    let rows = state.default_template_service.week(auth.tenant_id, &location).await?;

    let response: Vec<DefaultTemplateEntryResponse> = rows
        .into_iter()
        .map(|(weekday, items, inherited)| DefaultTemplateEntryResponse { weekday, items, inherited })
        .collect();
    Ok(Json(ApiResponse::success("weekly template retrieved", response)))
}
