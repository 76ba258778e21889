use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use shared::ApiResponse;

use crate::api::auth::AuthContext;
use crate::api::error::ApiError;
use crate::api::requests::{GetDayQuery, SaveDayRequest, SaveRangeRequest};
use crate::api::state::AppState;
use crate::presentation::{DemandDayResponse, DemandSaveResponse};

const DEFAULT_LOCATION: &str = "default";

/// Saves one day's demand, falling back to the weekly default template when `items`
/// is omitted.
#[utoipa::path(
    post,
    path = "/api/v1/demand/day",
    request_body = SaveDayRequest,
    responses(
        (status = 200, description = "Demand saved", body = ApiResponse<DemandSaveResponse>),
        (status = 400, description = "Bad request"),
    ),
    tag = "demand"
)]
pub async fn save_day(
    State(state): State<AppState>,
    auth: AuthContext,
    Json(request): Json<SaveDayRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let location = request.location.unwrap_or_else(|| DEFAULT_LOCATION.to_string());
    let raw_items = request
        .items
        .map(|rows| rows.into_iter().map(|r| r.into_raw(request.date, &location)).collect());

    let (demand, created) = state
        .demand_service
        .save_day(auth.tenant_id, request.date, &location, raw_items)
        .await?;

    let response = DemandSaveResponse {
        demand_id: demand.id,
        content_hash: demand.content_hash,
        date_from: demand.date_from,
        date_to: demand.date_to,
        created,
    };
    Ok(Json(ApiResponse::success("demand saved", response)))
}

/// Returns a day's canonical demand items, marking `inherited = true` when they came
/// from the weekly default template rather than an explicit save.
#[utoipa::path(
    get,
    path = "/api/v1/demand/day",
    params(GetDayQuery),
    responses((status = 200, description = "Day demand", body = ApiResponse<DemandDayResponse>)),
    tag = "demand"
)]
pub async fn get_day(
    State(state): State<AppState>,
    auth: AuthContext,
    Query(query): Query<GetDayQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let location = query.location.unwrap_or_else(|| DEFAULT_LOCATION.to_string());
    let (items, inherited) = state.demand_service.get_day(auth.tenant_id, query.date, &location).await?;

    let response = DemandDayResponse {
        date: query.date,
        location,
        items,
        content_hash: None,
        inherited,
    };
    Ok(Json(ApiResponse::success("day demand retrieved", response)))
}

/// Saves a `[date_from, date_to]` range as a single content-addressed Demand row.
#[utoipa::path(
    post,
    path = "/api/v1/demand/range",
    request_body = SaveRangeRequest,
    responses(
        (status = 200, description = "Demand range saved", body = ApiResponse<DemandSaveResponse>),
        (status = 400, description = "Bad request"),
    ),
    tag = "demand"
)]
pub async fn save_range(
    State(state): State<AppState>,
    auth: AuthContext,
    Json(request): Json<SaveRangeRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let location = request.location.unwrap_or_else(|| DEFAULT_LOCATION.to_string());

    let mut items_by_date = std::collections::HashMap::new();
    for (date_str, rows) in request.items_by_date {
        let date: chrono::NaiveDate = date_str
            .parse()
            .map_err(|_| shared::DomainError::ValidationFailure(format!("invalid date key {date_str}")))?;
        items_by_date.insert(date, rows.into_iter().map(|r| r.into_raw(date, &location)).collect());
    }

    let (demand, created) = state
        .demand_service
        .save_range(auth.tenant_id, request.date_from, request.date_to, items_by_date, &location)
        .await?;

    let response = DemandSaveResponse {
        demand_id: demand.id,
        content_hash: demand.content_hash,
        date_from: demand.date_from,
        date_to: demand.date_to,
        created,
    };
    Ok(Json(ApiResponse::success("demand range saved", response)))
}
