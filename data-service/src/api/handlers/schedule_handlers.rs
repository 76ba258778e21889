use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use shared::{cache_keys, cache_ttl, get_cached, invalidate_cache, ApiResponse, DomainError};
use uuid::Uuid;

use crate::api::auth::AuthContext;
use crate::api::error::ApiError;
use crate::api::requests::{
    ApproveShiftRequest, DaySchedulePathQuery, GenerateDayRequest, GenerateRangeRequest, PatchShiftRequest,
};
use crate::api::state::AppState;
use crate::domain::repositories::PatchScheduleShift;
use crate::presentation::{GenerateScheduleResponse, ScheduleShiftResponse};

const DEFAULT_LOCATION: &str = "default";

fn patch_from_request(patch: PatchShiftRequest) -> PatchScheduleShift {
    PatchScheduleShift {
        date: patch.date,
        location: patch.location,
        start: patch.start,
        end: patch.end,
        demand_count: patch.demand,
        assigned_employees: patch.assigned_employees,
        needs_experienced: patch.needs_experienced,
        missing_minutes: patch.missing_minutes,
        confirmed: patch.confirmed,
        assigned_employees_detail: patch.assigned_employees_detail,
        missing_segments: patch.missing_segments,
    }
}

/// Generates (or fetches) the schedule for a single day, saving the day's demand first
/// unless `items` is omitted.
#[utoipa::path(
    post,
    path = "/api/v1/generate-day",
    request_body = GenerateDayRequest,
    responses((status = 200, description = "Schedule generated", body = ApiResponse<GenerateScheduleResponse>)),
    tag = "schedule"
)]
pub async fn generate_day(
    State(state): State<AppState>,
    auth: AuthContext,
    Json(request): Json<GenerateDayRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let location = request.location.unwrap_or_else(|| DEFAULT_LOCATION.to_string());
    let raw_items = request
        .items
        .map(|rows| rows.into_iter().map(|r| r.into_raw(request.date, &location)).collect());

    let (demand, _created) = state
        .demand_service
        .save_day(auth.tenant_id, request.date, &location, raw_items)
        .await?;

    let response = if request.persist {
        let shifts = state.schedule_service.ensure_schedule(auth.tenant_id, demand.id, request.force).await?;
        GenerateScheduleResponse::new(demand.id, shifts)
    } else {
        let shifts = state.schedule_service.preview_schedule(auth.tenant_id, demand.id).await?;
        GenerateScheduleResponse::new_preview(demand.id, shifts)
    };

    let mut redis_conn = state.redis_pool.clone();
    invalidate_cache(&mut redis_conn, &cache_keys::day_schedule(auth.tenant_id, &request.date.to_string(), &location)).await;

    Ok(Json(ApiResponse::success("schedule generated", response)))
}

/// Generates (or fetches) the schedule for a `[date_from, date_to]` range.
#[utoipa::path(
    post,
    path = "/api/v1/generate-range",
    request_body = GenerateRangeRequest,
    responses((status = 200, description = "Schedule generated", body = ApiResponse<GenerateScheduleResponse>)),
    tag = "schedule"
)]
pub async fn generate_range(
    State(state): State<AppState>,
    auth: AuthContext,
    Json(request): Json<GenerateRangeRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let location = request.location.unwrap_or_else(|| DEFAULT_LOCATION.to_string());

    let mut items_by_date = std::collections::HashMap::new();
    for (date_str, rows) in request.items_by_date {
        let date: NaiveDate = date_str
            .parse()
            .map_err(|_| DomainError::ValidationFailure(format!("invalid date key {date_str}")))?;
        items_by_date.insert(date, rows.into_iter().map(|r| r.into_raw(date, &location)).collect());
    }

    let (demand, _created) = state
        .demand_service
        .save_range(auth.tenant_id, request.date_from, request.date_to, items_by_date, &location)
        .await?;

    let response = if request.persist {
        let shifts = state.schedule_service.ensure_schedule(auth.tenant_id, demand.id, request.force).await?;
        GenerateScheduleResponse::new(demand.id, shifts)
    } else {
        let shifts = state.schedule_service.preview_schedule(auth.tenant_id, demand.id).await?;
        GenerateScheduleResponse::new_preview(demand.id, shifts)
    };

    Ok(Json(ApiResponse::success("schedule generated", response)))
}

/// All persisted shifts for a demand.
#[utoipa::path(
    get,
    path = "/api/v1/schedule/{demand_id}",
    params(("demand_id" = Uuid, Path, description = "Demand ID")),
    responses((status = 200, description = "Schedule shifts", body = ApiResponse<Vec<ScheduleShiftResponse>>)),
    tag = "schedule"
)]
pub async fn get_schedule_by_demand(
    State(state): State<AppState>,
    _auth: AuthContext,
    Path(demand_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let shifts = state.schedule_service.list_by_demand(demand_id).await?;
    let response: Vec<ScheduleShiftResponse> = shifts.into_iter().map(ScheduleShiftResponse::from).collect();
    Ok(Json(ApiResponse::success("schedule retrieved", response)))
}

/// Shifts for one demand narrowed to a single calendar day.
#[utoipa::path(
    get,
    path = "/api/v1/schedule/{demand_id}/day/{day}",
    params(
        ("demand_id" = Uuid, Path, description = "Demand ID"),
        ("day" = String, Path, description = "YYYY-MM-DD"),
    ),
    responses((status = 200, description = "Schedule shifts for a day", body = ApiResponse<Vec<ScheduleShiftResponse>>)),
    tag = "schedule"
)]
pub async fn get_schedule_by_demand_day(
    State(state): State<AppState>,
    _auth: AuthContext,
    Path((demand_id, day)): Path<(Uuid, NaiveDate)>,
) -> Result<impl IntoResponse, ApiError> {
    let shifts = state.schedule_service.list_by_demand(demand_id).await?;
    let response: Vec<ScheduleShiftResponse> = shifts
        .into_iter()
        .filter(|s| s.date == day)
        .map(ScheduleShiftResponse::from)
        .collect();
    Ok(Json(ApiResponse::success("schedule retrieved", response)))
}

/// Persisted shifts for a day, lazily generating them if none exist yet; cached in
/// Redis on the read path.
#[utoipa::path(
    get,
    path = "/api/v1/days/{day}",
    params(("day" = String, Path, description = "YYYY-MM-DD"), DaySchedulePathQuery),
    responses((status = 200, description = "Day schedule", body = ApiResponse<Vec<ScheduleShiftResponse>>)),
    tag = "schedule"
)]
pub async fn get_day_schedule(
    State(state): State<AppState>,
    auth: AuthContext,
    Path(day): Path<NaiveDate>,
    Query(query): Query<DaySchedulePathQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let location = query.location.unwrap_or_else(|| DEFAULT_LOCATION.to_string());
    let cache_key = cache_keys::day_schedule(auth.tenant_id, &day.to_string(), &location);
    let mut redis_conn = state.redis_pool.clone();

    if let Some(cached) = get_cached::<ApiResponse<Vec<ScheduleShiftResponse>>>(&mut redis_conn, &cache_key).await {
        return Ok(Json(cached));
    }

    let shifts = state.schedule_service.get_day_schedule(auth.tenant_id, day, &location).await?;
    let serialized: Vec<ScheduleShiftResponse> = shifts.into_iter().map(ScheduleShiftResponse::from).collect();
    let response = ApiResponse::success("day schedule retrieved", serialized);

    shared::set_cached(&mut redis_conn, &cache_key, &response, cache_ttl::DAY_SCHEDULE).await;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/v1/schedule/shift/{shift_uid}",
    params(("shift_uid" = String, Path, description = "Stable shift identifier")),
    responses((status = 200, description = "Shift", body = ApiResponse<ScheduleShiftResponse>)),
    tag = "schedule"
)]
pub async fn get_shift(
    State(state): State<AppState>,
    auth: AuthContext,
    Path(shift_uid): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let shift = state.schedule_service.get_shift(auth.tenant_id, &shift_uid).await?;
    Ok(Json(ApiResponse::success("shift retrieved", ScheduleShiftResponse::from(shift))))
}

/// Applies a manager edit patch. Any edit invalidates a prior approval.
#[utoipa::path(
    post,
    path = "/api/v1/schedule/shift/{shift_uid}",
    params(("shift_uid" = String, Path, description = "Stable shift identifier")),
    request_body = PatchShiftRequest,
    responses((status = 200, description = "Shift updated", body = ApiResponse<ScheduleShiftResponse>)),
    tag = "schedule"
)]
pub async fn update_shift(
    State(state): State<AppState>,
    auth: AuthContext,
    Path(shift_uid): Path<String>,
    Json(request): Json<PatchShiftRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let shift = state
        .schedule_service
        .update_shift(auth.tenant_id, &shift_uid, patch_from_request(request))
        .await?;
    Ok(Json(ApiResponse::success("shift updated", ScheduleShiftResponse::from(shift))))
}

/// Approves a shift; requires manager/owner role.
#[utoipa::path(
    post,
    path = "/api/v1/schedule/shift/{shift_uid}/approve",
    params(("shift_uid" = String, Path, description = "Stable shift identifier")),
    request_body = ApproveShiftRequest,
    responses(
        (status = 200, description = "Shift approved", body = ApiResponse<ScheduleShiftResponse>),
        (status = 403, description = "Forbidden"),
    ),
    tag = "schedule"
)]
pub async fn approve_shift(
    State(state): State<AppState>,
    auth: AuthContext,
    Path(shift_uid): Path<String>,
    Json(_request): Json<ApproveShiftRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let shift = state
        .schedule_service
        .approve_shift(auth.tenant_id, &shift_uid, auth.role, &auth.user_id)
        .await?;
    Ok(Json(ApiResponse::success("shift approved", ScheduleShiftResponse::from(shift))))
}
