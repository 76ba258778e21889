use axum::{extract::State, response::IntoResponse, Json};
use shared::ApiResponse;

use crate::api::auth::AuthContext;
use crate::api::error::ApiError;
use crate::api::requests::{SlotsInput, UpsertAvailabilityRequest};
use crate::api::state::AppState;
use crate::domain::services::availability_service::{AvailabilityDayInput, RawSlot};
use crate::presentation::AvailabilityResponse;

/// Bulk-upserts one employee's availability across several days.
#[utoipa::path(
    post,
    path = "/api/v1/availability",
    request_body = UpsertAvailabilityRequest,
    responses(
        (status = 200, description = "Availability upserted", body = ApiResponse<Vec<AvailabilityResponse>>),
        (status = 400, description = "Bad request"),
    ),
    tag = "availability"
)]
pub async fn upsert_availability(
    State(state): State<AppState>,
    auth: AuthContext,
    Json(request): Json<UpsertAvailabilityRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let days = request
        .availabilities
        .into_iter()
        .map(|day| AvailabilityDayInput {
            date: day.date,
            available_slots: SlotsInput::into_vec(day.available_slots)
                .into_iter()
                .map(|s| RawSlot { start: s.start, end: s.end })
                .collect(),
            assigned_shift: day.assigned_shift.map(|s| crate::domain::entities::AssignedShiftRef {
                location: s.location,
                start: s.start,
                end: s.end,
                confirmed: s.confirmed,
            }),
        })
        .collect();

    let rows = state
        .availability_service
        .upsert_bulk(
            auth.tenant_id,
            &request.employee_id,
            request.employee_name,
            request.experienced,
            request.hours_min,
            request.hours_max,
            days,
        )
        .await?;

    let response: Vec<AvailabilityResponse> = rows.into_iter().map(AvailabilityResponse::from).collect();
    Ok(Json(ApiResponse::success("availability upserted", response)))
}
