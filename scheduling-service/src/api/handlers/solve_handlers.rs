use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use shared::solver::{SolveRequest, SolveResponse};

use crate::api::state::AppState;
use crate::domain::solver::{self, SolverParams};

/// Runs one schedule solve.
///
/// Stateless: every input the model needs (availability, demand, pre-assignments) travels
/// in the request body. The solve itself is CPU-bound and runs off the async runtime under
/// an admission-control semaphore, so one slow solve cannot starve the others.
#[utoipa::path(
    post,
    path = "/api/v1/solve",
    request_body = SolveRequest,
    responses(
        (status = 200, description = "Solve completed (possibly with partial coverage)", body = SolveResponse),
        (status = 503, description = "Too many concurrent solves in flight")
    ),
    tag = "solve"
)]
pub async fn solve(
    State(state): State<AppState>,
    Json(request): Json<SolveRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let permit = state.solve_permits.clone().try_acquire_owned().map_err(|_| {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            "solver at capacity, retry shortly".to_string(),
        )
    })?;

    let defaults = &state.settings.solver;
    let params = SolverParams {
        time_limit_sec: request.time_limit_sec.unwrap_or(defaults.default_time_limit_sec),
        workers: request.workers.unwrap_or(defaults.default_workers),
    };

    let response = tokio::task::spawn_blocking(move || {
        let _permit = permit;
        solver::solve(&request, params)
    })
    .await
    .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, format!("solver task panicked: {e}")))?;

    Ok((StatusCode::OK, Json(response)))
}
