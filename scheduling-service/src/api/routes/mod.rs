use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::handlers;
use crate::api::state::AppState;
use shared::solver::{
    AssignedEmployeeDetail, AssignedEmployeeSegment, AssignedShiftInput, AvailabilityInput,
    AvailabilitySlotInput, HoursSummaryEntry, MissingSegment, ShiftAssignmentOut, SolveRequest,
    SolveResponse, UncoveredEntry,
};
use shared::canonical::DemandItem;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Scheduling Service API",
        version = "1.0.0",
        description = "Stateless shift scheduling solver"
    ),
    paths(crate::api::handlers::solve_handlers::solve,),
    components(schemas(
        SolveRequest,
        SolveResponse,
        AvailabilityInput,
        AvailabilitySlotInput,
        AssignedShiftInput,
        DemandItem,
        ShiftAssignmentOut,
        AssignedEmployeeDetail,
        AssignedEmployeeSegment,
        MissingSegment,
        UncoveredEntry,
        HoursSummaryEntry,
    ))
)]
struct ApiDoc;

pub fn create_router(state: AppState) -> Router {
    let api_router = Router::new().route("/solve", post(handlers::solve));

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", api_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
