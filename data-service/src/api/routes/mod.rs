use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{handlers, state::AppState};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Data Service API",
        version = "1.0.0",
        description = "Workforce demand, scheduling and shift-transfer API with Redis caching"
    ),
    paths(
        handlers::health_handlers::health_check,
        // Availability
        handlers::availability_handlers::upsert_availability,
        // Demand
        handlers::demand_handlers::save_day,
        handlers::demand_handlers::get_day,
        handlers::demand_handlers::save_range,
        // Default templates
        handlers::default_template_handlers::upsert,
        handlers::default_template_handlers::bulk_replace,
        handlers::default_template_handlers::week,
        // Schedule
        handlers::schedule_handlers::generate_day,
        handlers::schedule_handlers::generate_range,
        handlers::schedule_handlers::get_schedule_by_demand,
        handlers::schedule_handlers::get_schedule_by_demand_day,
        handlers::schedule_handlers::get_day_schedule,
        handlers::schedule_handlers::get_shift,
        handlers::schedule_handlers::update_shift,
        handlers::schedule_handlers::approve_shift,
        // Transfers
        handlers::transfer_handlers::create,
        handlers::transfer_handlers::approve,
        handlers::transfer_handlers::reject,
        // Rules
        handlers::rule_handlers::create_rule,
        handlers::rule_handlers::list_rules,
        handlers::rule_handlers::get_rule,
        handlers::rule_handlers::create_special_day,
        handlers::rule_handlers::list_special_days,
    ),
    components(schemas(
        // Shared enums/value types
        shared::RuleMode,
        shared::TransferAction,
        shared::TransferStatus,
        shared::AssignedEmployeeDetail,
        shared::MissingSegment,
        // Availability
        crate::domain::entities::AvailabilitySlot,
        crate::domain::entities::AssignedShiftRef,
        crate::api::requests::AvailabilityDayRequest,
        crate::api::requests::AssignedShiftRequest,
        crate::api::requests::SlotInput,
        crate::api::requests::SlotsInput,
        crate::api::requests::UpsertAvailabilityRequest,
        crate::presentation::AvailabilityResponse,
        // Demand
        shared::DemandItem,
        shared::TemplateItem,
        crate::api::requests::DemandRowRequest,
        crate::api::requests::SaveDayRequest,
        crate::api::requests::SaveRangeRequest,
        crate::presentation::DemandDayResponse,
        crate::presentation::DemandSaveResponse,
        // Default templates
        crate::api::requests::UpsertDefaultTemplateRequest,
        crate::api::requests::DefaultTemplateEntryRequest,
        crate::api::requests::BulkDefaultTemplateRequest,
        crate::presentation::DefaultTemplateEntryResponse,
        // Schedule
        crate::api::requests::GenerateDayRequest,
        crate::api::requests::GenerateRangeRequest,
        crate::api::requests::PatchShiftRequest,
        crate::api::requests::ApproveShiftRequest,
        crate::presentation::GenerateScheduleResponse,
        crate::presentation::ScheduleShiftResponse,
        crate::presentation::ScheduleSummaryResponse,
        crate::presentation::ShiftMetaResponse,
        // Transfers
        crate::api::requests::CreateTransferRequestBody,
        crate::api::requests::ModerateTransferRequest,
        crate::presentation::TransferRequestResponse,
        // Rules
        crate::api::requests::CreateEventRuleRequest,
        crate::api::requests::CreateSpecialDayRequest,
        crate::presentation::EventRuleResponse,
        crate::presentation::SpecialDayResponse,
    )),
    tags(
        (name = "health", description = "Liveness probe"),
        (name = "availability", description = "Employee availability"),
        (name = "demand", description = "Demand capture"),
        (name = "default-templates", description = "Weekly default demand templates"),
        (name = "schedule", description = "Schedule generation and shift mutation"),
        (name = "transfers", description = "Shift drop/claim transfer workflow"),
        (name = "rules", description = "Event rules and special days"),
    )
)]
struct ApiDoc;

pub fn create_router(app_state: AppState) -> Router {
    let availability_routes =
        Router::new().route("/availability", post(handlers::availability_handlers::upsert_availability));

    let demand_routes = Router::new()
        .route(
            "/demand/day",
            post(handlers::demand_handlers::save_day).get(handlers::demand_handlers::get_day),
        )
        .route("/demand/range", post(handlers::demand_handlers::save_range));

    let default_template_routes = Router::new()
        .route("/demand/default", post(handlers::default_template_handlers::upsert))
        .route("/demand/default/bulk", post(handlers::default_template_handlers::bulk_replace))
        .route("/demand/default/week", get(handlers::default_template_handlers::week));

    let schedule_routes = Router::new()
        .route("/generate-day", post(handlers::schedule_handlers::generate_day))
        .route("/generate-range", post(handlers::schedule_handlers::generate_range))
        .route("/schedule/:demand_id", get(handlers::schedule_handlers::get_schedule_by_demand))
        .route(
            "/schedule/:demand_id/day/:day",
            get(handlers::schedule_handlers::get_schedule_by_demand_day),
        )
        .route("/days/:day", get(handlers::schedule_handlers::get_day_schedule))
        .route(
            "/schedule/shift/:shift_uid",
            get(handlers::schedule_handlers::get_shift).post(handlers::schedule_handlers::update_shift),
        )
        .route("/schedule/shift/:shift_uid/approve", post(handlers::schedule_handlers::approve_shift));

    let transfer_routes = Router::new()
        .route("/schedule/shift-transfer", post(handlers::transfer_handlers::create))
        .route("/schedule/shift-transfer/:id/approve", post(handlers::transfer_handlers::approve))
        .route("/schedule/shift-transfer/:id/reject", post(handlers::transfer_handlers::reject));

    let rule_routes = Router::new()
        .route(
            "/rules",
            post(handlers::rule_handlers::create_rule).get(handlers::rule_handlers::list_rules),
        )
        .route("/rules/:id", get(handlers::rule_handlers::get_rule))
        .route(
            "/special-days",
            post(handlers::rule_handlers::create_special_day).get(handlers::rule_handlers::list_special_days),
        );

    let api_router = Router::new()
        .route("/health", get(handlers::health_handlers::health_check))
        .merge(availability_routes)
        .merge(demand_routes)
        .merge(default_template_routes)
        .merge(schedule_routes)
        .merge(transfer_routes)
        .merge(rule_routes);

    Router::new()
        .nest("/api/v1", api_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
