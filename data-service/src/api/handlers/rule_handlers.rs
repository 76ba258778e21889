use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use shared::ApiResponse;
use uuid::Uuid;

use crate::api::auth::AuthContext;
use crate::api::error::ApiError;
use crate::api::requests::{CreateEventRuleRequest, CreateSpecialDayRequest, ListSpecialDaysQuery};
use crate::api::state::AppState;
use crate::domain::repositories::{CreateEventRule, UpsertSpecialDay};
use crate::presentation::{EventRuleResponse, SpecialDayResponse};

const WILDCARD_LOCATION: &str = "";

/// Creates an event rule. Simple CRUD over `rule_repo`; rule application itself lives
/// in the rule engine used by the schedule pipeline.
#[utoipa::path(
    post,
    path = "/api/v1/rules",
    request_body = CreateEventRuleRequest,
    responses((status = 200, description = "Rule created", body = ApiResponse<EventRuleResponse>)),
    tag = "rules"
)]
pub async fn create_rule(
    State(state): State<AppState>,
    auth: AuthContext,
    Json(request): Json<CreateEventRuleRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let rule = state
        .rule_repo
        .create(CreateEventRule {
            tenant_id: auth.tenant_id,
            name: request.name,
            mode: request.mode,
            value: request.value,
            needs_experienced_default: request.needs_experienced_default,
            min_demand: request.min_demand,
            max_demand: request.max_demand,
            active: request.active,
        })
        .await?;
    Ok(Json(ApiResponse::success("rule created", EventRuleResponse::from(rule))))
}

#[utoipa::path(
    get,
    path = "/api/v1/rules",
    responses((status = 200, description = "Rules list", body = ApiResponse<Vec<EventRuleResponse>>)),
    tag = "rules"
)]
pub async fn list_rules(State(state): State<AppState>, auth: AuthContext) -> Result<impl IntoResponse, ApiError> {
    let rules = state.rule_repo.list(auth.tenant_id).await?;
    let response: Vec<EventRuleResponse> = rules.into_iter().map(EventRuleResponse::from).collect();
    Ok(Json(ApiResponse::success("rules retrieved", response)))
}

#[utoipa::path(
    get,
    path = "/api/v1/rules/{id}",
    params(("id" = Uuid, Path, description = "Rule ID")),
    responses((status = 200, description = "Rule", body = ApiResponse<EventRuleResponse>)),
    tag = "rules"
)]
pub async fn get_rule(
    State(state): State<AppState>,
    auth: AuthContext,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let rule = state
        .rule_repo
        .find_by_id(auth.tenant_id, id)
        .await?
        .ok_or_else(|| shared::DomainError::NotFound(format!("rule {id}")))?;
    Ok(Json(ApiResponse::success("rule retrieved", EventRuleResponse::from(rule))))
}

/// Binds a rule to a date, tenant-wide (`location` omitted) or scoped to a single
/// location.
#[utoipa::path(
    post,
    path = "/api/v1/special-days",
    request_body = CreateSpecialDayRequest,
    responses((status = 200, description = "Special day created", body = ApiResponse<SpecialDayResponse>)),
    tag = "rules"
)]
pub async fn create_special_day(
    State(state): State<AppState>,
    auth: AuthContext,
    Json(request): Json<CreateSpecialDayRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let special_day = state
        .special_day_repo
        .upsert(UpsertSpecialDay {
            tenant_id: auth.tenant_id,
            date: request.date,
            location: request.location.unwrap_or_else(|| WILDCARD_LOCATION.to_string()),
            rule_id: request.rule_id,
            note: request.note,
            active: request.active,
        })
        .await?;
    Ok(Json(ApiResponse::success("special day created", SpecialDayResponse::from(special_day))))
}

#[utoipa::path(
    get,
    path = "/api/v1/special-days",
    params(ListSpecialDaysQuery),
    responses((status = 200, description = "Special days list", body = ApiResponse<Vec<SpecialDayResponse>>)),
    tag = "rules"
)]
pub async fn list_special_days(
    State(state): State<AppState>,
    auth: AuthContext,
    Query(query): Query<ListSpecialDaysQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let special_days = state
        .special_day_repo
        .list(auth.tenant_id, query.date_from, query.date_to, query.location.as_deref())
        .await?;
    let response: Vec<SpecialDayResponse> = special_days.into_iter().map(SpecialDayResponse::from).collect();
    Ok(Json(ApiResponse::success("special days retrieved", response)))
}
