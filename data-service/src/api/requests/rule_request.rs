use chrono::NaiveDate;
use serde::Deserialize;
use shared::RuleMode;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateEventRuleRequest {
    pub name: String,
    pub mode: RuleMode,
    pub value: f64,
    #[serde(default)]
    pub needs_experienced_default: bool,
    #[serde(default)]
    pub min_demand: Option<i32>,
    #[serde(default)]
    pub max_demand: Option<i32>,
    #[serde(default = "default_active")]
    pub active: bool,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateSpecialDayRequest {
    pub date: NaiveDate,
    /// Omitted or empty is the tenant-wide wildcard.
    #[serde(default)]
    pub location: Option<String>,
    pub rule_id: Uuid,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub active: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct ListSpecialDaysQuery {
    #[serde(default)]
    pub date_from: Option<NaiveDate>,
    #[serde(default)]
    pub date_to: Option<NaiveDate>,
    #[serde(default)]
    pub location: Option<String>,
}
