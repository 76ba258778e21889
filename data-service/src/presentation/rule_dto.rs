use chrono::NaiveDate;
use serde::Serialize;
use shared::RuleMode;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::entities::{EventRule, SpecialDay};

#[derive(Debug, Serialize, ToSchema)]
pub struct EventRuleResponse {
    pub id: Uuid,
    pub name: String,
    pub mode: RuleMode,
    pub value: f64,
    pub needs_experienced_default: bool,
    pub min_demand: Option<i32>,
    pub max_demand: Option<i32>,
    pub active: bool,
}

impl From<EventRule> for EventRuleResponse {
    fn from(r: EventRule) -> Self {
        Self {
            id: r.id,
            name: r.name,
            mode: r.mode,
            value: r.value,
            needs_experienced_default: r.needs_experienced_default,
            min_demand: r.min_demand,
            max_demand: r.max_demand,
            active: r.active,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SpecialDayResponse {
    pub id: Uuid,
    pub date: NaiveDate,
    pub location: String,
    pub rule_id: Uuid,
    pub note: Option<String>,
    pub active: bool,
}

impl From<SpecialDay> for SpecialDayResponse {
    fn from(s: SpecialDay) -> Self {
        Self {
            id: s.id,
            date: s.date,
            location: s.location,
            rule_id: s.rule_id,
            note: s.note,
            active: s.active,
        }
    }
}
