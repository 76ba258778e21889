use chrono::NaiveDate;
use serde::Deserialize;
use shared::{AssignedEmployeeDetail, MissingSegment};
use std::collections::HashMap;
use utoipa::{IntoParams, ToSchema};

use crate::api::requests::demand_request::DemandRowRequest;

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct GenerateDayRequest {
    pub date: NaiveDate,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default = "default_true")]
    pub persist: bool,
    #[serde(default)]
    pub force: bool,
    #[serde(default)]
    pub items: Option<Vec<DemandRowRequest>>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct GenerateRangeRequest {
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default = "default_true")]
    pub persist: bool,
    #[serde(default)]
    pub force: bool,
    #[serde(default)]
    pub items_by_date: HashMap<String, Vec<DemandRowRequest>>,
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct DaySchedulePathQuery {
    #[serde(default)]
    pub location: Option<String>,
}

/// Manager edit patch. Every field is optional; only supplied fields are applied.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct PatchShiftRequest {
    pub date: Option<NaiveDate>,
    pub location: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub demand: Option<i32>,
    pub assigned_employees: Option<Vec<String>>,
    pub needs_experienced: Option<bool>,
    pub missing_minutes: Option<i32>,
    pub confirmed: Option<bool>,
    pub assigned_employees_detail: Option<Vec<AssignedEmployeeDetail>>,
    pub missing_segments: Option<Vec<MissingSegment>>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ApproveShiftRequest {
    #[serde(default)]
    pub note: Option<String>,
}
