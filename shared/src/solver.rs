//! Wire contract between `data-service` and `scheduling-service`'s `/solve` endpoint,
//! kept here so both services agree on one definition.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::canonical::DemandItem;

/// One availability record as fed to the solver: per-employee, per-day.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AvailabilityInput {
    pub employee_id: String,
    #[serde(default)]
    pub employee_name: Option<String>,
    /// ISO date (`YYYY-MM-DD`).
    pub date: String,
    pub experienced: bool,
    pub hours_min: i32,
    /// `None` means unbounded.
    pub hours_max: Option<i32>,
    pub available_slots: Vec<AvailabilitySlotInput>,
    pub assigned_shift: Option<AssignedShiftInput>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AvailabilitySlotInput {
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AssignedShiftInput {
    pub location: String,
    pub start: String,
    pub end: String,
    #[serde(default)]
    pub confirmed: bool,
}

/// Request body for `POST /solve`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SolveRequest {
    pub availability: Vec<AvailabilityInput>,
    pub demand: Vec<DemandItem>,
    #[serde(default)]
    pub time_limit_sec: Option<f64>,
    #[serde(default)]
    pub workers: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AssignedEmployeeSegment {
    pub start: String,
    pub end: String,
    pub minutes: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AssignedEmployeeDetail {
    pub employee_id: String,
    #[serde(default)]
    pub employee_name: Option<String>,
    pub start: String,
    pub end: String,
    pub minutes: i32,
    pub segments: Vec<AssignedEmployeeSegment>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct MissingSegment {
    pub start: String,
    pub end: String,
    pub missing: i32,
    pub missing_minutes: i32,
}

/// One original (un-sliced) shift's solved assignment.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ShiftAssignmentOut {
    pub date: String,
    pub location: String,
    pub start: String,
    pub end: String,
    pub demand: i32,
    pub assigned_employees: Vec<String>,
    pub needs_experienced: bool,
    pub missing_minutes: i32,
    pub assigned_employees_detail: Vec<AssignedEmployeeDetail>,
    pub missing_segments: Vec<MissingSegment>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UncoveredEntry {
    pub date: String,
    pub location: String,
    pub start: String,
    pub end: String,
    pub missing_minutes: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct HoursSummaryEntry {
    pub employee_id: String,
    pub experienced: bool,
    pub total_hours: f64,
    pub hours_min: i32,
    pub hours_max: Option<i32>,
    pub over_hours: f64,
    pub under_hours: f64,
}

/// Response body for `POST /solve`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Default)]
pub struct SolveResponse {
    pub assignments: Vec<ShiftAssignmentOut>,
    pub uncovered: Vec<UncoveredEntry>,
    pub hours_summary: Vec<HoursSummaryEntry>,
}

impl Default for ShiftAssignmentOut {
    fn default() -> Self {
        Self {
            date: String::new(),
            location: String::new(),
            start: String::new(),
            end: String::new(),
            demand: 0,
            assigned_employees: Vec::new(),
            needs_experienced: false,
            missing_minutes: 0,
            assigned_employees_detail: Vec::new(),
            missing_segments: Vec::new(),
        }
    }
}
