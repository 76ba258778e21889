use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use shared::{AssignedEmployeeDetail, MissingSegment};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::entities::ScheduleShift;
use crate::domain::repositories::NewScheduleShift;

#[derive(Debug, Serialize, ToSchema)]
pub struct ShiftMetaResponse {
    pub assigned_employees_detail: Vec<AssignedEmployeeDetail>,
    pub missing_segments: Vec<MissingSegment>,
    pub uncovered: Vec<serde_json::Value>,
    pub hours_summary: Vec<serde_json::Value>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ScheduleShiftResponse {
    pub id: Uuid,
    pub demand_id: Uuid,
    pub shift_uid: String,
    pub date: NaiveDate,
    pub location: String,
    pub start: String,
    pub end: String,
    pub demand_count: i32,
    pub needs_experienced: bool,
    pub assigned_employees: Vec<String>,
    pub missing_minutes: i32,
    pub meta: ShiftMetaResponse,
    pub user_edited: bool,
    pub confirmed: bool,
    pub approved_by: Option<String>,
    pub approved_at: Option<DateTime<Utc>>,
}

impl From<ScheduleShift> for ScheduleShiftResponse {
    fn from(shift: ScheduleShift) -> Self {
        Self {
            id: shift.id,
            demand_id: shift.demand_id,
            shift_uid: shift.shift_uid,
            date: shift.date,
            location: shift.location,
            start: shift.start,
            end: shift.end,
            demand_count: shift.demand_count,
            needs_experienced: shift.needs_experienced,
            assigned_employees: shift.assigned_employees.0,
            missing_minutes: shift.missing_minutes,
            meta: ShiftMetaResponse {
                assigned_employees_detail: shift.meta.0.assigned_employees_detail,
                missing_segments: shift.meta.0.missing_segments,
                uncovered: shift.meta.0.uncovered,
                hours_summary: shift.meta.0.hours_summary,
            },
            user_edited: shift.user_edited,
            confirmed: shift.confirmed,
            approved_by: shift.approved_by,
            approved_at: shift.approved_at,
        }
    }
}

/// Not-yet-persisted shift, built from a `persist=false` solve. `id` is a nil UUID and
/// `user_edited`/`confirmed`/`approved_*` carry their unsolved defaults since the row
/// was never written to `shift_repo`.
impl From<NewScheduleShift> for ScheduleShiftResponse {
    fn from(shift: NewScheduleShift) -> Self {
        Self {
            id: Uuid::nil(),
            demand_id: shift.demand_id,
            shift_uid: shift.shift_uid,
            date: shift.date,
            location: shift.location,
            start: shift.start,
            end: shift.end,
            demand_count: shift.demand_count,
            needs_experienced: shift.needs_experienced,
            assigned_employees: shift.assigned_employees,
            missing_minutes: shift.missing_minutes,
            meta: ShiftMetaResponse {
                assigned_employees_detail: shift.meta.assigned_employees_detail,
                missing_segments: shift.meta.missing_segments,
                uncovered: shift.meta.uncovered,
                hours_summary: shift.meta.hours_summary,
            },
            user_edited: false,
            confirmed: false,
            approved_by: None,
            approved_at: None,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ScheduleSummaryResponse {
    pub uncovered: Vec<serde_json::Value>,
    pub hours_summary: Vec<serde_json::Value>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GenerateScheduleResponse {
    pub demand_id: Uuid,
    pub assignments: Vec<ScheduleShiftResponse>,
    pub summary: ScheduleSummaryResponse,
}

impl GenerateScheduleResponse {
    pub fn new(demand_id: Uuid, shifts: Vec<ScheduleShift>) -> Self {
        let uncovered = shifts.first().map(|s| s.meta.0.uncovered.clone()).unwrap_or_default();
        let hours_summary = shifts.first().map(|s| s.meta.0.hours_summary.clone()).unwrap_or_default();
        Self {
            demand_id,
            assignments: shifts.into_iter().map(ScheduleShiftResponse::from).collect(),
            summary: ScheduleSummaryResponse { uncovered, hours_summary },
        }
    }

    /// Builds a response from an unpersisted (`persist=false`) solve.
    pub fn new_preview(demand_id: Uuid, shifts: Vec<NewScheduleShift>) -> Self {
        let uncovered = shifts.first().map(|s| s.meta.uncovered.clone()).unwrap_or_default();
        let hours_summary = shifts.first().map(|s| s.meta.hours_summary.clone()).unwrap_or_default();
        Self {
            demand_id,
            assignments: shifts.into_iter().map(ScheduleShiftResponse::from).collect(),
            summary: ScheduleSummaryResponse { uncovered, hours_summary },
        }
    }
}
