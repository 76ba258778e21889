use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use shared::{AssignedEmployeeDetail, Identifiable, MissingSegment, Timestamped};
use sqlx::types::Json;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Extra solver output carried alongside a persisted shift:
/// `meta: {assigned_employees_detail, missing_segments, uncovered, hours_summary}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ShiftMeta {
    #[serde(default)]
    pub assigned_employees_detail: Vec<AssignedEmployeeDetail>,
    #[serde(default)]
    pub missing_segments: Vec<MissingSegment>,
    /// Snapshot of the whole demand's uncovered list at solve time (shared across
    /// every shift produced by the same solve, as in the reference implementation).
    #[serde(default)]
    pub uncovered: Vec<serde_json::Value>,
    #[serde(default)]
    pub hours_summary: Vec<serde_json::Value>,
}

/// One solved (or manager-edited) shift, keyed by a stable `shift_uid`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ScheduleShift {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub demand_id: Uuid,
    pub shift_uid: String,
    pub date: NaiveDate,
    pub location: String,
    pub start: String,
    pub end: String,
    pub demand_count: i32,
    pub needs_experienced: bool,
    pub assigned_employees: Json<Vec<String>>,
    pub missing_minutes: i32,
    pub meta: Json<ShiftMeta>,
    pub user_edited: bool,
    pub confirmed: bool,
    pub approved_by: Option<String>,
    pub approved_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Identifiable for ScheduleShift {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Timestamped for ScheduleShift {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

/// Builds the stable `"D{demand_id}|{date}|{location}|{start}-{end}"` identifier.
pub fn shift_uid(demand_id: Uuid, date: NaiveDate, location: &str, start: &str, end: &str) -> String {
    format!("D{}|{}|{}|{}-{}", demand_id, date, location, start, end)
}
