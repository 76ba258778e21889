use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use shared::{Identifiable, Timestamped};
use sqlx::types::Json;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// One `{start, end}` availability window, HH:MM already normalized.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AvailabilitySlot {
    pub start: String,
    pub end: String,
}

/// A confirmed pre-assignment recorded on an availability row; lifted into a forced
/// solver variable.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AssignedShiftRef {
    pub location: String,
    pub start: String,
    pub end: String,
    #[serde(default)]
    pub confirmed: bool,
}

/// One employee's availability for one calendar day.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Availability {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub employee_id: String,
    #[serde(default)]
    pub employee_name: Option<String>,
    pub date: NaiveDate,
    pub experienced: bool,
    pub hours_min: i32,
    /// `None` means unbounded; the unbounded case is translated to a very large
    /// ceiling only at the solver boundary.
    pub hours_max: Option<i32>,
    pub available_slots: Json<Vec<AvailabilitySlot>>,
    pub assigned_shift: Option<Json<AssignedShiftRef>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Identifiable for Availability {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Timestamped for Availability {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
