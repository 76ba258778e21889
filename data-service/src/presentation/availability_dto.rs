use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::entities::{AssignedShiftRef, Availability, AvailabilitySlot};

#[derive(Debug, Serialize, ToSchema)]
pub struct AvailabilityResponse {
    pub id: Uuid,
    pub employee_id: String,
    pub employee_name: Option<String>,
    pub date: NaiveDate,
    pub experienced: bool,
    pub hours_min: i32,
    pub hours_max: Option<i32>,
    pub available_slots: Vec<AvailabilitySlot>,
    pub assigned_shift: Option<AssignedShiftRef>,
    pub updated_at: DateTime<Utc>,
}

impl From<Availability> for AvailabilityResponse {
    fn from(a: Availability) -> Self {
        Self {
            id: a.id,
            employee_id: a.employee_id,
            employee_name: a.employee_name,
            date: a.date,
            experienced: a.experienced,
            hours_min: a.hours_min,
            hours_max: a.hours_max,
            available_slots: a.available_slots.0,
            assigned_shift: a.assigned_shift.map(|s| s.0),
            updated_at: a.updated_at,
        }
    }
}
