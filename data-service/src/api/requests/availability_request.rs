//! Tolerant bulk-availability request shape: `available_slots` accepts `null`, a single
//! `{start,end}` object, or an array of them.

use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SlotInput {
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum SlotsInput {
    One(SlotInput),
    Many(Vec<SlotInput>),
}

impl SlotsInput {
    /// `None` (JSON `null` or the field omitted) normalizes to an empty list.
    pub fn into_vec(slots: Option<SlotsInput>) -> Vec<SlotInput> {
        match slots {
            None => Vec::new(),
            Some(SlotsInput::One(slot)) => vec![slot],
            Some(SlotsInput::Many(slots)) => slots,
        }
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct AssignedShiftRequest {
    pub location: String,
    pub start: String,
    pub end: String,
    #[serde(default)]
    pub confirmed: bool,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct AvailabilityDayRequest {
    pub date: chrono::NaiveDate,
    #[serde(default)]
    pub available_slots: Option<SlotsInput>,
    #[serde(default)]
    pub assigned_shift: Option<AssignedShiftRequest>,
}

/// Bulk upsert for one employee across several days.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpsertAvailabilityRequest {
    pub employee_id: String,
    #[serde(default)]
    pub employee_name: Option<String>,
    #[serde(default)]
    pub experienced: bool,
    #[serde(default)]
    pub hours_min: i32,
    #[serde(default)]
    pub hours_max: Option<i32>,
    pub availabilities: Vec<AvailabilityDayRequest>,
}
