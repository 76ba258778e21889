//! Availability store: per-employee, per-day windows and hour bands, with tolerant
//! slot input and silent normalization.

use std::sync::Arc;

use chrono::NaiveDate;
use shared::{time, DomainResult};
use uuid::Uuid;

use crate::domain::entities::{AssignedShiftRef, Availability, AvailabilitySlot};
use crate::domain::repositories::{AvailabilityRepository, UpsertAvailability};

/// One day's worth of a bulk availability upsert, before slot normalization.
#[derive(Debug, Clone)]
pub struct AvailabilityDayInput {
    pub date: NaiveDate,
    pub available_slots: Vec<RawSlot>,
    pub assigned_shift: Option<AssignedShiftRef>,
}

/// A loosely-formatted `{start, end}` pair as received over the wire, prior to
/// HH:MM normalization.
#[derive(Debug, Clone)]
pub struct RawSlot {
    pub start: String,
    pub end: String,
}

pub struct AvailabilityService {
    repo: Arc<dyn AvailabilityRepository>,
}

/// Normalizes and validates a slot list, silently dropping entries that fail to
/// normalize or do not form a valid `[start, end)` interval.
fn normalize_slots(raw: &[RawSlot]) -> Vec<AvailabilitySlot> {
    raw.iter()
        .filter_map(|slot| {
            let start = time::normalize_hhmm(&slot.start).ok()?;
            let end = time::normalize_hhmm(&slot.end).ok()?;
            let start_min = time::to_minutes(&start).ok()?;
            let end_min = time::to_minutes(&end).ok()?;
            if !time::is_valid_interval(start_min, end_min) {
                return None;
            }
            Some(AvailabilitySlot { start, end })
        })
        .collect()
}

impl AvailabilityService {
    pub fn new(repo: Arc<dyn AvailabilityRepository>) -> Self {
        Self { repo }
    }

    /// Bulk-upserts one employee's availability across several days. Each day is an
    /// independent `(employee, date)` upsert; hour-bound tightening across repeated
    /// writes happens inside the repository.
    pub async fn upsert_bulk(
        &self,
        tenant_id: Uuid,
        employee_id: &str,
        employee_name: Option<String>,
        experienced: bool,
        hours_min: i32,
        hours_max: Option<i32>,
        days: Vec<AvailabilityDayInput>,
    ) -> DomainResult<Vec<Availability>> {
        let mut saved = Vec::with_capacity(days.len());
        for day in days {
            let slots = normalize_slots(&day.available_slots);
            let row = self
                .repo
                .upsert(UpsertAvailability {
                    tenant_id,
                    employee_id: employee_id.to_string(),
                    employee_name: employee_name.clone(),
                    date: day.date,
                    experienced,
                    hours_min,
                    hours_max,
                    available_slots: slots,
                    assigned_shift: day.assigned_shift,
                })
                .await?;
            saved.push(row);
        }
        Ok(saved)
    }

    pub async fn find(&self, tenant_id: Uuid, employee_id: &str, date: NaiveDate) -> DomainResult<Option<Availability>> {
        self.repo.find(tenant_id, employee_id, date).await
    }

    /// Flat list in `[date_from, date_to]`, the solver input shape.
    pub async fn list_range(&self, tenant_id: Uuid, date_from: NaiveDate, date_to: NaiveDate) -> DomainResult<Vec<Availability>> {
        self.repo.list_range(tenant_id, date_from, date_to).await
    }
}
