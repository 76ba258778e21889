use async_trait::async_trait;
use chrono::NaiveDate;
use shared::DomainResult;
use uuid::Uuid;

use crate::domain::entities::{AssignedShiftRef, Availability, AvailabilitySlot};

/// Input to an availability upsert. Slot validation/normalization happens before this
/// reaches the repository — the repository only persists.
#[derive(Debug, Clone)]
pub struct UpsertAvailability {
    pub tenant_id: Uuid,
    pub employee_id: String,
    pub employee_name: Option<String>,
    pub date: NaiveDate,
    pub experienced: bool,
    pub hours_min: i32,
    pub hours_max: Option<i32>,
    pub available_slots: Vec<AvailabilitySlot>,
    pub assigned_shift: Option<AssignedShiftRef>,
}

#[async_trait]
pub trait AvailabilityRepository: Send + Sync {
    /// Upsert per `(tenant, employee, date)`; hour bounds are tightened against any
    /// existing row (max of mins, min of maxes) before persisting.
    async fn upsert(&self, input: UpsertAvailability) -> DomainResult<Availability>;

    async fn find(
        &self,
        tenant_id: Uuid,
        employee_id: &str,
        date: NaiveDate,
    ) -> DomainResult<Option<Availability>>;

    /// Flat list of availability rows in `[date_from, date_to]`, used to build solver input.
    async fn list_range(
        &self,
        tenant_id: Uuid,
        date_from: NaiveDate,
        date_to: NaiveDate,
    ) -> DomainResult<Vec<Availability>>;
}
