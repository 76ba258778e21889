use async_trait::async_trait;
use chrono::NaiveDate;
use shared::DomainResult;
use uuid::Uuid;

use crate::domain::entities::{ScheduleShift, ShiftMeta};

#[derive(Debug, Clone)]
pub struct NewScheduleShift {
    pub tenant_id: Uuid,
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
    pub meta: ShiftMeta,
}

/// Patch accepted by `update_shift`; any edit sets `user_edited = true`
/// and clears `(approved_by, approved_at)`.
#[derive(Debug, Clone, Default)]
pub struct PatchScheduleShift {
    pub date: Option<NaiveDate>,
    pub location: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub demand_count: Option<i32>,
    pub assigned_employees: Option<Vec<String>>,
    pub needs_experienced: Option<bool>,
    pub missing_minutes: Option<i32>,
    pub confirmed: Option<bool>,
    pub assigned_employees_detail: Option<Vec<shared::AssignedEmployeeDetail>>,
    pub missing_segments: Option<Vec<shared::MissingSegment>>,
}

#[async_trait]
pub trait ScheduleShiftRepository: Send + Sync {
    /// Bulk-insert solved shifts, ignoring conflicts on `(demand, shift_uid)` (two
    /// concurrent force-solves racing on the unique constraint is acceptable).
    async fn bulk_insert(&self, shifts: Vec<NewScheduleShift>) -> DomainResult<Vec<ScheduleShift>>;

    async fn delete_by_demand(&self, demand_id: Uuid) -> DomainResult<()>;

    async fn find_by_uid(&self, tenant_id: Uuid, shift_uid: &str) -> DomainResult<Option<ScheduleShift>>;

    /// Looks up a shift by its own row id, used by the transfer workflow which only
    /// carries `shift_id` (not the tenant-scoped `shift_uid`).
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<ScheduleShift>>;

    async fn list_by_demand(&self, demand_id: Uuid) -> DomainResult<Vec<ScheduleShift>>;

    async fn list_by_date_location(
        &self,
        tenant_id: Uuid,
        date: NaiveDate,
        location: &str,
    ) -> DomainResult<Vec<ScheduleShift>>;

    async fn update(&self, id: Uuid, patch: PatchScheduleShift) -> DomainResult<ScheduleShift>;

    /// Sets `assigned_employees` directly (used by the transfer workflow, which mutates
    /// assignment without going through the general edit patch).
    async fn set_assigned_employees(
        &self,
        id: Uuid,
        assigned_employees: Vec<String>,
        approved_by: String,
    ) -> DomainResult<ScheduleShift>;

    async fn approve(&self, id: Uuid, approved_by: String) -> DomainResult<ScheduleShift>;
}
