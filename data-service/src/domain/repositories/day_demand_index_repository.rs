use async_trait::async_trait;
use chrono::NaiveDate;
use shared::DomainResult;
use uuid::Uuid;

use crate::domain::entities::{Demand, DayDemandIndex};

#[async_trait]
pub trait DayDemandIndexRepository: Send + Sync {
    /// Upsert `(tenant, date, location, day_hash) -> demand`. Tolerates a
    /// unique-constraint race: on collision, callers should refetch (`IndexRace`).
    async fn upsert(
        &self,
        tenant_id: Uuid,
        date: NaiveDate,
        location: &str,
        day_hash: &str,
        demand_id: Uuid,
    ) -> DomainResult<DayDemandIndex>;

    /// Newest indexed row for `(tenant, date, location)`, if any.
    async fn find_latest(
        &self,
        tenant_id: Uuid,
        date: NaiveDate,
        location: &str,
    ) -> DomainResult<Option<DayDemandIndex>>;

    /// Scans demands whose `[date_from, date_to]` spans `date` for lazy backfill
    /// returns candidates ordered newest-first.
    async fn candidate_demands_spanning(
        &self,
        tenant_id: Uuid,
        date: NaiveDate,
    ) -> DomainResult<Vec<Demand>>;
}
