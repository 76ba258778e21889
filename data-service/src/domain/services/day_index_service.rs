//! Day-index store: the materialized `(tenant, date, location) -> demand` view,
//! rebuildable from `Demand` payloads at any time via lazy backfill.

use std::sync::Arc;

use chrono::NaiveDate;
use shared::{DemandItem, DomainError, DomainResult};
use uuid::Uuid;

use crate::domain::entities::Demand;
use crate::domain::repositories::{DayDemandIndexRepository, DemandRepository};
use crate::domain::services::canonicalizer;

pub struct DayIndexService {
    index_repo: Arc<dyn DayDemandIndexRepository>,
    demand_repo: Arc<dyn DemandRepository>,
}

/// Extracts the canonical items belonging to `(date, location)` from a demand's payload.
pub fn extract_group(items: &[DemandItem], date: NaiveDate, location: &str) -> Vec<DemandItem> {
    let date_str = date.to_string();
    items
        .iter()
        .filter(|i| i.date == date_str && i.location == location)
        .cloned()
        .collect()
}

impl DayIndexService {
    pub fn new(index_repo: Arc<dyn DayDemandIndexRepository>, demand_repo: Arc<dyn DemandRepository>) -> Self {
        Self { index_repo, demand_repo }
    }

    /// Upserts the index row, refetching once on a race (`IndexRace` handling).
    pub async fn upsert(
        &self,
        tenant_id: Uuid,
        date: NaiveDate,
        location: &str,
        day_hash: &str,
        demand_id: Uuid,
    ) -> DomainResult<()> {
        match self.index_repo.upsert(tenant_id, date, location, day_hash, demand_id).await {
            Ok(_) => Ok(()),
            Err(DomainError::IndexRace(_)) => {
                self.index_repo
                    .find_latest(tenant_id, date, location)
                    .await?
                    .ok_or_else(|| DomainError::IndexRace("refetch after collision found nothing".to_string()))?;
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    /// Newest indexed demand id for `(tenant, date, location)`, without backfilling.
    pub async fn current_demand_id(
        &self,
        tenant_id: Uuid,
        date: NaiveDate,
        location: &str,
    ) -> DomainResult<Option<Uuid>> {
        Ok(self
            .index_repo
            .find_latest(tenant_id, date, location)
            .await?
            .map(|row| row.demand_id))
    }

    /// Resolves `(date, location)` to its owning Demand, backfilling the index from
    /// candidate demands spanning `date` when no index row exists yet.
    pub async fn lookup(&self, tenant_id: Uuid, date: NaiveDate, location: &str) -> DomainResult<Option<Demand>> {
        if let Some(row) = self.index_repo.find_latest(tenant_id, date, location).await? {
            return self.demand_repo.find_by_id(tenant_id, row.demand_id).await;
        }

        for demand in self.index_repo.candidate_demands_spanning(tenant_id, date).await? {
            let group = extract_group(&demand.raw_payload.0, date, location);
            if group.is_empty() {
                continue;
            }
            let day_hash = canonicalizer::day_hash(&group);
            self.upsert(tenant_id, date, location, &day_hash, demand.id).await?;
            return Ok(Some(demand));
        }

        Ok(None)
    }
}
