//! Demand capture: idempotent day-level and range-level saves, keyed by content hash.

use std::sync::Arc;

use chrono::{Datelike, Duration, NaiveDate};
use shared::{DemandItem, DomainError, DomainResult, RawDemandItem, TemplateItem};
use uuid::Uuid;

use crate::domain::entities::Demand;
use crate::domain::repositories::{DefaultDemandRepository, DemandRepository, ScheduleShiftRepository, UpsertDemand};
use crate::domain::services::canonicalizer;
use crate::domain::services::day_index_service::{extract_group, DayIndexService};

pub struct DemandService {
    demand_repo: Arc<dyn DemandRepository>,
    default_repo: Arc<dyn DefaultDemandRepository>,
    shift_repo: Arc<dyn ScheduleShiftRepository>,
    day_index: Arc<DayIndexService>,
}

fn template_to_day_items(items: &[TemplateItem], date: NaiveDate, location: &str) -> Vec<DemandItem> {
    items
        .iter()
        .map(|t| DemandItem {
            date: date.to_string(),
            location: location.to_string(),
            start: t.start.clone(),
            end: t.end.clone(),
            demand: t.demand,
            needs_experienced: t.needs_experienced,
        })
        .collect()
}

impl DemandService {
    pub fn new(
        demand_repo: Arc<dyn DemandRepository>,
        default_repo: Arc<dyn DefaultDemandRepository>,
        shift_repo: Arc<dyn ScheduleShiftRepository>,
        day_index: Arc<DayIndexService>,
    ) -> Self {
        Self { demand_repo, default_repo, shift_repo, day_index }
    }

    fn weekday_of(date: NaiveDate) -> i16 {
        date.weekday().num_days_from_monday() as i16
    }

    async fn default_items_for(&self, tenant_id: Uuid, location: &str, date: NaiveDate) -> DomainResult<Option<Vec<DemandItem>>> {
        let weekday = Self::weekday_of(date);
        match self.default_repo.find_with_fallback(tenant_id, location, weekday).await? {
            Some((template, _inherited)) => Ok(Some(template_to_day_items(&template.items.0, date, location))),
            None => Ok(None),
        }
    }

    /// Saves one day's demand, falling back to the weekly default template when `raw_items`
    /// is absent or empty. Replaces any prior Demand owning `(date, location)` and deletes
    /// its persisted schedule shifts so a stale schedule is never left behind.
    pub async fn save_day(
        &self,
        tenant_id: Uuid,
        date: NaiveDate,
        location: &str,
        raw_items: Option<Vec<RawDemandItem>>,
    ) -> DomainResult<(Demand, bool)> {
        let items = match raw_items {
            Some(raw) if !raw.is_empty() => canonicalizer::canonicalize_day(&raw, date, location),
            _ => self
                .default_items_for(tenant_id, location, date)
                .await?
                .ok_or_else(|| DomainError::ValidationFailure("no items supplied and no default template for this weekday".to_string()))?,
        };

        if items.is_empty() {
            return Err(DomainError::ValidationFailure("demand items normalize to an empty day".to_string()));
        }

        let day_hash = canonicalizer::day_hash(&items);
        let previous_demand_id = self.day_index.current_demand_id(tenant_id, date, location).await?;

        let (demand, created) = self
            .demand_repo
            .upsert_by_hash(UpsertDemand {
                tenant_id,
                name: None,
                raw_payload: items,
                content_hash: day_hash.clone(),
                date_from: date,
                date_to: date,
            })
            .await?;

        if let Some(prev_id) = previous_demand_id {
            if prev_id != demand.id {
                self.shift_repo.delete_by_demand(prev_id).await?;
            }
        }

        self.day_index.upsert(tenant_id, date, location, &day_hash, demand.id).await?;
        Ok((demand, created))
    }

    /// Returns a day's canonical items plus whether they came from a default template
    /// (`inherited`).
    pub async fn get_day(&self, tenant_id: Uuid, date: NaiveDate, location: &str) -> DomainResult<(Vec<DemandItem>, bool)> {
        if let Some(demand) = self.day_index.lookup(tenant_id, date, location).await? {
            let items = extract_group(&demand.raw_payload.0, date, location);
            if !items.is_empty() {
                return Ok((items, false));
            }
        }
        match self.default_items_for(tenant_id, location, date).await? {
            Some(items) => Ok((items, true)),
            None => Ok((Vec::new(), true)),
        }
    }

    /// Saves a `[date_from, date_to]` range: each day is canonicalized independently using
    /// `items_by_date` (falling back to the weekly default per day), then the whole range is
    /// hashed and persisted as one Demand spanning the range.
    pub async fn save_range(
        &self,
        tenant_id: Uuid,
        date_from: NaiveDate,
        date_to: NaiveDate,
        mut items_by_date: std::collections::HashMap<NaiveDate, Vec<RawDemandItem>>,
        location: &str,
    ) -> DomainResult<(Demand, bool)> {
        if date_to < date_from {
            return Err(DomainError::ValidationFailure("date_to precedes date_from".to_string()));
        }

        let mut all_items: Vec<DemandItem> = Vec::new();
        let mut previous_demand_ids: Vec<Uuid> = Vec::new();
        let mut cursor = date_from;
        while cursor <= date_to {
            let raw = items_by_date.remove(&cursor).unwrap_or_default();
            let day_items = if raw.is_empty() {
                self.default_items_for(tenant_id, location, cursor).await?.unwrap_or_default()
            } else {
                canonicalizer::canonicalize_day(&raw, cursor, location)
            };
            if let Some(prev_id) = self.day_index.current_demand_id(tenant_id, cursor, location).await? {
                previous_demand_ids.push(prev_id);
            }
            all_items.extend(day_items);
            cursor += Duration::days(1);
        }

        if all_items.is_empty() {
            return Err(DomainError::ValidationFailure("range produced no demand items".to_string()));
        }

        let range_hash = canonicalizer::range_hash(&all_items);
        let (demand, created) = self
            .demand_repo
            .upsert_by_hash(UpsertDemand {
                tenant_id,
                name: None,
                raw_payload: all_items.clone(),
                content_hash: range_hash,
                date_from,
                date_to,
            })
            .await?;

        previous_demand_ids.sort();
        previous_demand_ids.dedup();
        for prev_id in previous_demand_ids {
            if prev_id != demand.id {
                self.shift_repo.delete_by_demand(prev_id).await?;
            }
        }

        for ((date_str, loc), group) in canonicalizer::canonicalize_range(&all_items) {
            let date = date_str.parse::<NaiveDate>().map_err(|e| DomainError::ValidationFailure(e.to_string()))?;
            let day_hash = canonicalizer::day_hash(&group);
            self.day_index.upsert(tenant_id, date, &loc, &day_hash, demand.id).await?;
        }

        Ok((demand, created))
    }
}
