use async_trait::async_trait;
use chrono::NaiveDate;
use shared::DomainResult;
use uuid::Uuid;

use crate::domain::entities::{EventRule, SpecialDay};

#[derive(Debug, Clone)]
pub struct UpsertSpecialDay {
    pub tenant_id: Uuid,
    pub date: NaiveDate,
    /// `""` is the tenant-wide wildcard.
    pub location: String,
    pub rule_id: Uuid,
    pub note: Option<String>,
    pub active: Option<bool>,
}

#[async_trait]
pub trait SpecialDayRepository: Send + Sync {
    /// `get_or_create` on `(date, location, rule)`; when it already exists, `note`/`active`
    /// are updated in place.
    async fn upsert(&self, input: UpsertSpecialDay) -> DomainResult<SpecialDay>;

    async fn list(
        &self,
        tenant_id: Uuid,
        date_from: Option<NaiveDate>,
        date_to: Option<NaiveDate>,
        location: Option<&str>,
    ) -> DomainResult<Vec<SpecialDay>>;

    /// Active special days joined with their active event rule, for `date` in
    /// `[date_from, date_to]`. Order is not guaranteed here — the rule engine applies
    /// its own wildcard-then-exact, creation-order sort.
    async fn active_in_range_with_rules(
        &self,
        tenant_id: Uuid,
        date_from: NaiveDate,
        date_to: NaiveDate,
    ) -> DomainResult<Vec<(SpecialDay, EventRule)>>;
}
