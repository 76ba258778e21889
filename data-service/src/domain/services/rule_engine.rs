//! Special-rule engine: transforms raw day-level demand items before the solver ever
//! sees them, applying a wildcard-then-exact ordering over active `(SpecialDay, EventRule)`
//! bindings.

use chrono::NaiveDate;
use shared::{DemandItem, DomainResult};
use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::entities::{EventRule, SpecialDay};
use crate::domain::repositories::SpecialDayRepository;

pub struct RuleEngine {
    special_day_repo: Arc<dyn SpecialDayRepository>,
}

impl RuleEngine {
    pub fn new(special_day_repo: Arc<dyn SpecialDayRepository>) -> Self {
        Self { special_day_repo }
    }

    /// Applies every active rule bound to `[date_from, date_to]` to `items`, returning
    /// a transformed copy; `items` themselves are never mutated.
    pub async fn apply(
        &self,
        tenant_id: uuid::Uuid,
        date_from: NaiveDate,
        date_to: NaiveDate,
        items: &[DemandItem],
    ) -> DomainResult<Vec<DemandItem>> {
        let bindings = self
            .special_day_repo
            .active_in_range_with_rules(tenant_id, date_from, date_to)
            .await?;

        if bindings.is_empty() {
            return Ok(items.to_vec());
        }

        // Group bindings by date, keeping wildcards (`location == ""`) ahead of exact
        // matches, and preserving creation order within each bucket.
        let mut by_date: HashMap<String, Vec<(SpecialDay, EventRule)>> = HashMap::new();
        for (special_day, rule) in bindings {
            by_date.entry(special_day.date.to_string()).or_default().push((special_day, rule));
        }
        for group in by_date.values_mut() {
            group.sort_by(|(a, _), (b, _)| {
                a.is_wildcard()
                    .cmp(&b.is_wildcard())
                    .reverse()
                    .then(a.created_at.cmp(&b.created_at))
            });
        }

        Ok(items
            .iter()
            .map(|item| {
                let Some(group) = by_date.get(&item.date) else {
                    return item.clone();
                };
                let mut demand = item.demand;
                let mut needs_experienced = item.needs_experienced;
                for (special_day, rule) in group {
                    if special_day.is_wildcard() || special_day.location == item.location {
                        let (d, ne) = rule.apply(demand, needs_experienced);
                        demand = d;
                        needs_experienced = ne;
                    }
                }
                DemandItem {
                    demand,
                    needs_experienced,
                    ..item.clone()
                }
            })
            .collect())
    }
}
