//! Thin composition over `shared::canonical` producing grouped, hashable demand.
//!
//! Kept as its own service (rather than inlined into `demand_service`) because both
//! day-save and range-save paths need the same grouping/hashing step.

use chrono::NaiveDate;
use shared::{canonicalize_day_items, content_hash, group_by_date_location, DemandItem, RawDemandItem};
use std::collections::BTreeMap;

/// Canonicalizes a single day's raw items for `(date, location)`.
pub fn canonicalize_day(raw: &[RawDemandItem], date: NaiveDate, location: &str) -> Vec<DemandItem> {
    canonicalize_day_items(raw, &date.to_string(), location)
}

/// Canonicalizes and groups a whole range payload by `(date, location)`, each group
/// already sorted by `(start, end, demand, needs_experienced)`.
pub fn canonicalize_range(items: &[DemandItem]) -> BTreeMap<(String, String), Vec<DemandItem>> {
    group_by_date_location(items)
}

/// SHA-256 over the canonical day-form payload — the index's `day_hash`.
pub fn day_hash(items: &[DemandItem]) -> String {
    content_hash(&items.to_vec())
}

/// SHA-256 over the full canonical payload of a Demand (`content_hash`, section 3).
pub fn range_hash(items: &[DemandItem]) -> String {
    content_hash(&items.to_vec())
}
