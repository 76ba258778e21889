//! Canonical forms for demand payloads and SHA-256 content hashing.
//!
//! Canonical JSON here relies on `serde_json::Value`'s default `Object` representation
//! being a `BTreeMap` (the `preserve_order` feature is not enabled anywhere in this
//! workspace), so `serde_json::to_string` on a canonicalized value already emits keys
//! in lexicographic order with no extraneous whitespace.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use utoipa::ToSchema;

use crate::time;

/// One row of a day-level demand payload, hashed per `(date, location)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DemandItem {
    pub date: String,
    pub location: String,
    pub start: String,
    pub end: String,
    pub demand: i32,
    pub needs_experienced: bool,
}

/// A raw, not-yet-validated demand row as received over the wire.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct RawDemandItem {
    pub date: String,
    #[serde(default)]
    pub location: Option<String>,
    pub start: String,
    pub end: String,
    pub demand: i32,
    #[serde(default)]
    pub needs_experienced: bool,
}

/// A weekly-template row: the same fields as [`DemandItem`] minus `date`/`location`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TemplateItem {
    pub start: String,
    pub end: String,
    pub demand: i32,
    pub needs_experienced: bool,
}

/// Normalizes one raw demand row into day form, dropping it (returning `None`) if
/// its start/end cannot be normalized into a valid `[start, end)` interval.
pub fn canonicalize_day_item(raw: &RawDemandItem, date: &str, location: &str) -> Option<DemandItem> {
    let start = time::normalize_hhmm(&raw.start).ok()?;
    let end = time::normalize_hhmm(&raw.end).ok()?;
    let start_min = time::to_minutes(&start).ok()?;
    let end_min = time::to_minutes(&end).ok()?;
    if !time::is_valid_interval(start_min, end_min) {
        return None;
    }
    Some(DemandItem {
        date: date.to_string(),
        location: raw.location.clone().unwrap_or_else(|| location.to_string()),
        start,
        end,
        demand: raw.demand.max(0),
        needs_experienced: raw.needs_experienced,
    })
}

/// Canonicalizes a full day's raw items: drops invalid entries, then sorts by
/// `(start, end, demand, needs_experienced)` ascending.
pub fn canonicalize_day_items(raw: &[RawDemandItem], date: &str, location: &str) -> Vec<DemandItem> {
    let mut items: Vec<DemandItem> = raw
        .iter()
        .filter_map(|r| canonicalize_day_item(r, date, location))
        .collect();
    items.sort_by(|a, b| {
        (a.start.as_str(), a.end.as_str(), a.demand, a.needs_experienced).cmp(&(
            b.start.as_str(),
            b.end.as_str(),
            b.demand,
            b.needs_experienced,
        ))
    });
    items
}

/// Canonicalizes template rows (no date/location) the same way as day items.
pub fn canonicalize_template_items(raw: &[RawDemandItem]) -> Vec<TemplateItem> {
    let mut items: Vec<TemplateItem> = raw
        .iter()
        .filter_map(|r| {
            let start = time::normalize_hhmm(&r.start).ok()?;
            let end = time::normalize_hhmm(&r.end).ok()?;
            let start_min = time::to_minutes(&start).ok()?;
            let end_min = time::to_minutes(&end).ok()?;
            if !time::is_valid_interval(start_min, end_min) {
                return None;
            }
            Some(TemplateItem {
                start,
                end,
                demand: r.demand.max(0),
                needs_experienced: r.needs_experienced,
            })
        })
        .collect();
    items.sort_by(|a, b| {
        (a.start.as_str(), a.end.as_str(), a.demand, a.needs_experienced).cmp(&(
            b.start.as_str(),
            b.end.as_str(),
            b.demand,
            b.needs_experienced,
        ))
    });
    items
}

/// Groups canonical day items by `(date, location)`.
pub fn group_by_date_location(items: &[DemandItem]) -> BTreeMap<(String, String), Vec<DemandItem>> {
    let mut grouped: BTreeMap<(String, String), Vec<DemandItem>> = BTreeMap::new();
    for item in items {
        grouped
            .entry((item.date.clone(), item.location.clone()))
            .or_default()
            .push(item.clone());
    }
    grouped
}

/// SHA-256 over the canonical JSON serialization of `value`, lowercase hex.
pub fn content_hash<T: Serialize>(value: &T) -> String {
    let json = serde_json::to_value(value).expect("canonical values are always serializable");
    let bytes = serde_json::to_vec(&json).expect("canonical values are always serializable");
    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(start: &str, end: &str, demand: i32, needs_experienced: bool) -> RawDemandItem {
        RawDemandItem {
            date: "2026-03-02".into(),
            location: Some("main".into()),
            start: start.into(),
            end: end.into(),
            demand,
            needs_experienced,
        }
    }

    #[test]
    fn drops_invalid_intervals() {
        let items = canonicalize_day_items(&[raw("10:00", "09:00", 1, false)], "2026-03-02", "main");
        assert!(items.is_empty());
    }

    #[test]
    fn sorts_canonically() {
        let items = canonicalize_day_items(
            &[raw("12:00", "13:00", 1, false), raw("09:00", "10:00", 2, true)],
            "2026-03-02",
            "main",
        );
        assert_eq!(items[0].start, "09:00");
        assert_eq!(items[1].start, "12:00");
    }

    #[test]
    fn hash_is_stable_under_permutation() {
        let a = canonicalize_day_items(
            &[raw("12:00", "13:00", 1, false), raw("09:00", "10:00", 2, true)],
            "2026-03-02",
            "main",
        );
        let b = canonicalize_day_items(
            &[raw("09:00", "10:00", 2, true), raw("12:00", "13:00", 1, false)],
            "2026-03-02",
            "main",
        );
        assert_eq!(content_hash(&a), content_hash(&b));
    }

    #[test]
    fn hash_changes_with_content() {
        let a = canonicalize_day_items(&[raw("09:00", "10:00", 2, true)], "2026-03-02", "main");
        let b = canonicalize_day_items(&[raw("09:00", "10:00", 3, true)], "2026-03-02", "main");
        assert_ne!(content_hash(&a), content_hash(&b));
    }
}
