use chrono::NaiveDate;
use serde::Deserialize;
use shared::RawDemandItem;
use std::collections::HashMap;
use utoipa::{IntoParams, ToSchema};

/// One demand row without `date`/`location` — both are supplied by the enclosing
/// request (day-level requests carry a single date/location; range requests key by
/// date in `items_by_date`).
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct DemandRowRequest {
    pub start: String,
    pub end: String,
    pub demand: i32,
    #[serde(default)]
    pub needs_experienced: bool,
}

impl DemandRowRequest {
    pub fn into_raw(self, date: NaiveDate, location: &str) -> RawDemandItem {
        RawDemandItem {
            date: date.to_string(),
            location: Some(location.to_string()),
            start: self.start,
            end: self.end,
            demand: self.demand,
            needs_experienced: self.needs_experienced,
        }
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SaveDayRequest {
    pub date: NaiveDate,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub items: Option<Vec<DemandRowRequest>>,
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct GetDayQuery {
    pub date: NaiveDate,
    #[serde(default)]
    pub location: Option<String>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SaveRangeRequest {
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
    #[serde(default)]
    pub location: Option<String>,
    /// Keyed by `YYYY-MM-DD`; a day absent from the map falls back to the weekly default.
    #[serde(default)]
    pub items_by_date: HashMap<String, Vec<DemandRowRequest>>,
}
