use serde::Deserialize;
use shared::RawDemandItem;
use utoipa::{IntoParams, ToSchema};

use crate::api::requests::demand_request::DemandRowRequest;

#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct WeekTemplateQuery {
    #[serde(default)]
    pub location: Option<String>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpsertDefaultTemplateRequest {
    #[serde(default)]
    pub location: Option<String>,
    /// `None` targets the wildcard fallback row.
    #[serde(default)]
    pub weekday: Option<i16>,
    pub items: Vec<DemandRowRequest>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct DefaultTemplateEntryRequest {
    #[serde(default)]
    pub weekday: Option<i16>,
    pub items: Vec<DemandRowRequest>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct BulkDefaultTemplateRequest {
    #[serde(default)]
    pub location: Option<String>,
    pub entries: Vec<DefaultTemplateEntryRequest>,
}

/// Template rows have no `date`; `location` is only used to route the request, not
/// stamped into the canonical template form.
pub fn to_raw_template_items(items: Vec<DemandRowRequest>) -> Vec<RawDemandItem> {
    items
        .into_iter()
        .map(|row| RawDemandItem {
            date: String::new(),
            location: None,
            start: row.start,
            end: row.end,
            demand: row.demand,
            needs_experienced: row.needs_experienced,
        })
        .collect()
}
