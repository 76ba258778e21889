use chrono::NaiveDate;
use serde::Serialize;
use shared::{DemandItem, TemplateItem};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, ToSchema)]
pub struct DemandDayResponse {
    pub date: NaiveDate,
    pub location: String,
    pub items: Vec<DemandItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_hash: Option<String>,
    pub inherited: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DemandSaveResponse {
    pub demand_id: Uuid,
    pub content_hash: String,
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
    pub created: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DefaultTemplateEntryResponse {
    pub weekday: i16,
    pub items: Vec<TemplateItem>,
    pub inherited: bool,
}
