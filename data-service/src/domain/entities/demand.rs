use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use shared::{DemandItem, Identifiable, Timestamped};
use sqlx::types::Json;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A content-addressed bundle of demand shift rows. Identity is `content_hash`;
/// a semantically different payload is always a new row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Demand {
    pub id: Uuid,
    pub tenant_id: Uuid,
    #[serde(default)]
    pub name: Option<String>,
    pub raw_payload: Json<Vec<DemandItem>>,
    pub content_hash: String,
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
    pub schedule_generated: bool,
    pub solved_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Identifiable for Demand {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Timestamped for Demand {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
