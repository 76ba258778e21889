use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use shared::{Identifiable, Timestamped};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Materialized `(tenant, date, location) -> demand` lookup row. Not a source of
/// truth — rebuildable from `Demand` payloads via lazy backfill.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct DayDemandIndex {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub date: NaiveDate,
    pub location: String,
    pub day_hash: String,
    pub demand_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Identifiable for DayDemandIndex {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Timestamped for DayDemandIndex {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
