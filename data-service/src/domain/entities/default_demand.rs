use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::{Identifiable, TemplateItem, Timestamped};
use sqlx::types::Json;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Weekly default demand template, keyed by `(tenant, location, weekday)`.
/// `weekday = None` is the wildcard fallback row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct DefaultDemand {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub location: String,
    pub weekday: Option<i16>,
    pub items: Json<Vec<TemplateItem>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Identifiable for DefaultDemand {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Timestamped for DefaultDemand {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
