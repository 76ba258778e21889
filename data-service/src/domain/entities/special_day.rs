use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use shared::{Identifiable, Timestamped};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Binds a calendar date (optionally location-scoped) to an [`crate::domain::entities::EventRule`].
/// `location = ""` is the tenant-wide wildcard.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct SpecialDay {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub date: NaiveDate,
    pub location: String,
    pub rule_id: Uuid,
    #[serde(default)]
    pub note: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Identifiable for SpecialDay {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Timestamped for SpecialDay {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

impl SpecialDay {
    pub fn is_wildcard(&self) -> bool {
        self.location.is_empty()
    }
}
