use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::{Identifiable, RuleMode, Timestamped};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A demand transformer applied by the rule engine to raw day items before solving,
/// via a [`crate::domain::entities::SpecialDay`] binding.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct EventRule {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub name: String,
    pub mode: RuleMode,
    pub value: f64,
    pub needs_experienced_default: bool,
    pub min_demand: Option<i32>,
    pub max_demand: Option<i32>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Identifiable for EventRule {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Timestamped for EventRule {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

impl EventRule {
    /// Applies this rule's transform to a `(demand, needs_experienced)` pair:
    /// override/multiplier, clamp, then monotone experience flag.
    pub fn apply(&self, demand: i32, needs_experienced: bool) -> (i32, bool) {
        let mut d = match self.mode {
            RuleMode::Override => self.value.round() as i32,
            RuleMode::Multiplier => (demand as f64 * self.value).ceil() as i32,
        };
        if let Some(min) = self.min_demand {
            d = d.max(min);
        }
        if let Some(max) = self.max_demand {
            d = d.min(max);
        }
        d = d.max(0);
        let needs_experienced = needs_experienced || self.needs_experienced_default;
        (d, needs_experienced)
    }
}
