use async_trait::async_trait;
use shared::{DomainResult, RuleMode};
use uuid::Uuid;

use crate::domain::entities::EventRule;

#[derive(Debug, Clone)]
pub struct CreateEventRule {
    pub tenant_id: Uuid,
    pub name: String,
    pub mode: RuleMode,
    pub value: f64,
    pub needs_experienced_default: bool,
    pub min_demand: Option<i32>,
    pub max_demand: Option<i32>,
    pub active: bool,
}

#[async_trait]
pub trait EventRuleRepository: Send + Sync {
    async fn create(&self, input: CreateEventRule) -> DomainResult<EventRule>;

    async fn find_by_id(&self, tenant_id: Uuid, id: Uuid) -> DomainResult<Option<EventRule>>;

    async fn list(&self, tenant_id: Uuid) -> DomainResult<Vec<EventRule>>;
}
