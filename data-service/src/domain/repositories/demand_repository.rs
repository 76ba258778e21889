use async_trait::async_trait;
use chrono::NaiveDate;
use shared::{DemandItem, DomainResult};
use uuid::Uuid;

use crate::domain::entities::Demand;

#[derive(Debug, Clone)]
pub struct UpsertDemand {
    pub tenant_id: Uuid,
    pub name: Option<String>,
    pub raw_payload: Vec<DemandItem>,
    pub content_hash: String,
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
}

#[async_trait]
pub trait DemandRepository: Send + Sync {
    /// Upsert by `(tenant, content_hash)`. Returns the row and whether it was newly
    /// created (an existing row with the same hash is an idempotent no-op).
    async fn upsert_by_hash(&self, input: UpsertDemand) -> DomainResult<(Demand, bool)>;

    async fn find_by_id(&self, tenant_id: Uuid, id: Uuid) -> DomainResult<Option<Demand>>;

    async fn find_by_hash(&self, tenant_id: Uuid, content_hash: &str) -> DomainResult<Option<Demand>>;

    async fn mark_generated(&self, id: Uuid) -> DomainResult<()>;
}
