use async_trait::async_trait;
use shared::{DomainResult, TemplateItem};
use uuid::Uuid;

use crate::domain::entities::DefaultDemand;

#[async_trait]
pub trait DefaultDemandRepository: Send + Sync {
    /// Replace the template row for `(tenant, location, weekday)` atomically.
    async fn upsert(
        &self,
        tenant_id: Uuid,
        location: &str,
        weekday: Option<i16>,
        items: Vec<TemplateItem>,
    ) -> DomainResult<DefaultDemand>;

    /// Exact weekday first, falling back to the wildcard (`weekday = None`) row.
    async fn find_with_fallback(
        &self,
        tenant_id: Uuid,
        location: &str,
        weekday: i16,
    ) -> DomainResult<Option<(DefaultDemand, bool)>>;

    /// All rows for a location, for the `GET /demand/default/week` view.
    async fn list_for_location(
        &self,
        tenant_id: Uuid,
        location: &str,
    ) -> DomainResult<Vec<DefaultDemand>>;

    /// Atomic bulk replace of every weekday row for a location.
    async fn replace_bulk(
        &self,
        tenant_id: Uuid,
        location: &str,
        entries: Vec<(Option<i16>, Vec<TemplateItem>)>,
    ) -> DomainResult<Vec<DefaultDemand>>;
}
