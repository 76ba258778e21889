use async_trait::async_trait;
use shared::DomainResult;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::EventRule;
use crate::domain::repositories::{CreateEventRule, EventRuleRepository};
use crate::infrastructure::database::map_db_err;

pub struct PostgresEventRuleRepository {
    pool: PgPool,
}

impl PostgresEventRuleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventRuleRepository for PostgresEventRuleRepository {
    async fn create(&self, input: CreateEventRule) -> DomainResult<EventRule> {
        sqlx::query_as::<_, EventRule>(
            r#"
            INSERT INTO event_rule (tenant_id, name, mode, value, needs_experienced_default, min_demand, max_demand, active)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, tenant_id, name, mode, value, needs_experienced_default, min_demand, max_demand, active, created_at, updated_at
            "#,
        )
        .bind(input.tenant_id)
        .bind(&input.name)
        .bind(input.mode)
        .bind(input.value)
        .bind(input.needs_experienced_default)
        .bind(input.min_demand)
        .bind(input.max_demand)
        .bind(input.active)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_err)
    }

    async fn find_by_id(&self, tenant_id: Uuid, id: Uuid) -> DomainResult<Option<EventRule>> {
        sqlx::query_as::<_, EventRule>(
            r#"
            SELECT id, tenant_id, name, mode, value, needs_experienced_default, min_demand, max_demand, active, created_at, updated_at
            FROM event_rule
            WHERE tenant_id = $1 AND id = $2
            "#,
        )
        .bind(tenant_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_err)
    }

    async fn list(&self, tenant_id: Uuid) -> DomainResult<Vec<EventRule>> {
        sqlx::query_as::<_, EventRule>(
            r#"
            SELECT id, tenant_id, name, mode, value, needs_experienced_default, min_demand, max_demand, active, created_at, updated_at
            FROM event_rule
            WHERE tenant_id = $1
            ORDER BY created_at
            "#,
        )
        .bind(tenant_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_err)
    }
}
