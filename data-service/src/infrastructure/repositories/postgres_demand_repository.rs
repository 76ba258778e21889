use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shared::DomainResult;
use sqlx::types::Json;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::domain::entities::Demand;
use crate::domain::repositories::{DemandRepository, UpsertDemand};
use crate::infrastructure::database::map_db_err;

pub struct PostgresDemandRepository {
    pool: PgPool,
}

impl PostgresDemandRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn row_to_demand(row: &sqlx::postgres::PgRow) -> Demand {
    Demand {
        id: row.get("id"),
        tenant_id: row.get("tenant_id"),
        name: row.get("name"),
        raw_payload: row.get::<Json<_>, _>("raw_payload"),
        content_hash: row.get("content_hash"),
        date_from: row.get("date_from"),
        date_to: row.get("date_to"),
        schedule_generated: row.get("schedule_generated"),
        solved_at: row.get::<Option<DateTime<Utc>>, _>("solved_at"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

#[async_trait]
impl DemandRepository for PostgresDemandRepository {
    async fn upsert_by_hash(&self, input: UpsertDemand) -> DomainResult<(Demand, bool)> {
        let row = sqlx::query(
            r#"
            INSERT INTO demand (tenant_id, name, raw_payload, content_hash, date_from, date_to)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (tenant_id, content_hash) DO UPDATE SET name = demand.name
            RETURNING id, tenant_id, name, raw_payload, content_hash, date_from, date_to, schedule_generated, solved_at, created_at, updated_at, (xmax = 0) AS inserted
            "#,
        )
        .bind(input.tenant_id)
        .bind(&input.name)
        .bind(Json(input.raw_payload))
        .bind(&input.content_hash)
        .bind(input.date_from)
        .bind(input.date_to)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_err)?;

        let inserted: bool = row.get("inserted");
        Ok((row_to_demand(&row), inserted))
    }

    async fn find_by_id(&self, tenant_id: Uuid, id: Uuid) -> DomainResult<Option<Demand>> {
        sqlx::query_as::<_, Demand>(
            r#"
            SELECT id, tenant_id, name, raw_payload, content_hash, date_from, date_to, schedule_generated, solved_at, created_at, updated_at
            FROM demand
            WHERE tenant_id = $1 AND id = $2
            "#,
        )
        .bind(tenant_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_err)
    }

    async fn find_by_hash(&self, tenant_id: Uuid, content_hash: &str) -> DomainResult<Option<Demand>> {
        sqlx::query_as::<_, Demand>(
            r#"
            SELECT id, tenant_id, name, raw_payload, content_hash, date_from, date_to, schedule_generated, solved_at, created_at, updated_at
            FROM demand
            WHERE tenant_id = $1 AND content_hash = $2
            "#,
        )
        .bind(tenant_id)
        .bind(content_hash)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_err)
    }

    async fn mark_generated(&self, id: Uuid) -> DomainResult<()> {
        sqlx::query("UPDATE demand SET schedule_generated = TRUE, solved_at = NOW(), updated_at = NOW() WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_err)?;
        Ok(())
    }
}
