use async_trait::async_trait;
use shared::{DomainResult, TemplateItem};
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::DefaultDemand;
use crate::domain::repositories::DefaultDemandRepository;
use crate::infrastructure::database::map_db_err;

pub struct PostgresDefaultDemandRepository {
    pool: PgPool,
}

impl PostgresDefaultDemandRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DefaultDemandRepository for PostgresDefaultDemandRepository {
    async fn upsert(
        &self,
        tenant_id: Uuid,
        location: &str,
        weekday: Option<i16>,
        items: Vec<TemplateItem>,
    ) -> DomainResult<DefaultDemand> {
        sqlx::query_as::<_, DefaultDemand>(
            r#"
            INSERT INTO default_demand (tenant_id, location, weekday, items)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (tenant_id, location, (COALESCE(weekday, -1))) DO UPDATE SET
                items = EXCLUDED.items,
                updated_at = NOW()
            RETURNING id, tenant_id, location, weekday, items, created_at, updated_at
            "#,
        )
        .bind(tenant_id)
        .bind(location)
        .bind(weekday)
        .bind(Json(items))
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_err)
    }

    async fn find_with_fallback(
        &self,
        tenant_id: Uuid,
        location: &str,
        weekday: i16,
    ) -> DomainResult<Option<(DefaultDemand, bool)>> {
        if let Some(exact) = sqlx::query_as::<_, DefaultDemand>(
            r#"
            SELECT id, tenant_id, location, weekday, items, created_at, updated_at
            FROM default_demand
            WHERE tenant_id = $1 AND location = $2 AND weekday = $3
            "#,
        )
        .bind(tenant_id)
        .bind(location)
        .bind(weekday)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_err)?
        {
            return Ok(Some((exact, false)));
        }

        let fallback = sqlx::query_as::<_, DefaultDemand>(
            r#"
            SELECT id, tenant_id, location, weekday, items, created_at, updated_at
            FROM default_demand
            WHERE tenant_id = $1 AND location = $2 AND weekday IS NULL
            "#,
        )
        .bind(tenant_id)
        .bind(location)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_err)?;

        Ok(fallback.map(|row| (row, true)))
    }

    async fn list_for_location(&self, tenant_id: Uuid, location: &str) -> DomainResult<Vec<DefaultDemand>> {
        sqlx::query_as::<_, DefaultDemand>(
            r#"
            SELECT id, tenant_id, location, weekday, items, created_at, updated_at
            FROM default_demand
            WHERE tenant_id = $1 AND location = $2
            ORDER BY weekday NULLS FIRST
            "#,
        )
        .bind(tenant_id)
        .bind(location)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_err)
    }

    async fn replace_bulk(
        &self,
        tenant_id: Uuid,
        location: &str,
        entries: Vec<(Option<i16>, Vec<TemplateItem>)>,
    ) -> DomainResult<Vec<DefaultDemand>> {
        let mut tx = self.pool.begin().await.map_err(map_db_err)?;
        let mut rows = Vec::with_capacity(entries.len());

        for (weekday, items) in entries {
            let row = sqlx::query_as::<_, DefaultDemand>(
                r#"
                INSERT INTO default_demand (tenant_id, location, weekday, items)
                VALUES ($1, $2, $3, $4)
                ON CONFLICT (tenant_id, location, (COALESCE(weekday, -1))) DO UPDATE SET
                    items = EXCLUDED.items,
                    updated_at = NOW()
                RETURNING id, tenant_id, location, weekday, items, created_at, updated_at
                "#,
            )
            .bind(tenant_id)
            .bind(location)
            .bind(weekday)
            .bind(Json(items))
            .fetch_one(&mut *tx)
            .await
            .map_err(map_db_err)?;
            rows.push(row);
        }

        tx.commit().await.map_err(map_db_err)?;
        Ok(rows)
    }
}
