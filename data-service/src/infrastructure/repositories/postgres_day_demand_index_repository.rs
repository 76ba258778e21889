use async_trait::async_trait;
use chrono::NaiveDate;
use shared::{DomainError, DomainResult};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::{Demand, DayDemandIndex};
use crate::domain::repositories::DayDemandIndexRepository;
use crate::infrastructure::database::map_db_err;

pub struct PostgresDayDemandIndexRepository {
    pool: PgPool,
}

impl PostgresDayDemandIndexRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DayDemandIndexRepository for PostgresDayDemandIndexRepository {
    async fn upsert(
        &self,
        tenant_id: Uuid,
        date: NaiveDate,
        location: &str,
        day_hash: &str,
        demand_id: Uuid,
    ) -> DomainResult<DayDemandIndex> {
        let row = sqlx::query_as::<_, DayDemandIndex>(
            r#"
            INSERT INTO day_demand_index (tenant_id, date, location, day_hash, demand_id)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (tenant_id, date, location, day_hash) DO NOTHING
            RETURNING id, tenant_id, date, location, day_hash, demand_id, created_at
            "#,
        )
        .bind(tenant_id)
        .bind(date)
        .bind(location)
        .bind(day_hash)
        .bind(demand_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_err)?;

        row.ok_or_else(|| DomainError::IndexRace(format!("day index row already exists for {date} {location}")))
    }

    async fn find_latest(
        &self,
        tenant_id: Uuid,
        date: NaiveDate,
        location: &str,
    ) -> DomainResult<Option<DayDemandIndex>> {
        sqlx::query_as::<_, DayDemandIndex>(
            r#"
            SELECT id, tenant_id, date, location, day_hash, demand_id, created_at
            FROM day_demand_index
            WHERE tenant_id = $1 AND date = $2 AND location = $3
            ORDER BY created_at DESC
            LIMIT 1
            "#,
        )
        .bind(tenant_id)
        .bind(date)
        .bind(location)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_err)
    }

    async fn candidate_demands_spanning(&self, tenant_id: Uuid, date: NaiveDate) -> DomainResult<Vec<Demand>> {
        sqlx::query_as::<_, Demand>(
            r#"
            SELECT id, tenant_id, name, raw_payload, content_hash, date_from, date_to, schedule_generated, solved_at, created_at, updated_at
            FROM demand
            WHERE tenant_id = $1 AND date_from <= $2 AND date_to >= $2
            ORDER BY created_at DESC
            "#,
        )
        .bind(tenant_id)
        .bind(date)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_err)
    }
}
