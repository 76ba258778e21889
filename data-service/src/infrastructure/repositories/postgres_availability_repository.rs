use async_trait::async_trait;
use chrono::NaiveDate;
use shared::DomainResult;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::Availability;
use crate::domain::repositories::{AvailabilityRepository, UpsertAvailability};
use crate::infrastructure::database::map_db_err;

pub struct PostgresAvailabilityRepository {
    pool: PgPool,
}

impl PostgresAvailabilityRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AvailabilityRepository for PostgresAvailabilityRepository {
    async fn upsert(&self, input: UpsertAvailability) -> DomainResult<Availability> {
        sqlx::query_as::<_, Availability>(
            r#"
            INSERT INTO availability (tenant_id, employee_id, employee_name, date, experienced, hours_min, hours_max, available_slots, assigned_shift)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT (tenant_id, employee_id, date) DO UPDATE SET
                employee_name = EXCLUDED.employee_name,
                experienced = EXCLUDED.experienced,
                hours_min = GREATEST(availability.hours_min, EXCLUDED.hours_min),
                hours_max = NULLIF(LEAST(COALESCE(availability.hours_max, 2147483647), COALESCE(EXCLUDED.hours_max, 2147483647)), 2147483647),
                available_slots = EXCLUDED.available_slots,
                assigned_shift = EXCLUDED.assigned_shift,
                updated_at = NOW()
            RETURNING id, tenant_id, employee_id, employee_name, date, experienced, hours_min, hours_max, available_slots, assigned_shift, created_at, updated_at
            "#,
        )
        .bind(input.tenant_id)
        .bind(&input.employee_id)
        .bind(&input.employee_name)
        .bind(input.date)
        .bind(input.experienced)
        .bind(input.hours_min)
        .bind(input.hours_max)
        .bind(Json(input.available_slots))
        .bind(input.assigned_shift.map(Json))
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_err)
    }

    async fn find(&self, tenant_id: Uuid, employee_id: &str, date: NaiveDate) -> DomainResult<Option<Availability>> {
        sqlx::query_as::<_, Availability>(
            r#"
            SELECT id, tenant_id, employee_id, employee_name, date, experienced, hours_min, hours_max, available_slots, assigned_shift, created_at, updated_at
            FROM availability
            WHERE tenant_id = $1 AND employee_id = $2 AND date = $3
            "#,
        )
        .bind(tenant_id)
        .bind(employee_id)
        .bind(date)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_err)
    }

    async fn list_range(&self, tenant_id: Uuid, date_from: NaiveDate, date_to: NaiveDate) -> DomainResult<Vec<Availability>> {
        sqlx::query_as::<_, Availability>(
            r#"
            SELECT id, tenant_id, employee_id, employee_name, date, experienced, hours_min, hours_max, available_slots, assigned_shift, created_at, updated_at
            FROM availability
            WHERE tenant_id = $1 AND date BETWEEN $2 AND $3
            ORDER BY employee_id, date
            "#,
        )
        .bind(tenant_id)
        .bind(date_from)
        .bind(date_to)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_err)
    }
}
