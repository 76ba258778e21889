use async_trait::async_trait;
use chrono::NaiveDate;
use shared::DomainResult;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::ScheduleShift;
use crate::domain::repositories::{NewScheduleShift, PatchScheduleShift, ScheduleShiftRepository};
use crate::infrastructure::database::map_db_err;

pub struct PostgresScheduleShiftRepository {
    pool: PgPool,
}

impl PostgresScheduleShiftRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const SELECT_COLUMNS: &str = "id, tenant_id, demand_id, shift_uid, date, location, start, \"end\", demand_count, needs_experienced, assigned_employees, missing_minutes, meta, user_edited, confirmed, approved_by, approved_at, created_at, updated_at";

#[async_trait]
impl ScheduleShiftRepository for PostgresScheduleShiftRepository {
    async fn bulk_insert(&self, shifts: Vec<NewScheduleShift>) -> DomainResult<Vec<ScheduleShift>> {
        let mut tx = self.pool.begin().await.map_err(map_db_err)?;
        let mut rows = Vec::with_capacity(shifts.len());

        for shift in shifts {
            let row = sqlx::query_as::<_, ScheduleShift>(&format!(
                r#"
                INSERT INTO schedule_shift (tenant_id, demand_id, shift_uid, date, location, start, "end", demand_count, needs_experienced, assigned_employees, missing_minutes, meta)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
                ON CONFLICT (demand_id, shift_uid) DO NOTHING
                RETURNING {SELECT_COLUMNS}
                "#
            ))
            .bind(shift.tenant_id)
            .bind(shift.demand_id)
            .bind(&shift.shift_uid)
            .bind(shift.date)
            .bind(&shift.location)
            .bind(&shift.start)
            .bind(&shift.end)
            .bind(shift.demand_count)
            .bind(shift.needs_experienced)
            .bind(Json(shift.assigned_employees))
            .bind(shift.missing_minutes)
            .bind(Json(shift.meta))
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_db_err)?;

            if let Some(row) = row {
                rows.push(row);
            }
        }

        tx.commit().await.map_err(map_db_err)?;
        Ok(rows)
    }

    async fn delete_by_demand(&self, demand_id: Uuid) -> DomainResult<()> {
        sqlx::query("DELETE FROM schedule_shift WHERE demand_id = $1")
            .bind(demand_id)
            .execute(&self.pool)
            .await
            .map_err(map_db_err)?;
        Ok(())
    }

    async fn find_by_uid(&self, tenant_id: Uuid, shift_uid: &str) -> DomainResult<Option<ScheduleShift>> {
        sqlx::query_as::<_, ScheduleShift>(&format!(
            "SELECT {SELECT_COLUMNS} FROM schedule_shift WHERE tenant_id = $1 AND shift_uid = $2"
        ))
        .bind(tenant_id)
        .bind(shift_uid)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_err)
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<ScheduleShift>> {
        sqlx::query_as::<_, ScheduleShift>(&format!("SELECT {SELECT_COLUMNS} FROM schedule_shift WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_err)
    }

    async fn list_by_demand(&self, demand_id: Uuid) -> DomainResult<Vec<ScheduleShift>> {
        sqlx::query_as::<_, ScheduleShift>(&format!(
            "SELECT {SELECT_COLUMNS} FROM schedule_shift WHERE demand_id = $1 ORDER BY date, start, location"
        ))
        .bind(demand_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_err)
    }

    async fn list_by_date_location(
        &self,
        tenant_id: Uuid,
        date: NaiveDate,
        location: &str,
    ) -> DomainResult<Vec<ScheduleShift>> {
        sqlx::query_as::<_, ScheduleShift>(&format!(
            "SELECT {SELECT_COLUMNS} FROM schedule_shift WHERE tenant_id = $1 AND date = $2 AND location = $3 ORDER BY start"
        ))
        .bind(tenant_id)
        .bind(date)
        .bind(location)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_err)
    }

    async fn update(&self, id: Uuid, patch: PatchScheduleShift) -> DomainResult<ScheduleShift> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| shared::DomainError::NotFound(format!("schedule shift {id}")))?;

        let mut meta = current.meta.0;
        if let Some(detail) = patch.assigned_employees_detail {
            meta.assigned_employees_detail = detail;
        }
        if let Some(segments) = patch.missing_segments {
            meta.missing_segments = segments;
        }

        sqlx::query_as::<_, ScheduleShift>(&format!(
            r#"
            UPDATE schedule_shift SET
                date = $2,
                location = $3,
                start = $4,
                "end" = $5,
                demand_count = $6,
                assigned_employees = $7,
                needs_experienced = $8,
                missing_minutes = $9,
                confirmed = $10,
                meta = $11,
                user_edited = TRUE,
                approved_by = NULL,
                approved_at = NULL,
                updated_at = NOW()
            WHERE id = $1
            RETURNING {SELECT_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(patch.date.unwrap_or(current.date))
        .bind(patch.location.unwrap_or(current.location))
        .bind(patch.start.unwrap_or(current.start))
        .bind(patch.end.unwrap_or(current.end))
        .bind(patch.demand_count.unwrap_or(current.demand_count))
        .bind(Json(patch.assigned_employees.unwrap_or(current.assigned_employees.0)))
        .bind(patch.needs_experienced.unwrap_or(current.needs_experienced))
        .bind(patch.missing_minutes.unwrap_or(current.missing_minutes))
        .bind(patch.confirmed.unwrap_or(current.confirmed))
        .bind(Json(meta))
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_err)
    }

    async fn set_assigned_employees(
        &self,
        id: Uuid,
        assigned_employees: Vec<String>,
        approved_by: String,
    ) -> DomainResult<ScheduleShift> {
        sqlx::query_as::<_, ScheduleShift>(&format!(
            r#"
            UPDATE schedule_shift SET
                assigned_employees = $2,
                confirmed = TRUE,
                user_edited = TRUE,
                approved_by = $3,
                approved_at = NOW(),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {SELECT_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(Json(assigned_employees))
        .bind(approved_by)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_err)
    }

    async fn approve(&self, id: Uuid, approved_by: String) -> DomainResult<ScheduleShift> {
        sqlx::query_as::<_, ScheduleShift>(&format!(
            r#"
            UPDATE schedule_shift SET
                confirmed = TRUE,
                approved_by = $2,
                approved_at = NOW(),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {SELECT_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(approved_by)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_err)
    }
}
