use async_trait::async_trait;
use chrono::NaiveDate;
use shared::{DomainResult, RuleMode};
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::domain::entities::{EventRule, SpecialDay};
use crate::domain::repositories::{SpecialDayRepository, UpsertSpecialDay};
use crate::infrastructure::database::map_db_err;

pub struct PostgresSpecialDayRepository {
    pool: PgPool,
}

impl PostgresSpecialDayRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SpecialDayRepository for PostgresSpecialDayRepository {
    async fn upsert(&self, input: UpsertSpecialDay) -> DomainResult<SpecialDay> {
        let active = input.active.unwrap_or(true);
        sqlx::query_as::<_, SpecialDay>(
            r#"
            INSERT INTO special_day (tenant_id, date, location, rule_id, note, active)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (tenant_id, date, location, rule_id) DO UPDATE SET
                note = EXCLUDED.note,
                active = EXCLUDED.active,
                updated_at = NOW()
            RETURNING id, tenant_id, date, location, rule_id, note, active, created_at, updated_at
            "#,
        )
        .bind(input.tenant_id)
        .bind(input.date)
        .bind(&input.location)
        .bind(input.rule_id)
        .bind(&input.note)
        .bind(active)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_err)
    }

    async fn list(
        &self,
        tenant_id: Uuid,
        date_from: Option<NaiveDate>,
        date_to: Option<NaiveDate>,
        location: Option<&str>,
    ) -> DomainResult<Vec<SpecialDay>> {
        sqlx::query_as::<_, SpecialDay>(
            r#"
            SELECT id, tenant_id, date, location, rule_id, note, active, created_at, updated_at
            FROM special_day
            WHERE tenant_id = $1
                AND ($2::date IS NULL OR date >= $2)
                AND ($3::date IS NULL OR date <= $3)
                AND ($4::text IS NULL OR location = $4)
            ORDER BY date, created_at
            "#,
        )
        .bind(tenant_id)
        .bind(date_from)
        .bind(date_to)
        .bind(location)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_err)
    }

    async fn active_in_range_with_rules(
        &self,
        tenant_id: Uuid,
        date_from: NaiveDate,
        date_to: NaiveDate,
    ) -> DomainResult<Vec<(SpecialDay, EventRule)>> {
        let rows = sqlx::query(
            r#"
            SELECT
                sd.id AS sd_id, sd.tenant_id AS sd_tenant_id, sd.date AS sd_date, sd.location AS sd_location,
                sd.rule_id AS sd_rule_id, sd.note AS sd_note, sd.active AS sd_active,
                sd.created_at AS sd_created_at, sd.updated_at AS sd_updated_at,
                er.id AS er_id, er.tenant_id AS er_tenant_id, er.name AS er_name, er.mode AS er_mode,
                er.value AS er_value, er.needs_experienced_default AS er_needs_experienced_default,
                er.min_demand AS er_min_demand, er.max_demand AS er_max_demand, er.active AS er_active,
                er.created_at AS er_created_at, er.updated_at AS er_updated_at
            FROM special_day sd
            JOIN event_rule er ON er.id = sd.rule_id
            WHERE sd.tenant_id = $1 AND sd.active = TRUE AND er.active = TRUE
                AND sd.date BETWEEN $2 AND $3
            ORDER BY sd.created_at
            "#,
        )
        .bind(tenant_id)
        .bind(date_from)
        .bind(date_to)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_err)?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let special_day = SpecialDay {
                    id: row.get("sd_id"),
                    tenant_id: row.get("sd_tenant_id"),
                    date: row.get("sd_date"),
                    location: row.get("sd_location"),
                    rule_id: row.get("sd_rule_id"),
                    note: row.get("sd_note"),
                    active: row.get("sd_active"),
                    created_at: row.get("sd_created_at"),
                    updated_at: row.get("sd_updated_at"),
                };
                let event_rule = EventRule {
                    id: row.get("er_id"),
                    tenant_id: row.get("er_tenant_id"),
                    name: row.get("er_name"),
                    mode: row.get::<RuleMode, _>("er_mode"),
                    value: row.get("er_value"),
                    needs_experienced_default: row.get("er_needs_experienced_default"),
                    min_demand: row.get("er_min_demand"),
                    max_demand: row.get("er_max_demand"),
                    active: row.get("er_active"),
                    created_at: row.get("er_created_at"),
                    updated_at: row.get("er_updated_at"),
                };
                (special_day, event_rule)
            })
            .collect())
    }
}
