use async_trait::async_trait;
use shared::{DomainResult, TransferStatus};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::ShiftTransferRequest;
use crate::domain::repositories::{CreateTransferRequest, TransferRepository};
use crate::infrastructure::database::map_db_err;

pub struct PostgresTransferRepository {
    pool: PgPool,
}

impl PostgresTransferRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TransferRepository for PostgresTransferRepository {
    async fn create(&self, input: CreateTransferRequest) -> DomainResult<ShiftTransferRequest> {
        sqlx::query_as::<_, ShiftTransferRequest>(
            r#"
            INSERT INTO shift_transfer_request (tenant_id, shift_id, requested_by, action, target_employee, status, note)
            VALUES ($1, $2, $3, $4, $5, 'PENDING', $6)
            RETURNING id, tenant_id, shift_id, requested_by, action, target_employee, status, note, manager_note, approved_by, approved_at, created_at, updated_at
            "#,
        )
        .bind(input.tenant_id)
        .bind(input.shift_id)
        .bind(&input.requested_by)
        .bind(input.action)
        .bind(&input.target_employee)
        .bind(&input.note)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_err)
    }

    async fn find_by_id(&self, tenant_id: Uuid, id: Uuid) -> DomainResult<Option<ShiftTransferRequest>> {
        sqlx::query_as::<_, ShiftTransferRequest>(
            r#"
            SELECT id, tenant_id, shift_id, requested_by, action, target_employee, status, note, manager_note, approved_by, approved_at, created_at, updated_at
            FROM shift_transfer_request
            WHERE tenant_id = $1 AND id = $2
            "#,
        )
        .bind(tenant_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_err)
    }

    async fn moderate(
        &self,
        id: Uuid,
        status: TransferStatus,
        manager_note: Option<String>,
        approved_by: String,
    ) -> DomainResult<ShiftTransferRequest> {
        sqlx::query_as::<_, ShiftTransferRequest>(
            r#"
            UPDATE shift_transfer_request SET
                status = $2,
                manager_note = $3,
                approved_by = $4,
                approved_at = NOW(),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, tenant_id, shift_id, requested_by, action, target_employee, status, note, manager_note, approved_by, approved_at, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(status)
        .bind(manager_note)
        .bind(approved_by)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_err)
    }
}
