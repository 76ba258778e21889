use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::{Identifiable, Timestamped, TransferAction, TransferStatus};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// An employee-initiated drop or claim of a shift, pending manager moderation.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ShiftTransferRequest {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub shift_id: Uuid,
    pub requested_by: String,
    pub action: TransferAction,
    pub target_employee: Option<String>,
    pub status: TransferStatus,
    pub note: Option<String>,
    pub manager_note: Option<String>,
    pub approved_by: Option<String>,
    pub approved_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Identifiable for ShiftTransferRequest {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Timestamped for ShiftTransferRequest {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
