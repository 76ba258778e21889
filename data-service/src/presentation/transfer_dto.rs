use chrono::{DateTime, Utc};
use serde::Serialize;
use shared::{TransferAction, TransferStatus};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::entities::ShiftTransferRequest;

#[derive(Debug, Serialize, ToSchema)]
pub struct TransferRequestResponse {
    pub id: Uuid,
    pub shift_id: Uuid,
    pub requested_by: String,
    pub action: TransferAction,
    pub target_employee: Option<String>,
    pub status: TransferStatus,
    pub note: Option<String>,
    pub manager_note: Option<String>,
    pub approved_by: Option<String>,
    pub approved_at: Option<DateTime<Utc>>,
}

impl From<ShiftTransferRequest> for TransferRequestResponse {
    fn from(r: ShiftTransferRequest) -> Self {
        Self {
            id: r.id,
            shift_id: r.shift_id,
            requested_by: r.requested_by,
            action: r.action,
            target_employee: r.target_employee,
            status: r.status,
            note: r.note,
            manager_note: r.manager_note,
            approved_by: r.approved_by,
            approved_at: r.approved_at,
        }
    }
}
