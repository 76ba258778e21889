use async_trait::async_trait;
use shared::{DomainResult, TransferAction, TransferStatus};
use uuid::Uuid;

use crate::domain::entities::ShiftTransferRequest;

#[derive(Debug, Clone)]
pub struct CreateTransferRequest {
    pub tenant_id: Uuid,
    pub shift_id: Uuid,
    pub requested_by: String,
    pub action: TransferAction,
    pub target_employee: Option<String>,
    pub note: Option<String>,
}

#[async_trait]
pub trait TransferRepository: Send + Sync {
    async fn create(&self, input: CreateTransferRequest) -> DomainResult<ShiftTransferRequest>;

    async fn find_by_id(&self, tenant_id: Uuid, id: Uuid) -> DomainResult<Option<ShiftTransferRequest>>;

    /// Moderates a `pending` request; callers must have already checked the status
    /// themselves if they need a `ConflictState` on a non-pending request.
    async fn moderate(
        &self,
        id: Uuid,
        status: TransferStatus,
        manager_note: Option<String>,
        approved_by: String,
    ) -> DomainResult<ShiftTransferRequest>;
}
