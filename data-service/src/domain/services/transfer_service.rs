//! Shift transfer (drop/claim) workflow: employee-initiated requests, manager
//! moderation, and best-effort notification of both parties.

use std::sync::Arc;

use shared::{DomainError, DomainResult, Role, TransferAction, TransferStatus};
use uuid::Uuid;

use crate::domain::entities::ShiftTransferRequest;
use crate::domain::repositories::{CreateTransferRequest, ScheduleShiftRepository, TransferRepository};
use crate::domain::services::notification_service::NotificationDispatcher;

pub struct TransferService {
    transfer_repo: Arc<dyn TransferRepository>,
    shift_repo: Arc<dyn ScheduleShiftRepository>,
    notifications: Arc<dyn NotificationDispatcher>,
}

/// Appends `employee_id` if absent, preserving the existing order (de-duplicate
/// order-preserving).
fn add_employee(assigned: &mut Vec<String>, employee_id: &str) {
    if !assigned.iter().any(|e| e == employee_id) {
        assigned.push(employee_id.to_string());
    }
}

fn remove_employee(assigned: &mut Vec<String>, employee_id: &str) {
    assigned.retain(|e| e != employee_id);
}

impl TransferService {
    pub fn new(
        transfer_repo: Arc<dyn TransferRepository>,
        shift_repo: Arc<dyn ScheduleShiftRepository>,
        notifications: Arc<dyn NotificationDispatcher>,
    ) -> Self {
        Self { transfer_repo, shift_repo, notifications }
    }

    pub async fn create(
        &self,
        tenant_id: Uuid,
        shift_uid: &str,
        requested_by: &str,
        action: TransferAction,
        target_employee: Option<String>,
        note: Option<String>,
    ) -> DomainResult<ShiftTransferRequest> {
        let shift = self
            .shift_repo
            .find_by_uid(tenant_id, shift_uid)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("shift {shift_uid}")))?;

        let is_assigned = shift.assigned_employees.0.iter().any(|e| e == requested_by);
        match action {
            TransferAction::Drop if !is_assigned => {
                return Err(DomainError::ValidationFailure(
                    "cannot drop a shift you are not assigned to".to_string(),
                ));
            }
            TransferAction::Claim if is_assigned => {
                return Err(DomainError::ValidationFailure(
                    "cannot claim a shift you are already assigned to".to_string(),
                ));
            }
            _ => {}
        }

        self.transfer_repo
            .create(CreateTransferRequest {
                tenant_id,
                shift_id: shift.id,
                requested_by: requested_by.to_string(),
                action,
                target_employee,
                note,
            })
            .await
    }

    async fn require_pending(&self, tenant_id: Uuid, id: Uuid) -> DomainResult<ShiftTransferRequest> {
        let request = self
            .transfer_repo
            .find_by_id(tenant_id, id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("transfer request {id}")))?;
        if request.status != TransferStatus::Pending {
            return Err(DomainError::ConflictState(format!(
                "transfer request {id} has already been moderated"
            )));
        }
        Ok(request)
    }

    pub async fn approve(
        &self,
        tenant_id: Uuid,
        id: Uuid,
        role: Role,
        approved_by: &str,
        manager_note: Option<String>,
    ) -> DomainResult<ShiftTransferRequest> {
        if !role.can_moderate() {
            return Err(DomainError::AuthorizationFailure("manager or owner role required to moderate a transfer".to_string()));
        }
        let request = self.require_pending(tenant_id, id).await?;

        let shift = self.shift_repo.find_by_id(request.shift_id).await?;
        let mut assigned = match &shift {
            Some(s) => s.assigned_employees.0.clone(),
            None => Vec::new(),
        };

        match request.action {
            TransferAction::Drop => {
                remove_employee(&mut assigned, &request.requested_by);
                if let Some(target) = &request.target_employee {
                    add_employee(&mut assigned, target);
                }
            }
            TransferAction::Claim => {
                add_employee(&mut assigned, &request.requested_by);
            }
        }

        self.shift_repo.set_assigned_employees(request.shift_id, assigned, approved_by.to_string()).await?;

        let moderated = self
            .transfer_repo
            .moderate(id, TransferStatus::Approved, manager_note, approved_by.to_string())
            .await?;

        self.notify_parties(&moderated, "Transfer request approved").await;
        Ok(moderated)
    }

    pub async fn reject(
        &self,
        tenant_id: Uuid,
        id: Uuid,
        role: Role,
        approved_by: &str,
        manager_note: Option<String>,
    ) -> DomainResult<ShiftTransferRequest> {
        if !role.can_moderate() {
            return Err(DomainError::AuthorizationFailure("manager or owner role required to moderate a transfer".to_string()));
        }
        self.require_pending(tenant_id, id).await?;

        let moderated = self
            .transfer_repo
            .moderate(id, TransferStatus::Rejected, manager_note, approved_by.to_string())
            .await?;

        self.notify_parties(&moderated, "Transfer request rejected").await;
        Ok(moderated)
    }

    async fn notify_parties(&self, request: &ShiftTransferRequest, subject: &str) {
        let body = format!("Your {:?} request for shift is now {:?}.", request.action, request.status);
        self.notifications.notify(&request.requested_by, subject, &body).await;
        if let Some(target) = &request.target_employee {
            self.notifications.notify(target, subject, &body).await;
        }
    }
}
