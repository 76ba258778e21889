use serde::Deserialize;
use shared::TransferAction;
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateTransferRequestBody {
    pub shift_uid: String,
    pub action: TransferAction,
    #[serde(default)]
    pub target_employee: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ModerateTransferRequest {
    #[serde(default)]
    pub manager_note: Option<String>,
}
