//! Best-effort notification hook. Failures never propagate — the trait gives callers
//! a seam to swap in real SMTP/provider wiring without touching the
//! approve/transfer pipelines, the same pattern every repository trait on `AppState`
//! uses to stay swappable behind `Arc<dyn Trait>`.

use async_trait::async_trait;

#[async_trait]
pub trait NotificationDispatcher: Send + Sync {
    async fn notify(&self, recipient: &str, subject: &str, body: &str);
}

pub struct LoggingNotificationDispatcher;

#[async_trait]
impl NotificationDispatcher for LoggingNotificationDispatcher {
    async fn notify(&self, recipient: &str, subject: &str, body: &str) {
        tracing::warn!(
            recipient,
            subject,
            body,
            "notification dispatch is a stub; would send via an email provider"
        );
    }
}
