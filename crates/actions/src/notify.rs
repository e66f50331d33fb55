use std::sync::Arc;

use async_trait::async_trait;

/// Severity of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

/// Host-provided channel that renders notifications and confirmation
/// prompts. Presentation is the host's business; exactly one answer comes
/// back per prompt.
#[async_trait]
pub trait NotificationChannel: Send + Sync {
    fn notify(&self, severity: Severity, message: &str) -> anyhow::Result<()>;

    /// Present `message` with two labelled choices. `Ok(true)` means the
    /// affirmative choice was taken.
    async fn confirm(
        &self,
        message: &str,
        affirm_label: &str,
        cancel_label: &str,
    ) -> anyhow::Result<bool>;
}

/// Best-effort reporter. A notification that cannot be displayed is logged
/// and dropped; it never fails the pipeline that produced it.
#[derive(Clone)]
pub struct Notifier {
    channel: Arc<dyn NotificationChannel>,
}

impl Notifier {
    pub fn new(channel: Arc<dyn NotificationChannel>) -> Self {
        Self { channel }
    }

    pub fn info(&self, message: &str) {
        self.deliver(Severity::Info, message);
    }

    pub fn error(&self, message: &str) {
        self.deliver(Severity::Error, message);
    }

    fn deliver(&self, severity: Severity, message: &str) {
        if let Err(e) = self.channel.notify(severity, message) {
            tracing::warn!("failed to deliver {:?} notification: {}", severity, e);
        }
    }
}
