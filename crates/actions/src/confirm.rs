use std::sync::Arc;

use crate::context::EntityKind;
use crate::notify::NotificationChannel;

pub const CANCEL_LABEL: &str = "Cancel";

/// Gate in front of destructive verbs: one prompt per dispatch, and the
/// backend call happens only after an affirmative answer.
#[derive(Clone)]
pub struct ConfirmationGate {
    channel: Arc<dyn NotificationChannel>,
}

impl ConfirmationGate {
    pub fn new(channel: Arc<dyn NotificationChannel>) -> Self {
        Self { channel }
    }

    /// Ask before deleting the `kind` named `name`. A channel failure
    /// counts as a cancel: without an explicit answer no destructive call
    /// is made.
    pub async fn confirm_delete(&self, kind: EntityKind, name: &str, affirm_label: &str) -> bool {
        let message = delete_prompt(kind, name);
        match self
            .channel
            .confirm(&message, affirm_label, CANCEL_LABEL)
            .await
        {
            Ok(answer) => answer,
            Err(e) => {
                tracing::warn!("confirmation prompt failed, treating as cancel: {}", e);
                false
            }
        }
    }
}

pub(crate) fn delete_prompt(kind: EntityKind, name: &str) -> String {
    format!("Are you sure you'd like to delete the {} '{}'?", kind, name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeChannel;

    #[test]
    fn test_prompt_phrasing() {
        assert_eq!(
            delete_prompt(EntityKind::Job, "Nightly"),
            "Are you sure you'd like to delete the job 'Nightly'?"
        );
        assert_eq!(
            delete_prompt(EntityKind::Proxy, "acct1"),
            "Are you sure you'd like to delete the proxy 'acct1'?"
        );
    }

    #[tokio::test]
    async fn test_affirmation_passes_through() {
        let channel = Arc::new(FakeChannel::affirming());
        let gate = ConfirmationGate::new(channel.clone());

        assert!(gate.confirm_delete(EntityKind::Alert, "cpu-high", "Delete Alert").await);

        let prompts = channel.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0], "Are you sure you'd like to delete the alert 'cpu-high'?");
    }

    #[tokio::test]
    async fn test_cancellation_passes_through() {
        let gate = ConfirmationGate::new(Arc::new(FakeChannel::cancelling()));
        assert!(!gate.confirm_delete(EntityKind::Job, "Nightly", "Delete Job").await);
    }

    #[tokio::test]
    async fn test_prompt_failure_counts_as_cancel() {
        let gate = ConfirmationGate::new(Arc::new(FakeChannel::broken()));
        assert!(!gate.confirm_delete(EntityKind::Job, "Nightly", "Delete Job").await);
    }
}
