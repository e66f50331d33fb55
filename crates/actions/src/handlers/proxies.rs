use std::sync::Arc;

use async_trait::async_trait;
use client::JobManagementService;

use super::delete_failure;
use crate::confirm::ConfirmationGate;
use crate::context::{ActionContext, EntityInfo, EntityKind};
use crate::error::ActionError;
use crate::notify::Notifier;
use crate::registry::Action;

/// Opens the proxy creation dialog. UI-only.
pub struct NewProxyAction;

#[async_trait]
impl Action for NewProxyAction {
    fn id(&self) -> &'static str {
        "jobaction.newProxy"
    }

    fn label(&self) -> &'static str {
        "New Proxy"
    }

    async fn execute(&self, context: ActionContext<'_>) -> Result<bool, ActionError> {
        match context {
            ActionContext::View(view) => {
                view.open_create_proxy_dialog()?;
                Ok(true)
            }
            _ => Err(ActionError::ContextMismatch(self.id())),
        }
    }
}

/// Placeholder: accepts the request and resolves immediately; the edit
/// workflow is not wired in yet.
pub struct EditProxyAction;

#[async_trait]
impl Action for EditProxyAction {
    fn id(&self) -> &'static str {
        "jobaction.editProxy"
    }

    fn label(&self) -> &'static str {
        "Edit Proxy"
    }

    async fn execute(&self, _context: ActionContext<'_>) -> Result<bool, ActionError> {
        Ok(true)
    }
}

pub struct DeleteProxyAction {
    service: Arc<dyn JobManagementService>,
    gate: ConfirmationGate,
    notifier: Notifier,
}

impl DeleteProxyAction {
    pub fn new(
        service: Arc<dyn JobManagementService>,
        gate: ConfirmationGate,
        notifier: Notifier,
    ) -> Self {
        Self {
            service,
            gate,
            notifier,
        }
    }
}

#[async_trait]
impl Action for DeleteProxyAction {
    fn id(&self) -> &'static str {
        "jobaction.deleteProxy"
    }

    fn label(&self) -> &'static str {
        "Delete Proxy"
    }

    async fn execute(&self, context: ActionContext<'_>) -> Result<bool, ActionError> {
        let ActionContext::Target(target) = context else {
            return Err(ActionError::ContextMismatch(self.id()));
        };
        let EntityInfo::Proxy(proxy) = &target.target else {
            return Err(ActionError::ContextMismatch(self.id()));
        };

        if !self
            .gate
            .confirm_delete(EntityKind::Proxy, &proxy.account_name, self.label())
            .await
        {
            return Ok(true);
        }

        let outcome = self.service.delete_proxy(&target.session_id, proxy).await;
        if let Some(message) = delete_failure(EntityKind::Proxy, &proxy.account_name, outcome) {
            self.notifier.error(&message);
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::Severity;
    use crate::testing::{FakeChannel, FakeService, FakeView, make_proxy, target};

    fn delete_action(service: &Arc<FakeService>, channel: &Arc<FakeChannel>) -> DeleteProxyAction {
        DeleteProxyAction::new(
            service.clone(),
            ConfirmationGate::new(channel.clone()),
            Notifier::new(channel.clone()),
        )
    }

    #[tokio::test]
    async fn test_new_proxy_opens_the_dialog() {
        let mut view = FakeView::working();

        let completed = NewProxyAction
            .execute(ActionContext::View(&mut view))
            .await
            .unwrap();

        assert!(completed);
        assert_eq!(
            view.delegated.lock().unwrap().as_slice(),
            ["open_create_proxy_dialog"]
        );
    }

    #[tokio::test]
    async fn test_edit_proxy_is_a_noop() {
        let context = target("s1", EntityInfo::Proxy(make_proxy("acct1")));
        assert!(EditProxyAction.execute(ActionContext::Target(context)).await.unwrap());
    }

    #[tokio::test]
    async fn test_proxies_are_confirmed_by_account_name() {
        let service = Arc::new(FakeService::succeeding());
        let channel = Arc::new(FakeChannel::affirming());
        let action = delete_action(&service, &channel);

        let context = target("s1", EntityInfo::Proxy(make_proxy("acct1")));
        let completed = action.execute(ActionContext::Target(context)).await.unwrap();

        assert!(completed);
        assert_eq!(
            channel.prompts.lock().unwrap().as_slice(),
            ["Are you sure you'd like to delete the proxy 'acct1'?"]
        );
        assert_eq!(
            service.calls.lock().unwrap().as_slice(),
            ["delete_proxy s1 acct1"]
        );
    }

    #[tokio::test]
    async fn test_delete_proxy_missing_result_reports_unknown_error() {
        let service = Arc::new(FakeService::missing_result());
        let channel = Arc::new(FakeChannel::affirming());
        let action = delete_action(&service, &channel);

        let context = target("s1", EntityInfo::Proxy(make_proxy("acct1")));
        let completed = action.execute(ActionContext::Target(context)).await.unwrap();

        assert!(completed);
        let sent = channel.notifications.lock().unwrap();
        assert_eq!(
            sent.as_slice(),
            [(
                Severity::Error,
                "Could not delete proxy 'acct1'.\nError: Unknown error".to_string()
            )]
        );
    }

    #[tokio::test]
    async fn test_cancelled_proxy_delete_is_side_effect_free() {
        let service = Arc::new(FakeService::succeeding());
        let channel = Arc::new(FakeChannel::cancelling());
        let action = delete_action(&service, &channel);

        let context = target("s1", EntityInfo::Proxy(make_proxy("acct1")));
        assert!(action.execute(ActionContext::Target(context)).await.unwrap());
        assert_eq!(service.call_count(), 0);
        assert_eq!(channel.notification_count(), 0);
    }
}
