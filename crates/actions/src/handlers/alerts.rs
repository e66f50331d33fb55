use std::sync::Arc;

use async_trait::async_trait;
use client::JobManagementService;

use super::delete_failure;
use crate::confirm::ConfirmationGate;
use crate::context::{ActionContext, EntityInfo, EntityKind};
use crate::error::ActionError;
use crate::notify::Notifier;
use crate::registry::Action;

/// Opens the alert creation dialog. UI-only.
pub struct NewAlertAction;

#[async_trait]
impl Action for NewAlertAction {
    fn id(&self) -> &'static str {
        "jobaction.newAlert"
    }

    fn label(&self) -> &'static str {
        "New Alert"
    }

    async fn execute(&self, context: ActionContext<'_>) -> Result<bool, ActionError> {
        match context {
            ActionContext::View(view) => {
                view.open_create_alert_dialog()?;
                Ok(true)
            }
            _ => Err(ActionError::ContextMismatch(self.id())),
        }
    }
}

/// Placeholder: accepts the request and resolves immediately; the edit
/// workflow is not wired in yet.
pub struct EditAlertAction;

#[async_trait]
impl Action for EditAlertAction {
    fn id(&self) -> &'static str {
        "jobaction.editAlert"
    }

    fn label(&self) -> &'static str {
        "Edit Alert"
    }

    async fn execute(&self, _context: ActionContext<'_>) -> Result<bool, ActionError> {
        Ok(true)
    }
}

pub struct DeleteAlertAction {
    service: Arc<dyn JobManagementService>,
    gate: ConfirmationGate,
    notifier: Notifier,
}

impl DeleteAlertAction {
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
impl Action for DeleteAlertAction {
    fn id(&self) -> &'static str {
        "jobaction.deleteAlert"
    }

    fn label(&self) -> &'static str {
        "Delete Alert"
    }

    async fn execute(&self, context: ActionContext<'_>) -> Result<bool, ActionError> {
        let ActionContext::Target(target) = context else {
            return Err(ActionError::ContextMismatch(self.id()));
        };
        let EntityInfo::Alert(alert) = &target.target else {
            return Err(ActionError::ContextMismatch(self.id()));
        };

        if !self
            .gate
            .confirm_delete(EntityKind::Alert, &alert.name, self.label())
            .await
        {
            return Ok(true);
        }

        let outcome = self.service.delete_alert(&target.session_id, alert).await;
        if let Some(message) = delete_failure(EntityKind::Alert, &alert.name, outcome) {
            self.notifier.error(&message);
        }
        Ok(true)
    }
}
