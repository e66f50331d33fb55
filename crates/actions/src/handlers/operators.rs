use std::sync::Arc;

use async_trait::async_trait;
use client::JobManagementService;

use super::delete_failure;
use crate::confirm::ConfirmationGate;
use crate::context::{ActionContext, EntityInfo, EntityKind};
use crate::error::ActionError;
use crate::notify::Notifier;
use crate::registry::Action;

/// Opens the operator creation dialog. UI-only.
pub struct NewOperatorAction;

#[async_trait]
impl Action for NewOperatorAction {
    fn id(&self) -> &'static str {
        "jobaction.newOperator"
    }

    fn label(&self) -> &'static str {
        "New Operator"
    }

    async fn execute(&self, context: ActionContext<'_>) -> Result<bool, ActionError> {
        match context {
            ActionContext::View(view) => {
                view.open_create_operator_dialog()?;
                Ok(true)
            }
            _ => Err(ActionError::ContextMismatch(self.id())),
        }
    }
}

/// Placeholder: accepts the request and resolves immediately; the edit
/// workflow is not wired in yet.
pub struct EditOperatorAction;

#[async_trait]
impl Action for EditOperatorAction {
    fn id(&self) -> &'static str {
        "jobaction.editOperator"
    }

    fn label(&self) -> &'static str {
        "Edit Operator"
    }

    async fn execute(&self, _context: ActionContext<'_>) -> Result<bool, ActionError> {
        Ok(true)
    }
}

pub struct DeleteOperatorAction {
    service: Arc<dyn JobManagementService>,
    gate: ConfirmationGate,
    notifier: Notifier,
}

impl DeleteOperatorAction {
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
impl Action for DeleteOperatorAction {
    fn id(&self) -> &'static str {
        "jobaction.deleteOperator"
    }

    fn label(&self) -> &'static str {
        "Delete Operator"
    }

    async fn execute(&self, context: ActionContext<'_>) -> Result<bool, ActionError> {
        let ActionContext::Target(target) = context else {
            return Err(ActionError::ContextMismatch(self.id()));
        };
        let EntityInfo::Operator(operator) = &target.target else {
            return Err(ActionError::ContextMismatch(self.id()));
        };

        if !self
            .gate
            .confirm_delete(EntityKind::Operator, &operator.name, self.label())
            .await
        {
            return Ok(true);
        }

        let outcome = self
            .service
            .delete_operator(&target.session_id, operator)
            .await;
        if let Some(message) = delete_failure(EntityKind::Operator, &operator.name, outcome) {
            self.notifier.error(&message);
        }
        Ok(true)
    }
}
