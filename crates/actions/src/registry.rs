use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use client::JobManagementService;

use crate::confirm::ConfirmationGate;
use crate::context::ActionContext;
use crate::error::ActionError;
use crate::handlers::{alerts, jobs, operators, proxies, steps};
use crate::notify::{NotificationChannel, Notifier};

/// A host-visible command bound to a contextual target.
///
/// `execute` resolves `Ok(true)` for completed (or cancelled) pipelines and
/// `Ok(false)` for handled failures; only host-side faults reject. Handlers
/// never block the host's dispatch loop: every wait is an await on the
/// single outstanding call.
#[async_trait]
pub trait Action: Send + Sync {
    /// Stable identifier the host registers menus and palettes under.
    fn id(&self) -> &'static str;

    /// Display label for the command surface.
    fn label(&self) -> &'static str;

    async fn execute(&self, context: ActionContext<'_>) -> Result<bool, ActionError>;
}

/// Host command executor for work delegated outside this pipeline.
#[async_trait]
pub trait CommandExecutor: Send + Sync {
    async fn execute_command(
        &self,
        command_id: &str,
        args: serde_json::Value,
    ) -> anyhow::Result<bool>;
}

/// Id-keyed action set. Collaborators are injected once at build time and
/// shared by every handler; the set itself is immutable afterwards.
pub struct ActionRegistry {
    actions: HashMap<&'static str, Arc<dyn Action>>,
}

impl ActionRegistry {
    pub fn new(
        service: Arc<dyn JobManagementService>,
        channel: Arc<dyn NotificationChannel>,
        commands: Arc<dyn CommandExecutor>,
    ) -> Self {
        let notifier = Notifier::new(channel.clone());
        let gate = ConfirmationGate::new(channel);

        let mut registry = Self {
            actions: HashMap::new(),
        };

        registry.add(Arc::new(jobs::RefreshJobsAction));
        registry.add(Arc::new(jobs::NewJobAction));
        registry.add(Arc::new(jobs::RunJobAction::new(
            service.clone(),
            notifier.clone(),
        )));
        registry.add(Arc::new(jobs::StopJobAction::new(
            service.clone(),
            notifier.clone(),
        )));
        registry.add(Arc::new(jobs::EditJobAction));
        registry.add(Arc::new(jobs::DeleteJobAction::new(
            service.clone(),
            gate.clone(),
            notifier.clone(),
        )));

        registry.add(Arc::new(steps::NewStepAction::new(commands)));

        registry.add(Arc::new(alerts::NewAlertAction));
        registry.add(Arc::new(alerts::EditAlertAction));
        registry.add(Arc::new(alerts::DeleteAlertAction::new(
            service.clone(),
            gate.clone(),
            notifier.clone(),
        )));

        registry.add(Arc::new(operators::NewOperatorAction));
        registry.add(Arc::new(operators::EditOperatorAction));
        registry.add(Arc::new(operators::DeleteOperatorAction::new(
            service.clone(),
            gate.clone(),
            notifier.clone(),
        )));

        registry.add(Arc::new(proxies::NewProxyAction));
        registry.add(Arc::new(proxies::EditProxyAction));
        registry.add(Arc::new(proxies::DeleteProxyAction::new(
            service, gate, notifier,
        )));

        registry
    }

    fn add(&mut self, action: Arc<dyn Action>) {
        let id = action.id();
        let previous = self.actions.insert(id, action);
        debug_assert!(previous.is_none(), "duplicate action id '{}'", id);
    }

    pub fn get(&self, id: &str) -> Option<&Arc<dyn Action>> {
        self.actions.get(id)
    }

    /// All registered (id, label) pairs, sorted by id, for the host's menu
    /// and palette construction.
    pub fn entries(&self) -> Vec<(&'static str, &'static str)> {
        let mut entries: Vec<_> = self
            .actions
            .values()
            .map(|action| (action.id(), action.label()))
            .collect();
        entries.sort_unstable_by_key(|(id, _)| *id);
        entries
    }

    /// Look up `id` and run its pipeline against `context`.
    pub async fn dispatch(
        &self,
        id: &str,
        context: ActionContext<'_>,
    ) -> Result<bool, ActionError> {
        let action = self
            .actions
            .get(id)
            .ok_or_else(|| ActionError::UnknownAction(id.to_string()))?;
        tracing::debug!("dispatching action '{}'", id);
        action.execute(context).await
    }
}
