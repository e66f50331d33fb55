use std::sync::Arc;

use async_trait::async_trait;
use client::JobManagementService;

use super::{delete_failure, report_job_outcome};
use crate::confirm::ConfirmationGate;
use crate::context::{ActionContext, EntityInfo, EntityKind};
use crate::error::ActionError;
use crate::notify::Notifier;
use crate::registry::Action;

/// Redraws the jobs view from its own state. UI-only.
pub struct RefreshJobsAction;

#[async_trait]
impl Action for RefreshJobsAction {
    fn id(&self) -> &'static str {
        "jobaction.refresh"
    }

    fn label(&self) -> &'static str {
        "Refresh"
    }

    async fn execute(&self, context: ActionContext<'_>) -> Result<bool, ActionError> {
        match context {
            ActionContext::View(view) => {
                view.refresh_jobs()?;
                Ok(true)
            }
            _ => Err(ActionError::ContextMismatch(self.id())),
        }
    }
}

/// Opens the job creation dialog. UI-only.
pub struct NewJobAction;

#[async_trait]
impl Action for NewJobAction {
    fn id(&self) -> &'static str {
        "jobaction.newJob"
    }

    fn label(&self) -> &'static str {
        "New Job"
    }

    async fn execute(&self, context: ActionContext<'_>) -> Result<bool, ActionError> {
        match context {
            ActionContext::View(view) => {
                view.open_create_job_dialog()?;
                Ok(true)
            }
            _ => Err(ActionError::ContextMismatch(self.id())),
        }
    }
}

pub struct RunJobAction {
    service: Arc<dyn JobManagementService>,
    notifier: Notifier,
}

impl RunJobAction {
    pub fn new(service: Arc<dyn JobManagementService>, notifier: Notifier) -> Self {
        Self { service, notifier }
    }
}

#[async_trait]
impl Action for RunJobAction {
    fn id(&self) -> &'static str {
        "jobaction.runJob"
    }

    fn label(&self) -> &'static str {
        "Run"
    }

    async fn execute(&self, context: ActionContext<'_>) -> Result<bool, ActionError> {
        let ActionContext::Job(job) = context else {
            return Err(ActionError::ContextMismatch(self.id()));
        };
        let outcome = self.service.run_job(&job.session_id, &job.job.name).await;
        Ok(report_job_outcome(
            &self.notifier,
            &job.job.name,
            "The job was successfully started.",
            outcome,
        ))
    }
}

pub struct StopJobAction {
    service: Arc<dyn JobManagementService>,
    notifier: Notifier,
}

impl StopJobAction {
    pub fn new(service: Arc<dyn JobManagementService>, notifier: Notifier) -> Self {
        Self { service, notifier }
    }
}

#[async_trait]
impl Action for StopJobAction {
    fn id(&self) -> &'static str {
        "jobaction.stopJob"
    }

    fn label(&self) -> &'static str {
        "Stop"
    }

    async fn execute(&self, context: ActionContext<'_>) -> Result<bool, ActionError> {
        let ActionContext::Job(job) = context else {
            return Err(ActionError::ContextMismatch(self.id()));
        };
        let outcome = self.service.stop_job(&job.session_id, &job.job.name).await;
        Ok(report_job_outcome(
            &self.notifier,
            &job.job.name,
            "The job was successfully stopped.",
            outcome,
        ))
    }
}

/// Placeholder: accepts the request and resolves immediately. The edit
/// workflow belongs to a collaborator that is not wired in yet, so no
/// backend work is fabricated here.
pub struct EditJobAction;

#[async_trait]
impl Action for EditJobAction {
    fn id(&self) -> &'static str {
        "jobaction.editJob"
    }

    fn label(&self) -> &'static str {
        "Edit Job"
    }

    async fn execute(&self, _context: ActionContext<'_>) -> Result<bool, ActionError> {
        Ok(true)
    }
}

pub struct DeleteJobAction {
    service: Arc<dyn JobManagementService>,
    gate: ConfirmationGate,
    notifier: Notifier,
}

impl DeleteJobAction {
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
impl Action for DeleteJobAction {
    fn id(&self) -> &'static str {
        "jobaction.deleteJob"
    }

    fn label(&self) -> &'static str {
        "Delete Job"
    }

    async fn execute(&self, context: ActionContext<'_>) -> Result<bool, ActionError> {
        let ActionContext::Target(target) = context else {
            return Err(ActionError::ContextMismatch(self.id()));
        };
        let EntityInfo::Job(job) = &target.target else {
            return Err(ActionError::ContextMismatch(self.id()));
        };

        if !self
            .gate
            .confirm_delete(EntityKind::Job, &job.name, self.label())
            .await
        {
            return Ok(true);
        }

        let outcome = self.service.delete_job(&target.session_id, job).await;
        if let Some(message) = delete_failure(EntityKind::Job, &job.name, outcome) {
            self.notifier.error(&message);
        }
        Ok(true)
    }
}
