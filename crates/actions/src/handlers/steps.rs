use std::sync::Arc;

use async_trait::async_trait;

use crate::context::ActionContext;
use crate::error::ActionError;
use crate::registry::{Action, CommandExecutor};

/// Command id the host handles to open the step creation dialog.
pub const OPEN_NEW_STEP_DIALOG: &str = "agent.openNewStepDialog";

/// Hands step creation to the host's command executor; the dialog itself
/// lives outside this pipeline. Resolves with whatever the delegated
/// command resolves with.
pub struct NewStepAction {
    commands: Arc<dyn CommandExecutor>,
}

impl NewStepAction {
    pub fn new(commands: Arc<dyn CommandExecutor>) -> Self {
        Self { commands }
    }
}

#[async_trait]
impl Action for NewStepAction {
    fn id(&self) -> &'static str {
        "jobaction.newStep"
    }

    fn label(&self) -> &'static str {
        "New Step"
    }

    async fn execute(&self, context: ActionContext<'_>) -> Result<bool, ActionError> {
        let ActionContext::Job(job) = context else {
            return Err(ActionError::ContextMismatch(self.id()));
        };
        let args = serde_json::json!({
            "sessionId": job.session_id,
            "jobName": job.job.name,
            "serverName": job.server_name,
            "stepId": job.next_step_id(),
        });
        let completed = self.commands.execute_command(OPEN_NEW_STEP_DIALOG, args).await?;
        Ok(completed)
    }
}
