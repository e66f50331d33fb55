//! Hand-built fakes and fixtures shared by the handler tests.

use std::sync::Mutex;

use async_trait::async_trait;
use client::{
    AlertInfo, JobHistoryInfo, JobInfo, JobManagementService, JobStepInfo, OperationResult,
    OperatorInfo, ProxyInfo, ServiceResult,
};

use crate::context::{EntityInfo, JobContext, ManagementView, TargetContext};
use crate::notify::{NotificationChannel, Severity};
use crate::registry::CommandExecutor;

/// What the scripted service answers every call with.
#[derive(Clone)]
pub enum Scripted {
    Result(OperationResult),
    Missing,
    Fault,
}

/// Service fake that records each call and replays a scripted outcome.
pub struct FakeService {
    script: Scripted,
    pub calls: Mutex<Vec<String>>,
}

impl FakeService {
    pub fn succeeding() -> Self {
        Self::scripted(Scripted::Result(OperationResult {
            success: true,
            error_message: None,
        }))
    }

    pub fn failing(message: &str) -> Self {
        Self::scripted(Scripted::Result(OperationResult {
            success: false,
            error_message: Some(message.to_string()),
        }))
    }

    pub fn missing_result() -> Self {
        Self::scripted(Scripted::Missing)
    }

    pub fn faulting() -> Self {
        Self::scripted(Scripted::Fault)
    }

    pub fn scripted(script: Scripted) -> Self {
        Self {
            script,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn answer(&self, call: String) -> ServiceResult {
        self.calls.lock().unwrap().push(call);
        match &self.script {
            Scripted::Result(result) => Ok(Some(result.clone())),
            Scripted::Missing => Ok(None),
            // A decode error stands in for any transport-layer fault.
            Scripted::Fault => Err(serde_json::from_slice::<OperationResult>(b"<garbled>")
                .unwrap_err()
                .into()),
        }
    }
}

#[async_trait]
impl JobManagementService for FakeService {
    async fn run_job(&self, session_id: &str, job_name: &str) -> ServiceResult {
        self.answer(format!("run_job {} {}", session_id, job_name))
    }

    async fn stop_job(&self, session_id: &str, job_name: &str) -> ServiceResult {
        self.answer(format!("stop_job {} {}", session_id, job_name))
    }

    async fn delete_job(&self, session_id: &str, job: &JobInfo) -> ServiceResult {
        self.answer(format!("delete_job {} {}", session_id, job.name))
    }

    async fn delete_alert(&self, session_id: &str, alert: &AlertInfo) -> ServiceResult {
        self.answer(format!("delete_alert {} {}", session_id, alert.name))
    }

    async fn delete_operator(&self, session_id: &str, operator: &OperatorInfo) -> ServiceResult {
        self.answer(format!("delete_operator {} {}", session_id, operator.name))
    }

    async fn delete_proxy(&self, session_id: &str, proxy: &ProxyInfo) -> ServiceResult {
        self.answer(format!("delete_proxy {} {}", session_id, proxy.account_name))
    }
}

/// Channel fake that records notifications and prompts and answers prompts
/// with a fixed choice.
pub struct FakeChannel {
    affirm: bool,
    broken: bool,
    pub notifications: Mutex<Vec<(Severity, String)>>,
    pub prompts: Mutex<Vec<String>>,
}

impl FakeChannel {
    pub fn affirming() -> Self {
        Self::build(true, false)
    }

    pub fn cancelling() -> Self {
        Self::build(false, false)
    }

    /// Fails every notify and every prompt.
    pub fn broken() -> Self {
        Self::build(false, true)
    }

    fn build(affirm: bool, broken: bool) -> Self {
        Self {
            affirm,
            broken,
            notifications: Mutex::new(Vec::new()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn notification_count(&self) -> usize {
        self.notifications.lock().unwrap().len()
    }
}

#[async_trait]
impl NotificationChannel for FakeChannel {
    fn notify(&self, severity: Severity, message: &str) -> anyhow::Result<()> {
        if self.broken {
            anyhow::bail!("channel down");
        }
        self.notifications
            .lock()
            .unwrap()
            .push((severity, message.to_string()));
        Ok(())
    }

    async fn confirm(
        &self,
        message: &str,
        _affirm_label: &str,
        _cancel_label: &str,
    ) -> anyhow::Result<bool> {
        if self.broken {
            anyhow::bail!("prompt unavailable");
        }
        self.prompts.lock().unwrap().push(message.to_string());
        Ok(self.affirm)
    }
}

/// Command executor fake recording delegated commands.
pub struct FakeExecutor {
    outcome: Option<bool>,
    pub commands: Mutex<Vec<(String, serde_json::Value)>>,
}

impl FakeExecutor {
    pub fn completing() -> Self {
        Self {
            outcome: Some(true),
            commands: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            outcome: None,
            commands: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl CommandExecutor for FakeExecutor {
    async fn execute_command(
        &self,
        command_id: &str,
        args: serde_json::Value,
    ) -> anyhow::Result<bool> {
        self.commands
            .lock()
            .unwrap()
            .push((command_id.to_string(), args));
        match self.outcome {
            Some(outcome) => Ok(outcome),
            None => anyhow::bail!("command host rejected the request"),
        }
    }
}

/// View fake that counts delegate calls; `erroring` makes every delegate
/// fail the way a broken view component would.
pub struct FakeView {
    erroring: bool,
    pub delegated: Mutex<Vec<&'static str>>,
}

impl FakeView {
    pub fn working() -> Self {
        Self {
            erroring: false,
            delegated: Mutex::new(Vec::new()),
        }
    }

    pub fn erroring() -> Self {
        Self {
            erroring: true,
            delegated: Mutex::new(Vec::new()),
        }
    }

    fn delegate(&mut self, method: &'static str) -> anyhow::Result<()> {
        if self.erroring {
            anyhow::bail!("view is gone");
        }
        self.delegated.lock().unwrap().push(method);
        Ok(())
    }
}

impl ManagementView for FakeView {
    fn refresh_jobs(&mut self) -> anyhow::Result<()> {
        self.delegate("refresh_jobs")
    }

    fn open_create_job_dialog(&mut self) -> anyhow::Result<()> {
        self.delegate("open_create_job_dialog")
    }

    fn open_create_alert_dialog(&mut self) -> anyhow::Result<()> {
        self.delegate("open_create_alert_dialog")
    }

    fn open_create_operator_dialog(&mut self) -> anyhow::Result<()> {
        self.delegate("open_create_operator_dialog")
    }

    fn open_create_proxy_dialog(&mut self) -> anyhow::Result<()> {
        self.delegate("open_create_proxy_dialog")
    }
}

pub fn make_job(name: &str) -> JobInfo {
    JobInfo {
        name: name.to_string(),
        description: None,
        enabled: true,
        owner: None,
        category: None,
        last_run: None,
        next_run: None,
    }
}

pub fn make_alert(name: &str) -> AlertInfo {
    AlertInfo {
        name: name.to_string(),
        enabled: true,
        database_name: None,
        last_occurrence_date: None,
    }
}

pub fn make_operator(name: &str) -> OperatorInfo {
    OperatorInfo {
        name: name.to_string(),
        enabled: true,
        email_address: None,
    }
}

pub fn make_proxy(account_name: &str) -> ProxyInfo {
    ProxyInfo {
        account_name: account_name.to_string(),
        credential_name: None,
        enabled: true,
        description: None,
    }
}

pub fn make_history(step_count: u32) -> JobHistoryInfo {
    JobHistoryInfo {
        last_run_date: None,
        steps: (1..=step_count)
            .map(|step_id| JobStepInfo {
                step_id,
                step_name: format!("step-{}", step_id),
                subsystem: None,
                command: None,
            })
            .collect(),
    }
}

pub fn job_context(session_id: &str, job_name: &str) -> JobContext {
    JobContext {
        session_id: session_id.to_string(),
        server_name: "agent".to_string(),
        job: make_job(job_name),
        history: None,
    }
}

pub fn target(session_id: &str, entity: EntityInfo) -> TargetContext {
    TargetContext {
        session_id: session_id.to_string(),
        target: entity,
    }
}
