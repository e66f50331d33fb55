use std::fmt;

use client::{AlertInfo, JobHistoryInfo, JobInfo, OperatorInfo, ProxyInfo};

/// View-local side effects the dispatcher may delegate to. Nothing behind
/// these methods touches the network; a returned error is the host's to
/// surface, not the notifier's.
pub trait ManagementView: Send {
    fn refresh_jobs(&mut self) -> anyhow::Result<()>;

    fn open_create_job_dialog(&mut self) -> anyhow::Result<()>;

    fn open_create_alert_dialog(&mut self) -> anyhow::Result<()>;

    fn open_create_operator_dialog(&mut self) -> anyhow::Result<()>;

    fn open_create_proxy_dialog(&mut self) -> anyhow::Result<()>;
}

/// Connection-scoped job view data backing run, stop and step creation.
#[derive(Debug, Clone)]
pub struct JobContext {
    pub session_id: String,
    pub server_name: String,
    pub job: JobInfo,
    pub history: Option<JobHistoryInfo>,
}

impl JobContext {
    /// 1-based id for the step about to be created, 0 when no history has
    /// been loaded for the job.
    pub fn next_step_id(&self) -> usize {
        self.history
            .as_ref()
            .map(|history| history.steps.len() + 1)
            .unwrap_or(0)
    }
}

/// A selected entity plus the session it lives on.
#[derive(Debug, Clone)]
pub struct TargetContext {
    pub session_id: String,
    pub target: EntityInfo,
}

/// The entity a contextual action operates on.
#[derive(Debug, Clone)]
pub enum EntityInfo {
    Job(JobInfo),
    Alert(AlertInfo),
    Operator(OperatorInfo),
    Proxy(ProxyInfo),
}

impl EntityInfo {
    pub fn kind(&self) -> EntityKind {
        match self {
            EntityInfo::Job(_) => EntityKind::Job,
            EntityInfo::Alert(_) => EntityKind::Alert,
            EntityInfo::Operator(_) => EntityKind::Operator,
            EntityInfo::Proxy(_) => EntityKind::Proxy,
        }
    }

    /// Name shown in confirmation and error messages. Proxies go by their
    /// account name.
    pub fn display_name(&self) -> &str {
        match self {
            EntityInfo::Job(job) => &job.name,
            EntityInfo::Alert(alert) => &alert.name,
            EntityInfo::Operator(operator) => &operator.name,
            EntityInfo::Proxy(proxy) => &proxy.account_name,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Job,
    Alert,
    Operator,
    Proxy,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Job => "job",
            EntityKind::Alert => "alert",
            EntityKind::Operator => "operator",
            EntityKind::Proxy => "proxy",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What an action is dispatched against. Built by the host immediately
/// before dispatch and consumed by exactly one execution.
pub enum ActionContext<'a> {
    /// A live view able to perform UI-only side effects.
    View(&'a mut dyn ManagementView),
    /// A job-scoped view carrying connection and job data.
    Job(JobContext),
    /// A selected entity.
    Target(TargetContext),
}
