use async_trait::async_trait;

use crate::error::ClientError;
use crate::models::{AlertInfo, JobInfo, OperatorInfo, ProxyInfo};
use crate::result::OperationResult;

/// Tri-state outcome of a management call: a populated result, an answer
/// that carried no result object, or a transport fault. Callers interpret;
/// the invoker only passes through.
pub type ServiceResult = Result<Option<OperationResult>, ClientError>;

/// Verb accepted by the agent's job action endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobVerb {
    Run,
    Stop,
}

impl JobVerb {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobVerb::Run => "run",
            JobVerb::Stop => "stop",
        }
    }
}

/// The management surface action handlers invoke, scoped per call to a
/// session identifier. One capability per (entity, verb) pair; no retries
/// and no validation beyond passing arguments through.
#[async_trait]
pub trait JobManagementService: Send + Sync {
    async fn run_job(&self, session_id: &str, job_name: &str) -> ServiceResult;

    async fn stop_job(&self, session_id: &str, job_name: &str) -> ServiceResult;

    async fn delete_job(&self, session_id: &str, job: &JobInfo) -> ServiceResult;

    async fn delete_alert(&self, session_id: &str, alert: &AlertInfo) -> ServiceResult;

    async fn delete_operator(&self, session_id: &str, operator: &OperatorInfo) -> ServiceResult;

    async fn delete_proxy(&self, session_id: &str, proxy: &ProxyInfo) -> ServiceResult;
}
