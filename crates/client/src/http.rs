use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::ClientError;
use crate::models::{AlertInfo, JobHistoryInfo, JobInfo, OperatorInfo, ProxyInfo};
use crate::service::{JobManagementService, JobVerb, ServiceResult};

/// HTTP client for the agent's management API.
///
/// Management calls reply with a result-status body (`success` plus an
/// optional `errorMessage`); some agents answer destructive calls with an
/// empty body, which surfaces as the missing-result state.
pub struct AgentClient {
    http: reqwest::Client,
    base_url: String,
}

impl AgentClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let response = self
            .http
            .get(self.url(path))
            .send()
            .await?
            .error_for_status()?;
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn result_status(response: reqwest::Response) -> ServiceResult {
        let response = response.error_for_status()?;
        let body = response.bytes().await?;
        parse_result_status(&body)
    }

    async fn job_action(&self, session_id: &str, job_name: &str, verb: JobVerb) -> ServiceResult {
        let path = format!(
            "/api/sessions/{}/jobs/{}/{}",
            session_id,
            job_name,
            verb.as_str()
        );
        let response = self.http.post(self.url(&path)).send().await?;
        Self::result_status(response).await
    }

    async fn delete<T: Serialize + ?Sized>(&self, path: &str, payload: &T) -> ServiceResult {
        let response = self
            .http
            .delete(self.url(path))
            .json(payload)
            .send()
            .await?;
        Self::result_status(response).await
    }

    /// Jobs visible on a session. Hosts use these reads to resolve a
    /// selected entity into the payload a management call needs.
    pub async fn jobs(&self, session_id: &str) -> Result<Vec<JobInfo>, ClientError> {
        self.get(&format!("/api/sessions/{}/jobs", session_id)).await
    }

    pub async fn alerts(&self, session_id: &str) -> Result<Vec<AlertInfo>, ClientError> {
        self.get(&format!("/api/sessions/{}/alerts", session_id))
            .await
    }

    pub async fn operators(&self, session_id: &str) -> Result<Vec<OperatorInfo>, ClientError> {
        self.get(&format!("/api/sessions/{}/operators", session_id))
            .await
    }

    pub async fn proxies(&self, session_id: &str) -> Result<Vec<ProxyInfo>, ClientError> {
        self.get(&format!("/api/sessions/{}/proxies", session_id))
            .await
    }

    pub async fn job_history(
        &self,
        session_id: &str,
        job_name: &str,
    ) -> Result<JobHistoryInfo, ClientError> {
        self.get(&format!(
            "/api/sessions/{}/jobs/{}/history",
            session_id, job_name
        ))
        .await
    }
}

#[async_trait]
impl JobManagementService for AgentClient {
    async fn run_job(&self, session_id: &str, job_name: &str) -> ServiceResult {
        self.job_action(session_id, job_name, JobVerb::Run).await
    }

    async fn stop_job(&self, session_id: &str, job_name: &str) -> ServiceResult {
        self.job_action(session_id, job_name, JobVerb::Stop).await
    }

    async fn delete_job(&self, session_id: &str, job: &JobInfo) -> ServiceResult {
        let path = format!("/api/sessions/{}/jobs/{}", session_id, job.name);
        self.delete(&path, job).await
    }

    async fn delete_alert(&self, session_id: &str, alert: &AlertInfo) -> ServiceResult {
        let path = format!("/api/sessions/{}/alerts/{}", session_id, alert.name);
        self.delete(&path, alert).await
    }

    async fn delete_operator(&self, session_id: &str, operator: &OperatorInfo) -> ServiceResult {
        let path = format!("/api/sessions/{}/operators/{}", session_id, operator.name);
        self.delete(&path, operator).await
    }

    async fn delete_proxy(&self, session_id: &str, proxy: &ProxyInfo) -> ServiceResult {
        let path = format!(
            "/api/sessions/{}/proxies/{}",
            session_id, proxy.account_name
        );
        self.delete(&path, proxy).await
    }
}

/// Decode a result-status body. An empty body is an answer with no result
/// object; anything non-empty must parse.
fn parse_result_status(body: &[u8]) -> ServiceResult {
    if body.is_empty() {
        return Ok(None);
    }
    Ok(Some(serde_json::from_slice(body)?))
}
