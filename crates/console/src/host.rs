use std::io::Write;

use actions::handlers::steps::OPEN_NEW_STEP_DIALOG;
use actions::{CommandExecutor, ManagementView, NotificationChannel, Severity};
use async_trait::async_trait;
use client::JobInfo;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Renders notifications and confirmation prompts on the controlling
/// terminal.
pub struct TerminalChannel;

#[async_trait]
impl NotificationChannel for TerminalChannel {
    fn notify(&self, severity: Severity, message: &str) -> anyhow::Result<()> {
        match severity {
            Severity::Info => println!("{}", message),
            Severity::Error => eprintln!("error: {}", message),
        }
        Ok(())
    }

    async fn confirm(
        &self,
        message: &str,
        affirm_label: &str,
        cancel_label: &str,
    ) -> anyhow::Result<bool> {
        println!("{}", message);
        print!("[y] {}  [N] {}: ", affirm_label, cancel_label);
        std::io::stdout().flush()?;

        let mut line = String::new();
        BufReader::new(tokio::io::stdin()).read_line(&mut line).await?;
        Ok(matches!(line.trim(), "y" | "Y" | "yes"))
    }
}

/// Stands in for the editor's management views on a terminal host. Holds
/// the jobs the host last listed; refreshing re-renders them.
pub struct ConsoleView {
    jobs: Vec<JobInfo>,
}

impl ConsoleView {
    pub fn new(jobs: Vec<JobInfo>) -> Self {
        Self { jobs }
    }
}

impl ManagementView for ConsoleView {
    fn refresh_jobs(&mut self) -> anyhow::Result<()> {
        for job in &self.jobs {
            let state = if job.enabled { "enabled" } else { "disabled" };
            println!("{:<32} {}", job.name, state);
        }
        println!("{} job(s).", self.jobs.len());
        Ok(())
    }

    fn open_create_job_dialog(&mut self) -> anyhow::Result<()> {
        println!("Job creation opens a dialog on editor hosts; this console has none.");
        Ok(())
    }

    fn open_create_alert_dialog(&mut self) -> anyhow::Result<()> {
        println!("Alert creation opens a dialog on editor hosts; this console has none.");
        Ok(())
    }

    fn open_create_operator_dialog(&mut self) -> anyhow::Result<()> {
        println!("Operator creation opens a dialog on editor hosts; this console has none.");
        Ok(())
    }

    fn open_create_proxy_dialog(&mut self) -> anyhow::Result<()> {
        println!("Proxy creation opens a dialog on editor hosts; this console has none.");
        Ok(())
    }
}

/// Handles the commands the dispatcher delegates back to the host.
pub struct ShellCommandExecutor;

#[async_trait]
impl CommandExecutor for ShellCommandExecutor {
    async fn execute_command(
        &self,
        command_id: &str,
        args: serde_json::Value,
    ) -> anyhow::Result<bool> {
        match command_id {
            OPEN_NEW_STEP_DIALOG => {
                let job = args["jobName"].as_str().unwrap_or("?");
                let step_id = args["stepId"].as_u64().unwrap_or(0);
                println!("New step for job '{}' would become step {}.", job, step_id);
                Ok(true)
            }
            other => anyhow::bail!("unsupported command: {}", other),
        }
    }
}
