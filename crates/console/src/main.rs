use std::sync::Arc;

use anyhow::{Context, Result, bail};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod host;

use actions::{ActionContext, ActionRegistry, EntityInfo, JobContext, TargetContext};
use client::AgentClient;
use config::ConsoleConfig;
use host::{ConsoleView, ShellCommandExecutor, TerminalChannel};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(command) = args.first() else {
        print_usage();
        return Ok(());
    };

    let config = ConsoleConfig::load()?;
    let client = Arc::new(AgentClient::new(config.agent_url()));
    let registry = ActionRegistry::new(
        client.clone(),
        Arc::new(TerminalChannel),
        Arc::new(ShellCommandExecutor),
    );

    let completed = run_command(
        &registry,
        &client,
        &config,
        command,
        args.get(1).map(String::as_str),
    )
    .await?;

    if !completed {
        std::process::exit(1);
    }
    Ok(())
}

async fn run_command(
    registry: &ActionRegistry,
    client: &AgentClient,
    config: &ConsoleConfig,
    command: &str,
    name: Option<&str>,
) -> Result<bool> {
    match command {
        "actions" => {
            for (id, label) in registry.entries() {
                println!("{:<28} {}", id, label);
            }
            Ok(true)
        }
        "refresh" => {
            let session_id = config.session_id()?;
            let jobs = client.jobs(&session_id).await?;
            let mut view = ConsoleView::new(jobs);
            let completed = registry
                .dispatch("jobaction.refresh", ActionContext::View(&mut view))
                .await?;
            Ok(completed)
        }
        "new-job" | "new-alert" | "new-operator" | "new-proxy" => {
            let id = match command {
                "new-job" => "jobaction.newJob",
                "new-alert" => "jobaction.newAlert",
                "new-operator" => "jobaction.newOperator",
                _ => "jobaction.newProxy",
            };
            let mut view = ConsoleView::new(Vec::new());
            let completed = registry
                .dispatch(id, ActionContext::View(&mut view))
                .await?;
            Ok(completed)
        }
        "run-job" | "stop-job" | "new-step" => {
            let name = required_name(command, name)?;
            let session_id = config.session_id()?;
            let job = find_named(client.jobs(&session_id).await?, name, "job", |job| {
                &job.name
            })?;
            let history = match client.job_history(&session_id, name).await {
                Ok(history) => Some(history),
                Err(e) => {
                    tracing::debug!("no history for '{}': {}", name, e);
                    None
                }
            };
            let context = JobContext {
                session_id,
                server_name: config.server_name(),
                job,
                history,
            };
            let id = match command {
                "run-job" => "jobaction.runJob",
                "stop-job" => "jobaction.stopJob",
                _ => "jobaction.newStep",
            };
            let completed = registry.dispatch(id, ActionContext::Job(context)).await?;
            Ok(completed)
        }
        "edit-job" | "edit-alert" | "edit-operator" | "edit-proxy" => {
            let id = match command {
                "edit-job" => "jobaction.editJob",
                "edit-alert" => "jobaction.editAlert",
                "edit-operator" => "jobaction.editOperator",
                _ => "jobaction.editProxy",
            };
            let mut view = ConsoleView::new(Vec::new());
            let completed = registry
                .dispatch(id, ActionContext::View(&mut view))
                .await?;
            Ok(completed)
        }
        "delete-job" => {
            let name = required_name(command, name)?;
            let session_id = config.session_id()?;
            let job = find_named(client.jobs(&session_id).await?, name, "job", |job| {
                &job.name
            })?;
            dispatch_delete(registry, "jobaction.deleteJob", session_id, EntityInfo::Job(job)).await
        }
        "delete-alert" => {
            let name = required_name(command, name)?;
            let session_id = config.session_id()?;
            let alert = find_named(client.alerts(&session_id).await?, name, "alert", |alert| {
                &alert.name
            })?;
            dispatch_delete(
                registry,
                "jobaction.deleteAlert",
                session_id,
                EntityInfo::Alert(alert),
            )
            .await
        }
        "delete-operator" => {
            let name = required_name(command, name)?;
            let session_id = config.session_id()?;
            let operator = find_named(
                client.operators(&session_id).await?,
                name,
                "operator",
                |operator| &operator.name,
            )?;
            dispatch_delete(
                registry,
                "jobaction.deleteOperator",
                session_id,
                EntityInfo::Operator(operator),
            )
            .await
        }
        "delete-proxy" => {
            let name = required_name(command, name)?;
            let session_id = config.session_id()?;
            let proxy = find_named(client.proxies(&session_id).await?, name, "proxy", |proxy| {
                &proxy.account_name
            })?;
            dispatch_delete(
                registry,
                "jobaction.deleteProxy",
                session_id,
                EntityInfo::Proxy(proxy),
            )
            .await
        }
        other => bail!("unknown command '{}'; run with no arguments for usage", other),
    }
}

async fn dispatch_delete(
    registry: &ActionRegistry,
    id: &str,
    session_id: String,
    target: EntityInfo,
) -> Result<bool> {
    let context = TargetContext { session_id, target };
    let completed = registry.dispatch(id, ActionContext::Target(context)).await?;
    Ok(completed)
}

fn required_name<'a>(command: &str, name: Option<&'a str>) -> Result<&'a str> {
    name.with_context(|| format!("usage: agent-console {} <name>", command))
}

fn find_named<T>(
    items: Vec<T>,
    name: &str,
    kind: &str,
    key: impl Fn(&T) -> &str,
) -> Result<T> {
    items
        .into_iter()
        .find(|item| key(item) == name)
        .with_context(|| format!("No {} named '{}' on this session", kind, name))
}

fn print_usage() {
    println!("agent-console <command> [name]");
    println!();
    println!("  actions                     list registered actions");
    println!("  refresh                     re-render the jobs view");
    println!("  run-job <name>              start a job");
    println!("  stop-job <name>             stop a running job");
    println!("  new-job | new-alert | new-operator | new-proxy");
    println!("  new-step <job>              delegate step creation");
    println!("  edit-job | edit-alert | edit-operator | edit-proxy <name>");
    println!("  delete-job <name>           delete after confirmation");
    println!("  delete-alert <name>");
    println!("  delete-operator <name>");
    println!("  delete-proxy <account>");
    println!();
    println!("Session comes from AGENT_SESSION or ~/.agent-console/config.json;");
    println!("the agent URL from AGENT_URL (default http://127.0.0.1:8723).");
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn,console=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
