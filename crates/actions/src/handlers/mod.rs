pub mod alerts;
pub mod jobs;
pub mod operators;
pub mod proxies;
pub mod steps;

use client::ServiceResult;

use crate::context::EntityKind;
use crate::notify::Notifier;

pub(crate) const UNKNOWN_ERROR: &str = "Unknown error";

/// Interpret a run/stop outcome: success notifies `"{name}: {phrase}"` at
/// info severity and completes true; every other outcome (structured
/// failure, missing result, transport fault) notifies once at error
/// severity and completes false.
pub(crate) fn report_job_outcome(
    notifier: &Notifier,
    job_name: &str,
    success_phrase: &str,
    outcome: ServiceResult,
) -> bool {
    match outcome {
        Ok(Some(result)) if result.success => {
            notifier.info(&format!("{}: {}", job_name, success_phrase));
            true
        }
        Ok(Some(result)) => {
            notifier.error(result.error_message.as_deref().unwrap_or(UNKNOWN_ERROR));
            false
        }
        Ok(None) => {
            notifier.error(UNKNOWN_ERROR);
            false
        }
        Err(e) => {
            notifier.error(&e.to_string());
            false
        }
    }
}

/// Failure message for a confirmed delete, or None when it succeeded.
pub(crate) fn delete_failure(kind: EntityKind, name: &str, outcome: ServiceResult) -> Option<String> {
    let detail = match outcome {
        Ok(Some(result)) if result.success => return None,
        Ok(Some(result)) => result
            .error_message
            .unwrap_or_else(|| UNKNOWN_ERROR.to_string()),
        Ok(None) => UNKNOWN_ERROR.to_string(),
        Err(e) => e.to_string(),
    };
    Some(format!(
        "Could not delete {} '{}'.\nError: {}",
        kind, name, detail
    ))
}
