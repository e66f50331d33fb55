//! Action dispatch pipeline for the agent management console: host-visible
//! commands bound to contextual targets, with destructive-action
//! confirmation and user-facing result reporting.

pub mod confirm;
pub mod context;
pub mod error;
pub mod handlers;
pub mod notify;
pub mod registry;

#[cfg(test)]
pub(crate) mod testing;

pub use confirm::ConfirmationGate;
pub use context::{
    ActionContext, EntityInfo, EntityKind, JobContext, ManagementView, TargetContext,
};
pub use error::ActionError;
pub use notify::{NotificationChannel, Notifier, Severity};
pub use registry::{Action, ActionRegistry, CommandExecutor};
