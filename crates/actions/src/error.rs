use thiserror::Error;

#[derive(Debug, Error)]
pub enum ActionError {
    /// No handler registered under the dispatched id.
    #[error("no action registered with id '{0}'")]
    UnknownAction(String),
    /// The supplied context is not the shape this handler operates on.
    #[error("action '{0}' does not apply to the given context")]
    ContextMismatch(&'static str),
    /// A host delegate (view method or delegated command) failed. Passed
    /// through unmodified for the host to surface.
    #[error(transparent)]
    Host(#[from] anyhow::Error),
}
