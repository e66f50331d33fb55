use serde::{Deserialize, Serialize};

/// Outcome the agent reports for a single management operation.
///
/// When `success` is false the agent is expected to say why; a missing
/// message is normalized at the reporting boundary, never treated as
/// success.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}
