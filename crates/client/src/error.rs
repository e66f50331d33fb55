use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("malformed agent response: {0}")]
    Decode(#[from] serde_json::Error),
}
