use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Console configuration, stored at ~/.agent-console/config.json.
/// Environment variables override the file.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConsoleConfig {
    #[serde(default)]
    pub agent_url: Option<String>,
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub server_name: Option<String>,
}

impl ConsoleConfig {
    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {:?}", path))?;
        serde_json::from_str(&raw).with_context(|| format!("Malformed config at {:?}", path))
    }

    fn path() -> Result<PathBuf> {
        Ok(dirs::home_dir()
            .context("No home directory")?
            .join(".agent-console")
            .join("config.json"))
    }

    pub fn agent_url(&self) -> String {
        std::env::var("AGENT_URL")
            .ok()
            .or_else(|| self.agent_url.clone())
            .unwrap_or_else(|| "http://127.0.0.1:8723".to_string())
    }

    pub fn session_id(&self) -> Result<String> {
        std::env::var("AGENT_SESSION")
            .ok()
            .or_else(|| self.session_id.clone())
            .context("No session: set AGENT_SESSION or session_id in the config file")
    }

    pub fn server_name(&self) -> String {
        self.server_name
            .clone()
            .unwrap_or_else(|| "agent".to_string())
    }
}
