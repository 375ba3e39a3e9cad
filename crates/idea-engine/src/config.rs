//! Engine configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file unreadable
    #[error("cannot read config: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid TOML
    #[error("cannot parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Engine configuration
///
/// Two agent identities are used: a manager agent that generates ideas and
/// an email agent that delivers campaigns. Both are invoked through the same
/// gateway endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Agent id for idea generation
    pub manager_agent_id: String,
    /// Agent id for email delivery
    pub email_agent_id: String,
    /// Schedule id of the daily generation run
    pub schedule_id: String,
    /// Base URL of the agent gateway
    pub gateway_url: String,
    /// Base URL of the schedule service
    pub schedule_url: String,
    /// Directory backing the durable store
    pub storage_dir: PathBuf,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            manager_agent_id: "69959f9fa88c1b2285b16c7d".to_string(),
            email_agent_id: "69959fbbe6a5282cfa0be109".to_string(),
            schedule_id: "69959fc3399dfadeac379e2c".to_string(),
            gateway_url: "http://127.0.0.1:8900".to_string(),
            schedule_url: "http://127.0.0.1:8901".to_string(),
            storage_dir: PathBuf::from(".idea-engine"),
        }
    }
}

impl EngineConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    ///
    /// Missing keys fall back to their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }

    /// With gateway URL
    #[inline]
    #[must_use]
    pub fn with_gateway_url(mut self, url: impl Into<String>) -> Self {
        self.gateway_url = url.into();
        self
    }

    /// With storage directory
    #[inline]
    #[must_use]
    pub fn with_storage_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.storage_dir = dir.into();
        self
    }
}
