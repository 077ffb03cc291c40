//! Application configuration.
//!
//! Loaded from an optional TOML file, then overridden by command-line flags.

use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

use activity_render::{ConfigError, RenderConfig};

pub const DEFAULT_BASE_URL: &str = "https://api.github.com";
pub const DEFAULT_USER_AGENT: &str = "github-activity-cli";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// Events API settings
    #[serde(default)]
    pub api: ApiConfig,
    /// Output settings
    #[serde(default)]
    pub render: RenderConfig,
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::IoError)?;
        Self::from_str(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::TomlError)
    }

    /// Loads from `path` when given, otherwise returns defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}

/// Events API settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the REST API
    pub base_url: String,
    /// User-Agent header; the API rejects requests without one
    pub user_agent: String,
    /// Whole-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
