//! Configuration loading for the renderer.
//!
//! Renderer settings can be loaded from a TOML table; every field has a
//! default so an empty document is valid.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default number of events shown.
pub const DEFAULT_MAX_EVENTS: usize = 10;

/// Default prefix for body lines.
pub const DEFAULT_BULLET: &str = "- ";

/// Renderer configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Maximum number of events rendered after the header
    pub max_events: usize,
    /// Prefix written before each formatted event
    pub bullet: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_events: DEFAULT_MAX_EVENTS,
            bullet: DEFAULT_BULLET.to_string(),
        }
    }
}

impl RenderConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::IoError)?;
        Self::from_str(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::TomlError)
    }

    /// Returns this configuration as a TOML string.
    pub fn to_toml(&self) -> Result<String, TomlSerializeError> {
        toml::to_string_pretty(self).map_err(TomlSerializeError)
    }

    /// Returns a copy with a different event limit.
    pub fn with_max_events(mut self, max_events: usize) -> Self {
        self.max_events = max_events;
        self
    }

    /// Effective limit; zero is treated as one.
    pub fn effective_max_events(&self) -> usize {
        self.max_events.max(1)
    }
}

/// Errors that can occur during configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// IO error reading config file
    IoError(std::io::Error),
    /// Error parsing TOML config
    TomlError(toml::de::Error),
}

/// Error that can occur during TOML serialization.
#[derive(Debug)]
pub struct TomlSerializeError(pub toml::ser::Error);

impl std::fmt::Display for TomlSerializeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TOML serialize error: {}", self.0)
    }
}

impl std::error::Error for TomlSerializeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::TomlError(e) => write!(f, "TOML parse error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::IoError(e) => Some(e),
            ConfigError::TomlError(e) => Some(e),
        }
    }
}
