//! Client configuration

use crate::error::{MarathonError, MarathonResult};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable overriding the configured endpoint
pub const ENDPOINT_ENV: &str = "MARATHON_URL";

const DEFAULT_ENDPOINT: &str = "http://localhost:8080";
const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Connection settings for a Marathon endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the Marathon API
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// HTTP basic auth user
    #[serde(default)]
    pub username: Option<String>,

    /// HTTP basic auth password
    #[serde(default)]
    pub password: Option<String>,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_seconds() -> u64 {
    DEFAULT_TIMEOUT_SECONDS
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_seconds: default_timeout_seconds(),
            username: None,
            password: None,
        }
    }
}

impl ClientConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }

    /// Load configuration from file, falling back to defaults when it is absent
    pub fn load(path: Option<&str>) -> MarathonResult<Self> {
        let config_path = match path {
            Some(p) => PathBuf::from(p),
            None => Self::default_config_path()?,
        };

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)?;
            Self::from_toml(&contents)
        } else {
            Ok(ClientConfig::default())
        }
    }

    pub fn from_toml(contents: &str) -> MarathonResult<Self> {
        toml::from_str(contents).map_err(|e| MarathonError::Config(e.to_string()))
    }

    /// Apply `MARATHON_URL` when it is set and non-empty
    pub fn with_env_overrides(self) -> Self {
        self.with_endpoint_override(std::env::var(ENDPOINT_ENV).ok())
    }

    fn with_endpoint_override(mut self, endpoint: Option<String>) -> Self {
        if let Some(endpoint) = endpoint.filter(|e| !e.trim().is_empty()) {
            self.endpoint = endpoint;
        }
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Get the default configuration file path
    fn default_config_path() -> MarathonResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| MarathonError::Config("Cannot find config directory".into()))?;
        Ok(config_dir.join("marathon").join("config.toml"))
    }
}
