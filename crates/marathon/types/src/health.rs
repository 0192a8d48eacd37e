//! Health check configuration and reported results
//!
//! A [`HealthCheck`] is declared on an application; the scheduler evaluates it
//! against every task and reports a [`HealthCheckResult`] per task and check.

use crate::serde_helpers::lenient_timestamp;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Protocol used to probe a task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HealthCheckProtocol {
    Http,
    Https,
    Tcp,
    Command,
    MesosHttp,
    MesosHttps,
    MesosTcp,
    #[serde(untagged)]
    Other(String),
}

/// Shell command executed by a `COMMAND` health check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    pub value: String,
}

impl Command {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

/// Liveness probe declared on an application
///
/// Every optional field keeps explicit presence: `port_index: Some(0)` is the
/// first declared port, `None` leaves the choice to the scheduler.
///
/// Setters take `self` by value and return the updated check, so a shared
/// base check can be cloned and specialised without aliasing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthCheck {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<Command>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port_index: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_consecutive_failures: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<HealthCheckProtocol>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grace_period_seconds: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval_seconds: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_seconds: Option<u32>,

    #[serde(
        default,
        rename = "ignoreHttp1xx",
        skip_serializing_if = "Option::is_none"
    )]
    pub ignore_http1xx: Option<bool>,
}

impl Default for HealthCheck {
    /// HTTP check on the first port, root path, three strikes,
    /// 30s grace, probing every 10s with a 5s timeout.
    fn default() -> Self {
        Self {
            command: None,
            port_index: Some(0),
            port: None,
            path: Some(String::new()),
            max_consecutive_failures: Some(3),
            protocol: Some(HealthCheckProtocol::Http),
            grace_period_seconds: Some(30),
            interval_seconds: Some(10),
            timeout_seconds: Some(5),
            ignore_http1xx: None,
        }
    }
}

impl HealthCheck {
    pub fn with_command(mut self, command: Command) -> Self {
        self.command = Some(command);
        self
    }

    pub fn with_port_index(mut self, index: u32) -> Self {
        self.port_index = Some(index);
        self
    }

    pub fn with_port(mut self, port: u32) -> Self {
        self.port = Some(port);
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_max_consecutive_failures(mut self, failures: u32) -> Self {
        self.max_consecutive_failures = Some(failures);
        self
    }

    pub fn with_protocol(mut self, protocol: HealthCheckProtocol) -> Self {
        self.protocol = Some(protocol);
        self
    }

    pub fn with_grace_period_seconds(mut self, seconds: u32) -> Self {
        self.grace_period_seconds = Some(seconds);
        self
    }

    pub fn with_interval_seconds(mut self, seconds: u32) -> Self {
        self.interval_seconds = Some(seconds);
        self
    }

    pub fn with_timeout_seconds(mut self, seconds: u32) -> Self {
        self.timeout_seconds = Some(seconds);
        self
    }

    pub fn with_ignore_http1xx(mut self, ignore: bool) -> Self {
        self.ignore_http1xx = Some(ignore);
        self
    }
}

/// Outcome of one health check against one task, as reported by the scheduler
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthCheckResult {
    /// Whether the last probe succeeded
    pub alive: bool,

    #[serde(default)]
    pub consecutive_failures: u32,

    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub first_success: Option<DateTime<Utc>>,

    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub last_failure: Option<DateTime<Utc>>,

    #[serde(default)]
    pub last_failure_cause: Option<String>,

    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub last_success: Option<DateTime<Utc>>,

    /// Task the result belongs to
    #[serde(default)]
    pub task_id: String,
}
