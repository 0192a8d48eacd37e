//! Tasks reported for a running application

use crate::serde_helpers::{lenient_timestamp, null_as_default};
use crate::HealthCheckResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One running instance of an application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub ports: Vec<u32>,

    #[serde(
        default,
        deserialize_with = "lenient_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub staged_at: Option<DateTime<Utc>>,

    #[serde(
        default,
        deserialize_with = "lenient_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub started_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Empty until the scheduler has evaluated a health check for this task
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub health_check_results: Vec<HealthCheckResult>,
}

impl Task {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            app_id: None,
            host: None,
            ports: Vec::new(),
            staged_at: None,
            started_at: None,
            version: None,
            health_check_results: Vec::new(),
        }
    }

    /// First result reporting the task as not alive, if any
    pub fn first_failing_result(&self) -> Option<&HealthCheckResult> {
        self.health_check_results.iter().find(|result| !result.alive)
    }
}
