//! Identifiers handed back by the scheduler

use serde::{Deserialize, Serialize};
use std::fmt;

/// Handle for an asynchronous deployment started by a mutating call
///
/// Marathon answers restarts, updates and version changes with the id of the
/// deployment it queued plus the application version that deployment will
/// produce. The client never tracks the deployment itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentId {
    /// Opaque deployment identifier
    #[serde(rename = "deploymentId")]
    pub id: String,

    /// Version token the deployment targets
    #[serde(default)]
    pub version: String,
}

impl DeploymentId {
    pub fn new(id: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            version: version.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for DeploymentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}
