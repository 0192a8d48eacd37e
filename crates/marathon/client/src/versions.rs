//! Version protocol
//!
//! Every configuration change produces a new version token. Rolling back is
//! expressed as setting an older token; there is no separate rollback call.

use crate::api::{app_path, decode, ApiClient};
use crate::client::Marathon;
use crate::error::MarathonResult;
use marathon_types::{ApplicationVersion, ApplicationVersions, DeploymentId};
use tracing::{debug, info};

impl<C: ApiClient> Marathon<C> {
    /// Version tokens of an application, in the order the scheduler reports them
    pub async fn application_versions(&self, name: &str) -> MarathonResult<Vec<String>> {
        debug!(app = %name, "Listing application versions");
        let path = format!("{}/versions", app_path(name));
        let versions: ApplicationVersions = decode(self.api().get(&path, None).await?)?;
        Ok(versions.versions)
    }

    pub async fn has_application_version(
        &self,
        name: &str,
        version: &str,
    ) -> MarathonResult<bool> {
        let versions = self.application_versions(name).await?;
        Ok(versions.iter().any(|v| v == version))
    }

    /// Redeploy the application at `version`
    pub async fn set_application_version(
        &self,
        name: &str,
        version: &str,
    ) -> MarathonResult<DeploymentId> {
        info!(app = %name, %version, "Changing application version");
        let body = serde_json::to_value(ApplicationVersion::new(version))?;
        decode(self.api().put(&app_path(name), None, &body).await?)
    }
}
