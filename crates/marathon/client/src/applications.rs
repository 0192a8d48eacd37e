//! Application operations
//!
//! Mutating calls return as soon as the scheduler accepts them. Where
//! Marathon hands back a [`DeploymentId`], it is passed through for the caller
//! to track; nothing here waits for a deployment to finish.

use crate::api::{app_path, decode, force_query, ApiClient, APPS_PATH};
use crate::client::Marathon;
use crate::error::{MarathonError, MarathonResult};
use marathon_types::{Application, ApplicationEnvelope, ApplicationList, DeploymentId};
use serde_json::json;
use tracing::{debug, info};

impl<C: ApiClient> Marathon<C> {
    /// Every application known to the scheduler
    pub async fn applications(&self) -> MarathonResult<Vec<Application>> {
        debug!("Listing applications");
        let list: ApplicationList = decode(self.api().get(APPS_PATH, None).await?)?;
        Ok(list.apps)
    }

    /// Ids of every application known to the scheduler
    pub async fn application_names(&self) -> MarathonResult<Vec<String>> {
        Ok(self
            .applications()
            .await?
            .into_iter()
            .map(|app| app.id)
            .collect())
    }

    /// Current snapshot of one application
    pub async fn application(&self, name: &str) -> MarathonResult<Application> {
        debug!(app = %name, "Fetching application");
        let envelope: ApplicationEnvelope = match self.api().get(&app_path(name), None).await {
            Ok(value) => decode(value)?,
            Err(MarathonError::NotFound(_)) => {
                return Err(MarathonError::NotFound(name.to_string()))
            }
            Err(e) => return Err(e),
        };
        Ok(envelope.app)
    }

    /// Whether an application with exactly this id exists
    ///
    /// Answered from the full application list, so `name` must match the
    /// stored id verbatim, leading `/` included.
    pub async fn has_application(&self, name: &str) -> MarathonResult<bool> {
        if name.is_empty() {
            return Err(MarathonError::InvalidArgument(
                "application name must not be empty".into(),
            ));
        }

        debug!(app = %name, "Checking application exists");
        let found = self
            .application_names()
            .await?
            .iter()
            .any(|id| id == name);
        Ok(found)
    }

    /// Submit a new application
    ///
    /// Fails with [`MarathonError::AlreadyExists`] when the id is taken; use
    /// [`update_application`](Self::update_application) to change an
    /// existing one.
    pub async fn create_application(&self, application: &Application) -> MarathonResult<()> {
        info!(app = %application.id, "Creating application");
        let body = serde_json::to_value(application)?;

        match self.api().post(APPS_PATH, None, &body).await {
            Ok(_) => Ok(()),
            Err(MarathonError::Api { status: 409, .. }) => {
                Err(MarathonError::AlreadyExists(application.id.clone()))
            }
            Err(e) => Err(e),
        }
    }

    /// Replace the stored configuration of an existing application
    pub async fn update_application(
        &self,
        application: &Application,
        force: bool,
    ) -> MarathonResult<DeploymentId> {
        info!(app = %application.id, force, "Updating application");
        let body = serde_json::to_value(application)?;
        let path = app_path(&application.id);
        decode(self.api().put(&path, force_query(force), &body).await?)
    }

    pub async fn delete_application(&self, name: &str) -> MarathonResult<()> {
        info!(app = %name, "Deleting application");
        self.api().delete(&app_path(name), None).await?;
        Ok(())
    }

    /// Change the desired instance count
    ///
    /// Sends only the id and instance count so the rest of the stored
    /// configuration is left as it is.
    pub async fn scale_application_instances(
        &self,
        name: &str,
        instances: u32,
    ) -> MarathonResult<()> {
        info!(app = %name, instances, "Scaling application");
        let mut changes = Application::new(name);
        changes.count(instances);
        let body = serde_json::to_value(&changes)?;

        self.api().put(&app_path(name), None, &body).await?;
        Ok(())
    }

    /// Rolling restart of every task
    ///
    /// `force` lets the restart override a deployment already in flight.
    pub async fn restart_application(
        &self,
        name: &str,
        force: bool,
    ) -> MarathonResult<DeploymentId> {
        info!(app = %name, force, "Restarting application");
        let path = format!("{}/restart", app_path(name));
        decode(self.api().post(&path, force_query(force), &json!({})).await?)
    }
}
