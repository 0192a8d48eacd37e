//! Application health verdict
//!
//! Health is "no evidence of failure": an application without health checks
//! or without tasks is healthy, and a task the scheduler has not evaluated yet
//! counts as passing. This can report a freshly scaled application as healthy
//! before its new tasks have been probed.

use crate::api::ApiClient;
use crate::client::Marathon;
use crate::error::{MarathonError, MarathonResult};
use marathon_types::{Application, Task};
use tracing::{debug, warn};

/// First task with a result reporting it not alive
///
/// Scans tasks and their results in order and stops at the first failure.
/// Always `None` when the application declares no health checks or has no
/// tasks.
pub fn failing_task(application: &Application) -> Option<&Task> {
    if !application.has_health_checks() || !application.has_tasks() {
        return None;
    }

    application
        .tasks
        .iter()
        .find(|task| task.first_failing_result().is_some())
}

/// Whether no task of `application` reports a failed health check
pub fn is_healthy(application: &Application) -> bool {
    failing_task(application).is_none()
}

impl<C: ApiClient> Marathon<C> {
    /// Health verdict for the application `name`
    ///
    /// Fails with [`MarathonError::NotFound`] when no application has this id.
    pub async fn application_ok(&self, name: &str) -> MarathonResult<bool> {
        if !self.has_application(name).await? {
            return Err(MarathonError::NotFound(name.to_string()));
        }

        let application = self.application(name).await?;
        match failing_task(&application) {
            Some(task) => {
                warn!(app = %name, task = %task.id, "Application has a failing health check");
                Ok(false)
            }
            None => {
                debug!(
                    app = %name,
                    health_checks = application.health_checks.len(),
                    tasks = application.tasks.len(),
                    "Application healthy"
                );
                Ok(true)
            }
        }
    }
}
