//! Application documents
//!
//! An [`Application`] is both the configuration submitted to the scheduler and
//! the snapshot read back from it. Runtime fields (`tasks`, `tasks_running`,
//! `tasks_staged`, `version`) are only ever filled in by the scheduler.

use crate::serde_helpers::null_as_default;
use crate::{Container, HealthCheck, Task};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A deployable workload and its reported runtime state
///
/// Configure it through the chained setters, which mutate in place:
///
/// ```
/// use marathon_types::Application;
///
/// let mut app = Application::new("/web");
/// app.cpu(0.5).memory(128.0).count(2).arg("--port").arg("8080");
/// assert_eq!(app.args, vec!["--port", "8080"]);
/// ```
///
/// Nothing is validated locally; the scheduler rejects what it cannot run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    /// Unique application path, the sole key for every remote lookup
    #[serde(default)]
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cmd: Option<String>,

    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub args: Vec<String>,

    /// Placement constraints such as `["hostname", "UNIQUE"]`
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub constraints: Vec<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container: Option<Container>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpus: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disk: Option<f64>,

    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "HashMap::is_empty"
    )]
    pub env: HashMap<String, String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub executor: Option<String>,

    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub health_checks: Vec<HealthCheck>,

    /// Desired number of running tasks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instances: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mem: Option<f64>,

    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub tasks: Vec<Task>,

    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub ports: Vec<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub require_ports: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backoff_factor: Option<f64>,

    /// Applications that must be deployed before this one
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub dependencies: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tasks_running: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tasks_staged: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,

    /// Artifacts fetched into the sandbox before the task starts
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub uris: Vec<String>,

    /// Opaque version token, normally a timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl Application {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn name(&mut self, id: impl Into<String>) -> &mut Self {
        self.id = id.into();
        self
    }

    pub fn command(&mut self, cmd: impl Into<String>) -> &mut Self {
        self.cmd = Some(cmd.into());
        self
    }

    pub fn arg(&mut self, argument: impl Into<String>) -> &mut Self {
        self.args.push(argument.into());
        self
    }

    pub fn cpu(&mut self, cpus: f64) -> &mut Self {
        self.cpus = Some(cpus);
        self
    }

    /// Memory in MiB
    pub fn memory(&mut self, mem: f64) -> &mut Self {
        self.mem = Some(mem);
        self
    }

    /// Disk in MiB
    pub fn storage(&mut self, disk: f64) -> &mut Self {
        self.disk = Some(disk);
        self
    }

    pub fn count(&mut self, instances: u32) -> &mut Self {
        self.instances = Some(instances);
        self
    }

    pub fn depends_on(&mut self, id: impl Into<String>) -> &mut Self {
        self.dependencies.push(id.into());
        self
    }

    /// Set an environment variable, replacing any previous value
    pub fn add_env(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.env.insert(name.into(), value.into());
        self
    }

    pub fn constraint<I, S>(&mut self, parts: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.constraints
            .push(parts.into_iter().map(Into::into).collect::<Vec<String>>());
        self
    }

    pub fn container(&mut self, container: Container) -> &mut Self {
        self.container = Some(container);
        self
    }

    pub fn health_check(&mut self, check: HealthCheck) -> &mut Self {
        self.health_checks.push(check);
        self
    }

    pub fn port(&mut self, port: u32) -> &mut Self {
        self.ports.push(port);
        self
    }

    pub fn require_ports(&mut self, require: bool) -> &mut Self {
        self.require_ports = Some(require);
        self
    }

    pub fn uri(&mut self, uri: impl Into<String>) -> &mut Self {
        self.uris.push(uri.into());
        self
    }

    pub fn user(&mut self, user: impl Into<String>) -> &mut Self {
        self.user = Some(user.into());
        self
    }

    pub fn executor(&mut self, executor: impl Into<String>) -> &mut Self {
        self.executor = Some(executor.into());
        self
    }

    pub fn backoff_factor(&mut self, factor: f64) -> &mut Self {
        self.backoff_factor = Some(factor);
        self
    }

    pub fn has_health_checks(&self) -> bool {
        !self.health_checks.is_empty()
    }

    pub fn has_tasks(&self) -> bool {
        !self.tasks.is_empty()
    }
}

/// `GET /v2/apps` response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApplicationList {
    #[serde(default, deserialize_with = "null_as_default")]
    pub apps: Vec<Application>,
}

/// `GET /v2/apps/{id}` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationEnvelope {
    pub app: Application,
}

/// `GET /v2/apps/{id}/versions` response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApplicationVersions {
    #[serde(default, deserialize_with = "null_as_default")]
    pub versions: Vec<String>,
}

/// Body of a version change request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationVersion {
    pub version: String,
}

impl ApplicationVersion {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HealthCheckResult, VolumeMode};
    use serde_json::json;

    #[test]
    fn test_builder_serializes_only_set_fields() {
        let mut app = Application::default();
        app.name("/web")
            .cpu(0.25)
            .memory(64.0)
            .count(2)
            .depends_on("/db")
            .arg("--verbose")
            .add_env("MODE", "production");

        let value = serde_json::to_value(&app).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "/web",
                "cpus": 0.25,
                "mem": 64.0,
                "instances": 2,
                "dependencies": ["/db"],
                "args": ["--verbose"],
                "env": { "MODE": "production" }
            })
        );
    }

    #[test]
    fn test_collections_start_empty_and_grow_in_order() {
        let mut app = Application::new("/worker");
        assert!(app.args.is_empty());
        assert!(app.dependencies.is_empty());
        assert!(app.env.is_empty());

        app.arg("a").arg("b").depends_on("/x").depends_on("/y");
        assert_eq!(app.args, vec!["a", "b"]);
        assert_eq!(app.dependencies, vec!["/x", "/y"]);
    }

    #[test]
    fn test_add_env_replaces_existing_key() {
        let mut app = Application::new("/web");
        app.add_env("LEVEL", "debug").add_env("LEVEL", "info");
        assert_eq!(app.env.len(), 1);
        assert_eq!(app.env["LEVEL"], "info");
    }

    #[test]
    fn test_zero_instances_is_not_omitted() {
        let mut app = Application::new("/web");
        app.count(0);
        let value = serde_json::to_value(&app).unwrap();
        assert_eq!(value, json!({ "id": "/web", "instances": 0 }));
    }

    #[test]
    fn test_full_configuration() {
        let mut container = Container::docker();
        container
            .volume("/data", "/var/lib/app", VolumeMode::ReadOnly)
            .docker_mut()
            .container("registry.local/web:3")
            .expose(8080);

        let mut app = Application::new("/web");
        app.container(container)
            .health_check(HealthCheck::default().with_path("/health"))
            .constraint(["hostname", "UNIQUE"])
            .uri("https://artifacts.local/web.tgz")
            .require_ports(true)
            .backoff_factor(1.15);

        let value = serde_json::to_value(&app).unwrap();
        assert_eq!(value["constraints"], json!([["hostname", "UNIQUE"]]));
        assert_eq!(value["container"]["docker"]["image"], json!("registry.local/web:3"));
        assert_eq!(value["healthChecks"][0]["path"], json!("/health"));
        assert_eq!(value["requirePorts"], json!(true));
        assert_eq!(value["backoffFactor"], json!(1.15));
        assert!(value.get("tasks").is_none());
    }

    #[test]
    fn test_decode_scheduler_snapshot_with_nulls() {
        let envelope: ApplicationEnvelope = serde_json::from_value(json!({
            "app": {
                "id": "/web",
                "cmd": null,
                "args": null,
                "constraints": [],
                "container": null,
                "cpus": 0.5,
                "dependencies": null,
                "env": null,
                "executor": "",
                "healthChecks": [{ "protocol": "TCP", "portIndex": 0 }],
                "instances": 1,
                "mem": 256.0,
                "ports": [10000],
                "tasks": [{
                    "id": "web.1",
                    "healthCheckResults": [{ "alive": true, "taskId": "web.1" }]
                }],
                "tasksRunning": 1,
                "tasksStaged": 0,
                "uris": [],
                "user": null,
                "version": "2015-06-25T11:59:58.000Z"
            }
        }))
        .unwrap();

        let app = envelope.app;
        assert_eq!(app.id, "/web");
        assert!(app.args.is_empty());
        assert!(app.env.is_empty());
        assert!(app.dependencies.is_empty());
        assert!(app.container.is_none());
        assert!(app.has_health_checks());
        assert_eq!(app.tasks_running, Some(1));
        assert_eq!(
            app.tasks[0].health_check_results,
            vec![HealthCheckResult {
                alive: true,
                consecutive_failures: 0,
                first_success: None,
                last_failure: None,
                last_failure_cause: None,
                last_success: None,
                task_id: "web.1".into(),
            }]
        );
        assert_eq!(app.version.as_deref(), Some("2015-06-25T11:59:58.000Z"));
    }

    #[test]
    fn test_version_body() {
        let body = serde_json::to_value(ApplicationVersion::new("2015-01-01T00:00:00.000Z")).unwrap();
        assert_eq!(body, json!({ "version": "2015-01-01T00:00:00.000Z" }));
    }

    #[test]
    fn test_decode_mixed_application_list() {
        let list: ApplicationList = serde_json::from_value(json!({
            "apps": [
                { "id": "/web", "instances": 2 },
                {
                    "id": "/overlay",
                    "container": {
                        "type": "DOCKER",
                        "docker": {
                            "image": "dns:1",
                            "network": "USER",
                            "portMappings": [{ "containerPort": 53, "hostPort": 0, "protocol": "tcp,udp" }]
                        },
                        "volumes": [{ "containerPath": "data", "mode": "RW", "persistent": { "size": 1024 } }]
                    }
                },
                {
                    "id": "/batch",
                    "tasks": [{
                        "id": "batch.1",
                        "stagedAt": "",
                        "healthCheckResults": [{ "alive": true, "taskId": "batch.1", "lastSuccess": "" }]
                    }]
                }
            ]
        }))
        .unwrap();

        let ids: Vec<&str> = list.apps.iter().map(|app| app.id.as_str()).collect();
        assert_eq!(ids, vec!["/web", "/overlay", "/batch"]);
        assert!(list.apps[2].tasks[0].health_check_results[0].last_success.is_none());
    }
}
