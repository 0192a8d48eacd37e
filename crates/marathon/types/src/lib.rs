//! Marathon Types - Application documents for the Marathon scheduler
//!
//! These types mirror the JSON documents exchanged with Marathon's `/v2/apps`
//! resource. They are purely local: building an [`Application`] has no remote
//! effect until it is handed to an operation in `marathon-client`.
//!
//! ## Key Concepts
//!
//! - **Application**: A deployable workload description plus the runtime state
//!   the scheduler reports for it
//! - **Task**: One running instance of an application
//! - **HealthCheck**: Declarative liveness probe configuration
//! - **HealthCheckResult**: One reported probe outcome for a task
//! - **Container**: Execution environment (Docker image, network, volumes)
//! - **DeploymentId**: Handle for an asynchronous change in progress
//!
//! ## Builder styles
//!
//! [`Application`], [`Container`] and [`Docker`] are configured through
//! methods that mutate in place and return `&mut Self`. [`HealthCheck`] uses
//! value semantics: every `with_*` method consumes the check and returns the
//! updated copy.

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![cfg_attr(not(feature = "strict-docs"), allow(missing_docs))]

pub mod application;
pub mod container;
pub mod health;
pub mod ids;
pub mod task;

mod serde_helpers;

pub use application::{
    Application, ApplicationEnvelope, ApplicationList, ApplicationVersion, ApplicationVersions,
};
pub use container::{
    Container, ContainerType, Docker, DockerNetwork, PortMapping, PortProtocol, Volume, VolumeMode,
};
pub use health::{Command, HealthCheck, HealthCheckProtocol, HealthCheckResult};
pub use ids::DeploymentId;
pub use task::Task;
