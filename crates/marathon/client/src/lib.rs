//! Marathon Client - Application operations against a Marathon scheduler
//!
//! Wraps the `/v2/apps` REST resource: list, inspect, create, update, scale,
//! restart and delete applications, walk their version history, and reduce
//! per-task health check results to a single verdict.
//!
//! ```no_run
//! use marathon_client::{ClientConfig, Marathon};
//! use marathon_types::{Application, HealthCheck};
//!
//! # async fn run() -> marathon_client::MarathonResult<()> {
//! let config = ClientConfig::load(None)?.with_env_overrides();
//! let marathon = Marathon::from_config(&config)?;
//!
//! let mut app = Application::new("/web");
//! app.command("./serve --port $PORT0")
//!     .cpu(0.5)
//!     .memory(128.0)
//!     .count(2)
//!     .health_check(HealthCheck::default().with_path("/health"));
//! marathon.create_application(&app).await?;
//!
//! let deployment = marathon.restart_application("/web", false).await?;
//! println!("restart queued as {}", deployment);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]

pub mod api;
pub mod assessment;
pub mod config;
pub mod error;
pub mod http;

mod applications;
mod client;
mod versions;

#[cfg(test)]
mod testing;

pub use api::{app_path, ApiClient, APPS_PATH};
pub use client::Marathon;
pub use config::ClientConfig;
pub use error::{ErrorKind, MarathonError, MarathonResult};
pub use http::HttpApiClient;
