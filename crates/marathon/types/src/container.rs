//! Container sub-document attached to an application
//!
//! The tree is strictly owned: an [`Application`](crate::Application) owns at
//! most one [`Container`], which owns its [`Docker`] descriptor and volumes.

use crate::serde_helpers::{is_zero, null_as_default};
use serde::{Deserialize, Serialize};

/// Container runtime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ContainerType {
    Docker,
    Mesos,
    #[serde(untagged)]
    Other(String),
}

/// Execution environment of an application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Container {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub container_type: Option<ContainerType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docker: Option<Docker>,

    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub volumes: Vec<Volume>,
}

impl Container {
    /// Docker container on a bridged network with no image set yet
    pub fn docker() -> Self {
        Self {
            container_type: Some(ContainerType::Docker),
            docker: Some(Docker::default()),
            volumes: Vec::new(),
        }
    }

    /// Mutable access to the Docker descriptor, creating it when absent
    pub fn docker_mut(&mut self) -> &mut Docker {
        self.docker.get_or_insert_with(Docker::default)
    }

    /// Mount `host_path` at `container_path`
    pub fn volume(
        &mut self,
        host_path: impl Into<String>,
        container_path: impl Into<String>,
        mode: VolumeMode,
    ) -> &mut Self {
        self.volumes.push(Volume {
            container_path: container_path.into(),
            host_path: host_path.into(),
            mode: Some(mode),
        });
        self
    }
}

/// Volume access mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolumeMode {
    #[serde(rename = "RO")]
    ReadOnly,
    #[serde(rename = "RW")]
    ReadWrite,
    #[serde(untagged)]
    Other(String),
}

/// Volume mounted into the container
///
/// Persistent and external volumes have no host path; their extra settings
/// are not modelled and are dropped on decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Volume {
    #[serde(default)]
    pub container_path: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub host_path: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<VolumeMode>,
}

/// Docker network mode
///
/// Modes introduced by newer schedulers, such as `USER`, decode as
/// [`DockerNetwork::Other`] and are sent back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DockerNetwork {
    Bridge,
    Host,
    None,
    #[serde(untagged)]
    Other(String),
}

/// Docker-specific container settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Docker {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub image: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<DockerNetwork>,

    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub port_mappings: Vec<PortMapping>,
}

impl Default for Docker {
    fn default() -> Self {
        Self {
            image: String::new(),
            network: Some(DockerNetwork::Bridge),
            port_mappings: Vec::new(),
        }
    }
}

impl Docker {
    /// Set the image to run
    pub fn container(&mut self, image: impl Into<String>) -> &mut Self {
        self.image = image.into();
        self
    }

    pub fn bridged(&mut self) -> &mut Self {
        self.network = Some(DockerNetwork::Bridge);
        self
    }

    /// Expose a TCP container port on a scheduler-assigned host port
    pub fn expose(&mut self, port: u32) -> &mut Self {
        self.expose_port(port, 0, 0, PortProtocol::Tcp)
    }

    /// Expose a UDP container port on a scheduler-assigned host port
    pub fn expose_udp(&mut self, port: u32) -> &mut Self {
        self.expose_port(port, 0, 0, PortProtocol::Udp)
    }

    pub fn expose_port(
        &mut self,
        container_port: u32,
        host_port: u32,
        service_port: u32,
        protocol: PortProtocol,
    ) -> &mut Self {
        self.port_mappings.push(PortMapping {
            container_port,
            host_port,
            service_port,
            protocol,
        });
        self
    }
}

/// Transport protocol of a port mapping
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortProtocol {
    #[default]
    Tcp,
    Udp,
    /// Combined or unrecognised values such as `tcp,udp`
    #[serde(untagged)]
    Other(String),
}

/// Container port published on the host
///
/// A host port of `0` asks the scheduler to pick one, so it is always sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortMapping {
    #[serde(default, skip_serializing_if = "is_zero")]
    pub container_port: u32,

    #[serde(default)]
    pub host_port: u32,

    #[serde(default, skip_serializing_if = "is_zero")]
    pub service_port: u32,

    #[serde(default)]
    pub protocol: PortProtocol,
}
