//! Container-engine collaborator interface.
//!
//! The burn logic never talks to the Docker API directly; it drives a
//! [`ContainerEngine`], which lists resources of each kind and performs the
//! stop/remove calls. The production implementation is
//! [`docker::DockerEngine`], backed by bollard. Tests substitute an in-memory
//! fake.

pub mod docker;

pub use docker::DockerEngine;

use async_trait::async_trait;
use thiserror::Error;

/// Number of identifier characters shown in burn messages.
const SHORT_ID_LEN: usize = 12;

/// Errors surfaced by a container engine.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Docker daemon not available: {0}")]
    DaemonUnavailable(String),

    #[error("Docker API error: {0}")]
    Api(String),
}

/// A listed image. `id` is the full content-addressed identifier
/// (`sha256:...`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    pub id: String,
}

impl ImageRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// Display form of the identifier, without the digest prefix.
    pub fn short_id(&self) -> &str {
        short_id(&self.id)
    }
}

/// A listed container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerRef {
    pub id: String,
}

impl ContainerRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    pub fn short_id(&self) -> &str {
        short_id(&self.id)
    }
}

/// A listed network. The name decides whether it is a protected default;
/// removal goes by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkRef {
    pub id: String,
    pub name: String,
}

impl NetworkRef {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    pub fn short_id(&self) -> &str {
        short_id(&self.id)
    }
}

/// A listed volume. Volumes are identified by name alone and have no short
/// form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VolumeRef {
    pub name: String,
}

impl VolumeRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Truncates an identifier for display, stripping the `sha256:` digest
/// prefix image ids carry.
fn short_id(id: &str) -> &str {
    let bare = id.strip_prefix("sha256:").unwrap_or(id);
    &bare[..bare.len().min(SHORT_ID_LEN)]
}

/// The set of listing and removal operations the burn logic needs from a
/// container engine. Every call blocks the run until the daemon answers;
/// there is no concurrency at this layer.
#[async_trait]
pub trait ContainerEngine: Send + Sync {
    /// Lists images: every image when `all` is true, otherwise only dangling
    /// (untagged, unreferenced) ones.
    async fn list_images(&self, all: bool) -> Result<Vec<ImageRef>, EngineError>;

    /// Removes an image by full id.
    async fn remove_image(&self, id: &str, force: bool) -> Result<(), EngineError>;

    /// Lists containers, with the engine's default scope (running only for
    /// Docker).
    async fn list_containers(&self) -> Result<Vec<ContainerRef>, EngineError>;

    /// Stops a running container.
    async fn stop_container(&self, id: &str) -> Result<(), EngineError>;

    /// Removes a container by id.
    async fn remove_container(&self, id: &str, force: bool) -> Result<(), EngineError>;

    /// Lists all networks, defaults included.
    async fn list_networks(&self) -> Result<Vec<NetworkRef>, EngineError>;

    /// Removes a network by id.
    async fn remove_network(&self, id: &str) -> Result<(), EngineError>;

    /// Lists all volumes.
    async fn list_volumes(&self) -> Result<Vec<VolumeRef>, EngineError>;

    /// Removes a volume by name.
    async fn remove_volume(&self, name: &str, force: bool) -> Result<(), EngineError>;
}
