//! Docker API engine using the bollard crate.

use std::collections::HashMap;

use async_trait::async_trait;
use bollard::container::{ListContainersOptions, RemoveContainerOptions, StopContainerOptions};
use bollard::image::{ListImagesOptions, RemoveImageOptions};
use bollard::network::ListNetworksOptions;
use bollard::volume::{ListVolumesOptions, RemoveVolumeOptions};
use bollard::Docker;

use super::{ContainerEngine, ContainerRef, EngineError, ImageRef, NetworkRef, VolumeRef};

/// Grace period before a stopped container is killed, in seconds.
const STOP_TIMEOUT_SECS: i64 = 10;

/// Container engine backed by the local Docker daemon.
pub struct DockerEngine {
    docker: Docker,
}

impl DockerEngine {
    /// Connects to the local Docker daemon.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::DaemonUnavailable` if the daemon is not
    /// accessible.
    pub fn connect() -> Result<Self, EngineError> {
        let docker = Docker::connect_with_local_defaults()
            .map_err(|e| EngineError::DaemonUnavailable(format!("Failed to connect: {e}")))?;

        Ok(Self { docker })
    }

    /// Creates an engine from an existing bollard Docker instance.
    pub fn from_docker(docker: Docker) -> Self {
        Self { docker }
    }
}

#[async_trait]
impl ContainerEngine for DockerEngine {
    async fn list_images(&self, all: bool) -> Result<Vec<ImageRef>, EngineError> {
        let mut filters = HashMap::new();
        if !all {
            filters.insert("dangling".to_string(), vec!["true".to_string()]);
        }

        let options = ListImagesOptions {
            all,
            filters,
            ..Default::default()
        };

        let images = self
            .docker
            .list_images(Some(options))
            .await
            .map_err(|e| EngineError::Api(format!("Failed to list images: {e}")))?;

        Ok(images.into_iter().map(|i| ImageRef::new(i.id)).collect())
    }

    async fn remove_image(&self, id: &str, force: bool) -> Result<(), EngineError> {
        let options = RemoveImageOptions {
            force,
            ..Default::default()
        };

        self.docker
            .remove_image(id, Some(options), None)
            .await
            .map_err(|e| EngineError::Api(format!("Failed to remove image: {e}")))?;

        Ok(())
    }

    async fn list_containers(&self) -> Result<Vec<ContainerRef>, EngineError> {
        let containers = self
            .docker
            .list_containers(None::<ListContainersOptions<String>>)
            .await
            .map_err(|e| EngineError::Api(format!("Failed to list containers: {e}")))?;

        Ok(containers
            .into_iter()
            .filter_map(|c| c.id)
            .map(ContainerRef::new)
            .collect())
    }

    async fn stop_container(&self, id: &str) -> Result<(), EngineError> {
        let options = StopContainerOptions {
            t: STOP_TIMEOUT_SECS,
        };

        self.docker
            .stop_container(id, Some(options))
            .await
            .map_err(|e| EngineError::Api(format!("Failed to stop container: {e}")))?;

        Ok(())
    }

    async fn remove_container(&self, id: &str, force: bool) -> Result<(), EngineError> {
        let options = RemoveContainerOptions {
            force,
            ..Default::default()
        };

        self.docker
            .remove_container(id, Some(options))
            .await
            .map_err(|e| EngineError::Api(format!("Failed to remove container: {e}")))?;

        Ok(())
    }

    async fn list_networks(&self) -> Result<Vec<NetworkRef>, EngineError> {
        let networks = self
            .docker
            .list_networks(None::<ListNetworksOptions<String>>)
            .await
            .map_err(|e| EngineError::Api(format!("Failed to list networks: {e}")))?;

        Ok(networks
            .into_iter()
            .filter_map(|n| match (n.id, n.name) {
                (Some(id), Some(name)) => Some(NetworkRef::new(id, name)),
                _ => None,
            })
            .collect())
    }

    async fn remove_network(&self, id: &str) -> Result<(), EngineError> {
        self.docker
            .remove_network(id)
            .await
            .map_err(|e| EngineError::Api(format!("Failed to remove network: {e}")))?;

        Ok(())
    }

    async fn list_volumes(&self) -> Result<Vec<VolumeRef>, EngineError> {
        let response = self
            .docker
            .list_volumes(None::<ListVolumesOptions<String>>)
            .await
            .map_err(|e| EngineError::Api(format!("Failed to list volumes: {e}")))?;

        Ok(response
            .volumes
            .unwrap_or_default()
            .into_iter()
            .map(|v| VolumeRef::new(v.name))
            .collect())
    }

    async fn remove_volume(&self, name: &str, force: bool) -> Result<(), EngineError> {
        let options = RemoveVolumeOptions { force };

        self.docker
            .remove_volume(name, Some(options))
            .await
            .map_err(|e| EngineError::Api(format!("Failed to remove volume: {e}")))?;

        Ok(())
    }
}
