//! In-memory container engine for exercising the burn logic in tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::engine::{ContainerEngine, ContainerRef, EngineError, ImageRef, NetworkRef, VolumeRef};

/// One call made against the fake engine, in invocation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ListImages { all: bool },
    RemoveImage { id: String, force: bool },
    ListContainers,
    StopContainer { id: String },
    RemoveContainer { id: String, force: bool },
    ListNetworks,
    RemoveNetwork { id: String },
    ListVolumes,
    RemoveVolume { name: String, force: bool },
}

impl Call {
    pub fn is_mutating(&self) -> bool {
        !matches!(
            self,
            Call::ListImages { .. } | Call::ListContainers | Call::ListNetworks | Call::ListVolumes
        )
    }
}

/// Scripted engine: returns fixed listings and records every call. Any stop
/// or remove call whose identifier matches `fail_removal_of` (or
/// `fail_stop_of`, for container stops) returns an API error.
#[derive(Default)]
pub struct FakeEngine {
    pub all_images: Vec<ImageRef>,
    pub dangling_images: Vec<ImageRef>,
    pub containers: Vec<ContainerRef>,
    pub networks: Vec<NetworkRef>,
    pub volumes: Vec<VolumeRef>,
    pub fail_removal_of: Option<String>,
    pub fail_stop_of: Option<String>,
    pub calls: Mutex<Vec<Call>>,
}

impl FakeEngine {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().expect("calls lock poisoned").clone()
    }

    pub fn mutating_calls(&self) -> Vec<Call> {
        self.calls().into_iter().filter(Call::is_mutating).collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().expect("calls lock poisoned").push(call);
    }

    fn check_failure(&self, id: &str) -> Result<(), EngineError> {
        if self.fail_removal_of.as_deref() == Some(id) {
            Err(EngineError::Api(format!("scripted failure for {id}")))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ContainerEngine for FakeEngine {
    async fn list_images(&self, all: bool) -> Result<Vec<ImageRef>, EngineError> {
        self.record(Call::ListImages { all });
        Ok(if all {
            self.all_images.clone()
        } else {
            self.dangling_images.clone()
        })
    }

    async fn remove_image(&self, id: &str, force: bool) -> Result<(), EngineError> {
        self.record(Call::RemoveImage {
            id: id.to_string(),
            force,
        });
        self.check_failure(id)
    }

    async fn list_containers(&self) -> Result<Vec<ContainerRef>, EngineError> {
        self.record(Call::ListContainers);
        Ok(self.containers.clone())
    }

    async fn stop_container(&self, id: &str) -> Result<(), EngineError> {
        self.record(Call::StopContainer { id: id.to_string() });
        if self.fail_stop_of.as_deref() == Some(id) {
            Err(EngineError::Api(format!("scripted stop failure for {id}")))
        } else {
            Ok(())
        }
    }

    async fn remove_container(&self, id: &str, force: bool) -> Result<(), EngineError> {
        self.record(Call::RemoveContainer {
            id: id.to_string(),
            force,
        });
        self.check_failure(id)
    }

    async fn list_networks(&self) -> Result<Vec<NetworkRef>, EngineError> {
        self.record(Call::ListNetworks);
        Ok(self.networks.clone())
    }

    async fn remove_network(&self, id: &str) -> Result<(), EngineError> {
        self.record(Call::RemoveNetwork { id: id.to_string() });
        self.check_failure(id)
    }

    async fn list_volumes(&self) -> Result<Vec<VolumeRef>, EngineError> {
        self.record(Call::ListVolumes);
        Ok(self.volumes.clone())
    }

    async fn remove_volume(&self, name: &str, force: bool) -> Result<(), EngineError> {
        self.record(Call::RemoveVolume {
            name: name.to_string(),
            force,
        });
        self.check_failure(name)
    }
}
