//! Core burn logic: resource kinds, removal metrics, status messages, the
//! per-kind removers, and the dispatcher that decides which removers run.

pub mod dispatch;
#[cfg(test)]
pub mod fake_engine;
pub mod removers;

pub use dispatch::{process, RunConfig};
pub use removers::{remove_containers, remove_images, remove_networks, remove_volumes};

use std::fmt;

/// The kinds of Docker resources bonfire burns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Image,
    Container,
    Network,
    Volume,
}

impl ResourceKind {
    /// All kinds, in dispatch and reporting order.
    pub const ALL: [ResourceKind; 4] = [
        ResourceKind::Image,
        ResourceKind::Container,
        ResourceKind::Network,
        ResourceKind::Volume,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Image => "image",
            ResourceKind::Container => "container",
            ResourceKind::Network => "network",
            ResourceKind::Volume => "volume",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-kind counts of resources burned (or reported, when smoldering) during
/// one run. Every kind is always present; kinds whose remover did not run
/// read zero.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BurnMetrics {
    images: u64,
    containers: u64,
    networks: u64,
    volumes: u64,
}

impl BurnMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one burned resource of the given kind.
    pub fn record(&mut self, kind: ResourceKind) {
        match kind {
            ResourceKind::Image => self.images += 1,
            ResourceKind::Container => self.containers += 1,
            ResourceKind::Network => self.networks += 1,
            ResourceKind::Volume => self.volumes += 1,
        }
    }

    pub fn get(&self, kind: ResourceKind) -> u64 {
        match kind {
            ResourceKind::Image => self.images,
            ResourceKind::Container => self.containers,
            ResourceKind::Network => self.networks,
            ResourceKind::Volume => self.volumes,
        }
    }

    /// Iterates all kinds with their counts, in reporting order.
    pub fn iter(&self) -> impl Iterator<Item = (ResourceKind, u64)> + '_ {
        ResourceKind::ALL.iter().map(|&kind| (kind, self.get(kind)))
    }
}

/// Formats the status line printed for each resource as it is burned, or
/// merely smoldered on a dry run. The caller performs the output.
pub fn burn_message(kind: ResourceKind, id: &str, dry_run: bool) -> String {
    let prefix = if dry_run {
        "[*] Smoldering"
    } else {
        "[-] Burning"
    };
    format!("{prefix} {kind} {id}")
}
