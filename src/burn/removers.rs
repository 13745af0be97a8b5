//! Per-kind removal routines.
//!
//! Each remover lists one kind of resource, prints a burn line per item, and
//! unless dry-run invokes the removal calls, counting each success into the
//! metrics. The first stop/remove failure aborts the remover: it maps to
//! [`BonfireError::Removal`] carrying the resource kind and display id, and
//! no later item in the listing is touched.
//!
//! A resource is counted only once its removal has succeeded (or once it has
//! been reported, on a dry run), so a failing item never inflates the
//! metrics.

use tracing::debug;

use crate::burn::{burn_message, BurnMetrics, ResourceKind};
use crate::engine::ContainerEngine;
use crate::error::BonfireError;

/// Built-in networks Docker will not let anyone delete. Skipped silently,
/// exact match.
const DEFAULT_NETWORKS: [&str; 3] = ["bridge", "host", "none"];

/// Burns images: dangling ones by default, every image when `all` is set.
pub async fn remove_images(
    engine: &dyn ContainerEngine,
    metrics: &mut BurnMetrics,
    all: bool,
    dry_run: bool,
) -> Result<(), BonfireError> {
    let kind = ResourceKind::Image;
    for image in engine.list_images(all).await? {
        println!("{}", burn_message(kind, image.short_id(), dry_run));
        if !dry_run {
            engine.remove_image(&image.id, true).await.map_err(|e| {
                debug!(error = %e, image = %image.short_id(), "image removal failed");
                BonfireError::removal(kind, image.short_id())
            })?;
        }
        metrics.record(kind);
    }
    Ok(())
}

/// Burns containers, stopping each one before force-removing it.
pub async fn remove_containers(
    engine: &dyn ContainerEngine,
    metrics: &mut BurnMetrics,
    dry_run: bool,
) -> Result<(), BonfireError> {
    let kind = ResourceKind::Container;
    for container in engine.list_containers().await? {
        println!("{}", burn_message(kind, container.short_id(), dry_run));
        if !dry_run {
            let result = async {
                engine.stop_container(&container.id).await?;
                engine.remove_container(&container.id, true).await
            }
            .await;

            result.map_err(|e| {
                debug!(error = %e, container = %container.short_id(), "container removal failed");
                BonfireError::removal(kind, container.short_id())
            })?;
        }
        metrics.record(kind);
    }
    Ok(())
}

/// Burns user-created networks, leaving the Docker defaults alone.
pub async fn remove_networks(
    engine: &dyn ContainerEngine,
    metrics: &mut BurnMetrics,
    dry_run: bool,
) -> Result<(), BonfireError> {
    let kind = ResourceKind::Network;
    for network in engine.list_networks().await? {
        if DEFAULT_NETWORKS.contains(&network.name.as_str()) {
            continue;
        }
        println!("{}", burn_message(kind, network.short_id(), dry_run));
        if !dry_run {
            engine.remove_network(&network.id).await.map_err(|e| {
                debug!(error = %e, network = %network.name, "network removal failed");
                BonfireError::removal(kind, network.short_id())
            })?;
        }
        metrics.record(kind);
    }
    Ok(())
}

/// Burns volumes. Volumes have no short id; the burn line and any error
/// carry the full name.
pub async fn remove_volumes(
    engine: &dyn ContainerEngine,
    metrics: &mut BurnMetrics,
    dry_run: bool,
) -> Result<(), BonfireError> {
    let kind = ResourceKind::Volume;
    for volume in engine.list_volumes().await? {
        println!("{}", burn_message(kind, &volume.name, dry_run));
        if !dry_run {
            engine.remove_volume(&volume.name, true).await.map_err(|e| {
                debug!(error = %e, volume = %volume.name, "volume removal failed");
                BonfireError::removal(kind, volume.name.clone())
            })?;
        }
        metrics.record(kind);
    }
    Ok(())
}
