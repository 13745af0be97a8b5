//! Flag-driven dispatch over the per-kind removers.

use crate::burn::{removers, BurnMetrics};
use crate::engine::ContainerEngine;
use crate::error::BonfireError;

/// Which resource kinds to burn, and how.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunConfig {
    /// Burn every kind; when set the individual selection flags are ignored.
    pub all: bool,
    /// Burn all images, not just dangling ones.
    pub all_images: bool,
    /// Burn dangling images.
    pub images: bool,
    /// Burn containers.
    pub containers: bool,
    /// Burn networks (except the Docker defaults).
    pub networks: bool,
    /// Burn volumes.
    pub volumes: bool,
    /// Dry run: report what would burn without touching anything.
    pub smolder: bool,
}

/// Runs the removers the configuration selects, in the fixed order images,
/// containers, networks, volumes, and returns the aggregated metrics.
///
/// The first removal failure aborts the run; removers later in the order are
/// not invoked.
pub async fn process(
    engine: &dyn ContainerEngine,
    config: RunConfig,
) -> Result<BurnMetrics, BonfireError> {
    let mut metrics = BurnMetrics::new();
    let dry_run = config.smolder;

    if config.all {
        removers::remove_images(engine, &mut metrics, true, dry_run).await?;
        removers::remove_containers(engine, &mut metrics, dry_run).await?;
        removers::remove_networks(engine, &mut metrics, dry_run).await?;
        removers::remove_volumes(engine, &mut metrics, dry_run).await?;
        return Ok(metrics);
    }

    if config.all_images {
        removers::remove_images(engine, &mut metrics, true, dry_run).await?;
    } else if config.images {
        removers::remove_images(engine, &mut metrics, false, dry_run).await?;
    }
    if config.containers {
        removers::remove_containers(engine, &mut metrics, dry_run).await?;
    }
    if config.networks {
        removers::remove_networks(engine, &mut metrics, dry_run).await?;
    }
    if config.volumes {
        removers::remove_volumes(engine, &mut metrics, dry_run).await?;
    }

    Ok(metrics)
}
