//! bonfire: a controlled fire for resetting your local Docker environment.
//!
//! Bonfire removes Docker resources (images, containers, networks, and
//! volumes) from a local development environment. It can run destructively
//! or in "smolder" mode, a non-destructive dry run.

pub mod burn;
pub mod cli;
pub mod engine;
pub mod error;

// Re-export commonly used types
pub use burn::{process, BurnMetrics, ResourceKind, RunConfig};
pub use engine::{ContainerEngine, DockerEngine};
pub use error::BonfireError;
