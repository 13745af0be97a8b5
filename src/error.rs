//! Error types for bonfire operations.

use thiserror::Error;

use crate::burn::ResourceKind;
use crate::engine::EngineError;

/// Errors that can occur while burning down a Docker environment.
#[derive(Debug, Error)]
pub enum BonfireError {
    /// A stop or remove call failed for a specific resource. The underlying
    /// engine error is logged at debug level and not carried here.
    #[error("Could not remove {kind} {id}")]
    Removal { kind: ResourceKind, id: String },

    /// The engine itself failed outside of a removal, e.g. a listing call
    /// or the initial daemon connection.
    #[error(transparent)]
    Engine(#[from] EngineError),
}

impl BonfireError {
    /// Builds the removal error raised when burning a single resource fails.
    pub fn removal(kind: ResourceKind, id: impl Into<String>) -> Self {
        Self::Removal {
            kind,
            id: id.into(),
        }
    }
}
