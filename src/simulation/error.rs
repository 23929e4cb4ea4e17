//! Error types for run setup
//!
//! Construction is the only place the orchestrator acquires resources, so
//! it is the only place a [`SetupError`] can arise. Every later operation
//! surfaces engine-boundary errors instead (see [`crate::engine`]).

use thiserror::Error;

use crate::engine::InitError;

/// Errors raised while constructing a run orchestrator.
///
/// Each variant wraps the underlying cause. A failed construction yields no
/// orchestrator; resources opened before the failure point are released on
/// drop.
#[derive(Debug, Error)]
pub enum SetupError {
    /// The event source could not be opened for reading
    #[error("failed to open event source '{path}'")]
    OpenSource {
        /// Locator of the source that failed to open
        path: String,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// The report destination could not be created for writing
    #[error("failed to create report destination '{path}'")]
    CreateDestination {
        /// Locator of the destination that failed to open
        path: String,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// The simulation engine could not be created
    #[error("failed to create simulation engine")]
    EngineInit(#[from] InitError),
}

/// Result type for orchestrator construction.
pub type SetupResult<T> = Result<T, SetupError>;
