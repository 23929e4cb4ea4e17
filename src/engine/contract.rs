//! The contract between the run orchestrator and a simulation engine
//!
//! An engine owns all simulated state. The orchestrator reaches it through
//! exactly two operations: event ingestion and stepped execution. Everything
//! the orchestrator needs to know about an engine failure is carried by the
//! error enums below.

use std::io::{Read, Write};

use thiserror::Error;

/// Failure raised while creating a fresh engine.
#[derive(Debug, Error)]
#[error("engine initialization failed: {0}")]
pub struct InitError(pub String);

/// Errors signalled by an engine while ingesting an event description.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The event source could not be read
    #[error("failed to read event source: {0}")]
    Io(#[from] std::io::Error),

    /// The event description is structurally invalid
    #[error("malformed event description: {0}")]
    Malformed(String),

    /// Ingestion left the engine in an inconsistent but usable state
    #[error("event ingestion left inconsistent state: {0}")]
    InconsistentState(String),
}

impl IngestError {
    /// Whether a run may continue with whatever state ingestion reached.
    ///
    /// Only [`IngestError::InconsistentState`] is recoverable; an unreadable
    /// or malformed event description aborts the run.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, IngestError::InconsistentState(_))
    }
}

/// Errors signalled by an engine while advancing simulated time.
#[derive(Debug, Error)]
pub enum ExecutionError {
    /// A tick report could not be written to the destination
    #[error("failed to write tick report: {0}")]
    Io(#[from] std::io::Error),

    /// The requested tick count is outside the engine's accepted range
    #[error("invalid tick count: {0}")]
    InvalidTickCount(String),

    /// The engine state does not permit advancing
    #[error("invalid simulation state: {0}")]
    InvalidState(String),
}

/// A discrete-tick simulation engine.
///
/// Implementations consume a structured event description through
/// [`ingest`](SimulationEngine::ingest) and advance simulated time through
/// [`advance`](SimulationEngine::advance), writing one report unit per tick
/// when a destination is supplied. State persists across calls: repeated
/// `advance` calls accumulate ticks, and there is no rollback.
pub trait SimulationEngine {
    /// Create a fresh engine with empty state.
    fn create() -> Result<Self, InitError>
    where
        Self: Sized;

    /// Consume the full event description from `source`, parse it into zero
    /// or more events, and apply each to the engine's state.
    fn ingest(&mut self, source: &mut dyn Read) -> Result<(), IngestError>;

    /// Advance simulated time by exactly `ticks` ticks.
    ///
    /// One report unit is written to `report` per tick when a destination is
    /// present. State advances whether or not a destination is bound.
    fn advance(&mut self, ticks: u64, report: Option<&mut (dyn Write + '_)>)
        -> Result<(), ExecutionError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_ingest_error_recoverability() {
        let io_error: IngestError = io::Error::new(io::ErrorKind::NotFound, "gone").into();
        assert!(!io_error.is_recoverable());

        let malformed = IngestError::Malformed("bad section".to_string());
        assert!(!malformed.is_recoverable());

        let inconsistent = IngestError::InconsistentState("partial apply".to_string());
        assert!(inconsistent.is_recoverable());
    }

    #[test]
    fn test_error_display() {
        let malformed = IngestError::Malformed("line 3".to_string());
        assert_eq!(malformed.to_string(), "malformed event description: line 3");

        let invalid = ExecutionError::InvalidTickCount("negative".to_string());
        assert_eq!(invalid.to_string(), "invalid tick count: negative");

        let state = ExecutionError::InvalidState("not primed".to_string());
        assert_eq!(state.to_string(), "invalid simulation state: not primed");

        let init = InitError("no model".to_string());
        assert_eq!(init.to_string(), "engine initialization failed: no model");
    }
}
