//! Run orchestration
//!
//! [`RunOrchestrator`] owns one simulation run: it binds the event source
//! and report destination, creates the engine, sequences ingestion and
//! execution, and surfaces lower-level failures at a single boundary.
//!
//! The orchestrator is deliberately permissive about ordering: calling
//! execution before ingestion is legal, and repeated execution calls
//! accumulate ticks against persistent engine state. It keeps no tick
//! accounting of its own.

use std::fmt;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::engine::{ExecutionError, IngestError, SimulationEngine};
use crate::simulation::error::{SetupError, SetupResult};

/// Drives one simulation run from construction to completion.
///
/// An orchestrator is created once per run attempt and discarded after use.
/// It holds exactly one engine for its whole lifetime; the engine is never
/// recreated and never shared. The source and tick budget are fixed at
/// construction, while the report destination may be rebound mid-lifecycle
/// through [`set_destination`](RunOrchestrator::set_destination).
pub struct RunOrchestrator<E> {
    /// Total ticks a full run executes
    tick_budget: u64,
    /// Locator of the event source, kept for diagnostics
    source_path: PathBuf,
    /// Event source, opened at construction and never reassigned
    source: File,
    /// Report destination; absent means state advances with no report
    destination: Option<Box<dyn Write>>,
    /// The engine this run drives
    engine: E,
    /// Diagnostic identity of this run
    run_id: Uuid,
}

impl<E: SimulationEngine> RunOrchestrator<E> {
    /// Create an orchestrator that writes tick reports to `destination`.
    ///
    /// Opens the source for reading and the destination for writing, then
    /// creates a fresh engine. Any failure yields a [`SetupError`] wrapping
    /// the cause and no orchestrator; resources opened before the failure
    /// point are released on drop.
    #[instrument(skip(source, destination))]
    pub fn with_report(
        source: impl AsRef<Path>,
        destination: impl AsRef<Path>,
        tick_budget: u64,
    ) -> SetupResult<Self> {
        let source_path = source.as_ref().to_path_buf();
        let source = open_source(&source_path)?;

        let destination_path = destination.as_ref();
        let destination =
            File::create(destination_path).map_err(|error| SetupError::CreateDestination {
                path: destination_path.display().to_string(),
                source: error,
            })?;

        let engine = E::create()?;
        let run_id = Uuid::new_v4();
        info!(
            %run_id,
            source = %source_path.display(),
            destination = %destination_path.display(),
            "run orchestrator created"
        );

        Ok(Self {
            tick_budget,
            source_path,
            source,
            destination: Some(Box::new(destination)),
            engine,
            run_id,
        })
    }

    /// Create an orchestrator with no report destination.
    ///
    /// Opens only the source resource; execution advances engine state
    /// without producing any report. Same failure contract as
    /// [`with_report`](RunOrchestrator::with_report).
    #[instrument(skip(source))]
    pub fn without_report(source: impl AsRef<Path>, tick_budget: u64) -> SetupResult<Self> {
        let source_path = source.as_ref().to_path_buf();
        let source = open_source(&source_path)?;

        let engine = E::create()?;
        let run_id = Uuid::new_v4();
        info!(
            %run_id,
            source = %source_path.display(),
            "run orchestrator created without report destination"
        );

        Ok(Self {
            tick_budget,
            source_path,
            source,
            destination: None,
            engine,
            run_id,
        })
    }

    /// Feed the event description to the engine.
    ///
    /// Delegates the bound source to the engine's ingestion entry point.
    /// A recoverable inconsistent-state condition is logged and absorbed:
    /// the run continues with whatever state ingestion reached. I/O and
    /// malformed-input failures propagate unchanged.
    pub fn ingest(&mut self) -> Result<(), IngestError> {
        debug!(source = %self.source_path.display(), "ingesting event description");
        match self.engine.ingest(&mut self.source) {
            Err(IngestError::InconsistentState(reason)) => {
                warn!(%reason, "ingestion left engine state partially applied; continuing");
                Ok(())
            }
            result => result,
        }
    }

    /// Execute the full tick budget from the current engine state.
    ///
    /// Pure delegation: the engine advances by exactly the configured
    /// budget, writing one report unit per tick to the currently bound
    /// destination when present. Called after prior
    /// [`run_steps`](RunOrchestrator::run_steps) calls, this executes the
    /// budget *in addition to* the ticks already run.
    pub fn run_full(&mut self) -> Result<(), ExecutionError> {
        debug!(ticks = self.tick_budget, "running full tick budget");
        self.engine
            .advance(self.tick_budget, self.destination.as_deref_mut())
    }

    /// Execute exactly `ticks` ticks from the current engine state.
    ///
    /// The step count is independent of the tick budget. Repeated calls
    /// accumulate: `run_steps(2)` then `run_steps(3)` advances the engine
    /// by five ticks, the same as a single `run_steps(5)`.
    pub fn run_steps(&mut self, ticks: u64) -> Result<(), ExecutionError> {
        debug!(ticks, "running partial step increment");
        self.engine.advance(ticks, self.destination.as_deref_mut())
    }

    /// The engine this run drives.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Mutable access to the engine.
    ///
    /// An escape hatch for callers that inspect or drive the engine
    /// directly, bypassing the orchestrator's delegating entry points.
    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    /// The open event source.
    pub fn source(&self) -> &File {
        &self.source
    }

    /// The currently bound report destination, if any.
    pub fn destination(&self) -> Option<&dyn Write> {
        self.destination.as_deref()
    }

    /// Total ticks a full run executes.
    pub fn tick_budget(&self) -> u64 {
        self.tick_budget
    }

    /// Locator the event source was opened from.
    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    /// Diagnostic identity of this run.
    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    /// Replace the report destination without validation.
    ///
    /// The previous destination, if any, is dropped; subsequent execution
    /// writes only to the new destination. The caller supplies a writer in
    /// the correct state and flushes the old one beforehand if it needs
    /// its buffered output. The source and tick budget stay fixed.
    pub fn set_destination(&mut self, destination: Box<dyn Write>) {
        debug!(run_id = %self.run_id, "report destination rebound");
        self.destination = Some(destination);
    }
}

impl<E: fmt::Debug> fmt::Debug for RunOrchestrator<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunOrchestrator")
            .field("run_id", &self.run_id)
            .field("tick_budget", &self.tick_budget)
            .field("source_path", &self.source_path)
            .field("has_destination", &self.destination.is_some())
            .field("engine", &self.engine)
            .finish()
    }
}

fn open_source(path: &Path) -> SetupResult<File> {
    File::open(path).map_err(|error| SetupError::OpenSource {
        path: path.display().to_string(),
        source: error,
    })
}
