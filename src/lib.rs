//! Simulation Run Orchestrator
//!
//! Drives a single discrete-tick simulation run: binds the event source and
//! report destination, hands the event description to a simulation engine,
//! advances the engine by a configurable number of ticks, and surfaces
//! lower-level failures at one reporting boundary.
//!
//! # Overview
//!
//! The simulation engine itself is an external collaborator reached through
//! the [`SimulationEngine`] trait: it interprets events, mutates simulated
//! state, and emits one report unit per tick. This crate owns the run
//! lifecycle around it.
//!
//! ## Key Features
//!
//! - **One acquisition boundary**: resources are opened and the engine is
//!   created at construction; every later operation assumes they are live
//! - **Full and stepped execution**: run the whole tick budget in one call,
//!   or drive the engine in arbitrary partial increments
//! - **Destination rebinding**: the report destination can be replaced
//!   mid-lifecycle while the source stays fixed
//! - **One local recovery**: a recoverable inconsistent-state condition
//!   during ingestion is logged and absorbed; every other failure
//!   propagates unchanged with its cause preserved
//!
//! ## Quick Start
//!
//! ```no_run
//! use sim_runner::{ReplayEngine, RunOrchestrator};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut run = RunOrchestrator::<ReplayEngine>::with_report("events.txt", "report.txt", 10)?;
//! run.ingest()?;
//! run.run_full()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Organization
//!
//! - [`engine`]: the engine contract, its boundary errors, and a minimal
//!   bundled replay engine
//! - [`simulation`]: run orchestration, setup errors, and logging setup
//! - [`types`]: run configuration and command line arguments
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

// Module declarations
pub mod engine;
pub mod simulation;
pub mod types;

// Re-export all public types for convenience

// Engine boundary
pub use engine::{ExecutionError, IngestError, InitError, ReplayEngine, SimulationEngine};

// Run orchestration
pub use simulation::{LoggingConfig, RunOrchestrator, SetupError, SetupResult};

// Configuration
pub use types::{CliArgs, ConfigValidationError, RunConfig};
