//! Simulation engine boundary
//!
//! The run orchestrator never embeds simulation logic. It drives an engine
//! through the [`SimulationEngine`] trait and surfaces the engine's failures
//! through the error types defined here. Any simulation model can sit behind
//! the trait; [`ReplayEngine`] is a minimal bundled implementation used by
//! the command line binary and the integration tests.

pub mod contract;
pub mod replay;

// Re-export the boundary types for convenience
pub use contract::*;
pub use replay::*;
