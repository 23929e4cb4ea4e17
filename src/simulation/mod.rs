//! Run orchestration and control
//!
//! This module contains the run orchestrator, the setup error taxonomy,
//! and the logging configuration.
//!
//! # Overview
//!
//! - **RunOrchestrator**: owns one run — resource binding, engine lifetime,
//!   ingestion and execution sequencing
//! - **SetupError**: construction-phase failures, wrapping their cause
//! - **LoggingConfig**: tracing subscriber setup for the binary and embedders

pub mod error;
pub mod logging;
pub mod orchestrator;

// Re-export all public types for convenience
pub use error::*;
pub use logging::*;
pub use orchestrator::*;
