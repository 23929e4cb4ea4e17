//! Configuration structures for the run orchestrator binary
//!
//! This module contains the run configuration and the command line argument
//! structure, plus the merge and validation logic between them.

use std::fs;

use clap::Parser;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading or validating a run configuration.
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    /// The configuration file could not be read
    #[error("failed to read configuration file '{path}'")]
    FileRead {
        /// Path of the configuration file
        path: String,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid JSON
    #[error("failed to parse configuration file '{path}'")]
    FileParse {
        /// Path of the configuration file
        path: String,
        /// Underlying parse failure
        #[source]
        source: serde_json::Error,
    },

    /// A configuration value is out of range
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Configuration for one simulation run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RunConfig {
    /// Path of the event description to ingest
    pub events_path: String,
    /// Path the tick reports are written to; absent runs headless
    pub report_path: Option<String>,
    /// Total ticks a full run executes
    pub tick_budget: u64,
    /// Optional increment size; when set, the budget is driven in chunks
    /// of this many ticks through the stepped entry point
    pub step_size: Option<u64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            events_path: "events.txt".to_string(),
            report_path: None,
            tick_budget: 100,
            step_size: None,
        }
    }
}

impl RunConfig {
    /// Load a configuration from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, ConfigValidationError> {
        let contents = fs::read_to_string(path).map_err(|source| {
            ConfigValidationError::FileRead { path: path.to_string(), source }
        })?;
        serde_json::from_str(&contents).map_err(|source| ConfigValidationError::FileParse {
            path: path.to_string(),
            source,
        })
    }

    /// Build a configuration from command line arguments.
    ///
    /// Priority order: flags override the configuration file, which
    /// overrides the defaults.
    pub fn from_cli_args(args: CliArgs) -> Result<Self, ConfigValidationError> {
        let mut config = match &args.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if let Some(events) = args.events {
            config.events_path = events;
        }
        if let Some(report) = args.report {
            config.report_path = Some(report);
        }
        if let Some(ticks) = args.ticks {
            config.tick_budget = ticks;
        }
        if let Some(step) = args.step_size {
            config.step_size = Some(step);
        }

        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.events_path.trim().is_empty() {
            return Err(ConfigValidationError::Invalid(
                "events_path must not be empty".to_string(),
            ));
        }
        if let Some(path) = &self.report_path {
            if path.trim().is_empty() {
                return Err(ConfigValidationError::Invalid(
                    "report_path must not be empty when present".to_string(),
                ));
            }
        }
        if self.step_size == Some(0) {
            return Err(ConfigValidationError::Invalid(
                "step_size must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Serialize the configuration as pretty-printed JSON.
    pub fn print_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Command line arguments structure
#[derive(Debug, Clone, Parser)]
#[command(
    name = "sim-runner",
    version,
    about = "Drives a discrete-tick simulation run from an event description",
    long_about = "Binds an event description and an optional report destination, hands the \
events to a simulation engine, and advances the engine by a configurable number of discrete \
ticks, either in one full run or in fixed-size increments.

EXAMPLES:
    # Run 100 ticks headless with the default event description
    sim-runner

    # Run with an explicit schedule, report file, and budget
    sim-runner --events schedule.txt --report report.txt --ticks 50

    # Drive the same budget one tick at a time
    sim-runner --events schedule.txt --ticks 50 --step-size 1

    # Use a configuration file, overriding its budget
    sim-runner --config run.json --ticks 25

    # Generate a configuration template
    sim-runner --print-config > run.json

CONFIGURATION:
    Configuration can be provided via:
    1. Command line arguments (highest priority)
    2. Configuration file (--config flag)
    3. Default values (lowest priority)

    Supported configuration file formats: JSON (.json)"
)]
pub struct CliArgs {
    /// Configuration file path (JSON format)
    #[arg(
        short,
        long,
        help = "Configuration file path (JSON format)",
        long_help = "Path to a JSON configuration file. CLI arguments will override file settings."
    )]
    pub config: Option<String>,

    /// Path of the event description to ingest
    #[arg(long, help = "Event description file to ingest")]
    pub events: Option<String>,

    /// Path the tick reports are written to
    #[arg(
        long,
        help = "Report destination file; omit to run headless",
        long_help = "File the engine writes one report unit per tick to. When omitted, the run \
advances simulation state without producing a report."
    )]
    pub report: Option<String>,

    /// Total ticks a full run executes
    #[arg(long, help = "Total ticks to execute")]
    pub ticks: Option<u64>,

    /// Drive the run in increments of this many ticks
    #[arg(
        long,
        help = "Advance in increments of this many ticks",
        long_help = "Instead of one full run, drive the tick budget through repeated stepped \
execution calls of this size. Must be greater than zero."
    )]
    pub step_size: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    /// Dry run mode - validate configuration without running
    #[arg(long, help = "Validate configuration without running the simulation")]
    pub dry_run: bool,

    /// Print default configuration and exit
    #[arg(long, help = "Print default configuration in JSON format and exit")]
    pub print_config: bool,
}
