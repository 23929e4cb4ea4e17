// Simulation Run Orchestrator - Main Entry Point
//
// You can run it via Cargo:
//
// ```console
// $ cargo build --release
// $ ./target/release/sim-runner --events schedule.txt --report report.txt --ticks 50
// ```

use std::process;

use anyhow::Context;
use clap::Parser;
use sim_runner::engine::ReplayEngine;
use sim_runner::simulation::{LoggingConfig, RunOrchestrator};
use sim_runner::types::{CliArgs, RunConfig};
use tracing::{error, info};

fn main() {
    // Parse CLI arguments first to check for special flags
    let args = CliArgs::parse();

    if args.print_config {
        match RunConfig::default().print_json() {
            Ok(json) => {
                println!("{}", json);
                return;
            }
            Err(e) => {
                eprintln!("Failed to serialize default configuration: {}", e);
                process::exit(1);
            }
        }
    }

    // Initialize logging based on CLI flags
    let logging_result = if args.debug {
        LoggingConfig::init_debug()
    } else if args.verbose {
        LoggingConfig::init_verbose()
    } else {
        // Default: minimal logging for normal users
        LoggingConfig::new().with_level(tracing::Level::WARN).init()
    };

    if let Err(e) = logging_result {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    // Load configuration from CLI arguments and optional config file
    let config = match RunConfig::from_cli_args(args.clone()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        error!("Configuration validation failed: {}", e);
        process::exit(1);
    }

    if args.dry_run {
        eprintln!("Configuration validation successful!");
        eprintln!("Dry run mode - the run will not be executed.");
        print_configuration_summary(&config);
        return;
    }

    print_configuration_summary(&config);

    info!("Starting simulation run");
    if let Err(e) = execute_run(&config) {
        error!("Run failed: {:#}", e);
        process::exit(1);
    }

    info!("Simulation run completed successfully");
}

/// Build the orchestrator and drive the configured tick budget.
fn execute_run(config: &RunConfig) -> anyhow::Result<()> {
    let mut run = match &config.report_path {
        Some(report) => RunOrchestrator::<ReplayEngine>::with_report(
            &config.events_path,
            report,
            config.tick_budget,
        )
        .context("failed to set up the run")?,
        None => RunOrchestrator::<ReplayEngine>::without_report(
            &config.events_path,
            config.tick_budget,
        )
        .context("failed to set up the run")?,
    };

    run.ingest().context("event ingestion failed")?;

    match config.step_size {
        Some(step) => {
            // Chunking lives here on the caller side; the orchestrator
            // keeps no tick accounting.
            let mut remaining = config.tick_budget;
            while remaining > 0 {
                let chunk = remaining.min(step);
                run.run_steps(chunk).context("stepped execution failed")?;
                remaining -= chunk;
            }
        }
        None => run.run_full().context("execution failed")?,
    }

    let engine = run.engine();
    eprintln!(
        "Run complete: {} ticks elapsed, {} events applied, {} still pending",
        engine.elapsed(),
        engine.applied_events(),
        engine.pending_events()
    );
    Ok(())
}

/// Print configuration summary
fn print_configuration_summary(config: &RunConfig) {
    eprintln!("Configuration:");
    eprintln!("  Events: {}", config.events_path);
    match &config.report_path {
        Some(path) => eprintln!("  Report: {}", path),
        None => eprintln!("  Report: (headless, state-only)"),
    }
    eprintln!("  Tick Budget: {}", config.tick_budget);
    if let Some(step) = config.step_size {
        eprintln!("  Step Size: {}", step);
    }
    eprintln!();
}
