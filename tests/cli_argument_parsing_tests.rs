//! Tests for CLI argument parsing and configuration merging

use clap::Parser;
use sim_runner::{CliArgs, RunConfig};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_no_flags_yields_default_config() {
    let args = CliArgs::try_parse_from(["sim-runner"]).unwrap();
    assert!(args.config.is_none());
    assert!(!args.verbose);
    assert!(!args.debug);
    assert!(!args.dry_run);
    assert!(!args.print_config);

    let config = RunConfig::from_cli_args(args).unwrap();
    assert_eq!(config, RunConfig::default());
}

#[test]
fn test_flags_override_defaults() {
    let args = CliArgs::try_parse_from([
        "sim-runner",
        "--events",
        "schedule.txt",
        "--report",
        "report.txt",
        "--ticks",
        "9",
        "--step-size",
        "2",
    ])
    .unwrap();

    let config = RunConfig::from_cli_args(args).unwrap();
    assert_eq!(config.events_path, "schedule.txt");
    assert_eq!(config.report_path, Some("report.txt".to_string()));
    assert_eq!(config.tick_budget, 9);
    assert_eq!(config.step_size, Some(2));
}

#[test]
fn test_config_file_fills_unset_values() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{"events_path": "from-file.txt", "tick_budget": 42}}"#).unwrap();
    file.flush().unwrap();

    let args = CliArgs::try_parse_from([
        "sim-runner",
        "--config",
        file.path().to_str().unwrap(),
    ])
    .unwrap();

    let config = RunConfig::from_cli_args(args).unwrap();
    assert_eq!(config.events_path, "from-file.txt");
    assert_eq!(config.tick_budget, 42);
    assert!(config.report_path.is_none());
}

#[test]
fn test_flags_override_config_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{"events_path": "from-file.txt", "tick_budget": 42}}"#).unwrap();
    file.flush().unwrap();

    let args = CliArgs::try_parse_from([
        "sim-runner",
        "--config",
        file.path().to_str().unwrap(),
        "--ticks",
        "7",
    ])
    .unwrap();

    let config = RunConfig::from_cli_args(args).unwrap();
    assert_eq!(config.events_path, "from-file.txt");
    assert_eq!(config.tick_budget, 7);
}

#[test]
fn test_missing_config_file_is_an_error() {
    let args = CliArgs::try_parse_from(["sim-runner", "--config", "no-such-config.json"]).unwrap();
    assert!(RunConfig::from_cli_args(args).is_err());
}

#[test]
fn test_invalid_config_file_is_an_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "not json").unwrap();
    file.flush().unwrap();

    let args = CliArgs::try_parse_from([
        "sim-runner",
        "--config",
        file.path().to_str().unwrap(),
    ])
    .unwrap();
    assert!(RunConfig::from_cli_args(args).is_err());
}

#[test]
fn test_logging_and_mode_flags_parse() {
    let args =
        CliArgs::try_parse_from(["sim-runner", "--verbose", "--dry-run"]).unwrap();
    assert!(args.verbose);
    assert!(args.dry_run);

    let args = CliArgs::try_parse_from(["sim-runner", "-d"]).unwrap();
    assert!(args.debug);

    let args = CliArgs::try_parse_from(["sim-runner", "--print-config"]).unwrap();
    assert!(args.print_config);
}

#[test]
fn test_non_numeric_ticks_rejected() {
    assert!(CliArgs::try_parse_from(["sim-runner", "--ticks", "lots"]).is_err());
}
