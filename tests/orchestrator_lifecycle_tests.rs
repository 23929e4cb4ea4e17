//! Integration tests for run orchestrator construction and lifecycle
//!
//! Exercises the orchestrator against the bundled replay engine with real
//! files: construction in both modes, accessor values, setup failures, and
//! headless state-only runs.

use std::path::PathBuf;

use sim_runner::{ReplayEngine, RunOrchestrator, SetupError};
use tempfile::TempDir;

fn write_events(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

/// Construction with both paths openable succeeds and exposes the
/// configured budget and source locator.
#[test]
fn test_with_report_exposes_configuration() {
    let dir = TempDir::new().unwrap();
    let events = write_events(&dir, "events.txt", "1 depart\n2 arrive\n");
    let report = dir.path().join("report.txt");

    let run = RunOrchestrator::<ReplayEngine>::with_report(&events, &report, 7).unwrap();

    assert_eq!(run.tick_budget(), 7);
    assert_eq!(run.source_path(), events.as_path());
    assert!(run.destination().is_some());
    assert_eq!(run.engine().elapsed(), 0);
    assert_eq!(run.engine().pending_events(), 0);
}

/// The headless constructor opens only the source.
#[test]
fn test_without_report_has_no_destination() {
    let dir = TempDir::new().unwrap();
    let events = write_events(&dir, "events.txt", "1 depart\n");

    let run = RunOrchestrator::<ReplayEngine>::without_report(&events, 3).unwrap();

    assert!(run.destination().is_none());
    assert_eq!(run.tick_budget(), 3);
    assert_eq!(run.source_path(), events.as_path());
}

/// A non-openable source path fails construction with a setup error in
/// either mode; no orchestrator (and thus no engine) exists afterward.
#[test]
fn test_missing_source_fails_construction() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("no-such-events.txt");
    let report = dir.path().join("report.txt");

    let result = RunOrchestrator::<ReplayEngine>::with_report(&missing, &report, 5);
    match result {
        Err(SetupError::OpenSource { path, .. }) => {
            assert!(path.contains("no-such-events.txt"));
        }
        other => panic!("expected OpenSource error, got {:?}", other.map(|_| ())),
    }

    let result = RunOrchestrator::<ReplayEngine>::without_report(&missing, 5);
    assert!(matches!(result, Err(SetupError::OpenSource { .. })));
}

/// A non-creatable destination path fails construction with a setup error.
#[test]
fn test_unwritable_destination_fails_construction() {
    let dir = TempDir::new().unwrap();
    let events = write_events(&dir, "events.txt", "1 depart\n");
    let report = dir.path().join("missing-dir").join("report.txt");

    let result = RunOrchestrator::<ReplayEngine>::with_report(&events, &report, 5);
    assert!(matches!(result, Err(SetupError::CreateDestination { .. })));
}

/// A headless full run advances engine state and produces no report file,
/// with no error raised solely because the destination is absent.
#[test]
fn test_headless_run_advances_state_only() {
    let dir = TempDir::new().unwrap();
    let events = write_events(&dir, "events.txt", "1 depart\n3 arrive\n");

    let mut run = RunOrchestrator::<ReplayEngine>::without_report(&events, 4).unwrap();
    run.ingest().unwrap();
    run.run_full().unwrap();

    assert_eq!(run.engine().elapsed(), 4);
    assert_eq!(run.engine().applied_events(), 2);
    // Nothing besides the events file was created.
    let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
}

/// A zero tick budget is legal and runs no ticks.
#[test]
fn test_zero_tick_budget_is_legal() {
    let dir = TempDir::new().unwrap();
    let events = write_events(&dir, "events.txt", "1 depart\n");
    let report = dir.path().join("report.txt");

    let mut run = RunOrchestrator::<ReplayEngine>::with_report(&events, &report, 0).unwrap();
    run.ingest().unwrap();
    run.run_full().unwrap();

    assert_eq!(run.engine().elapsed(), 0);
    assert_eq!(std::fs::read_to_string(&report).unwrap(), "");
}

/// Each orchestrator carries its own run identity.
#[test]
fn test_run_identity_is_per_orchestrator() {
    let dir = TempDir::new().unwrap();
    let events = write_events(&dir, "events.txt", "");

    let first = RunOrchestrator::<ReplayEngine>::without_report(&events, 1).unwrap();
    let second = RunOrchestrator::<ReplayEngine>::without_report(&events, 1).unwrap();

    assert_ne!(first.run_id(), second.run_id());
}
