//! Minimal bundled engine
//!
//! [`ReplayEngine`] replays a schedule of timestamped events. It carries no
//! simulation model of its own; it exists so the binary can run end-to-end
//! and so the orchestrator can be exercised against a real collaborator.

use std::collections::VecDeque;
use std::io::{BufRead, BufReader, Read, Write};

use tracing::debug;

use super::contract::{ExecutionError, IngestError, InitError, SimulationEngine};

/// One entry of a replay schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ScheduledEvent {
    /// Tick at which the event becomes due
    tick: u64,
    /// Free-form event description
    description: String,
}

/// Deterministic engine that replays a scheduled-event description.
///
/// The event description is one event per line, `<tick> <description>`.
/// Blank lines and lines starting with `#` are skipped. Ticks must be
/// non-decreasing: a non-numeric tick field is malformed input, and an
/// out-of-order tick stops ingestion at that line, keeps the events parsed
/// so far, and signals a recoverable inconsistent-state condition.
///
/// Advancing applies every due event and, when a destination is bound,
/// writes one report line per tick.
#[derive(Debug, Default)]
pub struct ReplayEngine {
    /// Events not yet due, in schedule order
    pending: VecDeque<ScheduledEvent>,
    /// Ticks elapsed since creation
    elapsed: u64,
    /// Events applied since creation
    applied: usize,
}

impl ReplayEngine {
    /// Ticks elapsed across all `advance` calls.
    pub fn elapsed(&self) -> u64 {
        self.elapsed
    }

    /// Events applied across all `advance` calls.
    pub fn applied_events(&self) -> usize {
        self.applied
    }

    /// Events ingested but not yet due.
    pub fn pending_events(&self) -> usize {
        self.pending.len()
    }
}

impl SimulationEngine for ReplayEngine {
    fn create() -> Result<Self, InitError> {
        Ok(Self::default())
    }

    fn ingest(&mut self, source: &mut dyn Read) -> Result<(), IngestError> {
        let reader = BufReader::new(source);
        // Schedule order must be preserved across repeated ingestion calls.
        let mut horizon = self.pending.back().map_or(0, |event| event.tick);

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (tick_field, description) = match line.split_once(char::is_whitespace) {
                Some((tick, rest)) => (tick, rest.trim()),
                None => (line, ""),
            };

            let tick: u64 = tick_field.parse().map_err(|_| {
                IngestError::Malformed(format!(
                    "line {}: tick field '{}' is not a non-negative integer",
                    index + 1,
                    tick_field
                ))
            })?;

            if tick < horizon {
                return Err(IngestError::InconsistentState(format!(
                    "line {}: event due at tick {} is behind the schedule horizon {}; \
                     keeping {} earlier events",
                    index + 1,
                    tick,
                    horizon,
                    self.pending.len()
                )));
            }

            horizon = tick;
            self.pending.push_back(ScheduledEvent {
                tick,
                description: description.to_string(),
            });
        }

        debug!(pending = self.pending.len(), "event description ingested");
        Ok(())
    }

    fn advance(
        &mut self,
        ticks: u64,
        mut report: Option<&mut (dyn Write + '_)>,
    ) -> Result<(), ExecutionError> {
        for _ in 0..ticks {
            self.elapsed += 1;

            let mut applied_now = 0usize;
            while self
                .pending
                .front()
                .map_or(false, |event| event.tick <= self.elapsed)
            {
                if let Some(event) = self.pending.pop_front() {
                    debug!(tick = self.elapsed, event = %event.description, "event applied");
                    applied_now += 1;
                }
            }
            self.applied += applied_now;

            if let Some(out) = report.as_mut() {
                writeln!(
                    out,
                    "tick {}: applied {}, pending {}",
                    self.elapsed,
                    applied_now,
                    self.pending.len()
                )?;
            }
        }

        if let Some(out) = report.as_mut() {
            out.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_starts_empty() {
        let engine = ReplayEngine::create().unwrap();
        assert_eq!(engine.elapsed(), 0);
        assert_eq!(engine.applied_events(), 0);
        assert_eq!(engine.pending_events(), 0);
    }

    #[test]
    fn test_ingest_skips_blanks_and_comments() {
        let mut engine = ReplayEngine::create().unwrap();
        let mut source = "# header\n\n1 first\n  \n2 second\n".as_bytes();
        engine.ingest(&mut source).unwrap();
        assert_eq!(engine.pending_events(), 2);
    }

    #[test]
    fn test_event_without_description_is_accepted() {
        let mut engine = ReplayEngine::create().unwrap();
        let mut source = "4\n".as_bytes();
        engine.ingest(&mut source).unwrap();
        assert_eq!(engine.pending_events(), 1);
    }
}
