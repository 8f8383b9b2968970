//! Local invocation telemetry.
//!
//! One JSON line per run, appended to a file next to the working directory.
//! Nothing leaves the machine. Disabled via config or the
//! `SWISSPAIR_NO_TELEMETRY` environment variable; write failures are logged
//! at debug level and never affect the run's outcome.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use serde::Serialize;
use tracing::debug;

pub const TELEMETRY_FILE: &str = "swisspair-telemetry.jsonl";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    GenerateSucceeded,
    GenerateFailed,
    InvalidInput,
    UsageError,
}

#[derive(Debug, Serialize)]
struct TelemetryEvent {
    event: EventKind,
    team_count: usize,
    num_rounds: u32,
    duration_ms: u128,
}

/// Collects one event per invocation.
pub struct Telemetry {
    enabled: bool,
    started: Instant,
    path: PathBuf,
}

impl Telemetry {
    pub fn new(enabled: bool) -> Self {
        Self::with_path(enabled, PathBuf::from(TELEMETRY_FILE))
    }

    pub fn with_path(enabled: bool, path: PathBuf) -> Self {
        Self {
            enabled,
            started: Instant::now(),
            path,
        }
    }

    /// Record the invocation's outcome. A no-op when telemetry is off.
    pub fn record(&self, event: EventKind, team_count: usize, num_rounds: u32) {
        if !self.enabled {
            return;
        }
        let event = TelemetryEvent {
            event,
            team_count,
            num_rounds,
            duration_ms: self.started.elapsed().as_millis(),
        };
        if let Err(error) = self.append(&event) {
            debug!("telemetry write failed: {error}");
        }
    }

    fn append(&self, event: &TelemetryEvent) -> std::io::Result<()> {
        let line = serde_json::to_string(event)?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{line}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_telemetry_writes_nothing() {
        let path = std::env::temp_dir().join("swisspair-telemetry-disabled-test.jsonl");
        let _ = std::fs::remove_file(&path);

        let telemetry = Telemetry::with_path(false, path.clone());
        telemetry.record(EventKind::GenerateSucceeded, 4, 3);

        assert!(!path.exists());
    }

    #[test]
    fn test_enabled_telemetry_appends_json_lines() {
        let path = std::env::temp_dir().join("swisspair-telemetry-enabled-test.jsonl");
        let _ = std::fs::remove_file(&path);

        let telemetry = Telemetry::with_path(true, path.clone());
        telemetry.record(EventKind::GenerateFailed, 4, 2);
        telemetry.record(EventKind::GenerateSucceeded, 4, 2);

        let contents = std::fs::read_to_string(&path).expect("telemetry file written");
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).expect("valid JSON line");
        assert_eq!(first["event"], "generate_failed");
        assert_eq!(first["team_count"], 4);
        assert_eq!(first["num_rounds"], 2);

        let _ = std::fs::remove_file(&path);
    }
}
