//! Severity-tagged log sink.
//!
//! Every diagnostic the physics facade emits goes through a [`LogSink`]
//! injected at engine construction, so applications can route messages into
//! their own logging stack and tests can capture them with [`MemorySink`].
//! The default [`StdoutSink`] prints the classic two-line form:
//!
//! ```text
//! [Error] : Failed to cook the triangle mesh
//!     crates/playfield_physics/src/engine.rs @ 142
//! ```

use std::panic::Location;
use std::sync::Mutex;

/// Message severity, from diagnostics to hard failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Informational and debug output.
    Info,
    /// Recoverable or performance-related conditions.
    Warning,
    /// Operation-aborting failures.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Info => write!(f, "Info"),
            Severity::Warning => write!(f, "Warning"),
            Severity::Error => write!(f, "Error"),
        }
    }
}

/// Destination for severity-tagged messages with their source location.
pub trait LogSink: Send + Sync {
    fn log(&self, severity: Severity, message: &str, file: &str, line: u32);
}

/// Logs the message with the caller's source location attached.
#[track_caller]
pub fn report(sink: &dyn LogSink, severity: Severity, message: &str) {
    let location = Location::caller();
    sink.log(severity, message, location.file(), location.line());
}

/// Default sink: writes to the process's standard output stream.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl LogSink for StdoutSink {
    fn log(&self, severity: Severity, message: &str, file: &str, line: u32) {
        println!("[{severity}] : {message}");
        println!("    {file} @ {line}");
    }
}

/// Adapter that forwards messages to the `log` crate, for applications that
/// already run a `log` backend.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogCrateSink;

impl LogSink for LogCrateSink {
    fn log(&self, severity: Severity, message: &str, file: &str, line: u32) {
        let level = match severity {
            Severity::Info => log::Level::Info,
            Severity::Warning => log::Level::Warn,
            Severity::Error => log::Level::Error,
        };
        log::log!(level, "{message} ({file} @ {line})");
    }
}

/// Capturing sink for tests: records every message it receives.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<(Severity, String)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything logged so far.
    pub fn records(&self) -> Vec<(Severity, String)> {
        self.records.lock().expect("sink mutex poisoned").clone()
    }

    /// Whether any message of the given severity was recorded.
    pub fn has_severity(&self, severity: Severity) -> bool {
        self.records().iter().any(|(s, _)| *s == severity)
    }
}

impl LogSink for MemorySink {
    fn log(&self, severity: Severity, message: &str, _file: &str, _line: u32) {
        self.records
            .lock()
            .expect("sink mutex poisoned")
            .push((severity, message.to_string()));
    }
}
