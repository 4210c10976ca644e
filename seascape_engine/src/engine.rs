/// Seascape Engine - process-wide logging facade
///
/// Scene state is never global: every scene lives in a `SceneApp` that the
/// caller owns. The only process-wide state is the logger and its severity
/// threshold, kept here behind thread-safe statics so that load workers and
/// the frame thread can report through the same sink.

use std::sync::{OnceLock, RwLock};
use std::time::SystemTime;
use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};

// ===== INTERNAL STATE =====

/// Global logger (initialized with DefaultLogger)
static LOGGER: OnceLock<RwLock<Box<dyn Logger>>> = OnceLock::new();

/// Entries below this severity are dropped before reaching the logger
static MIN_SEVERITY: OnceLock<RwLock<LogSeverity>> = OnceLock::new();

fn logger_lock() -> &'static RwLock<Box<dyn Logger>> {
    LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)))
}

fn min_severity_lock() -> &'static RwLock<LogSeverity> {
    MIN_SEVERITY.get_or_init(|| RwLock::new(LogSeverity::Info))
}

// ===== PUBLIC API =====

/// Engine logging facade
///
/// # Example
///
/// ```no_run
/// use seascape_engine::seascape::{Engine, log::{Logger, LogEntry, LogSeverity}};
///
/// struct FileLogger;
/// impl Logger for FileLogger {
///     fn log(&self, entry: &LogEntry) {
///         // Write to file...
///     }
/// }
///
/// Engine::set_logger(FileLogger);
/// Engine::set_min_severity(LogSeverity::Debug);
/// ```
pub struct Engine;

impl Engine {
    /// Crate version, reported by the demo at startup
    pub fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    // ===== LOGGING API =====

    /// Replace the global logger
    pub fn set_logger<L: Logger + 'static>(logger: L) {
        if let Ok(mut lock) = logger_lock().write() {
            *lock = Box::new(logger);
        }
    }

    /// Reset logger to default (DefaultLogger)
    pub fn reset_logger() {
        if let Ok(mut lock) = logger_lock().write() {
            *lock = Box::new(DefaultLogger);
        }
    }

    /// Drop entries below `severity` (default: Info)
    pub fn set_min_severity(severity: LogSeverity) {
        if let Ok(mut lock) = min_severity_lock().write() {
            *lock = severity;
        }
    }

    /// Current severity threshold
    pub fn min_severity() -> LogSeverity {
        min_severity_lock()
            .read()
            .map(|lock| *lock)
            .unwrap_or(LogSeverity::Info)
    }

    /// Internal logging method (for simple logs without file:line)
    ///
    /// Used by macros like engine_info!, engine_warn!, etc.
    pub fn log(severity: LogSeverity, source: &str, message: String) {
        Self::dispatch(LogEntry {
            severity,
            timestamp: SystemTime::now(),
            source: source.to_string(),
            message,
            file: None,
            line: None,
        });
    }

    /// Internal logging method with file:line information (for ERROR logs)
    ///
    /// Used by engine_error! macro to include source location.
    pub fn log_detailed(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: &'static str,
        line: u32,
    ) {
        Self::dispatch(LogEntry {
            severity,
            timestamp: SystemTime::now(),
            source: source.to_string(),
            message,
            file: Some(file),
            line: Some(line),
        });
    }

    fn dispatch(entry: LogEntry) {
        if entry.severity < Self::min_severity() {
            return;
        }
        if let Ok(lock) = logger_lock().read() {
            lock.log(&entry);
        }
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
