//! Internal logging system for the Seascape engine
//!
//! Every component reports through one global logger owned by [`Engine`]:
//! - Customizable logger via the Logger trait
//! - Severity levels (Trace, Debug, Info, Warn, Error) with a global threshold
//! - Colored console output by default
//! - File and line information for ERROR logs
//!
//! Load failures are reported here and nowhere else; a failed asset is simply
//! absent from the scene.
//!
//! [`Engine`]: crate::seascape::Engine

use colored::*;
use std::time::SystemTime;
use chrono::{DateTime, Local};

/// Logger trait for custom logging implementations
///
/// Implement this trait to redirect engine output (file, overlay, test capture).
///
/// # Example
///
/// ```no_run
/// use seascape_engine::seascape::log::{Logger, LogEntry};
///
/// struct OverlayLogger;
///
/// impl Logger for OverlayLogger {
///     fn log(&self, entry: &LogEntry) {
///         // Push to an on-screen console...
///     }
/// }
/// ```
pub trait Logger: Send + Sync {
    /// Log an entry
    fn log(&self, entry: &LogEntry);
}

/// Log entry containing all information about a log message
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Severity level
    pub severity: LogSeverity,

    /// Timestamp when the log was created
    pub timestamp: SystemTime,

    /// Source component (e.g., "seascape::Pipeline", "seascape::FrameDriver")
    pub source: String,

    /// Log message
    pub message: String,

    /// Source file (only for ERROR logs)
    pub file: Option<&'static str>,

    /// Source line (only for ERROR logs)
    pub line: Option<u32>,
}

impl LogEntry {
    /// Render the entry without colors or timestamp.
    ///
    /// Format: `[SEVERITY] [source] message` with ` (file:line)` appended
    /// when a location is attached.
    pub fn plain_text(&self) -> String {
        let mut text = format!(
            "[{}] [{}] {}",
            self.severity.label().trim_end(),
            self.source,
            self.message
        );
        if let (Some(file), Some(line)) = (self.file, self.line) {
            text.push_str(&format!(" ({}:{})", file, line));
        }
        text
    }
}

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogSeverity {
    /// Per-frame chatter (binding advances, completions drained)
    Trace,

    /// Development information
    Debug,

    /// Lifecycle events (placement loaded, gate opened)
    Info,

    /// Recoverable oddities (extra gate notifications, dropped completions)
    Warn,

    /// Failures (asset load errors) with file:line details
    Error,
}

impl LogSeverity {
    /// Fixed-width label used in console output
    pub fn label(&self) -> &'static str {
        match self {
            LogSeverity::Trace => "TRACE",
            LogSeverity::Debug => "DEBUG",
            LogSeverity::Info => "INFO ",
            LogSeverity::Warn => "WARN ",
            LogSeverity::Error => "ERROR",
        }
    }
}

/// Default logger implementation using colored console output
///
/// Format:
/// - Normal: `[timestamp] [SEVERITY] [source] message`
/// - Error: `[timestamp] [ERROR] [source] message (file:line)`
pub struct DefaultLogger;

impl Logger for DefaultLogger {
    fn log(&self, entry: &LogEntry) {
        let datetime: DateTime<Local> = entry.timestamp.into();
        let timestamp = datetime.format("%Y-%m-%d %H:%M:%S%.3f").to_string();

        let label = entry.severity.label();
        let severity_str = match entry.severity {
            LogSeverity::Trace => label.bright_black(),
            LogSeverity::Debug => label.cyan(),
            LogSeverity::Info => label.green(),
            LogSeverity::Warn => label.yellow(),
            LogSeverity::Error => label.red().bold(),
        };

        let source = entry.source.bright_blue();

        if let (Some(file), Some(line)) = (entry.file, entry.line) {
            println!(
                "[{}] [{}] [{}] {} ({}:{})",
                timestamp,
                severity_str,
                source,
                entry.message,
                file,
                line
            );
        } else {
            println!(
                "[{}] [{}] [{}] {}",
                timestamp,
                severity_str,
                source,
                entry.message
            );
        }
    }
}

// ===== LOGGING MACROS =====

/// Log a TRACE message (per-frame detail, filtered by default)
///
/// # Example
///
/// ```no_run
/// # use seascape_engine::engine_trace;
/// # let count = 0;
/// engine_trace!("seascape::FrameDriver", "Advanced {} bindings", count);
/// ```
#[macro_export]
macro_rules! engine_trace {
    ($source:expr, $($arg:tt)*) => {
        $crate::seascape::Engine::log(
            $crate::seascape::log::LogSeverity::Trace,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log a DEBUG message
///
/// # Example
///
/// ```no_run
/// # use seascape_engine::engine_debug;
/// # let source = "scene.gltf";
/// engine_debug!("seascape::Pipeline", "Requested '{}'", source);
/// ```
#[macro_export]
macro_rules! engine_debug {
    ($source:expr, $($arg:tt)*) => {
        $crate::seascape::Engine::log(
            $crate::seascape::log::LogSeverity::Debug,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log an INFO message
///
/// # Example
///
/// ```no_run
/// # use seascape_engine::engine_info;
/// # let count = 0;
/// engine_info!("seascape::LoadGate", "Gate opened after {} placements", count);
/// ```
#[macro_export]
macro_rules! engine_info {
    ($source:expr, $($arg:tt)*) => {
        $crate::seascape::Engine::log(
            $crate::seascape::log::LogSeverity::Info,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log a WARN message
///
/// # Example
///
/// ```no_run
/// # use seascape_engine::engine_warn;
/// engine_warn!("seascape::LoadGate", "Notification after gate opened");
/// ```
#[macro_export]
macro_rules! engine_warn {
    ($source:expr, $($arg:tt)*) => {
        $crate::seascape::Engine::log(
            $crate::seascape::log::LogSeverity::Warn,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log an ERROR message with file:line information
///
/// # Example
///
/// ```no_run
/// # use seascape_engine::engine_error;
/// # let source = "scene.gltf";
/// # let error = "not found";
/// engine_error!("seascape::Pipeline", "Failed to load '{}': {}", source, error);
/// ```
#[macro_export]
macro_rules! engine_error {
    ($source:expr, $($arg:tt)*) => {
        $crate::seascape::Engine::log_detailed(
            $crate::seascape::log::LogSeverity::Error,
            $source,
            format!($($arg)*),
            file!(),
            line!()
        )
    };
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
