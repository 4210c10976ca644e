//! Unit tests for the Engine logging facade
//!
//! IMPORTANT: LOGGER and MIN_SEVERITY are process-wide statics shared across
//! all tests. Every test here is marked #[serial] and restores the defaults.

use crate::seascape::Engine;
use crate::seascape::log::{Logger, LogEntry, LogSeverity};
use std::sync::{Arc, Mutex};
use serial_test::serial;

// ============================================================================
// TEST HELPERS
// ============================================================================

/// Test logger that captures rendered entries for verification
///
/// Only entries from "seascape::Test" are kept: unit tests elsewhere in the
/// crate log concurrently through the same global logger.
struct CaptureLogger {
    entries: Arc<Mutex<Vec<String>>>,
}

impl Logger for CaptureLogger {
    fn log(&self, entry: &LogEntry) {
        if entry.source == "seascape::Test" {
            self.entries.lock().unwrap().push(entry.plain_text());
        }
    }
}

fn install_capture() -> Arc<Mutex<Vec<String>>> {
    let entries = Arc::new(Mutex::new(Vec::new()));
    Engine::set_logger(CaptureLogger { entries: entries.clone() });
    entries
}

fn restore_defaults() {
    Engine::reset_logger();
    Engine::set_min_severity(LogSeverity::Info);
}

// ============================================================================
// LOGGING TESTS
// ============================================================================

#[test]
#[serial]
fn test_engine_log_reaches_custom_logger() {
    let entries = install_capture();
    Engine::set_min_severity(LogSeverity::Trace);

    Engine::log(LogSeverity::Info, "seascape::Test", "hello".to_string());

    let captured = entries.lock().unwrap().clone();
    restore_defaults();
    assert_eq!(captured, vec!["[INFO] [seascape::Test] hello".to_string()]);
}

#[test]
#[serial]
fn test_engine_log_detailed_carries_location() {
    let entries = install_capture();

    Engine::log_detailed(
        LogSeverity::Error,
        "seascape::Test",
        "boom".to_string(),
        "test.rs",
        7,
    );

    let captured = entries.lock().unwrap().clone();
    restore_defaults();
    assert_eq!(captured, vec!["[ERROR] [seascape::Test] boom (test.rs:7)".to_string()]);
}

#[test]
#[serial]
fn test_min_severity_filters_lower_entries() {
    let entries = install_capture();
    Engine::set_min_severity(LogSeverity::Warn);

    Engine::log(LogSeverity::Debug, "seascape::Test", "dropped".to_string());
    Engine::log(LogSeverity::Info, "seascape::Test", "dropped".to_string());
    Engine::log(LogSeverity::Warn, "seascape::Test", "kept".to_string());

    let captured = entries.lock().unwrap().clone();
    restore_defaults();
    assert_eq!(captured.len(), 1);
    assert!(captured[0].contains("kept"));
}

#[test]
#[serial]
fn test_default_min_severity_is_info() {
    restore_defaults();
    assert_eq!(Engine::min_severity(), LogSeverity::Info);
}

#[test]
#[serial]
fn test_macros_route_through_engine() {
    let entries = install_capture();
    Engine::set_min_severity(LogSeverity::Trace);

    crate::engine_trace!("seascape::Test", "t{}", 1);
    crate::engine_debug!("seascape::Test", "d{}", 2);
    crate::engine_info!("seascape::Test", "i{}", 3);
    crate::engine_warn!("seascape::Test", "w{}", 4);
    crate::engine_error!("seascape::Test", "e{}", 5);

    let captured = entries.lock().unwrap().clone();
    restore_defaults();
    assert_eq!(captured.len(), 5);
    assert!(captured[0].starts_with("[TRACE]"));
    assert!(captured[4].starts_with("[ERROR] [seascape::Test] e5 ("));
}

#[test]
fn test_version_is_not_empty() {
    assert!(!Engine::version().is_empty());
}
