//! Integration tests for the Tilecam logging system
//!
//! The logger slot is global, so every test here runs under #[serial].
//!
//! Run with: cargo test --test logging_integration_tests

use tilecam::camera::{
    align_camera, ClipRange, TileCameraHost, TileCameraSolver, TilingLimits, TilingRequest,
};
use tilecam::glam::DVec3;
use tilecam::log::{LogEntry, LogSeverity, Logger};
use tilecam::Tilecam;
use std::sync::{Arc, Mutex};
use serial_test::serial;

// ============================================================================
// TEST LOGGER IMPLEMENTATION
// ============================================================================

/// Test logger that captures log entries for verification
struct TestLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl TestLogger {
    fn new() -> (Self, Arc<Mutex<Vec<LogEntry>>>) {
        let entries = Arc::new(Mutex::new(Vec::new()));
        (Self { entries: entries.clone() }, entries)
    }
}

impl Logger for TestLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

fn with_severity(entries: &[LogEntry], severity: LogSeverity) -> Vec<LogEntry> {
    entries.iter().filter(|e| e.severity == severity).cloned().collect()
}

// ============================================================================
// LOGGER SLOT TESTS
// ============================================================================

#[test]
#[serial]
fn test_integration_custom_logger() {
    let (test_logger, entries) = TestLogger::new();
    Tilecam::set_logger(test_logger);

    Tilecam::log(LogSeverity::Info, "test::module", "Test info message".to_string());
    Tilecam::log(LogSeverity::Warn, "test::module", "Test warning message".to_string());

    {
        let captured = entries.lock().unwrap();
        assert_eq!(captured.len(), 2);
        assert_eq!(captured[0].severity, LogSeverity::Info);
        assert_eq!(captured[0].source, "test::module");
        assert_eq!(captured[0].message, "Test info message");
        assert!(captured[0].file.is_none());
        assert_eq!(captured[1].severity, LogSeverity::Warn);
    }

    Tilecam::reset_logger();
}

#[test]
#[serial]
fn test_integration_error_logging_with_location() {
    let (test_logger, entries) = TestLogger::new();
    Tilecam::set_logger(test_logger);

    Tilecam::log_detailed(
        LogSeverity::Error,
        "test::error",
        "Rejected request".to_string(),
        "test_file.rs",
        42,
    );

    {
        let captured = entries.lock().unwrap();
        assert_eq!(captured.len(), 1);
        assert_eq!(captured[0].file, Some("test_file.rs"));
        assert_eq!(captured[0].line, Some(42));
    }

    Tilecam::reset_logger();
}

#[test]
#[serial]
fn test_integration_logger_reset() {
    let (test_logger, entries) = TestLogger::new();
    Tilecam::set_logger(test_logger);

    Tilecam::log(LogSeverity::Info, "test", "Message 1".to_string());
    Tilecam::reset_logger();
    Tilecam::log(LogSeverity::Info, "test", "Message 2".to_string());

    assert_eq!(entries.lock().unwrap().len(), 1);
}

// ============================================================================
// SOLVER LOGGING TESTS
// ============================================================================

#[test]
#[serial]
fn test_integration_solve_does_not_log() {
    let (test_logger, entries) = TestLogger::new();
    Tilecam::set_logger(test_logger);

    for (x_period, y_period) in [(1, 1), (2, 1), (1, -1), (0, 3)] {
        TileCameraSolver::solve(TilingRequest::new(x_period, y_period, 45.0, 1, 512));
    }

    assert!(entries.lock().unwrap().is_empty());

    Tilecam::reset_logger();
}

/// Host camera that only records the written height
struct HeightOnlyCamera {
    height: u32,
}

impl TileCameraHost for HeightOnlyCamera {
    fn render_width(&self) -> u32 {
        512
    }

    fn set_orthographic(&mut self, _ortho_scale: f64, _clip: ClipRange) {}

    fn set_rotation_euler(&mut self, _rotation: DVec3) {}

    fn set_render_height(&mut self, height: u32) {
        self.height = height;
    }
}

#[test]
#[serial]
fn test_integration_align_camera_logs_info() {
    let (test_logger, entries) = TestLogger::new();
    Tilecam::set_logger(test_logger);

    let mut camera = HeightOnlyCamera { height: 0 };
    align_camera(&mut camera, TilingRequest::default(), &TilingLimits::default()).unwrap();

    {
        let captured = entries.lock().unwrap();
        assert_eq!(captured.len(), 1);
        assert_eq!(captured[0].severity, LogSeverity::Info);
        assert_eq!(captured[0].source, "tilecam::host");
        assert!(captured[0].message.contains("512x362 px"));
    }
    assert_eq!(camera.height, 362);

    Tilecam::reset_logger();
}

#[test]
#[serial]
fn test_integration_degenerate_periods_warn() {
    let (test_logger, entries) = TestLogger::new();
    Tilecam::set_logger(test_logger);

    TileCameraSolver::solve(TilingRequest::new(0, 0, 45.0, 1, 512));

    {
        let captured = entries.lock().unwrap();
        let warnings = with_severity(&captured, LogSeverity::Warn);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].message.contains("(0, 0)"));
    }

    Tilecam::reset_logger();
}

#[test]
#[serial]
fn test_integration_rejected_request_logs_error_with_location() {
    let (test_logger, entries) = TestLogger::new();
    Tilecam::set_logger(test_logger);

    let request = TilingRequest::new(1, 1, 45.0, 0, 512);
    let result = TileCameraSolver::solve_checked(request, &TilingLimits::default());
    assert!(result.is_err());

    {
        let captured = entries.lock().unwrap();
        let errors = with_severity(&captured, LogSeverity::Error);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("Invalid repetition count: 0"));
        assert!(errors[0].file.is_some_and(|file| file.ends_with("solver.rs")));
        assert!(errors[0].line.is_some());
        assert_eq!(captured.len(), 1);
    }

    Tilecam::reset_logger();
}
