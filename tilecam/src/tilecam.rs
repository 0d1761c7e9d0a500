/// Tilecam - global logger slot
///
/// The solver keeps no state. The only process-wide value is the active
/// logger, stored behind a RwLock so hosts can swap it at any time while
/// solves run on other threads.

use std::sync::{OnceLock, RwLock};
use std::time::SystemTime;
use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};

/// Global logger (initialized with DefaultLogger)
static LOGGER: OnceLock<RwLock<Box<dyn Logger>>> = OnceLock::new();

fn logger_slot() -> &'static RwLock<Box<dyn Logger>> {
    LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger::default())))
}

/// Entry point for crate-wide services (currently logging only)
pub struct Tilecam;

impl Tilecam {
    /// Set a custom logger
    ///
    /// # Example
    ///
    /// ```no_run
    /// use tilecam::Tilecam;
    /// use tilecam::log::{Logger, LogEntry};
    ///
    /// struct HostLogger;
    /// impl Logger for HostLogger {
    ///     fn log(&self, entry: &LogEntry) {
    ///         // Forward to the host console...
    ///     }
    /// }
    ///
    /// Tilecam::set_logger(HostLogger);
    /// ```
    pub fn set_logger<L: Logger + 'static>(logger: L) {
        if let Ok(mut lock) = logger_slot().write() {
            *lock = Box::new(logger);
        }
    }

    /// Reset logger to default (DefaultLogger, Info threshold)
    pub fn reset_logger() {
        if let Ok(mut lock) = logger_slot().write() {
            *lock = Box::new(DefaultLogger::default());
        }
    }

    /// Log without file:line (used by tilecam_trace! .. tilecam_warn!)
    pub fn log(severity: LogSeverity, source: &str, message: String) {
        if let Ok(lock) = logger_slot().read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file: None,
                line: None,
            });
        }
    }

    /// Log with file:line information (used by tilecam_error!)
    pub fn log_detailed(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: &'static str,
        line: u32,
    ) {
        if let Ok(lock) = logger_slot().read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file: Some(file),
                line: Some(line),
            });
        }
    }
}
