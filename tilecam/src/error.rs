//! Error types for Tilecam
//!
//! The solver itself never fails. These errors are raised at the request
//! boundary, when a caller validates a `TilingRequest` before solving it
//! or aligns a host camera.

use std::fmt;

/// Result type for Tilecam operations
pub type Result<T> = std::result::Result<T, Error>;

/// Tilecam errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Period pair is degenerate (0, 0) or outside the accepted range
    InvalidPeriod {
        x_period: i32,
        y_period: i32,
    },

    /// Elevation is not finite or outside the accepted range (degrees)
    InvalidElevation(f64),

    /// Repetition count is zero or above the accepted maximum
    InvalidRepetitionCount(u32),

    /// Render width is zero
    InvalidImageWidth(u32),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidPeriod { x_period, y_period } => {
                write!(f, "Invalid period: ({}, {})", x_period, y_period)
            }
            Error::InvalidElevation(degrees) => write!(f, "Invalid elevation: {} degrees", degrees),
            Error::InvalidRepetitionCount(count) => write!(f, "Invalid repetition count: {}", count),
            Error::InvalidImageWidth(width) => write!(f, "Invalid image width: {} px", width),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
