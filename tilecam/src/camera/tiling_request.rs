/// TilingRequest: immutable input record of the solver.
///
/// Built by the caller (typically from host UI fields). Carries the tiling
/// period, elevation, repetition count and the render width that the
/// output height is derived from.

use crate::error::{Error, Result};
use super::limits::TilingLimits;

/// Elevation (degrees) at which the three visible faces of a cube appear equal.
pub const ISOMETRIC_ELEVATION_DEGREES: f64 = 35.264;

/// Render width used by `TilingRequest::default()` (host default resolution).
pub const DEFAULT_IMAGE_WIDTH_PX: u32 = 1920;

/// Input of `TileCameraSolver::solve`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TilingRequest {
    /// Horizontal repeat count of the tiling pattern
    pub x_period: i32,
    /// Vertical repeat count of the tiling pattern
    pub y_period: i32,
    /// Desired vertical tilt in degrees, 90 = straight down. Ignored when isometric.
    pub elevation_degrees: f64,
    /// Number of tiles the final image spans
    pub repetition_count: u32,
    /// Fixed render width (pixels)
    pub image_width_px: u32,
    /// Override periods to (1, 1) and elevation to `ISOMETRIC_ELEVATION_DEGREES`
    pub isometric: bool,
}

impl Default for TilingRequest {
    fn default() -> Self {
        Self {
            x_period: 1,
            y_period: 1,
            elevation_degrees: 45.0,
            repetition_count: 1,
            image_width_px: DEFAULT_IMAGE_WIDTH_PX,
            isometric: false,
        }
    }
}

impl TilingRequest {
    /// Create a non-isometric request.
    pub fn new(
        x_period: i32,
        y_period: i32,
        elevation_degrees: f64,
        repetition_count: u32,
        image_width_px: u32,
    ) -> Self {
        Self {
            x_period,
            y_period,
            elevation_degrees,
            repetition_count,
            image_width_px,
            isometric: false,
        }
    }

    /// Create an isometric request. Periods and elevation are fixed by the override.
    pub fn isometric_view(repetition_count: u32, image_width_px: u32) -> Self {
        Self {
            repetition_count,
            image_width_px,
            isometric: true,
            ..Self::default()
        }
    }

    /// Same request with another render width.
    pub fn with_image_width(self, image_width_px: u32) -> Self {
        Self { image_width_px, ..self }
    }

    /// Periods the solver actually uses.
    pub fn effective_periods(&self) -> (i32, i32) {
        if self.isometric {
            (1, 1)
        } else {
            (self.x_period, self.y_period)
        }
    }

    /// Elevation (degrees) the solver actually uses.
    pub fn effective_elevation_degrees(&self) -> f64 {
        if self.isometric {
            ISOMETRIC_ELEVATION_DEGREES
        } else {
            self.elevation_degrees
        }
    }

    /// Check the request against the accepted ranges.
    ///
    /// The solver accepts anything; this is the boundary check a caller runs
    /// before solving. Isometric requests only have their repetition count
    /// and width checked, since the override replaces the rest.
    ///
    /// # Errors
    ///
    /// - `InvalidPeriod` for the degenerate (0, 0) pair or periods out of range
    /// - `InvalidElevation` for non-finite or out-of-range elevation
    /// - `InvalidRepetitionCount` for zero or too many repetitions
    /// - `InvalidImageWidth` for a zero width
    pub fn validate(&self, limits: &TilingLimits) -> Result<()> {
        if self.image_width_px == 0 {
            return Err(Error::InvalidImageWidth(self.image_width_px));
        }
        if !limits.accepts_repetition_count(self.repetition_count) {
            return Err(Error::InvalidRepetitionCount(self.repetition_count));
        }
        if self.isometric {
            return Ok(());
        }

        let invalid_period = Error::InvalidPeriod {
            x_period: self.x_period,
            y_period: self.y_period,
        };
        if self.x_period == 0 && self.y_period == 0 {
            return Err(invalid_period);
        }
        if !limits.accepts_period(self.x_period) || !limits.accepts_period(self.y_period) {
            return Err(invalid_period);
        }
        if !limits.accepts_elevation(self.elevation_degrees) {
            return Err(Error::InvalidElevation(self.elevation_degrees));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "tiling_request_tests.rs"]
mod tests;
