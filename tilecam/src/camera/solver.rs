/// TileCameraSolver: maps tiling parameters to an orthographic camera pose.
///
/// Pure and stateless: identical requests give identical results, and any
/// number of threads may solve concurrently.

use std::f64::consts::FRAC_PI_2;
use glam::DVec3;
use crate::error::Result;
use crate::utils::gcd;
use super::limits::TilingLimits;
use super::tiling_request::TilingRequest;
use super::tiling_result::TilingResult;

const SOURCE: &str = "tilecam::solver";

/// Orthographic tile camera solver.
///
/// # Example
///
/// ```
/// use tilecam::camera::{TileCameraSolver, TilingRequest};
///
/// let result = TileCameraSolver::solve(TilingRequest::new(1, 1, 45.0, 1, 512));
/// assert_eq!(result.image_height_px(), 362);
/// ```
pub struct TileCameraSolver;

impl TileCameraSolver {
    /// Solve a request. Never fails.
    ///
    /// The lattice step count divides by the signed `gcd`, so a negative
    /// `y_period` gives negative steps and a negative ortho scale. The (0, 0)
    /// period pair is undefined: azimuth is 0 and the ortho scale is NaN.
    /// Callers should reject it with `TilingRequest::validate` first.
    pub fn solve(request: TilingRequest) -> TilingResult {
        let (x_period, y_period) = request.effective_periods();
        let elevation = -request.effective_elevation_degrees().to_radians();
        let width = request.image_width_px;

        let azimuth = f64::from(y_period).atan2(f64::from(x_period));

        // Snap the height to whole pixels, then back-solve the elevation
        // that produces exactly that height.
        let unadjusted_aspect_ratio = (FRAC_PI_2 + elevation).cos();
        let unadjusted_height = unadjusted_aspect_ratio * f64::from(width);
        let image_height_px = round_half_up(unadjusted_height);
        let adjusted_aspect_ratio = f64::from(image_height_px) / f64::from(width);
        let adjusted_elevation = adjusted_aspect_ratio.acos() - FRAC_PI_2;

        // Identity camera looks down the front view axis
        let rotation = DVec3::new(FRAC_PI_2 + adjusted_elevation, 0.0, azimuth);

        let lattice_steps = match gcd(x_period, y_period) {
            0 => {
                crate::tilecam_warn!(SOURCE, "Degenerate period pair (0, 0): ortho scale is undefined");
                f64::NAN
            }
            divisor => f64::from(x_period.unsigned_abs()) / f64::from(divisor),
        };
        let ortho_scale = f64::from(request.repetition_count) * lattice_steps / azimuth.cos();

        TilingResult::new(
            rotation,
            ortho_scale,
            width,
            image_height_px,
            azimuth,
            adjusted_elevation,
            lattice_steps,
        )
    }

    /// Validate against `limits`, then solve.
    ///
    /// # Errors
    ///
    /// Any error from `TilingRequest::validate`, logged before it is returned.
    pub fn solve_checked(request: TilingRequest, limits: &TilingLimits) -> Result<TilingResult> {
        request.validate(limits).map_err(|error| {
            crate::tilecam_error!(SOURCE, "Rejected tiling request: {}", error);
            error
        })?;
        Ok(Self::solve(request))
    }
}

/// Shorthand for `TileCameraSolver::solve`.
pub fn solve(request: TilingRequest) -> TilingResult {
    TileCameraSolver::solve(request)
}

/// Round half up: add 0.5 and truncate.
///
/// The float-to-int cast truncates toward zero and saturates, so negative
/// or NaN heights become 0 instead of wrapping.
fn round_half_up(value: f64) -> u32 {
    (value + 0.5) as u32
}

#[cfg(test)]
#[path = "solver_tests.rs"]
mod tests;
