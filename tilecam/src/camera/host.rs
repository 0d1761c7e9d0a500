/// Host seam: apply a solved tiling onto a caller-owned camera.
///
/// The solver never touches scene state. Hosts that want the full
/// "align camera" action implement `TileCameraHost` for their camera /
/// render settings pair and call `align_camera`.

use glam::DVec3;
use crate::error::Result;
use super::limits::TilingLimits;
use super::projection::ClipRange;
use super::solver::TileCameraSolver;
use super::tiling_request::TilingRequest;
use super::tiling_result::TilingResult;

const SOURCE: &str = "tilecam::host";

/// Camera and render settings owned by the host application.
pub trait TileCameraHost {
    /// Current render width in pixels
    fn render_width(&self) -> u32;

    /// Switch the camera to an orthographic projection
    fn set_orthographic(&mut self, ortho_scale: f64, clip: ClipRange);

    /// Set the camera's Euler rotation (x = pitch, y = roll, z = yaw), radians
    fn set_rotation_euler(&mut self, rotation: DVec3);

    /// Set the render height in pixels
    fn set_render_height(&mut self, height: u32);
}

/// Write a result onto a host camera.
pub fn apply_result(host: &mut dyn TileCameraHost, result: &TilingResult, clip: ClipRange) {
    host.set_orthographic(result.ortho_scale(), clip);
    host.set_rotation_euler(result.rotation_radians());
    host.set_render_height(result.image_height_px());
}

/// Align a host camera for seamless tiling.
///
/// The render width is read from the host and replaces the request's own
/// `image_width_px`. The request is validated before anything is solved
/// or written, so a rejected request leaves the host untouched.
///
/// # Errors
///
/// Any error from `TilingRequest::validate`, e.g. `InvalidPeriod` for the
/// (0, 0) pair or `InvalidImageWidth` when the host reports a zero width.
pub fn align_camera(
    host: &mut dyn TileCameraHost,
    request: TilingRequest,
    limits: &TilingLimits,
) -> Result<TilingResult> {
    let request = request.with_image_width(host.render_width());
    let result = TileCameraSolver::solve_checked(request, limits)?;

    apply_result(host, &result, ClipRange::default());

    crate::tilecam_info!(
        SOURCE,
        "Camera aligned: {}x{} px, ortho scale {:.4}, elevation {:.3} deg",
        result.image_width_px(),
        result.image_height_px(),
        result.ortho_scale(),
        result.adjusted_elevation_degrees()
    );

    Ok(result)
}

#[cfg(test)]
#[path = "host_tests.rs"]
mod tests;
