/// TilingResult: immutable output record of the solver.
///
/// Holds what the host applies to its camera and render settings
/// (rotation, orthographic scale, image height) plus the intermediate
/// angles the solver derived them from.

use glam::DVec3;

/// Output of `TileCameraSolver::solve`. Created only by the solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TilingResult {
    rotation_radians: DVec3,
    ortho_scale: f64,
    image_width_px: u32,
    image_height_px: u32,
    azimuth: f64,
    adjusted_elevation: f64,
    lattice_steps: f64,
}

impl TilingResult {
    pub(crate) fn new(
        rotation_radians: DVec3,
        ortho_scale: f64,
        image_width_px: u32,
        image_height_px: u32,
        azimuth: f64,
        adjusted_elevation: f64,
        lattice_steps: f64,
    ) -> Self {
        Self {
            rotation_radians,
            ortho_scale,
            image_width_px,
            image_height_px,
            azimuth,
            adjusted_elevation,
            lattice_steps,
        }
    }

    // ===== HOST OUTPUTS =====

    /// Euler rotation (x = pitch, y = roll, z = yaw), in radians. Roll is always 0.
    pub fn rotation_radians(&self) -> DVec3 {
        self.rotation_radians
    }

    /// Orthographic scale fitting `repetition_count` tiles across the view width.
    pub fn ortho_scale(&self) -> f64 {
        self.ortho_scale
    }

    /// Render height that closes the tiling without a fractional-pixel seam.
    pub fn image_height_px(&self) -> u32 {
        self.image_height_px
    }

    /// Render width the height was derived from (copied from the request).
    pub fn image_width_px(&self) -> u32 {
        self.image_width_px
    }

    pub fn pitch(&self) -> f64 {
        self.rotation_radians.x
    }

    pub fn roll(&self) -> f64 {
        self.rotation_radians.y
    }

    pub fn yaw(&self) -> f64 {
        self.rotation_radians.z
    }

    // ===== DIAGNOSTICS =====

    /// Yaw aligning the view with the lattice direction, `atan2(y_period, x_period)`.
    pub fn azimuth(&self) -> f64 {
        self.azimuth
    }

    /// Elevation (radians, negative-down convention) that exactly produces
    /// `image_height_px`. Differs slightly from the requested one.
    pub fn adjusted_elevation(&self) -> f64 {
        self.adjusted_elevation
    }

    /// Adjusted elevation as a positive tilt in degrees, comparable with the request.
    pub fn adjusted_elevation_degrees(&self) -> f64 {
        -self.adjusted_elevation.to_degrees()
    }

    /// Lattice repetitions along the view direction before the pattern
    /// realigns, `|x_period| / gcd(x_period, y_period)`. Signed like the gcd;
    /// NaN for the (0, 0) pair.
    pub fn lattice_steps(&self) -> f64 {
        self.lattice_steps
    }
}
