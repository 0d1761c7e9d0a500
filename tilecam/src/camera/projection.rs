/// Projection helpers: turn a `TilingResult` into glam matrices.
///
/// Conventions follow the host camera: a camera with identity orientation
/// looks down -Z with +Y up, and Euler angles are applied X, then Y, then Z.
/// The ortho scale spans the larger image dimension, which is the width
/// since the height never exceeds it.

use glam::{DMat4, DQuat, DVec3};
use super::tiling_result::TilingResult;

/// Near/far clipping distances written onto the camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipRange {
    pub near: f64,
    pub far: f64,
}

impl Default for ClipRange {
    fn default() -> Self {
        Self {
            near: 0.0001,
            far: 1000.0,
        }
    }
}

impl TilingResult {
    /// Height / width of the render target. NaN when the width is zero.
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.image_height_px()) / f64::from(self.image_width_px())
    }

    /// Camera orientation: `Rz(yaw) * Ry(roll) * Rx(pitch)`.
    pub fn rotation_quat(&self) -> DQuat {
        let rotation = self.rotation_radians();
        DQuat::from_rotation_z(rotation.z)
            * DQuat::from_rotation_y(rotation.y)
            * DQuat::from_rotation_x(rotation.x)
    }

    /// Camera orientation as a 4x4 matrix.
    pub fn rotation_matrix(&self) -> DMat4 {
        DMat4::from_quat(self.rotation_quat())
    }

    /// World-space direction the camera looks along.
    pub fn view_direction(&self) -> DVec3 {
        self.rotation_quat() * DVec3::NEG_Z
    }

    /// View matrix for a camera placed at `position` (inverse of its world transform).
    pub fn view_matrix(&self, position: DVec3) -> DMat4 {
        DMat4::from_rotation_translation(self.rotation_quat(), position).inverse()
    }

    /// Right-handed orthographic projection: `ortho_scale` wide,
    /// `ortho_scale * aspect_ratio` high, centered on the view axis.
    pub fn projection_matrix(&self, clip: ClipRange) -> DMat4 {
        let half_width = self.ortho_scale() * 0.5;
        let half_height = half_width * self.aspect_ratio();
        DMat4::orthographic_rh(
            -half_width,
            half_width,
            -half_height,
            half_height,
            clip.near,
            clip.far,
        )
    }
}

#[cfg(test)]
#[path = "projection_tests.rs"]
mod tests;
