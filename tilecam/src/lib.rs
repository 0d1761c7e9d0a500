/*!
# Tilecam

Orthographic camera alignment for seamlessly tileable renders.

Given a tiling period, an elevation (or the isometric override), a render
width and a tile repetition count, Tilecam computes the camera rotation,
the orthographic scale and the render height that make the rendered image
repeat without seams.

## Architecture

- **TileCameraSolver**: pure `TilingRequest -> TilingResult` computation
- **TilingLimits**: accepted input ranges, checked at the request boundary
- **projection**: glam rotation and orthographic projection matrices
- **TileCameraHost**: seam for applying a result to a host camera
- **log**: pluggable logger used by the crate's `tilecam_*!` macros
*/

// Internal modules
mod error;
mod tilecam;
pub mod camera;
pub mod log;
pub mod utils;

pub use crate::error::{Error, Result};
pub use crate::tilecam::Tilecam;
pub use crate::camera::{solve, TileCameraSolver, TilingRequest, TilingResult};

// Re-export math library at crate root
pub use glam;
