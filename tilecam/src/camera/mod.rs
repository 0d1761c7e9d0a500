//! Camera module: orthographic tile camera solver and its boundary types.
//!
//! `TileCameraSolver` is pure: it maps a `TilingRequest` to a
//! `TilingResult` and touches nothing else. Validation (`TilingLimits`),
//! glam matrices (`projection`) and applying the result to a host camera
//! (`host`) are layered on top.

mod host;
mod limits;
mod projection;
mod solver;
mod tiling_request;
mod tiling_result;

pub use host::{align_camera, apply_result, TileCameraHost};
pub use limits::TilingLimits;
pub use projection::ClipRange;
pub use solver::{solve, TileCameraSolver};
pub use tiling_request::{TilingRequest, DEFAULT_IMAGE_WIDTH_PX, ISOMETRIC_ELEVATION_DEGREES};
pub use tiling_result::TilingResult;
