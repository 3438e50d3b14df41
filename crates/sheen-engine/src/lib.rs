//! Sheen engine crate.
//!
//! Anti-aliased 2D vector primitives: rounded rectangles with per-corner
//! radii, flat and textured polygons, and line meshes.
//!
//! - `kernel` holds the per-vertex and per-pixel functions.
//! - `raster` runs them on the CPU; `render` runs the same math on wgpu.
//! - `scene` records what to draw, in order.

pub mod coords;
pub mod kernel;
pub mod logging;
pub mod paint;
pub mod raster;
pub mod render;
pub mod scene;
