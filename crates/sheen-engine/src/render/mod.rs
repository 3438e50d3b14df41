//! GPU rendering subsystem.
//!
//! Renderers consume `scene` draw streams and issue GPU commands via wgpu.
//! Each renderer is responsible for its own GPU resources (pipelines, buffers).
//!
//! Convention:
//! - CPU geometry is in pixels (top-left origin, +Y down).
//! - Vertex shaders convert to clip space using the `DrawConstants` uniform.
//! - Shaders implement the same per-pixel functions as `kernel`; the software
//!   rasterizer in `raster` is the reference for their output.

mod ctx;
pub mod shapes;

pub use ctx::{RenderCtx, RenderTarget};
pub use shapes::{
    LineRenderer, PolygonRenderer, RoundedRectRenderer, SceneRenderer, TextureBinding,
    TexturedPolygonRenderer,
};
