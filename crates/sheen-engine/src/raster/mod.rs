//! Software rasterization harness.
//!
//! Runs the `kernel` programs on the CPU the way a GPU would: vertex stage,
//! viewport transform, triangle setup with a top-left fill rule, barycentric
//! interpolation, per-pixel shading and alpha-over blending. Used for tests,
//! reference images and headless rendering.

mod config;
mod error;
mod framebuffer;
mod rasterizer;
mod renderer;
mod sampler;
mod triangle;

pub use config::{PixelCenter, RasterConfig};
pub use error::RasterError;
pub use framebuffer::{blend_over, Framebuffer};
pub use rasterizer::Rasterizer;
pub use renderer::SoftwareRenderer;
pub use sampler::{AddressMode, FilterMode, ImageTexture};
