use thiserror::Error;

use crate::scene::TextureId;

/// Errors surfaced by the software raster harness and scene recording.
///
/// The per-vertex and per-pixel kernel never returns these; they guard the
/// inputs before any invocation runs.
#[derive(Debug, Error)]
pub enum RasterError {
    #[error("draw constants must have a non-zero screen size (got {width}x{height})")]
    InvalidDrawConstants { width: u32, height: u32 },

    #[error("index {index} is out of range for {vertex_count} vertices")]
    IndexOutOfRange { index: u32, vertex_count: usize },

    #[error("framebuffer is {actual_width}x{actual_height} but the draw targets {width}x{height}")]
    FramebufferSizeMismatch {
        width: u32,
        height: u32,
        actual_width: u32,
        actual_height: u32,
    },

    #[error("draw references unknown texture {0:?}")]
    UnknownTexture(TextureId),

    #[error("image encoding failed: {0}")]
    Image(#[from] image::ImageError),
}
