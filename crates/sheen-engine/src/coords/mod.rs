//! Coordinate and geometry types shared by the kernel, the rasterizer and the
//! GPU backend.
//!
//! Canonical CPU space:
//! - Pixels
//! - Origin top-left
//! - +X right, +Y down
//!
//! Clip space is produced per vertex by `kernel::normalize`.

mod constants;
mod corner_radii;
mod rect;
mod vec2;

pub use constants::DrawConstants;
pub use corner_radii::CornerRadii;
pub use rect::Rect;
pub use vec2::Vec2;
