use crate::coords::Vec2;
use crate::paint::Color;

/// Read-only 2D image bound to the textured polygon path.
///
/// Filtering and out-of-range `uv` handling belong to the implementation
/// (see `raster::ImageTexture`); the kernel only multiplies the returned texel
/// with the interpolated vertex color.
pub trait Texture: Sync {
    fn sample(&self, uv: Vec2) -> Color;
}

/// A texture that returns the same texel everywhere.
impl Texture for Color {
    #[inline]
    fn sample(&self, _uv: Vec2) -> Color {
        *self
    }
}
