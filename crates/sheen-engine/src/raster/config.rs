use crate::kernel::DerivativeMode;
use crate::paint::Color;

/// Where inside a pixel the rasterizer samples coverage and shading.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum PixelCenter {
    /// `(x + 0.5, y + 0.5)`, the GPU convention.
    #[default]
    HalfIntegral,
    /// `(x, y)`: pixel indices are the sample positions.
    Integral,
}

impl PixelCenter {
    #[inline]
    pub fn offset(self) -> f32 {
        match self {
            PixelCenter::HalfIntegral => 0.5,
            PixelCenter::Integral => 0.0,
        }
    }
}

/// Software rasterizer settings.
///
/// Keep this small; every field must have a sensible default that matches
/// what a hardware rasterizer would do.
///
/// The default samples at half-integral pixel centers. Coverage figures
/// quoted at integer pixel positions (e.g. a rect edge landing exactly on
/// `y = 30` reading as ~50% alpha at pixel `(50, 30)`) only hold with
/// [`PixelCenter::Integral`]; at `(50.5, 30.5)` the same pixel is almost fully
/// covered.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterConfig {
    /// How the screen-space derivative of the distance field is estimated.
    pub derivative: DerivativeMode,

    /// Sample position within each pixel.
    pub pixel_center: PixelCenter,

    /// Shade rows of a triangle on the rayon pool.
    ///
    /// Disable for deterministic single-threaded runs (profiling, debugging).
    pub parallel: bool,

    /// Color used by `SoftwareRenderer` to clear the target before a frame.
    pub clear: Color,
}

impl Default for RasterConfig {
    fn default() -> Self {
        Self {
            derivative: DerivativeMode::Central,
            pixel_center: PixelCenter::HalfIntegral,
            parallel: true,
            clear: Color::TRANSPARENT,
        }
    }
}
