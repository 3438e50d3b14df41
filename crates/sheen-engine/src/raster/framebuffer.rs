use std::path::Path;

use crate::paint::Color;

use super::RasterError;

/// Alpha-over compositing of a straight-alpha fragment onto a target pixel.
///
/// Color: `src * src.a + dst * (1 - src.a)`; alpha: `src.a + dst.a * (1 - src.a)`.
/// This is the same blend state the GPU renderers configure.
#[inline]
pub fn blend_over(dst: Color, src: Color) -> Color {
    let inv = 1.0 - src.a;
    Color::new(
        src.r * src.a + dst.r * inv,
        src.g * src.a + dst.g * inv,
        src.b * src.a + dst.b * inv,
        src.a + dst.a * inv,
    )
}

/// CPU render target: row-major linear RGBA pixels, origin top-left.
#[derive(Debug, Clone, PartialEq)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Framebuffer {
    /// Creates a transparent target.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::TRANSPARENT; width as usize * height as usize],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Resets every pixel to `color`. Keeps the allocation.
    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<Color> {
        if x < self.width && y < self.height {
            Some(self.pixels[y as usize * self.width as usize + x as usize])
        } else {
            None
        }
    }

    /// Composites `color` over the pixel at `(x, y)`. Out-of-bounds writes are dropped.
    #[inline]
    pub fn blend(&mut self, x: u32, y: u32, color: Color) {
        if x < self.width && y < self.height {
            let i = y as usize * self.width as usize + x as usize;
            self.pixels[i] = blend_over(self.pixels[i], color);
        }
    }

    #[inline]
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Rows `[y0, y1)` as one contiguous slice, for row-parallel shading.
    #[inline]
    pub(crate) fn rows_mut(&mut self, y0: u32, y1: u32) -> &mut [Color] {
        let w = self.width as usize;
        &mut self.pixels[y0 as usize * w..y1 as usize * w]
    }

    /// Quantizes to an 8-bit straight-alpha image.
    pub fn to_rgba8(&self) -> image::RgbaImage {
        let mut img = image::RgbaImage::new(self.width, self.height);
        for (dst, src) in img.pixels_mut().zip(&self.pixels) {
            *dst = image::Rgba(src.to_u8());
        }
        img
    }

    /// Writes the target as PNG (format picked from the extension).
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), RasterError> {
        self.to_rgba8().save(path)?;
        Ok(())
    }
}
