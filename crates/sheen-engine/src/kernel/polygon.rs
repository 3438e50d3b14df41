//! Pixel functions of the non-distance-field paths.
//!
//! No AA shaping happens here: edges are whatever the rasterizer's coverage
//! test produces.

use crate::coords::Vec2;
use crate::paint::Color;

use super::texture::Texture;

/// Flat polygon: the interpolated color, untouched.
#[inline]
pub fn flat_pixel(color: Color) -> Color {
    color
}

/// Textured polygon: interpolated color modulated by the texel at `uv`.
#[inline]
pub fn textured_pixel<T: Texture + ?Sized>(color: Color, uv: Vec2, texture: &T) -> Color {
    color * texture.sample(uv)
}

/// Line mesh: the interpolated color, untouched.
#[inline]
pub fn line_pixel(color: Color) -> Color {
    color
}
