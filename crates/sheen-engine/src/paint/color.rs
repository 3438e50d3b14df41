use core::ops::Mul;

use bytemuck::{Pod, Zeroable};

/// Linear RGBA color with straight (non-premultiplied) alpha.
///
/// This is the color carried by every vertex record and produced by every
/// fragment. `#[repr(C)]` so it can be uploaded as a `vec4<f32>` attribute.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    pub const RED: Self = Self::new(1.0, 0.0, 0.0, 1.0);
    pub const GREEN: Self = Self::new(0.0, 1.0, 0.0, 1.0);
    pub const BLUE: Self = Self::new(0.0, 0.0, 1.0, 1.0);

    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a color from straight sRGB-encoded bytes, kept as-is (no
    /// transfer function applied), scaled to `[0, 1]`.
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a as f32 / 255.0)
    }

    /// Quantizes to bytes, clamping each channel to `[0, 1]` first.
    #[inline]
    pub fn to_u8(self) -> [u8; 4] {
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0 + 0.5) as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }

    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }

    /// Linear interpolation of all four channels: `self` at `t = 0`, `to` at `t = 1`.
    #[inline]
    pub fn lerp(self, to: Color, t: f32) -> Self {
        Self::new(
            self.r + (to.r - self.r) * t,
            self.g + (to.g - self.g) * t,
            self.b + (to.b - self.b) * t,
            self.a + (to.a - self.a) * t,
        )
    }
}

/// Component-wise modulation (texture sample × vertex color).
impl Mul for Color {
    type Output = Color;
    #[inline]
    fn mul(self, rhs: Color) -> Color {
        Color::new(self.r * rhs.r, self.g * rhs.g, self.b * rhs.b, self.a * rhs.a)
    }
}

impl Mul<f32> for Color {
    type Output = Color;
    #[inline]
    fn mul(self, rhs: f32) -> Color {
        Color::new(self.r * rhs, self.g * rhs, self.b * rhs, self.a * rhs)
    }
}

impl From<[f32; 4]> for Color {
    #[inline]
    fn from(c: [f32; 4]) -> Self {
        Self::new(c[0], c[1], c[2], c[3])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_from_transparent_scales_every_channel() {
        let c = Color::new(1.0, 0.5, 0.25, 1.0);
        assert_eq!(Color::TRANSPARENT.lerp(c, 0.0), Color::TRANSPARENT);
        assert_eq!(Color::TRANSPARENT.lerp(c, 1.0), c);
        assert_eq!(Color::TRANSPARENT.lerp(c, 0.5), Color::new(0.5, 0.25, 0.125, 0.5));
    }

    #[test]
    fn mul_is_component_wise() {
        let a = Color::new(1.0, 0.5, 0.0, 0.5);
        let b = Color::new(0.5, 0.5, 1.0, 1.0);
        assert_eq!(a * b, Color::new(0.5, 0.25, 0.0, 0.5));
    }

    #[test]
    fn to_u8_rounds_and_clamps() {
        assert_eq!(Color::new(1.0, 0.0, 2.0, -1.0).to_u8(), [255, 0, 255, 0]);
        assert_eq!(Color::new(0.5, 0.5, 0.5, 0.5).to_u8(), [128, 128, 128, 128]);
        assert_eq!(Color::from_u8(255, 0, 51, 255), Color::new(1.0, 0.0, 0.2, 1.0));
    }
}
