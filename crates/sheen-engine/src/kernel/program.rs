//! Vertex + fragment function pairs, one per primitive kind.
//!
//! A [`Program`] never rasterizes. Triangle setup and interpolation are done by
//! whoever drives it (`raster::Rasterizer` on the CPU, the GPU otherwise).

use crate::coords::{DrawConstants, Vec2};
use crate::paint::Color;

use super::aa::{aa_half_width, composite, coverage};
use super::derivative::Derivative;
use super::normalize::{to_clip, ClipPosition};
use super::polygon::{flat_pixel, line_pixel, textured_pixel};
use super::radius::resolve_radius;
use super::sdf::rounded_rect_distance;
use super::texture::Texture;
use super::vertex::{LineVertex, PolygonVertex, RoundedRectVertex};

// ── interpolation ─────────────────────────────────────────────────────────

/// Barycentric blend of three per-vertex values.
///
/// `w` sums to one. With `w' = 1` for every vertex (2D), perspective-correct
/// interpolation reduces to this linear form.
pub trait Interpolate: Copy {
    fn interpolate(a: &Self, b: &Self, c: &Self, w: [f32; 3]) -> Self;
}

impl Interpolate for f32 {
    #[inline]
    fn interpolate(a: &Self, b: &Self, c: &Self, w: [f32; 3]) -> Self {
        a * w[0] + b * w[1] + c * w[2]
    }
}

impl Interpolate for Vec2 {
    #[inline]
    fn interpolate(a: &Self, b: &Self, c: &Self, w: [f32; 3]) -> Self {
        Vec2::new(
            f32::interpolate(&a.x, &b.x, &c.x, w),
            f32::interpolate(&a.y, &b.y, &c.y, w),
        )
    }
}

impl Interpolate for [f32; 4] {
    #[inline]
    fn interpolate(a: &Self, b: &Self, c: &Self, w: [f32; 3]) -> Self {
        core::array::from_fn(|i| f32::interpolate(&a[i], &b[i], &c[i], w))
    }
}

impl Interpolate for Color {
    #[inline]
    fn interpolate(a: &Self, b: &Self, c: &Self, w: [f32; 3]) -> Self {
        Color::from(<[f32; 4]>::interpolate(&a.to_array(), &b.to_array(), &c.to_array(), w))
    }
}

// ── program contract ──────────────────────────────────────────────────────

/// Output of a vertex function.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct VertexOutput<V> {
    pub clip: ClipPosition,
    pub varying: V,
}

/// A primitive kind expressed as two pure functions.
pub trait Program: Sync {
    type Vertex: Copy + Sync;
    type Varying: Interpolate + Send + Sync;

    /// Runs once per vertex.
    fn vertex(&self, vertex: &Self::Vertex, constants: &DrawConstants) -> VertexOutput<Self::Varying>;

    /// Runs once per covered pixel. `frag` is the sample position in pixels.
    fn fragment(&self, frag: Vec2, varying: &Self::Varying) -> Color;
}

// ── rounded rectangles ────────────────────────────────────────────────────

/// Interpolated rounded-rect attributes (everything but `position`).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct RoundedRectVarying {
    pub rect_size: Vec2,
    pub rect_center: Vec2,
    pub outer_radius: [f32; 4],
    pub inner_radius: [f32; 4],
    pub color: Color,
}

impl Interpolate for RoundedRectVarying {
    #[inline]
    fn interpolate(a: &Self, b: &Self, c: &Self, w: [f32; 3]) -> Self {
        Self {
            rect_size: Vec2::interpolate(&a.rect_size, &b.rect_size, &c.rect_size, w),
            rect_center: Vec2::interpolate(&a.rect_center, &b.rect_center, &c.rect_center, w),
            outer_radius: <[f32; 4]>::interpolate(&a.outer_radius, &b.outer_radius, &c.outer_radius, w),
            inner_radius: <[f32; 4]>::interpolate(&a.inner_radius, &b.inner_radius, &c.inner_radius, w),
            color: Color::interpolate(&a.color, &b.color, &c.color, w),
        }
    }
}

impl RoundedRectVarying {
    /// Signed distance from `frag` to this rectangle's boundary, using the
    /// radius of the quadrant `frag` falls in.
    #[inline]
    pub fn distance(&self, frag: Vec2) -> f32 {
        let offset = frag - self.rect_center;
        let half = self.rect_size * 0.5;
        let radius = resolve_radius(offset, self.outer_radius, half);
        rounded_rect_distance(offset, half, radius)
    }
}

/// Per-pixel color of a rounded rectangle: distance, AA band from the
/// derivative strategy, coverage, then blend over transparent.
#[inline]
pub fn rounded_rect_pixel<D: Derivative>(
    frag: Vec2,
    varying: &RoundedRectVarying,
    derivative: &D,
) -> Color {
    let d = varying.distance(frag);
    let w = aa_half_width(derivative.fwidth(|p| varying.distance(p), frag));
    composite(varying.color, coverage(d, w))
}

/// Anti-aliased rounded rectangles.
#[derive(Debug, Copy, Clone, Default)]
pub struct RoundedRectProgram<D> {
    pub derivative: D,
}

impl<D: Derivative> RoundedRectProgram<D> {
    #[inline]
    pub const fn new(derivative: D) -> Self {
        Self { derivative }
    }
}

impl<D: Derivative> Program for RoundedRectProgram<D> {
    type Vertex = RoundedRectVertex;
    type Varying = RoundedRectVarying;

    #[inline]
    fn vertex(&self, v: &RoundedRectVertex, constants: &DrawConstants) -> VertexOutput<RoundedRectVarying> {
        VertexOutput {
            clip: to_clip(v.position, constants),
            varying: RoundedRectVarying {
                rect_size: v.rect_size,
                rect_center: v.rect_center,
                outer_radius: v.outer_radius,
                inner_radius: v.inner_radius,
                color: v.color,
            },
        }
    }

    #[inline]
    fn fragment(&self, frag: Vec2, varying: &RoundedRectVarying) -> Color {
        rounded_rect_pixel(frag, varying, &self.derivative)
    }
}

// ── polygons ──────────────────────────────────────────────────────────────

#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct PolygonVarying {
    pub uv: Vec2,
    pub color: Color,
}

impl Interpolate for PolygonVarying {
    #[inline]
    fn interpolate(a: &Self, b: &Self, c: &Self, w: [f32; 3]) -> Self {
        Self {
            uv: Vec2::interpolate(&a.uv, &b.uv, &c.uv, w),
            color: Color::interpolate(&a.color, &b.color, &c.color, w),
        }
    }
}

#[inline]
fn polygon_vertex(v: &PolygonVertex, constants: &DrawConstants) -> VertexOutput<PolygonVarying> {
    VertexOutput {
        clip: to_clip(v.position, constants),
        varying: PolygonVarying { uv: v.uv, color: v.color },
    }
}

/// Flat-colored polygons (vertex color only).
#[derive(Debug, Copy, Clone, Default)]
pub struct FlatPolygonProgram;

impl Program for FlatPolygonProgram {
    type Vertex = PolygonVertex;
    type Varying = PolygonVarying;

    #[inline]
    fn vertex(&self, v: &PolygonVertex, constants: &DrawConstants) -> VertexOutput<PolygonVarying> {
        polygon_vertex(v, constants)
    }

    #[inline]
    fn fragment(&self, _frag: Vec2, varying: &PolygonVarying) -> Color {
        flat_pixel(varying.color)
    }
}

/// Textured polygons: vertex color × texel.
pub struct TexturedPolygonProgram<'t, T: Texture + ?Sized> {
    pub texture: &'t T,
}

impl<'t, T: Texture + ?Sized> TexturedPolygonProgram<'t, T> {
    #[inline]
    pub fn new(texture: &'t T) -> Self {
        Self { texture }
    }
}

impl<T: Texture + ?Sized> Program for TexturedPolygonProgram<'_, T> {
    type Vertex = PolygonVertex;
    type Varying = PolygonVarying;

    #[inline]
    fn vertex(&self, v: &PolygonVertex, constants: &DrawConstants) -> VertexOutput<PolygonVarying> {
        polygon_vertex(v, constants)
    }

    #[inline]
    fn fragment(&self, _frag: Vec2, varying: &PolygonVarying) -> Color {
        textured_pixel(varying.color, varying.uv, self.texture)
    }
}

// ── lines ─────────────────────────────────────────────────────────────────

#[derive(Debug, Copy, Clone, Default)]
pub struct LineProgram;

impl Program for LineProgram {
    type Vertex = LineVertex;
    type Varying = Color;

    #[inline]
    fn vertex(&self, v: &LineVertex, constants: &DrawConstants) -> VertexOutput<Color> {
        VertexOutput { clip: to_clip(v.position, constants), varying: v.color }
    }

    #[inline]
    fn fragment(&self, _frag: Vec2, color: &Color) -> Color {
        line_pixel(*color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::derivative::{CentralDifference, Constant};

    const SCREEN: DrawConstants = DrawConstants::new(100, 100);

    fn red_rect() -> RoundedRectVarying {
        RoundedRectVarying {
            rect_size: Vec2::new(40.0, 40.0),
            rect_center: Vec2::new(50.0, 50.0),
            outer_radius: [8.0; 4],
            inner_radius: [0.0; 4],
            color: Color::RED,
        }
    }

    // ── interpolation ─────────────────────────────────────────────────────

    #[test]
    fn interpolation_at_a_vertex_returns_that_vertex() {
        let a = PolygonVarying { uv: Vec2::new(0.0, 0.0), color: Color::RED };
        let b = PolygonVarying { uv: Vec2::new(1.0, 0.0), color: Color::GREEN };
        let c = PolygonVarying { uv: Vec2::new(0.0, 1.0), color: Color::BLUE };
        assert_eq!(PolygonVarying::interpolate(&a, &b, &c, [0.0, 1.0, 0.0]), b);
    }

    #[test]
    fn constant_attributes_survive_interpolation() {
        let v = red_rect();
        let out = RoundedRectVarying::interpolate(&v, &v, &v, [0.25, 0.25, 0.5]);
        assert_eq!(out, v);
    }

    // ── vertex stage ──────────────────────────────────────────────────────

    #[test]
    fn vertex_stage_normalizes_and_forwards_attributes() {
        let program = RoundedRectProgram::new(CentralDifference);
        let v = RoundedRectVertex {
            position: Vec2::new(0.0, 0.0),
            rect_size: Vec2::new(40.0, 40.0),
            rect_center: Vec2::new(50.0, 50.0),
            outer_radius: [8.0; 4],
            inner_radius: [1.0, 2.0, 3.0, 4.0],
            color: Color::RED,
        };
        let out = program.vertex(&v, &SCREEN);
        assert_eq!(out.clip, ClipPosition::new(-1.0, 1.0));
        assert_eq!(out.varying.inner_radius, [1.0, 2.0, 3.0, 4.0]);
        assert_eq!(out.varying.color, Color::RED);
    }

    // ── end-to-end per-pixel scenario ─────────────────────────────────────

    #[test]
    fn rect_center_is_opaque_red() {
        let program = RoundedRectProgram::new(CentralDifference);
        assert_eq!(program.fragment(Vec2::new(50.0, 50.0), &red_rect()), Color::RED);
    }

    #[test]
    fn far_outside_is_transparent() {
        let program = RoundedRectProgram::new(CentralDifference);
        assert_eq!(program.fragment(Vec2::new(5.0, 5.0), &red_rect()), Color::TRANSPARENT);
    }

    #[test]
    fn top_mid_edge_is_half_covered() {
        let program = RoundedRectProgram::new(CentralDifference);
        let c = program.fragment(Vec2::new(50.0, 30.0), &red_rect());
        assert!((c.a - 0.5).abs() < 1e-3, "{c:?}");
        assert!((c.r - 0.5).abs() < 1e-3, "{c:?}");
        assert_eq!((c.g, c.b), (0.0, 0.0));
    }

    #[test]
    fn zero_derivative_gives_a_hard_edge() {
        let program = RoundedRectProgram::new(Constant(0.0));
        let v = red_rect();
        assert_eq!(program.fragment(Vec2::new(50.0, 30.5), &v), Color::RED);
        assert_eq!(program.fragment(Vec2::new(50.0, 29.5), &v), Color::TRANSPARENT);
    }

    #[test]
    fn rounded_corner_cuts_the_box_corner() {
        let program = RoundedRectProgram::new(CentralDifference);
        let c = program.fragment(Vec2::new(31.0, 31.0), &red_rect());
        assert_eq!(c, Color::TRANSPARENT);
    }

    #[test]
    fn inner_radius_does_not_affect_output() {
        let program = RoundedRectProgram::new(CentralDifference);
        let mut with_inner = red_rect();
        with_inner.inner_radius = [5.0; 4];
        for p in [Vec2::new(50.0, 30.0), Vec2::new(33.0, 33.0), Vec2::new(50.0, 50.0)] {
            assert_eq!(program.fragment(p, &with_inner), program.fragment(p, &red_rect()));
        }
    }

    // ── polygon / line programs ───────────────────────────────────────────

    #[test]
    fn flat_program_ignores_uv() {
        let v = PolygonVarying { uv: Vec2::new(0.3, 0.9), color: Color::BLUE };
        assert_eq!(FlatPolygonProgram.fragment(Vec2::zero(), &v), Color::BLUE);
    }

    #[test]
    fn textured_program_modulates_by_texel() {
        let texel = Color::new(0.5, 0.5, 0.5, 1.0);
        let program = TexturedPolygonProgram::new(&texel);
        let v = PolygonVarying { uv: Vec2::zero(), color: Color::new(1.0, 0.5, 0.0, 1.0) };
        assert_eq!(program.fragment(Vec2::zero(), &v), Color::new(0.5, 0.25, 0.0, 1.0));
    }

    #[test]
    fn line_program_passes_color_through() {
        let out = LineProgram.vertex(&LineVertex::new(Vec2::new(100.0, 100.0), Color::GREEN), &SCREEN);
        assert_eq!(out.clip, ClipPosition::new(1.0, -1.0));
        assert_eq!(LineProgram.fragment(Vec2::zero(), &out.varying), Color::GREEN);
    }
}
