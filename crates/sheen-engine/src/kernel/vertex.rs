//! Per-vertex records, one layout per primitive kind.
//!
//! All three are `#[repr(C)]` + `Pod` so the same slices feed both the
//! software rasterizer and the GPU vertex buffers.

use bytemuck::{Pod, Zeroable};

use crate::coords::Vec2;
use crate::paint::Color;

/// Vertex of a rounded-rectangle quad (72 bytes).
///
/// The four vertices of one rectangle share `rect_size`, `rect_center` and
/// both radius vectors; only `position` (and optionally `color`) differ.
///
///  offset  0  position      [f32; 2]
///  offset  8  rect_size     [f32; 2]
///  offset 16  rect_center   [f32; 2]
///  offset 24  outer_radius  [f32; 4]  (br, tr, bl, tl)
///  offset 40  inner_radius  [f32; 4]  (carried, not evaluated)
///  offset 56  color         [f32; 4]
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct RoundedRectVertex {
    pub position: Vec2,
    pub rect_size: Vec2,
    pub rect_center: Vec2,
    pub outer_radius: [f32; 4],
    pub inner_radius: [f32; 4],
    pub color: Color,
}

/// Vertex shared by the flat and textured polygon paths (32 bytes).
/// The flat path ignores `uv`.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct PolygonVertex {
    pub position: Vec2,
    pub uv: Vec2,
    pub color: Color,
}

impl PolygonVertex {
    #[inline]
    pub const fn new(position: Vec2, uv: Vec2, color: Color) -> Self {
        Self { position, uv, color }
    }

    /// Vertex for the flat path; `uv` is zeroed.
    #[inline]
    pub const fn flat(position: Vec2, color: Color) -> Self {
        Self { position, uv: Vec2::zero(), color }
    }
}

/// Vertex of a colored line mesh (24 bytes).
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct LineVertex {
    pub position: Vec2,
    pub color: Color,
}

impl LineVertex {
    #[inline]
    pub const fn new(position: Vec2, color: Color) -> Self {
        Self { position, color }
    }
}
