use crate::coords::{CornerRadii, Rect, Vec2};
use crate::kernel::RoundedRectVertex;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};

/// Side or corner of a rectangle, carrying the value to assign there.
///
/// Sides address both corners they touch.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum RectPart<T> {
    Left(T),
    Right(T),
    Top(T),
    Bottom(T),
    TopLeft(T),
    TopRight(T),
    BottomLeft(T),
    BottomRight(T),
}

/// Per-corner vertex colors, interpolated across the quad.
#[derive(Debug, Copy, Clone, PartialEq)]
struct CornerColors {
    top_left: Color,
    top_right: Color,
    bottom_right: Color,
    bottom_left: Color,
}

impl CornerColors {
    #[inline]
    const fn all(c: Color) -> Self {
        Self { top_left: c, top_right: c, bottom_right: c, bottom_left: c }
    }
}

/// Rounded rectangle builder.
///
/// Produces the indexed quad the rounded-rect program consumes. Corner radii
/// and colors are set independently; the quad itself is grown by
/// [`DrawRect::AA_MARGIN`] so the anti-aliasing band outside the boundary is
/// still covered by fragments.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawRect {
    rect: Rect,
    colors: CornerColors,
    radii: CornerRadii,
    inner_radii: CornerRadii,
}

impl DrawRect {
    /// Pixels added on every side of the emitted quad.
    pub const AA_MARGIN: f32 = 1.0;

    /// Black, square-cornered rectangle.
    pub fn new(rect: Rect) -> Self {
        Self {
            rect: rect.normalized(),
            colors: CornerColors::all(Color::BLACK),
            radii: CornerRadii::zero(),
            inner_radii: CornerRadii::zero(),
        }
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    #[inline]
    pub fn radii(&self) -> CornerRadii {
        self.radii
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.colors = CornerColors::all(color);
        self
    }

    /// Applies color parts in order; later parts win on shared corners.
    pub fn with_colors<const N: usize>(mut self, parts: [RectPart<Color>; N]) -> Self {
        let c = &mut self.colors;
        for part in parts {
            match part {
                RectPart::Left(v) => (c.top_left, c.bottom_left) = (v, v),
                RectPart::Right(v) => (c.top_right, c.bottom_right) = (v, v),
                RectPart::Top(v) => (c.top_left, c.top_right) = (v, v),
                RectPart::Bottom(v) => (c.bottom_left, c.bottom_right) = (v, v),
                RectPart::TopLeft(v) => c.top_left = v,
                RectPart::TopRight(v) => c.top_right = v,
                RectPart::BottomLeft(v) => c.bottom_left = v,
                RectPart::BottomRight(v) => c.bottom_right = v,
            }
        }
        self
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radii = CornerRadii::all(radius);
        self
    }

    /// Applies radius parts in order; later parts win on shared corners.
    pub fn with_radii<const N: usize>(mut self, parts: [RectPart<f32>; N]) -> Self {
        let r = &mut self.radii;
        for part in parts {
            match part {
                RectPart::Left(v) => (r.top_left, r.bottom_left) = (v, v),
                RectPart::Right(v) => (r.top_right, r.bottom_right) = (v, v),
                RectPart::Top(v) => (r.top_left, r.top_right) = (v, v),
                RectPart::Bottom(v) => (r.bottom_left, r.bottom_right) = (v, v),
                RectPart::TopLeft(v) => r.top_left = v,
                RectPart::TopRight(v) => r.top_right = v,
                RectPart::BottomLeft(v) => r.bottom_left = v,
                RectPart::BottomRight(v) => r.bottom_right = v,
            }
        }
        self
    }

    /// Stored in the vertex stream only; the distance field does not read it.
    pub fn with_inner_radii(mut self, radii: CornerRadii) -> Self {
        self.inner_radii = radii;
        self
    }

    /// Quad vertices (top-left, top-right, bottom-right, bottom-left) and the
    /// two triangles over them.
    pub fn to_vertices(&self) -> ([RoundedRectVertex; 4], [u32; 6]) {
        let quad = self.rect.inflate(Self::AA_MARGIN);
        let c = self.colors;

        let vertex = |position: Vec2, color: Color| RoundedRectVertex {
            position,
            rect_size: self.rect.size,
            rect_center: self.rect.center(),
            outer_radius: self.radii.to_packed(),
            inner_radius: self.inner_radii.to_packed(),
            color,
        };

        let vertices = [
            vertex(quad.top_left(), c.top_left),
            vertex(quad.top_right(), c.top_right),
            vertex(quad.bottom_right(), c.bottom_right),
            vertex(quad.bottom_left(), c.bottom_left),
        ];

        (vertices, [0, 1, 2, 0, 2, 3])
    }
}

impl DrawList {
    /// Records a rounded rectangle.
    pub fn push_rect(&mut self, rect: &DrawRect) {
        let (vertices, indices) = rect.to_vertices();
        // Quad indices are always in range.
        if let Ok(range) = self.rects.append(&vertices, &indices) {
            self.push_cmd(DrawCmd::RoundedRects(range));
        }
    }

    /// Records a solid rounded rectangle with uniform corner radius.
    #[inline]
    pub fn push_solid_rect(&mut self, rect: Rect, radius: f32, color: Color) {
        self.push_rect(&DrawRect::new(rect).with_radius(radius).with_color(color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::IndexRange;

    fn rect() -> Rect {
        Rect::new(10.0, 20.0, 40.0, 30.0)
    }

    #[test]
    fn quad_is_inflated_and_shares_rect_attributes() {
        let (v, idx) = DrawRect::new(rect()).to_vertices();
        assert_eq!(idx, [0, 1, 2, 0, 2, 3]);
        assert_eq!(v[0].position, Vec2::new(9.0, 19.0));
        assert_eq!(v[2].position, Vec2::new(51.0, 51.0));
        for vertex in &v {
            assert_eq!(vertex.rect_center, Vec2::new(30.0, 35.0));
            assert_eq!(vertex.rect_size, Vec2::new(40.0, 30.0));
        }
    }

    #[test]
    fn radius_parts_land_in_packed_slots() {
        // Packed order: bottom-right, top-right, bottom-left, top-left.
        let r = DrawRect::new(rect()).with_radii([RectPart::Top(4.0), RectPart::BottomRight(9.0)]);
        let (v, _) = r.to_vertices();
        assert_eq!(v[0].outer_radius, [9.0, 4.0, 0.0, 4.0]);

        let r = DrawRect::new(rect()).with_radius(2.0).with_radii([RectPart::Left(6.0)]);
        assert_eq!(r.to_vertices().0[3].outer_radius, [2.0, 2.0, 6.0, 6.0]);
    }

    #[test]
    fn color_parts_follow_vertex_corners() {
        let r = DrawRect::new(rect())
            .with_color(Color::WHITE)
            .with_colors([RectPart::Right(Color::RED), RectPart::BottomLeft(Color::BLUE)]);
        let (v, _) = r.to_vertices();
        assert_eq!(v[0].color, Color::WHITE);
        assert_eq!(v[1].color, Color::RED);
        assert_eq!(v[2].color, Color::RED);
        assert_eq!(v[3].color, Color::BLUE);
    }

    #[test]
    fn later_parts_override_earlier_ones() {
        let r = DrawRect::new(rect()).with_radii([RectPart::Bottom(3.0), RectPart::BottomLeft(1.0)]);
        assert_eq!(r.radii().bottom_left, 1.0);
        assert_eq!(r.radii().bottom_right, 3.0);
    }

    #[test]
    fn inner_radii_are_carried() {
        let r = DrawRect::new(rect()).with_inner_radii(CornerRadii::all(5.0));
        assert!(r.to_vertices().0.iter().all(|v| v.inner_radius == [5.0; 4]));
    }

    #[test]
    fn consecutive_rects_share_one_command() {
        let mut list = DrawList::new();
        list.push_solid_rect(rect(), 4.0, Color::RED);
        list.push_solid_rect(rect(), 4.0, Color::GREEN);
        assert_eq!(list.commands(), &[DrawCmd::RoundedRects(IndexRange::new(0, 12))]);
        assert_eq!(list.rect_mesh().indices()[6..], [4, 5, 6, 4, 6, 7]);
    }
}
