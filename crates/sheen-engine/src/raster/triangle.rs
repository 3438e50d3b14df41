use crate::coords::Vec2;

/// Edge function: twice the signed area of `(a, b, p)`.
#[inline]
fn edge(a: Vec2, b: Vec2, p: Vec2) -> f32 {
    (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x)
}

/// Top-left fill rule for an edge `a → b` of a positively oriented triangle
/// in +Y-down space. Samples exactly on a shared edge are owned by one
/// triangle only.
#[inline]
fn is_top_left(a: Vec2, b: Vec2) -> bool {
    (a.y == b.y && b.x > a.x) || b.y < a.y
}

/// Inclusive pixel bounds of a triangle, already clipped to the target.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) struct PixelBounds {
    pub x0: u32,
    pub y0: u32,
    pub x1: u32,
    pub y1: u32,
}

/// Screen-space triangle prepared for coverage tests and barycentric weights.
#[derive(Debug, Copy, Clone)]
pub(crate) struct TriangleSetup {
    v: [Vec2; 3],
    /// Maps setup vertex slots back to the caller's order after winding fix-up.
    order: [usize; 3],
    inv_area: f32,
    top_left: [bool; 3],
}

impl TriangleSetup {
    /// Returns `None` for degenerate (zero-area or non-finite) triangles.
    pub fn new(a: Vec2, b: Vec2, c: Vec2) -> Option<Self> {
        let area = edge(a, b, c);
        if area == 0.0 || !area.is_finite() {
            return None;
        }

        // Either winding is accepted (no culling); normalize to positive area.
        let (v, order) = if area > 0.0 { ([a, b, c], [0, 1, 2]) } else { ([a, c, b], [0, 2, 1]) };

        Some(Self {
            v,
            order,
            inv_area: 1.0 / area.abs(),
            top_left: [
                is_top_left(v[1], v[2]),
                is_top_left(v[2], v[0]),
                is_top_left(v[0], v[1]),
            ],
        })
    }

    /// Pixels whose sample point (`pixel + offset`) may fall inside, clipped to
    /// a `width × height` target. `None` when nothing is on screen.
    pub fn bounds(&self, offset: f32, width: u32, height: u32) -> Option<PixelBounds> {
        if width == 0 || height == 0 {
            return None;
        }
        let min = self.v[0].min(self.v[1]).min(self.v[2]);
        let max = self.v[0].max(self.v[1]).max(self.v[2]);

        let x0 = (min.x - offset).ceil().max(0.0);
        let y0 = (min.y - offset).ceil().max(0.0);
        let x1 = (max.x - offset).floor().min(width as f32 - 1.0);
        let y1 = (max.y - offset).floor().min(height as f32 - 1.0);

        if x0 > x1 || y0 > y1 {
            return None;
        }
        Some(PixelBounds { x0: x0 as u32, y0: y0 as u32, x1: x1 as u32, y1: y1 as u32 })
    }

    /// Barycentric weights of `p` in the caller's vertex order, or `None` when
    /// `p` is not covered under the top-left rule.
    #[inline]
    pub fn weights(&self, p: Vec2) -> Option<[f32; 3]> {
        let e = [
            edge(self.v[1], self.v[2], p),
            edge(self.v[2], self.v[0], p),
            edge(self.v[0], self.v[1], p),
        ];
        for i in 0..3 {
            if e[i] < 0.0 || (e[i] == 0.0 && !self.top_left[i]) {
                return None;
            }
        }

        let mut w = [0.0; 3];
        for i in 0..3 {
            w[self.order[i]] = e[i] * self.inv_area;
        }
        Some(w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f32, y: f32) -> Vec2 {
        Vec2::new(x, y)
    }

    #[test]
    fn degenerate_triangles_are_rejected() {
        assert!(TriangleSetup::new(v(0.0, 0.0), v(1.0, 1.0), v(2.0, 2.0)).is_none());
        assert!(TriangleSetup::new(v(0.0, 0.0), v(f32::NAN, 1.0), v(2.0, 0.0)).is_none());
    }

    #[test]
    fn weights_sum_to_one_and_follow_input_order() {
        for (a, b, c) in [
            (v(0.0, 0.0), v(10.0, 0.0), v(0.0, 10.0)),
            (v(0.0, 0.0), v(0.0, 10.0), v(10.0, 0.0)),
        ] {
            let tri = TriangleSetup::new(a, b, c).unwrap();
            let w = tri.weights(v(2.0, 3.0)).unwrap();
            assert!((w.iter().sum::<f32>() - 1.0).abs() < 1e-6);
            let p = a * w[0] + b * w[1] + c * w[2];
            assert!((p.x - 2.0).abs() < 1e-5 && (p.y - 3.0).abs() < 1e-5, "{p:?}");
        }
    }

    #[test]
    fn outside_points_are_not_covered() {
        let tri = TriangleSetup::new(v(0.0, 0.0), v(10.0, 0.0), v(0.0, 10.0)).unwrap();
        assert!(tri.weights(v(8.0, 8.0)).is_none());
        assert!(tri.weights(v(-1.0, 2.0)).is_none());
    }

    #[test]
    fn shared_diagonal_is_owned_by_exactly_one_triangle() {
        // Quad split along (0,0)-(10,10), both halves in the same winding.
        let upper = TriangleSetup::new(v(0.0, 0.0), v(10.0, 0.0), v(10.0, 10.0)).unwrap();
        let lower = TriangleSetup::new(v(0.0, 0.0), v(10.0, 10.0), v(0.0, 10.0)).unwrap();
        for t in [1.0, 2.5, 5.0, 9.0] {
            let p = v(t, t);
            let hits = upper.weights(p).is_some() as u32 + lower.weights(p).is_some() as u32;
            assert_eq!(hits, 1, "point {p:?}");
        }
    }

    #[test]
    fn top_edge_is_inclusive_bottom_edge_is_not() {
        let quad_top = TriangleSetup::new(v(0.0, 0.0), v(10.0, 0.0), v(0.0, 10.0)).unwrap();
        assert!(quad_top.weights(v(5.0, 0.0)).is_some());

        let quad_bottom = TriangleSetup::new(v(10.0, 0.0), v(10.0, 10.0), v(0.0, 10.0)).unwrap();
        assert!(quad_bottom.weights(v(5.0, 10.0)).is_none());
    }

    #[test]
    fn bounds_are_clipped_to_target() {
        let tri = TriangleSetup::new(v(-5.0, -5.0), v(50.0, 0.0), v(0.0, 50.0)).unwrap();
        let b = tri.bounds(0.5, 20, 10).unwrap();
        assert_eq!(b, PixelBounds { x0: 0, y0: 0, x1: 19, y1: 9 });
    }

    #[test]
    fn off_screen_triangle_has_no_bounds() {
        let tri = TriangleSetup::new(v(-20.0, -20.0), v(-10.0, -20.0), v(-20.0, -10.0)).unwrap();
        assert!(tri.bounds(0.5, 20, 10).is_none());
    }
}
