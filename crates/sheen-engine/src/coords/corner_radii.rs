/// Per-corner radii for a rounded rectangle (pixels).
///
/// The packed form consumed by the distance-field evaluator is quadrant-ordered
/// in +Y-down pixel space:
///
/// ```text
///  [0] bottom-right  (+x, +y)
///  [1] top-right     (+x, -y)
///  [2] bottom-left   (-x, +y)
///  [3] top-left      (-x, -y)
/// ```
///
/// Values are not validated here; the evaluator clamps each resolved radius
/// into `[0, min(half_width, half_height)]`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CornerRadii {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CornerRadii {
    #[inline]
    pub const fn new(top_left: f32, top_right: f32, bottom_right: f32, bottom_left: f32) -> Self {
        Self { top_left, top_right, bottom_right, bottom_left }
    }

    /// Uniform radius on all four corners.
    #[inline]
    pub const fn all(r: f32) -> Self {
        Self { top_left: r, top_right: r, bottom_right: r, bottom_left: r }
    }

    /// No rounding.
    #[inline]
    pub const fn zero() -> Self {
        Self::all(0.0)
    }

    /// Packs into the quadrant order read by the evaluator.
    #[inline]
    pub const fn to_packed(self) -> [f32; 4] {
        [self.bottom_right, self.top_right, self.bottom_left, self.top_left]
    }

    /// Inverse of [`to_packed`](Self::to_packed).
    #[inline]
    pub const fn from_packed(r: [f32; 4]) -> Self {
        Self { bottom_right: r[0], top_right: r[1], bottom_left: r[2], top_left: r[3] }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packed_order_is_br_tr_bl_tl() {
        let radii = CornerRadii::new(4.0, 2.0, 1.0, 3.0);
        assert_eq!(radii.to_packed(), [1.0, 2.0, 3.0, 4.0]);
        assert_eq!(CornerRadii::from_packed(radii.to_packed()), radii);
    }
}
