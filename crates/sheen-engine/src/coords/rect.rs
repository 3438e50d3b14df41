use super::Vec2;

/// Axis-aligned rectangle in pixels (top-left origin, +Y down).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Rectangle of `size` centered on `center`.
    #[inline]
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        Self { origin: center - size * 0.5, size }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.origin.is_finite() && self.size.is_finite()
    }

    /// Normalizes the rectangle so width/height are non-negative.
    #[inline]
    pub fn normalized(self) -> Self {
        let mut x = self.origin.x;
        let mut y = self.origin.y;
        let mut w = self.size.x;
        let mut h = self.size.y;

        if w < 0.0 {
            x += w;
            w = -w;
        }
        if h < 0.0 {
            y += h;
            h = -h;
        }

        Rect::new(x, y, w, h)
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        self.origin + self.size * 0.5
    }

    #[inline]
    pub fn half_extent(self) -> Vec2 {
        self.size * 0.5
    }

    #[inline]
    pub fn top_left(self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn top_right(self) -> Vec2 {
        Vec2::new(self.origin.x + self.size.x, self.origin.y)
    }

    #[inline]
    pub fn bottom_right(self) -> Vec2 {
        self.origin + self.size
    }

    #[inline]
    pub fn bottom_left(self) -> Vec2 {
        Vec2::new(self.origin.x, self.origin.y + self.size.y)
    }

    /// Grows the rectangle by `amount` on every side (shrinks for negative values).
    #[inline]
    pub fn inflate(self, amount: f32) -> Self {
        Rect::new(
            self.origin.x - amount,
            self.origin.y - amount,
            self.size.x + amount * 2.0,
            self.size.y + amount * 2.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    // ── normalized ────────────────────────────────────────────────────────

    #[test]
    fn normalized_positive_is_identity() {
        let rect = r(1.0, 2.0, 10.0, 20.0);
        assert_eq!(rect.normalized(), rect);
    }

    #[test]
    fn normalized_negative_extent_flips_origin() {
        let n = r(10.0, 10.0, -4.0, -3.0).normalized();
        assert_eq!(n, r(6.0, 7.0, 4.0, 3.0));
    }

    // ── corners / center ──────────────────────────────────────────────────

    #[test]
    fn corners_follow_y_down_convention() {
        let rect = r(10.0, 20.0, 40.0, 30.0);
        assert_eq!(rect.top_left(), Vec2::new(10.0, 20.0));
        assert_eq!(rect.top_right(), Vec2::new(50.0, 20.0));
        assert_eq!(rect.bottom_right(), Vec2::new(50.0, 50.0));
        assert_eq!(rect.bottom_left(), Vec2::new(10.0, 50.0));
        assert_eq!(rect.center(), Vec2::new(30.0, 35.0));
        assert_eq!(rect.half_extent(), Vec2::new(20.0, 15.0));
    }

    #[test]
    fn from_center_size_round_trips() {
        let rect = Rect::from_center_size(Vec2::new(50.0, 50.0), Vec2::new(40.0, 20.0));
        assert_eq!(rect, r(30.0, 40.0, 40.0, 20.0));
        assert_eq!(rect.center(), Vec2::new(50.0, 50.0));
    }

    #[test]
    fn inflate_keeps_center() {
        let rect = r(0.0, 0.0, 10.0, 10.0);
        let grown = rect.inflate(1.0);
        assert_eq!(grown, r(-1.0, -1.0, 12.0, 12.0));
        assert_eq!(grown.center(), rect.center());
    }

    // ── is_empty ──────────────────────────────────────────────────────────

    #[test]
    fn is_empty_zero_size() {
        assert!(r(0.0, 0.0, 0.0, 5.0).is_empty());
        assert!(r(0.0, 0.0, 5.0, 0.0).is_empty());
        assert!(!r(0.0, 0.0, 1.0, 1.0).is_empty());
    }
}
