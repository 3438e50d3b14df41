use crate::paint::Color;

/// Empirical widening of the AA band against aliasing at shallow edge angles.
pub const AA_WIDEN: f32 = 1.1;

/// Half width of the AA band from the local screen-space derivative of the
/// distance (`|∂d|`, one pixel step).
#[inline]
pub fn aa_half_width(derivative: f32) -> f32 {
    0.5 * derivative.abs() * AA_WIDEN
}

/// Hermite smoothstep. The edges may be given in either order.
///
/// Equal edges degrade to a step at `edge0` (`x < edge0` → 0, else 1) instead
/// of dividing by zero.
#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    if edge0 == edge1 {
        return if x < edge0 { 0.0 } else { 1.0 };
    }
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Fractional coverage for signed distance `d` with AA half width `w`.
///
/// `smoothstep(w, -w, d)`: 1 for `d <= -w`, 0 for `d >= w`, monotone in
/// between. A zero (or negative) width is a hard edge where the boundary
/// itself counts as inside.
#[inline]
pub fn coverage(d: f32, w: f32) -> f32 {
    if w <= 0.0 {
        return if d <= 0.0 { 1.0 } else { 0.0 };
    }
    smoothstep(w, -w, d)
}

/// Blends `color` over transparent by `coverage`.
#[inline]
pub fn composite(color: Color, coverage: f32) -> Color {
    Color::TRANSPARENT.lerp(color, coverage)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── band width ────────────────────────────────────────────────────────

    #[test]
    fn half_width_uses_magnitude_and_widening() {
        assert!((aa_half_width(1.0) - 0.55).abs() < 1e-6);
        assert_eq!(aa_half_width(-2.0), aa_half_width(2.0));
        assert_eq!(aa_half_width(0.0), 0.0);
    }

    // ── coverage ──────────────────────────────────────────────────────────

    #[test]
    fn coverage_saturates_outside_the_band() {
        let w = 0.55;
        assert_eq!(coverage(-w, w), 1.0);
        assert_eq!(coverage(-3.0, w), 1.0);
        assert_eq!(coverage(w, w), 0.0);
        assert_eq!(coverage(12.0, w), 0.0);
    }

    #[test]
    fn coverage_is_half_on_the_boundary() {
        assert!((coverage(0.0, 0.55) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn coverage_is_monotone_non_increasing_across_the_band() {
        let w = 0.8;
        let mut prev = coverage(-w, w);
        for i in 1..=200 {
            let d = -w + 2.0 * w * (i as f32) / 200.0;
            let c = coverage(d, w);
            assert!(c <= prev, "coverage rose at d = {d}: {prev} -> {c}");
            prev = c;
        }
    }

    #[test]
    fn zero_width_is_a_finite_hard_step() {
        for d in [-1.0, -0.0, 0.0, 1e-6, 1.0] {
            let c = coverage(d, 0.0);
            assert!(c.is_finite());
            assert!(c == 0.0 || c == 1.0);
        }
        assert_eq!(coverage(-0.5, 0.0), 1.0);
        assert_eq!(coverage(0.5, 0.0), 0.0);
    }

    #[test]
    fn smoothstep_with_equal_edges_does_not_divide() {
        assert_eq!(smoothstep(1.0, 1.0, 0.0), 0.0);
        assert_eq!(smoothstep(1.0, 1.0, 2.0), 1.0);
    }

    // ── compositing ───────────────────────────────────────────────────────

    #[test]
    fn composite_interpolates_from_transparent() {
        let red = Color::RED;
        assert_eq!(composite(red, 1.0), red);
        assert_eq!(composite(red, 0.0), Color::TRANSPARENT);
        assert_eq!(composite(red, 0.5), Color::new(0.5, 0.0, 0.0, 0.5));
    }
}
