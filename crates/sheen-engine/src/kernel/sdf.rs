use crate::coords::Vec2;

/// Signed distance from `offset` (relative to the rectangle center) to the
/// boundary of a rounded rectangle with the given half extent and corner radius.
///
/// Negative inside, zero on the boundary, positive outside. Exact for a
/// single radius; callers resolve the per-quadrant radius first.
#[inline]
pub fn rounded_rect_distance(offset: Vec2, half_extent: Vec2, radius: f32) -> f32 {
    let q = offset.abs() - half_extent + radius;
    let outside = q.max(Vec2::zero()).length();
    let inside = q.x.max(q.y).min(0.0);
    inside + outside - radius
}
