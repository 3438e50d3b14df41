use crate::coords::Vec2;

/// Picks the corner radius for the quadrant `offset` falls in.
///
/// `offset` is the pixel position relative to the rectangle center (+Y down).
/// `radii` is in packed quadrant order, see [`CornerRadii`](crate::coords::CornerRadii).
/// Selection is two binary choices: the x sign picks the right pair `[0], [1]`
/// or the left pair `[2], [3]`, then the y sign picks the first (bottom) or
/// second (top) element. Both tests are strict `> 0.0`, so an offset of exactly
/// zero on an axis resolves to the left / top side.
#[inline]
pub fn select_radius(offset: Vec2, radii: [f32; 4]) -> f32 {
    let pair = if offset.x > 0.0 { (radii[0], radii[1]) } else { (radii[2], radii[3]) };
    if offset.y > 0.0 { pair.0 } else { pair.1 }
}

/// Clamps a radius into `[0, min(half_width, half_height)]`.
///
/// Written as `min(max(r, 0), limit)` so a degenerate (negative) half extent
/// cannot panic.
#[inline]
pub fn clamp_radius(radius: f32, half_extent: Vec2) -> f32 {
    radius.max(0.0).min(half_extent.x.min(half_extent.y))
}

/// Selection followed by clamping: the single radius used for this pixel.
#[inline]
pub fn resolve_radius(offset: Vec2, radii: [f32; 4], half_extent: Vec2) -> f32 {
    clamp_radius(select_radius(offset, radii), half_extent)
}
