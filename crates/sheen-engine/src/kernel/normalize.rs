use crate::coords::{DrawConstants, Vec2};

/// Homogeneous clip-space position emitted by every vertex function.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ClipPosition {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl ClipPosition {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y, z: 0.0, w: 1.0 }
    }
}

/// Maps a pixel-space position (origin top-left, +Y down) to clip space
/// (origin center, +Y up), sending `[0, w] × [0, h]` onto `[-1, 1]²`.
///
/// The division by the screen size is unguarded: zero dimensions yield
/// non-finite output.
#[inline]
pub fn to_clip(p: Vec2, constants: &DrawConstants) -> ClipPosition {
    let w = constants.width_f32();
    let h = constants.height_f32();
    ClipPosition::new((p.x / w) * 2.0 - 1.0, ((h - p.y) / h) * 2.0 - 1.0)
}

/// Inverse of [`to_clip`]: the viewport transform a rasterizer applies before
/// walking pixels.
#[inline]
pub fn from_clip(clip: ClipPosition, constants: &DrawConstants) -> Vec2 {
    let w = constants.width_f32();
    let h = constants.height_f32();
    let x = clip.x / clip.w;
    let y = clip.y / clip.w;
    Vec2::new((x + 1.0) * 0.5 * w, h - (y + 1.0) * 0.5 * h)
}

#[cfg(test)]
mod tests {
    use super::*;

    const C: DrawConstants = DrawConstants::new(200, 100);

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() <= 1e-5
    }

    #[test]
    fn origin_maps_to_top_left_of_clip_space() {
        assert_eq!(to_clip(Vec2::zero(), &C), ClipPosition::new(-1.0, 1.0));
    }

    #[test]
    fn far_corner_maps_to_bottom_right_of_clip_space() {
        assert_eq!(to_clip(Vec2::new(200.0, 100.0), &C), ClipPosition::new(1.0, -1.0));
    }

    #[test]
    fn center_maps_to_clip_origin() {
        let c = to_clip(Vec2::new(100.0, 50.0), &C);
        assert_eq!((c.x, c.y, c.z, c.w), (0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn on_screen_pixels_stay_inside_unit_square() {
        for y in (0..=100).step_by(7) {
            for x in (0..=200).step_by(13) {
                let c = to_clip(Vec2::new(x as f32, y as f32), &C);
                assert!((-1.0..=1.0).contains(&c.x), "x out of range at ({x}, {y})");
                assert!((-1.0..=1.0).contains(&c.y), "y out of range at ({x}, {y})");
            }
        }
    }

    #[test]
    fn from_clip_inverts_to_clip() {
        let p = Vec2::new(37.25, 81.5);
        let back = from_clip(to_clip(p, &C), &C);
        assert!(close(back.x, p.x) && close(back.y, p.y), "{back:?}");
    }

    #[test]
    fn zero_screen_size_is_not_finite() {
        let c = to_clip(Vec2::new(1.0, 1.0), &DrawConstants::new(0, 0));
        assert!(!c.x.is_finite() || !c.y.is_finite());
    }
}
