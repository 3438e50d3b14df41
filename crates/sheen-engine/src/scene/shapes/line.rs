use crate::coords::Vec2;
use crate::kernel::LineVertex;
use crate::paint::Color;
use crate::raster::RasterError;
use crate::scene::{DrawCmd, DrawList};

/// Quad covering the segment `from → to` with the given stroke `width`.
///
/// `None` for zero-length segments and non-positive widths. Ends are butt
/// caps.
pub fn line_quad(from: Vec2, to: Vec2, width: f32, color: Color) -> Option<([LineVertex; 4], [u32; 6])> {
    let dir = (to - from).normalized_or_zero();
    if dir == Vec2::zero() || width.is_nan() || width <= 0.0 {
        return None;
    }
    let n = dir.perp() * (width * 0.5);
    let vertices = [
        LineVertex::new(from + n, color),
        LineVertex::new(to + n, color),
        LineVertex::new(to - n, color),
        LineVertex::new(from - n, color),
    ];
    Some((vertices, [0, 1, 2, 0, 2, 3]))
}

impl DrawList {
    /// Records a straight segment expanded to a quad. Degenerate segments are
    /// skipped.
    pub fn push_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color) {
        let Some((vertices, indices)) = line_quad(from, to, width, color) else {
            log::trace!("push_line: skipping degenerate segment {from:?} -> {to:?} (width {width})");
            return;
        };
        if let Ok(range) = self.lines.append(&vertices, &indices) {
            self.push_cmd(DrawCmd::Lines(range));
        }
    }

    /// Records a prebuilt line mesh (triangle list).
    pub fn push_line_mesh(&mut self, vertices: &[LineVertex], indices: &[u32]) -> Result<(), RasterError> {
        let range = self.lines.append(vertices, indices)?;
        self.push_cmd(DrawCmd::Lines(range));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_line_expands_vertically() {
        let (v, _) = line_quad(Vec2::new(0.0, 5.0), Vec2::new(10.0, 5.0), 2.0, Color::RED).unwrap();
        let ys: Vec<f32> = v.iter().map(|v| v.position.y).collect();
        assert_eq!(ys, vec![6.0, 6.0, 4.0, 4.0]);
        assert_eq!(v[1].position.x, 10.0);
    }

    #[test]
    fn degenerate_lines_are_skipped() {
        let p = Vec2::new(3.0, 3.0);
        assert!(line_quad(p, p, 2.0, Color::RED).is_none());
        assert!(line_quad(p, Vec2::new(5.0, 3.0), 0.0, Color::RED).is_none());
        assert!(line_quad(p, Vec2::new(5.0, 3.0), f32::NAN, Color::RED).is_none());

        let mut list = DrawList::new();
        list.push_line(p, p, 2.0, Color::RED);
        assert!(list.is_empty());
    }

    #[test]
    fn lines_record_into_the_line_mesh() {
        let mut list = DrawList::new();
        list.push_line(Vec2::zero(), Vec2::new(0.0, 8.0), 1.0, Color::BLUE);
        list.push_line(Vec2::zero(), Vec2::new(8.0, 0.0), 1.0, Color::BLUE);
        assert_eq!(list.commands().len(), 1);
        assert_eq!(list.line_mesh().vertices().len(), 8);
        assert!(list.rect_mesh().is_empty());
    }
}
