use crate::coords::Vec2;
use crate::kernel::PolygonVertex;
use crate::paint::Color;
use crate::raster::RasterError;
use crate::scene::{DrawCmd, DrawList, TextureId};

impl DrawList {
    /// Records a flat-colored triangle list. `indices` are local to `vertices`.
    ///
    /// Fails without recording anything when an index is out of range.
    pub fn push_polygon(&mut self, vertices: &[PolygonVertex], indices: &[u32]) -> Result<(), RasterError> {
        let range = self.polygons.append(vertices, indices)?;
        self.push_cmd(DrawCmd::Polygons(range));
        Ok(())
    }

    /// Records a textured triangle list sampled from `texture`.
    pub fn push_textured_polygon(
        &mut self,
        texture: TextureId,
        vertices: &[PolygonVertex],
        indices: &[u32],
    ) -> Result<(), RasterError> {
        let range = self.polygons.append(vertices, indices)?;
        self.push_cmd(DrawCmd::TexturedPolygons { texture, range });
        Ok(())
    }

    /// Records a convex polygon as a triangle fan around `points[0]`.
    /// Fewer than three points record nothing.
    pub fn push_convex_polygon(&mut self, points: &[Vec2], color: Color) {
        if points.len() < 3 {
            return;
        }
        let vertices: Vec<PolygonVertex> = points.iter().map(|&p| PolygonVertex::flat(p, color)).collect();
        let indices: Vec<u32> = (1..points.len() as u32 - 1).flat_map(|i| [0, i, i + 1]).collect();
        // Fan indices are always in range.
        if let Ok(range) = self.polygons.append(&vertices, &indices) {
            self.push_cmd(DrawCmd::Polygons(range));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::IndexRange;

    fn tri(color: Color) -> [PolygonVertex; 3] {
        [
            PolygonVertex::flat(Vec2::new(0.0, 0.0), color),
            PolygonVertex::flat(Vec2::new(4.0, 0.0), color),
            PolygonVertex::flat(Vec2::new(0.0, 4.0), color),
        ]
    }

    #[test]
    fn flat_and_textured_share_the_polygon_mesh() {
        let mut list = DrawList::new();
        list.push_polygon(&tri(Color::RED), &[0, 1, 2]).unwrap();
        list.push_textured_polygon(TextureId(7), &tri(Color::WHITE), &[0, 1, 2]).unwrap();
        list.push_polygon(&tri(Color::BLUE), &[0, 1, 2]).unwrap();

        assert_eq!(
            list.commands(),
            &[
                DrawCmd::Polygons(IndexRange::new(0, 3)),
                DrawCmd::TexturedPolygons { texture: TextureId(7), range: IndexRange::new(3, 3) },
                DrawCmd::Polygons(IndexRange::new(6, 3)),
            ]
        );
        assert_eq!(list.polygon_mesh().slice(IndexRange::new(6, 3)), &[6, 7, 8]);
    }

    #[test]
    fn invalid_indices_record_nothing() {
        let mut list = DrawList::new();
        assert!(list.push_polygon(&tri(Color::RED), &[0, 1, 3]).is_err());
        assert!(list.is_empty());
        assert!(list.polygon_mesh().vertices().is_empty());
    }

    #[test]
    fn convex_polygon_is_fanned() {
        let mut list = DrawList::new();
        let square = [Vec2::new(0.0, 0.0), Vec2::new(2.0, 0.0), Vec2::new(2.0, 2.0), Vec2::new(0.0, 2.0)];
        list.push_convex_polygon(&square, Color::GREEN);
        assert_eq!(list.polygon_mesh().indices(), &[0, 1, 2, 0, 2, 3]);

        list.push_convex_polygon(&square[..2], Color::GREEN);
        assert_eq!(list.commands().len(), 1);
    }
}
