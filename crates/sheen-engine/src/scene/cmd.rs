/// Host-assigned handle of a texture bound to the textured polygon path.
///
/// The scene never owns textures; renderers resolve ids against whatever
/// texture table the host hands them.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct TextureId(pub u32);

/// A run of indices inside one of the draw list's meshes.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub struct IndexRange {
    pub start: u32,
    pub count: u32,
}

impl IndexRange {
    #[inline]
    pub const fn new(start: u32, count: u32) -> Self {
        Self { start, count }
    }

    #[inline]
    pub const fn end(self) -> u32 {
        self.start + self.count
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.count == 0
    }

    #[inline]
    pub fn as_range(self) -> core::ops::Range<usize> {
        self.start as usize..self.end() as usize
    }
}

/// Renderer-agnostic draw command stream.
///
/// Each variant names the mesh it draws from and the index run to draw.
/// Commands are replayed in the order they were recorded.
///
/// Extending the scene:
/// - add a vertex type and a `Program` under `kernel`
/// - add a mesh to `DrawList` and a variant here
/// - implement push helpers in a shape module under `scene::shapes`
/// - add a matching renderer under `render::shapes`
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum DrawCmd {
    RoundedRects(IndexRange),
    Polygons(IndexRange),
    TexturedPolygons { texture: TextureId, range: IndexRange },
    Lines(IndexRange),
}

impl DrawCmd {
    #[inline]
    pub fn range(&self) -> IndexRange {
        match *self {
            DrawCmd::RoundedRects(r) | DrawCmd::Polygons(r) | DrawCmd::Lines(r) => r,
            DrawCmd::TexturedPolygons { range, .. } => range,
        }
    }

    /// Folds `next` into `self` when both draw the same way and `next`
    /// continues `self`'s index run.
    pub(crate) fn try_merge(&mut self, next: &DrawCmd) -> bool {
        let (a, b) = match (self, next) {
            (DrawCmd::RoundedRects(a), DrawCmd::RoundedRects(b))
            | (DrawCmd::Polygons(a), DrawCmd::Polygons(b))
            | (DrawCmd::Lines(a), DrawCmd::Lines(b)) => (a, b),
            (
                DrawCmd::TexturedPolygons { texture: ta, range: a },
                DrawCmd::TexturedPolygons { texture: tb, range: b },
            ) if *ta == *tb => (a, b),
            _ => return false,
        };
        if a.end() != b.start {
            return false;
        }
        a.count += b.count;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contiguous_runs_of_the_same_kind_merge() {
        let mut a = DrawCmd::Polygons(IndexRange::new(0, 6));
        assert!(a.try_merge(&DrawCmd::Polygons(IndexRange::new(6, 3))));
        assert_eq!(a, DrawCmd::Polygons(IndexRange::new(0, 9)));
    }

    #[test]
    fn different_kinds_or_gaps_do_not_merge() {
        let mut a = DrawCmd::Polygons(IndexRange::new(0, 6));
        assert!(!a.try_merge(&DrawCmd::Lines(IndexRange::new(6, 6))));
        assert!(!a.try_merge(&DrawCmd::Polygons(IndexRange::new(9, 3))));
    }

    #[test]
    fn textured_runs_merge_only_with_the_same_texture() {
        let mut a = DrawCmd::TexturedPolygons { texture: TextureId(1), range: IndexRange::new(0, 3) };
        let other = DrawCmd::TexturedPolygons { texture: TextureId(2), range: IndexRange::new(3, 3) };
        let same = DrawCmd::TexturedPolygons { texture: TextureId(1), range: IndexRange::new(3, 3) };
        assert!(!a.try_merge(&other));
        assert!(a.try_merge(&same));
        assert_eq!(a.range(), IndexRange::new(0, 6));
    }
}
