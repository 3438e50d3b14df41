use crate::kernel::{LineVertex, PolygonVertex, RoundedRectVertex};

use super::{DrawCmd, Mesh};

/// Recorded draw stream for a frame.
///
/// Geometry is stored in one mesh per vertex type; commands reference runs of
/// those meshes and are replayed in insertion order. Recording the same kind
/// twice in a row extends the previous command instead of adding a new one, so
/// a renderer issues one draw per run of like primitives.
///
/// Performance characteristics:
/// - push helpers are O(vertices + indices)
/// - `clear()` keeps every allocation; no per-frame allocation once warmed
#[derive(Debug, Default)]
pub struct DrawList {
    pub(crate) rects: Mesh<RoundedRectVertex>,
    pub(crate) polygons: Mesh<PolygonVertex>,
    pub(crate) lines: Mesh<LineVertex>,
    cmds: Vec<DrawCmd>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded geometry and commands. Keeps allocated capacity for reuse.
    pub fn clear(&mut self) {
        self.rects.clear();
        self.polygons.clear();
        self.lines.clear();
        self.cmds.clear();
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    /// Commands in paint order (back-to-front).
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &DrawCmd> {
        self.cmds.iter()
    }

    #[inline]
    pub fn commands(&self) -> &[DrawCmd] {
        &self.cmds
    }

    #[inline]
    pub fn rect_mesh(&self) -> &Mesh<RoundedRectVertex> {
        &self.rects
    }

    /// Shared by the flat and textured polygon paths.
    #[inline]
    pub fn polygon_mesh(&self) -> &Mesh<PolygonVertex> {
        &self.polygons
    }

    #[inline]
    pub fn line_mesh(&self) -> &Mesh<LineVertex> {
        &self.lines
    }

    /// Records a command, merging it into the previous one when possible.
    pub(crate) fn push_cmd(&mut self, cmd: DrawCmd) {
        if cmd.range().is_empty() {
            return;
        }
        if let Some(last) = self.cmds.last_mut() {
            if last.try_merge(&cmd) {
                return;
            }
        }
        self.cmds.push(cmd);
    }
}

impl<'a> IntoIterator for &'a DrawList {
    type Item = &'a DrawCmd;
    type IntoIter = core::slice::Iter<'a, DrawCmd>;

    fn into_iter(self) -> Self::IntoIter {
        self.cmds.iter()
    }
}
