use crate::raster::RasterError;

use super::IndexRange;

/// Growable indexed triangle list for one vertex type.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh<V> {
    vertices: Vec<V>,
    indices: Vec<u32>,
}

impl<V> Default for Mesh<V> {
    fn default() -> Self {
        Self { vertices: Vec::new(), indices: Vec::new() }
    }
}

impl<V: Copy> Mesh<V> {
    #[inline]
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Indices of one recorded run.
    #[inline]
    pub fn slice(&self, range: IndexRange) -> &[u32] {
        &self.indices[range.as_range()]
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Keeps allocated capacity.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
    }

    /// Appends a local mesh, rebasing `indices` onto the vertices already
    /// stored. Indices are checked against `vertices` first; on error nothing
    /// is appended.
    pub fn append(&mut self, vertices: &[V], indices: &[u32]) -> Result<IndexRange, RasterError> {
        if let Some(&index) = indices.iter().find(|&&i| i as usize >= vertices.len()) {
            return Err(RasterError::IndexOutOfRange { index, vertex_count: vertices.len() });
        }

        let base = self.vertices.len() as u32;
        let start = self.indices.len() as u32;
        self.vertices.extend_from_slice(vertices);
        self.indices.extend(indices.iter().map(|&i| i + base));

        Ok(IndexRange::new(start, indices.len() as u32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appended_indices_are_rebased() {
        let mut mesh = Mesh::<u8>::default();
        let first = mesh.append(&[1, 2, 3], &[0, 1, 2]).unwrap();
        let second = mesh.append(&[4, 5, 6], &[2, 1, 0]).unwrap();
        assert_eq!(first, IndexRange::new(0, 3));
        assert_eq!(second, IndexRange::new(3, 3));
        assert_eq!(mesh.slice(second), &[5, 4, 3]);
        assert_eq!(mesh.vertices().len(), 6);
    }

    #[test]
    fn bad_index_leaves_mesh_untouched() {
        let mut mesh = Mesh::<u8>::default();
        mesh.append(&[1, 2, 3], &[0, 1, 2]).unwrap();
        let err = mesh.append(&[4, 5, 6], &[0, 1, 3]);
        assert!(matches!(err, Err(RasterError::IndexOutOfRange { index: 3, vertex_count: 3 })));
        assert_eq!(mesh.indices().len(), 3);
        assert_eq!(mesh.vertices().len(), 3);
    }
}
