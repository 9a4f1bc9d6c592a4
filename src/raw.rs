use crate::Float;

/// Format-agnostic mesh data, as produced by a [MeshReader](crate::de::MeshReader).
///
/// * `vertices` holds `x, y, z` for each vertex, in declaration order.
/// * `indices` holds three zero-based vertex indices for each triangle, in winding order.
///
/// Neither buffer is validated; a trailing partial triple is ignored, and out-of-range indices
/// are rejected when the data is assembled into a [TriangleMesh](crate::TriangleMesh).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawMesh<Real> {
    /// Flat vertex coordinates.
    pub vertices: Vec<Real>,
    /// Flat triangle indices.
    pub indices: Vec<u32>,
}

impl<Real: Float> RawMesh<Real> {
    /// An empty mesh.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            indices: Vec::new(),
        }
    }

    /// An empty mesh with room for `vertices` vertices and `triangles` triangles.
    pub fn with_capacity(vertices: usize, triangles: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices * 3),
            indices: Vec::with_capacity(triangles * 3),
        }
    }

    /// The number of complete vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// The number of complete index triples.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Whether both buffers are empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.indices.is_empty()
    }

    /// Append a vertex.
    #[inline]
    pub fn push_vertex(&mut self, [x, y, z]: [Real; 3]) {
        self.vertices.extend([x, y, z]);
    }

    /// Append a triangle's three zero-based indices.
    #[inline]
    pub fn push_triangle(&mut self, face: [u32; 3]) {
        self.indices.extend(face);
    }
}

impl<Real: Float> From<unv::UnvFile> for RawMesh<Real> {
    /// Copy the buffers of a universal file, converting each coordinate to `Real`.
    fn from(file: unv::UnvFile) -> Self {
        Self {
            vertices: file.positions.iter().map(|&c| Real::from_f64(c)).collect(),
            indices: file.triangles.into_vec(),
        }
    }
}
