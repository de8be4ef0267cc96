use crate::math::{Point, Real, Vector};

/// Indicated an inconsistency while building a triangle mesh.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum TriMeshBuilderError {
    /// A triangle references a vertex that does not exist.
    #[error("the triangle {triangle} references the vertex {index} but the mesh only has {num_vertices} vertices.")]
    IndexOutOfBounds {
        /// The offending triangle.
        triangle: u32,
        /// The out-of-range vertex index.
        index: u32,
        /// The number of vertices of the mesh.
        num_vertices: u32,
    },
}

/// A triangle mesh, stored as a vertex buffer and an index buffer.
///
/// The mesh is assumed to be closed (watertight) with its triangles wound
/// counter-clockwise when seen from the outside. Neither property is checked:
/// a mesh violating them has meaningless mass properties.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TriMesh {
    vertices: Vec<Point<Real>>,
    indices: Vec<[u32; 3]>,
}

impl TriMesh {
    /// Creates a new triangle mesh from a vertex buffer and an index buffer.
    ///
    /// Fails if any index is out of range. An empty index buffer is accepted.
    pub fn new(
        vertices: Vec<Point<Real>>,
        indices: Vec<[u32; 3]>,
    ) -> Result<Self, TriMeshBuilderError> {
        let num_vertices = vertices.len() as u32;

        for (tri_id, tri) in indices.iter().enumerate() {
            if let Some(index) = tri.iter().copied().find(|i| *i >= num_vertices) {
                return Err(TriMeshBuilderError::IndexOutOfBounds {
                    triangle: tri_id as u32,
                    index,
                    num_vertices,
                });
            }
        }

        Ok(Self { vertices, indices })
    }

    /// A mesh without any vertex nor triangle.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The vertex buffer of this mesh.
    #[inline]
    pub fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    /// The index buffer of this mesh.
    #[inline]
    pub fn indices(&self) -> &[[u32; 3]] {
        &self.indices
    }

    /// The number of triangles of this mesh.
    #[inline]
    pub fn num_triangles(&self) -> usize {
        self.indices.len()
    }

    /// Does this mesh contain no triangle at all?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Applies a non-uniform scale to every vertex of this mesh.
    pub fn scaled(mut self, scale: &Vector<Real>) -> Self {
        self.vertices
            .iter_mut()
            .for_each(|pt| pt.coords.component_mul_assign(scale));
        self
    }

    /// Translates every vertex of this mesh.
    pub fn translated(mut self, shift: &Vector<Real>) -> Self {
        self.vertices.iter_mut().for_each(|pt| *pt += shift);
        self
    }

    /// The extents of the axis-aligned bounding box of the vertices of this mesh.
    ///
    /// Returns `None` if the mesh has no vertex.
    pub fn aabb_extents(&self) -> Option<Vector<Real>> {
        aabb_extents(&self.vertices)
    }
}

pub(crate) fn aabb_extents(vertices: &[Point<Real>]) -> Option<Vector<Real>> {
    let (first, rest) = vertices.split_first()?;
    let (mins, maxs) = rest
        .iter()
        .fold((*first, *first), |(mins, maxs), pt| (mins.inf(pt), maxs.sup(pt)));
    Some(maxs - mins)
}
