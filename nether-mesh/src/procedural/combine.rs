//! Mesh combining utilities
//!
//! Merging separately generated meshes into a single mesh.

use tracing::trace;

use crate::error::MeshError;
use crate::procedural::types::{TriangleMesh, VertexIndex};

impl TriangleMesh {
    /// Append another mesh, offsetting its indices past the current vertices
    ///
    /// # Errors
    /// [`MeshError::IndexOverflow`] if the combined vertex count does not fit
    /// [`VertexIndex`]. `self` is left unchanged in that case.
    pub fn append(&mut self, other: &TriangleMesh) -> Result<(), MeshError> {
        let total = self.vertices.len() + other.vertices.len();
        if total > VertexIndex::MAX as usize {
            return Err(MeshError::IndexOverflow { vertices: total });
        }

        let vertex_offset = self.vertices.len() as VertexIndex;

        self.vertices.extend_from_slice(&other.vertices);
        self.triangles.extend(
            other
                .triangles
                .iter()
                .map(|triangle| triangle.map(|i| i + vertex_offset)),
        );

        trace!(
            "append: {} vertices at offset {}",
            other.vertices.len(),
            vertex_offset
        );
        Ok(())
    }
}

/// Combine multiple meshes into one
///
/// Concatenates vertex and triangle data in order, adjusting index offsets.
///
/// # Example
/// ```
/// use nether_mesh::procedural::*;
///
/// let ball: TriangleMesh = generate_ellipsoid(&EllipsoidDescriptor::default());
/// let ring: TriangleMesh = generate_torus(&TorusDescriptor::default());
///
/// let combined = combine(&[&ball, &ring])?;
/// assert_eq!(combined.vertex_count(), ball.vertex_count() + ring.vertex_count());
/// # Ok::<(), nether_mesh::MeshError>(())
/// ```
pub fn combine(meshes: &[&TriangleMesh]) -> Result<TriangleMesh, MeshError> {
    let total_vertices: usize = meshes.iter().map(|m| m.vertex_count()).sum();
    let total_triangles: usize = meshes.iter().map(|m| m.triangle_count()).sum();

    if total_vertices > VertexIndex::MAX as usize {
        return Err(MeshError::IndexOverflow {
            vertices: total_vertices,
        });
    }

    let mut result = TriangleMesh::with_capacity(total_vertices, total_triangles);
    for mesh in meshes {
        result.append(mesh)?;
    }

    Ok(result)
}
