//! Parametric surface sampling
//!
//! A [`ParametricSurface`] maps normalized texture coordinates to a point on
//! the surface. [`sample_surface`] evaluates it on a regular grid and emits
//! the grid cells as triangles.

use glam::{UVec2, Vec2, Vec3};
use tracing::{trace, warn};

use crate::procedural::grid::{GridLayout, add_triangulated_quad};
use crate::procedural::types::{MeshBuilder, Vertex, VertexIndex};

/// Position and normal of a surface sample
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfacePoint {
    pub position: Vec3,
    pub normal: Vec3,
}

/// A surface parametrized over `[0, 1] × [0, 1]`
pub trait ParametricSurface {
    /// Evaluate the surface at `tex_coord`
    ///
    /// The texture coordinate doubles as the parameter: implementations map
    /// it to their own angles or lengths.
    fn sample(&self, tex_coord: Vec2) -> SurfacePoint;
}

impl<F: Fn(Vec2) -> SurfacePoint> ParametricSurface for F {
    fn sample(&self, tex_coord: Vec2) -> SurfacePoint {
        self(tex_coord)
    }
}

/// Sample `surface` on a grid and append the result to `mesh`
///
/// Appends `(segments.x + 1) × (segments.y + 1)` vertices, row by row from
/// `v = 0` to `v = 1`, and `segments.x × segments.y × 2` triangles. Seam and
/// pole vertices are duplicated, never welded. Indices are offset by the
/// vertex count `mesh` had on entry, so existing geometry is left untouched.
///
/// Segment counts are used as given; generators clamp them beforehand. A zero
/// count on either axis appends nothing.
pub fn sample_surface<M, S>(mesh: &mut M, surface: &S, segments: UVec2, alternate_grid: bool)
where
    M: MeshBuilder + ?Sized,
    S: ParametricSurface + ?Sized,
{
    if segments.x == 0 || segments.y == 0 {
        warn!(
            "sample_surface: degenerate grid {}x{}, nothing generated",
            segments.x, segments.y
        );
        return;
    }

    let grid = GridLayout::new(segments.x, segments.y);
    let index_base = mesh.vertex_count() as VertexIndex;

    mesh.reserve(grid.vertex_count(), grid.cell_count() * 2);

    // Generate vertices
    let inv_segments = Vec2::ONE / segments.as_vec2();
    for v in 0..=grid.segments_v {
        for u in 0..=grid.segments_u {
            let tex_coord = Vec2::new(u as f32, v as f32) * inv_segments;
            let point = surface.sample(tex_coord);
            mesh.add_vertex(Vertex::new(point.position, point.normal, tex_coord));
        }
    }

    // Generate indices
    for v in 0..grid.segments_v {
        for u in 0..grid.segments_u {
            add_triangulated_quad(mesh, alternate_grid, u, v, grid.cell(u, v), index_base);
        }
    }

    trace!(
        "sample_surface: appended {} vertices at base {}",
        grid.vertex_count(),
        index_base
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::procedural::types::TriangleMesh;

    fn flat(tex_coord: Vec2) -> SurfacePoint {
        SurfacePoint {
            position: Vec3::new(tex_coord.x, 0.0, tex_coord.y),
            normal: Vec3::Y,
        }
    }

    #[test]
    fn test_closure_surface_counts() {
        let mut mesh = TriangleMesh::new();
        sample_surface(&mut mesh, &flat, UVec2::new(2, 3), false);
        assert_eq!(mesh.vertex_count(), 3 * 4);
        assert_eq!(mesh.triangle_count(), 2 * 3 * 2);
    }

    #[test]
    fn test_vertices_row_major() {
        let mut mesh = TriangleMesh::new();
        sample_surface(&mut mesh, &flat, UVec2::new(2, 2), false);

        // Second vertex advances along u, fourth starts the next row
        assert_eq!(mesh.vertices()[1].tex_coord, Vec2::new(0.5, 0.0));
        assert_eq!(mesh.vertices()[3].tex_coord, Vec2::new(0.0, 0.5));
        assert_eq!(mesh.vertices()[8].tex_coord, Vec2::ONE);
        assert_eq!(mesh.vertices()[8].position, Vec3::new(1.0, 0.0, 1.0));
    }

    #[test]
    fn test_zero_segments_appends_nothing() {
        let mut mesh = TriangleMesh::new();
        sample_surface(&mut mesh, &flat, UVec2::new(0, 4), true);
        sample_surface(&mut mesh, &flat, UVec2::new(4, 0), true);
        assert!(mesh.is_empty());
        assert_eq!(mesh.triangle_count(), 0);
    }

    #[test]
    fn test_index_base_from_existing_vertices() {
        let mut mesh = TriangleMesh::new();
        mesh.add_vertex(Vertex::default());
        mesh.add_vertex(Vertex::default());

        sample_surface(&mut mesh, &flat, UVec2::new(1, 1), false);

        assert_eq!(mesh.triangles(), &[[2, 3, 5], [2, 5, 4]]);
    }
}
