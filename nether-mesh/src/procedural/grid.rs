//! Grid addressing and quad triangulation

use crate::procedural::types::{MeshBuilder, VertexIndex};

/// Which diagonal splits a grid quad `[v0, v1, v2, v3]`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QuadDiagonal {
    /// Split along v0–v2: triangles `(v0, v1, v2)` and `(v0, v2, v3)`
    Primary,
    /// Split along v1–v3: triangles `(v0, v1, v3)` and `(v1, v2, v3)`
    Secondary,
}

impl QuadDiagonal {
    /// Diagonal used for cell `(u, v)`
    ///
    /// Without `alternate_grid` every cell uses [`QuadDiagonal::Primary`].
    /// With it, cells where `u + v` is odd flip to [`QuadDiagonal::Secondary`],
    /// giving a checkerboard that hides shearing on curved surfaces.
    pub fn for_cell(alternate_grid: bool, u: u32, v: u32) -> Self {
        // u + v is odd
        if alternate_grid && (u % 2 != v % 2) {
            Self::Secondary
        } else {
            Self::Primary
        }
    }
}

/// Add a quad as two triangles
///
/// `quad` holds the corners in rotational order (bottom-left, bottom-right,
/// top-right, top-left). `index_offset` is added to every corner first, so
/// grid-local indices can be appended after existing geometry. Both diagonals
/// preserve the quad's winding.
pub fn add_triangulated_quad<M: MeshBuilder + ?Sized>(
    mesh: &mut M,
    alternate_grid: bool,
    u: u32,
    v: u32,
    quad: [VertexIndex; 4],
    index_offset: VertexIndex,
) {
    let [v0, v1, v2, v3] = quad.map(|i| i + index_offset);

    match QuadDiagonal::for_cell(alternate_grid, u, v) {
        QuadDiagonal::Primary => {
            mesh.add_triangle(v0, v1, v2);
            mesh.add_triangle(v0, v2, v3);
        }
        QuadDiagonal::Secondary => {
            mesh.add_triangle(v0, v1, v3);
            mesh.add_triangle(v1, v2, v3);
        }
    }
}

/// Linear addressing for a `(segments_u + 1) × (segments_v + 1)` vertex grid
///
/// Vertices are stored row by row: `index = row * (segments_u + 1) + col`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridLayout {
    pub segments_u: u32,
    pub segments_v: u32,
}

impl GridLayout {
    pub fn new(segments_u: u32, segments_v: u32) -> Self {
        Self {
            segments_u,
            segments_v,
        }
    }

    /// Vertices per row (seam vertex included)
    pub fn stride(&self) -> u32 {
        self.segments_u + 1
    }

    pub fn vertex_count(&self) -> usize {
        (self.segments_u as usize + 1) * (self.segments_v as usize + 1)
    }

    pub fn cell_count(&self) -> usize {
        self.segments_u as usize * self.segments_v as usize
    }

    /// Grid-local index of the vertex at column `u`, row `v`
    pub fn index(&self, u: u32, v: u32) -> VertexIndex {
        v * self.stride() + u
    }

    /// Corners of cell `(u, v)`: bottom-left, bottom-right, top-right, top-left
    pub fn cell(&self, u: u32, v: u32) -> [VertexIndex; 4] {
        [
            self.index(u, v),
            self.index(u + 1, v),
            self.index(u + 1, v + 1),
            self.index(u, v + 1),
        ]
    }
}
