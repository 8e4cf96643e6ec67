//! Procedural mesh types
//!
//! Shared types for procedural mesh generation.

use bytemuck::{Pod, Zeroable, cast_slice};
use glam::{Vec2, Vec3};

/// Index into a mesh's vertex list
pub type VertexIndex = u32;

/// Trait for mesh construction - enables generic geometry generation
///
/// Generators only ever append, so any buffer that can hand out the next
/// vertex index and store triangles can be a generation target.
pub trait MeshBuilder {
    /// Add a vertex, returning its index
    fn add_vertex(&mut self, vertex: Vertex) -> VertexIndex;

    /// Add a triangle using three vertex indices
    fn add_triangle(&mut self, i0: VertexIndex, i1: VertexIndex, i2: VertexIndex);

    /// Number of vertices currently stored (the index the next vertex gets)
    fn vertex_count(&self) -> usize;

    /// Hint that `vertices` more vertices and `triangles` more triangles follow
    fn reserve(&mut self, _vertices: usize, _triangles: usize) {}
}

/// Vertex with position, normal, and texture coordinates
///
/// Laid out as 8 tightly packed `f32`s (32 bytes) so vertex slices can be
/// uploaded to the GPU as-is.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: Vec3,
    pub normal: Vec3,
    pub tex_coord: Vec2,
}

impl Vertex {
    /// Create a new vertex
    pub fn new(position: Vec3, normal: Vec3, tex_coord: Vec2) -> Self {
        Self {
            position,
            normal,
            tex_coord,
        }
    }
}

/// Triangle mesh with full-precision vertices and `u32` triangle indices
///
/// Append-only: vertices and triangles are pushed in order and never
/// removed. Duplicate vertices (UV seams, poles) are kept as generated.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TriangleMesh {
    pub(super) vertices: Vec<Vertex>,
    pub(super) triangles: Vec<[VertexIndex; 3]>,
}

impl TriangleMesh {
    /// Create empty mesh
    pub fn new() -> Self {
        Self::default()
    }

    /// Create empty mesh with room for the given number of vertices and triangles
    pub fn with_capacity(vertices: usize, triangles: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            triangles: Vec::with_capacity(triangles),
        }
    }

    /// All vertices in insertion order
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// All triangles in insertion order
    pub fn triangles(&self) -> &[[VertexIndex; 3]] {
        &self.triangles
    }

    /// Triangle indices as a flat list (3 per triangle)
    pub fn indices(&self) -> &[VertexIndex] {
        cast_slice(self.triangles.as_slice())
    }

    /// Get vertex count
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get triangle count
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// True if the mesh has no vertices
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Raw vertex data (32 bytes per vertex) for GPU upload
    pub fn vertex_bytes(&self) -> &[u8] {
        cast_slice(self.vertices.as_slice())
    }

    /// Raw index data (native byte order, 4 bytes per index)
    pub fn index_bytes(&self) -> &[u8] {
        cast_slice(self.triangles.as_slice())
    }
}

impl MeshBuilder for TriangleMesh {
    fn add_vertex(&mut self, vertex: Vertex) -> VertexIndex {
        let index = self.vertices.len() as VertexIndex;
        self.vertices.push(vertex);
        index
    }

    fn add_triangle(&mut self, i0: VertexIndex, i1: VertexIndex, i2: VertexIndex) {
        self.triangles.push([i0, i1, i2]);
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn reserve(&mut self, vertices: usize, triangles: usize) {
        self.vertices.reserve(vertices);
        self.triangles.reserve(triangles);
    }
}
