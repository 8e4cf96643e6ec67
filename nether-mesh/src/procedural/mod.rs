//! Procedural mesh generation
//!
//! Parametric surfaces are sampled on a `(segments_u + 1) × (segments_v + 1)`
//! vertex grid and every grid cell is split into two triangles.
//!
//! All generators come in two flavours:
//! - `generate_*`: builds a fresh mesh and returns it
//! - `append_*`: appends into an existing mesh, offsetting indices by the
//!   vertex count the mesh had before the call

mod combine;
mod grid;
mod primitives_uv;
mod surface;
mod types;


// Re-export types
pub use types::{MeshBuilder, TriangleMesh, Vertex, VertexIndex};

// Re-export mesh merging
pub use combine::combine;

// Re-export the sampling core
pub use grid::{GridLayout, QuadDiagonal, add_triangulated_quad};
pub use surface::{ParametricSurface, SurfacePoint, sample_surface};

// Re-export parametric primitives
pub use primitives_uv::{
    Ellipsoid, EllipsoidDescriptor, MIN_ELLIPSOID_SEGMENTS_U, MIN_ELLIPSOID_SEGMENTS_V,
    MIN_TORUS_SEGMENTS, Torus, TorusDescriptor, append_ellipsoid, append_torus,
    generate_ellipsoid, generate_torus,
};
