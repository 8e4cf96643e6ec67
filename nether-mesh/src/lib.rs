//! Nether-Mesh: parametric surface meshes for Nethercore
//!
//! Samples a parametric surface over a regular `(u, v)` grid and stitches the
//! grid cells into triangles. Generators append into any [`MeshBuilder`], so
//! several surfaces can share one vertex/index buffer.
//!
//! # Example
//! ```
//! use glam::{UVec2, Vec3};
//! use nether_mesh::procedural::*;
//!
//! let desc = EllipsoidDescriptor {
//!     radius: Vec3::new(2.0, 1.0, 1.0),
//!     segments: UVec2::new(16, 8),
//!     alternate_grid: true,
//! };
//!
//! let mut mesh: TriangleMesh = generate_ellipsoid(&desc);
//! assert_eq!(mesh.vertex_count(), 17 * 9);
//!
//! // Append a torus into the same buffer; its indices start after the ellipsoid.
//! append_torus(&TorusDescriptor::default(), &mut mesh);
//! ```
//!
//! # Conventions
//!
//! - Y is up. Ellipsoid poles lie on the Y axis, the torus ring lies in XZ.
//! - Texture coordinates span `[0, 1]` on both axes, with duplicated seam
//!   vertices at `u = 1` (and at `v = 1` for closed tubes).
//! - Generation never fails. Out-of-range segment counts are clamped and
//!   logged with `tracing::warn!`.

pub mod error;
pub mod procedural;

pub use error::MeshError;
pub use procedural::{MeshBuilder, TriangleMesh, Vertex, VertexIndex};
