//! Errors for the optional mesh helpers.
//!
//! Surface generation itself is infallible; only descriptor validation and
//! mesh merging can fail.

use crate::procedural::VertexIndex;

/// Error type for descriptor validation and mesh merging.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MeshError {
    #[error("Invalid radius on {axis} axis: {value} (must be finite and > 0)")]
    InvalidRadius { axis: char, value: f32 },

    #[error("Vertex count {vertices} exceeds the index range (max {})", VertexIndex::MAX)]
    IndexOverflow { vertices: usize },
}
