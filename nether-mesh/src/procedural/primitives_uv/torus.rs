//! Torus with wrapped UV mapping

use glam::{UVec2, Vec2, Vec3};
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;
use tracing::{debug, warn};

use crate::procedural::surface::{ParametricSurface, SurfacePoint, sample_surface};
use crate::procedural::types::MeshBuilder;

/// Minimum segments around both the ring and the tube
pub const MIN_TORUS_SEGMENTS: u32 = 3;

/// Torus generation parameters
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TorusDescriptor {
    /// Distance from torus center to tube center
    pub ring_radius: f32,
    /// Tube radius
    pub tube_radius: f32,
    /// Segments around the ring (x) and around the tube (y)
    pub segments: UVec2,
    /// Flip the quad diagonal on every other cell
    pub alternate_grid: bool,
}

impl Default for TorusDescriptor {
    fn default() -> Self {
        Self {
            ring_radius: 0.5,
            tube_radius: 0.25,
            segments: UVec2::new(32, 16),
            alternate_grid: false,
        }
    }
}

impl TorusDescriptor {
    /// Segment counts after applying the generator minimum
    pub fn clamped_segments(&self) -> UVec2 {
        self.segments.max(UVec2::splat(MIN_TORUS_SEGMENTS))
    }
}

/// Torus lying in the XZ plane around the Y axis
///
/// `u` runs around the ring (`phi = u * 2π`), `v` around the tube
/// (`theta = v * 2π`, starting at the outer equator and heading down so the
/// grid winds counter-clockwise seen from outside).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Torus {
    pub ring_radius: f32,
    pub tube_radius: f32,
}

impl ParametricSurface for Torus {
    fn sample(&self, tex_coord: Vec2) -> SurfacePoint {
        let (sin_phi, cos_phi) = (tex_coord.x * TAU).sin_cos();
        let (sin_theta, cos_theta) = (tex_coord.y * TAU).sin_cos();

        let normal = Vec3::new(cos_theta * cos_phi, -sin_theta, cos_theta * sin_phi);
        let tube_center = Vec3::new(self.ring_radius * cos_phi, 0.0, self.ring_radius * sin_phi);

        SurfacePoint {
            position: tube_center + normal * self.tube_radius,
            normal,
        }
    }
}

/// Generate a torus mesh
///
/// # Returns
/// Mesh with `(segments_u + 1) × (segments_v + 1)` vertices and
/// `segments_u × segments_v × 2` triangles, using the clamped segment counts.
///
/// Note: Includes duplicate seam vertices at U=1.0 and V=1.0 for correct texture wrapping.
pub fn generate_torus<M: MeshBuilder + Default>(desc: &TorusDescriptor) -> M {
    let mut mesh = M::default();
    append_torus(desc, &mut mesh);
    mesh
}

/// Append a torus to an existing mesh
pub fn append_torus<M: MeshBuilder + ?Sized>(desc: &TorusDescriptor, mesh: &mut M) {
    let segments = desc.clamped_segments();
    if segments != desc.segments {
        warn!(
            "append_torus: segments {}x{} below minimum, clamping to {}x{}",
            desc.segments.x, desc.segments.y, segments.x, segments.y
        );
    }

    let torus = Torus {
        ring_radius: desc.ring_radius,
        tube_radius: desc.tube_radius,
    };
    sample_surface(mesh, &torus, segments, desc.alternate_grid);

    debug!(
        "append_torus: radii {}/{}, {}x{} segments, alternate_grid={}",
        desc.ring_radius, desc.tube_radius, segments.x, segments.y, desc.alternate_grid
    );
}
