//! Ellipsoid with equirectangular UV mapping

use glam::{UVec2, Vec2, Vec3};
use serde::{Deserialize, Serialize};
use std::f32::consts::{PI, TAU};
use tracing::{debug, warn};

use crate::error::MeshError;
use crate::procedural::surface::{ParametricSurface, SurfacePoint, sample_surface};
use crate::procedural::types::MeshBuilder;

/// Minimum segments around the equator (a triangular cross-section)
pub const MIN_ELLIPSOID_SEGMENTS_U: u32 = 3;

/// Minimum latitude bands
pub const MIN_ELLIPSOID_SEGMENTS_V: u32 = 2;

/// Ellipsoid generation parameters
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EllipsoidDescriptor {
    /// Semi-axis lengths along X, Y, Z
    pub radius: Vec3,
    /// Segments around the pole axis (x) and from pole to pole (y)
    pub segments: UVec2,
    /// Flip the quad diagonal on every other cell
    pub alternate_grid: bool,
}

impl Default for EllipsoidDescriptor {
    fn default() -> Self {
        Self {
            radius: Vec3::ONE,
            segments: UVec2::new(20, 10),
            alternate_grid: false,
        }
    }
}

impl EllipsoidDescriptor {
    /// Check that every radius is finite and positive
    ///
    /// Generators never call this; degenerate radii just produce degenerate
    /// geometry. Use it where descriptors come from untrusted input.
    pub fn validate(&self) -> Result<(), MeshError> {
        for (axis, value) in ['x', 'y', 'z'].into_iter().zip(self.radius.to_array()) {
            if !value.is_finite() || value <= 0.0 {
                return Err(MeshError::InvalidRadius { axis, value });
            }
        }
        Ok(())
    }

    /// Segment counts after applying the generator minimums
    pub fn clamped_segments(&self) -> UVec2 {
        self.segments
            .max(UVec2::new(MIN_ELLIPSOID_SEGMENTS_U, MIN_ELLIPSOID_SEGMENTS_V))
    }
}

/// Ellipsoid surface centered at the origin with its poles on the Y axis
///
/// `u` runs around the Y axis (`phi = u * 2π`, starting at +X towards +Z),
/// `v` runs from the +Y pole (`v = 0`) to the -Y pole (`v = 1`,
/// `theta = v * π`).
///
/// Normals are the unit sphere direction, not the true ellipsoid normal
/// (which would scale by the inverse squared radii). They are exact only when
/// all three radii are equal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipsoid {
    pub radius: Vec3,
}

impl Ellipsoid {
    pub fn new(radius: Vec3) -> Self {
        Self { radius }
    }

    /// Unit direction for polar angle `theta` and azimuth `phi`
    ///
    /// Standard spherical conversion `(sin θ cos φ, sin θ sin φ, cos θ)`
    /// with the last two components swapped to put the pole on +Y.
    fn direction(theta: f32, phi: f32) -> Vec3 {
        let (sin_theta, cos_theta) = theta.sin_cos();
        let (sin_phi, cos_phi) = phi.sin_cos();
        Vec3::new(sin_theta * cos_phi, cos_theta, sin_theta * sin_phi)
    }
}

impl ParametricSurface for Ellipsoid {
    fn sample(&self, tex_coord: Vec2) -> SurfacePoint {
        let theta = tex_coord.y * PI;
        let phi = tex_coord.x * TAU;
        let direction = Self::direction(theta, phi);

        SurfacePoint {
            position: direction * self.radius,
            normal: direction,
        }
    }
}

/// Generate an ellipsoid mesh
///
/// # Returns
/// Mesh with `(segments_u + 1) × (segments_v + 1)` vertices and
/// `segments_u × segments_v × 2` triangles, using the clamped segment counts.
pub fn generate_ellipsoid<M: MeshBuilder + Default>(desc: &EllipsoidDescriptor) -> M {
    let mut mesh = M::default();
    append_ellipsoid(desc, &mut mesh);
    mesh
}

/// Append an ellipsoid to an existing mesh
///
/// Indices are offset by the vertex count `mesh` has on entry. Segment counts
/// below `MIN_ELLIPSOID_SEGMENTS_U` / `MIN_ELLIPSOID_SEGMENTS_V` are raised to
/// the minimum. Radii are used as given: zero, negative or non-finite values
/// flow straight into the positions.
pub fn append_ellipsoid<M: MeshBuilder + ?Sized>(desc: &EllipsoidDescriptor, mesh: &mut M) {
    let segments = desc.clamped_segments();
    if segments != desc.segments {
        warn!(
            "append_ellipsoid: segments {}x{} below minimum, clamping to {}x{}",
            desc.segments.x, desc.segments.y, segments.x, segments.y
        );
    }

    sample_surface(
        mesh,
        &Ellipsoid::new(desc.radius),
        segments,
        desc.alternate_grid,
    );

    debug!(
        "append_ellipsoid: radius {:?}, {}x{} segments, alternate_grid={}",
        desc.radius, segments.x, segments.y, desc.alternate_grid
    );
}
