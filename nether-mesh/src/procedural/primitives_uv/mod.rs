//! Parametric primitives with UV coordinates
//!
//! Each primitive is a descriptor (serde-loadable generation parameters) plus
//! a [`ParametricSurface`](super::ParametricSurface) that the shared sampler
//! walks.

mod ellipsoid;
mod torus;

pub use ellipsoid::{
    Ellipsoid, EllipsoidDescriptor, MIN_ELLIPSOID_SEGMENTS_U, MIN_ELLIPSOID_SEGMENTS_V,
    append_ellipsoid, generate_ellipsoid,
};
pub use torus::{MIN_TORUS_SEGMENTS, Torus, TorusDescriptor, append_torus, generate_torus};
