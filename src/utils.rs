//! Various utilities
//!
//! Progress reporting, root solving and the shared tolerances of the tracer

pub mod progress;
pub mod quadratic;

/// Smallest distance along a ray accepted as an intersection.
///
/// Excludes self-intersections of rays leaving a surface.
pub const INTERSECTION_EPSILON: f32 = 1e-3;

/// Distance secondary rays are pushed off a surface before being traced.
pub const SURFACE_BIAS: f32 = 1e-3;

/// Lower bound of the attenuation denominator.
pub const ATTENUATION_EPSILON: f32 = 1e-4;
