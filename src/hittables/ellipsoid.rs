//! An axis-aligned ellipsoid, a unit sphere under a non-uniform scale

use glam::{Affine3A, Mat3A, Vec3, Vec3A};

use crate::{
    hittables::{spherical_uv, HitRecord, Hittable},
    ray::Ray,
    utils::quadratic::quadratic,
};

/// An ellipsoid with semi-axis lengths `radii`.
///
/// Every component of `radii` must be non-zero, rays are intersected in the
/// ellipsoid's canonical (unit sphere) frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipsoid {
    pub center: Vec3A,
    pub radii: Vec3A,
    /// world -> canonical frame
    inv_transform: Affine3A,
    /// inverse-transpose of the linear part, for normals
    normal_matrix: Mat3A,
}

impl Ellipsoid {
    /// Creates a new Ellipsoid
    pub fn new(center: Vec3A, radii: Vec3A) -> Self {
        let inv_transform = (Affine3A::from_translation(Vec3::from(center))
            * Affine3A::from_scale(Vec3::from(radii)))
        .inverse();
        Self {
            center,
            radii,
            inv_transform,
            normal_matrix: inv_transform.matrix3.transpose(),
        }
    }
}

impl Hittable for Ellipsoid {
    fn hit(&self, ray: &Ray, t_min: f32, t_max: f32) -> Option<HitRecord> {
        // same `t` parameterizes both rays since the map is affine
        let local_ray = Ray::new(
            self.inv_transform.transform_point3a(ray.origin),
            self.inv_transform.transform_vector3a(ray.direction),
        );

        let a = local_ray.direction.length_squared();
        let b = 2.0 * local_ray.origin.dot(local_ray.direction);
        let c = local_ray.origin.length_squared() - 1.0;

        let t = quadratic(a, b, c).nearest_within(t_min, t_max, |_| true)?;

        let local_point = local_ray.at(t);
        let outward_normal = (self.normal_matrix * local_point).normalize();

        Some(HitRecord::new(
            ray,
            t,
            outward_normal,
            spherical_uv(local_point),
        ))
    }
}
