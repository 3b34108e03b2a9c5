//! A sphere defined by a center point and a radius

use glam::Vec3A;

use crate::{
    hittables::{spherical_uv, HitRecord, Hittable},
    ray::Ray,
    utils::quadratic::quadratic,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub center: Vec3A,
    pub radius: f32,
}

impl Sphere {
    /// Creates a new Sphere
    pub fn new(center: Vec3A, radius: f32) -> Self {
        Self { center, radius }
    }
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray, t_min: f32, t_max: f32) -> Option<HitRecord> {
        let oc = ray.origin - self.center;
        let a = ray.direction.length_squared();
        let b = 2.0 * oc.dot(ray.direction);
        let c = oc.length_squared() - self.radius * self.radius;

        let t = quadratic(a, b, c).nearest_within(t_min, t_max, |_| true)?;
        let outward_normal = (ray.at(t) - self.center) / self.radius;

        Some(HitRecord::new(
            ray,
            t,
            outward_normal,
            spherical_uv(outward_normal),
        ))
    }
}
