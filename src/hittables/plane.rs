//! An infinite plane through a point

use glam::Vec3A;

use crate::{
    hittables::{HitRecord, Hittable},
    ray::Ray,
};

/// Rays whose direction is this close to perpendicular to the normal are treated as parallel.
const PARALLEL_EPSILON: f32 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub point: Vec3A,
    /// Unit normal
    pub normal: Vec3A,
}

impl Plane {
    /// Creates a new Plane, normalizing `normal`.
    pub fn new(point: Vec3A, normal: Vec3A) -> Self {
        Self {
            point,
            normal: normal.normalize(),
        }
    }

    /// Returns the ray parameter at which `ray` crosses the plane, ignoring bounds.
    pub(crate) fn crossing(&self, ray: &Ray) -> Option<f32> {
        let denom = ray.direction.dot(self.normal);
        if denom.abs() < PARALLEL_EPSILON {
            return None;
        }
        Some((self.point - ray.origin).dot(self.normal) / denom)
    }

    /// Two unit axes spanning the plane
    pub(crate) fn tangents(&self) -> (Vec3A, Vec3A) {
        let helper = if self.normal.x.abs() > 0.9 {
            Vec3A::Y
        } else {
            Vec3A::X
        };
        let s = self.normal.cross(helper).normalize();
        let t = self.normal.cross(s);
        (s, t)
    }
}

impl Hittable for Plane {
    fn hit(&self, ray: &Ray, t_min: f32, t_max: f32) -> Option<HitRecord> {
        let t = self.crossing(ray)?;
        if t <= t_min || t >= t_max {
            return None;
        }

        let local = ray.at(t) - self.point;
        let (s, r) = self.tangents();
        let uv = (local.dot(s).rem_euclid(1.0), local.dot(r).rem_euclid(1.0));

        Some(HitRecord::new(ray, t, self.normal, uv))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn straight_down() {
        let plane = Plane::new(Vec3A::new(0.0, -2.0, 0.0), Vec3A::Y);
        let ray = Ray::new(Vec3A::new(3.0, 5.0, 1.0), -Vec3A::Y);
        let rec = plane.hit(&ray, 1e-3, f32::INFINITY).unwrap();

        assert!((rec.t - 7.0).abs() < 1e-5, "got t = {}", rec.t);
        assert!(rec.point.abs_diff_eq(Vec3A::new(3.0, -2.0, 1.0), 1e-5));
        assert_eq!(rec.normal, Vec3A::Y);
    }

    #[test]
    fn parallel_ray_misses() {
        let plane = Plane::new(Vec3A::ZERO, Vec3A::Y);
        let ray = Ray::new(Vec3A::new(0.0, 1.0, 0.0), Vec3A::X);
        assert!(plane.hit(&ray, 1e-3, f32::INFINITY).is_none());
    }

    #[test]
    fn behind_origin_misses() {
        let plane = Plane::new(Vec3A::ZERO, Vec3A::Y);
        let ray = Ray::new(Vec3A::new(0.0, 1.0, 0.0), Vec3A::Y);
        assert!(plane.hit(&ray, 1e-3, f32::INFINITY).is_none());
    }

    #[test]
    fn from_below_flips_normal() {
        let plane = Plane::new(Vec3A::ZERO, Vec3A::Y);
        let ray = Ray::new(Vec3A::new(0.0, -1.0, 0.0), Vec3A::Y);
        let rec = plane.hit(&ray, 1e-3, f32::INFINITY).unwrap();
        assert_eq!(rec.normal, -Vec3A::Y);
        assert!(!rec.front_face);
    }

    #[test]
    fn uv_in_unit_range() {
        let plane = Plane::new(Vec3A::ZERO, Vec3A::new(0.0, 1.0, 1.0));
        let ray = Ray::new(Vec3A::new(-7.3, 4.0, 2.2), Vec3A::new(0.1, -1.0, -0.3));
        let rec = plane.hit(&ray, 1e-3, f32::INFINITY).unwrap();
        assert!((0.0..=1.0).contains(&rec.u), "u = {}", rec.u);
        assert!((0.0..=1.0).contains(&rec.v), "v = {}", rec.v);
    }
}
