//! A flat disk, a bounded piece of a [Plane]

use glam::Vec3A;

use crate::{
    hittables::{angular_u, HitRecord, Hittable, Plane},
    ray::Ray,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Disk {
    plane: Plane,
    pub radius: f32,
}

impl Disk {
    /// Creates a new Disk centered on `center`, facing along `normal`.
    pub fn new(center: Vec3A, normal: Vec3A, radius: f32) -> Self {
        Self {
            plane: Plane::new(center, normal),
            radius,
        }
    }

    pub fn center(&self) -> Vec3A {
        self.plane.point
    }

    pub fn normal(&self) -> Vec3A {
        self.plane.normal
    }
}

impl Hittable for Disk {
    fn hit(&self, ray: &Ray, t_min: f32, t_max: f32) -> Option<HitRecord> {
        let t = self.plane.crossing(ray)?;
        if t <= t_min || t >= t_max {
            return None;
        }

        let local = ray.at(t) - self.plane.point;
        let dist = local.length();
        if dist > self.radius {
            return None;
        }

        // u around the rim, v from center out
        let (s, r) = self.plane.tangents();
        let uv = (angular_u(local.dot(s), local.dot(r)), dist / self.radius);

        Some(HitRecord::new(ray, t, self.plane.normal, uv))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inside_radius_hits() {
        let disk = Disk::new(Vec3A::new(15.0, 0.0, 10.0), Vec3A::Y, 2.0);
        let ray = Ray::new(Vec3A::new(16.0, 5.0, 10.0), -Vec3A::Y);
        let rec = disk.hit(&ray, 1e-3, f32::INFINITY).unwrap();
        assert!((rec.t - 5.0).abs() < 1e-5);
        assert!((rec.v - 0.5).abs() < 1e-5, "v = {}", rec.v);
    }

    #[test]
    fn outside_radius_misses() {
        let disk = Disk::new(Vec3A::ZERO, Vec3A::Y, 2.0);
        let ray = Ray::new(Vec3A::new(2.5, 5.0, 0.0), -Vec3A::Y);
        assert!(disk.hit(&ray, 1e-3, f32::INFINITY).is_none());
    }

    #[test]
    fn rim_is_included() {
        let disk = Disk::new(Vec3A::ZERO, Vec3A::Y, 2.0);
        let ray = Ray::new(Vec3A::new(2.0, 5.0, 0.0), -Vec3A::Y);
        assert!(disk.hit(&ray, 1e-3, f32::INFINITY).is_some());
    }
}
