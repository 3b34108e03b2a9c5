//! Open, finite cylinders aligned with the X or Y axis

use glam::Vec3A;

use crate::{
    hittables::{angular_u, HitRecord, Hittable},
    ray::Ray,
    utils::quadratic::quadratic,
};

/// Index of a coordinate axis in a [Vec3A]
type Axis = usize;

/// Shared implementation of axis-aligned tubes.
///
/// The tube is centered on `center` and extends `height / 2` along `axis` in both directions.
fn hit_tube(
    center: Vec3A,
    radius: f32,
    height: f32,
    axis: Axis,
    ray: &Ray,
    t_min: f32,
    t_max: f32,
) -> Option<HitRecord> {
    let mut origin = ray.origin - center;
    let mut dir = ray.direction;
    // project onto the plane perpendicular to the axis
    origin[axis] = 0.0;
    dir[axis] = 0.0;

    let a = dir.length_squared();
    let b = 2.0 * origin.dot(dir);
    let c = origin.length_squared() - radius * radius;

    let half_height = height / 2.0;
    let local_at = |t: f32| ray.at(t) - center;

    let t = quadratic(a, b, c).nearest_within(t_min, t_max, |t| {
        local_at(t)[axis].abs() <= half_height
    })?;

    let local = local_at(t);
    let along = local[axis];
    let mut outward_normal = local;
    outward_normal[axis] = 0.0;
    outward_normal /= radius;

    let (s, r) = match axis {
        0 => (local.y, local.z),
        _ => (local.z, local.x),
    };
    let uv = (angular_u(s, r), (along + half_height) / height);

    Some(HitRecord::new(ray, t, outward_normal, uv))
}

/// Cylinder whose axis runs parallel to X
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CylinderX {
    pub center: Vec3A,
    pub radius: f32,
    pub height: f32,
}

impl CylinderX {
    /// Creates a new CylinderX
    pub fn new(center: Vec3A, radius: f32, height: f32) -> Self {
        Self {
            center,
            radius,
            height,
        }
    }
}

impl Hittable for CylinderX {
    fn hit(&self, ray: &Ray, t_min: f32, t_max: f32) -> Option<HitRecord> {
        hit_tube(self.center, self.radius, self.height, 0, ray, t_min, t_max)
    }
}

/// Cylinder whose axis runs parallel to Y
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CylinderY {
    pub center: Vec3A,
    pub radius: f32,
    pub height: f32,
}

impl CylinderY {
    /// Creates a new CylinderY
    pub fn new(center: Vec3A, radius: f32, height: f32) -> Self {
        Self {
            center,
            radius,
            height,
        }
    }
}

impl Hittable for CylinderY {
    fn hit(&self, ray: &Ray, t_min: f32, t_max: f32) -> Option<HitRecord> {
        hit_tube(self.center, self.radius, self.height, 1, ray, t_min, t_max)
    }
}
