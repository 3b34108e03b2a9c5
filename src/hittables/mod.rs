//! Geometric primitives that can be intersected by a [Ray]

use glam::Vec3A;

use crate::ray::Ray;

mod cone;
mod cylinder;
mod disk;
mod ellipsoid;
mod plane;
mod sphere;

pub use cone::{Cone, QuadricParameters};
pub use cylinder::{CylinderX, CylinderY};
pub use disk::Disk;
pub use ellipsoid::Ellipsoid;
pub use plane::Plane;
pub use sphere::Sphere;

/// Geometric data about a ray's intersection with a surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRecord {
    /// Distance along the ray, in multiples of its direction
    pub t: f32,
    /// Point of intersection
    pub point: Vec3A,
    /// Unit surface normal facing the side the ray came from
    pub normal: Vec3A,
    /// Whether the ray hit the outward facing side of the surface
    pub front_face: bool,
    /// Horizontal texture coordinate
    pub u: f32,
    /// Vertical texture coordinate
    pub v: f32,
}

impl HitRecord {
    /// Creates a record for a hit at `t` with the given outward normal.
    ///
    /// The stored normal is flipped when needed so that it faces the ray origin.
    pub fn new(ray: &Ray, t: f32, outward_normal: Vec3A, (u, v): (f32, f32)) -> Self {
        let mut rec = Self {
            t,
            point: ray.at(t),
            normal: outward_normal,
            front_face: true,
            u,
            v,
        };
        rec.set_face_normal(ray, outward_normal);
        rec
    }

    /// Orients the normal toward the incoming side of `ray`
    pub fn set_face_normal(&mut self, ray: &Ray, outward_normal: Vec3A) {
        self.front_face = ray.direction.dot(outward_normal) < 0.0;
        self.normal = if self.front_face {
            outward_normal
        } else {
            -outward_normal
        };
    }
}

/// Common trait for intersectable geometry
pub trait Hittable {
    /// Returns the nearest intersection with `t_min < t < t_max`, if any.
    fn hit(&self, ray: &Ray, t_min: f32, t_max: f32) -> Option<HitRecord>;
}

/// Every supported primitive kind
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Sphere(Sphere),
    Plane(Plane),
    Disk(Disk),
    Ellipsoid(Ellipsoid),
    CylinderX(CylinderX),
    CylinderY(CylinderY),
    Cone(Cone),
}

impl Hittable for Shape {
    fn hit(&self, ray: &Ray, t_min: f32, t_max: f32) -> Option<HitRecord> {
        match self {
            Shape::Sphere(s) => s.hit(ray, t_min, t_max),
            Shape::Plane(s) => s.hit(ray, t_min, t_max),
            Shape::Disk(s) => s.hit(ray, t_min, t_max),
            Shape::Ellipsoid(s) => s.hit(ray, t_min, t_max),
            Shape::CylinderX(s) => s.hit(ray, t_min, t_max),
            Shape::CylinderY(s) => s.hit(ray, t_min, t_max),
            Shape::Cone(s) => s.hit(ray, t_min, t_max),
        }
    }
}

macro_rules! impl_from_primitive {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Shape {
                fn from(s: $variant) -> Self {
                    Shape::$variant(s)
                }
            }
        )*
    };
}

impl_from_primitive!(Sphere, Plane, Disk, Ellipsoid, CylinderX, CylinderY, Cone);

/// Texture coordinates of a point on the unit sphere
///
/// `u` runs around the Y axis, `v` runs from the bottom pole (0) to the top pole (1).
pub(crate) fn spherical_uv(p: Vec3A) -> (f32, f32) {
    use std::f32::consts::PI;
    let theta = (-p.y).clamp(-1.0, 1.0).acos();
    let phi = (-p.z).atan2(p.x) + PI;
    (phi / (2.0 * PI), theta / PI)
}

/// Angle of `(a, b)` around an axis, mapped into [0, 1)
pub(crate) fn angular_u(a: f32, b: f32) -> f32 {
    use std::f32::consts::PI;
    (b.atan2(a) + PI) / (2.0 * PI)
}
