//! A cone described by a general quadric surface

use glam::{Mat3A, Vec3A};

use crate::{
    hittables::{angular_u, HitRecord, Hittable},
    ray::Ray,
    utils::quadratic::quadratic,
};

/// Coefficients of `Ax² + By² + Cz² + Dxy + Eyz + Fxz + Gx + Hy + Iz + J = 0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadricParameters {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub e: f32,
    pub f: f32,
    pub g: f32,
    pub h: f32,
    pub i: f32,
    pub j: f32,
}

impl QuadricParameters {
    /// Creates a quadric from its ten coefficients, in `A..J` order.
    pub fn from_coefficients([a, b, c, d, e, f, g, h, i, j]: [f32; 10]) -> Self {
        Self {
            a,
            b,
            c,
            d,
            e,
            f,
            g,
            h,
            i,
            j,
        }
    }

    /// Creates a quadric with only second-degree terms (`A..F`).
    pub fn second_degree(a: f32, b: f32, c: f32, d: f32, e: f32, f: f32) -> Self {
        Self::from_coefficients([a, b, c, d, e, f, 0.0, 0.0, 0.0, 0.0])
    }

    /// A circular double cone around the Y axis with its apex at the origin,
    /// `radius` wide at a distance `height` from the apex.
    pub fn circular_cone(radius: f32, height: f32) -> Self {
        let k = (height / radius).powi(2);
        Self::second_degree(k, -1.0, k, 0.0, 0.0, 0.0)
    }

    /// Symmetric matrix of the second-degree terms
    fn quadratic_form(&self) -> Mat3A {
        Mat3A::from_cols(
            Vec3A::new(self.a, self.d / 2.0, self.f / 2.0),
            Vec3A::new(self.d / 2.0, self.b, self.e / 2.0),
            Vec3A::new(self.f / 2.0, self.e / 2.0, self.c),
        )
    }

    fn linear_terms(&self) -> Vec3A {
        Vec3A::new(self.g, self.h, self.i)
    }

    /// Evaluates the quadric at `p`
    pub fn eval(&self, p: Vec3A) -> f32 {
        p.dot(self.quadratic_form() * p) + self.linear_terms().dot(p) + self.j
    }

    /// Gradient of the quadric at `p`, the direction of its outward normal
    pub fn gradient(&self, p: Vec3A) -> Vec3A {
        2.0 * (self.quadratic_form() * p) + self.linear_terms()
    }
}

/// A cone opening downward from `apex`, bounded to `height` below it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cone {
    pub apex: Vec3A,
    pub height: f32,
    /// Surface, in coordinates relative to the apex
    pub quadric: QuadricParameters,
}

impl Cone {
    /// Creates a new Cone from an arbitrary quadric
    pub fn new(apex: Vec3A, height: f32, quadric: QuadricParameters) -> Self {
        Self {
            apex,
            height,
            quadric,
        }
    }

    /// Creates a circular cone that is `radius` wide at its base
    pub fn circular(apex: Vec3A, radius: f32, height: f32) -> Self {
        Self::new(apex, height, QuadricParameters::circular_cone(radius, height))
    }
}

impl Hittable for Cone {
    fn hit(&self, ray: &Ray, t_min: f32, t_max: f32) -> Option<HitRecord> {
        let q = &self.quadric;
        let m = q.quadratic_form();
        let lin = q.linear_terms();

        let o = ray.origin - self.apex;
        let d = ray.direction;
        let md = m * d;

        let a = d.dot(md);
        let b = 2.0 * o.dot(md) + lin.dot(d);
        let c = o.dot(m * o) + lin.dot(o) + q.j;

        let local_at = |t: f32| ray.at(t) - self.apex;
        let in_range = |y: f32| (-self.height..=0.0).contains(&y);

        let t = quadratic(a, b, c).nearest_within(t_min, t_max, |t| in_range(local_at(t).y))?;

        let local = local_at(t);
        // the gradient vanishes at the apex itself
        let outward_normal = match q.gradient(local).try_normalize() {
            Some(n) => n,
            None => -ray.direction.normalize(),
        };
        let uv = (
            angular_u(local.x, local.z),
            (local.y + self.height) / self.height,
        );

        Some(HitRecord::new(ray, t, outward_normal, uv))
    }
}
