//! Everything visible in a frame: camera, shapes, lights

use std::{fmt, sync::Arc};

use glam::Vec3A;

use crate::{
    camera::Camera,
    color::{colors, Color},
    hittables::{HitRecord, Hittable, Shape},
    light::Light,
    material::Material,
    ray::Ray,
    textures::Texture,
    utils::INTERSECTION_EPSILON,
};

/// A [Shape] paired with its surface appearance
#[derive(Clone)]
pub struct VisibleShape {
    pub shape: Shape,
    pub material: Material,
    pub texture: Option<Arc<dyn Texture>>,
}

impl fmt::Debug for VisibleShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VisibleShape")
            .field("shape", &self.shape)
            .field("material", &self.material)
            .field("textured", &self.texture.is_some())
            .finish()
    }
}

impl VisibleShape {
    /// Creates a new, untextured VisibleShape
    pub fn new(shape: impl Into<Shape>, material: Material) -> Self {
        Self {
            shape: shape.into(),
            material,
            texture: None,
        }
    }

    /// Builder form of [VisibleShape::set_texture]
    pub fn with_texture(mut self, texture: &Arc<dyn Texture>) -> Self {
        self.set_texture(texture);
        self
    }

    pub fn set_texture(&mut self, texture: &Arc<dyn Texture>) {
        self.texture = Some(Arc::clone(texture));
    }
}

/// The nearest intersection of a ray with a [Scene]
#[derive(Debug, Clone, Copy)]
pub struct SceneHit<'a> {
    pub rec: HitRecord,
    pub material: &'a Material,
    pub texture: Option<&'a dyn Texture>,
    /// Opacity, copied from the material
    pub alpha: f32,
}

/// A scene to be rendered
///
/// Must not change while a render pass is running, mutate it between frames.
#[derive(Debug, Clone)]
pub struct Scene {
    pub camera: Camera,
    /// Tested in order, on equal distances the earlier shape wins
    pub shapes: Vec<VisibleShape>,
    pub lights: Vec<Light>,
    /// Color of rays that hit nothing
    pub background: Color,
}

impl Scene {
    /// Creates an empty scene viewed through `camera`
    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            shapes: Vec::new(),
            lights: Vec::new(),
            background: colors::DARK_GRAY,
        }
    }

    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    pub fn add_shape(&mut self, shape: VisibleShape) -> &mut Self {
        self.shapes.push(shape);
        self
    }

    pub fn add_light(&mut self, light: impl Into<Light>) -> &mut Self {
        self.lights.push(light.into());
        self
    }

    /// Returns the nearest hit with `t` above [INTERSECTION_EPSILON].
    ///
    /// Every shape is tested, each one only has to beat the current nearest distance,
    /// so for equal distances the first shape in [Scene::shapes] is reported.
    pub fn find_intersection(&self, ray: &Ray) -> Option<SceneHit<'_>> {
        let mut nearest: Option<SceneHit<'_>> = None;

        for visible in &self.shapes {
            let t_max = nearest.as_ref().map_or(f32::INFINITY, |hit| hit.rec.t);
            let candidate = visible
                .shape
                .hit(ray, INTERSECTION_EPSILON, t_max)
                .map(|rec| SceneHit {
                    rec,
                    material: &visible.material,
                    texture: visible.texture.as_deref(),
                    alpha: visible.material.alpha,
                });

            // the candidate already beat `t_max`, so it always replaces
            nearest = candidate.or(nearest);
        }

        nearest
    }

    /// Whether an opaque shape lies on the segment from `from` to `to`.
    ///
    /// Shapes with an alpha below 1 never occlude.
    pub fn is_occluded(&self, from: Vec3A, to: Vec3A) -> bool {
        let to_target = to - from;
        let distance = to_target.length();
        if distance <= INTERSECTION_EPSILON {
            return false;
        }

        let ray = Ray::new(from, to_target / distance);
        self.shapes
            .iter()
            .filter(|visible| visible.material.is_opaque())
            .any(|visible| {
                visible
                    .shape
                    .hit(&ray, INTERSECTION_EPSILON, distance)
                    .is_some()
            })
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;
    use crate::{
        hittables::{Plane, Sphere},
        material::materials,
        textures::SolidColor,
    };

    fn empty_scene() -> Scene {
        Scene::new(Camera::perspective(
            Vec3A::new(0.0, 0.0, 10.0),
            Vec3A::ZERO,
            Vec3A::Y,
            FRAC_PI_2,
        ))
    }

    #[test]
    fn nearest_of_many() {
        let mut scene = empty_scene();
        scene
            .add_shape(VisibleShape::new(
                Sphere::new(Vec3A::new(0.0, 0.0, -10.0), 1.0),
                materials::TIN,
            ))
            .add_shape(VisibleShape::new(Sphere::new(Vec3A::ZERO, 1.0), materials::GOLD))
            .add_shape(VisibleShape::new(
                Sphere::new(Vec3A::new(0.0, 0.0, -5.0), 1.0),
                materials::SILVER,
            ));

        let ray = Ray::new(Vec3A::new(0.0, 0.0, 10.0), -Vec3A::Z);
        let hit = scene.find_intersection(&ray).expect("ray through three spheres missed");
        assert!((hit.rec.t - 9.0).abs() < 1e-5, "got t = {}", hit.rec.t);
        assert_eq!(*hit.material, materials::GOLD);
        assert!(hit.texture.is_none());
    }

    #[test]
    fn miss_is_none() {
        let mut scene = empty_scene();
        scene.add_shape(VisibleShape::new(Sphere::new(Vec3A::ZERO, 1.0), materials::GOLD));
        let ray = Ray::new(Vec3A::new(0.0, 0.0, 10.0), Vec3A::Z);
        assert!(scene.find_intersection(&ray).is_none());
    }

    #[test]
    fn ties_keep_first_shape() {
        let mut scene = empty_scene();
        let plane = Plane::new(Vec3A::ZERO, Vec3A::Z);
        scene
            .add_shape(VisibleShape::new(plane, materials::TIN))
            .add_shape(VisibleShape::new(plane, materials::GOLD));

        let ray = Ray::new(Vec3A::new(0.0, 0.0, 10.0), -Vec3A::Z);
        let hit = scene.find_intersection(&ray).unwrap();
        assert_eq!(*hit.material, materials::TIN, "second of two coincident shapes won");

        scene.shapes.reverse();
        let hit = scene.find_intersection(&ray).unwrap();
        assert_eq!(*hit.material, materials::GOLD);
    }

    #[test]
    fn hit_carries_texture_and_alpha() {
        let mut scene = empty_scene();
        let texture: Arc<dyn Texture> = Arc::new(SolidColor::new(colors::RED));
        scene.add_shape(
            VisibleShape::new(Sphere::new(Vec3A::ZERO, 1.0), materials::CHROME.with_alpha(0.5))
                .with_texture(&texture),
        );

        let ray = Ray::new(Vec3A::new(0.0, 0.0, 10.0), -Vec3A::Z);
        let hit = scene.find_intersection(&ray).unwrap();
        assert_eq!(hit.alpha, 0.5);
        let tex = hit.texture.expect("texture was not carried into the hit");
        assert_eq!(tex.get_pixel(hit.rec.u, hit.rec.v), colors::RED);
    }

    #[test]
    fn occlusion_by_opaque_shape() {
        let mut scene = empty_scene();
        let light = Vec3A::new(0.0, 10.0, 0.0);
        assert!(!scene.is_occluded(Vec3A::ZERO, light), "empty scene occluded");

        scene.add_shape(VisibleShape::new(
            Sphere::new(Vec3A::new(0.0, 5.0, 0.0), 1.0),
            materials::SILVER,
        ));
        assert!(scene.is_occluded(Vec3A::ZERO, light));
    }

    #[test]
    fn transparent_shapes_do_not_occlude() {
        let mut scene = empty_scene();
        scene.add_shape(VisibleShape::new(
            Sphere::new(Vec3A::new(0.0, 5.0, 0.0), 1.0),
            materials::SILVER.with_alpha(0.4),
        ));
        assert!(!scene.is_occluded(Vec3A::ZERO, Vec3A::new(0.0, 10.0, 0.0)));
    }

    #[test]
    fn shapes_beyond_the_light_do_not_occlude() {
        let mut scene = empty_scene();
        scene.add_shape(VisibleShape::new(
            Sphere::new(Vec3A::new(0.0, 15.0, 0.0), 1.0),
            materials::SILVER,
        ));
        assert!(!scene.is_occluded(Vec3A::ZERO, Vec3A::new(0.0, 10.0, 0.0)));
    }
}
