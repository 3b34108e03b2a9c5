//! Scene generation functionality

use std::{f32::consts::FRAC_PI_2, sync::Arc};

use glam::Vec3A;
use rand::Rng;

use crate::{
    camera::Camera,
    color::{colors, Color},
    hittables::*,
    light::{AttenuationParameters, Light, LightColor, PositionalLight, SpotLight},
    material::{materials, Material},
    scene::{Scene, VisibleShape},
    textures::{Checkered, Texture},
};

/// Possible hard-coded scenes to choose from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SceneType {
    /// A plane, sphere, both cylinders and a cone under a point light and a spot light
    Showcase,
    /// Shapes seen through a translucent window
    Window,
    /// An ellipsoid standing on a disk next to a mirror sphere
    Ellipsoids,
    /// Randomly placed spheres on a ground plane
    Random,
}

/// Possible projections of the scene camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum CameraKind {
    #[default]
    Perspective,
    Orthographic,
}

/// Scene construction options not tied to a particular scene
#[derive(Debug, Clone, Default)]
pub struct SceneOptions {
    pub camera: CameraKind,
    /// Texture for the textured surfaces, a checkerboard is used otherwise
    pub texture: Option<Arc<dyn Texture>>,
    /// Whether lights fall off with distance
    pub attenuation: bool,
}

/// Returns the [Scene] of the given type.
pub fn get_scene(scene_type: SceneType, options: &SceneOptions, rng: &mut impl Rng) -> Scene {
    // Setup default camera properties
    let mut look_from = Vec3A::new(0.0, 10.0, 25.0);
    let mut look_at = Vec3A::ZERO;
    let view_up = Vec3A::Y;
    let mut fov = FRAC_PI_2;
    let mut view_width = 25.0;
    let mut bg_color = colors::DARK_GRAY;

    let texture = options.texture.clone().unwrap_or_else(|| {
        Arc::new(Checkered::new(colors::WHITE, colors::RED, 8)) as Arc<dyn Texture>
    });

    // Grabs the scene contents and changes any cam params
    let (shapes, mut lights) = match scene_type {
        SceneType::Showcase => gen_showcase(&texture),
        SceneType::Window => {
            look_from = Vec3A::new(0.0, 6.0, 30.0);
            look_at = Vec3A::new(0.0, 2.0, 0.0);
            fov = 60f32.to_radians();
            gen_window(&texture)
        }
        SceneType::Ellipsoids => {
            look_from = Vec3A::new(5.0, 8.0, 22.0);
            look_at = Vec3A::new(5.0, 2.0, 0.0);
            fov = 50f32.to_radians();
            view_width = 20.0;
            gen_ellipsoids(&texture)
        }
        SceneType::Random => {
            look_from = Vec3A::new(13.0, 4.0, 13.0);
            look_at = Vec3A::new(0.0, 0.5, 0.0);
            fov = 45f32.to_radians();
            bg_color = Color::new(0.1, 0.1, 0.15);
            gen_random_spheres(rng)
        }
    };

    if options.attenuation {
        let params = AttenuationParameters::new(1.0, 0.01, 0.0005);
        for light in &mut lights {
            let base = light.base_mut();
            base.attenuation_on = true;
            base.attenuation = params;
        }
    }

    let camera = match options.camera {
        CameraKind::Perspective => Camera::perspective(look_from, look_at, view_up, fov),
        CameraKind::Orthographic => Camera::orthographic(look_from, look_at, view_up, view_width),
    };

    let mut scene = Scene::new(camera).with_background(bg_color);
    scene.shapes = shapes;
    scene.lights = lights;
    scene
}

type SceneContents = (Vec<VisibleShape>, Vec<Light>);

/// The default lights: a point light up and to the side, and a spot light pointing down
fn default_lights() -> Vec<Light> {
    vec![
        PositionalLight::new(Vec3A::new(10.0, 10.0, 10.0), LightColor::WHITE).into(),
        SpotLight::new(
            Vec3A::new(0.0, 8.0, 0.0),
            Vec3A::new(0.0, -20.0, 0.0),
            10f32.to_radians(),
            LightColor::DIM,
        )
        .into(),
    ]
}

fn gen_showcase(texture: &Arc<dyn Texture>) -> SceneContents {
    let plane = Plane::new(Vec3A::new(0.0, -2.0, 0.0), Vec3A::Y);
    let sphere = Sphere::new(Vec3A::new(15.0, 3.0, 10.0), 5.0);
    let cyl_x = CylinderX::new(Vec3A::new(0.0, 2.0, -2.0), 3.0, 20.0);
    let cyl_y = CylinderY::new(Vec3A::new(-10.0, 2.0, 12.0), 3.0, 8.0);
    let cone = Cone::circular(Vec3A::new(-14.0, 10.0, -10.0), 4.0, 12.0);

    let shapes = vec![
        VisibleShape::new(plane, materials::TIN),
        VisibleShape::new(sphere, materials::SILVER),
        VisibleShape::new(cyl_x, materials::CHROME).with_texture(texture),
        VisibleShape::new(cyl_y, materials::POLISHED_BRONZE),
        VisibleShape::new(cone, materials::BLACK_RUBBER),
    ];

    (shapes, default_lights())
}

fn gen_window(texture: &Arc<dyn Texture>) -> SceneContents {
    let window = Plane::new(Vec3A::new(0.0, 0.0, 10.0), Vec3A::Z);
    let floor = Plane::new(Vec3A::new(0.0, -2.0, 0.0), Vec3A::Y);

    let shapes = vec![
        VisibleShape::new(window, materials::WHITE_PLASTIC.with_alpha(0.3)),
        VisibleShape::new(floor, materials::TIN).with_texture(texture),
        VisibleShape::new(Sphere::new(Vec3A::new(-4.0, 2.0, 0.0), 4.0), materials::GOLD),
        VisibleShape::new(
            CylinderY::new(Vec3A::new(6.0, 2.0, -2.0), 2.0, 8.0),
            materials::POLISHED_BRONZE,
        ),
    ];

    let mut lights = default_lights();
    lights.truncate(1);
    (shapes, lights)
}

fn gen_ellipsoids(texture: &Arc<dyn Texture>) -> SceneContents {
    let ground = Plane::new(Vec3A::new(0.0, -2.0, 0.0), Vec3A::Y);
    let pedestal = Disk::new(Vec3A::new(10.0, -1.99, 0.0), Vec3A::Y, 5.0);
    let ellipsoid = Ellipsoid::new(Vec3A::new(10.0, 2.0, 0.0), Vec3A::new(3.0, 4.0, 3.0));
    let mirror = Sphere::new(Vec3A::new(0.0, 1.0, 0.0), 3.0);

    let shapes = vec![
        VisibleShape::new(ground, materials::TIN),
        VisibleShape::new(pedestal, materials::WHITE_PLASTIC).with_texture(texture),
        VisibleShape::new(ellipsoid, materials::GOLD),
        VisibleShape::new(mirror, materials::CHROME),
    ];

    let lights = vec![
        PositionalLight::new(Vec3A::new(-5.0, 15.0, 15.0), LightColor::WHITE).into(),
        SpotLight::new(
            Vec3A::new(10.0, 12.0, 0.0),
            Vec3A::new(10.0, 0.0, 0.0),
            25f32.to_radians(),
            LightColor::DIM,
        )
        .into(),
    ];
    (shapes, lights)
}

/// Returns a ground plane with randomly-generated spheres on it
fn gen_random_spheres(rng: &mut impl Rng) -> SceneContents {
    const PALETTE: [Material; 5] = [
        materials::GOLD,
        materials::SILVER,
        materials::CHROME,
        materials::POLISHED_BRONZE,
        materials::WHITE_PLASTIC,
    ];

    let mut shapes = vec![VisibleShape::new(Plane::new(Vec3A::ZERO, Vec3A::Y), materials::TIN)];

    // The random generation part
    for a in -5..5 {
        for b in -5..5 {
            let radius = rng.gen_range(0.2..0.5);
            let center = Vec3A::new(
                a as f32 + 0.9 * rng.gen::<f32>(),
                radius,
                b as f32 + 0.9 * rng.gen::<f32>(),
            );

            let mut material = PALETTE[rng.gen_range(0..PALETTE.len())];
            if rng.gen_bool(0.15) {
                material = material.with_alpha(rng.gen_range(0.3..0.8));
            }
            shapes.push(VisibleShape::new(Sphere::new(center, radius), material));
        }
    }

    let lights = vec![PositionalLight::new(Vec3A::new(5.0, 12.0, 5.0), LightColor::WHITE).into()];
    (shapes, lights)
}
