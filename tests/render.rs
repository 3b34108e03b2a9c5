use std::path::PathBuf;

use glam::Vec3A;
use glint::{
    color::colors,
    framebuffer::{ColorBuffer, FrameBuffer, ImageFile},
    render::{Sampling, Tracer},
    scenes::{self, CameraKind, SceneOptions, SceneType},
    textures::{ImageMap, Texture},
};
use rand::{rngs::SmallRng, SeedableRng};

fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("glint-{}-{name}", std::process::id()))
}

fn render(scene_type: SceneType, options: &SceneOptions, sampling: Sampling) -> ColorBuffer {
    let mut rng = SmallRng::seed_from_u64(0);
    let mut scene = scenes::get_scene(scene_type, options, &mut rng);
    let mut framebuffer = ColorBuffer::new(40, 30);
    Tracer::new(1, sampling)
        .render(&mut scene, &mut framebuffer)
        .expect("in-memory render failed");
    framebuffer
}

#[test]
fn showcase_sky_and_ground() {
    let options = SceneOptions {
        attenuation: true,
        ..Default::default()
    };
    let fb = render(SceneType::Showcase, &options, Sampling::Grid3x3);

    // the top row looks above every shape
    let sky = fb.get_color(0, 29).unwrap();
    assert!(
        (sky - colors::DARK_GRAY).abs().max_element() < 1e-5,
        "top-left pixel is {sky}"
    );

    // the bottom center looks down onto the ground plane
    let ground = fb.get_color(20, 0).unwrap();
    assert_ne!(ground, colors::DARK_GRAY);
    assert!(ground.cmpge(Vec3A::ZERO).all() && ground.cmple(Vec3A::ONE).all());
}

#[test]
fn seeded_renders_are_identical() {
    let options = SceneOptions::default();
    let a = render(SceneType::Random, &options, Sampling::Single);
    let b = render(SceneType::Random, &options, Sampling::Single);
    assert_eq!(a, b);
}

#[test]
fn projections_differ() {
    let perspective = render(SceneType::Ellipsoids, &SceneOptions::default(), Sampling::Single);
    let orthographic = render(
        SceneType::Ellipsoids,
        &SceneOptions {
            camera: CameraKind::Orthographic,
            ..Default::default()
        },
        Sampling::Single,
    );
    assert_ne!(perspective, orthographic);
}

#[test]
fn renders_to_image_file() {
    let path = scratch_path("window.ppm");
    let mut output = ImageFile::new(32, 24, &path);
    let mut scene = scenes::get_scene(
        SceneType::Window,
        &SceneOptions::default(),
        &mut SmallRng::seed_from_u64(0),
    );

    Tracer::default()
        .render(&mut scene, &mut output)
        .expect("writing the image failed");

    let written = image::open(&path).expect("written image is unreadable").into_rgb8();
    assert_eq!(written.dimensions(), (output.width(), output.height()));
    std::fs::remove_file(&path).ok();
}

#[test]
fn unwritable_output_is_an_error() {
    let path = scratch_path("missing-dir").join("frame.png");
    let mut output = ImageFile::new(4, 4, path);
    let mut scene = scenes::get_scene(
        SceneType::Showcase,
        &SceneOptions::default(),
        &mut SmallRng::seed_from_u64(0),
    );
    assert!(Tracer::default().render(&mut scene, &mut output).is_err());
}

#[test]
fn texture_from_file() {
    assert!(ImageMap::open(scratch_path("does-not-exist.png")).is_err());

    let path = scratch_path("texture.png");
    let img = image::RgbImage::from_fn(2, 2, |x, _| {
        if x == 0 {
            image::Rgb([255, 0, 0])
        } else {
            image::Rgb([0, 0, 255])
        }
    });
    img.save(&path).unwrap();

    let texture = ImageMap::open(&path).expect("saved texture failed to load");
    assert_eq!(texture.get_pixel(0.1, 0.5), colors::RED);
    assert_eq!(texture.get_pixel(0.9, 0.5), colors::BLUE);
    std::fs::remove_file(&path).ok();
}
