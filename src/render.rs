//! Render a [Scene] into a [FrameBuffer].

use std::time::Instant;

#[cfg(feature = "parallel")]
use {indicatif::ParallelProgressIterator, rayon::prelude::*};

#[cfg(not(feature = "parallel"))]
use indicatif::ProgressIterator;

use crate::{
    camera::Frame,
    color::{clamp_color, Color},
    error::Result,
    framebuffer::FrameBuffer,
    light::Light,
    ray::{reflect, Ray},
    scene::{Scene, SceneHit},
    utils::{progress::get_progressbar, SURFACE_BIAS},
};

/// Sub-pixel offsets of the supersampling grid, in pixels
const GRID_OFFSETS: [f32; 3] = [-1.0 / 3.0, 0.0, 1.0 / 3.0];

/// Weight of the locally shaded color when blending with a reflection
const LOCAL_WEIGHT: f32 = 0.5;

/// How many rays are traced per pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Sampling {
    /// A single ray through the pixel center
    Single,
    /// A 3x3 grid of rays spaced a third of a pixel apart, averaged
    #[default]
    Grid3x3,
}

/// Recursive Whitted-style ray tracer
#[derive(Debug, Clone, Copy)]
pub struct Tracer {
    /// Number of reflection bounces per primary ray
    pub depth: u16,
    pub sampling: Sampling,
}

impl Default for Tracer {
    fn default() -> Self {
        Self {
            depth: 1,
            sampling: Sampling::Grid3x3,
        }
    }
}

/// Read-only state shared by every ray of a render pass
struct PassContext<'a> {
    scene: &'a Scene,
    /// Lights with camera-tied positions already resolved into world space
    lights: Vec<Light>,
    eye: Frame,
}

impl<'a> PassContext<'a> {
    fn new(scene: &'a Scene) -> Self {
        let eye = *scene.camera.frame();
        Self {
            scene,
            lights: scene.lights.iter().map(|light| light.in_world(&eye)).collect(),
            eye,
        }
    }
}

impl Tracer {
    /// Creates a new [Tracer].
    pub fn new(depth: u16, sampling: Sampling) -> Self {
        Self { depth, sampling }
    }

    /// Renders `scene` into `framebuffer` and presents it.
    ///
    /// The scene's camera is configured for the framebuffer's dimensions first.
    /// Rows are shaded independently, in parallel with the `parallel` feature.
    pub fn render(&self, scene: &mut Scene, framebuffer: &mut impl FrameBuffer) -> Result<()> {
        let (width, height) = (framebuffer.width(), framebuffer.height());
        scene.camera.calculate_viewing_parameters(width, height);

        log::info!(
            "Rendering {}x{} pixels, {} shapes, {} lights, depth {}, {:?} sampling",
            width,
            height,
            scene.shapes.len(),
            scene.lights.len(),
            self.depth,
            self.sampling
        );
        for light in &scene.lights {
            log::debug!("{light}");
        }

        let start = Instant::now();
        let pixels = self.shade_pixels(scene, width, height);
        log::info!("Render time: {:.3} sec.", start.elapsed().as_secs_f32());

        let row_len = width as usize;
        for (idx, color) in pixels.into_iter().enumerate() {
            framebuffer.set_color((idx % row_len) as u32, (idx / row_len) as u32, color);
        }
        framebuffer.show_color_buffer()
    }

    /// Returns the colors of all pixels, row-major with the bottom row first
    fn shade_pixels(&self, scene: &Scene, width: u32, height: u32) -> Vec<Color> {
        let mut pixels = vec![scene.background; width as usize * height as usize];
        if pixels.is_empty() {
            return pixels;
        }

        let ctx = PassContext::new(scene);
        let progress_bar = get_progressbar(height as u64).with_prefix("Tracing rows");

        let shade_row = |(y, row): (usize, &mut [Color])| {
            for (x, pixel) in row.iter_mut().enumerate() {
                *pixel = self.compute_pixel(&ctx, x as f32, y as f32);
            }
        };

        #[cfg(feature = "parallel")]
        pixels
            .par_chunks_mut(width as usize)
            .enumerate()
            .progress_with(progress_bar)
            .for_each(shade_row);
        #[cfg(not(feature = "parallel"))]
        pixels
            .chunks_mut(width as usize)
            .enumerate()
            .progress_with(progress_bar)
            .for_each(shade_row);

        pixels
    }

    /// Calculates the final color of the pixel at (`x`, `y`)
    #[inline]
    fn compute_pixel(&self, ctx: &PassContext<'_>, x: f32, y: f32) -> Color {
        let camera = &ctx.scene.camera;
        match self.sampling {
            Sampling::Single => clamp_color(self.trace_in(ctx, &camera.get_ray(x, y), self.depth)),
            Sampling::Grid3x3 => {
                let sum: Color = GRID_OFFSETS
                    .iter()
                    .flat_map(|dy| GRID_OFFSETS.iter().map(move |dx| (*dx, *dy)))
                    .map(|(dx, dy)| self.trace_in(ctx, &camera.get_ray(x + dx, y + dy), self.depth))
                    .fold(Color::ZERO, |acc, shade| acc + shade);
                clamp_color(sum / (GRID_OFFSETS.len() * GRID_OFFSETS.len()) as f32)
            }
        }
    }

    /// Returns the color seen along `ray`, following up to `depth` reflections.
    ///
    /// The scene's camera must already be configured, see [Tracer::render].
    pub fn trace(&self, ray: &Ray, scene: &Scene, depth: u16) -> Color {
        self.trace_in(&PassContext::new(scene), ray, depth)
    }

    fn trace_in(&self, ctx: &PassContext<'_>, ray: &Ray, depth: u16) -> Color {
        let hit = match ctx.scene.find_intersection(ray) {
            Some(hit) => hit,
            // without a hit, functions like a miss shader
            None => return ctx.scene.background,
        };

        let mut color = self.local_color(ctx, ray, &hit);

        // see-through surfaces let the ray continue unbent
        if hit.alpha < 1.0 {
            let through = Ray::new(hit.rec.point - hit.rec.normal * SURFACE_BIAS, ray.direction);
            let transmitted = self.trace_in(ctx, &through, depth);
            color = hit.alpha * color + (1.0 - hit.alpha) * transmitted;
        }

        if depth > 0 {
            let bounced = Ray::new(
                hit.rec.point + hit.rec.normal * SURFACE_BIAS,
                reflect(ray.direction, hit.rec.normal),
            );
            let reflected = self.trace_in(ctx, &bounced, depth - 1);
            color = LOCAL_WEIGHT * color + (1.0 - LOCAL_WEIGHT) * reflected;
        }

        clamp_color(color)
    }

    /// Sum of every light's contribution at the hit point, modulated by its texture
    fn local_color(&self, ctx: &PassContext<'_>, ray: &Ray, hit: &SceneHit<'_>) -> Color {
        let SceneHit { rec, material, .. } = hit;
        let viewer = Frame {
            origin: ray.origin,
            ..ctx.eye
        };
        let shadow_origin = rec.point + rec.normal * SURFACE_BIAS;

        let illumination: Color = ctx
            .lights
            .iter()
            .map(|light| {
                let in_shadow = ctx.scene.is_occluded(shadow_origin, light.position());
                light.illuminate(rec.point, rec.normal, material, &viewer, in_shadow)
            })
            .fold(Color::ZERO, |acc, contribution| acc + contribution);

        match hit.texture {
            Some(texture) => {
                let texel = texture.get_pixel(rec.u.clamp(0.0, 1.0), rec.v.clamp(0.0, 1.0));
                texel * illumination
            }
            None => illumination,
        }
    }
}
