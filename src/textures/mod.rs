//! Surface textures sampled with (u, v) coordinates

use std::fmt::Debug;

use crate::color::Color;

mod checkered;
mod image;

pub use self::checkered::Checkered;
pub use self::image::ImageMap;

/// A color lookup over the unit square
///
/// Implementations clamp `u` and `v` into [0, 1] before sampling.
pub trait Texture: Debug + Send + Sync {
    fn get_pixel(&self, u: f32, v: f32) -> Color;
}

/// A texture of a single color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolidColor {
    pub color: Color,
}

impl SolidColor {
    /// Creates a new SolidColor
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

impl Texture for SolidColor {
    fn get_pixel(&self, _u: f32, _v: f32) -> Color {
        self.color
    }
}
