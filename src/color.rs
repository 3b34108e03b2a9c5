//! Color and pixel output

use glam::Vec3A;

pub use glam::Vec3A as Color;

pub mod colors {
    use super::{Color, Vec3A};

    pub const WHITE: Color = Vec3A::ONE;
    pub const BLACK: Color = Vec3A::ZERO;
    pub const DARK_GRAY: Color = Vec3A::from_array([0.25, 0.25, 0.25]);
    pub const RED: Color = Vec3A::from_array([1.0, 0.0, 0.0]);
    pub const BLUE: Color = Vec3A::from_array([0.0, 0.0, 1.0]);
}

/// Clamps every channel of `color` into [0, 1].
#[inline]
pub fn clamp_color(color: Color) -> Color {
    color.clamp(Vec3A::ZERO, Vec3A::ONE)
}

// conversion for sdr pixels
pub trait VecExt<P: image::Pixel> {
    fn to_pixel(self) -> P;
    fn from_pixel(p: P) -> Self;
}

impl VecExt<image::Rgb<u8>> for Vec3A {
    fn to_pixel(self) -> image::Rgb<u8> {
        image::Rgb::<u8>(
            self.to_array()
                .map(|channel| (channel.clamp(0.0, 1.0) * u8::MAX as f32).round() as u8),
        )
    }

    fn from_pixel(p: image::Rgb<u8>) -> Self {
        Self::from_array(p.0.map(|channel| (channel as f32 / u8::MAX as f32).clamp(0.0, 1.0)))
    }
}
