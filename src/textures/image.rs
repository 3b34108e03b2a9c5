//! An image-backed texture mapping

use std::path::Path;

use glam::Vec3A;

use crate::{
    color::{Color, VecExt},
    error::{Error, Result},
};

use super::Texture;

/// An image-based texture
#[derive(Debug)]
pub struct ImageMap {
    /// The image buffer used as the texture
    image: image::RgbImage,
}

impl ImageMap {
    /// Creates a new [ImageMap] from an already decoded image
    pub fn new(image: image::RgbImage) -> Self {
        Self { image }
    }

    /// Loads and decodes the image located at `file_path`
    pub fn open(file_path: impl AsRef<Path>) -> Result<Self> {
        let file_path = file_path.as_ref();
        let dyn_img = image::io::Reader::open(file_path)?
            .with_guessed_format()?
            .decode()?;
        if dyn_img.width() == 0 || dyn_img.height() == 0 {
            return Err(Error::Texture(format!(
                "{} has no pixels",
                file_path.display()
            )));
        }
        log::debug!(
            "loaded texture {} ({}x{})",
            file_path.display(),
            dyn_img.width(),
            dyn_img.height()
        );

        Ok(Self::new(dyn_img.into_rgb8()))
    }
}

impl Texture for ImageMap {
    fn get_pixel(&self, u: f32, v: f32) -> Color {
        let (width, height) = self.image.dimensions();
        if width == 0 || height == 0 {
            return Color::new(0.0, 1.0, 1.0);
        }

        let u = u.clamp(0.0, 1.0);
        // image rows run top to bottom
        let v = 1.0 - v.clamp(0.0, 1.0);

        let i = ((u * width as f32) as u32).min(width - 1);
        let j = ((v * height as f32) as u32).min(height - 1);

        Vec3A::from_pixel(self.image[(i, j)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_by_two() -> ImageMap {
        let mut img = image::RgbImage::new(2, 2);
        img.put_pixel(0, 0, image::Rgb([255, 0, 0]));
        img.put_pixel(1, 0, image::Rgb([0, 255, 0]));
        img.put_pixel(0, 1, image::Rgb([0, 0, 255]));
        img.put_pixel(1, 1, image::Rgb([255, 255, 255]));
        ImageMap::new(img)
    }

    #[test]
    fn corners_map_to_texels() {
        let tex = two_by_two();
        // v = 1 is the top row of the image
        assert_eq!(tex.get_pixel(0.0, 1.0), Color::new(1.0, 0.0, 0.0));
        assert_eq!(tex.get_pixel(1.0, 1.0), Color::new(0.0, 1.0, 0.0));
        assert_eq!(tex.get_pixel(0.0, 0.0), Color::new(0.0, 0.0, 1.0));
        assert_eq!(tex.get_pixel(1.0, 0.0), Color::ONE);
    }

    #[test]
    fn out_of_range_is_clamped() {
        let tex = two_by_two();
        assert_eq!(tex.get_pixel(-1.0, 5.0), tex.get_pixel(0.0, 1.0));
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(ImageMap::open("does/not/exist.png").is_err());
    }
}
