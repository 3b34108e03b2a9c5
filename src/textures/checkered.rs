//! A texture alternating between two colors in a checkerboard fashion.

use crate::{color::Color, textures::Texture};

/// A checkerboard of `tiles` x `tiles` squares over the unit square.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Checkered {
    pub even: Color,
    pub odd: Color,
    pub tiles: u32,
}

impl Checkered {
    /// Creates a new checkered texture
    pub fn new(even: Color, odd: Color, tiles: u32) -> Self {
        Self {
            even,
            odd,
            tiles: tiles.max(1),
        }
    }
}

impl Texture for Checkered {
    fn get_pixel(&self, u: f32, v: f32) -> Color {
        let tiles = self.tiles as f32;
        // u = 1 or v = 1 belongs to the last tile
        let i = ((u.clamp(0.0, 1.0) * tiles) as u32).min(self.tiles - 1);
        let j = ((v.clamp(0.0, 1.0) * tiles) as u32).min(self.tiles - 1);

        if (i + j) % 2 == 0 {
            self.even
        } else {
            self.odd
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::colors::{BLACK, WHITE};

    #[test]
    fn alternates_between_tiles() {
        let tex = Checkered::new(WHITE, BLACK, 4);
        assert_eq!(tex.get_pixel(0.1, 0.1), WHITE);
        assert_eq!(tex.get_pixel(0.3, 0.1), BLACK);
        assert_eq!(tex.get_pixel(0.3, 0.3), WHITE);
        assert_eq!(tex.get_pixel(1.0, 1.0), WHITE);
    }

    #[test]
    fn clamps_coordinates() {
        let tex = Checkered::new(WHITE, BLACK, 2);
        assert_eq!(tex.get_pixel(-3.0, 0.2), tex.get_pixel(0.0, 0.2));
        assert_eq!(tex.get_pixel(7.0, 0.2), tex.get_pixel(1.0, 0.2));
    }
}
