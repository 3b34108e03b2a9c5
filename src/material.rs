//! Phong surface materials

use glam::Vec3A;

use crate::color::Color;

/// Reflectance properties of a surface under the Phong model
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub ambient: Color,
    pub diffuse: Color,
    pub specular: Color,
    /// Exponent of the specular highlight
    pub shininess: f32,
    /// Opacity in [0, 1], where 1 is fully opaque
    pub alpha: f32,
}

impl Material {
    /// Creates a new, fully opaque [Material].
    pub const fn new(ambient: Color, diffuse: Color, specular: Color, shininess: f32) -> Self {
        Self {
            ambient,
            diffuse,
            specular,
            shininess,
            alpha: 1.0,
        }
    }

    /// Returns a copy of this material with the given opacity, clamped to [0, 1].
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self {
            alpha: alpha.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Whether the material blocks light completely
    pub fn is_opaque(&self) -> bool {
        self.alpha >= 1.0
    }
}

const fn rgb(r: f32, g: f32, b: f32) -> Color {
    Vec3A::from_array([r, g, b])
}

/// Classic OpenGL material table entries
pub mod materials {
    use super::{rgb, Material};

    pub const TIN: Material = Material::new(
        rgb(0.105882, 0.058824, 0.113725),
        rgb(0.427451, 0.470588, 0.541176),
        rgb(0.333333, 0.333333, 0.521569),
        9.84615,
    );

    pub const SILVER: Material = Material::new(
        rgb(0.19225, 0.19225, 0.19225),
        rgb(0.50754, 0.50754, 0.50754),
        rgb(0.508273, 0.508273, 0.508273),
        51.2,
    );

    pub const CHROME: Material = Material::new(
        rgb(0.25, 0.25, 0.25),
        rgb(0.4, 0.4, 0.4),
        rgb(0.774597, 0.774597, 0.774597),
        76.8,
    );

    pub const GOLD: Material = Material::new(
        rgb(0.24725, 0.1995, 0.0745),
        rgb(0.75164, 0.60648, 0.22648),
        rgb(0.628281, 0.555802, 0.366065),
        51.2,
    );

    pub const POLISHED_BRONZE: Material = Material::new(
        rgb(0.25, 0.148, 0.06475),
        rgb(0.4, 0.2368, 0.1036),
        rgb(0.774597, 0.458561, 0.200621),
        76.8,
    );

    pub const BLACK_RUBBER: Material = Material::new(
        rgb(0.02, 0.02, 0.02),
        rgb(0.01, 0.01, 0.01),
        rgb(0.4, 0.4, 0.4),
        10.0,
    );

    pub const WHITE_PLASTIC: Material = Material::new(
        rgb(0.0, 0.0, 0.0),
        rgb(0.55, 0.55, 0.55),
        rgb(0.70, 0.70, 0.70),
        32.0,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_are_opaque() {
        assert!(materials::SILVER.is_opaque());
        assert_eq!(materials::CHROME.alpha, 1.0);
    }

    #[test]
    fn alpha_is_clamped() {
        let glass = materials::SILVER.with_alpha(1.5);
        assert!(glass.is_opaque());

        let glass = materials::SILVER.with_alpha(0.3);
        assert!(!glass.is_opaque());
        assert_eq!(glass.diffuse, materials::SILVER.diffuse);
    }
}
