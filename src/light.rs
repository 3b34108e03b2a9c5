//! Light sources and the Phong illumination model

use std::fmt;

use glam::Vec3A;

use crate::{
    camera::Frame,
    color::{clamp_color, Color},
    material::Material,
    utils::ATTENUATION_EPSILON,
};

/// Color components a light contributes to each Phong term
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightColor {
    pub ambient: Color,
    pub diffuse: Color,
    pub specular: Color,
}

impl LightColor {
    pub const PURE_WHITE: LightColor = LightColor {
        ambient: Vec3A::ONE,
        diffuse: Vec3A::ONE,
        specular: Vec3A::ONE,
    };

    pub const WHITE: LightColor = LightColor {
        ambient: Vec3A::from_array([0.2, 0.2, 0.2]),
        diffuse: Vec3A::ONE,
        specular: Vec3A::ONE,
    };

    pub const DIM: LightColor = LightColor {
        ambient: Vec3A::from_array([0.1, 0.1, 0.1]),
        diffuse: Vec3A::from_array([0.5, 0.5, 0.5]),
        specular: Vec3A::from_array([0.5, 0.5, 0.5]),
    };
}

/// Distance falloff, `1 / (constant + linear * d + quadratic * d²)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttenuationParameters {
    pub constant: f32,
    pub linear: f32,
    pub quadratic: f32,
}

impl Default for AttenuationParameters {
    fn default() -> Self {
        Self {
            constant: 1.0,
            linear: 0.0,
            quadratic: 0.0,
        }
    }
}

impl AttenuationParameters {
    pub fn new(constant: f32, linear: f32, quadratic: f32) -> Self {
        Self {
            constant,
            linear,
            quadratic,
        }
    }

    /// Attenuation factor at `distance` from the light.
    ///
    /// The denominator never drops below [ATTENUATION_EPSILON].
    pub fn factor(&self, distance: f32) -> f32 {
        let denom = self.constant + self.linear * distance + self.quadratic * distance * distance;
        1.0 / denom.max(ATTENUATION_EPSILON)
    }
}

impl fmt::Display for AttenuationParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {} {}]", self.constant, self.linear, self.quadratic)
    }
}

/// A light emitting equally in every direction from a point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionalLight {
    /// Position in world space, or in the eye frame when not tied to the world
    pub position: Vec3A,
    pub is_on: bool,
    /// Whether `position` is fixed in the world or moves along with the camera
    pub tied_to_world: bool,
    pub attenuation_on: bool,
    pub attenuation: AttenuationParameters,
    pub color: LightColor,
}

impl PositionalLight {
    /// Creates a new light that is on, tied to the world, and not attenuated
    pub fn new(position: Vec3A, color: LightColor) -> Self {
        Self {
            position,
            is_on: true,
            tied_to_world: true,
            attenuation_on: false,
            attenuation: AttenuationParameters::default(),
            color,
        }
    }

    /// Enables attenuation using `params`
    pub fn with_attenuation(self, params: AttenuationParameters) -> Self {
        Self {
            attenuation_on: true,
            attenuation: params,
            ..self
        }
    }

    /// Attaches the light to the camera, `position` is then read in the eye frame
    pub fn tied_to_camera(self) -> Self {
        Self {
            tied_to_world: false,
            ..self
        }
    }
}

/// A positional light restricted to a cone around `direction`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpotLight {
    pub light: PositionalLight,
    /// Unit axis of the cone
    pub direction: Vec3A,
    /// Angle between the axis and the edge of the cone, in radians
    pub half_angle: f32,
}

impl SpotLight {
    /// Creates a new spot light at `position` pointing toward `target`
    pub fn new(position: Vec3A, target: Vec3A, half_angle: f32, color: LightColor) -> Self {
        Self {
            light: PositionalLight::new(position, color),
            direction: (target - position).normalize(),
            half_angle,
        }
    }

    /// Whether `point` lies strictly inside the cone
    pub fn in_cone(&self, point: Vec3A) -> bool {
        match (point - self.light.position).try_normalize() {
            Some(to_point) => self.direction.dot(to_point) > self.half_angle.cos(),
            // the apex itself
            None => true,
        }
    }
}

/// Every supported light kind
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Light {
    Positional(PositionalLight),
    Spot(SpotLight),
}

impl From<PositionalLight> for Light {
    fn from(light: PositionalLight) -> Self {
        Light::Positional(light)
    }
}

impl From<SpotLight> for Light {
    fn from(light: SpotLight) -> Self {
        Light::Spot(light)
    }
}

impl Light {
    /// Properties shared by every light kind
    pub fn base(&self) -> &PositionalLight {
        match self {
            Light::Positional(light) => light,
            Light::Spot(spot) => &spot.light,
        }
    }

    /// Mutable access to the shared properties
    pub fn base_mut(&mut self) -> &mut PositionalLight {
        match self {
            Light::Positional(light) => light,
            Light::Spot(spot) => &mut spot.light,
        }
    }

    pub fn position(&self) -> Vec3A {
        self.base().position
    }

    pub fn is_on(&self) -> bool {
        self.base().is_on
    }

    /// Flips the light on or off, returning the new state
    pub fn toggle(&mut self) -> bool {
        let base = self.base_mut();
        base.is_on = !base.is_on;
        base.is_on
    }

    /// Returns this light with its position (and spot axis) resolved into world space.
    ///
    /// Lights tied to the world are returned unchanged, camera-tied lights are
    /// interpreted in `eye`'s basis.
    pub fn in_world(&self, eye: &Frame) -> Light {
        if self.base().tied_to_world {
            return *self;
        }

        let mut resolved = *self;
        {
            let base = resolved.base_mut();
            base.position = eye.to_world(base.position);
            base.tied_to_world = true;
        }
        if let Light::Spot(spot) = &mut resolved {
            spot.direction = eye.to_world_vector(spot.direction).normalize();
        }
        resolved
    }

    /// Computes the color this light produces at a surface point.
    ///
    /// Falls back to the ambient term when the light is off, the point is in shadow,
    /// or, for spot lights, the point lies outside the cone.
    /// `position` is used as-is, see [Light::in_world].
    pub fn illuminate(
        &self,
        point: Vec3A,
        normal: Vec3A,
        material: &Material,
        viewer: &Frame,
        in_shadow: bool,
    ) -> Color {
        let base = self.base();
        let outside_cone = match self {
            Light::Positional(_) => false,
            Light::Spot(spot) => !spot.in_cone(point),
        };

        if !base.is_on || in_shadow || outside_cone {
            return ambient_color(material.ambient, base.color.ambient);
        }

        total_color(base, material, point, normal, viewer.origin)
    }
}

impl fmt::Display for PositionalLight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", if self.is_on { "ON" } else { "OFF" })?;
        writeln!(f, "{}", if self.tied_to_world { "WORLD" } else { "CAMERA" })?;
        writeln!(f, " position {}", self.position)?;
        writeln!(f, " ambient {}", self.color.ambient)?;
        writeln!(f, " diffuse {}", self.color.diffuse)?;
        writeln!(f, " specular {}", self.color.specular)?;
        write!(
            f,
            "Attenuation: {} {}",
            if self.attenuation_on { "ON" } else { "OFF" },
            self.attenuation
        )
    }
}

impl fmt::Display for Light {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Light::Positional(light) => write!(f, "{light}"),
            Light::Spot(spot) => {
                writeln!(f, "{}", spot.light)?;
                writeln!(f, " direction {}", spot.direction)?;
                write!(f, " FOV {}", 2.0 * spot.half_angle)
            }
        }
    }
}

#[inline]
fn ambient_color(material: Color, light: Color) -> Color {
    light * material
}

#[inline]
fn diffuse_color(material: Color, light: Color, l: Vec3A, n: Vec3A) -> Color {
    light * material * l.dot(n).max(0.0)
}

#[inline]
fn specular_color(material: Color, light: Color, shininess: f32, r: Vec3A, v: Vec3A) -> Color {
    light * material * v.dot(r).max(0.0).powf(shininess)
}

/// Full Phong sum for a single light, clamped to [0, 1]
fn total_color(
    light: &PositionalLight,
    material: &Material,
    point: Vec3A,
    normal: Vec3A,
    viewer: Vec3A,
) -> Color {
    let v = (viewer - point).normalize_or_zero();
    // shade the side facing the viewer
    let n = if v.dot(normal) < 0.0 { -normal } else { normal };

    let to_light = light.position - point;
    let l = to_light.normalize_or_zero();
    let r = 2.0 * l.dot(n) * n - l;

    let amb = ambient_color(material.ambient, light.color.ambient);
    let diff = diffuse_color(material.diffuse, light.color.diffuse, l, n);
    let spec = specular_color(material.specular, light.color.specular, material.shininess, r, v);

    let atten = if light.attenuation_on {
        light.attenuation.factor(to_light.length())
    } else {
        1.0
    };

    clamp_color(amb + diff * atten + spec * atten)
}
