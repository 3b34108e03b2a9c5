//! Cameras turning framebuffer pixels into world space rays

use glam::Vec3A;

use crate::ray::Ray;

/// An orthonormal basis placed at `origin`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub origin: Vec3A,
    pub u: Vec3A,
    pub v: Vec3A,
    pub w: Vec3A,
}

impl Frame {
    /// Builds a right-handed frame at `eye` looking toward `look_at`.
    ///
    /// `w` points away from the viewing direction, `v` is as close to `up` as possible.
    pub fn look_at(eye: Vec3A, look_at: Vec3A, up: Vec3A) -> Self {
        let w = (eye - look_at).normalize();
        let u = up.cross(w).normalize();
        let v = w.cross(u);
        Self {
            origin: eye,
            u,
            v,
            w,
        }
    }

    /// Converts coordinates expressed in this frame into world space.
    pub fn to_world(&self, local: Vec3A) -> Vec3A {
        self.origin + self.to_world_vector(local)
    }

    /// Converts a direction expressed in this frame into world space.
    pub fn to_world_vector(&self, local: Vec3A) -> Vec3A {
        local.x * self.u + local.y * self.v + local.z * self.w
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self {
            origin: Vec3A::ZERO,
            u: Vec3A::X,
            v: Vec3A::Y,
            w: Vec3A::Z,
        }
    }
}

/// How the view volume is mapped onto the framebuffer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection {
    /// Rays fan out from the eye, `fov` is the vertical field of view in radians
    Perspective { fov: f32 },
    /// Parallel rays, `width` is the horizontal extent of the view in world units
    Orthographic { width: f32 },
}

/// A raytracing camera
///
/// [Camera::calculate_viewing_parameters] must run after every framebuffer
/// resize and before [Camera::get_ray] is used.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    look_at: Vec3A,
    up: Vec3A,
    pub projection: Projection,
    frame: Frame,
    frame_width: u32,
    frame_height: u32,
    /// Half extents of the view plane
    half_width: f32,
    half_height: f32,
}

impl Camera {
    fn new(eye: Vec3A, look_at: Vec3A, up: Vec3A, projection: Projection) -> Self {
        let mut cam = Self {
            look_at,
            up,
            projection,
            frame: Frame::look_at(eye, look_at, up),
            frame_width: 1,
            frame_height: 1,
            half_width: 1.0,
            half_height: 1.0,
        };
        cam.calculate_viewing_parameters(1, 1);
        cam
    }

    /// Creates a perspective camera with a vertical field of view of `fov` radians
    pub fn perspective(eye: Vec3A, look_at: Vec3A, up: Vec3A, fov: f32) -> Self {
        Self::new(eye, look_at, up, Projection::Perspective { fov })
    }

    /// Creates an orthographic camera seeing `width` world units across
    pub fn orthographic(eye: Vec3A, look_at: Vec3A, up: Vec3A, width: f32) -> Self {
        Self::new(eye, look_at, up, Projection::Orthographic { width })
    }

    /// Moves the camera, keeping its projection.
    pub fn change_configuration(&mut self, eye: Vec3A, look_at: Vec3A, up: Vec3A) {
        self.look_at = look_at;
        self.up = up;
        self.frame = Frame::look_at(eye, look_at, up);
    }

    /// Recomputes the camera basis and per-pixel scaling for a `width` x `height` framebuffer.
    pub fn calculate_viewing_parameters(&mut self, width: u32, height: u32) {
        self.frame = Frame::look_at(self.frame.origin, self.look_at, self.up);
        self.frame_width = width.max(1);
        self.frame_height = height.max(1);

        let aspect = self.frame_width as f32 / self.frame_height as f32;
        let (half_width, half_height) = match self.projection {
            Projection::Perspective { fov } => {
                let half_height = (fov / 2.0).tan();
                (half_height * aspect, half_height)
            }
            Projection::Orthographic { width } => (width / 2.0, width / 2.0 / aspect),
        };
        self.half_width = half_width;
        self.half_height = half_height;
    }

    /// The camera's eye frame
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn eye(&self) -> Vec3A {
        self.frame.origin
    }

    /// Returns the size of the framebuffer the camera was last configured for
    pub fn dimensions(&self) -> (u32, u32) {
        (self.frame_width, self.frame_height)
    }

    /// Returns the ray through the pixel at (`x`, `y`).
    ///
    /// Pixel (0, 0) is the bottom-left one, integer coordinates address pixel centers
    /// and fractional coordinates address points in between.
    pub fn get_ray(&self, x: f32, y: f32) -> Ray {
        // map pixel centers into [-half_extent, half_extent]
        let s = self.half_width * (2.0 * (x + 0.5) / self.frame_width as f32 - 1.0);
        let t = self.half_height * (2.0 * (y + 0.5) / self.frame_height as f32 - 1.0);
        let Frame { origin, u, v, w } = self.frame;

        match self.projection {
            Projection::Perspective { .. } => {
                let on_plane = origin + s * u + t * v - w;
                Ray::new(origin, on_plane - origin)
            }
            Projection::Orthographic { .. } => Ray::new(origin + s * u + t * v, -w),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;

    #[test]
    fn frame_is_orthonormal() {
        let frame = Frame::look_at(Vec3A::new(-10.0, 10.0, -10.0), Vec3A::ZERO, Vec3A::Y);
        for axis in [frame.u, frame.v, frame.w] {
            assert!(axis.is_normalized(), "{axis} is not unit length");
        }
        assert!(frame.u.dot(frame.v).abs() < 1e-5);
        assert!(frame.v.dot(frame.w).abs() < 1e-5);
        assert!(frame.u.cross(frame.v).abs_diff_eq(frame.w, 1e-5), "frame is not right-handed");
    }

    #[test]
    fn perspective_center_ray_looks_ahead() {
        let mut cam =
            Camera::perspective(Vec3A::new(0.0, 0.0, 5.0), Vec3A::ZERO, Vec3A::Y, FRAC_PI_2);
        cam.calculate_viewing_parameters(101, 101);
        let ray = cam.get_ray(50.0, 50.0);

        assert_eq!(ray.origin, Vec3A::new(0.0, 0.0, 5.0));
        assert!(
            ray.direction.normalize().abs_diff_eq(-Vec3A::Z, 1e-5),
            "center ray had direction {}",
            ray.direction
        );
    }

    #[test]
    fn perspective_corner_respects_fov() {
        let mut cam = Camera::perspective(Vec3A::ZERO, -Vec3A::Z, Vec3A::Y, FRAC_PI_2);
        cam.calculate_viewing_parameters(200, 100);
        // bottom edge of the top row of pixels, at 45 degrees above the axis
        let ray = cam.get_ray(99.5, 99.5);
        assert!(
            ray.direction.abs_diff_eq(Vec3A::new(0.0, 1.0, -1.0), 1e-5),
            "got direction {}",
            ray.direction
        );

        let ray = cam.get_ray(199.5, 49.5);
        assert!(
            ray.direction.abs_diff_eq(Vec3A::new(2.0, 0.0, -1.0), 1e-5),
            "aspect ratio was not applied, got direction {}",
            ray.direction
        );
    }

    #[test]
    fn orthographic_rays_are_parallel() {
        let mut cam = Camera::orthographic(Vec3A::new(0.0, 0.0, 5.0), Vec3A::ZERO, Vec3A::Y, 10.0);
        cam.calculate_viewing_parameters(100, 50);

        let left = cam.get_ray(-0.5, 24.5);
        let right = cam.get_ray(99.5, 24.5);
        assert_eq!(left.direction, right.direction);
        assert!(left.direction.abs_diff_eq(-Vec3A::Z, 1e-6));
        assert!(left.origin.abs_diff_eq(Vec3A::new(-5.0, 0.0, 5.0), 1e-5), "{}", left.origin);
        assert!(right.origin.abs_diff_eq(Vec3A::new(5.0, 0.0, 5.0), 1e-5), "{}", right.origin);
    }

    #[test]
    fn change_configuration_moves_eye() {
        let mut cam =
            Camera::perspective(Vec3A::new(-10.0, 10.0, -10.0), Vec3A::ZERO, Vec3A::Y, FRAC_PI_2);
        cam.change_configuration(Vec3A::new(0.0, 10.0, 25.0), Vec3A::ZERO, Vec3A::Y);
        cam.calculate_viewing_parameters(64, 48);
        assert_eq!(cam.eye(), Vec3A::new(0.0, 10.0, 25.0));
        assert_eq!(cam.dimensions(), (64, 48));
    }

    #[test]
    fn frame_to_world() {
        let frame = Frame {
            origin: Vec3A::new(1.0, 2.0, 3.0),
            u: Vec3A::Z,
            v: Vec3A::Y,
            w: -Vec3A::X,
        };
        assert_eq!(frame.to_world(Vec3A::new(1.0, 0.0, 2.0)), Vec3A::new(-1.0, 2.0, 4.0));
    }
}
