use crate::tracer::*;
use log::debug;

/// World-space "up" the pinhole basis is built against.
pub const WORLD_UP: Vec3 = Vec3::new(0.0, 0.0, 1.0);

/// Right vector used when `forward` is parallel to the world-up.
pub const FALLBACK_RIGHT: Vec3 = Vec3::new(1.0, 0.0, 0.0);

/// Turns normalized image coordinates into world-space rays.
pub trait Camera: Send + Sync {
    /// `u` runs left to right and `v` bottom to top, both nominally in
    /// `[0, 1]`. Values outside that range extrapolate past the viewport.
    fn get_ray(&self, u: f64, v: f64) -> Ray;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinholeCamera {
    position: Point3,
    forward: Vec3,
    fov_degrees: f64,
    aspect_ratio: f64,
    focal_length: f64,

    right: Vec3,
    up: Vec3,
    lower_left_corner: Point3,
    horizontal: Vec3,
    vertical: Vec3,
}

impl PinholeCamera {
    /// Builds the camera basis and viewport rectangle once.
    ///
    /// `fov_degrees` is the vertical field of view. The horizontal extent
    /// follows from `aspect_ratio` (width over height).
    pub fn new(
        position: Point3,
        forward: Vec3,
        world_up: Vec3,
        fov_degrees: f64,
        aspect_ratio: f64,
        focal_length: f64,
    ) -> Self {
        let forward = forward.normalized();

        let mut right = forward.cross(world_up);
        if right.length_squared() == 0.0 {
            right = FALLBACK_RIGHT;
        }
        right.normalize();
        let up = right.cross(forward).normalized();

        let half_height = (degrees_to_radians(fov_degrees) / 2.0).tan() * focal_length;
        let half_width = half_height * aspect_ratio;

        let viewport_center = position + forward * focal_length;
        let horizontal = right * (2.0 * half_width);
        let vertical = up * (2.0 * half_height);
        let lower_left_corner = viewport_center - horizontal / 2.0 - vertical / 2.0;

        debug!(
            "pinhole camera at ({position}) facing ({forward}), viewport {:.3}x{:.3}",
            2.0 * half_width,
            2.0 * half_height
        );

        Self {
            position,
            forward,
            fov_degrees,
            aspect_ratio,
            focal_length,
            right,
            up,
            lower_left_corner,
            horizontal,
            vertical,
        }
    }

    pub fn position(&self) -> Point3 {
        self.position
    }

    pub fn forward(&self) -> Vec3 {
        self.forward
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn fov_degrees(&self) -> f64 {
        self.fov_degrees
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.aspect_ratio
    }

    pub fn focal_length(&self) -> f64 {
        self.focal_length
    }

    pub fn lower_left_corner(&self) -> Point3 {
        self.lower_left_corner
    }

    pub fn horizontal(&self) -> Vec3 {
        self.horizontal
    }

    pub fn vertical(&self) -> Vec3 {
        self.vertical
    }
}

impl Camera for PinholeCamera {
    fn get_ray(&self, u: f64, v: f64) -> Ray {
        let target = self.lower_left_corner + self.horizontal * u + self.vertical * v;
        Ray::new(self.position, target - self.position)
    }
}
