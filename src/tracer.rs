pub use crate::camera::{Camera, FALLBACK_RIGHT, PinholeCamera, WORLD_UP};
pub use crate::color::{BACKGROUND, Rgb, normal_to_rgb, save_ppm, write_ppm};
pub use crate::image::PixelBuffer;
pub use crate::intersect::{Intersectable, IntersectionRecord};
pub use crate::interval::Interval;
pub use crate::ray::Ray;
pub use crate::render::{render, render_gradient, shade};
pub use crate::sphere::Sphere;
pub use crate::vec3::{Point3, Vec3};

pub const PI: f64 = std::f64::consts::PI;

/// Nearest admissible hit distance; keeps rays from re-hitting their origin.
pub const T_MIN: f64 = 1e-3;
pub const T_MAX: f64 = 1e30;

#[inline]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}
