//! Single-sphere ray caster: a pinhole camera shoots one ray per pixel,
//! hits are shaded by surface normal and the result is stored as 8-bit RGB.

pub mod camera;
pub mod color;
pub mod image;
pub mod intersect;
pub mod interval;
pub mod ray;
pub mod render;
pub mod sphere;
pub mod tracer;
pub mod vec3;

pub use crate::tracer::*;
