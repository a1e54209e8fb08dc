//! Sphere primitive.
//!
//! Intersection solves the ray/sphere quadratic with the half-`b` form. Ray
//! directions are unit length, so the quadratic's leading coefficient is 1
//! and drops out.

use crate::tracer::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub center: Point3,
    /// Assumed positive; not validated.
    pub radius: f64,
}

impl Sphere {
    pub fn new(center: Point3, radius: f64) -> Self {
        Self { center, radius }
    }
}

impl Intersectable for Sphere {
    fn intersect(&self, ray: &Ray, ray_t: Interval) -> Option<IntersectionRecord> {
        let oc = ray.origin() - self.center;
        let half_b = oc.dot(ray.direction());
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = half_b * half_b - c;
        if discriminant < 0.0 {
            return None;
        }

        // Near root first, then the far one.
        let sqrtd = discriminant.sqrt();
        let mut root = -half_b - sqrtd;
        if !ray_t.contains(root) {
            root = -half_b + sqrtd;
            if !ray_t.contains(root) {
                return None;
            }
        }

        let point = ray.at(root);
        Some(IntersectionRecord {
            t: root,
            point,
            normal: (point - self.center) / self.radius,
        })
    }
}
