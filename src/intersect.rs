use crate::tracer::*;

/// Where a ray met a surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionRecord {
    /// Ray parameter of the hit.
    pub t: f64,
    pub point: Point3,
    /// Unit outward surface normal at `point`.
    pub normal: Vec3,
}

/// Anything a ray can be tested against.
pub trait Intersectable: Send + Sync {
    /// Nearest hit with `t` inside `ray_t`, or `None`.
    fn intersect(&self, ray: &Ray, ray_t: Interval) -> Option<IntersectionRecord>;
}

