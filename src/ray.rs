use crate::tracer::*;

/// Half-line `origin + t * direction`.
///
/// The direction is normalized on construction. A zero direction stays zero,
/// so such a ray never meets anything with positive extent.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Ray {
    origin: Point3,
    direction: Vec3,
}

impl Ray {
    pub fn new(origin: Point3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalized(),
        }
    }

    pub fn origin(&self) -> Point3 {
        self.origin
    }

    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    pub fn at(&self, t: f64) -> Point3 {
        self.origin + self.direction * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_is_normalized() {
        let ray = Ray::new(Point3::new(1.0, 2.0, 3.0), Vec3::new(0.0, 3.0, 4.0));
        assert_eq!(ray.origin(), Point3::new(1.0, 2.0, 3.0));
        assert!((ray.direction().length() - 1.0).abs() < 1e-12);
        assert_eq!(ray.direction(), Vec3::new(0.0, 0.6, 0.8));
    }

    #[test]
    fn test_at() {
        let ray = Ray::new(Point3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 2.0));
        assert_eq!(ray.at(0.0), Point3::new(1.0, 0.0, 0.0));
        assert_eq!(ray.at(2.5), Point3::new(1.0, 0.0, 2.5));
        assert_eq!(ray.at(-1.0), Point3::new(1.0, 0.0, -1.0));
    }

    #[test]
    fn test_zero_direction_is_kept() {
        let ray = Ray::new(Point3::zero(), Vec3::zero());
        assert_eq!(ray.direction(), Vec3::zero());
        assert_eq!(ray.at(10.0), Point3::zero());
    }
}
