/// Closed range `[min, max]` of admissible ray parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Inclusive on both ends. NaN is never contained.
    pub fn contains(&self, x: f64) -> bool {
        self.min <= x && x <= self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_inclusive() {
        let range = Interval::new(1e-3, 10.0);
        assert!(range.contains(1e-3));
        assert!(range.contains(10.0));
        assert!(range.contains(5.0));
        assert!(!range.contains(0.0));
        assert!(!range.contains(10.000001));
        assert!(!range.contains(f64::NAN));
    }
}
