use crate::prelude::*;

/// Half-line `origin + t * direction`. The direction is not normalized.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Ray {
    pub origin: Point3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Point3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    pub fn at(&self, t: f64) -> Point3 {
        self.origin + t * self.direction
    }

    /// True when the direction has no usable length (zero or non-finite).
    pub fn is_degenerate(&self) -> bool {
        let a = self.direction.length_squared();
        a == 0.0 || !a.is_finite()
    }
}
