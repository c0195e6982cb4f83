use crate::Vec3;

/// A ray in 3D space, parameterized as origin + t * direction.
///
/// The direction is not required to be unit length; callers doing
/// angle-dependent math normalize at the point of use.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray.
    #[inline]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Point along the ray at parameter t.
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Direction scaled to unit length. A zero direction stays zero.
    #[inline]
    pub fn unit_direction(&self) -> Vec3 {
        self.direction.normalize_or_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_creation() {
        let ray = Ray::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(ray.origin, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(ray.direction, Vec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_ray_at() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(1.0, 2.0, 0.0));

        assert_eq!(ray.at(0.0), Vec3::ZERO);
        assert_eq!(ray.at(0.5), Vec3::new(0.5, 1.0, 0.0));
        assert_eq!(ray.at(2.0), Vec3::new(2.0, 4.0, 0.0));

        // Negative parameters walk backwards through the origin
        assert_eq!(ray.at(-1.0), Vec3::new(-1.0, -2.0, 0.0));
    }

    #[test]
    fn test_ray_unit_direction() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 3.0, 0.0));
        assert_eq!(ray.unit_direction(), Vec3::new(0.0, 1.0, 0.0));

        // Degenerate direction must not produce NaN
        let degenerate = Ray::new(Vec3::ZERO, Vec3::ZERO);
        assert_eq!(degenerate.unit_direction(), Vec3::ZERO);
    }
}
