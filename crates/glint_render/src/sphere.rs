//! Sphere primitive for ray tracing.

use crate::{
    hittable::{HitRecord, Hittable},
    Material, Ray,
};
use glint_math::{Interval, Vec3};

/// A sphere primitive.
pub struct Sphere<M: Material> {
    center: Vec3,
    radius: f32,
    material: M,
}

impl<M: Material> Sphere<M> {
    /// Create a new sphere. Negative radii are clamped to zero.
    pub fn new(center: Vec3, radius: f32, material: M) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            material,
        }
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl<M: Material> Hittable for Sphere<M> {
    fn hit(&self, ray: &Ray, t_range: Interval) -> Option<HitRecord<'_>> {
        let oc = self.center - ray.origin;
        let a = ray.direction.length_squared();
        let h = ray.direction.dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = h * h - a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Find the nearest root in the acceptable range
        let mut root = (h - sqrtd) / a;
        if !t_range.surrounds(root) {
            root = (h + sqrtd) / a;
            if !t_range.surrounds(root) {
                return None;
            }
        }

        let outward_normal = (ray.at(root) - self.center) / self.radius;
        Some(HitRecord::new(ray, root, outward_normal, &self.material))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NormalColor;

    #[test]
    fn test_sphere_hit() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5, NormalColor);
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        let rec = sphere.hit(&ray, Interval::new(0.001, f32::INFINITY)).unwrap();
        assert!((rec.t - 0.5).abs() < 1e-6);
        assert_eq!(rec.p, Vec3::new(0.0, 0.0, -0.5));
        assert!((rec.normal.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5, NormalColor);

        // Ray pointing away from the sphere
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0));
        assert!(sphere.hit(&ray, Interval::new(0.001, f32::INFINITY)).is_none());
    }

    #[test]
    fn test_ray_from_center_exits_at_radius() {
        let sphere = Sphere::new(Vec3::ZERO, 2.0, NormalColor);
        let ray = Ray::new(Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0));

        // The near root is negative, so the hit is the far shell crossing
        let rec = sphere.hit(&ray, Interval::new(0.001, f32::INFINITY)).unwrap();
        assert_eq!(rec.t, 2.0);
        assert!(!rec.front_face);
    }

    #[test]
    fn test_negative_root_accepted_by_unbounded_interval() {
        let sphere = Sphere::new(Vec3::ZERO, 2.0, NormalColor);
        let ray = Ray::new(Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0));

        // With no lower bound the nearer (negative) root wins
        let rec = sphere.hit(&ray, Interval::UNIVERSE).unwrap();
        assert_eq!(rec.t, -2.0);
    }

    #[test]
    fn test_non_unit_direction() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -10.0), 1.0, NormalColor);
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -2.0));

        // t scales inversely with direction length; the hit point does not
        let rec = sphere.hit(&ray, Interval::new(0.001, f32::INFINITY)).unwrap();
        assert_eq!(rec.t, 4.5);
        assert_eq!(rec.p, Vec3::new(0.0, 0.0, -9.0));
    }

    #[test]
    fn test_hits_beyond_interval_rejected() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5, NormalColor);
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        // Both roots lie beyond the shrunk upper bound
        assert!(sphere.hit(&ray, Interval::new(0.001, 0.4)).is_none());
    }

    #[test]
    fn test_negative_radius_clamped() {
        let sphere = Sphere::new(Vec3::new(1.0, 2.0, 3.0), -1.0, NormalColor);
        assert_eq!(sphere.radius(), 0.0);
        assert_eq!(sphere.center(), Vec3::new(1.0, 2.0, 3.0));
    }
}
