//! Hittable trait, HitRecord, and the Group composite.

use crate::{Material, Ray};
use glint_math::{Interval, Vec3};

/// Minimum hit distance used when the transport loop queries the scene.
/// Keeps a bounced ray from re-hitting the surface it just left.
pub const RAY_EPSILON: f32 = 1e-3;

/// Record of a ray-object intersection.
#[derive(Clone, Copy)]
pub struct HitRecord<'a> {
    /// Point of intersection
    pub p: Vec3,
    /// Surface normal at the intersection (always points against the ray)
    pub normal: Vec3,
    /// Material at the intersection point
    pub material: &'a dyn Material,
    /// Parameter t where the intersection occurs
    pub t: f32,
    /// Whether the ray hit the front face (outside) of the surface
    pub front_face: bool,
}

impl<'a> HitRecord<'a> {
    /// Build a record at parameter `t` on `ray`.
    ///
    /// `outward_normal` must be unit length and point away from the surface;
    /// the stored normal is flipped to point against the ray, and
    /// `front_face` records which side was struck.
    pub fn new(ray: &Ray, t: f32, outward_normal: Vec3, material: &'a dyn Material) -> Self {
        let front_face = ray.direction.dot(outward_normal) < 0.0;
        let normal = if front_face {
            outward_normal
        } else {
            -outward_normal
        };

        Self {
            p: ray.at(t),
            normal,
            material,
            t,
            front_face,
        }
    }
}

/// Trait for objects that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Test the ray over the open interval `(t_range.min, t_range.max)`,
    /// returning the closest hit inside it, if any.
    fn hit(&self, ray: &Ray, t_range: Interval) -> Option<HitRecord<'_>>;
}

/// An ordered collection of hittables, itself hittable.
pub struct Group {
    objects: Vec<Box<dyn Hittable>>,
}

impl Group {
    /// Create a new empty group.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    /// Add an object to the group.
    pub fn add(&mut self, object: Box<dyn Hittable>) {
        self.objects.push(object);
    }

    /// Clear all objects from the group.
    pub fn clear(&mut self) {
        self.objects.clear();
    }

    /// Get the number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the group is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Default for Group {
    fn default() -> Self {
        Self::new()
    }
}

impl Hittable for Group {
    /// Each child is tested over an interval whose upper bound has shrunk to
    /// the closest hit so far, so the group reports the globally closest
    /// surface. Only a strictly closer hit replaces the current best: a
    /// child reporting exactly the shrunk bound (the sky sentinel does) must
    /// not displace an earlier equal hit.
    fn hit(&self, ray: &Ray, t_range: Interval) -> Option<HitRecord<'_>> {
        let mut closest_so_far = t_range.max;
        let mut best: Option<HitRecord<'_>> = None;

        for object in &self.objects {
            let interval = Interval::new(t_range.min, closest_so_far);
            if let Some(rec) = object.hit(ray, interval) {
                if best.is_none() || rec.t < closest_so_far {
                    closest_so_far = rec.t;
                    best = Some(rec);
                }
            }
        }

        best
    }
}
