//! Sky sentinel: the hittable that never misses.

use crate::{
    hittable::{HitRecord, Hittable},
    Material, Ray,
};
use glint_math::Interval;

/// Backstop geometry representing "the ray escaped the scene".
///
/// Always reports a hit at the outer bound of the query interval, carrying a
/// background material, so the transport loop ends every ray in a material
/// invocation rather than a special miss branch. Placed in a group it loses
/// to any real surface, because real hits land strictly inside the interval.
///
/// The hit point is the unit ray direction (a dome at unit distance), so a
/// material grading on elevation can read either the position or the ray.
pub struct Sky<M: Material> {
    material: M,
}

impl<M: Material> Sky<M> {
    /// Wrap a background material in the sky sentinel.
    pub fn new(material: M) -> Self {
        Self { material }
    }
}

impl<M: Material> Hittable for Sky<M> {
    fn hit(&self, ray: &Ray, t_range: Interval) -> Option<HitRecord<'_>> {
        let dir = ray.unit_direction();

        Some(HitRecord {
            p: dir,
            normal: -dir,
            material: &self.material,
            t: t_range.max,
            front_face: true,
        })
    }
}
