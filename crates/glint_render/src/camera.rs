//! Pinhole camera mapping normalized image coordinates to primary rays.

use glint_math::{Ray, Vec3};

/// Maps `(u, v)` in the unit square to rays through a viewport one unit in
/// front of the camera origin.
///
/// `(0, 0)` is the lower-left corner of the image and `v` grows upward in
/// world space; writers flip to row order at the point pixels are stored.
/// Ray generation is pure, so a given `(u, v)` always yields the same ray.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    origin: Vec3,
    lower_left: Vec3,
    horizontal: Vec3,
    vertical: Vec3,
}

impl Camera {
    /// Build a camera at `look_from` facing `look_at`.
    ///
    /// - `vup`: world-space up used to orient the viewport
    /// - `vfov`: vertical field of view in degrees
    /// - `aspect`: width / height of the target image
    pub fn new(look_from: Vec3, look_at: Vec3, vup: Vec3, vfov: f32, aspect: f32) -> Self {
        let theta = vfov.to_radians();
        let half_height = (theta / 2.0).tan();
        let half_width = aspect * half_height;

        let w = (look_from - look_at).normalize();
        let u = vup.cross(w).normalize();
        let v = w.cross(u);

        Self {
            origin: look_from,
            lower_left: look_from - half_width * u - half_height * v - w,
            horizontal: 2.0 * half_width * u,
            vertical: 2.0 * half_height * v,
        }
    }

    /// The ray through normalized image coordinates `(u, v)`.
    pub fn ray(&self, u: f32, v: f32) -> Ray {
        Ray::new(
            self.origin,
            self.lower_left + u * self.horizontal + v * self.vertical - self.origin,
        )
    }
}
