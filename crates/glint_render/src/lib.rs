//! Glint Render - progressive CPU ray tracing.
//!
//! A small ray-transport engine: hit testing over composable geometry,
//! material scattering, a pinhole camera, and a progressive scheduler that
//! resolves a film a few randomly chosen pixels at a time so an interactive
//! driver always has a partial image to present.

mod camera;
mod film;
mod hittable;
mod material;
mod pixel_set;
mod progressive;
mod sky;
mod sphere;
mod tracer;
mod world;

pub use camera::Camera;
pub use film::{Film, PixelSink};
pub use hittable::{Group, HitRecord, Hittable, RAY_EPSILON};
pub use material::{Color, Lambertian, Material, Metal, NormalColor, Scatter, SkyGradient};
pub use pixel_set::PixelSet;
pub use progressive::{ProgressiveRenderer, TickReport};
pub use sky::Sky;
pub use sphere::Sphere;
pub use tracer::{trace, RenderSettings};
pub use world::build_world;

/// Re-export Vec3 and common math types from glint_math
pub use glint_math::{Interval, Ray, Vec3};

use rand::{Rng, RngCore};

/// Uniform random f32 in [0, 1).
#[inline]
pub fn gen_f32(rng: &mut dyn RngCore) -> f32 {
    rng.gen()
}
