//! Material trait for surface scattering.

use crate::{gen_f32, hittable::HitRecord, Ray};
use glint_math::Vec3;
use rand::RngCore;

/// Color type alias (RGB values typically 0-1)
pub type Color = Vec3;

/// Outcome of one material invocation at a hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scatter {
    /// The ray is fully resolved to this color; transport stops here.
    Terminal(Color),
    /// The ray continues along `ray`; light gathered downstream is
    /// multiplied by `attenuation`.
    Bounce { ray: Ray, attenuation: Color },
}

/// Trait for materials that describe how light interacts with surfaces.
pub trait Material: Send + Sync {
    /// Scatter an incoming ray at a hit.
    ///
    /// Every invocation produces either a terminal color or a continuation
    /// ray; absorption is a terminal black.
    fn scatter(&self, ray_in: &Ray, rec: &HitRecord, rng: &mut dyn RngCore) -> Scatter;
}

/// Shades by surface normal, each channel remapped from [-1, 1] to [0, 1].
///
/// Terminal, so the color is independent of any other scene content. Handy
/// for checking geometry before committing to real materials.
#[derive(Debug, Clone, Copy, Default)]
pub struct NormalColor;

impl Material for NormalColor {
    fn scatter(&self, _ray_in: &Ray, rec: &HitRecord, _rng: &mut dyn RngCore) -> Scatter {
        Scatter::Terminal(0.5 * (rec.normal + Vec3::ONE))
    }
}

/// Vertical gradient for sky backgrounds.
#[derive(Debug, Clone, Copy)]
pub struct SkyGradient {
    /// Color where the view direction points straight down
    pub nadir: Color,
    /// Color where the view direction points straight up
    pub zenith: Color,
}

impl SkyGradient {
    pub fn new(nadir: Color, zenith: Color) -> Self {
        Self { nadir, zenith }
    }
}

impl Default for SkyGradient {
    /// The classic white-to-light-blue sky.
    fn default() -> Self {
        Self {
            nadir: Color::new(1.0, 1.0, 1.0),
            zenith: Color::new(0.5, 0.7, 1.0),
        }
    }
}

impl Material for SkyGradient {
    fn scatter(&self, ray_in: &Ray, _rec: &HitRecord, _rng: &mut dyn RngCore) -> Scatter {
        // Blend on the elevation of the view direction
        let t = 0.5 * (ray_in.unit_direction().y + 1.0);
        Scatter::Terminal((1.0 - t) * self.nadir + t * self.zenith)
    }
}

/// Lambertian (diffuse) material.
#[derive(Debug, Clone, Copy)]
pub struct Lambertian {
    albedo: Color,
}

impl Lambertian {
    /// Create a new Lambertian material with the given albedo color.
    pub fn new(albedo: Color) -> Self {
        Self { albedo }
    }
}

impl Material for Lambertian {
    fn scatter(&self, _ray_in: &Ray, rec: &HitRecord, rng: &mut dyn RngCore) -> Scatter {
        // Scatter in a random direction on the hemisphere around the normal
        let mut scatter_direction = rec.normal + random_unit_vector(rng);

        // Catch degenerate scatter direction
        if scatter_direction.length_squared() < 1e-8 {
            scatter_direction = rec.normal;
        }

        Scatter::Bounce {
            ray: Ray::new(rec.p, scatter_direction),
            attenuation: self.albedo,
        }
    }
}

/// Metal (specular) material.
#[derive(Debug, Clone, Copy)]
pub struct Metal {
    albedo: Color,
    fuzz: f32,
}

impl Metal {
    /// Create a new Metal material.
    ///
    /// - `albedo`: The color of the metal
    /// - `fuzz`: Roughness, 0.0 = perfect mirror, 1.0 = very rough
    pub fn new(albedo: Color, fuzz: f32) -> Self {
        Self {
            albedo,
            fuzz: fuzz.clamp(0.0, 1.0),
        }
    }
}

impl Material for Metal {
    fn scatter(&self, ray_in: &Ray, rec: &HitRecord, rng: &mut dyn RngCore) -> Scatter {
        let reflected = reflect(ray_in.unit_direction(), rec.normal);
        let scattered_dir = reflected + self.fuzz * random_unit_vector(rng);

        // A fuzzed direction that dips below the surface is absorbed
        if scattered_dir.dot(rec.normal) > 0.0 {
            Scatter::Bounce {
                ray: Ray::new(rec.p, scattered_dir),
                attenuation: self.albedo,
            }
        } else {
            Scatter::Terminal(Color::ZERO)
        }
    }
}

// =============================================================================
// Helper functions
// =============================================================================

/// Reflect a vector about a normal.
#[inline]
fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Generate a random unit vector on the unit sphere.
fn random_unit_vector(rng: &mut dyn RngCore) -> Vec3 {
    // Use rejection sampling for uniform distribution on sphere
    loop {
        let v = Vec3::new(
            gen_f32(rng) * 2.0 - 1.0,
            gen_f32(rng) * 2.0 - 1.0,
            gen_f32(rng) * 2.0 - 1.0,
        );
        let len_sq = v.length_squared();
        if len_sq > 1e-6 && len_sq <= 1.0 {
            return v / len_sq.sqrt();
        }
    }
}
