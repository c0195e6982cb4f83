//! Ray transport: the trace loop and its settings.

use crate::{Color, Hittable, Scatter, RAY_EPSILON};
use glint_math::{Interval, Ray};
use rand::RngCore;

/// Knobs shared by the transport loop and the progressive scheduler.
#[derive(Debug, Clone)]
pub struct RenderSettings {
    /// Jittered rays cast per pixel before averaging
    pub samples_per_pixel: u32,
    /// Bounce ceiling; a ray still alive after this many scatters resolves
    /// to black
    pub max_bounces: u32,
    /// Color for rays that escape a scene with no sky object
    pub background: Color,
    /// Base pixel budget per scheduler tick at 1x magnification
    pub tick_budget: u32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            samples_per_pixel: 4,
            max_bounces: 50,
            background: Color::ZERO,
            tick_budget: 100,
        }
    }
}

/// Resolve one ray against the scene to a color.
///
/// Iterates instead of recursing: each pass intersects over
/// `(RAY_EPSILON, inf)`, applies the hit material, and either finishes with
/// a terminal color or follows the bounce. The running tint is the product
/// of bounce attenuations; terminal colors and the miss background are
/// filtered through it. A ray still bouncing at `max_bounces` is absorbed.
pub fn trace(
    world: &dyn Hittable,
    ray: Ray,
    settings: &RenderSettings,
    rng: &mut dyn RngCore,
) -> Color {
    let mut ray = ray;
    let mut tint = Color::ONE;

    for _ in 0..settings.max_bounces {
        let rec = match world.hit(&ray, Interval::new(RAY_EPSILON, f32::INFINITY)) {
            Some(rec) => rec,
            None => return tint * settings.background,
        };

        match rec.material.scatter(&ray, &rec, rng) {
            Scatter::Terminal(color) => return tint * color,
            Scatter::Bounce {
                ray: bounced,
                attenuation,
            } => {
                tint *= attenuation;
                ray = bounced;
            }
        }
    }

    // Bounce ceiling reached
    Color::ZERO
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Camera, Group, Lambertian, Metal, NormalColor, Sky, SkyGradient, Sphere, Vec3};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sky_only() -> Group {
        let mut world = Group::new();
        world.add(Box::new(Sky::new(SkyGradient::default())));
        world
    }

    #[test]
    fn test_sky_only_scene_matches_gradient() {
        let world = sky_only();
        let settings = RenderSettings::default();
        let mut rng = StdRng::seed_from_u64(42);

        for direction in [
            Vec3::new(0.0, 2.0, 0.0),
            Vec3::new(0.0, -3.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
        ] {
            let unit = direction.normalize();
            let t = 0.5 * (unit.y + 1.0);
            let expected = (1.0 - t) * Vec3::ONE + t * Vec3::new(0.5, 0.7, 1.0);

            let got = trace(&world, Ray::new(Vec3::ZERO, direction), &settings, &mut rng);
            assert!((got - expected).length() < 1e-6);
        }
    }

    #[test]
    fn test_miss_returns_background() {
        let world = Group::new();
        let settings = RenderSettings {
            background: Color::new(0.2, 0.3, 0.4),
            ..RenderSettings::default()
        };
        let mut rng = StdRng::seed_from_u64(42);

        let got = trace(
            &world,
            Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0)),
            &settings,
            &mut rng,
        );
        assert_eq!(got, Color::new(0.2, 0.3, 0.4));
    }

    #[test]
    fn test_center_ray_through_starter_scene() {
        let mut world = Group::new();
        world.add(Box::new(Sphere::new(
            Vec3::new(0.0, 0.0, -1.0),
            0.5,
            NormalColor,
        )));
        world.add(Box::new(Sphere::new(
            Vec3::new(0.0, -100.5, -1.0),
            100.0,
            NormalColor,
        )));
        world.add(Box::new(Sky::new(SkyGradient::default())));

        let camera = Camera::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), Vec3::Y, 90.0, 2.0);
        let settings = RenderSettings::default();
        let mut rng = StdRng::seed_from_u64(42);

        // The center ray strikes the small sphere head on at (0, 0, -0.5),
        // whose normal (0, 0, 1) shades to (0.5, 0.5, 1.0)
        let got = trace(&world, camera.ray(0.5, 0.5), &settings, &mut rng);
        assert_eq!(got, Color::new(0.5, 0.5, 1.0));
    }

    #[test]
    fn test_bounce_ceiling_returns_black() {
        // Two mirrors facing each other bounce a ray forever
        let mut world = Group::new();
        world.add(Box::new(Sphere::new(
            Vec3::new(2.0, 0.0, 0.0),
            1.0,
            Metal::new(Color::new(0.9, 0.9, 0.9), 0.0),
        )));
        world.add(Box::new(Sphere::new(
            Vec3::new(-2.0, 0.0, 0.0),
            1.0,
            Metal::new(Color::new(0.9, 0.9, 0.9), 0.0),
        )));

        let settings = RenderSettings {
            max_bounces: 8,
            ..RenderSettings::default()
        };
        let mut rng = StdRng::seed_from_u64(42);

        let got = trace(
            &world,
            Ray::new(Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0)),
            &settings,
            &mut rng,
        );
        assert_eq!(got, Color::ZERO);
    }

    #[test]
    fn test_mirror_tints_the_sky_behind() {
        let mut world = Group::new();
        world.add(Box::new(Sphere::new(
            Vec3::new(0.0, 0.0, -2.0),
            0.5,
            Metal::new(Color::new(0.5, 0.5, 0.5), 0.0),
        )));
        world.add(Box::new(Sky::new(SkyGradient::default())));

        let settings = RenderSettings::default();
        let mut rng = StdRng::seed_from_u64(42);

        // Head-on mirror hit reflects straight back, escaping level with the
        // horizon: half nadir, half zenith, attenuated once
        let got = trace(
            &world,
            Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0)),
            &settings,
            &mut rng,
        );
        let horizon = 0.5 * (Vec3::ONE + Vec3::new(0.5, 0.7, 1.0));
        let expected = Color::new(0.5, 0.5, 0.5) * horizon;
        assert!((got - expected).length() < 1e-6);
    }

    #[test]
    fn test_lambertian_bounce_terminates_against_sky() {
        let mut world = Group::new();
        world.add(Box::new(Sphere::new(
            Vec3::new(0.0, -100.5, -1.0),
            100.0,
            Lambertian::new(Color::new(0.8, 0.8, 0.0)),
        )));
        world.add(Box::new(Sky::new(SkyGradient::default())));

        let settings = RenderSettings::default();
        let mut rng = StdRng::seed_from_u64(42);

        // A diffuse floor under an open sky always resolves: either the
        // bounce escapes upward or the ceiling absorbs it
        for i in 0..32 {
            let u = -0.5 + (i as f32) / 32.0;
            let ray = Ray::new(Vec3::ZERO, Vec3::new(u, -0.3, -1.0));
            let got = trace(&world, ray, &settings, &mut rng);

            assert!(got.x >= 0.0 && got.y >= 0.0 && got.z >= 0.0);
            assert!(got.x.is_finite() && got.y.is_finite() && got.z.is_finite());
        }
    }

    #[test]
    fn test_zero_bounce_budget_is_black() {
        let world = sky_only();
        let settings = RenderSettings {
            max_bounces: 0,
            ..RenderSettings::default()
        };
        let mut rng = StdRng::seed_from_u64(42);

        let got = trace(
            &world,
            Ray::new(Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0)),
            &settings,
            &mut rng,
        );
        assert_eq!(got, Color::ZERO);
    }
}
