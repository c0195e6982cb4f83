//! Assemble scene descriptions into hittable worlds.

use crate::{Camera, Group, Lambertian, Metal, NormalColor, Sky, SkyGradient, Sphere};
use glint_scene::{MaterialDescription, SceneDescription, SceneError};

/// Validate `desc` and build its world and camera.
///
/// `aspect` is width / height of the target image. The sky sentinel, when
/// the description asks for one, is appended after the spheres so every
/// escaping ray resolves through the gradient material.
pub fn build_world(desc: &SceneDescription, aspect: f32) -> Result<(Group, Camera), SceneError> {
    desc.validate()?;

    let mut world = Group::new();
    for sphere in &desc.spheres {
        match sphere.material {
            MaterialDescription::NormalColor => {
                world.add(Box::new(Sphere::new(sphere.center, sphere.radius, NormalColor)));
            }
            MaterialDescription::Lambertian { albedo } => {
                world.add(Box::new(Sphere::new(
                    sphere.center,
                    sphere.radius,
                    Lambertian::new(albedo),
                )));
            }
            MaterialDescription::Metal { albedo, fuzz } => {
                world.add(Box::new(Sphere::new(
                    sphere.center,
                    sphere.radius,
                    Metal::new(albedo, fuzz),
                )));
            }
        }
    }
    if desc.sky {
        world.add(Box::new(Sky::new(SkyGradient::default())));
    }

    let cam = &desc.camera;
    let camera = Camera::new(cam.look_from, cam.look_at, cam.vup, cam.vfov, aspect);

    log::debug!("assembled world: {} object(s), sky={}", world.len(), desc.sky);

    Ok((world, camera))
}
