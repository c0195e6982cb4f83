//! Scene description types and JSON loading.
//!
//! Descriptions are plain data mirroring the on-disk JSON format. They say
//! nothing about how a renderer represents geometry or materials; the render
//! crate assembles them into its own types after `validate` passes.
//!
//! # File format
//!
//! ```json
//! {
//!   "camera": { "look_from": [0, 0, 0], "look_at": [0, 0, -1], "vfov": 90.0 },
//!   "spheres": [
//!     { "center": [0, 0, -1], "radius": 0.5, "material": { "type": "normal_color" } }
//!   ],
//!   "sky": true
//! }
//! ```
//!
//! Every top-level field is optional. An omitted field takes its per-field
//! default: a camera at the origin looking down -z, no spheres, sky on. So
//! parsing `{}` yields an empty scene under a sky dome, while the two-sphere
//! starter scene comes from `SceneDescription::default()` only.

use std::path::Path;

use glint_math::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while loading or validating a description.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("sphere {index}: radius must be positive and finite, got {radius}")]
    InvalidRadius { index: usize, radius: f32 },

    #[error("sphere {index}: metal fuzz must be within [0, 1], got {fuzz}")]
    InvalidFuzz { index: usize, fuzz: f32 },

    #[error("camera: vertical fov must be within (0, 180) degrees, got {0}")]
    InvalidFov(f32),

    #[error("camera: view axis and vup must not be parallel or zero")]
    DegenerateCamera,
}

/// Result type for description operations.
pub type SceneResult<T> = Result<T, SceneError>;

/// How a surface responds to a ray.
///
/// Tagged on `type` in JSON, e.g.
/// `{ "type": "metal", "albedo": [0.8, 0.8, 0.8], "fuzz": 0.1 }`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MaterialDescription {
    /// Shade by surface normal, remapped from [-1, 1] to [0, 1].
    NormalColor,
    /// Diffuse bounce tinted by `albedo`.
    Lambertian { albedo: Vec3 },
    /// Mirror bounce tinted by `albedo`, perturbed by `fuzz` in [0, 1].
    Metal { albedo: Vec3, fuzz: f32 },
}

/// A sphere primitive and its material.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SphereDescription {
    pub center: Vec3,
    pub radius: f32,
    pub material: MaterialDescription,
}

/// Camera placement and optics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraDescription {
    pub look_from: Vec3,
    pub look_at: Vec3,
    pub vup: Vec3,
    /// Vertical field of view in degrees.
    pub vfov: f32,
}

impl Default for CameraDescription {
    fn default() -> Self {
        Self {
            look_from: Vec3::ZERO,
            look_at: Vec3::new(0.0, 0.0, -1.0),
            vup: Vec3::Y,
            vfov: 90.0,
        }
    }
}

/// A complete scene: camera, spheres, and whether a sky dome closes the
/// scene so every ray resolves to a color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    #[serde(default)]
    pub camera: CameraDescription,
    #[serde(default)]
    pub spheres: Vec<SphereDescription>,
    #[serde(default = "default_sky")]
    pub sky: bool,
}

fn default_sky() -> bool {
    true
}

impl Default for SceneDescription {
    /// The classic starter scene: a small sphere resting on a much larger
    /// ground sphere, both shaded by their normals, under a sky dome.
    fn default() -> Self {
        Self {
            camera: CameraDescription::default(),
            spheres: vec![
                SphereDescription {
                    center: Vec3::new(0.0, 0.0, -1.0),
                    radius: 0.5,
                    material: MaterialDescription::NormalColor,
                },
                SphereDescription {
                    center: Vec3::new(0.0, -100.5, -1.0),
                    radius: 100.0,
                    material: MaterialDescription::NormalColor,
                },
            ],
            sky: true,
        }
    }
}

impl SceneDescription {
    /// Parse a description from a JSON string.
    pub fn from_json_str(json: &str) -> SceneResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a description from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> SceneResult<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let desc = Self::from_json_str(&text)?;
        log::debug!(
            "loaded scene from {}: {} sphere(s), sky={}",
            path.as_ref().display(),
            desc.spheres.len(),
            desc.sky
        );
        Ok(desc)
    }

    /// Check numeric ranges and camera orientation before a renderer
    /// assembles the description.
    pub fn validate(&self) -> SceneResult<()> {
        let cam = &self.camera;
        if !(cam.vfov > 0.0 && cam.vfov < 180.0) {
            return Err(SceneError::InvalidFov(cam.vfov));
        }
        // Zero cross product: the view axis and vup do not span a plane
        if !(cam.vup.cross(cam.look_at - cam.look_from).length_squared() > 0.0) {
            return Err(SceneError::DegenerateCamera);
        }

        for (index, sphere) in self.spheres.iter().enumerate() {
            if !(sphere.radius > 0.0 && sphere.radius.is_finite()) {
                return Err(SceneError::InvalidRadius {
                    index,
                    radius: sphere.radius,
                });
            }
            if let MaterialDescription::Metal { fuzz, .. } = sphere.material {
                if !(0.0..=1.0).contains(&fuzz) {
                    return Err(SceneError::InvalidFuzz { index, fuzz });
                }
            }
        }

        Ok(())
    }
}
