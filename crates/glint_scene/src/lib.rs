//! Glint Scene - renderer-agnostic scene descriptions.
//!
//! This crate provides:
//!
//! - **Description types**: `SceneDescription`, `SphereDescription`,
//!   `CameraDescription`, `MaterialDescription`
//! - **JSON loading**: parse descriptions from files or strings
//! - **Validation**: range and camera orientation checks before a renderer
//!   assembles them
//!
//! # Example
//!
//! ```
//! use glint_scene::SceneDescription;
//!
//! // Missing fields take defaults: an empty scene under a sky dome
//! let desc = SceneDescription::from_json_str("{}").unwrap();
//! assert!(desc.sky);
//! assert!(desc.spheres.is_empty());
//! desc.validate().unwrap();
//! ```

pub mod description;

// Re-export commonly used types
pub use description::{
    CameraDescription, MaterialDescription, SceneDescription, SceneError, SceneResult,
    SphereDescription,
};
