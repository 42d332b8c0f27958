//! Lux Core - scene description, loading and image output.
//!
//! This crate provides:
//!
//! - **Scene records**: `SceneDescription`, `Shape`, `Material`, `Light`, `CameraSettings`
//! - **Scene loading**: JSON scene documents via [`load_scene`]
//! - **Image output**: PPM writing via [`write_ppm`]
//!
//! # Example
//!
//! ```ignore
//! use lux_core::{load_scene, write_ppm, PpmEncoding};
//!
//! let scene = load_scene("scene.json")?;
//! println!("Loaded {} shapes, {} lights", scene.shape_count(), scene.light_count());
//! ```

pub mod loader;
pub mod output;
pub mod scene;

// Re-export commonly used types
pub use loader::{load_scene, load_scene_from_str, LoadError, LoadResult};
pub use output::{encode_ppm, write_ppm, OutputError, OutputResult, PpmEncoding};
pub use scene::{
    CameraSettings, Light, LightKind, Material, RenderMode, SceneDescription, Shape,
    DEFAULT_AMBIENT_INTENSITY, DEFAULT_MAX_BOUNCES, MAX_IMAGE_PIXELS,
};
