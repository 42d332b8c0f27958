//! Lux Renderer - CPU Whitted-style ray tracing
//!
//! A recursive ray tracer with Blinn-Phong shading, hard shadows from point
//! lights, mirror reflections with a bounce limit, and global linear tone
//! mapping. One ray per pixel, single-threaded, linear scan over all
//! primitives.

mod camera;
mod cylinder;
mod hittable;
mod renderer;
mod scene;
mod shading;
mod shadow;
mod sphere;
mod tone_mapping;
mod tracer;
mod triangle;

pub use camera::Camera;
pub use cylinder::{Cylinder, CYLINDER_EPSILON};
pub use hittable::{closest_hit, HitResult, Primitive};
pub use renderer::{
    render, render_description, render_pixel, render_radiance, tone_map, ImageBuffer,
    RadiancePass, RenderConfig, RenderOutput,
};
pub use scene::Scene;
pub use shading::{shade, Color, HIT_COLOR};
pub use shadow::{is_in_shadow, SHADOW_BIAS};
pub use sphere::{Sphere, SPHERE_EPSILON};
pub use tone_mapping::{
    accumulate_max, linear_tone_map, max_radiance, tone_map_pixels, MAX_VALUE_SEED,
};
pub use tracer::{ray_color, trace_binary, trace_ray, TraceStats, REFLECTION_OFFSET};
pub use triangle::{Triangle, PARALLEL_EPSILON, TRIANGLE_EPSILON};

/// Re-export the math types used in the public API
pub use lux_math::{Interval, Ray, Vec3};
