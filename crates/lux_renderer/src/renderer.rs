//! Two-pass renderer.
//!
//! Pass 1 traces every pixel once, caches the linear color and tracks the
//! largest channel value in the image. Pass 2 tone maps the cached colors
//! against that maximum. Pass 2 cannot start before pass 1 has seen every
//! pixel.

use std::time::Instant;

use crate::tone_mapping::{max_radiance, tone_map_pixels};
use crate::tracer::{ray_color, TraceStats};
use crate::{Camera, Color, Scene};
use lux_core::{RenderMode, SceneDescription, DEFAULT_MAX_BOUNCES};

/// Render configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// Binary silhouette or Blinn-Phong shading
    pub mode: RenderMode,
    /// Maximum reflection depth (the primary ray is depth 0)
    pub max_bounces: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            mode: RenderMode::Phong,
            max_bounces: DEFAULT_MAX_BOUNCES,
        }
    }
}

impl RenderConfig {
    /// Take the render settings from a loaded scene.
    pub fn from_description(desc: &SceneDescription) -> Self {
        Self {
            mode: desc.render_mode,
            max_bounces: desc.max_bounces,
        }
    }
}

/// Linear color image in row-major order.
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let i = self.index(x, y);
        self.pixels[i] = color;
    }
}

/// Result of pass 1: cached radiance plus the image-wide maximum.
pub struct RadiancePass {
    pub image: ImageBuffer,
    /// Largest channel value seen, never below 1.0
    pub max_value: f32,
}

/// A finished render.
pub struct RenderOutput {
    pub width: u32,
    pub height: u32,
    /// Row-major RGB8 triples
    pub rgb: Vec<u8>,
    /// Normalization factor used by the tone mapper
    pub max_value: f32,
    pub stats: TraceStats,
}

impl RenderOutput {
    /// RGB triple at (x, y).
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let i = (y as usize * self.width as usize + x as usize) * 3;
        [self.rgb[i], self.rgb[i + 1], self.rgb[i + 2]]
    }
}

/// Evaluate a single pixel.
pub fn render_pixel(
    camera: &Camera,
    scene: &Scene,
    x: u32,
    y: u32,
    config: &RenderConfig,
    stats: &mut TraceStats,
) -> Color {
    let ray = camera.get_ray(x, y);
    ray_color(&ray, scene, camera.position(), config, stats)
}

/// Pass 1: trace every pixel and find the maximum channel value.
pub fn render_radiance(
    camera: &Camera,
    scene: &Scene,
    config: &RenderConfig,
    stats: &mut TraceStats,
) -> RadiancePass {
    let mut image = ImageBuffer::new(camera.image_width, camera.image_height);

    for y in 0..camera.image_height {
        for x in 0..camera.image_width {
            let color = render_pixel(camera, scene, x, y, config, stats);
            image.set(x, y, color);
        }
    }

    let max_value = max_radiance(&image.pixels);
    RadiancePass { image, max_value }
}

/// Pass 2: tone map the cached radiance into RGB8.
pub fn tone_map(pass: &RadiancePass) -> Vec<u8> {
    tone_map_pixels(&pass.image.pixels, pass.max_value)
}

/// Render the entire scene to an RGB8 image.
///
/// Single-threaded: every pixel is finished before the next one starts.
pub fn render(camera: &Camera, scene: &Scene, config: &RenderConfig) -> RenderOutput {
    log::info!(
        "Rendering {}x{} ({:?} mode, max bounces {}, {} primitives, {} lights)",
        camera.image_width,
        camera.image_height,
        config.mode,
        config.max_bounces,
        scene.len(),
        scene.lights().len()
    );

    if scene.is_empty() {
        log::warn!("Scene has no primitives; every pixel is background");
    }

    let mut stats = TraceStats::default();

    let start = Instant::now();
    let pass = render_radiance(camera, scene, config, &mut stats);
    log::info!(
        "Radiance pass finished in {:?}, max radiance {:.4}",
        start.elapsed(),
        pass.max_value
    );

    let start = Instant::now();
    let rgb = tone_map(&pass);
    log::debug!("Tone mapping finished in {:?}", start.elapsed());

    log::info!(
        "Traced {} rays ({} primary, {} reflection, {} shadow), {} hits",
        stats.total_rays(),
        stats.primary_rays,
        stats.reflection_rays,
        stats.shadow_rays,
        stats.hits
    );

    RenderOutput {
        width: pass.image.width,
        height: pass.image.height,
        rgb,
        max_value: pass.max_value,
        stats,
    }
}

/// Build camera, scene and configuration from a description and render it.
pub fn render_description(desc: &SceneDescription) -> RenderOutput {
    let camera = Camera::from_settings(&desc.camera);
    let scene = Scene::from_description(desc);
    let config = RenderConfig::from_description(desc);
    render(&camera, &scene, &config)
}
