//! Pinhole camera for primary ray generation.

use crate::Ray;
use lux_core::CameraSettings;
use lux_math::{normalize, Vec3};

/// Pinhole camera generating one ray through the center of each pixel.
#[derive(Debug, Clone)]
pub struct Camera {
    // Image settings
    pub image_width: u32,
    pub image_height: u32,

    // Camera positioning
    look_from: Vec3,
    look_at: Vec3,
    vup: Vec3,

    /// Vertical field of view in degrees
    vfov: f32,

    // Cached computed values (set by initialize())
    forward: Vec3,
    right: Vec3,
    up: Vec3,
    aspect_ratio: f32,
    scale: f32,
}

impl Camera {
    /// Create a new camera with default settings.
    pub fn new() -> Self {
        Self {
            image_width: 800,
            image_height: 600,
            look_from: Vec3::ZERO,
            look_at: Vec3::new(0.0, 0.0, -1.0),
            vup: Vec3::Y,
            vfov: 45.0,
            // Cached values (initialized to defaults)
            forward: Vec3::new(0.0, 0.0, -1.0),
            right: Vec3::X,
            up: Vec3::Y,
            aspect_ratio: 1.0,
            scale: 1.0,
        }
    }

    /// Create an initialized camera from scene settings.
    pub fn from_settings(settings: &CameraSettings) -> Self {
        let mut camera = Self::new()
            .with_resolution(settings.width, settings.height)
            .with_position(settings.position, settings.look_at, settings.up)
            .with_fov(settings.fov);
        camera.initialize();
        camera
    }

    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.image_width = width;
        self.image_height = height;
        self
    }

    /// Set camera position.
    pub fn with_position(mut self, look_from: Vec3, look_at: Vec3, vup: Vec3) -> Self {
        self.look_from = look_from;
        self.look_at = look_at;
        self.vup = vup;
        self
    }

    /// Set the vertical field of view in degrees.
    pub fn with_fov(mut self, vfov: f32) -> Self {
        self.vfov = vfov;
        self
    }

    /// Initialize the camera (must be called before generating rays).
    ///
    /// Computes the orthonormal basis once per render.
    pub fn initialize(&mut self) {
        self.forward = normalize(self.look_at - self.look_from);
        self.right = normalize(self.forward.cross(self.vup));
        self.up = self.right.cross(self.forward);

        if self.right.length_squared() < 0.5 {
            log::warn!(
                "Camera up vector {:?} is parallel to the view direction; image will be degenerate",
                self.vup
            );
        }

        self.aspect_ratio = self.image_width as f32 / self.image_height.max(1) as f32;
        self.scale = (self.vfov.to_radians() * 0.5).tan();

        log::debug!(
            "Camera basis: forward={:?} right={:?} up={:?}",
            self.forward,
            self.right,
            self.up
        );
    }

    /// Generate the primary ray through the center of pixel (x, y).
    ///
    /// Pixel (0, 0) is the top-left corner of the image.
    pub fn get_ray(&self, x: u32, y: u32) -> Ray {
        let u = (2.0 * (x as f32 + 0.5) / self.image_width as f32 - 1.0)
            * self.aspect_ratio
            * self.scale;
        let v = (1.0 - 2.0 * (y as f32 + 0.5) / self.image_height as f32) * self.scale;

        let direction = self.right * u + self.up * v + self.forward;
        Ray::towards(self.look_from, direction)
    }

    /// Camera position (the eye point used for view directions).
    pub fn position(&self) -> Vec3 {
        self.look_from
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
