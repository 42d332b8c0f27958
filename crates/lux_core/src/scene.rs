//! Scene description records for Lux.
//!
//! These are the renderer-agnostic types produced by the scene loader: what
//! the camera looks like, which shapes exist and what they are made of, and
//! where the lights are. The renderer turns them into intersectable geometry.

use lux_math::Vec3;

/// Surface material for the Blinn-Phong model.
///
/// A material belongs to exactly one shape and is copied by value into every
/// hit result, so there is no shared mutable state between rays.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    /// Specular coefficient
    pub ks: f32,

    /// Diffuse coefficient
    pub kd: f32,

    /// Specular exponent (shininess)
    pub specular_exponent: f32,

    /// Diffuse color (RGB, 0-1)
    pub diffuse_color: Vec3,

    /// Specular color (RGB, 0-1)
    pub specular_color: Vec3,

    /// Whether reflection rays are traced from this surface
    pub is_reflective: bool,

    /// Blend weight of the reflected color (0-1)
    pub reflectivity: f32,

    /// Recognized but not traced
    pub is_refractive: bool,

    /// Index of refraction (inert)
    pub refractive_index: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            ks: 0.0,
            kd: 0.0,
            specular_exponent: 0.0,
            diffuse_color: Vec3::ZERO,
            specular_color: Vec3::ZERO,
            is_reflective: false,
            reflectivity: 0.0,
            is_refractive: false,
            refractive_index: 0.0,
        }
    }
}

impl Material {
    /// Create a purely diffuse material.
    pub fn diffuse(kd: f32, diffuse_color: Vec3) -> Self {
        Self {
            kd,
            diffuse_color,
            ..Default::default()
        }
    }

    /// Add a specular lobe.
    pub fn with_specular(mut self, ks: f32, specular_exponent: f32, specular_color: Vec3) -> Self {
        self.ks = ks;
        self.specular_exponent = specular_exponent;
        self.specular_color = specular_color;
        self
    }

    /// Make the material reflective with the given blend weight.
    pub fn with_reflectivity(mut self, reflectivity: f32) -> Self {
        self.is_reflective = true;
        self.reflectivity = reflectivity;
        self
    }
}

/// Kinds of light source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightKind {
    Point,
}

/// A light source.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Light {
    pub kind: LightKind,

    /// World-space position
    pub position: Vec3,

    /// Per-channel intensity, multiplied into the diffuse and specular terms
    pub intensity: Vec3,
}

impl Light {
    /// Create a point light.
    pub fn point(position: Vec3, intensity: Vec3) -> Self {
        Self {
            kind: LightKind::Point,
            position,
            intensity,
        }
    }
}

/// A geometric shape together with its material.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Sphere {
        center: Vec3,
        radius: f32,
        material: Material,
    },
    /// Lateral surface of a cylinder, starting at `center` and extending
    /// `height` along `axis`.
    Cylinder {
        center: Vec3,
        axis: Vec3,
        radius: f32,
        height: f32,
        material: Material,
    },
    Triangle {
        v0: Vec3,
        v1: Vec3,
        v2: Vec3,
        material: Material,
    },
}

impl Shape {
    /// The material of this shape.
    pub fn material(&self) -> &Material {
        match self {
            Shape::Sphere { material, .. }
            | Shape::Cylinder { material, .. }
            | Shape::Triangle { material, .. } => material,
        }
    }

    /// Short type name, as used in the scene file.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Shape::Sphere { .. } => "sphere",
            Shape::Cylinder { .. } => "cylinder",
            Shape::Triangle { .. } => "triangle",
        }
    }
}

/// How pixels are evaluated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RenderMode {
    /// Hit/no-hit silhouette: red where any shape is struck
    Binary,
    /// Blinn-Phong shading with shadows and reflections
    #[default]
    Phong,
}

/// Pinhole camera settings.
#[derive(Clone, Debug, PartialEq)]
pub struct CameraSettings {
    /// Camera type tag from the scene file (only pinhole cameras exist)
    pub kind: String,

    /// Image width in pixels
    pub width: u32,

    /// Image height in pixels
    pub height: u32,

    pub position: Vec3,
    pub look_at: Vec3,
    pub up: Vec3,

    /// Vertical field of view in degrees
    pub fov: f32,

    /// Carried through from the scene file; not applied
    pub exposure: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            kind: "pinhole".to_string(),
            width: 800,
            height: 600,
            position: Vec3::ZERO,
            look_at: Vec3::new(0.0, 0.0, -1.0),
            up: Vec3::Y,
            fov: 45.0,
            exposure: 0.1,
        }
    }
}

impl CameraSettings {
    /// Number of pixels in the image.
    pub fn pixel_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

/// Largest image accepted, in pixels.
pub const MAX_IMAGE_PIXELS: u64 = 1 << 28;

/// Default ambient light intensity.
pub const DEFAULT_AMBIENT_INTENSITY: f32 = 0.4;

/// Default number of reflective bounces.
pub const DEFAULT_MAX_BOUNCES: u32 = 4;

/// A complete scene: camera, render settings, shapes and lights.
///
/// Built once by the loader and read-only afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneDescription {
    pub render_mode: RenderMode,

    /// Maximum reflection depth; the primary ray is depth 0
    pub max_bounces: u32,

    pub camera: CameraSettings,

    /// Color returned for rays that hit nothing
    pub background: Vec3,

    pub ambient_intensity: f32,

    pub lights: Vec<Light>,

    /// Shapes in declaration order
    pub shapes: Vec<Shape>,
}

impl Default for SceneDescription {
    fn default() -> Self {
        Self {
            render_mode: RenderMode::default(),
            max_bounces: DEFAULT_MAX_BOUNCES,
            camera: CameraSettings::default(),
            background: Vec3::ZERO,
            ambient_intensity: DEFAULT_AMBIENT_INTENSITY,
            lights: Vec::new(),
            shapes: Vec::new(),
        }
    }
}

impl SceneDescription {
    /// Add a shape.
    pub fn add_shape(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// Add a light.
    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    /// Number of shapes.
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Number of lights.
    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    /// Count shapes of the given kind name ("sphere", "cylinder", "triangle").
    pub fn count_of(&self, kind: &str) -> usize {
        self.shapes.iter().filter(|s| s.kind_name() == kind).count()
    }
}
