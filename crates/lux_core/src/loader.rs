//! JSON scene loading.
//!
//! Reads the scene document format (camera, render mode, bounce limit,
//! background, light sources and shapes with nested materials) and converts
//! it into a validated [`SceneDescription`].
//!
//! Malformed input fails here, before any ray is traced.

use std::path::Path;

use lux_math::Vec3;
use serde::Deserialize;
use thiserror::Error;

use crate::scene::{
    CameraSettings, Light, Material, RenderMode, SceneDescription, Shape,
    DEFAULT_AMBIENT_INTENSITY, DEFAULT_MAX_BOUNCES, MAX_IMAGE_PIXELS,
};

/// Smallest accepted `|forward x up|` for the camera basis.
const MIN_BASIS_SINE: f32 = 1e-6;

/// Errors that can occur during scene loading.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid scene: {0}")]
    Invalid(String),
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

// ============================================================================
// Document layout
// ============================================================================

#[derive(Deserialize, Debug)]
struct SceneDocument {
    #[serde(rename = "rendermode", default)]
    render_mode: RenderModeTag,

    #[serde(rename = "nbounces", default = "default_max_bounces")]
    max_bounces: u32,

    camera: CameraDocument,

    scene: SceneBlock,
}

#[derive(Deserialize, Debug, Default, Clone, Copy)]
#[serde(rename_all = "lowercase")]
enum RenderModeTag {
    Binary,
    #[default]
    Phong,
}

impl From<RenderModeTag> for RenderMode {
    fn from(tag: RenderModeTag) -> Self {
        match tag {
            RenderModeTag::Binary => RenderMode::Binary,
            RenderModeTag::Phong => RenderMode::Phong,
        }
    }
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct CameraDocument {
    #[serde(rename = "type", default = "default_camera_type")]
    kind: String,
    width: u32,
    height: u32,
    position: [f32; 3],
    look_at: [f32; 3],
    up_vector: [f32; 3],
    fov: f32,
    #[serde(default = "default_exposure")]
    exposure: f32,
}

#[derive(Deserialize, Debug)]
struct SceneBlock {
    #[serde(rename = "backgroundcolor")]
    background: [f32; 3],

    #[serde(rename = "ambientintensity", default = "default_ambient_intensity")]
    ambient_intensity: f32,

    #[serde(rename = "lightsources", default)]
    lights: Vec<LightDocument>,

    #[serde(default)]
    shapes: Vec<ShapeDocument>,
}

#[derive(Deserialize, Debug)]
struct LightDocument {
    #[serde(rename = "type")]
    kind: String,
    position: [f32; 3],
    intensity: [f32; 3],
}

#[derive(Deserialize, Debug)]
#[serde(tag = "type", rename_all = "lowercase")]
enum ShapeDocument {
    Sphere {
        center: [f32; 3],
        radius: f32,
        #[serde(default)]
        material: MaterialDocument,
    },
    Cylinder {
        center: [f32; 3],
        axis: [f32; 3],
        radius: f32,
        height: f32,
        #[serde(default)]
        material: MaterialDocument,
    },
    Triangle {
        v0: [f32; 3],
        v1: [f32; 3],
        v2: [f32; 3],
        #[serde(default)]
        material: MaterialDocument,
    },
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
struct MaterialDocument {
    ks: f32,
    kd: f32,
    #[serde(rename = "specularexponent")]
    specular_exponent: f32,
    #[serde(rename = "diffusecolor")]
    diffuse_color: [f32; 3],
    #[serde(rename = "specularcolor")]
    specular_color: [f32; 3],
    #[serde(rename = "isreflective")]
    is_reflective: bool,
    reflectivity: f32,
    #[serde(rename = "isrefractive")]
    is_refractive: bool,
    #[serde(rename = "refractiveindex")]
    refractive_index: f32,
}

fn default_max_bounces() -> u32 {
    DEFAULT_MAX_BOUNCES
}

fn default_camera_type() -> String {
    "pinhole".to_string()
}

fn default_exposure() -> f32 {
    0.1
}

fn default_ambient_intensity() -> f32 {
    DEFAULT_AMBIENT_INTENSITY
}

// ============================================================================
// Loading
// ============================================================================

/// Load a scene from a JSON file.
///
/// # Example
///
/// ```ignore
/// use lux_core::load_scene;
///
/// let scene = load_scene("scenes/mirror_image.json")?;
/// println!("Loaded {} shapes, {} lights", scene.shape_count(), scene.light_count());
/// ```
pub fn load_scene<P: AsRef<Path>>(path: P) -> LoadResult<SceneDescription> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let scene = load_scene_from_str(&text)?;

    log::info!(
        "Loaded scene {}: {} shapes ({} spheres, {} cylinders, {} triangles), {} lights",
        path.display(),
        scene.shape_count(),
        scene.count_of("sphere"),
        scene.count_of("cylinder"),
        scene.count_of("triangle"),
        scene.light_count()
    );

    Ok(scene)
}

/// Parse and validate a scene from a JSON string.
pub fn load_scene_from_str(json: &str) -> LoadResult<SceneDescription> {
    let doc: SceneDocument = serde_json::from_str(json)?;
    convert_document(doc)
}

fn convert_document(doc: SceneDocument) -> LoadResult<SceneDescription> {
    let camera = convert_camera(doc.camera)?;

    let mut lights = Vec::with_capacity(doc.scene.lights.len());
    for light in &doc.scene.lights {
        if light.kind == "pointlight" {
            lights.push(Light::point(vec3(light.position), vec3(light.intensity)));
        } else {
            log::warn!("Ignoring unsupported light type '{}'", light.kind);
        }
    }

    let mut shapes = Vec::with_capacity(doc.scene.shapes.len());
    for (index, shape) in doc.scene.shapes.into_iter().enumerate() {
        shapes.push(convert_shape(index, shape)?);
    }

    let refractive = shapes.iter().filter(|s| s.material().is_refractive).count();
    if refractive > 0 {
        log::warn!(
            "{} refractive material(s) found; refraction is not traced",
            refractive
        );
    }

    Ok(SceneDescription {
        render_mode: doc.render_mode.into(),
        max_bounces: doc.max_bounces,
        camera,
        background: vec3(doc.scene.background),
        ambient_intensity: doc.scene.ambient_intensity,
        lights,
        shapes,
    })
}

fn convert_camera(doc: CameraDocument) -> LoadResult<CameraSettings> {
    if doc.width == 0 || doc.height == 0 {
        return Err(LoadError::Invalid(format!(
            "camera resolution must be non-zero, got {}x{}",
            doc.width, doc.height
        )));
    }
    if u64::from(doc.width) * u64::from(doc.height) > MAX_IMAGE_PIXELS {
        return Err(LoadError::Invalid(format!(
            "camera resolution {}x{} exceeds {} pixels",
            doc.width, doc.height, MAX_IMAGE_PIXELS
        )));
    }
    if !(doc.fov > 0.0 && doc.fov < 180.0) {
        return Err(LoadError::Invalid(format!(
            "camera fov must be in (0, 180) degrees, got {}",
            doc.fov
        )));
    }

    let position = vec3(doc.position);
    let look_at = vec3(doc.look_at);
    if (look_at - position).length_squared() == 0.0 {
        return Err(LoadError::Invalid(
            "camera lookAt must differ from its position".to_string(),
        ));
    }

    let up = vec3(doc.up_vector);
    let forward = (look_at - position).normalize();
    if forward.cross(up).length() <= MIN_BASIS_SINE * up.length() {
        return Err(LoadError::Invalid(format!(
            "camera upVector {:?} must not be zero or parallel to the view direction",
            doc.up_vector
        )));
    }

    Ok(CameraSettings {
        kind: doc.kind,
        width: doc.width,
        height: doc.height,
        position,
        look_at,
        up,
        fov: doc.fov,
        exposure: doc.exposure,
    })
}

fn convert_shape(index: usize, doc: ShapeDocument) -> LoadResult<Shape> {
    let invalid = |message: String| LoadError::Invalid(format!("shape {}: {}", index, message));

    let shape = match doc {
        ShapeDocument::Sphere {
            center,
            radius,
            material,
        } => {
            if radius <= 0.0 {
                return Err(invalid(format!("sphere radius must be positive, got {}", radius)));
            }
            Shape::Sphere {
                center: vec3(center),
                radius,
                material: convert_material(material).map_err(invalid)?,
            }
        }
        ShapeDocument::Cylinder {
            center,
            axis,
            radius,
            height,
            material,
        } => {
            if radius <= 0.0 {
                return Err(invalid(format!("cylinder radius must be positive, got {}", radius)));
            }
            if height < 0.0 {
                return Err(invalid(format!("cylinder height must not be negative, got {}", height)));
            }
            let axis = vec3(axis);
            if axis.length_squared() == 0.0 {
                return Err(invalid("cylinder axis must be non-zero".to_string()));
            }
            Shape::Cylinder {
                center: vec3(center),
                axis,
                radius,
                height,
                material: convert_material(material).map_err(invalid)?,
            }
        }
        ShapeDocument::Triangle { v0, v1, v2, material } => Shape::Triangle {
            v0: vec3(v0),
            v1: vec3(v1),
            v2: vec3(v2),
            material: convert_material(material).map_err(invalid)?,
        },
    };

    Ok(shape)
}

fn convert_material(doc: MaterialDocument) -> Result<Material, String> {
    if !(0.0..=1.0).contains(&doc.reflectivity) {
        return Err(format!(
            "reflectivity must be in [0, 1], got {}",
            doc.reflectivity
        ));
    }
    if doc.specular_exponent < 0.0 {
        return Err(format!(
            "specularexponent must not be negative, got {}",
            doc.specular_exponent
        ));
    }

    Ok(Material {
        ks: doc.ks,
        kd: doc.kd,
        specular_exponent: doc.specular_exponent,
        diffuse_color: vec3(doc.diffuse_color),
        specular_color: vec3(doc.specular_color),
        is_reflective: doc.is_reflective,
        reflectivity: doc.reflectivity,
        is_refractive: doc.is_refractive,
        refractive_index: doc.refractive_index,
    })
}

#[inline]
fn vec3(v: [f32; 3]) -> Vec3 {
    Vec3::from_array(v)
}
