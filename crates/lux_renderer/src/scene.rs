//! Render-ready scene: intersectable primitives plus lighting.

use crate::hittable::{closest_hit, HitResult, Primitive};
use crate::{Color, Cylinder, Ray, Sphere, Triangle};
use lux_core::{Light, SceneDescription, Shape, DEFAULT_AMBIENT_INTENSITY};

/// An immutable scene for the whole render.
///
/// Primitives are kept in scan order: all spheres, then all cylinders, then
/// all triangles, each group in declaration order.
#[derive(Debug, Clone)]
pub struct Scene {
    primitives: Vec<Primitive>,
    lights: Vec<Light>,
    background: Color,
    ambient_intensity: f32,
}

impl Scene {
    /// Create an empty scene.
    pub fn new(background: Color) -> Self {
        Self {
            primitives: Vec::new(),
            lights: Vec::new(),
            background,
            ambient_intensity: DEFAULT_AMBIENT_INTENSITY,
        }
    }

    /// Build the scene from a loaded description.
    pub fn from_description(desc: &SceneDescription) -> Self {
        let mut scene = Self::new(desc.background).with_ambient(desc.ambient_intensity);

        for shape in &desc.shapes {
            let primitive: Primitive = match *shape {
                Shape::Sphere {
                    center,
                    radius,
                    material,
                } => Sphere::new(center, radius, material).into(),
                Shape::Cylinder {
                    center,
                    axis,
                    radius,
                    height,
                    material,
                } => Cylinder::new(center, axis, radius, height, material).into(),
                Shape::Triangle {
                    v0,
                    v1,
                    v2,
                    material,
                } => Triangle::new(v0, v1, v2, material).into(),
            };
            scene.add(primitive);
        }

        for light in &desc.lights {
            scene.add_light(*light);
        }

        scene
    }

    /// Set the ambient intensity.
    pub fn with_ambient(mut self, ambient_intensity: f32) -> Self {
        self.ambient_intensity = ambient_intensity;
        self
    }

    /// Add a primitive, keeping the scan order.
    pub fn add(&mut self, primitive: impl Into<Primitive>) {
        let primitive = primitive.into();
        let rank = primitive.scan_rank();
        let index = self.primitives.partition_point(|p| p.scan_rank() <= rank);
        self.primitives.insert(index, primitive);
    }

    /// Add a light.
    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn ambient_intensity(&self) -> f32 {
        self.ambient_intensity
    }

    /// Number of primitives.
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    /// Check if the scene has no primitives.
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Closest intersection of `ray` with any primitive.
    pub fn closest_hit(&self, ray: &Ray) -> Option<HitResult> {
        closest_hit(ray, &self.primitives)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lux_core::{load_scene_from_str, Material};
    use lux_math::Vec3;

    #[test]
    fn test_add_keeps_scan_order() {
        let mut scene = Scene::new(Color::ZERO);
        scene.add(Triangle::new(Vec3::ZERO, Vec3::X, Vec3::Y, Material::default()));
        scene.add(Sphere::new(Vec3::ZERO, 1.0, Material::default()));
        scene.add(Cylinder::new(Vec3::ZERO, Vec3::Y, 1.0, 1.0, Material::default()));
        scene.add(Sphere::new(Vec3::ONE, 2.0, Material::default()));

        let ranks: Vec<u8> = scene.primitives().iter().map(|p| p.scan_rank()).collect();
        assert_eq!(ranks, vec![0, 0, 1, 2]);

        // Declaration order is kept within a type
        match scene.primitives()[1] {
            Primitive::Sphere(s) => assert_eq!(s.radius(), 2.0),
            other => panic!("expected sphere, got {:?}", other),
        }
    }

    #[test]
    fn test_from_description() {
        let json = r#"{
            "rendermode": "phong",
            "camera": {
                "width": 8, "height": 8,
                "position": [0.0, 0.0, 0.0], "lookAt": [0.0, 0.0, -1.0],
                "upVector": [0.0, 1.0, 0.0], "fov": 45.0
            },
            "scene": {
                "backgroundcolor": [0.1, 0.2, 0.3],
                "ambientintensity": 0.25,
                "lightsources": [
                    { "type": "pointlight", "position": [0.0, 5.0, 0.0], "intensity": [1.0, 1.0, 1.0] }
                ],
                "shapes": [
                    { "type": "triangle", "v0": [0.0, 0.0, -3.0], "v1": [1.0, 0.0, -3.0], "v2": [0.0, 1.0, -3.0] },
                    { "type": "cylinder", "center": [0.0, 0.0, -4.0], "axis": [0.0, 5.0, 0.0], "radius": 0.5, "height": 1.0 },
                    { "type": "sphere", "center": [0.0, 0.0, -5.0], "radius": 1.0 }
                ]
            }
        }"#;
        let desc = load_scene_from_str(json).unwrap();
        let scene = Scene::from_description(&desc);

        assert_eq!(scene.len(), 3);
        assert_eq!(scene.lights().len(), 1);
        assert_eq!(scene.background(), Vec3::new(0.1, 0.2, 0.3));
        assert_eq!(scene.ambient_intensity(), 0.25);
        assert!(matches!(scene.primitives()[0], Primitive::Sphere(_)));
        assert!(matches!(scene.primitives()[2], Primitive::Triangle(_)));

        match scene.primitives()[1] {
            Primitive::Cylinder(c) => assert!((c.axis() - Vec3::Y).length() < 1e-6),
            other => panic!("expected cylinder, got {:?}", other),
        }
    }
}
