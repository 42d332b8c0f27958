//! Sphere primitive for ray tracing.

use crate::Ray;
use lux_core::Material;
use lux_math::{normalize, Vec3};

/// Roots at or below this distance are treated as behind the ray origin.
pub const SPHERE_EPSILON: f32 = 1e-6;

/// A sphere primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: Material,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32, material: Material) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            material,
        }
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    /// Nearest forward intersection distance, if any.
    ///
    /// Solves `|O + tD - C|^2 = r^2` and returns the smaller root if it lies
    /// beyond [`SPHERE_EPSILON`], otherwise the larger one (ray starting
    /// inside the sphere).
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        let oc = ray.origin() - self.center;
        let a = ray.direction().length_squared();
        if a <= f32::EPSILON {
            return None;
        }

        let half_b = oc.dot(ray.direction());
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = half_b * half_b - a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        let near = (-half_b - sqrtd) / a;
        if near > SPHERE_EPSILON {
            return Some(near);
        }

        let far = (-half_b + sqrtd) / a;
        if far > SPHERE_EPSILON {
            return Some(far);
        }

        None
    }

    /// Outward unit normal at a point on the surface.
    pub fn normal_at(&self, point: Vec3) -> Vec3 {
        normalize(point - self.center)
    }
}
