//! Triangle primitive for ray tracing.
//!
//! Uses the Möller-Trumbore algorithm for ray-triangle intersection.

use crate::Ray;
use lux_core::Material;
use lux_math::{normalize, Vec3};

/// Determinants below this magnitude mean the ray is parallel to the plane.
pub const PARALLEL_EPSILON: f32 = 1e-8;

/// Hits at or below this distance are rejected.
pub const TRIANGLE_EPSILON: f32 = 1e-8;

/// A flat-shaded triangle primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// Vertices
    v0: Vec3,
    v1: Vec3,
    v2: Vec3,
    /// Pre-computed face normal, normalize(e1 x e2)
    normal: Vec3,
    material: Material,
}

impl Triangle {
    /// Create a new triangle from three vertices.
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3, material: Material) -> Self {
        let edge1 = v1 - v0;
        let edge2 = v2 - v0;
        let normal = normalize(edge1.cross(edge2));

        Self {
            v0,
            v1,
            v2,
            normal,
            material,
        }
    }

    pub fn vertices(&self) -> [Vec3; 3] {
        [self.v0, self.v1, self.v2]
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    /// Möller-Trumbore ray-triangle intersection.
    ///
    /// Barycentric bounds are inclusive: hits exactly on an edge count.
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        let edge1 = self.v1 - self.v0;
        let edge2 = self.v2 - self.v0;

        let h = ray.direction().cross(edge2);
        let a = edge1.dot(h);

        // Ray is parallel to triangle
        if a.abs() < PARALLEL_EPSILON {
            return None;
        }

        let f = 1.0 / a;
        let s = ray.origin() - self.v0;
        let u = f * s.dot(h);

        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let q = s.cross(edge1);
        let v = f * ray.direction().dot(q);

        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = f * edge2.dot(q);
        (t > TRIANGLE_EPSILON).then_some(t)
    }

    /// Face normal; constant over the whole triangle.
    pub fn normal(&self) -> Vec3 {
        self.normal
    }
}
