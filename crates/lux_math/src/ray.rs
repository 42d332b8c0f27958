use crate::{normalize, Vec3};

/// A ray in 3D space with an origin and a (near-)unit direction.
///
/// Primary rays are built once per pixel, secondary rays once per reflective
/// bounce or shadow query. A ray is never modified after construction.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray. The direction is stored as given.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Create a ray whose direction is normalized first.
    ///
    /// A zero direction stays zero (see [`normalize`]).
    pub fn towards(origin: Vec3, direction: Vec3) -> Self {
        Self::new(origin, normalize(direction))
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Get the direction vector of the ray.
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}
