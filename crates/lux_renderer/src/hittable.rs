//! Primitive dispatch and hit results.

use crate::{Cylinder, Ray, Sphere, Triangle};
use lux_core::Material;
use lux_math::Vec3;

/// Record of the closest ray-primitive intersection.
///
/// Built fresh for every ray evaluation and never shared between rays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitResult {
    /// Parameter t where the intersection occurs
    pub t: f32,
    /// Point of intersection
    pub point: Vec3,
    /// Outward unit surface normal
    pub normal: Vec3,
    /// Copy of the hit primitive's material
    pub material: Material,
}

/// Any intersectable primitive.
///
/// A closed set of shapes, dispatched by a single match in the hot loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    Sphere(Sphere),
    Cylinder(Cylinder),
    Triangle(Triangle),
}

impl Primitive {
    /// Nearest forward intersection distance, if any.
    #[inline]
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        match self {
            Primitive::Sphere(s) => s.intersect(ray),
            Primitive::Cylinder(c) => c.intersect(ray),
            Primitive::Triangle(t) => t.intersect(ray),
        }
    }

    /// Outward unit normal at a point on the surface.
    #[inline]
    pub fn normal_at(&self, point: Vec3) -> Vec3 {
        match self {
            Primitive::Sphere(s) => s.normal_at(point),
            Primitive::Cylinder(c) => c.normal_at(point),
            Primitive::Triangle(t) => t.normal(),
        }
    }

    pub fn material(&self) -> &Material {
        match self {
            Primitive::Sphere(s) => s.material(),
            Primitive::Cylinder(c) => c.material(),
            Primitive::Triangle(t) => t.material(),
        }
    }

    /// Position in the closest-hit scan: spheres, then cylinders, then
    /// triangles.
    pub fn scan_rank(&self) -> u8 {
        match self {
            Primitive::Sphere(_) => 0,
            Primitive::Cylinder(_) => 1,
            Primitive::Triangle(_) => 2,
        }
    }

    /// Build the hit result for a distance returned by [`Primitive::intersect`].
    pub fn hit_result(&self, ray: &Ray, t: f32) -> HitResult {
        let point = ray.at(t);
        HitResult {
            t,
            point,
            normal: self.normal_at(point),
            material: *self.material(),
        }
    }
}

impl From<Sphere> for Primitive {
    fn from(s: Sphere) -> Self {
        Primitive::Sphere(s)
    }
}

impl From<Cylinder> for Primitive {
    fn from(c: Cylinder) -> Self {
        Primitive::Cylinder(c)
    }
}

impl From<Triangle> for Primitive {
    fn from(t: Triangle) -> Self {
        Primitive::Triangle(t)
    }
}

/// Find the closest hit among `primitives`, scanned in order.
///
/// The comparison against the running minimum is strict, so among
/// primitives at equal distance the first one scanned wins.
pub fn closest_hit(ray: &Ray, primitives: &[Primitive]) -> Option<HitResult> {
    let mut closest: Option<(f32, &Primitive)> = None;

    for primitive in primitives {
        if let Some(t) = primitive.intersect(ray) {
            let closer = match closest {
                Some((closest_t, _)) => t < closest_t,
                None => true,
            };
            if closer {
                closest = Some((t, primitive));
            }
        }
    }

    closest.map(|(t, primitive)| primitive.hit_result(ray, t))
}
