//! Finite cylinder primitive (lateral surface only, no caps).

use crate::Ray;
use lux_core::Material;
use lux_math::{normalize, Interval, Vec3};

/// Roots at or below this distance are treated as behind the ray origin.
pub const CYLINDER_EPSILON: f32 = 1e-6;

/// A cylinder starting at `center` and extending `height` along `axis`.
///
/// A hit is valid when the signed projection of the hit point onto the axis,
/// measured from the center, lies in `[0, height]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cylinder {
    center: Vec3,
    /// Unit length
    axis: Vec3,
    radius: f32,
    height: f32,
    material: Material,
}

impl Cylinder {
    /// Create a new cylinder. The axis is normalized here.
    pub fn new(center: Vec3, axis: Vec3, radius: f32, height: f32, material: Material) -> Self {
        Self {
            center,
            axis: normalize(axis),
            radius: radius.max(0.0),
            height: height.max(0.0),
            material,
        }
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn axis(&self) -> Vec3 {
        self.axis
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    /// Signed distance of a point along the axis, measured from the center.
    #[inline]
    fn axial_projection(&self, point: Vec3) -> f32 {
        (point - self.center).dot(self.axis)
    }

    /// Nearest forward intersection with the lateral surface, if any.
    ///
    /// The ray and the origin offset are split into components parallel and
    /// perpendicular to the axis; the perpendicular distance is solved
    /// against the radius. Each root must be beyond [`CYLINDER_EPSILON`] and
    /// inside the height band; the smaller valid root wins.
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        let d = ray.direction();
        let oc = ray.origin() - self.center;

        let d_par = d.dot(self.axis);
        let oc_par = oc.dot(self.axis);

        let a = d.length_squared() - d_par * d_par;
        // Ray parallel to the axis never meets the lateral surface
        if a <= f32::EPSILON {
            return None;
        }

        let b = 2.0 * (oc.dot(d) - oc_par * d_par);
        let c = oc.length_squared() - oc_par * oc_par - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();
        let near = (-b - sqrtd) / (2.0 * a);
        let far = (-b + sqrtd) / (2.0 * a);

        let band = Interval::new(0.0, self.height);
        let valid = |t: f32| t > CYLINDER_EPSILON && band.contains(self.axial_projection(ray.at(t)));

        if valid(near) {
            Some(near)
        } else if valid(far) {
            Some(far)
        } else {
            None
        }
    }

    /// Outward radial unit normal at a point on the lateral surface.
    pub fn normal_at(&self, point: Vec3) -> Vec3 {
        let pc = point - self.center;
        normalize(pc - pc.dot(self.axis) * self.axis)
    }
}
