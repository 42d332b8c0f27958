//! Vector helpers shared by the intersection, shading and tracing code.

use crate::Vec3;

/// Vectors at or below this length are left untouched by [`normalize`].
pub const NORMALIZE_EPSILON: f32 = 1e-6;

/// Normalize `v`, or return it unchanged if its length is `<= 1e-6`.
///
/// Unlike `Vec3::normalize`, this never produces NaN for a zero vector, so a
/// degenerate normal or direction cannot poison later comparisons.
#[inline]
pub fn normalize(v: Vec3) -> Vec3 {
    let length = v.length();
    if length > NORMALIZE_EPSILON {
        v / length
    } else {
        v
    }
}

/// Reflect `v` about the normal `n` (assumed unit length).
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Largest of the three components.
#[inline]
pub fn max_component(v: Vec3) -> f32 {
    v.x.max(v.y).max(v.z)
}
