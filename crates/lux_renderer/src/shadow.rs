//! Shadow rays toward point lights.

use crate::{Ray, Scene, TraceStats};
use lux_core::Light;
use lux_math::Vec3;

/// Offset of the shadow-ray origin along the light-facing normal.
pub const SHADOW_BIAS: f32 = 1e-3;

/// Whether `point` is occluded from `light` by any primitive in the scene.
///
/// The shadow ray starts slightly above the surface on the side facing the
/// light, so the surface it was cast from cannot shadow itself. The point is
/// in shadow if the closest hit lies strictly closer than the light.
pub fn is_in_shadow(
    point: Vec3,
    normal: Vec3,
    light: &Light,
    scene: &Scene,
    stats: &mut TraceStats,
) -> bool {
    let to_light = light.position - point;
    let facing = if normal.dot(to_light) < 0.0 { -normal } else { normal };
    let origin = point + facing * SHADOW_BIAS;

    let offset = light.position - origin;
    let distance = offset.length();
    if distance <= f32::EPSILON {
        return false;
    }

    stats.shadow_rays += 1;
    let ray = Ray::new(origin, offset / distance);
    scene
        .closest_hit(&ray)
        .is_some_and(|hit| hit.t < distance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, Sphere, Triangle};
    use lux_core::Material;

    /// Floor triangle at y = 0 facing up, with a light overhead.
    fn lit_floor() -> (Scene, Light) {
        let mut scene = Scene::new(Color::ZERO);
        scene.add(Triangle::new(
            Vec3::new(-10.0, 0.0, 10.0),
            Vec3::new(10.0, 0.0, 10.0),
            Vec3::new(0.0, 0.0, -10.0),
            Material::default(),
        ));
        let light = Light::point(Vec3::new(0.0, 5.0, 0.0), Color::ONE);
        (scene, light)
    }

    #[test]
    fn test_unoccluded_point_is_lit() {
        let (scene, light) = lit_floor();
        let mut stats = TraceStats::default();

        assert!(!is_in_shadow(Vec3::ZERO, Vec3::Y, &light, &scene, &mut stats));
        assert_eq!(stats.shadow_rays, 1);
    }

    #[test]
    fn test_occluder_between_casts_shadow() {
        let (mut scene, light) = lit_floor();
        scene.add(Sphere::new(Vec3::new(0.0, 2.5, 0.0), 0.5, Material::default()));
        let mut stats = TraceStats::default();

        assert!(is_in_shadow(Vec3::ZERO, Vec3::Y, &light, &scene, &mut stats));
    }

    #[test]
    fn test_occluder_beyond_light_does_not_shadow() {
        let (mut scene, light) = lit_floor();
        scene.add(Sphere::new(Vec3::new(0.0, 8.0, 0.0), 1.0, Material::default()));
        let mut stats = TraceStats::default();

        assert!(!is_in_shadow(Vec3::ZERO, Vec3::Y, &light, &scene, &mut stats));
    }

    #[test]
    fn test_curved_surface_does_not_self_shadow() {
        // Top of a sphere, light straight above it
        let mut scene = Scene::new(Color::ZERO);
        scene.add(Sphere::new(Vec3::ZERO, 1.0, Material::default()));
        let light = Light::point(Vec3::new(0.0, 4.0, 0.0), Color::ONE);
        let mut stats = TraceStats::default();

        assert!(!is_in_shadow(Vec3::Y, Vec3::Y, &light, &scene, &mut stats));

        // The far side of the same sphere is blocked by the sphere itself
        assert!(is_in_shadow(-Vec3::Y, -Vec3::Y, &light, &scene, &mut stats));
    }
}
