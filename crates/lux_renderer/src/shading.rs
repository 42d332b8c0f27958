//! Blinn-Phong local illumination.

use crate::shadow::is_in_shadow;
use crate::{Scene, TraceStats};
use lux_core::Material;
use lux_math::{normalize, Vec3};

/// Color type alias (RGB, non-negative, unbounded before tone mapping)
pub type Color = Vec3;

/// Color returned for any hit in binary mode.
pub const HIT_COLOR: Color = Color::new(1.0, 0.0, 0.0);

/// Shade a surface point with the Blinn-Phong model.
///
/// The ambient term `ambient_intensity * diffuse_color` always applies. Each
/// light that is not shadowed adds a Lambertian diffuse term and a
/// half-vector specular term, both scaled channel-wise by the light
/// intensity. No clamp is applied here; the tracer clamps the primary hit.
pub fn shade(
    point: Vec3,
    normal: Vec3,
    view_dir: Vec3,
    material: &Material,
    scene: &Scene,
    stats: &mut TraceStats,
) -> Color {
    let mut color = scene.ambient_intensity() * material.diffuse_color;

    for light in scene.lights() {
        if is_in_shadow(point, normal, light, scene, stats) {
            continue;
        }

        let light_dir = normalize(light.position - point);

        let diffuse_factor = material.kd * normal.dot(light_dir).max(0.0);
        let diffuse = diffuse_factor * material.diffuse_color * light.intensity;

        let halfway = normalize(view_dir + light_dir);
        let specular_factor = normal.dot(halfway).max(0.0).powf(material.specular_exponent);
        let specular = specular_factor * material.ks * material.specular_color * light.intensity;

        color += diffuse + specular;
    }

    color
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Sphere, Triangle};
    use lux_core::Light;

    const EPS: f32 = 1e-5;

    fn floor_scene(light_pos: Vec3) -> Scene {
        let mut scene = Scene::new(Color::ZERO).with_ambient(0.4);
        scene.add(Triangle::new(
            Vec3::new(-10.0, 0.0, 10.0),
            Vec3::new(10.0, 0.0, 10.0),
            Vec3::new(0.0, 0.0, -10.0),
            Material::default(),
        ));
        scene.add_light(Light::point(light_pos, Color::ONE));
        scene
    }

    #[test]
    fn test_ambient_only_without_lights() {
        let scene = Scene::new(Color::ZERO).with_ambient(0.4);
        let material = Material::diffuse(0.9, Color::new(1.0, 0.5, 0.0));
        let mut stats = TraceStats::default();

        let c = shade(Vec3::ZERO, Vec3::Y, Vec3::Y, &material, &scene, &mut stats);
        assert!((c - Color::new(0.4, 0.2, 0.0)).length() < EPS);
    }

    #[test]
    fn test_head_on_light() {
        // Light, viewer and normal aligned: n.l = 1 and n.h = 1
        let scene = floor_scene(Vec3::new(0.0, 5.0, 0.0));
        let material = Material::diffuse(0.5, Color::new(1.0, 1.0, 1.0))
            .with_specular(0.25, 10.0, Color::ONE);
        let mut stats = TraceStats::default();

        let c = shade(Vec3::ZERO, Vec3::Y, Vec3::Y, &material, &scene, &mut stats);
        // 0.4 ambient + 0.5 diffuse + 0.25 specular
        assert!((c - Color::splat(1.15)).length() < EPS, "c = {:?}", c);
    }

    #[test]
    fn test_light_behind_surface_adds_nothing() {
        let scene = floor_scene(Vec3::new(0.0, -5.0, 0.0));
        let material = Material::diffuse(1.0, Color::ONE).with_specular(1.0, 5.0, Color::ONE);
        let mut stats = TraceStats::default();

        // Light below the floor: n.l and n.h are both zero
        let c = shade(Vec3::ZERO, Vec3::Y, Vec3::Y, &material, &scene, &mut stats);
        assert!((c - Color::splat(0.4)).length() < EPS);
    }

    #[test]
    fn test_shadowed_light_keeps_ambient() {
        let mut scene = floor_scene(Vec3::new(0.0, 5.0, 0.0));
        scene.add(Sphere::new(Vec3::new(0.0, 2.0, 0.0), 0.5, Material::default()));
        let material = Material::diffuse(1.0, Color::new(0.5, 0.5, 0.5));
        let mut stats = TraceStats::default();

        let c = shade(Vec3::ZERO, Vec3::Y, Vec3::Y, &material, &scene, &mut stats);
        assert!((c - Color::splat(0.2)).length() < EPS);
        assert_eq!(stats.shadow_rays, 1);
    }

    #[test]
    fn test_grazing_light_diffuse_falloff() {
        // Light at 60 degrees from the normal: n.l = 0.5
        let angle = 60.0_f32.to_radians();
        let light_pos = Vec3::new(angle.sin(), angle.cos(), 0.0) * 4.0;
        let scene = floor_scene(light_pos);
        let material = Material::diffuse(1.0, Color::ONE);
        let mut stats = TraceStats::default();

        let c = shade(Vec3::ZERO, Vec3::Y, Vec3::Y, &material, &scene, &mut stats);
        assert!((c.x - 0.9).abs() < 1e-4, "c = {:?}", c);
    }
}
