//! Recursive ray evaluation.
//!
//! Phong mode traces a ray to its closest hit, shades it, and follows one
//! reflection ray per reflective surface until the bounce limit. Binary mode
//! only asks whether anything was hit.

use crate::shading::{shade, Color, HIT_COLOR};
use crate::{Ray, RenderConfig, Scene};
use lux_core::RenderMode;
use lux_math::{normalize, reflect, Vec3};

/// Offset of a reflection ray's origin along its direction.
pub const REFLECTION_OFFSET: f32 = 1e-3;

/// Counters collected while tracing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraceStats {
    /// Camera rays evaluated
    pub primary_rays: u64,
    /// Reflection rays spawned
    pub reflection_rays: u64,
    /// Shadow rays cast toward lights
    pub shadow_rays: u64,
    /// Ray evaluations that found a primitive
    pub hits: u64,
}

impl TraceStats {
    /// Total rays of every kind.
    pub fn total_rays(&self) -> u64 {
        self.primary_rays + self.reflection_rays + self.shadow_rays
    }
}

/// Compute the color seen by a camera ray in the configured mode.
pub fn ray_color(
    ray: &Ray,
    scene: &Scene,
    eye: Vec3,
    config: &RenderConfig,
    stats: &mut TraceStats,
) -> Color {
    stats.primary_rays += 1;
    match config.mode {
        RenderMode::Binary => trace_binary(ray, scene, stats),
        RenderMode::Phong => trace_ray(ray, scene, eye, 0, config.max_bounces, stats),
    }
}

/// Trace a ray with Blinn-Phong shading and reflections.
///
/// `depth` is 0 for the primary ray. Once it exceeds `max_bounces` the
/// background is returned without looking for a hit, so any chain of mirrors
/// ends after `max_bounces + 1` hits. `eye` is the camera position; the view
/// direction for shading always points back toward it.
///
/// The local shading of the primary hit is clamped to at most 1.0 per
/// channel before blending. Colors returned from deeper bounces are not, so
/// a mirror can still show radiance above 1.0 to the tone mapper.
pub fn trace_ray(
    ray: &Ray,
    scene: &Scene,
    eye: Vec3,
    depth: u32,
    max_bounces: u32,
    stats: &mut TraceStats,
) -> Color {
    if depth > max_bounces {
        return scene.background();
    }

    let Some(hit) = scene.closest_hit(ray) else {
        return scene.background();
    };
    stats.hits += 1;

    let view_dir = normalize(eye - hit.point);
    let mut shaded = shade(hit.point, hit.normal, view_dir, &hit.material, scene, stats);

    // Only the primary hit is clamped; reflected radiance stays unclamped
    if depth == 0 {
        shaded = shaded.min(Color::ONE);
    }

    if !hit.material.is_reflective {
        return shaded;
    }

    let direction = normalize(reflect(ray.direction(), hit.normal));
    let reflection = Ray::new(hit.point + direction * REFLECTION_OFFSET, direction);
    stats.reflection_rays += 1;

    let reflected = trace_ray(&reflection, scene, eye, depth + 1, max_bounces, stats);

    // Linear blend, no Fresnel term
    let r = hit.material.reflectivity;
    (1.0 - r) * shaded + r * reflected
}

/// Silhouette evaluation: [`HIT_COLOR`] if the ray hits anything, else the
/// background. No shading, shadows or reflections.
pub fn trace_binary(ray: &Ray, scene: &Scene, stats: &mut TraceStats) -> Color {
    match scene.closest_hit(ray) {
        Some(_) => {
            stats.hits += 1;
            HIT_COLOR
        }
        None => scene.background(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Sphere, Triangle};
    use lux_core::{Light, Material};

    const BACKGROUND: Color = Color::new(0.0, 0.0, 1.0);

    fn mirror() -> Material {
        Material::diffuse(0.5, Color::new(0.5, 0.5, 0.5)).with_reflectivity(1.0)
    }

    /// Two fully reflective spheres facing each other along z, camera at
    /// the origin between them.
    fn mirror_cavity() -> Scene {
        let mut scene = Scene::new(BACKGROUND);
        scene.add(Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0, mirror()));
        scene.add(Sphere::new(Vec3::new(0.0, 0.0, 5.0), 1.0, mirror()));
        scene
    }

    fn forward_ray() -> Ray {
        Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0))
    }

    #[test]
    fn test_bounce_limit_counts_hits() {
        let scene = mirror_cavity();

        for max_bounces in [0, 1, 5, 64] {
            let mut stats = TraceStats::default();
            let color = trace_ray(&forward_ray(), &scene, Vec3::ZERO, 0, max_bounces, &mut stats);

            assert_eq!(stats.hits, u64::from(max_bounces) + 1);
            assert_eq!(stats.reflection_rays, u64::from(max_bounces) + 1);
            // Full reflectivity: everything comes from the terminating background
            assert!((color - BACKGROUND).length() < 1e-6, "color = {:?}", color);
        }
    }

    #[test]
    fn test_depth_past_limit_returns_background() {
        let scene = mirror_cavity();
        let mut stats = TraceStats::default();

        let color = trace_ray(&forward_ray(), &scene, Vec3::ZERO, 4, 3, &mut stats);
        assert_eq!(color, BACKGROUND);
        assert_eq!(stats.hits, 0);
    }

    #[test]
    fn test_miss_returns_background() {
        let scene = Scene::new(BACKGROUND);
        let mut stats = TraceStats::default();

        let color = trace_ray(&forward_ray(), &scene, Vec3::ZERO, 0, 4, &mut stats);
        assert_eq!(color, BACKGROUND);
    }

    #[test]
    fn test_reflection_blend() {
        // Half-mirror floor seen from above; the reflection escapes to the sky
        let mut scene = Scene::new(BACKGROUND).with_ambient(0.4);
        let material = Material::diffuse(1.0, Color::new(1.0, 0.0, 0.0)).with_reflectivity(0.5);
        scene.add(Triangle::new(
            Vec3::new(-10.0, -1.0, 10.0),
            Vec3::new(10.0, -1.0, 10.0),
            Vec3::new(0.0, -1.0, -10.0),
            material,
        ));
        let ray = Ray::towards(Vec3::ZERO, Vec3::new(0.0, -1.0, -1.0));
        let mut stats = TraceStats::default();

        let color = trace_ray(&ray, &scene, Vec3::ZERO, 0, 4, &mut stats);

        // Ambient only (no lights): shaded = (0.4, 0, 0)
        let expected = 0.5 * Color::new(0.4, 0.0, 0.0) + 0.5 * BACKGROUND;
        assert!((color - expected).length() < 1e-5, "color = {:?}", color);
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.reflection_rays, 1);
    }

    #[test]
    fn test_primary_shading_is_clamped() {
        // Bright light at the eye: the local color is 0.4 + 5.0 per channel
        let mut scene = Scene::new(Color::ZERO).with_ambient(0.4);
        scene.add(Sphere::new(
            Vec3::new(0.0, 0.0, -5.0),
            1.0,
            Material::diffuse(1.0, Color::ONE),
        ));
        scene.add_light(Light::point(Vec3::ZERO, Color::splat(5.0)));
        let mut stats = TraceStats::default();

        let color = trace_ray(&forward_ray(), &scene, Vec3::ZERO, 0, 4, &mut stats);
        assert_eq!(color, Color::ONE);

        // The same hit seen from a reflection bounce keeps its radiance
        let mut stats = TraceStats::default();
        let deeper = trace_ray(&forward_ray(), &scene, Vec3::ZERO, 1, 4, &mut stats);
        assert!((deeper - Color::splat(5.4)).length() < 1e-4, "deeper = {:?}", deeper);
    }

    #[test]
    fn test_reflection_carries_unclamped_radiance() {
        // A bright matte sphere seen in a perfect mirror keeps its radiance
        let mut scene = Scene::new(Color::ZERO).with_ambient(0.4);
        scene.add(Sphere::new(
            Vec3::new(0.0, 0.0, 5.0),
            1.0,
            Material::diffuse(1.0, Color::ONE),
        ));
        scene.add(Triangle::new(
            Vec3::new(-10.0, -10.0, -5.0),
            Vec3::new(10.0, -10.0, -5.0),
            Vec3::new(0.0, 10.0, -5.0),
            Material::default().with_reflectivity(1.0),
        ));
        scene.add_light(Light::point(Vec3::new(0.0, 0.0, 0.0), Color::splat(4.0)));
        let mut stats = TraceStats::default();

        let color = trace_ray(&forward_ray(), &scene, Vec3::ZERO, 0, 2, &mut stats);
        // Mirror shading is clamped, the reflected sphere is not: 0.4 + 4.0
        assert!((color - Color::splat(4.4)).length() < 1e-4, "color = {:?}", color);
    }

    #[test]
    fn test_binary_mode() {
        let mut scene = Scene::new(BACKGROUND);
        scene.add(Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0, mirror()));
        scene.add_light(Light::point(Vec3::new(0.0, 5.0, 0.0), Color::ONE));
        let mut stats = TraceStats::default();

        assert_eq!(trace_binary(&forward_ray(), &scene, &mut stats), HIT_COLOR);

        let away = Ray::new(Vec3::ZERO, Vec3::Y);
        assert_eq!(trace_binary(&away, &scene, &mut stats), BACKGROUND);

        // No shading work in binary mode
        assert_eq!(stats.shadow_rays, 0);
        assert_eq!(stats.reflection_rays, 0);
        assert_eq!(stats.hits, 1);
    }

    #[test]
    fn test_ray_color_dispatch() {
        let scene = mirror_cavity();
        let mut stats = TraceStats::default();

        let binary = RenderConfig {
            mode: RenderMode::Binary,
            max_bounces: 3,
        };
        assert_eq!(ray_color(&forward_ray(), &scene, Vec3::ZERO, &binary, &mut stats), HIT_COLOR);

        let phong = RenderConfig {
            mode: RenderMode::Phong,
            max_bounces: 3,
        };
        let mut stats = TraceStats::default();
        ray_color(&forward_ray(), &scene, Vec3::ZERO, &phong, &mut stats);
        assert_eq!(stats.primary_rays, 1);
        assert_eq!(stats.hits, 4);
        assert_eq!(stats.total_rays(), 1 + 4);
    }
}
