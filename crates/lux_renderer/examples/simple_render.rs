//! Simple ray tracer example.
//!
//! Renders a small scene with a mirror sphere, a cylinder and a floor and
//! saves it in PPM format.

use lux_core::{write_ppm, Light, Material, PpmEncoding, RenderMode};
use lux_renderer::{render, Camera, Color, Cylinder, RenderConfig, Scene, Sphere, Triangle, Vec3};

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    println!("Lux Ray Tracer - Simple Example");
    println!("===============================");

    let start = std::time::Instant::now();
    let scene = build_scene();
    println!("Scene built in {:?}", start.elapsed());

    // Set up camera
    let mut camera = Camera::new()
        .with_resolution(800, 450)
        .with_position(
            Vec3::new(0.0, 1.0, 4.0),  // look_from
            Vec3::new(0.0, 0.5, -1.0), // look_at
            Vec3::new(0.0, 1.0, 0.0),  // vup
        )
        .with_fov(40.0);
    camera.initialize();

    let config = RenderConfig {
        mode: RenderMode::Phong,
        max_bounces: 6,
    };

    println!(
        "Rendering {}x{} with {} bounces...",
        camera.image_width, camera.image_height, config.max_bounces
    );

    let start = std::time::Instant::now();
    let output = render(&camera, &scene, &config);
    println!("Rendered in {:?} (max radiance {:.3})", start.elapsed(), output.max_value);

    let filename = "output.ppm";
    write_ppm(filename, output.width, output.height, &output.rgb, PpmEncoding::Binary)
        .expect("Failed to save image");
    println!("Saved to {}", filename);
}

fn build_scene() -> Scene {
    let mut scene = Scene::new(Color::new(0.25, 0.25, 0.3));

    let plastic = |color: Color| {
        Material::diffuse(0.9, color).with_specular(0.3, 32.0, Color::ONE)
    };

    // Floor made of two triangles
    let floor = plastic(Color::new(0.6, 0.6, 0.6)).with_reflectivity(0.2);
    let (a, b, c, d) = (
        Vec3::new(-6.0, 0.0, 3.0),
        Vec3::new(6.0, 0.0, 3.0),
        Vec3::new(6.0, 0.0, -8.0),
        Vec3::new(-6.0, 0.0, -8.0),
    );
    scene.add(Triangle::new(a, b, c, floor));
    scene.add(Triangle::new(a, c, d, floor));

    // Mirror sphere in the middle, matte ones on the sides
    scene.add(Sphere::new(
        Vec3::new(0.0, 0.8, -1.5),
        0.8,
        plastic(Color::new(0.9, 0.9, 0.9)).with_reflectivity(0.8),
    ));
    scene.add(Sphere::new(
        Vec3::new(-1.8, 0.5, -1.0),
        0.5,
        plastic(Color::new(0.8, 0.3, 0.3)),
    ));

    // Upright cylinder
    scene.add(Cylinder::new(
        Vec3::new(1.7, 0.0, -1.2),
        Vec3::Y,
        0.35,
        1.4,
        plastic(Color::new(0.3, 0.4, 0.8)),
    ));

    scene.add_light(Light::point(Vec3::new(-3.0, 5.0, 3.0), Color::splat(0.8)));
    scene.add_light(Light::point(Vec3::new(3.0, 4.0, 1.0), Color::splat(0.5)));

    println!("Created {} primitives", scene.len());
    scene
}
