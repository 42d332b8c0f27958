use anyhow::{Context, Result};
use clap::Parser;
use lux_core::{load_scene, write_ppm, SceneDescription, MAX_IMAGE_PIXELS};
use lux_renderer::render_description;

mod cli;
mod logger;

use cli::Args;
use logger::init_logger;

/// Apply command line overrides on top of the loaded scene.
fn apply_overrides(scene: &mut SceneDescription, args: &Args) -> Result<()> {
    if let Some(width) = args.width {
        scene.camera.width = width;
    }
    if let Some(height) = args.height {
        scene.camera.height = height;
    }
    if scene.camera.width == 0 || scene.camera.height == 0 {
        anyhow::bail!(
            "image size must be non-zero, got {}x{}",
            scene.camera.width,
            scene.camera.height
        );
    }
    if scene.camera.pixel_count() > MAX_IMAGE_PIXELS {
        anyhow::bail!(
            "image size {}x{} exceeds {} pixels",
            scene.camera.width,
            scene.camera.height,
            MAX_IMAGE_PIXELS
        );
    }
    if let Some(bounces) = args.bounces {
        scene.max_bounces = bounces;
    }
    if let Some(mode) = args.mode {
        scene.render_mode = mode.into();
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.log_level.into());

    let mut scene = load_scene(&args.scene)
        .with_context(|| format!("Failed to load scene {}", args.scene))?;
    apply_overrides(&mut scene, &args)?;

    let output = render_description(&scene);

    write_ppm(&args.output, output.width, output.height, &output.rgb, args.encoding())
        .with_context(|| format!("Failed to write image {}", args.output))?;

    Ok(())
}
