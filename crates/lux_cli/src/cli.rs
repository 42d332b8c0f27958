use clap::{Parser, ValueEnum};
use log::LevelFilter;
use lux_core::{PpmEncoding, RenderMode};

/// Log levels selectable on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Render mode override
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ModeArg {
    Binary,
    Phong,
}

impl From<ModeArg> for RenderMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Binary => RenderMode::Binary,
            ModeArg::Phong => RenderMode::Phong,
        }
    }
}

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "lux")]
#[command(about = "Whitted-style ray tracer with Blinn-Phong shading")]
pub struct Args {
    /// Scene description (JSON)
    pub scene: String,

    /// Output image path (PPM)
    #[arg(short, long, default_value = "output.ppm")]
    pub output: String,

    /// Override the image width from the scene file
    #[arg(long)]
    pub width: Option<u32>,

    /// Override the image height from the scene file
    #[arg(long)]
    pub height: Option<u32>,

    /// Override the bounce limit from the scene file
    #[arg(long)]
    pub bounces: Option<u32>,

    /// Override the render mode from the scene file
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Write a plain-text (P3) pixmap instead of binary (P6)
    #[arg(long)]
    pub ascii: bool,

    /// Set the logging level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

impl Args {
    pub fn encoding(&self) -> PpmEncoding {
        if self.ascii {
            PpmEncoding::Ascii
        } else {
            PpmEncoding::Binary
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["lux", "scene.json"]).unwrap();
        assert_eq!(args.scene, "scene.json");
        assert_eq!(args.output, "output.ppm");
        assert!(args.width.is_none());
        assert!(args.mode.is_none());
        assert_eq!(args.encoding(), PpmEncoding::Binary);
    }

    #[test]
    fn test_overrides() {
        let args = Args::try_parse_from([
            "lux", "scene.json", "-o", "out.ppm", "--width", "320", "--height", "200",
            "--bounces", "2", "--mode", "binary", "--ascii", "--log-level", "debug",
        ])
        .unwrap();

        assert_eq!(args.output, "out.ppm");
        assert_eq!(args.width, Some(320));
        assert_eq!(args.height, Some(200));
        assert_eq!(args.bounces, Some(2));
        assert_eq!(RenderMode::from(args.mode.unwrap()), RenderMode::Binary);
        assert_eq!(args.encoding(), PpmEncoding::Ascii);
        assert_eq!(LevelFilter::from(args.log_level), LevelFilter::Debug);
    }

    #[test]
    fn test_scene_is_required() {
        assert!(Args::try_parse_from(["lux"]).is_err());
    }
}
