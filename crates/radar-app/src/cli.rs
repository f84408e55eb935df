use std::path::PathBuf;

use clap::Parser;
use radar_config::RadarConfig;

/// Radar sphere: render radar imagery on a shell above the globe, headless.
#[derive(Parser, Debug)]
#[command(name = "radar-sphere", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// PNG file the rendered frame is written to.
    #[arg(short = 'o', long, default_value = "radar-sphere.png")]
    pub output: PathBuf,

    /// Frame width in pixels.
    #[arg(long, default_value_t = 1024)]
    pub width: u32,

    /// Frame height in pixels.
    #[arg(long, default_value_t = 768)]
    pub height: u32,

    /// Height of the radar shell above the globe, in meters.
    #[arg(long)]
    pub offset_meters: Option<f64>,

    /// Radar opacity (0.0-1.0).
    #[arg(long)]
    pub opacity: Option<f64>,

    /// Camera yaw around the polar axis, in degrees.
    #[arg(long, default_value_t = 0.0)]
    pub yaw_degrees: f32,

    /// Print the effective config as JSON and exit.
    #[arg(long)]
    pub print_config: bool,
}

impl Args {
    /// Apply command-line layer overrides on top of a loaded config.
    pub fn apply_overrides(&self, config: RadarConfig) -> RadarConfig {
        let mut config = config;
        if let Some(offset) = self.offset_meters {
            config.layer.offset_meters = offset;
        }
        if let Some(opacity) = self.opacity {
            config.layer.opacity = opacity;
        }
        config.sanitized()
    }
}

pub fn parse() -> Args {
    Args::parse()
}
