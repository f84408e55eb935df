mod camera;
mod cli;
mod radar_image;
mod render;

use radar_config::RadarConfig;
use radar_renderer::HeadlessGpu;
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::EnvFilter;

use render::FrameRequest;

fn load_config(args: &cli::Args) -> (RadarConfig, Option<String>) {
    let loaded = match &args.config {
        Some(path) => radar_config::toml_loader::load_from_path(path),
        None => radar_config::load_config(),
    };
    match loaded {
        Ok(config) => (config, None),
        Err(e) => (RadarConfig::default(), Some(e.to_string())),
    }
}

fn main() {
    // Parse CLI arguments
    let args = cli::parse();

    // Config first: it carries the default log level
    let (config, load_error) = load_config(&args);
    let config = args.apply_overrides(config);

    // Initialize logging
    let fallback = format!("radar={}", config.logging.level.as_directive());
    let log_directive = args.log_level.as_deref().unwrap_or(&fallback);
    let directive: Directive = log_directive
        .parse()
        .or_else(|_| fallback.parse())
        .unwrap_or_else(|_| LevelFilter::INFO.into());
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .init();

    tracing::info!("radar-sphere v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(e) = load_error {
        tracing::warn!("Config load failed, using defaults: {e}");
    }
    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }

    if args.print_config {
        println!("{}", radar_config::config_to_json(&config));
        return;
    }

    let gpu = match pollster::block_on(HeadlessGpu::new()) {
        Ok(gpu) => gpu,
        Err(e) => {
            tracing::error!("GPU initialization failed: {e}");
            std::process::exit(1);
        }
    };

    let request = FrameRequest {
        width: args.width,
        height: args.height,
        yaw_degrees: args.yaw_degrees,
    };
    let result = render::render_frame(&gpu, &config.layer, &request)
        .and_then(|frame| frame.save(&args.output).map_err(Into::into));

    match result {
        Ok(()) => tracing::info!("Wrote {}", args.output.display()),
        Err(e) => {
            tracing::error!("Render failed: {e}");
            std::process::exit(1);
        }
    }
}
