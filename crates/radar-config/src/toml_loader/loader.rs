//! Core TOML config loading: read from path or platform default.

use crate::errors::ConfigError;
use crate::schema::RadarConfig;
use crate::validation;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};

/// Load config from a specific TOML file path.
///
/// Deserializes the file using serde defaults for any missing fields.
/// After loading, the config is validated; if validation fails, a warning
/// is logged and out-of-range values are clamped.
pub fn load_from_path(path: &Path) -> Result<RadarConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ConfigError::FileNotFound(path.to_path_buf()),
        _ => ConfigError::ParseError(format!("failed to read {}: {e}", path.display())),
    })?;

    let config: RadarConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    let config = match validation::validate(&config) {
        Ok(()) => config,
        Err(e) => {
            warn!("config validation warning: {e}; clamping to valid ranges");
            config.sanitized()
        }
    };

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/radar-sphere/config.toml`
/// On Linux: `~/.config/radar-sphere/config.toml`
///
/// If the file does not exist, creates a default config file and returns defaults.
pub fn load_default() -> Result<RadarConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            create_default_config(&path)?;
            Ok(RadarConfig::default())
        }
        Err(e) => Err(e),
    }
}
