//! Radar sphere layer configuration.
//!
//! Provides TOML-based configuration for the radar sphere overlay with
//! range validation. All sections use sensible defaults so partial
//! configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use radar_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod errors;
pub mod schema;
pub mod toml_loader;
pub mod validation;

// Re-export core types for convenience
pub use errors::ConfigError;
pub use schema::{
    LayerConfig, LayerOptions, LogLevel, LoggingConfig, RadarConfig, SphereResolution,
    CONFIG_SCHEMA_VERSION, EARTH_RADIUS_METERS,
};

/// Convenience function to load config from the platform default path.
///
/// Loads `config.toml` from the OS config directory, creates a default
/// if none exists, and clamps any out-of-range values.
pub fn load_config() -> Result<RadarConfig, ConfigError> {
    toml_loader::load_default()
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &RadarConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let config = RadarConfig::default();
        let json = config_to_json(&config);
        assert!(json.contains("\"layer\""));
        assert!(json.contains("\"resolution\""));
        assert!(json.contains("\"logging\""));
        assert!(json.contains("\"radar-sphere\""));
    }

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let config = RadarConfig::default();
        let json = config_to_json(&config);
        let parsed: RadarConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.layer.id, "radar-sphere");
        assert_eq!(parsed.layer.offset_meters, 50_000.0);
        assert_eq!(parsed.layer.opacity, 0.75);
        assert_eq!(parsed.layer.resolution.lat_segments, 32);
    }
}
