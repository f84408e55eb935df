//! Configuration schema types for the radar sphere layer.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the reference layer behavior.

mod layer;
mod logging;

pub use layer::*;
pub use logging::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct RadarConfig {
    pub layer: LayerConfig,
    pub logging: LoggingConfig,
}

impl RadarConfig {
    /// Clamp every field into its valid range, logging each adjustment.
    pub fn sanitized(self) -> Self {
        Self {
            layer: self.layer.sanitized(),
            logging: self.logging,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_reference_layer() {
        let config = RadarConfig::default();
        assert_eq!(config.layer.id, "radar-sphere");
        assert_eq!(config.layer.offset_meters, 50_000.0);
        assert_eq!(config.layer.opacity, 0.75);
        assert_eq!(config.layer.resolution, SphereResolution::REFERENCE);
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: RadarConfig = toml::from_str(
            r#"
[layer]
opacity = 0.5
"#,
        )
        .unwrap();
        assert_eq!(config.layer.opacity, 0.5);
        assert_eq!(config.layer.offset_meters, 50_000.0);
        assert_eq!(config.layer.resolution.lon_segments, 32);
    }

    #[test]
    fn nested_resolution_table_parses() {
        let config: RadarConfig = toml::from_str(
            r#"
[layer.resolution]
lat_segments = 8
lon_segments = 16

[logging]
level = "debug"
"#,
        )
        .unwrap();
        assert_eq!(config.layer.resolution.lat_segments, 8);
        assert_eq!(config.layer.resolution.lon_segments, 16);
        assert_eq!(config.logging.level, LogLevel::Debug);
    }

    #[test]
    fn sanitized_clamps_layer_values() {
        let mut config = RadarConfig::default();
        config.layer.opacity = 3.0;
        config.layer.offset_meters = -10.0;
        let config = config.sanitized();
        assert_eq!(config.layer.opacity, 1.0);
        assert_eq!(config.layer.offset_meters, 0.0);
    }
}
