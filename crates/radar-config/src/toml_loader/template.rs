//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# Radar sphere layer configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[layer]
# id = "radar-sphere"
# offset_meters = 50000.0   # height above the globe surface, >= 0
# opacity = 0.75            # 0.0-1.0, multiplies the radar alpha

[layer.resolution]
# lat_segments = 32         # 1-1024
# lon_segments = 32         # 1-1024

[logging]
# level = "info"            # trace, debug, info, warn, error
"##
}
