//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use crate::errors::ConfigError;
use crate::schema::{LogLevel, RadarConfig};
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_radar_sphere_config.toml"));
    assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[layer]
offset_meters = 20000.0

[logging]
level = "warn"
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.layer.offset_meters, 20_000.0);
    assert_eq!(config.logging.level, LogLevel::Warn);
    // Defaults preserved
    assert_eq!(config.layer.opacity, 0.75);
    assert_eq!(config.layer.id, "radar-sphere");
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let result = load_from_path(&path);
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn load_out_of_range_values_are_clamped() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[layer]
opacity = 4.0
offset_meters = -100.0

[layer.resolution]
lat_segments = 0
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.layer.opacity, 1.0);
    assert_eq!(config.layer.offset_meters, 0.0);
    assert_eq!(config.layer.resolution.lat_segments, 1);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("radar-sphere").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config, RadarConfig::default());
}

#[test]
fn default_config_toml_is_valid() {
    use super::template::default_config_toml;

    let config: RadarConfig = toml::from_str(default_config_toml()).unwrap();
    assert_eq!(config.layer.id, "radar-sphere");
}

#[test]
fn default_config_path_is_reasonable() {
    // This may not work in all CI environments, but should work locally
    if let Ok(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("radar-sphere"));
        assert!(path_str.ends_with("config.toml"));
    }
}
