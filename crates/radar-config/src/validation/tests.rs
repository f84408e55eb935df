//! Tests for the full validation pipeline.

use super::*;
use crate::schema::*;

#[test]
fn default_config_validates() {
    let config = RadarConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn zero_offset_is_valid() {
    let mut config = RadarConfig::default();
    config.layer.offset_meters = 0.0;
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_negative_offset() {
    let mut config = RadarConfig::default();
    config.layer.offset_meters = -1.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("layer.offset_meters"));
}

#[test]
fn catches_infinite_offset() {
    let mut config = RadarConfig::default();
    config.layer.offset_meters = f64::INFINITY;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("layer.offset_meters"));
}

#[test]
fn catches_opacity_over_one() {
    let mut config = RadarConfig::default();
    config.layer.opacity = 1.5;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("layer.opacity"));
}

#[test]
fn catches_opacity_nan() {
    let mut config = RadarConfig::default();
    config.layer.opacity = f64::NAN;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("layer.opacity"));
}

#[test]
fn catches_empty_id() {
    let mut config = RadarConfig::default();
    config.layer.id = "  ".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("layer.id"));
}

#[test]
fn catches_zero_segments() {
    let mut config = RadarConfig::default();
    config.layer.resolution.lat_segments = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("layer.resolution.lat_segments"));
}

#[test]
fn catches_too_many_segments() {
    let mut config = RadarConfig::default();
    config.layer.resolution.lon_segments = MAX_SEGMENTS + 1;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("layer.resolution.lon_segments"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = RadarConfig::default();
    config.layer.opacity = -0.5;
    config.layer.resolution.lat_segments = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("layer.opacity"));
    assert!(err.contains("layer.resolution.lat_segments"));
    assert!(err.contains("; "));
}
