//! Layer configuration validation (offset, opacity, id, tessellation).

use crate::schema::{RadarConfig, MAX_SEGMENTS};

use super::helpers::{validate_min_f64, validate_range, validate_range_f64};

/// Validate offset, opacity and id.
pub(crate) fn validate_layer(errors: &mut Vec<String>, config: &RadarConfig) {
    validate_min_f64(
        errors,
        "layer.offset_meters",
        config.layer.offset_meters,
        0.0,
    );
    validate_range_f64(errors, "layer.opacity", config.layer.opacity, 0.0, 1.0);

    if config.layer.id.trim().is_empty() {
        errors.push("layer.id must not be empty".into());
    }
}

/// Validate the sphere tessellation.
pub(crate) fn validate_resolution(errors: &mut Vec<String>, config: &RadarConfig) {
    validate_range(
        errors,
        "layer.resolution.lat_segments",
        config.layer.resolution.lat_segments,
        1,
        MAX_SEGMENTS,
    );
    validate_range(
        errors,
        "layer.resolution.lon_segments",
        config.layer.resolution.lon_segments,
        1,
        MAX_SEGMENTS,
    );
}
