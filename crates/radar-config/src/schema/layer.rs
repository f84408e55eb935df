//! Radar sphere layer configuration types.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Mean Earth radius used as the globe surface, in meters.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Default height of the radar shell above the globe surface, in meters.
pub const DEFAULT_OFFSET_METERS: f64 = 50_000.0;

/// Default alpha multiplier applied to the radar texture.
pub const DEFAULT_OPACITY: f64 = 0.75;

/// Default host layer id.
pub const DEFAULT_LAYER_ID: &str = "radar-sphere";

/// Upper bound for either tessellation axis.
pub const MAX_SEGMENTS: u32 = 1024;

/// Tessellation density of the UV sphere.
///
/// Vertex and index counts grow with `lat_segments * lon_segments`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(default)]
pub struct SphereResolution {
    /// Latitude bands from pole to pole.
    pub lat_segments: u32,
    /// Longitude slices around the polar axis.
    pub lon_segments: u32,
}

impl SphereResolution {
    pub const LOW: Self = Self {
        lat_segments: 16,
        lon_segments: 16,
    };
    pub const REFERENCE: Self = Self {
        lat_segments: 32,
        lon_segments: 32,
    };
    pub const HIGH: Self = Self {
        lat_segments: 64,
        lon_segments: 64,
    };

    /// Create a resolution, raising zero segment counts to one.
    pub const fn new(lat_segments: u32, lon_segments: u32) -> Self {
        Self {
            lat_segments: if lat_segments == 0 { 1 } else { lat_segments },
            lon_segments: if lon_segments == 0 { 1 } else { lon_segments },
        }
    }

    /// Number of vertices a mesh at this resolution holds.
    pub fn vertex_count(&self) -> usize {
        (self.lat_segments as usize + 1) * (self.lon_segments as usize + 1)
    }

    /// Number of triangle indices a mesh at this resolution holds.
    pub fn index_count(&self) -> usize {
        self.lat_segments as usize * self.lon_segments as usize * 6
    }

    fn sanitized(self) -> Self {
        let lat = self.lat_segments.clamp(1, MAX_SEGMENTS);
        let lon = self.lon_segments.clamp(1, MAX_SEGMENTS);
        if lat != self.lat_segments || lon != self.lon_segments {
            warn!(
                "layer.resolution {}x{} clamped to {lat}x{lon}",
                self.lat_segments, self.lon_segments
            );
        }
        Self {
            lat_segments: lat,
            lon_segments: lon,
        }
    }
}

impl Default for SphereResolution {
    fn default() -> Self {
        Self::REFERENCE
    }
}

/// Caller-supplied construction options; `None` selects the default.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LayerOptions {
    pub offset_meters: Option<f64>,
    pub opacity: Option<f64>,
}

/// Radar sphere layer settings.
///
/// Immutable once handed to a layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LayerConfig {
    /// Host-side layer id.
    pub id: String,
    /// Height of the radar shell above the globe surface, in meters (>= 0).
    pub offset_meters: f64,
    /// Alpha multiplier for the radar texture (0.0-1.0).
    pub opacity: f64,
    pub resolution: SphereResolution,
}

impl Default for LayerConfig {
    fn default() -> Self {
        Self {
            id: DEFAULT_LAYER_ID.into(),
            offset_meters: DEFAULT_OFFSET_METERS,
            opacity: DEFAULT_OPACITY,
            resolution: SphereResolution::REFERENCE,
        }
    }
}

impl LayerConfig {
    /// Build a config from optional caller values.
    ///
    /// Missing values take their defaults; present values are clamped into
    /// range. A zero offset is kept as zero.
    pub fn new(options: LayerOptions) -> Self {
        Self {
            offset_meters: options
                .offset_meters
                .map(clamp_offset)
                .unwrap_or(DEFAULT_OFFSET_METERS),
            opacity: options
                .opacity
                .map(clamp_opacity)
                .unwrap_or(DEFAULT_OPACITY),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_resolution(mut self, resolution: SphereResolution) -> Self {
        self.resolution = resolution;
        self
    }

    /// Radius of the radar shell: Earth radius plus the configured offset.
    pub fn sphere_radius(&self) -> f64 {
        EARTH_RADIUS_METERS + self.offset_meters
    }

    /// Clamp every field into its valid range, logging each adjustment.
    pub fn sanitized(self) -> Self {
        let offset_meters = clamp_offset(self.offset_meters);
        if offset_meters != self.offset_meters {
            warn!(
                "layer.offset_meters = {} clamped to {offset_meters}",
                self.offset_meters
            );
        }

        let opacity = clamp_opacity(self.opacity);
        if opacity != self.opacity {
            warn!("layer.opacity = {} clamped to {opacity}", self.opacity);
        }

        let id = if self.id.trim().is_empty() {
            warn!("layer.id is empty, using {DEFAULT_LAYER_ID:?}");
            DEFAULT_LAYER_ID.to_string()
        } else {
            self.id
        };

        Self {
            id,
            offset_meters,
            opacity,
            resolution: self.resolution.sanitized(),
        }
    }
}

fn clamp_offset(value: f64) -> f64 {
    if value.is_nan() || value.is_infinite() {
        DEFAULT_OFFSET_METERS
    } else {
        value.max(0.0)
    }
}

fn clamp_opacity(value: f64) -> f64 {
    if value.is_nan() {
        DEFAULT_OPACITY
    } else {
        value.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_radius_is_earth_plus_fifty_km() {
        let config = LayerConfig::default();
        assert_eq!(config.sphere_radius(), 6_421_000.0);
    }

    #[test]
    fn options_fill_missing_values_with_defaults() {
        let config = LayerConfig::new(LayerOptions::default());
        assert_eq!(config.offset_meters, DEFAULT_OFFSET_METERS);
        assert_eq!(config.opacity, DEFAULT_OPACITY);
        assert_eq!(config.id, DEFAULT_LAYER_ID);
    }

    #[test]
    fn options_keep_explicit_zero() {
        let config = LayerConfig::new(LayerOptions {
            offset_meters: Some(0.0),
            opacity: Some(0.0),
        });
        assert_eq!(config.offset_meters, 0.0);
        assert_eq!(config.opacity, 0.0);
        assert_eq!(config.sphere_radius(), EARTH_RADIUS_METERS);
    }

    #[test]
    fn options_clamp_out_of_range_values() {
        let config = LayerConfig::new(LayerOptions {
            offset_meters: Some(-5.0),
            opacity: Some(1.5),
        });
        assert_eq!(config.offset_meters, 0.0);
        assert_eq!(config.opacity, 1.0);

        let config = LayerConfig::new(LayerOptions {
            offset_meters: Some(f64::NAN),
            opacity: Some(f64::NAN),
        });
        assert_eq!(config.offset_meters, DEFAULT_OFFSET_METERS);
        assert_eq!(config.opacity, DEFAULT_OPACITY);
    }

    #[test]
    fn resolution_counts_are_closed_form() {
        let res = SphereResolution::REFERENCE;
        assert_eq!(res.vertex_count(), 1089);
        assert_eq!(res.index_count(), 6144);

        let res = SphereResolution::new(3, 5);
        assert_eq!(res.vertex_count(), 4 * 6);
        assert_eq!(res.index_count(), 90);
    }

    #[test]
    fn resolution_new_raises_zero_to_one() {
        let res = SphereResolution::new(0, 0);
        assert_eq!(res.lat_segments, 1);
        assert_eq!(res.lon_segments, 1);
    }

    #[test]
    fn sanitized_restores_empty_id() {
        let config = LayerConfig::default().with_id("  ").sanitized();
        assert_eq!(config.id, DEFAULT_LAYER_ID);
    }

    #[test]
    fn sanitized_clamps_resolution() {
        let config = LayerConfig::default().with_resolution(SphereResolution {
            lat_segments: 0,
            lon_segments: MAX_SEGMENTS + 1,
        });
        let config = config.sanitized();
        assert_eq!(config.resolution.lat_segments, 1);
        assert_eq!(config.resolution.lon_segments, MAX_SEGMENTS);
    }
}
