//! Synthetic equirectangular radar composite.
//!
//! Stands in for the host's tile pipeline: a few storm cells painted with a
//! reflectivity colour ramp on a transparent background.

use image::{Rgba, RgbaImage};

/// A storm cell centred at (`lon`, `lat`) in degrees.
struct Cell {
    lon: f32,
    lat: f32,
    radius_deg: f32,
    peak: f32,
}

impl Cell {
    const fn new(lon: f32, lat: f32, radius_deg: f32, peak: f32) -> Self {
        Self {
            lon,
            lat,
            radius_deg,
            peak,
        }
    }
}

const CELLS: &[Cell] = &[
    Cell::new(-95.0, 35.0, 9.0, 1.0),
    Cell::new(-80.0, 28.0, 5.0, 0.7),
    Cell::new(10.0, 48.0, 7.0, 0.8),
    Cell::new(120.0, 15.0, 12.0, 0.9),
    Cell::new(178.0, -20.0, 6.0, 0.6),
];

/// Intensity below which a pixel stays transparent.
const NOISE_FLOOR: f32 = 0.08;

/// Paint the composite at `width` × `height` (2:1 covers the globe).
pub fn synthetic_composite(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        // Row 0 is the north pole, column 0 is 0° longitude (u = 0).
        let lon = (x as f32 + 0.5) / width as f32 * 360.0;
        let lat = 90.0 - (y as f32 + 0.5) / height as f32 * 180.0;
        reflectivity_color(intensity_at(lon, lat))
    })
}

fn intensity_at(lon: f32, lat: f32) -> f32 {
    CELLS
        .iter()
        .map(|cell| {
            let mut dlon = (lon - cell.lon).rem_euclid(360.0);
            if dlon > 180.0 {
                dlon -= 360.0;
            }
            let dlon = dlon * cell.lat.to_radians().cos();
            let dlat = lat - cell.lat;
            let d2 = (dlon * dlon + dlat * dlat) / (cell.radius_deg * cell.radius_deg);
            cell.peak * (-d2).exp()
        })
        .fold(0.0, f32::max)
}

/// Green → yellow → red ramp; alpha follows intensity.
fn reflectivity_color(intensity: f32) -> Rgba<u8> {
    if intensity < NOISE_FLOOR {
        return Rgba([0, 0, 0, 0]);
    }
    let t = intensity.clamp(0.0, 1.0);
    let (r, g) = if t < 0.5 {
        (t * 2.0, 1.0)
    } else {
        (1.0, 1.0 - (t - 0.5) * 2.0)
    };
    let to_u8 = |v: f32| (v * 255.0).round() as u8;
    Rgba([to_u8(r), to_u8(g), 0, to_u8(0.35 + 0.65 * t)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composite_has_requested_size() {
        let img = synthetic_composite(64, 32);
        assert_eq!(img.dimensions(), (64, 32));
    }

    #[test]
    fn poles_are_transparent() {
        let img = synthetic_composite(128, 64);
        assert_eq!(img.get_pixel(0, 0)[3], 0);
        assert_eq!(img.get_pixel(127, 63)[3], 0);
    }

    #[test]
    fn storm_core_is_opaque_red() {
        let px = reflectivity_color(intensity_at(-95.0 + 360.0, 35.0));
        assert_eq!(px[0], 255);
        assert_eq!(px[1], 0);
        assert_eq!(px[3], 255);
    }

    #[test]
    fn cells_wrap_across_the_date_line() {
        let east = intensity_at(179.0, -20.0);
        let west = intensity_at(-179.0 + 360.0, -20.0);
        assert!(east > NOISE_FLOOR);
        assert!(west > NOISE_FLOOR);
    }

    #[test]
    fn weak_echo_is_green_and_translucent() {
        let px = reflectivity_color(0.1);
        assert!(px[1] == 255 && px[0] < 64);
        assert!(px[3] < 128);
    }
}
