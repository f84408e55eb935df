//! UV sphere mesh generation.
//!
//! Rows run from the north pole (v = 0) to the south pole (v = 1); columns
//! wrap longitude with a duplicated seam column so u spans the full [0, 1]
//! range. The first and last rows collapse onto the poles, which leaves
//! zero-area triangles there. They rasterize to nothing.

use std::f64::consts::PI;

use radar_config::schema::MAX_SEGMENTS;

use super::types::{SphereMesh, SphereResolution};

/// Generate an indexed UV sphere of radius 1.0 centered at the origin.
///
/// Segment counts are clamped to `1..=MAX_SEGMENTS`. North pole is (0, 1, 0).
/// Produces `(lat + 1) * (lon + 1)` vertices and `lat * lon * 6` indices.
pub fn generate(lat_segments: u32, lon_segments: u32) -> SphereMesh {
    generate_resolution(SphereResolution::new(lat_segments, lon_segments))
}

/// Generate a sphere mesh from a resolution preset or config value.
pub fn generate_resolution(resolution: SphereResolution) -> SphereMesh {
    let resolution = SphereResolution::new(
        resolution.lat_segments.min(MAX_SEGMENTS),
        resolution.lon_segments.min(MAX_SEGMENTS),
    );
    let n_lat = resolution.lat_segments;
    let n_lon = resolution.lon_segments;

    let mut positions = Vec::with_capacity(resolution.vertex_count());
    let mut uvs = Vec::with_capacity(resolution.vertex_count());

    for i in 0..=n_lat {
        let v = i as f64 / n_lat as f64;
        let theta = v * PI;
        let (sin_theta, cos_theta) = theta.sin_cos();

        for j in 0..=n_lon {
            let u = j as f64 / n_lon as f64;
            let phi = u * 2.0 * PI;
            let (sin_phi, cos_phi) = phi.sin_cos();

            positions.push([
                (cos_phi * sin_theta) as f32,
                cos_theta as f32,
                (sin_phi * sin_theta) as f32,
            ]);
            uvs.push([u as f32, v as f32]);
        }
    }

    let mut indices = Vec::with_capacity(resolution.index_count());
    let row = n_lon + 1;
    for i in 0..n_lat {
        for j in 0..n_lon {
            let first = i * row + j;
            let second = first + row;

            indices.extend_from_slice(&[first, second, first + 1]);
            indices.extend_from_slice(&[second, second + 1, first + 1]);
        }
    }

    SphereMesh {
        resolution,
        positions,
        uvs,
        indices,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn norm(p: &[f32; 3]) -> f64 {
        let [x, y, z] = p.map(f64::from);
        (x * x + y * y + z * z).sqrt()
    }

    fn assert_mesh_properties(lat: u32, lon: u32) {
        let mesh = generate(lat, lon);
        let vertex_count = ((lat + 1) * (lon + 1)) as usize;

        assert_eq!(mesh.vertex_count(), vertex_count, "{lat}x{lon}");
        assert_eq!(mesh.uvs().len(), vertex_count, "{lat}x{lon}");
        assert_eq!(mesh.index_count(), (6 * lat * lon) as usize, "{lat}x{lon}");

        for (k, p) in mesh.positions().iter().enumerate() {
            let n = norm(p);
            assert!((n - 1.0).abs() < 1e-6, "{lat}x{lon} vertex {k}: norm {n}");
        }
        for uv in mesh.uvs() {
            assert!((0.0..=1.0).contains(&uv[0]) && (0.0..=1.0).contains(&uv[1]));
        }
        for tri in mesh.triangles() {
            assert!(tri[0] != tri[1] && tri[1] != tri[2] && tri[0] != tri[2]);
            assert!(tri.iter().all(|&i| (i as usize) < vertex_count));
        }
    }

    #[test]
    fn reference_resolution_counts() {
        let mesh = generate(32, 32);
        assert_eq!(mesh.vertex_count(), 1089);
        assert_eq!(mesh.index_count(), 6144);
    }

    #[test]
    fn single_segment_sphere() {
        let mesh = generate(1, 1);
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.indices(), &[0, 2, 1, 2, 3, 1]);
    }

    #[test]
    fn zero_segments_raised_to_one() {
        assert_eq!(generate(0, 0), generate(1, 1));
    }

    #[test]
    fn oversized_segments_clamped_to_max() {
        let mesh = generate(u32::MAX, 3);
        assert_eq!(mesh.resolution().lat_segments, MAX_SEGMENTS);
        assert_eq!(mesh.vertex_count(), (MAX_SEGMENTS as usize + 1) * 4);
        let last = *mesh.indices().iter().max().unwrap() as usize;
        assert_eq!(last, mesh.vertex_count() - 1);
    }

    #[test]
    fn first_vertex_is_north_pole() {
        let mesh = generate(4, 8);
        let p = mesh.positions()[0];
        assert!(p[0].abs() < 1e-6);
        assert!((p[1] - 1.0).abs() < 1e-6);
        assert!(p[2].abs() < 1e-6);
    }

    #[test]
    fn last_row_is_south_pole() {
        let mesh = generate(4, 8);
        for p in &mesh.positions()[4 * 9..] {
            assert!((p[1] + 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn pole_rows_have_v_zero_and_one() {
        let (lat, lon) = (6, 10);
        let mesh = generate(lat, lon);
        let row = (lon + 1) as usize;
        for j in 0..row {
            assert_eq!(mesh.uvs()[j][1], 0.0);
            assert_eq!(mesh.uvs()[lat as usize * row + j][1], 1.0);
        }
    }

    #[test]
    fn seam_column_spans_full_u_range() {
        let mesh = generate(4, 8);
        assert_eq!(mesh.uvs()[0][0], 0.0);
        assert_eq!(mesh.uvs()[8][0], 1.0);
        // Seam vertices coincide in space
        let a = mesh.positions()[9];
        let b = mesh.positions()[9 + 8];
        for k in 0..3 {
            assert!((a[k] - b[k]).abs() < 1e-6);
        }
    }

    #[test]
    fn equator_point_for_quarter_turn() {
        // i = lat/2 -> theta = pi/2, j = lon/4 -> phi = pi/2 -> (0, 0, 1)
        let mesh = generate(4, 8);
        let p = mesh.positions()[2 * 9 + 2];
        assert!(p[0].abs() < 1e-6);
        assert!(p[1].abs() < 1e-6);
        assert!((p[2] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn generation_is_deterministic() {
        let a = generate(17, 23);
        let b = generate(17, 23);
        assert_eq!(a, b);
        let bits = |m: &SphereMesh| -> Vec<u32> {
            m.positions().iter().flatten().map(|f| f.to_bits()).collect()
        };
        let (a_bits, b_bits) = (bits(&a), bits(&b));
        assert_eq!(a_bits, b_bits);
    }

    #[test]
    fn presets_match_closed_form_counts() {
        for res in [
            SphereResolution::LOW,
            SphereResolution::REFERENCE,
            SphereResolution::HIGH,
        ] {
            let mesh = generate_resolution(res);
            assert_eq!(mesh.vertex_count(), res.vertex_count());
            assert_eq!(mesh.index_count(), res.index_count());
            assert_eq!(mesh.resolution(), res);
        }
    }

    #[test]
    fn small_resolutions_hold_invariants() {
        for lat in 1..=6 {
            for lon in 1..=6 {
                assert_mesh_properties(lat, lon);
            }
        }
    }

    #[test]
    fn random_resolutions_hold_invariants() {
        let mut rng = rand::thread_rng();
        for _ in 0..24 {
            let lat = rng.gen_range(1..=96);
            let lon = rng.gen_range(1..=96);
            assert_mesh_properties(lat, lon);
        }
    }
}
