//! 4×4 matrix math for camera transforms.
//!
//! Column-major layout matching WGSL `mat4x4<f32>`. Projections target the
//! wgpu clip volume (depth 0..1).

/// 4×4 column-major matrix stored as `[f32; 16]`.
pub type Mat4 = [f32; 16];

/// Identity matrix.
pub const IDENTITY: Mat4 = [
    1.0, 0.0, 0.0, 0.0, // col 0
    0.0, 1.0, 0.0, 0.0, // col 1
    0.0, 0.0, 1.0, 0.0, // col 2
    0.0, 0.0, 0.0, 1.0, // col 3
];

/// Right-handed perspective projection into wgpu clip space.
///
/// `fov_y` is vertical field of view in radians.
/// `near` and `far` are the clip planes (must be > 0).
pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    let f = 1.0 / (fov_y * 0.5).tan();
    let range_inv = 1.0 / (near - far);

    [
        f / aspect,
        0.0,
        0.0,
        0.0,
        0.0,
        f,
        0.0,
        0.0,
        0.0,
        0.0,
        far * range_inv,
        -1.0,
        0.0,
        0.0,
        far * near * range_inv,
        0.0,
    ]
}

/// Right-handed view matrix looking from `eye` towards `target`.
pub fn look_at(eye: [f32; 3], target: [f32; 3], up: [f32; 3]) -> Mat4 {
    let f = normalize(sub(target, eye));
    let s = normalize(cross(f, up));
    let u = cross(s, f);

    [
        s[0],
        u[0],
        -f[0],
        0.0,
        s[1],
        u[1],
        -f[1],
        0.0,
        s[2],
        u[2],
        -f[2],
        0.0,
        -dot(s, eye),
        -dot(u, eye),
        dot(f, eye),
        1.0,
    ]
}

/// Rotation around the Y axis.
pub fn rotate_y(angle: f32) -> Mat4 {
    let c = angle.cos();
    let s = angle.sin();
    [
        c, 0.0, -s, 0.0, 0.0, 1.0, 0.0, 0.0, s, 0.0, c, 0.0, 0.0, 0.0, 0.0, 1.0,
    ]
}

/// Uniform scale matrix.
pub fn scale(s: f32) -> Mat4 {
    [
        s, 0.0, 0.0, 0.0, 0.0, s, 0.0, 0.0, 0.0, 0.0, s, 0.0, 0.0, 0.0, 0.0, 1.0,
    ]
}

/// Multiply two 4×4 column-major matrices: result = a × b.
pub fn mul(a: &Mat4, b: &Mat4) -> Mat4 {
    let mut out = [0.0f32; 16];
    for col in 0..4 {
        for row in 0..4 {
            let mut sum = 0.0;
            for k in 0..4 {
                sum += a[k * 4 + row] * b[col * 4 + k];
            }
            out[col * 4 + row] = sum;
        }
    }
    out
}

/// Transform a point (w = 1) and return the homogeneous result.
pub fn transform_point(m: &Mat4, p: [f32; 3]) -> [f32; 4] {
    let mut out = [0.0f32; 4];
    for (row, slot) in out.iter_mut().enumerate() {
        *slot = m[row] * p[0] + m[4 + row] * p[1] + m[8 + row] * p[2] + m[12 + row];
    }
    out
}

fn sub(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

fn dot(a: [f32; 3], b: [f32; 3]) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

fn cross(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

fn normalize(v: [f32; 3]) -> [f32; 3] {
    let len = dot(v, v).sqrt();
    if len > 0.0 {
        [v[0] / len, v[1] / len, v[2] / len]
    } else {
        v
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: &[f32], b: &[f32], eps: f32) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < eps)
    }

    #[test]
    fn identity_mul_identity() {
        let result = mul(&IDENTITY, &IDENTITY);
        assert!(approx_eq(&result, &IDENTITY, 1e-6));
    }

    #[test]
    fn identity_leaves_point_unchanged() {
        let p = transform_point(&IDENTITY, [6_421_000.0, 0.0, -3.0]);
        assert_eq!(p, [6_421_000.0, 0.0, -3.0, 1.0]);
    }

    #[test]
    fn scale_then_transform() {
        let p = transform_point(&scale(2.0), [1.0, 2.0, 3.0]);
        assert!(approx_eq(&p, &[2.0, 4.0, 6.0, 1.0], 1e-6));
    }

    #[test]
    fn rotate_y_90_degrees() {
        let r = rotate_y(std::f32::consts::FRAC_PI_2);
        // col0 = (cos(90), 0, -sin(90), 0) = (0, 0, -1, 0)
        assert!((r[0] - 0.0).abs() < 1e-5);
        assert!((r[2] - (-1.0)).abs() < 1e-5);
        // col2 = (sin(90), 0, cos(90), 0) = (1, 0, 0, 0)
        assert!((r[8] - 1.0).abs() < 1e-5);
    }

    #[test]
    fn look_at_moves_target_onto_negative_z() {
        let view = look_at([0.0, 0.0, 10.0], [0.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
        let p = transform_point(&view, [0.0, 0.0, 0.0]);
        assert!(approx_eq(&p, &[0.0, 0.0, -10.0, 1.0], 1e-5));
    }

    #[test]
    fn perspective_maps_clip_planes_to_unit_depth() {
        let (near, far) = (1.0, 100.0);
        let p = perspective(std::f32::consts::FRAC_PI_4, 16.0 / 9.0, near, far);

        let n = transform_point(&p, [0.0, 0.0, -near]);
        let f = transform_point(&p, [0.0, 0.0, -far]);
        assert!((n[2] / n[3]).abs() < 1e-5);
        assert!((f[2] / f[3] - 1.0).abs() < 1e-5);
        // p[11] should be -1 (perspective divide)
        assert!((p[11] - (-1.0)).abs() < 1e-6);
    }

    #[test]
    fn perspective_focal_terms() {
        let p = perspective(std::f32::consts::FRAC_PI_4, 16.0 / 9.0, 0.1, 100.0);
        let f = 1.0 / (std::f32::consts::FRAC_PI_4 * 0.5).tan();
        assert!((p[0] - f / (16.0 / 9.0)).abs() < 1e-5);
        assert!((p[5] - f).abs() < 1e-5);
    }
}
