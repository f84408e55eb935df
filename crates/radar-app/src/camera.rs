//! Camera transform for the headless frame: a perspective view of the
//! globe from three radii out, slightly above the equator.

use radar_renderer::sphere::matrix::{self, Mat4};

const FOV_Y_DEGREES: f32 = 45.0;
const EYE_DISTANCE_RADII: f32 = 3.0;
const EYE_ELEVATION_RADII: f32 = 0.8;

/// Combined projection × view × model transform, in meters.
pub fn globe_transform(aspect: f32, sphere_radius: f64, yaw_degrees: f32) -> Mat4 {
    let r = sphere_radius as f32;
    let eye = [0.0, EYE_ELEVATION_RADII * r, EYE_DISTANCE_RADII * r];

    let projection = matrix::perspective(FOV_Y_DEGREES.to_radians(), aspect, 0.5 * r, 6.0 * r);
    let view = matrix::look_at(eye, [0.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
    let model = matrix::rotate_y(yaw_degrees.to_radians());

    matrix::mul(&projection, &matrix::mul(&view, &model))
}
