//! Uniform block shared by both stages of the radar sphere program.

use crate::sphere::matrix::Mat4;

/// GPU-side uniform buffer matching the WGSL `SphereUniforms` struct.
///
/// Layout: mat4 + 4 × f32 = 80 bytes, 16-byte aligned (wgpu requirement).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SphereUniforms {
    /// Host camera transform (column-major).
    pub transform: Mat4,
    /// Radar shell radius in meters.
    pub radius: f32,
    /// Alpha multiplier for the sampled radar texel.
    pub opacity: f32,
    /// Padding to reach 80 bytes.
    pub _padding: [f32; 2],
}

impl SphereUniforms {
    pub fn new(transform: Mat4, radius: f32, opacity: f32) -> Self {
        Self {
            transform,
            radius,
            opacity,
            _padding: [0.0; 2],
        }
    }

    pub const SIZE: u64 = std::mem::size_of::<Self>() as u64;
}
