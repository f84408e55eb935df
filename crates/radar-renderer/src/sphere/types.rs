//! Sphere mesh storage and vertex buffer layouts.

pub use radar_config::SphereResolution;

/// A single vertex of the sphere mesh, as yielded by [`SphereMesh::vertices`].
///
/// Layout: position(vec3) + uv(vec2) = 20 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SphereVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

/// UV-parameterized unit sphere, stored as three parallel streams.
///
/// Positions and texture coordinates are kept in separate arrays because
/// they are uploaded as separate GPU buffers.
#[derive(Debug, Clone, PartialEq)]
pub struct SphereMesh {
    pub(crate) resolution: SphereResolution,
    pub(crate) positions: Vec<[f32; 3]>,
    pub(crate) uvs: Vec<[f32; 2]>,
    pub(crate) indices: Vec<u32>,
}

impl SphereMesh {
    /// wgpu layout for the position stream (vertex buffer slot 0).
    pub const POSITION_LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<[f32; 3]>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x3,
            offset: 0,
            shader_location: 0,
        }],
    };

    /// wgpu layout for the texture coordinate stream (vertex buffer slot 1).
    pub const UV_LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<[f32; 2]>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x2,
            offset: 0,
            shader_location: 1,
        }],
    };

    pub fn resolution(&self) -> SphereResolution {
        self.resolution
    }

    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    pub fn uvs(&self) -> &[[f32; 2]] {
        &self.uvs
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Iterate position/uv pairs in vertex order.
    pub fn vertices(&self) -> impl Iterator<Item = SphereVertex> + '_ {
        self.positions
            .iter()
            .zip(&self.uvs)
            .map(|(&position, &uv)| SphereVertex { position, uv })
    }

    /// Iterate triangles as index triples.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices
            .chunks_exact(3)
            .map(|tri| [tri[0], tri[1], tri[2]])
    }
}
