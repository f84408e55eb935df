//! The two GPU capabilities the radar layer depends on.
//!
//! [`GpuDevice`] is used once, at attach time, to build the program and
//! upload the mesh. [`DrawTarget`] is used every frame to issue the draw.

use super::types::{BufferUsage, IndexFormat, ShaderStage};
use super::uniforms::SphereUniforms;

/// Attach-time GPU capability: shader compile/link and buffer upload.
pub trait GpuDevice {
    type Shader;
    type Program;
    type Buffer;

    /// Compile one stage. The error string is the compiler log.
    fn compile_shader(&mut self, stage: ShaderStage, source: &str) -> Result<Self::Shader, String>;

    /// Link two compiled stages. The error string is the linker log.
    ///
    /// Stages stay owned by the caller; a program does not borrow them.
    fn link_program(
        &mut self,
        vertex: &Self::Shader,
        fragment: &Self::Shader,
    ) -> Result<Self::Program, String>;

    fn release_shader(&mut self, shader: Self::Shader);

    fn release_program(&mut self, program: Self::Program);

    /// Upload an immutable buffer.
    fn create_buffer(&mut self, usage: BufferUsage, label: &str, contents: &[u8]) -> Self::Buffer;

    fn release_buffer(&mut self, buffer: Self::Buffer);
}

/// The three uploaded mesh streams.
pub struct MeshBuffers<D: GpuDevice> {
    pub positions: D::Buffer,
    pub uvs: D::Buffer,
    pub indices: D::Buffer,
    pub index_count: u32,
    pub index_format: IndexFormat,
}

impl<D: GpuDevice> MeshBuffers<D> {
    pub(crate) fn release(self, device: &mut D) {
        device.release_buffer(self.positions);
        device.release_buffer(self.uvs);
        device.release_buffer(self.indices);
    }
}

/// One indexed triangle-list draw of the radar sphere.
pub struct DrawCall<'a, D: GpuDevice> {
    pub program: &'a D::Program,
    pub mesh: &'a MeshBuffers<D>,
    pub uniforms: SphereUniforms,
}

/// Frame-time GPU capability.
///
/// Implementations bind whatever radar texture the host supplied for the
/// frame; the layer never selects textures.
pub trait DrawTarget<D: GpuDevice> {
    fn draw_indexed(&mut self, call: DrawCall<'_, D>);
}
