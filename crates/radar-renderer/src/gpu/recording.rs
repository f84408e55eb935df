//! Software backend that validates WGSL and records every GPU call.
//!
//! Used by tests and by hosts that want to dry-run the layer lifecycle
//! without an adapter. Objects are tracked by id so leaks are observable.

use std::collections::BTreeSet;

use super::device::{DrawCall, DrawTarget, GpuDevice};
use super::types::{BufferUsage, IndexFormat, ShaderStage};
use super::uniforms::SphereUniforms;
use super::validation;

/// A GPU call observed by [`RecordingDevice`] or [`RecordingTarget`].
#[derive(Debug, Clone, PartialEq)]
pub enum GpuCall {
    CompileShader {
        stage: ShaderStage,
        ok: bool,
    },
    LinkProgram {
        ok: bool,
    },
    ReleaseShader {
        id: u64,
    },
    ReleaseProgram {
        id: u64,
    },
    CreateBuffer {
        id: u64,
        usage: BufferUsage,
        label: String,
        len: usize,
    },
    ReleaseBuffer {
        id: u64,
    },
}

#[derive(Debug)]
pub struct RecordedShader {
    pub id: u64,
    pub stage: ShaderStage,
    module: naga::Module,
}

#[derive(Debug, PartialEq, Eq)]
pub struct RecordedProgram {
    pub id: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedBuffer {
    pub id: u64,
    pub usage: BufferUsage,
    pub contents: Vec<u8>,
}

/// Attach-time backend that keeps a log and a live-object census.
#[derive(Debug, Default)]
pub struct RecordingDevice {
    next_id: u64,
    live_shaders: BTreeSet<u64>,
    live_programs: BTreeSet<u64>,
    live_buffers: BTreeSet<u64>,
    calls: Vec<GpuCall>,
}

impl RecordingDevice {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[GpuCall] {
        &self.calls
    }

    pub fn live_shaders(&self) -> usize {
        self.live_shaders.len()
    }

    pub fn live_programs(&self) -> usize {
        self.live_programs.len()
    }

    pub fn live_buffers(&self) -> usize {
        self.live_buffers.len()
    }

    /// True when every created object has been released.
    pub fn is_clean(&self) -> bool {
        self.live_shaders.is_empty()
            && self.live_programs.is_empty()
            && self.live_buffers.is_empty()
    }

    /// Number of buffers ever created.
    pub fn buffers_created(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, GpuCall::CreateBuffer { .. }))
            .count()
    }

    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

impl GpuDevice for RecordingDevice {
    type Shader = RecordedShader;
    type Program = RecordedProgram;
    type Buffer = RecordedBuffer;

    fn compile_shader(
        &mut self,
        stage: ShaderStage,
        source: &str,
    ) -> Result<RecordedShader, String> {
        let result = validation::compile_wgsl(source);
        self.calls.push(GpuCall::CompileShader {
            stage,
            ok: result.is_ok(),
        });
        let module = result?;
        let id = self.next_id();
        self.live_shaders.insert(id);
        Ok(RecordedShader { id, stage, module })
    }

    fn link_program(
        &mut self,
        vertex: &RecordedShader,
        fragment: &RecordedShader,
    ) -> Result<RecordedProgram, String> {
        let result = validation::check_interface(&vertex.module, &fragment.module);
        self.calls.push(GpuCall::LinkProgram { ok: result.is_ok() });
        result?;
        let id = self.next_id();
        self.live_programs.insert(id);
        Ok(RecordedProgram { id })
    }

    fn release_shader(&mut self, shader: RecordedShader) {
        self.live_shaders.remove(&shader.id);
        self.calls.push(GpuCall::ReleaseShader { id: shader.id });
    }

    fn release_program(&mut self, program: RecordedProgram) {
        self.live_programs.remove(&program.id);
        self.calls.push(GpuCall::ReleaseProgram { id: program.id });
    }

    fn create_buffer(
        &mut self,
        usage: BufferUsage,
        label: &str,
        contents: &[u8],
    ) -> RecordedBuffer {
        let id = self.next_id();
        self.live_buffers.insert(id);
        self.calls.push(GpuCall::CreateBuffer {
            id,
            usage,
            label: label.to_string(),
            len: contents.len(),
        });
        RecordedBuffer {
            id,
            usage,
            contents: contents.to_vec(),
        }
    }

    fn release_buffer(&mut self, buffer: RecordedBuffer) {
        self.live_buffers.remove(&buffer.id);
        self.calls.push(GpuCall::ReleaseBuffer { id: buffer.id });
    }
}

/// One draw observed by [`RecordingTarget`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedDraw {
    pub program: u64,
    pub buffers: [u64; 3],
    pub index_count: u32,
    pub index_format: IndexFormat,
    pub uniforms: SphereUniforms,
}

/// Frame-time backend that records draws instead of issuing them.
#[derive(Debug, Default)]
pub struct RecordingTarget {
    pub draws: Vec<RecordedDraw>,
}

impl RecordingTarget {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DrawTarget<RecordingDevice> for RecordingTarget {
    fn draw_indexed(&mut self, call: DrawCall<'_, RecordingDevice>) {
        self.draws.push(RecordedDraw {
            program: call.program.id,
            buffers: [call.mesh.positions.id, call.mesh.uvs.id, call.mesh.indices.id],
            index_count: call.mesh.index_count,
            index_format: call.mesh.index_format,
            uniforms: call.uniforms,
        });
    }
}
