//! Layer lifecycle states.

use std::fmt;

use crate::gpu::{GpuDevice, MeshBuffers, ShaderError};

/// Observable lifecycle status of a radar layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerStatus {
    Unattached,
    Attaching,
    Ready,
    Failed,
}

impl fmt::Display for LayerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LayerStatus::Unattached => "unattached",
            LayerStatus::Attaching => "attaching",
            LayerStatus::Ready => "ready",
            LayerStatus::Failed => "failed",
        };
        f.write_str(s)
    }
}

/// Everything a successful attach produced. Built whole, released whole.
pub(crate) struct ReadyState<D: GpuDevice> {
    pub(crate) program: D::Program,
    pub(crate) mesh: MeshBuffers<D>,
    pub(crate) vertex_count: usize,
}

pub(crate) enum LayerState<D: GpuDevice> {
    Unattached,
    Attaching,
    Ready(ReadyState<D>),
    Failed(ShaderError),
}

impl<D: GpuDevice> LayerState<D> {
    pub(crate) fn status(&self) -> LayerStatus {
        match self {
            LayerState::Unattached => LayerStatus::Unattached,
            LayerState::Attaching => LayerStatus::Attaching,
            LayerState::Ready(_) => LayerStatus::Ready,
            LayerState::Failed(_) => LayerStatus::Failed,
        }
    }
}
