//! The radar sphere layer: shader program and mesh lifecycle plus the
//! per-frame draw.

use radar_config::{LayerConfig, LayerOptions};
use tracing::{debug, info, warn};

use super::state::{LayerState, LayerStatus, ReadyState};
use crate::gpu::{
    BufferUsage, DrawCall, DrawTarget, GpuDevice, IndexFormat, MeshBuffers, ShaderError,
    ShaderStage, SphereUniforms,
};
use crate::shaders::ShaderSources;
use crate::sphere::matrix::Mat4;
use crate::sphere::{self, SphereMesh};

/// Radar imagery draped over a sphere `offset_meters` above the globe.
///
/// `attach` builds the program and uploads the mesh, `draw` issues one
/// indexed draw per frame, `detach` releases everything. `draw` is a silent
/// no-op unless the layer is ready.
pub struct RadarSphereLayer<D: GpuDevice> {
    config: LayerConfig,
    shaders: ShaderSources,
    state: LayerState<D>,
}

impl<D: GpuDevice> RadarSphereLayer<D> {
    /// Create a layer from optional offset/opacity; missing values default.
    pub fn new(options: LayerOptions) -> Self {
        Self::with_config(LayerConfig::new(options))
    }

    /// Create a layer from a full config (e.g. loaded from TOML).
    ///
    /// Out-of-range values are clamped as in [`LayerConfig::sanitized`].
    pub fn with_config(config: LayerConfig) -> Self {
        Self {
            config: config.sanitized(),
            shaders: ShaderSources::builtin(),
            state: LayerState::Unattached,
        }
    }

    /// Replace the shader pair used by the next `attach`.
    pub fn with_shaders(mut self, shaders: ShaderSources) -> Self {
        self.shaders = shaders;
        self
    }

    pub fn config(&self) -> &LayerConfig {
        &self.config
    }

    pub fn shaders(&self) -> &ShaderSources {
        &self.shaders
    }

    /// Earth radius plus offset, in meters.
    pub fn sphere_radius(&self) -> f64 {
        self.config.sphere_radius()
    }

    pub fn status(&self) -> LayerStatus {
        self.state.status()
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, LayerState::Ready(_))
    }

    /// The error from the most recent failed attach, until the next
    /// attach or detach.
    pub fn last_error(&self) -> Option<&ShaderError> {
        match &self.state {
            LayerState::Failed(e) => Some(e),
            _ => None,
        }
    }

    pub fn vertex_count(&self) -> Option<usize> {
        match &self.state {
            LayerState::Ready(ready) => Some(ready.vertex_count),
            _ => None,
        }
    }

    pub fn index_count(&self) -> Option<u32> {
        match &self.state {
            LayerState::Ready(ready) => Some(ready.mesh.index_count),
            _ => None,
        }
    }

    /// Compile and link the shader pair, then generate and upload the mesh.
    ///
    /// Already-ready layers return `Ok` without touching the device. A
    /// failed layer may be attached again. On error every GPU object created
    /// during the attempt has been released and no mesh was generated.
    pub fn attach(&mut self, device: &mut D) -> Result<(), ShaderError> {
        if self.is_ready() {
            debug!(layer = %self.config.id, "attach on ready layer ignored");
            return Ok(());
        }

        self.state = LayerState::Attaching;
        match build_ready_state(device, &self.shaders, &self.config) {
            Ok(ready) => {
                info!(
                    layer = %self.config.id,
                    vertices = ready.vertex_count,
                    indices = ready.mesh.index_count,
                    radius = self.config.sphere_radius(),
                    shader_version = self.shaders.version,
                    "radar sphere attached"
                );
                self.state = LayerState::Ready(ready);
                Ok(())
            }
            Err(e) => {
                warn!(layer = %self.config.id, "radar sphere attach failed: {e}");
                self.state = LayerState::Failed(e.clone());
                Err(e)
            }
        }
    }

    /// Issue one indexed draw of the sphere with `transform`.
    ///
    /// Uses the texture the target has bound for this frame. Does nothing
    /// unless the layer is ready; never allocates.
    pub fn draw<T>(&self, target: &mut T, transform: &Mat4)
    where
        T: DrawTarget<D> + ?Sized,
    {
        let LayerState::Ready(ready) = &self.state else {
            return;
        };

        target.draw_indexed(DrawCall {
            program: &ready.program,
            mesh: &ready.mesh,
            uniforms: SphereUniforms::new(
                *transform,
                self.config.sphere_radius() as f32,
                self.config.opacity as f32,
            ),
        });
    }

    /// Release the program and mesh buffers. Safe to call in any state.
    pub fn detach(&mut self, device: &mut D) {
        match std::mem::replace(&mut self.state, LayerState::Unattached) {
            LayerState::Ready(ready) => {
                device.release_program(ready.program);
                ready.mesh.release(device);
                debug!(layer = %self.config.id, "radar sphere detached");
            }
            _ => debug!(layer = %self.config.id, "detach with nothing attached"),
        }
    }
}

impl<D: GpuDevice> Drop for RadarSphereLayer<D> {
    fn drop(&mut self) {
        if self.is_ready() {
            warn!(layer = %self.config.id, "radar sphere dropped while attached");
        }
    }
}

fn build_ready_state<D: GpuDevice>(
    device: &mut D,
    shaders: &ShaderSources,
    config: &LayerConfig,
) -> Result<ReadyState<D>, ShaderError> {
    let program = link_program(device, shaders)?;

    let mesh = sphere::generate_resolution(config.resolution);
    Ok(ReadyState {
        program,
        vertex_count: mesh.vertex_count(),
        mesh: upload_mesh(device, &mesh),
    })
}

/// Compile both stages and link them. Stage objects never outlive this call.
fn link_program<D: GpuDevice>(
    device: &mut D,
    shaders: &ShaderSources,
) -> Result<D::Program, ShaderError> {
    let vertex = device
        .compile_shader(ShaderStage::Vertex, &shaders.vertex)
        .map_err(|log| ShaderError::CompileFailed {
            stage: ShaderStage::Vertex,
            log,
        })?;

    let fragment = match device.compile_shader(ShaderStage::Fragment, &shaders.fragment) {
        Ok(fragment) => fragment,
        Err(log) => {
            device.release_shader(vertex);
            return Err(ShaderError::CompileFailed {
                stage: ShaderStage::Fragment,
                log,
            });
        }
    };

    let linked = device.link_program(&vertex, &fragment);
    device.release_shader(vertex);
    device.release_shader(fragment);

    linked.map_err(|log| ShaderError::LinkFailed { log })
}

fn upload_mesh<D: GpuDevice>(device: &mut D, mesh: &SphereMesh) -> MeshBuffers<D> {
    let index_format = IndexFormat::for_vertex_count(mesh.vertex_count());

    let positions = device.create_buffer(
        BufferUsage::Vertex,
        "radar sphere positions",
        bytemuck::cast_slice(mesh.positions()),
    );
    let uvs = device.create_buffer(
        BufferUsage::Vertex,
        "radar sphere uvs",
        bytemuck::cast_slice(mesh.uvs()),
    );
    let indices = match index_format {
        IndexFormat::Uint16 => {
            let narrow: Vec<u16> = mesh.indices().iter().map(|&i| i as u16).collect();
            device.create_buffer(
                BufferUsage::Index,
                "radar sphere indices",
                bytemuck::cast_slice(&narrow),
            )
        }
        IndexFormat::Uint32 => device.create_buffer(
            BufferUsage::Index,
            "radar sphere indices",
            bytemuck::cast_slice(mesh.indices()),
        ),
    };

    MeshBuffers {
        positions,
        uvs,
        indices,
        index_count: mesh.index_count() as u32,
        index_format,
    }
}
