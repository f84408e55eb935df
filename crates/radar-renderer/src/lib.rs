pub mod gpu;
pub mod layer;
pub mod shaders;
pub mod sphere;

pub use gpu::{
    DrawTarget, GpuDevice, HeadlessGpu, RendererError, ShaderError, WgpuDevice, WgpuFrame,
};
pub use layer::{CustomLayer, LayerStatus, RadarSphereLayer, RenderingMode};
pub use shaders::ShaderSources;
pub use sphere::{generate, SphereMesh};
