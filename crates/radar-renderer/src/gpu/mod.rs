//! GPU seam for the radar layer and its backends.
//!
//! - [`GpuDevice`] / [`DrawTarget`]: what the layer needs from a GPU
//! - [`WgpuDevice`] / [`WgpuFrame`]: wgpu backend
//! - [`recording`]: naga-validated software backend for dry runs and tests
//! - [`HeadlessGpu`]: device acquisition and readback without a window

mod device;
mod headless;
pub mod recording;
mod texture;
mod types;
mod uniforms;
pub mod validation;
mod wgpu_device;

pub use device::*;
pub use headless::*;
pub use texture::*;
pub use types::*;
pub use uniforms::*;
pub use wgpu_device::*;
