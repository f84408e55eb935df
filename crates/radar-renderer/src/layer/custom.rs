//! Map host custom-layer contract.

use std::fmt;

use tracing::error;

use super::radar_sphere::RadarSphereLayer;
use crate::gpu::{DrawTarget, GpuDevice};
use crate::sphere::matrix::Mat4;

/// Projection space a custom layer draws in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderingMode {
    TwoD,
    ThreeD,
}

impl RenderingMode {
    pub fn as_str(self) -> &'static str {
        match self {
            RenderingMode::TwoD => "2d",
            RenderingMode::ThreeD => "3d",
        }
    }
}

impl fmt::Display for RenderingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A layer whose GPU work is delegated to external code by the map host.
///
/// The host calls `on_add` once when the layer becomes active, `render`
/// every frame with its camera matrix, and `on_remove` when the layer is
/// taken off the map.
pub trait CustomLayer<D: GpuDevice> {
    fn id(&self) -> &str;

    fn layer_type(&self) -> &'static str {
        "custom"
    }

    fn rendering_mode(&self) -> RenderingMode;

    fn on_add(&mut self, device: &mut D);

    fn render(&self, target: &mut dyn DrawTarget<D>, matrix: &Mat4);

    fn on_remove(&mut self, device: &mut D);
}

impl<D: GpuDevice> CustomLayer<D> for RadarSphereLayer<D> {
    fn id(&self) -> &str {
        &self.config().id
    }

    fn rendering_mode(&self) -> RenderingMode {
        RenderingMode::ThreeD
    }

    /// Attach; failures are logged and leave the layer `Failed`.
    fn on_add(&mut self, device: &mut D) {
        if let Err(e) = self.attach(device) {
            error!(layer = %self.config().id, "failed to add radar layer: {e}");
        }
    }

    fn render(&self, target: &mut dyn DrawTarget<D>, matrix: &Mat4) {
        self.draw(target, matrix);
    }

    fn on_remove(&mut self, device: &mut D) {
        self.detach(device);
    }
}
