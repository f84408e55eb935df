//! One headless frame: attach, draw, read back, detach.

use radar_config::LayerConfig;
use radar_renderer::gpu::{HeadlessGpu, RendererError, ShaderError, WgpuFrame};
use radar_renderer::RadarSphereLayer;
use tracing::info;

use crate::camera;
use crate::radar_image;

/// Size of the synthetic radar composite (equirectangular, 2:1).
const COMPOSITE_SIZE: (u32, u32) = (2048, 1024);

/// Background of the offscreen frame: deep ocean blue.
const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.01,
    g: 0.02,
    b: 0.05,
    a: 1.0,
};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Renderer(#[from] RendererError),

    #[error(transparent)]
    Shader(#[from] ShaderError),

    #[error("failed to write image: {0}")]
    Image(#[from] image::ImageError),
}

/// Frame parameters from the command line.
pub struct FrameRequest {
    pub width: u32,
    pub height: u32,
    pub yaw_degrees: f32,
}

/// Render the radar layer once and return the frame as RGBA8.
pub fn render_frame(
    gpu: &HeadlessGpu,
    layer_config: &LayerConfig,
    request: &FrameRequest,
) -> Result<image::RgbaImage, AppError> {
    let mut device = gpu.layer_device();
    let mut layer = RadarSphereLayer::with_config(layer_config.clone());
    layer.attach(&mut device)?;

    let (cw, ch) = COMPOSITE_SIZE;
    let texture = device.upload_texture(&radar_image::synthetic_composite(cw, ch));
    let target = gpu.create_target(request.width, request.height);
    let transform = camera::globe_transform(
        target.width as f32 / target.height as f32,
        layer.sphere_radius(),
        request.yaw_degrees,
    );

    let mut encoder = gpu
        .device
        .create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("radar frame encoder"),
        });
    {
        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("radar frame pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: &target.depth_view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        let mut frame = WgpuFrame {
            queue: device.queue(),
            pass: &mut pass,
            texture: &texture,
        };
        layer.draw(&mut frame, &transform);
    }
    gpu.queue.submit(std::iter::once(encoder.finish()));

    let frame = gpu.read_rgba(&target);
    layer.detach(&mut device);

    let frame = frame?;
    info!(
        "rendered {}x{} frame (radius {} m, opacity {})",
        frame.width(),
        frame.height(),
        layer_config.sphere_radius(),
        layer_config.opacity,
    );
    Ok(frame)
}
