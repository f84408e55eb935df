//! wgpu implementation of the GPU seam.
//!
//! A "shader" is a validated `wgpu::ShaderModule`; "linking" builds the
//! render pipeline together with the program's uniform buffer and bind
//! group. Validation errors are captured with error scopes and returned
//! as the compile or link log.

use std::sync::Arc;

use wgpu::util::DeviceExt;

use super::device::{DrawCall, DrawTarget, GpuDevice};
use super::texture::RadarTexture;
use super::types::{BufferUsage, ShaderStage};
use super::uniforms::SphereUniforms;
use crate::sphere::SphereMesh;

/// A compiled stage.
pub struct WgpuShader {
    pub stage: ShaderStage,
    module: wgpu::ShaderModule,
}

/// A linked radar sphere program.
pub struct WgpuProgram {
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    uniform_bind_group: wgpu::BindGroup,
}

/// Attach-time wgpu capability.
pub struct WgpuDevice {
    device: Arc<wgpu::Device>,
    queue: Arc<wgpu::Queue>,
    color_format: wgpu::TextureFormat,
    depth_format: Option<wgpu::TextureFormat>,
    uniform_layout: wgpu::BindGroupLayout,
    texture_layout: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,
}

impl WgpuDevice {
    /// Wrap a host-owned device.
    ///
    /// - `color_format`: format of the pass the layer draws into
    /// - `depth_format`: depth attachment of that pass, if any
    pub fn new(
        device: Arc<wgpu::Device>,
        queue: Arc<wgpu::Queue>,
        color_format: wgpu::TextureFormat,
        depth_format: Option<wgpu::TextureFormat>,
    ) -> Self {
        let uniform_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("radar sphere uniform layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: wgpu::BufferSize::new(SphereUniforms::SIZE),
                },
                count: None,
            }],
        });

        let texture_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("radar texture layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        // Longitude wraps, latitude stops at the poles.
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("radar sampler"),
            address_mode_u: wgpu::AddressMode::Repeat,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        Self {
            device,
            queue,
            color_format,
            depth_format,
            uniform_layout,
            texture_layout,
            sampler,
        }
    }

    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }

    pub fn color_format(&self) -> wgpu::TextureFormat {
        self.color_format
    }

    pub fn depth_format(&self) -> Option<wgpu::TextureFormat> {
        self.depth_format
    }

    /// Bind a host-owned texture view as the radar texture.
    pub fn bind_texture(&self, view: &wgpu::TextureView) -> RadarTexture {
        RadarTexture::from_view(&self.device, &self.texture_layout, &self.sampler, view)
    }

    /// Upload an equirectangular RGBA image and bind it as the radar texture.
    pub fn upload_texture(&self, image: &image::RgbaImage) -> RadarTexture {
        RadarTexture::from_image(
            &self.device,
            &self.queue,
            &self.texture_layout,
            &self.sampler,
            image,
        )
    }

    /// Run `f` inside a validation error scope and return its error, if any.
    fn scoped<T>(&self, f: impl FnOnce(&wgpu::Device) -> T) -> (T, Option<wgpu::Error>) {
        self.device.push_error_scope(wgpu::ErrorFilter::Validation);
        let value = f(&self.device);
        let error = pollster::block_on(self.device.pop_error_scope());
        (value, error)
    }
}

impl GpuDevice for WgpuDevice {
    type Shader = WgpuShader;
    type Program = WgpuProgram;
    type Buffer = wgpu::Buffer;

    fn compile_shader(&mut self, stage: ShaderStage, source: &str) -> Result<WgpuShader, String> {
        let label = format!("radar sphere {stage} shader");
        let (module, error) = self.scoped(|device| {
            device.create_shader_module(wgpu::ShaderModuleDescriptor {
                label: Some(&label),
                source: wgpu::ShaderSource::Wgsl(source.into()),
            })
        });

        match error {
            Some(e) => Err(e.to_string()),
            None => Ok(WgpuShader { stage, module }),
        }
    }

    fn link_program(
        &mut self,
        vertex: &WgpuShader,
        fragment: &WgpuShader,
    ) -> Result<WgpuProgram, String> {
        let (program, error) = self.scoped(|device| {
            let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("radar sphere uniforms"),
                size: SphereUniforms::SIZE,
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            });

            let uniform_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("radar sphere uniform bind group"),
                layout: &self.uniform_layout,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: uniform_buffer.as_entire_binding(),
                }],
            });

            let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("radar sphere pipeline layout"),
                bind_group_layouts: &[&self.uniform_layout, &self.texture_layout],
                push_constant_ranges: &[],
            });

            let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some("radar sphere pipeline"),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &vertex.module,
                    entry_point: Some(ShaderStage::Vertex.entry_point()),
                    buffers: &[SphereMesh::POSITION_LAYOUT, SphereMesh::UV_LAYOUT],
                    compilation_options: wgpu::PipelineCompilationOptions::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: &fragment.module,
                    entry_point: Some(ShaderStage::Fragment.entry_point()),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: self.color_format,
                        blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: wgpu::PipelineCompilationOptions::default(),
                }),
                // Viewed from inside or outside, both faces show the overlay.
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::TriangleList,
                    front_face: wgpu::FrontFace::Ccw,
                    cull_mode: None,
                    ..Default::default()
                },
                depth_stencil: self.depth_format.map(|format| wgpu::DepthStencilState {
                    format,
                    depth_write_enabled: false,
                    depth_compare: wgpu::CompareFunction::LessEqual,
                    stencil: wgpu::StencilState::default(),
                    bias: wgpu::DepthBiasState::default(),
                }),
                multisample: wgpu::MultisampleState::default(),
                multiview: None,
                cache: None,
            });

            WgpuProgram {
                pipeline,
                uniform_buffer,
                uniform_bind_group,
            }
        });

        match error {
            Some(e) => {
                program.uniform_buffer.destroy();
                Err(e.to_string())
            }
            None => Ok(program),
        }
    }

    fn release_shader(&mut self, shader: WgpuShader) {
        tracing::trace!("releasing {} shader module", shader.stage);
        drop(shader);
    }

    fn release_program(&mut self, program: WgpuProgram) {
        program.uniform_buffer.destroy();
        drop(program);
    }

    fn create_buffer(&mut self, usage: BufferUsage, label: &str, contents: &[u8]) -> wgpu::Buffer {
        let usage = match usage {
            BufferUsage::Vertex => wgpu::BufferUsages::VERTEX,
            BufferUsage::Index => wgpu::BufferUsages::INDEX,
        };
        self.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents,
            usage,
        })
    }

    fn release_buffer(&mut self, buffer: wgpu::Buffer) {
        buffer.destroy();
    }
}

/// Frame-time wgpu capability: an open render pass plus the radar texture
/// the host bound for this frame.
pub struct WgpuFrame<'a, 'pass> {
    pub queue: &'a wgpu::Queue,
    pub pass: &'a mut wgpu::RenderPass<'pass>,
    pub texture: &'a RadarTexture,
}

impl DrawTarget<WgpuDevice> for WgpuFrame<'_, '_> {
    fn draw_indexed(&mut self, call: DrawCall<'_, WgpuDevice>) {
        let program = call.program;
        let mesh = call.mesh;

        self.queue.write_buffer(&program.uniform_buffer, 0, bytemuck::bytes_of(&call.uniforms));

        self.pass.set_pipeline(&program.pipeline);
        self.pass.set_bind_group(0, &program.uniform_bind_group, &[]);
        self.pass.set_bind_group(1, self.texture.bind_group(), &[]);
        self.pass.set_vertex_buffer(0, mesh.positions.slice(..));
        self.pass.set_vertex_buffer(1, mesh.uvs.slice(..));
        self.pass.set_index_buffer(mesh.indices.slice(..), mesh.index_format.into());
        self.pass.draw_indexed(0..mesh.index_count, 0, 0..1);
    }
}
