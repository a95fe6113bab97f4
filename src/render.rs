use crate::constants::*;
use crate::scene::MeshData;
use glam::{Mat4, Vec3};
use web_sys as web;
use wgpu::util::DeviceExt;

mod helpers;
mod post;
mod targets;
use targets::RenderTargets;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct GlitchUniforms {
    resolution: [f32; 2],
    time: f32,
    loop_sec: f32,
    shake_amplitude: f32,
    shake_velocity: f32,
    slice_min_height: f32,
    slice_max_height: f32,
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct Globals {
    view_proj: [[f32; 4]; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct Locals {
    model: [[f32; 4]; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct Vertex {
    position: [f32; 3],
    normal: [f32; 3],
}

/// Per-model transform, mutated by the scroll handler (scale, position) and
/// the frame loop (rotation).
#[derive(Clone, Copy, Debug)]
pub struct ModelTransform {
    pub scale: f32,
    pub position: Vec3,
    pub rotation: Vec3,
}

impl ModelTransform {
    pub fn at_z(z: f32) -> Self {
        Self {
            scale: crate::core::INITIAL_SCALE,
            position: Vec3::new(0.0, 0.0, z),
            rotation: Vec3::ZERO,
        }
    }

    fn matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position)
            * Mat4::from_euler(
                glam::EulerRot::XYZ,
                self.rotation.x,
                self.rotation.y,
                self.rotation.z,
            )
            * Mat4::from_scale(Vec3::splat(self.scale))
    }
}

struct ModelBuffers {
    vertex_buf: wgpu::Buffer,
    index_buf: wgpu::Buffer,
    index_count: u32,
    locals_buf: wgpu::Buffer,
    locals_bg: wgpu::BindGroup,
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    scene_pipeline: wgpu::RenderPipeline,
    globals_buf: wgpu::Buffer,
    globals_bg: wgpu::BindGroup,
    locals_bgl: wgpu::BindGroupLayout,
    models: Vec<ModelBuffers>,

    targets: RenderTargets,
    linear_sampler: wgpu::Sampler,
    glitch: post::GlitchResources,
    bg_scene: wgpu::BindGroup,

    width: u32,
    height: u32,
    time_accum: f32,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width();
        let height = canvas.height();

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Default limits to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .unwrap_or(caps.formats[0]);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let targets = RenderTargets::create(&device, width, height);

        // Scene pipeline: two uniform groups (camera globals, per-model locals)
        let scene_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::SCENE_WGSL.into()),
        });
        let globals_bgl = helpers::uniform_bgl(&device, "globals_bgl");
        let locals_bgl = helpers::uniform_bgl(&device, "locals_bgl");
        let globals_buf = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("globals"),
            size: std::mem::size_of::<Globals>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let globals_bg = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("globals_bg"),
            layout: &globals_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buf.as_entire_binding(),
            }],
        });
        let scene_pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pl_scene"),
            bind_group_layouts: &[&globals_bgl, &locals_bgl],
            push_constant_ranges: &[],
        });
        let scene_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("scene_pipeline"),
            layout: Some(&scene_pl),
            vertex: wgpu::VertexState {
                module: &scene_shader,
                entry_point: Some("vs_main"),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<Vertex>() as u64,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3],
                }],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: Some(wgpu::DepthStencilState {
                format: targets::DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &scene_shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: targets::SCENE_FORMAT,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });

        // Glitch post pass
        let glitch_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("glitch_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::GLITCH_WGSL.into()),
        });
        let linear_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("linear_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });
        let glitch = post::create_glitch_resources(&device, &glitch_shader, format);
        let bg_scene =
            post::scene_bind_group(&device, &glitch, &targets.scene_view, &linear_sampler);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            scene_pipeline,
            globals_buf,
            globals_bg,
            locals_bgl,
            models: Vec::new(),
            targets,
            linear_sampler,
            glitch,
            bg_scene,
            width,
            height,
            time_accum: 0.0,
        })
    }

    /// Upload a parsed mesh; returns its slot in the transform array.
    pub fn upload_model(&mut self, mesh: &MeshData) -> usize {
        let vertices: Vec<Vertex> = mesh
            .positions
            .iter()
            .zip(mesh.normals.iter())
            .map(|(p, n)| Vertex {
                position: *p,
                normal: *n,
            })
            .collect();
        let vertex_buf = self
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("model_vertices"),
                contents: bytemuck::cast_slice(&vertices),
                usage: wgpu::BufferUsages::VERTEX,
            });
        let index_buf = self
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("model_indices"),
                contents: bytemuck::cast_slice(&mesh.indices),
                usage: wgpu::BufferUsages::INDEX,
            });
        let locals_buf = self.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("model_locals"),
            size: std::mem::size_of::<Locals>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let locals_bg = self.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("model_locals_bg"),
            layout: &self.locals_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: locals_buf.as_entire_binding(),
            }],
        });
        self.models.push(ModelBuffers {
            vertex_buf,
            index_buf,
            index_count: mesh.indices.len() as u32,
            locals_buf,
            locals_bg,
        });
        self.models.len() - 1
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.targets.recreate(&self.device, width, height);
            self.bg_scene = post::scene_bind_group(
                &self.device,
                &self.glitch,
                &self.targets.scene_view,
                &self.linear_sampler,
            );
        }
    }

    pub fn render(
        &mut self,
        dt_sec: f32,
        transforms: &[ModelTransform],
    ) -> Result<(), wgpu::SurfaceError> {
        self.time_accum += dt_sec.max(0.0);
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });

        let aspect = self.width as f32 / (self.height as f32).max(1.0);
        let proj = Mat4::perspective_rh(
            CAMERA_FOV_DEG.to_radians(),
            aspect,
            CAMERA_Z_NEAR,
            CAMERA_Z_FAR,
        );
        let view_mat = Mat4::look_at_rh(Vec3::new(0.0, 0.0, CAMERA_Z), Vec3::ZERO, Vec3::Y);
        let globals = Globals {
            view_proj: (proj * view_mat).to_cols_array_2d(),
        };
        self.queue
            .write_buffer(&self.globals_buf, 0, bytemuck::bytes_of(&globals));
        for (model, transform) in self.models.iter().zip(transforms.iter()) {
            let locals = Locals {
                model: transform.matrix().to_cols_array_2d(),
            };
            self.queue
                .write_buffer(&model.locals_buf, 0, bytemuck::bytes_of(&locals));
        }

        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.targets.scene_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.targets.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.scene_pipeline);
            rpass.set_bind_group(0, &self.globals_bg, &[]);
            for model in self.models.iter().take(transforms.len()) {
                rpass.set_bind_group(1, &model.locals_bg, &[]);
                rpass.set_vertex_buffer(0, model.vertex_buf.slice(..));
                rpass.set_index_buffer(model.index_buf.slice(..), wgpu::IndexFormat::Uint32);
                rpass.draw_indexed(0..model.index_count, 0, 0..1);
            }
        }

        let uniforms = GlitchUniforms {
            resolution: [self.width as f32, self.height as f32],
            time: self.time_accum,
            loop_sec: GLITCH_LOOP_SEC,
            shake_amplitude: GLITCH_SHAKE_AMPLITUDE,
            shake_velocity: GLITCH_SHAKE_VELOCITY,
            slice_min_height: GLITCH_SLICE_MIN_HEIGHT,
            slice_max_height: GLITCH_SLICE_MAX_HEIGHT,
        };
        self.queue.write_buffer(
            &self.glitch.uniform_buffer,
            0,
            bytemuck::bytes_of(&uniforms),
        );
        post::blit(
            &mut encoder,
            "glitch_pass",
            &view,
            wgpu::Color::TRANSPARENT,
            &self.glitch.pipeline,
            &self.bg_scene,
        );

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
