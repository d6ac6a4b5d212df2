use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use wgpu::util::DeviceExt;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::window::Window;

use crate::gpu_types::{FrameUniforms, ParticleUniforms, SceneUniforms};
use crate::interaction::normalize_click_x;
use crate::pipeline;
use crate::render_loop::RenderLoop;

/// Window-side renderer: owns the wgpu surface and drives a [`RenderLoop`]
pub struct State {
    pub window: Arc<Window>,
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    scene_buffer: wgpu::Buffer,
    particle_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    frame_loop: RenderLoop,
    started: Instant,
    cursor_x: f64,
}

impl State {
    pub async fn new(window: Arc<Window>, frame_loop: RenderLoop) -> Result<Self> {
        let instance = wgpu::Instance::default();
        let surface = instance
            .create_surface(window.clone())
            .context("failed to create surface")?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .context("failed to get adapter")?;

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("Renderer Device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                },
                None,
            )
            .await
            .context("failed to request device")?;

        let size = window.inner_size();
        let surface_caps = surface.get_capabilities(&adapter);
        // The shader gamma-encodes itself, so avoid a second encode on sRGB targets.
        let format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| !f.is_srgb())
            .or_else(|| surface_caps.formats.first().copied())
            .context("surface reports no formats")?;
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            desired_maximum_frame_latency: 2,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
        };
        surface.configure(&device, &config);
        tracing::info!(?format, width = config.width, height = config.height, "surface configured");

        let scene_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Scene Uniforms"),
            contents: bytemuck::bytes_of(&<SceneUniforms as bytemuck::Zeroable>::zeroed()),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let particle_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Particle Slots"),
            contents: bytemuck::bytes_of(&<ParticleUniforms as bytemuck::Zeroable>::zeroed()),
            usage: wgpu::BufferUsages::STORAGE | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group_layout = pipeline::create_bind_group_layout(&device);
        let bind_group = pipeline::create_bind_group(&device, &bind_group_layout, &scene_buffer, &particle_buffer);
        let pipeline = pipeline::create_render_pipeline(&device, &bind_group_layout, config.format);

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            pipeline,
            scene_buffer,
            particle_buffer,
            bind_group,
            frame_loop,
            started: Instant::now(),
            cursor_x: 0.0,
        })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn frame_loop(&self) -> &RenderLoop {
        &self.frame_loop
    }

    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    /// Handle input; returns `true` when the event was consumed.
    pub fn input(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_x = position.x;
                true
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                let x = normalize_click_x(self.cursor_x, self.config.width);
                self.frame_loop.click(x);
                true
            }
            _ => false,
        }
    }

    /// Advance one frame and upload its uniforms.
    pub fn update(&mut self) {
        let elapsed = self.started.elapsed().as_secs_f32();
        let uniforms = self
            .frame_loop
            .tick((self.config.width, self.config.height), elapsed);
        self.upload(&uniforms);

        let frame = self.frame_loop.frame_count();
        if frame % 300 == 0 {
            tracing::info!(
                frame,
                elapsed,
                live_particles = self.frame_loop.particles().len(),
                "render loop progress"
            );
        }
    }

    fn upload(&self, uniforms: &FrameUniforms) {
        self.queue
            .write_buffer(&self.scene_buffer, 0, bytemuck::bytes_of(&uniforms.scene));
        self.queue
            .write_buffer(&self.particle_buffer, 0, bytemuck::bytes_of(&uniforms.particles));
    }

    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder =
            self.device
                .create_command_encoder(&wgpu::CommandEncoderDescriptor { label: Some("enc") });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("rpass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.pipeline);
            rpass.set_bind_group(0, &self.bind_group, &[]);
            rpass.draw(0..3, 0..1);
        }
        self.queue.submit(Some(encoder.finish()));
        output.present();

        Ok(())
    }
}
