// Rendering system using wgpu

pub mod camera;
mod sprite;
pub mod texture;
mod vertex;

pub use camera::{CameraUniform, ScrollCamera};
pub use sprite::{SpriteInstance, SpritePipeline, MAX_SPRITES};
pub use texture::{Texture, TextureManager};
pub use vertex::Vertex;

use anyhow::Result;
use log::info;
use std::sync::Arc;
use wgpu::util::DeviceExt;
use winit::window::Window;

use crate::engine::assets::SpriteLibrary;

/// Owns the wgpu surface and device and draws one frame from a sprite
/// draw list
pub struct Renderer {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    size: winit::dpi::PhysicalSize<u32>,
    sprite_pipeline: SpritePipeline,
    texture_manager: TextureManager,
}

impl Renderer {
    /// Create a new renderer for the given window
    pub async fn new(window: Arc<Window>) -> Result<Self> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance.create_surface(window.clone())?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("Failed to find suitable GPU adapter"))?;

        info!("Using GPU: {}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("Main Device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                },
                None,
            )
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(surface_caps.formats[0]);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width,
            height: size.height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };

        surface.configure(&device, &config);

        let sprite_pipeline = SpritePipeline::new(&device, &config);
        let texture_manager = TextureManager::new();

        info!(
            "Renderer initialized with {}x{} resolution",
            size.width, size.height
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            size,
            sprite_pipeline,
            texture_manager,
        })
    }

    /// Upload every frame of every sprite set as a GPU texture
    pub fn upload_library(&mut self, library: &SpriteLibrary) {
        let keys: Vec<String> = library.keys().map(str::to_string).collect();
        for key in keys {
            if let Some(frames) = library.frames(&key) {
                for (index, frame) in frames.iter().enumerate() {
                    let texture = Texture::from_image(
                        &self.device,
                        &self.queue,
                        self.sprite_pipeline.texture_layout(),
                        &frame.image,
                        &format!("{key}[{index}]"),
                    );
                    self.texture_manager.insert(&key, index, texture);
                }
            }
        }
        info!(
            "Uploaded {} sprite textures",
            self.texture_manager.texture_count()
        );
    }

    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.size = new_size;
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);
            info!("Renderer resized to {}x{}", new_size.width, new_size.height);
        }
    }

    pub fn size(&self) -> winit::dpi::PhysicalSize<u32> {
        self.size
    }

    /// Draw one frame: instances are drawn in list order, so later
    /// entries paint over earlier ones
    pub fn render(&mut self, instances: &[SpriteInstance], camera: &ScrollCamera) -> Result<()> {
        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.queue.write_buffer(
            self.sprite_pipeline.camera_buffer(),
            0,
            bytemuck::cast_slice(&[camera.uniform()]),
        );

        let (vertices, draws) = self
            .sprite_pipeline
            .build_quads(instances, &self.texture_manager);
        let vertex_buffer = self
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Sprite Vertex Buffer"),
                contents: bytemuck::cast_slice(&vertices),
                usage: wgpu::BufferUsages::VERTEX,
            });

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Main Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: 0.1,
                            g: 0.1,
                            b: 0.15,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            self.sprite_pipeline.draw(
                &mut render_pass,
                &vertex_buffer,
                &draws,
                &self.texture_manager,
            );
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}
