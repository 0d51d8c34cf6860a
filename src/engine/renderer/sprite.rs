// Sprite pipeline: one textured quad per draw call

use super::camera::CameraUniform;
use super::texture::TextureManager;
use super::vertex::{self, Vertex};
use glam::Mat4;
use wgpu::util::DeviceExt;

/// Largest number of quads a single frame may submit
pub const MAX_SPRITES: usize = 4096;

/// One sprite to draw this frame, in world pixels. Size comes from the
/// uploaded texture.
#[derive(Debug, Clone)]
pub struct SpriteInstance {
    pub key: String,
    pub frame: usize,
    pub x: f32,
    pub y: f32,
}

impl SpriteInstance {
    pub fn new(key: impl Into<String>, frame: usize, x: f32, y: f32) -> Self {
        Self {
            key: key.into(),
            frame,
            x,
            y,
        }
    }
}

/// Pipeline state shared by every sprite draw: shader, camera uniform,
/// texture layout, and a prebuilt index buffer covering `MAX_SPRITES`
/// quads
pub struct SpritePipeline {
    render_pipeline: wgpu::RenderPipeline,
    index_buffer: wgpu::Buffer,
    camera_buffer: wgpu::Buffer,
    camera_bind_group: wgpu::BindGroup,
    texture_layout: wgpu::BindGroupLayout,
}

impl SpritePipeline {
    pub fn new(device: &wgpu::Device, config: &wgpu::SurfaceConfiguration) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Sprite Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/sprite.wgsl").into()),
        });

        let camera_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Camera Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            });

        let texture_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Texture Bind Group Layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        multisampled: false,
                        view_dimension: wgpu::TextureViewDimension::D2,
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
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

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Sprite Pipeline Layout"),
            bind_group_layouts: &[&camera_bind_group_layout, &texture_layout],
            push_constant_ranges: &[],
        });

        let render_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Sprite Render Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: "vs_main",
                buffers: &[Vertex::desc()],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: "fs_main",
                targets: &[Some(wgpu::ColorTargetState {
                    format: config.format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
        });

        let indices = quad_indices(MAX_SPRITES);
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Sprite Index Buffer"),
            contents: bytemuck::cast_slice(&indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        let camera_uniform = CameraUniform {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
        };
        let camera_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Camera Buffer"),
            contents: bytemuck::cast_slice(&[camera_uniform]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let camera_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &camera_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_buffer.as_entire_binding(),
            }],
        });

        Self {
            render_pipeline,
            index_buffer,
            camera_buffer,
            camera_bind_group,
            texture_layout,
        }
    }

    pub fn texture_layout(&self) -> &wgpu::BindGroupLayout {
        &self.texture_layout
    }

    pub fn camera_buffer(&self) -> &wgpu::Buffer {
        &self.camera_buffer
    }

    /// Build the frame's vertex data. Instances without an uploaded
    /// texture are dropped; the caller draws one quad per returned entry
    /// in order.
    pub fn build_quads(
        &self,
        instances: &[SpriteInstance],
        textures: &TextureManager,
    ) -> (Vec<Vertex>, Vec<(String, usize)>) {
        let mut vertices = Vec::with_capacity(instances.len() * 4);
        let mut draws = Vec::with_capacity(instances.len());

        for instance in instances.iter().take(MAX_SPRITES) {
            let Some(texture) = textures.get(&instance.key, instance.frame) else {
                continue;
            };
            vertices.extend_from_slice(&vertex::quad(
                instance.x,
                instance.y,
                texture.width as f32,
                texture.height as f32,
            ));
            draws.push((instance.key.clone(), instance.frame));
        }

        (vertices, draws)
    }

    /// Issue the draw calls for quads previously built with `build_quads`
    pub fn draw<'a>(
        &'a self,
        render_pass: &mut wgpu::RenderPass<'a>,
        vertex_buffer: &'a wgpu::Buffer,
        draws: &[(String, usize)],
        textures: &'a TextureManager,
    ) {
        if draws.is_empty() {
            return;
        }

        render_pass.set_pipeline(&self.render_pipeline);
        render_pass.set_bind_group(0, &self.camera_bind_group, &[]);
        render_pass.set_vertex_buffer(0, vertex_buffer.slice(..));
        render_pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);

        for (quad, (key, frame)) in draws.iter().enumerate() {
            let Some(texture) = textures.get(key, *frame) else {
                continue;
            };
            let first = (quad * 6) as u32;
            render_pass.set_bind_group(1, &texture.bind_group, &[]);
            render_pass.draw_indexed(first..first + 6, 0, 0..1);
        }
    }
}

fn quad_indices(quads: usize) -> Vec<u32> {
    let mut indices = Vec::with_capacity(quads * 6);
    for q in 0..quads as u32 {
        let base = q * 4;
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    indices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quad_indices_pattern() {
        let indices = quad_indices(2);
        assert_eq!(indices.len(), 12);
        assert_eq!(&indices[..6], &[0, 1, 2, 0, 2, 3]);
        assert_eq!(&indices[6..], &[4, 5, 6, 4, 6, 7]);
    }

    #[test]
    fn test_sprite_instance_constructor() {
        let instance = SpriteInstance::new("run_left", 2, 10.0, 20.0);
        assert_eq!(instance.key, "run_left");
        assert_eq!(instance.frame, 2);
    }
}
