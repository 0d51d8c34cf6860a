// Vertex layout for textured 2D quads

use bytemuck::{Pod, Zeroable};

/// One corner of a sprite quad, in world pixels
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub tex_coords: [f32; 2],
}

impl Vertex {
    pub fn new(position: [f32; 2], tex_coords: [f32; 2]) -> Self {
        Self {
            position,
            tex_coords,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x2,
                },
            ],
        }
    }
}

/// Four corners of an axis-aligned quad at `(x, y)` with size `(w, h)`,
/// wound to match the quad index pattern `[0, 1, 2, 0, 2, 3]`
pub fn quad(x: f32, y: f32, w: f32, h: f32) -> [Vertex; 4] {
    [
        Vertex::new([x, y], [0.0, 0.0]),
        Vertex::new([x + w, y], [1.0, 0.0]),
        Vertex::new([x + w, y + h], [1.0, 1.0]),
        Vertex::new([x, y + h], [0.0, 1.0]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quad_corners() {
        let corners = quad(10.0, 20.0, 50.0, 60.0);
        assert_eq!(corners[0].position, [10.0, 20.0]);
        assert_eq!(corners[2].position, [60.0, 80.0]);
        assert_eq!(corners[0].tex_coords, [0.0, 0.0]);
        assert_eq!(corners[2].tex_coords, [1.0, 1.0]);
    }

    #[test]
    fn test_vertex_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<Vertex>(), 16);
    }
}
