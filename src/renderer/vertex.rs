//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
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
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for game elements
pub mod colors {
    /// Near-white clear color
    pub const BACKGROUND: [f32; 4] = [0.96, 0.96, 0.96, 1.0];
    pub const PLAYER: [f32; 4] = [0.90, 0.16, 0.22, 1.0];
    /// Gold dot on the player's feet anchor
    pub const PLAYER_ANCHOR: [f32; 4] = [1.0, 0.80, 0.0, 1.0];
    pub const TEXT_HEADING: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const TEXT_BODY: [f32; 4] = [0.31, 0.31, 0.31, 1.0];
}
