//! Per-frame draw list
//!
//! Immediate-style API over the vertex pipeline. Draws issued between
//! `begin_2d`/`end_2d` are world-space and get projected through the
//! camera on the CPU; everything else is screen-space overlay.

use glam::Vec2;

use super::shapes;
use super::text;
use super::vertex::{Vertex, colors};
use crate::sim::CameraState;

/// Draw list for one frame, consumed by [`super::pipeline::RenderState`]
pub struct Frame {
    vertices: Vec<Vertex>,
    clear_color: [f32; 4],
    camera: Option<CameraState>,
}

impl Frame {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            clear_color: colors::BACKGROUND,
            camera: None,
        }
    }

    pub fn clear(&mut self, color: [f32; 4]) {
        self.clear_color = color;
    }

    /// Start a world-space section using `camera`'s projection
    pub fn begin_2d(&mut self, camera: &CameraState) {
        self.camera = Some(*camera);
    }

    /// Return to screen-space drawing
    pub fn end_2d(&mut self) {
        self.camera = None;
    }

    /// Filled rectangle from its top-left corner
    pub fn rect(&mut self, origin: Vec2, size: Vec2, color: [f32; 4]) {
        let verts = shapes::rectangle(origin, size, color);
        self.push(&verts);
    }

    /// Filled circle
    pub fn circle(&mut self, center: Vec2, radius: f32, color: [f32; 4], segments: u32) {
        let verts = shapes::circle(center, radius, color, segments);
        self.push(&verts);
    }

    /// Bitmap text line; overlay-only in practice but projected like any draw
    pub fn text(&mut self, s: &str, origin: Vec2, size: f32, color: [f32; 4]) {
        let mut verts = Vec::new();
        text::text(&mut verts, s, origin, size, color);
        self.push(&verts);
    }

    fn push(&mut self, verts: &[Vertex]) {
        match self.camera {
            Some(camera) => self.vertices.extend(verts.iter().map(|v| {
                let p = camera.world_to_screen(Vec2::new(v.position[0], v.position[1]));
                Vertex::new(p.x, p.y, v.color)
            })),
            None => self.vertices.extend_from_slice(verts),
        }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn clear_color(&self) -> [f32; 4] {
        self.clear_color
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_space_draw_passes_through() {
        let mut frame = Frame::new();
        frame.rect(Vec2::new(10.0, 20.0), Vec2::new(5.0, 5.0), [1.0; 4]);
        assert_eq!(frame.vertices()[0].position, [10.0, 20.0]);
    }

    #[test]
    fn test_world_draws_are_projected() {
        let mut camera = CameraState::new(Vec2::new(100.0, 100.0), Vec2::new(400.0, 225.0));
        camera.zoom = 2.0;

        let mut frame = Frame::new();
        frame.begin_2d(&camera);
        frame.rect(Vec2::new(100.0, 100.0), Vec2::new(10.0, 10.0), [1.0; 4]);
        frame.end_2d();

        // The camera target lands on the offset; size doubles with zoom
        assert_eq!(frame.vertices()[0].position, [400.0, 225.0]);
        let max_x = frame
            .vertices()
            .iter()
            .map(|v| v.position[0])
            .fold(f32::MIN, f32::max);
        assert_eq!(max_x, 420.0);
    }

    #[test]
    fn test_end_2d_restores_screen_space() {
        let camera = CameraState::new(Vec2::new(999.0, 999.0), Vec2::ZERO);

        let mut frame = Frame::new();
        frame.begin_2d(&camera);
        frame.end_2d();
        frame.rect(Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0), [1.0; 4]);

        assert_eq!(frame.vertices()[0].position, [1.0, 2.0]);
    }
}
