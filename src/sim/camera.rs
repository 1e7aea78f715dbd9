//! Follow camera with world-bounds clamping
//!
//! The camera recenters on the player every frame, then clamps its screen
//! offset so the view never slides past the level's bounding box.

use glam::Vec2;

use super::environment::BoundingBox2D;
use crate::consts::*;

/// 2D camera: `screen = rotate(world - target) * zoom + offset`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    /// World-space point the camera looks at
    pub target: Vec2,
    /// Screen-space position of the target
    pub offset: Vec2,
    /// Scale factor, kept inside `[ZOOM_MIN, ZOOM_MAX]`
    pub zoom: f32,
    /// Radians; stays 0 in this demo but participates in the projection
    pub rotation: f32,
}

impl CameraState {
    pub fn new(target: Vec2, offset: Vec2) -> Self {
        Self {
            target,
            offset,
            zoom: 1.0,
            rotation: 0.0,
        }
    }

    /// Mouse-wheel zoom; the clamp keeps the projection away from zoom -> 0
    pub fn apply_zoom(&mut self, delta: f32) {
        self.zoom = (self.zoom + delta * ZOOM_STEP).clamp(ZOOM_MIN, ZOOM_MAX);
    }

    /// Reset command: back to 1:1 zoom
    pub fn reset(&mut self) {
        self.zoom = 1.0;
    }

    /// Project a world-space point to screen space
    #[inline]
    pub fn world_to_screen(&self, point: Vec2) -> Vec2 {
        Vec2::from_angle(self.rotation).rotate(point - self.target) * self.zoom + self.offset
    }

    /// Recenter on the player and clamp the offset to the level bounds.
    ///
    /// When the level is smaller than the viewport the clamp interval
    /// inverts and the upper bound wins, pinning the view to the level's
    /// top-left. Accepted edge case, not special-cased.
    pub fn follow(&mut self, player_pos: Vec2, bounds: &BoundingBox2D, viewport: Vec2) {
        self.target = player_pos;
        self.offset = viewport / 2.0;

        let max = self.world_to_screen(bounds.max);
        let min = self.world_to_screen(bounds.min);

        self.offset = Vec2::new(
            clamp_upper_wins(
                self.offset.x,
                viewport.x - (max.x - viewport.x / 2.0),
                viewport.x / 2.0 - min.x,
            ),
            clamp_upper_wins(
                self.offset.y,
                viewport.y - (max.y - viewport.y / 2.0),
                viewport.y / 2.0 - min.y,
            ),
        );
    }
}

/// Sequential clamp without the ordered-bounds requirement of `f32::clamp`
#[inline]
fn clamp_upper_wins(value: f32, lower: f32, upper: f32) -> f32 {
    value.max(lower).min(upper)
}
