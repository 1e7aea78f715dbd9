//! Game state threaded through the per-frame tick
//!
//! One owner: the frame orchestrator builds a `GameState` at startup and
//! hands it to `tick` each frame. Nothing else holds references between
//! frames.

use glam::Vec2;

use super::camera::CameraState;
use super::environment::{self, BoundingBox2D, EnvironmentItem, LevelError};
use crate::consts::*;

/// The player-controlled rectangle, anchored at its bottom-center
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    /// World-space feet anchor
    pub position: Vec2,
    /// Vertical speed in pixels/s, positive downward
    pub speed: f32,
    /// Armed by a landing, consumed by a jump; never re-armed mid-air
    pub can_jump: bool,
}

impl Player {
    pub fn spawn() -> Self {
        Self {
            position: PLAYER_SPAWN,
            speed: 0.0,
            can_jump: false,
        }
    }

    /// Reset command: back to spawn, falling from rest
    pub fn reset(&mut self) {
        self.position = PLAYER_SPAWN;
        self.speed = 0.0;
    }
}

/// Complete game state owned by the frame orchestrator
#[derive(Debug, Clone)]
pub struct GameState {
    pub player: Player,
    /// Level geometry in collision scan order
    pub items: Vec<EnvironmentItem>,
    /// Derived once at startup; the item set never changes afterwards
    pub bounds: BoundingBox2D,
    pub camera: CameraState,
}

impl GameState {
    /// Build the state for a level, failing fast on an empty item list
    pub fn new(items: Vec<EnvironmentItem>, viewport: Vec2) -> Result<Self, LevelError> {
        let bounds = environment::bounding_box(&items)?;
        Ok(Self {
            player: Player::spawn(),
            items,
            bounds,
            camera: CameraState::new(PLAYER_SPAWN, viewport / 2.0),
        })
    }
}
