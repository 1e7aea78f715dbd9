//! Per-frame simulation tick
//!
//! Sequencing per frame: player physics, camera zoom, reset override,
//! camera follow/clamp. Input arrives as an immutable snapshot sampled by
//! the platform layer; the renderer reads the resulting state afterwards.

use glam::Vec2;

use super::player;
use super::state::GameState;

/// Immutable per-frame control intents
///
/// `move_left`/`move_right`/`jump` are level-triggered (true while held);
/// `reset` is edge-triggered (true for the single frame the key goes
/// down). Conflating the two turns a held R into a reset every frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    pub move_left: bool,
    pub move_right: bool,
    pub jump: bool,
    pub reset: bool,
    /// Mouse-wheel lines scrolled since the previous frame
    pub zoom_delta: f32,
}

/// Advance the whole game state by one frame
pub fn tick(state: &mut GameState, input: &FrameInput, dt: f32, viewport: Vec2) {
    player::update(&mut state.player, &state.items, input, dt);

    state.camera.apply_zoom(input.zoom_delta);

    // Reset is a same-frame transition, not a mode: the override applies
    // here and the camera clamp below already sees the spawned player.
    if input.reset {
        state.camera.reset();
        state.player.reset();
    }

    state
        .camera
        .follow(state.player.position, &state.bounds, viewport);
}
