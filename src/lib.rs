//! Boxhop - a small 2D platformer physics and follow-camera demo
//!
//! Core modules:
//! - `sim`: Deterministic simulation (environment, player physics, camera)
//! - `renderer`: WebGPU rendering pipeline for 2D shapes and overlay text
//! - `platform`: Window/input glue around winit
//! - `settings`: Optional settings file

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Downward acceleration (pixels/s²)
    pub const GRAVITY: f32 = 400.0;
    /// Initial upward speed when a jump triggers (pixels/s)
    pub const PLAYER_JUMP_SPEED: f32 = 350.0;
    /// Horizontal run speed (pixels/s)
    pub const PLAYER_HORIZONTAL_SPEED: f32 = 200.0;
    /// Side length of the player rectangle (pixels)
    pub const PLAYER_RECTANGLE_SIZE: f32 = 40.0;

    /// Default viewport size (pixels)
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 450.0;

    /// Player spawn point, also the initial camera target (viewport center)
    pub const PLAYER_SPAWN: Vec2 = Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0);

    /// Zoom step per mouse-wheel line
    pub const ZOOM_STEP: f32 = 0.05;
    /// Zoom limits; the lower bound keeps the projection away from zoom -> 0
    pub const ZOOM_MIN: f32 = 0.25;
    pub const ZOOM_MAX: f32 = 3.0;

    /// Frame pacing target (advisory; vsync does the actual pacing)
    pub const TARGET_FPS: u32 = 60;
    /// Upper bound on a single frame delta, so a stall doesn't launch the
    /// player through the floor
    pub const MAX_FRAME_DT: f32 = 0.1;
}

/// Bottom-center anchor of the player rectangle mapped to its top-left corner
#[inline]
pub fn player_rect_origin(feet: Vec2) -> Vec2 {
    Vec2::new(
        feet.x - consts::PLAYER_RECTANGLE_SIZE / 2.0,
        feet.y - consts::PLAYER_RECTANGLE_SIZE,
    )
}
