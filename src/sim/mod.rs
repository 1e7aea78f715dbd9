//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - No rendering or platform dependencies
//! - Total functions over well-formed state; physics never fails
//! - Stable iteration order (level items in storage order)

pub mod camera;
pub mod environment;
pub mod player;
pub mod state;
pub mod tick;

pub use camera::CameraState;
pub use environment::{
    BoundingBox2D, EnvironmentItem, LevelError, Rect, bounding_box, demo_level,
};
pub use state::{GameState, Player};
pub use tick::{FrameInput, tick};
