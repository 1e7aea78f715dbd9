//! Keyboard and mouse-wheel tracking
//!
//! Accumulates winit events between frames and folds them into one
//! immutable [`FrameInput`] per tick. Held keys are level-triggered; the
//! reset key is edge-triggered and reported exactly once per press.

use std::collections::HashSet;

use winit::event::{ElementState, KeyEvent, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::sim::FrameInput;

/// Rough line height for touchpads that report pixel deltas
const PIXELS_PER_LINE: f32 = 16.0;

/// Per-window input state, drained once per frame by [`InputTracker::sample`]
#[derive(Debug, Default)]
pub struct InputTracker {
    pressed: HashSet<KeyCode>,
    just_pressed: HashSet<KeyCode>,
    scroll_lines: f32,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a window event; returns true when the event was consumed
    pub fn handle_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state,
                        physical_key: PhysicalKey::Code(code),
                        ..
                    },
                ..
            } => {
                match state {
                    ElementState::Pressed => self.key_pressed(*code),
                    ElementState::Released => self.key_released(*code),
                }
                true
            }
            WindowEvent::MouseWheel { delta, .. } => {
                self.wheel(match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / PIXELS_PER_LINE,
                });
                true
            }
            _ => false,
        }
    }

    fn key_pressed(&mut self, code: KeyCode) {
        // OS key repeat re-sends Pressed while held; only a genuine
        // transition arms the edge trigger
        if self.pressed.insert(code) {
            self.just_pressed.insert(code);
        }
    }

    fn key_released(&mut self, code: KeyCode) {
        self.pressed.remove(&code);
    }

    fn wheel(&mut self, lines: f32) {
        self.scroll_lines += lines;
    }

    /// Build the snapshot for this frame and clear the one-shot state
    pub fn sample(&mut self) -> FrameInput {
        let input = FrameInput {
            move_left: self.down(KeyCode::ArrowLeft),
            move_right: self.down(KeyCode::ArrowRight),
            jump: self.down(KeyCode::Space) || self.down(KeyCode::ArrowUp),
            reset: self.just_pressed.contains(&KeyCode::KeyR),
            zoom_delta: self.scroll_lines,
        };
        self.just_pressed.clear();
        self.scroll_lines = 0.0;
        input
    }

    fn down(&self, code: KeyCode) -> bool {
        self.pressed.contains(&code)
    }
}
