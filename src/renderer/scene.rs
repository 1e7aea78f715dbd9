//! Scene assembly: game state to draw list
//!
//! World pass (level rectangles, player, anchor dot) bracketed by the
//! camera, then the screen-space controls overlay.

use glam::Vec2;

use super::frame::Frame;
use super::vertex::colors;
use crate::consts::*;
use crate::player_rect_origin;
use crate::sim::GameState;

/// Radius of the gold dot marking the player's feet anchor
const ANCHOR_RADIUS: f32 = 5.0;
const ANCHOR_SEGMENTS: u32 = 24;

const OVERLAY_TEXT_SIZE: f32 = 10.0;

pub fn draw(frame: &mut Frame, state: &GameState, show_help: bool) {
    frame.clear(colors::BACKGROUND);

    frame.begin_2d(&state.camera);
    for item in &state.items {
        frame.rect(
            item.rectangle.min(),
            Vec2::new(item.rectangle.width, item.rectangle.height),
            item.color,
        );
    }
    frame.rect(
        player_rect_origin(state.player.position),
        Vec2::splat(PLAYER_RECTANGLE_SIZE),
        colors::PLAYER,
    );
    frame.circle(
        state.player.position,
        ANCHOR_RADIUS,
        colors::PLAYER_ANCHOR,
        ANCHOR_SEGMENTS,
    );
    frame.end_2d();

    if show_help {
        frame.text(
            "Controls:",
            Vec2::new(20.0, 20.0),
            OVERLAY_TEXT_SIZE,
            colors::TEXT_HEADING,
        );
        frame.text(
            "- Right/Left to move",
            Vec2::new(40.0, 40.0),
            OVERLAY_TEXT_SIZE,
            colors::TEXT_BODY,
        );
        frame.text(
            "- Space or Up to jump",
            Vec2::new(40.0, 60.0),
            OVERLAY_TEXT_SIZE,
            colors::TEXT_BODY,
        );
        frame.text(
            "- Mouse wheel to zoom, R to reset",
            Vec2::new(40.0, 80.0),
            OVERLAY_TEXT_SIZE,
            colors::TEXT_BODY,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::demo_level;

    #[test]
    fn test_scene_draws_level_then_player() {
        let state = GameState::new(demo_level(), Vec2::new(800.0, 450.0)).unwrap();
        let mut frame = Frame::new();
        draw(&mut frame, &state, false);

        // 5 level rects + player rect + anchor circle
        let expected = (5 + 1) * 6 + ANCHOR_SEGMENTS as usize * 3;
        assert_eq!(frame.vertices().len(), expected);
        assert_eq!(frame.clear_color(), colors::BACKGROUND);
    }

    #[test]
    fn test_overlay_adds_screen_space_text() {
        let state = GameState::new(demo_level(), Vec2::new(800.0, 450.0)).unwrap();

        let mut without = Frame::new();
        draw(&mut without, &state, false);
        let mut with = Frame::new();
        draw(&mut with, &state, true);

        assert!(with.vertices().len() > without.vertices().len());
    }
}
