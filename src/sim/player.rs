//! Player physics: run, jump, gravity, one-sided landings

use super::environment::EnvironmentItem;
use super::state::Player;
use super::tick::FrameInput;
use crate::consts::*;

/// Advance the player by one frame.
///
/// The collision scan is a one-sided landing test: it only catches the
/// player crossing a blocking item's top edge from above within this
/// frame's vertical displacement. Side hits, ceilings, and fast drops
/// through thin platforms pass straight through; that is the game's
/// contract rather than a bug to harden away.
pub fn update(player: &mut Player, items: &[EnvironmentItem], input: &FrameInput, dt: f32) {
    if input.move_left {
        player.position.x -= PLAYER_HORIZONTAL_SPEED * dt;
    }
    if input.move_right {
        player.position.x += PLAYER_HORIZONTAL_SPEED * dt;
    }
    if input.jump && player.can_jump {
        player.speed = -PLAYER_JUMP_SPEED;
        player.can_jump = false;
    }

    let mut landed = false;
    for item in items {
        let rect = &item.rectangle;
        let within_span = rect.x <= player.position.x && player.position.x <= rect.x + rect.width;
        let top_at_or_below_feet = rect.y >= player.position.y;
        let top_reached_this_frame = rect.y <= player.position.y + player.speed * dt;
        if item.blocking && within_span && top_at_or_below_feet && top_reached_this_frame {
            // First item in storage order wins, not the geometrically closest
            player.speed = 0.0;
            player.position.y = rect.y;
            landed = true;
            break;
        }
    }

    if landed {
        player.can_jump = true;
    } else {
        // Semi-implicit: move with the pre-gravity speed, then accelerate
        player.position.y += player.speed * dt;
        player.speed += GRAVITY * dt;
        player.can_jump = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::environment::Rect;
    use glam::Vec2;

    fn blocking(x: f32, y: f32, w: f32, h: f32) -> EnvironmentItem {
        EnvironmentItem {
            rectangle: Rect::new(x, y, w, h),
            blocking: true,
            color: [0.5, 0.5, 0.5, 1.0],
        }
    }

    fn falling_player(x: f32, y: f32, speed: f32) -> Player {
        Player {
            position: Vec2::new(x, y),
            speed,
            can_jump: false,
        }
    }

    #[test]
    fn test_landing_snaps_to_platform_top() {
        // Predicted y = 150 + 500 * 0.1 = 200, exactly the platform top
        let mut player = falling_player(500.0, 150.0, 500.0);
        let items = [blocking(300.0, 200.0, 400.0, 10.0)];

        update(&mut player, &items, &FrameInput::default(), 0.1);

        assert_eq!(player.position.y, 200.0);
        assert_eq!(player.speed, 0.0);
        assert!(player.can_jump);
    }

    #[test]
    fn test_move_right_advances_by_speed_times_dt() {
        let mut player = falling_player(500.0, 150.0, 0.0);
        let input = FrameInput {
            move_right: true,
            ..FrameInput::default()
        };

        update(&mut player, &[], &input, 0.1);

        assert_eq!(player.position.x, 520.0);
    }

    #[test]
    fn test_opposed_moves_cancel() {
        let mut player = falling_player(500.0, 150.0, 0.0);
        let input = FrameInput {
            move_left: true,
            move_right: true,
            ..FrameInput::default()
        };

        update(&mut player, &[], &input, 0.1);

        assert_eq!(player.position.x, 500.0);
    }

    #[test]
    fn test_earliest_item_wins_over_closer_one() {
        // Both tops lie within this frame's displacement; the second is
        // geometrically closer, the first is earlier in storage order.
        let mut player = falling_player(500.0, 100.0, 1000.0);
        let items = [
            blocking(400.0, 200.0, 200.0, 10.0),
            blocking(400.0, 150.0, 200.0, 10.0),
        ];

        update(&mut player, &items, &FrameInput::default(), 0.1);

        assert_eq!(player.position.y, 200.0);
    }

    #[test]
    fn test_jump_requires_can_jump() {
        let mut player = falling_player(500.0, 150.0, 40.0);
        let input = FrameInput {
            jump: true,
            ..FrameInput::default()
        };

        update(&mut player, &[], &input, 0.0);

        assert_eq!(player.speed, 40.0);
    }

    #[test]
    fn test_jump_consumes_can_jump() {
        let mut player = falling_player(500.0, 400.0, 0.0);
        player.can_jump = true;
        let input = FrameInput {
            jump: true,
            ..FrameInput::default()
        };

        update(&mut player, &[], &input, 0.0);

        assert_eq!(player.speed, -PLAYER_JUMP_SPEED);
        assert!(!player.can_jump);
    }

    #[test]
    fn test_zero_dt_leaves_motion_unchanged() {
        let mut player = falling_player(500.0, 150.0, 120.0);
        let before = player;

        update(&mut player, &[], &FrameInput::default(), 0.0);

        assert_eq!(player.position, before.position);
        assert_eq!(player.speed, before.speed);
    }

    #[test]
    fn test_airborne_frame_is_semi_implicit() {
        // Position integrates with the pre-gravity speed
        let mut player = falling_player(500.0, 100.0, 100.0);

        update(&mut player, &[], &FrameInput::default(), 0.1);

        assert_eq!(player.position.y, 110.0);
        assert_eq!(player.speed, 140.0);
        assert!(!player.can_jump);
    }

    #[test]
    fn test_airborne_disarms_jump() {
        let mut player = falling_player(500.0, 100.0, 0.0);
        player.can_jump = true;

        update(&mut player, &[], &FrameInput::default(), 0.1);

        assert!(!player.can_jump);
    }

    #[test]
    fn test_non_blocking_item_never_lands() {
        let mut player = falling_player(500.0, 150.0, 500.0);
        let mut scenery = blocking(300.0, 200.0, 400.0, 10.0);
        scenery.blocking = false;

        update(&mut player, &[scenery], &FrameInput::default(), 0.1);

        assert_eq!(player.position.y, 200.0);
        assert_eq!(player.speed, 540.0);
        assert!(!player.can_jump);
    }

    #[test]
    fn test_platform_above_feet_is_ignored() {
        // Top edge above the player's feet never catches (one-sided test)
        let mut player = falling_player(500.0, 250.0, 100.0);
        let items = [blocking(300.0, 200.0, 400.0, 10.0)];

        update(&mut player, &items, &FrameInput::default(), 0.1);

        assert_eq!(player.position.y, 260.0);
        assert!(!player.can_jump);
    }

    #[test]
    fn test_player_outside_horizontal_span_misses() {
        let mut player = falling_player(299.0, 150.0, 500.0);
        let items = [blocking(300.0, 200.0, 400.0, 10.0)];

        update(&mut player, &items, &FrameInput::default(), 0.1);

        assert!(!player.can_jump);
        assert_eq!(player.position.y, 200.0);
        assert_eq!(player.speed, 540.0);
    }
}
