//! Computer paddle
//!
//! A one-pixel-per-tick tracker. It does not predict anything; difficulty
//! comes from how often it runs, which speeds up as the human scores.

use std::time::Duration;

use super::state::{GameState, Side};
use crate::consts::*;

/// Shortest period the AI task is ever armed with
pub const MIN_AI_PERIOD: Duration = Duration::from_millis(1);

/// Move the computer paddle one pixel toward the ball's row.
///
/// The target is the ball's offset from the arena center; an aligned paddle
/// stays put, and the paddle never passes `±PADDLE_LIMIT`.
pub fn track_ball(state: &mut GameState) {
    state.assert_invariants();
    let target = state.ball.pos.y - ARENA_CENTER_Y;
    let paddle = state.paddle_mut(Side::COMPUTER);
    let offset = paddle.offset();

    if offset > target && offset > -PADDLE_LIMIT {
        paddle.shift_clamped(-1);
    } else if offset < target && offset < PADDLE_LIMIT {
        paddle.shift_clamped(1);
    }
}

/// AI task period for a given human score: `base / (score + 1)` in whole
/// milliseconds, never below [`MIN_AI_PERIOD`]
pub fn ai_period(base: Duration, human_score: u32) -> Duration {
    let millis = base.as_millis() as u64 / (u64::from(human_score) + 1);
    Duration::from_millis(millis).max(MIN_AI_PERIOD)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Paddle;
    use glam::IVec2;

    fn state_with_ball_y(y: i32, offset: i32) -> GameState {
        let mut state = GameState::new();
        state.ball.pos = IVec2::new(64, y);
        state.right = Paddle::at(offset);
        state
    }

    #[test]
    fn test_single_step_toward_ball() {
        let mut state = state_with_ball_y(50, 0);
        track_ball(&mut state);
        assert_eq!(state.right.offset(), 1);
    }

    #[test]
    fn test_moves_up_toward_high_ball() {
        let mut state = state_with_ball_y(20, 3);
        track_ball(&mut state);
        assert_eq!(state.right.offset(), 2);
    }

    #[test]
    fn test_aligned_paddle_holds() {
        let mut state = state_with_ball_y(40, 3);
        track_ball(&mut state);
        assert_eq!(state.right.offset(), 3);
    }

    #[test]
    fn test_stops_at_limit() {
        // Ball below the reachable range: target +26
        let mut state = state_with_ball_y(63, 24);
        track_ball(&mut state);
        assert_eq!(state.right.offset(), 24);

        let mut state = state_with_ball_y(10, -24);
        track_ball(&mut state);
        assert_eq!(state.right.offset(), -24);
    }

    #[test]
    fn test_human_paddle_untouched() {
        let mut state = state_with_ball_y(60, 0);
        track_ball(&mut state);
        assert_eq!(state.left.offset(), 0);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_corrupt_computer_offset_fails_fast() {
        let json = r#"{"ball":{"pos":[64,60],"direction":"DownLeft"},"left":{"offset":0},
            "right":{"offset":30},"left_score":0,"right_score":0,"paused":false}"#;
        let mut state: GameState = serde_json::from_str(json).unwrap();
        track_ball(&mut state);
    }

    #[test]
    fn test_period_ramps_with_human_score() {
        let base = Duration::from_millis(50);
        assert_eq!(ai_period(base, 0), Duration::from_millis(50));
        assert_eq!(ai_period(base, 1), Duration::from_millis(25));
        assert_eq!(ai_period(base, 2), Duration::from_millis(16));
        assert_eq!(ai_period(base, 49), Duration::from_millis(1));
    }

    #[test]
    fn test_period_never_zero() {
        let base = Duration::from_millis(50);
        assert_eq!(ai_period(base, 50), MIN_AI_PERIOD);
        assert_eq!(ai_period(base, u32::MAX), MIN_AI_PERIOD);
    }
}
