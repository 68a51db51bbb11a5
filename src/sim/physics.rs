//! Ball motion and collision
//!
//! One call to [`advance`] is one physics tick: step the ball, then resolve
//! walls, then resolve paddles. Everything is integer and deterministic.

use glam::IVec2;

use super::state::{GameEvent, GameState, Paddle, Side};
use crate::consts::*;

/// Result of a single physics tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickOutcome {
    pub events: Vec<GameEvent>,
}

impl TickOutcome {
    /// Side that scored this tick, if any
    pub fn scorer(&self) -> Option<Side> {
        self.events.iter().find_map(|event| match event {
            GameEvent::Point { scorer } => Some(*scorer),
            _ => None,
        })
    }
}

/// Advance the ball by one tick
pub fn advance(state: &mut GameState) -> TickOutcome {
    state.assert_invariants();
    let mut outcome = TickOutcome::default();

    state.ball.pos += state.ball.direction.step();

    if outside_wall_band(state.ball.pos.y) {
        state.ball.direction = state.ball.direction.flip_vertical();
        outcome.events.push(GameEvent::WallBounce);
    }

    if in_paddle_zone(state.ball.pos.x) {
        let side = Side::of_column(state.ball.pos.x);
        if blocks(state.paddle(side), state.ball.pos.y) {
            state.ball.direction = state.ball.direction.flip_horizontal();
            log::debug!("{side:?} paddle returned ball at y={}", state.ball.pos.y);
            outcome.events.push(GameEvent::PaddleHit(side));
        } else {
            let scorer = side.opponent();
            state.award_point(scorer);
            state.ball.pos = serve_position(side);
            state.ball.direction = state.ball.direction.flip_horizontal();
            log::info!(
                "Point to {scorer:?} ({:03} - {:03})",
                state.left_score.get(),
                state.right_score.get()
            );
            outcome.events.push(GameEvent::Point { scorer });
        }
    }

    outcome
}

/// Strictly above or below the bounce band. A ball exactly on a bound is
/// still inside and turns on the next tick.
pub fn outside_wall_band(y: i32) -> bool {
    y < WALL_TOP || y > WALL_BOTTOM
}

/// Ball column has reached either paddle
pub fn in_paddle_zone(x: i32) -> bool {
    x < Paddle::face_x(Side::Left) || x > Paddle::face_x(Side::Right)
}

/// Whether `paddle` stops a ball at row `y`. The end rows do not count.
pub fn blocks(paddle: &Paddle, y: i32) -> bool {
    let (top, bottom) = paddle.span();
    y > top && y < bottom
}

/// Where the ball re-serves after getting past the paddle on `missed`
pub fn serve_position(missed: Side) -> IVec2 {
    let x = match missed {
        Side::Left => SERVE_INSET,
        Side::Right => DISPLAY_WIDTH - SERVE_INSET,
    };
    IVec2::new(x, ARENA_CENTER_Y)
}
