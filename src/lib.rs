//! Calc Pong - two-player Pong for a 128x64 monochrome display
//!
//! Core modules:
//! - `sim`: Deterministic integer simulation (ball, paddles, scores, AI, input)
//! - `renderer`: Paints the game state into a framebuffer
//! - `platform`: Timer facility, key source and terminal backend
//! - `scheduler`: Periodic render/physics/AI tasks and the shutdown hook
//! - `app`: Game context and the main event loop
//! - `settings`: Tick-rate configuration

pub mod app;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod scheduler;
pub mod settings;
pub mod sim;

pub use app::{Game, run};
pub use error::{Error, Result};
pub use scheduler::Scheduler;
pub use settings::{Settings, TickRates, WaitMode};

/// Display and arena layout. Nothing here is configurable at runtime.
pub mod consts {
    /// Display dimensions (pixels)
    pub const DISPLAY_WIDTH: i32 = 128;
    pub const DISPLAY_HEIGHT: i32 = 64;
    pub const DISPLAY_CENTER_X: i32 = DISPLAY_WIDTH / 2;
    pub const DISPLAY_CENTER_Y: i32 = DISPLAY_HEIGHT / 2;

    /// Inverted strip across the top holding both scores
    pub const SCOREBOARD_HEIGHT: i32 = 11;

    /// Arena is everything below the scoreboard
    pub const ARENA_HEIGHT: i32 = DISPLAY_HEIGHT - SCOREBOARD_HEIGHT;
    pub const ARENA_CENTER_Y: i32 = ARENA_HEIGHT / 2 + SCOREBOARD_HEIGHT;

    /// Vertical band the ball bounces inside. Checked with strict `<` / `>`,
    /// so a ball sitting exactly on either bound turns on the following tick.
    pub const WALL_TOP: i32 = SCOREBOARD_HEIGHT;
    pub const WALL_BOTTOM: i32 = DISPLAY_HEIGHT - 1;

    /// Paddle defaults
    pub const PADDLE_SIZE: i32 = 14;
    pub const PADDLE_THICK: i32 = 2;
    /// Pixels the human paddle moves per key press
    pub const PADDLE_STEP: i32 = 2;
    /// Furthest a paddle may sit from its resting center
    pub const PADDLE_LIMIT: i32 = 24;

    /// Outermost paddle columns; thickness grows toward the middle
    pub const LEFT_PADDLE_X: i32 = 6;
    pub const RIGHT_PADDLE_X: i32 = DISPLAY_WIDTH - 7;

    /// Distance from the scored-against wall where the ball re-serves
    pub const SERVE_INSET: i32 = 32;

    /// Scores wrap at three digits on screen
    pub const SCORE_DIGITS: usize = 3;

    /// Default task periods (milliseconds)
    pub const RENDER_PERIOD_MS: u64 = 25;
    pub const PHYSICS_PERIOD_MS: u64 = 25;
    /// AI period before the human scores; divided by `human_score + 1`
    pub const AI_BASE_PERIOD_MS: u64 = 50;
}

#[cfg(test)]
mod tests {
    use super::consts::*;

    #[test]
    fn test_layout_matches_display() {
        assert_eq!(ARENA_HEIGHT, 53);
        assert_eq!(ARENA_CENTER_Y, 37);
        assert_eq!(RIGHT_PADDLE_X, 121);
        assert_eq!(WALL_BOTTOM, 63);
        assert_eq!(DISPLAY_CENTER_X, 64);
    }
}
