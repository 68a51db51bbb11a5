//! Human paddle control
//!
//! Turns discrete key presses into paddle moves. This is the only code that
//! moves the human paddle.

use super::state::{GameState, Side};
use crate::consts::PADDLE_STEP;
use crate::platform::keys::Key;

/// What the main loop should do after a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Keep running
    Continue,
    /// Stop all tasks and leave
    Quit,
}

/// Apply one key press to the game
pub fn handle_key(state: &mut GameState, key: Key) -> KeyOutcome {
    state.assert_invariants();
    match key {
        Key::Up => state.paddle_mut(Side::HUMAN).shift_clamped(-PADDLE_STEP),
        Key::Down => state.paddle_mut(Side::HUMAN).shift_clamped(PADDLE_STEP),
        Key::Pause => {
            state.paused = !state.paused;
            log::info!("{}", if state.paused { "Paused" } else { "Resumed" });
        }
        Key::Menu => return KeyOutcome::Quit,
        Key::Other => {}
    }
    KeyOutcome::Continue
}
