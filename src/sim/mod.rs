//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Integer positions only
//! - No randomness, serves always go to a fixed spot
//! - No rendering, timer or terminal dependencies

pub mod ai;
pub mod input;
pub mod physics;
pub mod state;

pub use ai::{ai_period, track_ball};
pub use input::{KeyOutcome, handle_key};
pub use physics::{TickOutcome, advance};
pub use state::{Ball, Direction, GameEvent, GameState, Paddle, Score, Side};
