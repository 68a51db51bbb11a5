//! Platform capabilities
//!
//! What the game consumes from its environment:
//! - Periodic timers (`timer`)
//! - Blocking key input (`keys`)
//! - A terminal display and keyboard (`terminal`)

pub mod keys;
pub mod terminal;
pub mod timer;

pub use keys::{Key, KeySource, ScriptedKeys};
pub use timer::{Slot, Timers};
