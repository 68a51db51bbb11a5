//! Key source capability
//!
//! The main loop blocks here between timer deadlines. Backends translate
//! their native events into [`Key`].

use std::collections::VecDeque;
use std::io;
use std::time::Duration;

/// A key press the game cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    /// Leave the game
    Menu,
    Pause,
    /// Any key without a binding
    Other,
}

/// Blocking key input
pub trait KeySource {
    /// Wait up to `timeout` for one key (`None` waits indefinitely).
    /// Returns `Ok(None)` when the wait ended without a key.
    fn wait_for_key(&mut self, timeout: Option<Duration>) -> io::Result<Option<Key>>;
}

/// Canned key sequence for tests and scripted runs.
///
/// Each entry is one wait result: `Some(key)` delivers a key, `None` a wait
/// that timed out. Once the script runs dry every wait returns
/// [`Key::Menu`], so a scripted session always ends.
#[derive(Debug, Clone, Default)]
pub struct ScriptedKeys {
    script: VecDeque<Option<Key>>,
    /// Sleep for the requested timeout on empty waits
    pub honor_timeouts: bool,
}

impl ScriptedKeys {
    pub fn new(script: impl IntoIterator<Item = Option<Key>>) -> Self {
        Self {
            script: script.into_iter().collect(),
            honor_timeouts: false,
        }
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl KeySource for ScriptedKeys {
    fn wait_for_key(&mut self, timeout: Option<Duration>) -> io::Result<Option<Key>> {
        match self.script.pop_front() {
            Some(Some(key)) => Ok(Some(key)),
            Some(None) => {
                if self.honor_timeouts {
                    if let Some(timeout) = timeout {
                        std::thread::sleep(timeout);
                    }
                }
                Ok(None)
            }
            None => Ok(Some(Key::Menu)),
        }
    }
}
