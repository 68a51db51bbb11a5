//! Game context and main loop
//!
//! The loop blocks on the key source until the next timer deadline, applies
//! any key, then lets the scheduler fire whatever is due. Keys and timer
//! tasks therefore never overlap. The wait mode only decides when the
//! display refreshes; physics and AI run on their own periods either way.

use std::time::Instant;

use crate::error::Result;
use crate::platform::keys::KeySource;
use crate::renderer::{self, Framebuffer};
use crate::scheduler::Scheduler;
use crate::settings::WaitMode;
use crate::sim::{GameState, KeyOutcome, handle_key};

/// How many times each task has fired
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskCounts {
    pub render: u64,
    pub physics: u64,
    pub ai: u64,
}

/// Everything the periodic tasks operate on
#[derive(Debug)]
pub struct Game<F> {
    pub state: GameState,
    pub screen: F,
    pub counts: TaskCounts,
    /// Render ticks skip drawing while set
    pub hold_display: bool,
}

impl<F: Framebuffer> Game<F> {
    pub fn new(screen: F) -> Self {
        Self {
            state: GameState::new(),
            screen,
            counts: TaskCounts::default(),
            hold_display: false,
        }
    }
}

/// Play until the quit key. All tasks are cancelled before this returns,
/// whether it ends by quitting or with a key-source error.
pub fn run<F, K>(
    game: &mut Game<F>,
    scheduler: &mut Scheduler<F>,
    keys: &mut K,
    mode: WaitMode,
) -> Result<()>
where
    F: Framebuffer + 'static,
    K: KeySource,
{
    game.hold_display = mode == WaitMode::HaltTimers;
    renderer::render(&game.state, &mut game.screen);
    scheduler.start(Instant::now(), game);

    let result = event_loop(game, scheduler, keys, mode);
    scheduler.shutdown();
    result
}

fn event_loop<F, K>(
    game: &mut Game<F>,
    scheduler: &mut Scheduler<F>,
    keys: &mut K,
    mode: WaitMode,
) -> Result<()>
where
    F: Framebuffer + 'static,
    K: KeySource,
{
    loop {
        let timeout = scheduler
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(Instant::now()));

        let key = keys.wait_for_key(timeout)?;
        if let Some(key) = key {
            if handle_key(&mut game.state, key) == KeyOutcome::Quit {
                log::info!("Quit requested");
                return Ok(());
            }
        }

        scheduler.run_due(Instant::now(), game);

        if key.is_some() && mode == WaitMode::HaltTimers {
            renderer::render(&game.state, &mut game.screen);
        }
    }
}
