//! Periodic game tasks
//!
//! Render, physics and AI each own a timer slot and fire at their own rate.
//! All of them run one at a time against the same [`Game`], so the state is
//! never touched by two tasks at once. The AI slot is re-armed whenever the
//! human's score changes, which is how the computer speeds up.

use std::time::{Duration, Instant};

use crate::app::Game;
use crate::platform::timer::{Slot, Timers};
use crate::renderer::{self, Framebuffer};
use crate::settings::TickRates;
use crate::sim::{ai_period, physics, track_ball};

fn render_task<F: Framebuffer>(game: &mut Game<F>) {
    game.counts.render += 1;
    if !game.hold_display {
        renderer::render(&game.state, &mut game.screen);
    }
}

fn physics_task<F: Framebuffer>(game: &mut Game<F>) {
    game.counts.physics += 1;
    if !game.state.paused {
        physics::advance(&mut game.state);
    }
}

fn ai_task<F: Framebuffer>(game: &mut Game<F>) {
    game.counts.ai += 1;
    if !game.state.paused {
        track_ball(&mut game.state);
    }
}

/// Owns the task slots for one game
pub struct Scheduler<F: Framebuffer + 'static> {
    timers: Timers<Game<F>>,
    rates: TickRates,
    /// Human score the AI slot was last armed for
    ai_armed_for: Option<u32>,
    stopped: bool,
}

impl<F: Framebuffer + 'static> Scheduler<F> {
    pub fn new(rates: TickRates) -> Self {
        Self {
            timers: Timers::new(),
            rates,
            ai_armed_for: None,
            stopped: false,
        }
    }

    /// Arm render, physics and AI. The input-poll slot stays free.
    pub fn start(&mut self, now: Instant, game: &Game<F>) {
        if self.stopped {
            log::warn!("Scheduler already shut down; not restarting");
            return;
        }
        self.timers
            .schedule(Slot::Render, self.rates.render, now, render_task::<F>);
        self.timers
            .schedule(Slot::Physics, self.rates.physics, now, physics_task::<F>);
        self.arm_ai(now, game.state.human_score());
        log::info!(
            "Started: render {:?}, physics {:?}, ai {:?}",
            self.rates.render,
            self.rates.physics,
            self.ai_period().unwrap_or_default()
        );
    }

    fn arm_ai(&mut self, now: Instant, human_score: u32) {
        let period = ai_period(self.rates.ai_base, human_score);
        self.timers.cancel(Slot::Ai);
        self.timers.schedule(Slot::Ai, period, now, ai_task::<F>);
        self.ai_armed_for = Some(human_score);
        log::debug!("AI re-armed at {period:?} for human score {human_score}");
    }

    /// Fire every task due at `now`, one at a time. Returns how many ran.
    ///
    /// The AI slot is re-armed straight after the task that changed the
    /// human score, before anything else fires.
    pub fn run_due(&mut self, now: Instant, game: &mut Game<F>) -> usize {
        if self.stopped {
            return 0;
        }
        let mut fired = 0;
        while self.timers.fire_next(now, game).is_some() {
            fired += 1;
            let score = game.state.human_score();
            if self.ai_armed_for != Some(score) {
                self.arm_ai(now, score);
            }
        }
        fired
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    /// Current AI period, if armed
    pub fn ai_period(&self) -> Option<Duration> {
        self.timers.period(Slot::Ai)
    }

    pub fn is_armed(&self, slot: Slot) -> bool {
        self.timers.is_armed(slot)
    }

    pub fn is_running(&self) -> bool {
        !self.stopped
    }

    /// Cancel every slot. Safe to call any number of times; returns how many
    /// slots this call actually disarmed.
    pub fn shutdown(&mut self) -> usize {
        let cancelled = Slot::ALL
            .into_iter()
            .filter(|slot| self.timers.cancel(*slot))
            .count();
        if !self.stopped {
            self.stopped = true;
            log::info!("Shut down, {cancelled} task(s) cancelled");
        }
        cancelled
    }
}

impl<F: Framebuffer + 'static> Drop for Scheduler<F> {
    fn drop(&mut self) {
        self.shutdown();
    }
}
