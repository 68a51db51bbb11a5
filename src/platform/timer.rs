//! Periodic timer facility
//!
//! Four numbered slots, each holding at most one periodic callback. Firing is
//! driven by the caller: [`Timers::fire_next`] runs one due callback to
//! completion, so callbacks never interleave and can share the context
//! without locks.

use std::fmt;
use std::time::{Duration, Instant};

/// Timer slot ids
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Slot {
    Render,
    Physics,
    Ai,
    /// Reserved for polled input; nothing arms it today
    InputPoll,
}

const SLOT_COUNT: usize = 4;

impl Slot {
    pub const ALL: [Slot; SLOT_COUNT] = [Slot::Render, Slot::Physics, Slot::Ai, Slot::InputPoll];

    fn index(self) -> usize {
        self as usize
    }
}

pub type Callback<C> = Box<dyn FnMut(&mut C)>;

struct Armed<C> {
    period: Duration,
    next: Instant,
    callback: Callback<C>,
}

/// Periodic callbacks over a shared context `C`
pub struct Timers<C> {
    slots: [Option<Armed<C>>; SLOT_COUNT],
}

impl<C> Default for Timers<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> fmt::Debug for Timers<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_map();
        for slot in Slot::ALL {
            if let Some(armed) = &self.slots[slot.index()] {
                list.entry(&slot, &armed.period);
            }
        }
        list.finish()
    }
}

impl<C> Timers<C> {
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| None),
        }
    }

    /// Arm `slot`, replacing whatever it held. First firing is one period
    /// after `now`.
    pub fn schedule(
        &mut self,
        slot: Slot,
        period: Duration,
        now: Instant,
        callback: impl FnMut(&mut C) + 'static,
    ) {
        assert!(!period.is_zero(), "{slot:?} armed with a zero period");
        self.slots[slot.index()] = Some(Armed {
            period,
            next: now + period,
            callback: Box::new(callback),
        });
    }

    /// Disarm `slot`. Returns false if it was not armed.
    pub fn cancel(&mut self, slot: Slot) -> bool {
        self.slots[slot.index()].take().is_some()
    }

    pub fn is_armed(&self, slot: Slot) -> bool {
        self.slots[slot.index()].is_some()
    }

    pub fn period(&self, slot: Slot) -> Option<Duration> {
        self.slots[slot.index()].as_ref().map(|armed| armed.period)
    }

    pub fn armed_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Earliest deadline across armed slots
    pub fn next_deadline(&self) -> Option<Instant> {
        self.slots.iter().flatten().map(|armed| armed.next).min()
    }

    /// Run the earliest due callback, ties going to the lower slot.
    ///
    /// A slot that fell more than a period behind fires once and resumes one
    /// period after `now`; missed firings are dropped, not queued.
    pub fn fire_next(&mut self, now: Instant, ctx: &mut C) -> Option<Slot> {
        let (_, slot) = Slot::ALL
            .into_iter()
            .filter_map(|slot| {
                self.slots[slot.index()]
                    .as_ref()
                    .filter(|armed| armed.next <= now)
                    .map(|armed| (armed.next, slot))
            })
            .min()?;

        let armed = self.slots[slot.index()].as_mut()?;
        armed.next += armed.period;
        if armed.next <= now {
            armed.next = now + armed.period;
        }
        (armed.callback)(ctx);
        Some(slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_fires_after_one_period() {
        let start = Instant::now();
        let mut timers = Timers::<u32>::new();
        timers.schedule(Slot::Physics, ms(25), start, |count| *count += 1);

        let mut count = 0;
        assert_eq!(timers.fire_next(start + ms(24), &mut count), None);
        assert_eq!(timers.fire_next(start + ms(25), &mut count), Some(Slot::Physics));
        assert_eq!(count, 1);
        assert_eq!(timers.next_deadline(), Some(start + ms(50)));
    }

    #[test]
    fn test_earliest_deadline_first_then_slot_order() {
        let start = Instant::now();
        let mut timers = Timers::<Vec<Slot>>::new();
        timers.schedule(Slot::Ai, ms(10), start, |log| log.push(Slot::Ai));
        timers.schedule(Slot::Render, ms(25), start, |log| log.push(Slot::Render));
        timers.schedule(Slot::Physics, ms(25), start, |log| log.push(Slot::Physics));

        let mut log = Vec::new();
        let now = start + ms(25);
        while timers.fire_next(now, &mut log).is_some() {}
        // Ai was already a period behind at its first firing, so it fires once
        assert_eq!(log, vec![Slot::Ai, Slot::Render, Slot::Physics]);
    }

    #[test]
    fn test_late_slot_drops_missed_firings() {
        let start = Instant::now();
        let mut timers = Timers::<u32>::new();
        timers.schedule(Slot::Render, ms(10), start, |count| *count += 1);

        let mut count = 0;
        let now = start + ms(100);
        while timers.fire_next(now, &mut count).is_some() {}
        assert_eq!(count, 1);
        assert_eq!(timers.next_deadline(), Some(now + ms(10)));
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let start = Instant::now();
        let mut timers = Timers::<u32>::new();
        timers.schedule(Slot::Ai, ms(50), start, |_| {});
        assert!(timers.cancel(Slot::Ai));
        assert!(!timers.cancel(Slot::Ai));
        assert!(!timers.cancel(Slot::InputPoll));
        assert_eq!(timers.armed_count(), 0);
        assert_eq!(timers.next_deadline(), None);
    }

    #[test]
    fn test_reschedule_replaces_period() {
        let start = Instant::now();
        let mut timers = Timers::<u32>::new();
        timers.schedule(Slot::Ai, ms(50), start, |_| {});
        timers.schedule(Slot::Ai, ms(25), start + ms(5), |_| {});
        assert_eq!(timers.armed_count(), 1);
        assert_eq!(timers.period(Slot::Ai), Some(ms(25)));
        assert_eq!(timers.next_deadline(), Some(start + ms(30)));
    }

    #[test]
    fn test_cancelled_slot_never_fires() {
        let start = Instant::now();
        let mut timers = Timers::<u32>::new();
        timers.schedule(Slot::Physics, ms(25), start, |count| *count += 1);
        timers.cancel(Slot::Physics);
        let mut count = 0;
        assert_eq!(timers.fire_next(start + ms(1000), &mut count), None);
        assert_eq!(count, 0);
    }
}
