//! Timer scheduling abstraction.
//!
//! State machines never own a timer directly. They ask a [`Scheduler`] to
//! deliver a [`TimerEvent`] later, and the host routes the resulting
//! [`Fired`] value back to them. The browser binds this to `setTimeout` /
//! `setInterval`; tests use [`ManualScheduler`], a simulated clock.

use std::collections::BTreeMap;

use crate::confetti::BatchId;

/// Milliseconds, matching the browser timer API.
pub type Millis = u32;

/// Opaque handle for an armed timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerHandle(u64);

impl TimerHandle {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// What a timer means once it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// The taxiing delay elapsed.
    Takeoff,
    /// One tick of the recurring confetti spawn timer.
    SpawnTick,
    /// The lifetime of a confetti batch elapsed.
    Prune(BatchId),
}

impl TimerEvent {
    /// Whether this event comes from a one-shot timer.
    pub const fn is_one_shot(self) -> bool {
        !matches!(self, Self::SpawnTick)
    }
}

/// A timer that fired, as delivered to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fired {
    pub handle: TimerHandle,
    pub event: TimerEvent,
}

/// Deferred-callback scheduler.
///
/// Every handle returned by `schedule*` stays armed until it fires (one-shot),
/// is cancelled, or `cancel_all` runs.
pub trait Scheduler {
    /// Arms a one-shot timer that fires once after at least `delay_ms`.
    fn schedule(&mut self, delay_ms: Millis, event: TimerEvent) -> TimerHandle;

    /// Arms a repeating timer that fires every `period_ms`.
    fn schedule_repeating(&mut self, period_ms: Millis, event: TimerEvent) -> TimerHandle;

    /// Disarms a timer. Unknown or already-fired handles are ignored.
    fn cancel(&mut self, handle: TimerHandle);

    /// Disarms every timer this scheduler owns.
    fn cancel_all(&mut self);

    /// Releases bookkeeping for a one-shot timer whose event has been handled.
    fn release(&mut self, handle: TimerHandle) {
        self.cancel(handle);
    }

    /// Number of timers currently armed.
    fn armed(&self) -> usize;
}

#[derive(Debug, Clone)]
struct ManualEntry {
    due: u64,
    period: Option<Millis>,
    event: TimerEvent,
}

/// Deterministic scheduler driven by an explicit simulated clock.
///
/// Timers fire in due order. At the same instant one-shot timers fire before
/// repeating ones, so expiries land before the next recurring tick. Otherwise
/// ties fire in the order they were scheduled.
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    now: u64,
    next_handle: u64,
    timers: BTreeMap<TimerHandle, ManualEntry>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current simulated time in milliseconds.
    pub fn now(&self) -> u64 {
        self.now
    }

    /// Whether `handle` is still armed.
    pub fn is_armed(&self, handle: TimerHandle) -> bool {
        self.timers.contains_key(&handle)
    }

    /// Pops the earliest timer due at or before `until`, moving the clock to
    /// its due time.
    ///
    /// Repeating timers are re-armed one period later. Hosts that react to
    /// events by scheduling new timers should drain with this method so the
    /// new timers are measured from the moment their trigger fired.
    pub fn next_due(&mut self, until: u64) -> Option<Fired> {
        let (handle, due) = self
            .timers
            .iter()
            .filter(|(_, entry)| entry.due <= until)
            .min_by_key(|(handle, entry)| (entry.due, entry.period.is_some(), **handle))
            .map(|(handle, entry)| (*handle, entry.due))?;

        self.now = self.now.max(due);

        let entry = self.timers.get_mut(&handle)?;
        let event = entry.event;
        match entry.period {
            Some(period) => entry.due += u64::from(period.max(1)),
            None => {
                self.timers.remove(&handle);
            }
        }

        Some(Fired { handle, event })
    }

    /// Moves the clock forward without firing anything that is not yet due.
    pub fn advance_clock_to(&mut self, target: u64) {
        self.now = self.now.max(target);
    }

    /// Advances the clock by `ms`, returning every timer that fired on the way.
    pub fn advance(&mut self, ms: Millis) -> Vec<Fired> {
        let target = self.now + u64::from(ms);
        let mut fired = Vec::new();
        while let Some(next) = self.next_due(target) {
            fired.push(next);
        }
        self.advance_clock_to(target);
        fired
    }

    fn arm(&mut self, delay: Millis, period: Option<Millis>, event: TimerEvent) -> TimerHandle {
        let handle = TimerHandle::new(self.next_handle);
        self.next_handle += 1;
        self.timers.insert(
            handle,
            ManualEntry {
                due: self.now + u64::from(delay),
                period,
                event,
            },
        );
        handle
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, delay_ms: Millis, event: TimerEvent) -> TimerHandle {
        self.arm(delay_ms, None, event)
    }

    fn schedule_repeating(&mut self, period_ms: Millis, event: TimerEvent) -> TimerHandle {
        self.arm(period_ms.max(1), Some(period_ms), event)
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.timers.remove(&handle);
    }

    fn cancel_all(&mut self) {
        self.timers.clear();
    }

    fn armed(&self) -> usize {
        self.timers.len()
    }
}
