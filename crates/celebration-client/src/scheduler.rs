//! Browser-backed [`Scheduler`] using `gloo` timers.

use std::collections::HashMap;

use celebration_core::{Fired, Millis, Scheduler, TimerEvent, TimerHandle};
use gloo::timers::callback::{Interval, Timeout};
use yew::Callback;

/// Dropping either variant clears the underlying browser timer.
enum BrowserTimer {
    #[allow(dead_code)]
    Once(Timeout),
    #[allow(dead_code)]
    Repeating(Interval),
}

/// Forwards fired timers to `sink` on a microtask.
///
/// Deferring the emit means the session can release a one-shot timer while
/// handling its event without dropping the closure that is still running.
fn forward(sink: &Callback<Fired>, fired: Fired) {
    let sink = sink.clone();
    wasm_bindgen_futures::spawn_local(async move {
        sink.emit(fired);
    });
}

pub struct BrowserScheduler {
    next_handle: u64,
    timers: HashMap<TimerHandle, BrowserTimer>,
    sink: Callback<Fired>,
}

impl BrowserScheduler {
    pub fn new(sink: Callback<Fired>) -> Self {
        Self {
            next_handle: 0,
            timers: HashMap::new(),
            sink,
        }
    }

    fn next_handle(&mut self) -> TimerHandle {
        let handle = TimerHandle::new(self.next_handle);
        self.next_handle += 1;
        handle
    }
}

impl Scheduler for BrowserScheduler {
    fn schedule(&mut self, delay_ms: Millis, event: TimerEvent) -> TimerHandle {
        let handle = self.next_handle();
        let sink = self.sink.clone();
        let timeout = Timeout::new(delay_ms, move || {
            forward(&sink, Fired { handle, event });
        });
        self.timers.insert(handle, BrowserTimer::Once(timeout));
        handle
    }

    fn schedule_repeating(&mut self, period_ms: Millis, event: TimerEvent) -> TimerHandle {
        let handle = self.next_handle();
        let sink = self.sink.clone();
        let interval = Interval::new(period_ms, move || {
            forward(&sink, Fired { handle, event });
        });
        self.timers.insert(handle, BrowserTimer::Repeating(interval));
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.timers.remove(&handle);
    }

    fn cancel_all(&mut self) {
        if !self.timers.is_empty() {
            tracing::debug!("[scheduler] Clearing {} browser timers", self.timers.len());
        }
        self.timers.clear();
    }

    fn armed(&self) -> usize {
        self.timers.len()
    }
}
