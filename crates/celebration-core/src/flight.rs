//! Takeoff sequence gating the dashboard.

use serde::{Deserialize, Serialize};

use crate::scheduler::{Millis, Scheduler, TimerEvent, TimerHandle};

/// Where the flight is. Only ever moves forward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlightStatus {
    /// Waiting at the gate for the captain.
    #[default]
    Grounded,
    /// Engines spooling up, takeoff timer armed.
    Taxiing,
    /// Terminal state. The dashboard is shown for the rest of the session.
    Airborne,
}

impl FlightStatus {
    pub fn is_airborne(self) -> bool {
        self == Self::Airborne
    }
}

/// One-shot grounded → taxiing → airborne controller.
#[derive(Debug)]
pub struct FlightSequence {
    status: FlightStatus,
    takeoff_delay_ms: Millis,
    takeoff_timer: Option<TimerHandle>,
}

impl FlightSequence {
    pub fn new(takeoff_delay_ms: Millis) -> Self {
        Self {
            status: FlightStatus::Grounded,
            takeoff_delay_ms,
            takeoff_timer: None,
        }
    }

    pub fn status(&self) -> FlightStatus {
        self.status
    }

    /// Pending takeoff timer, if taxiing.
    pub fn takeoff_timer(&self) -> Option<TimerHandle> {
        self.takeoff_timer
    }

    /// Starts taxiing and arms the takeoff timer.
    ///
    /// Returns `false` without touching the scheduler unless grounded.
    pub fn initiate(&mut self, scheduler: &mut impl Scheduler) -> bool {
        if self.status != FlightStatus::Grounded {
            tracing::debug!("[flight] initiate ignored while {:?}", self.status);
            return false;
        }

        self.status = FlightStatus::Taxiing;
        self.takeoff_timer = Some(scheduler.schedule(self.takeoff_delay_ms, TimerEvent::Takeoff));
        tracing::info!(
            "[flight] Taxiing, takeoff in {}ms",
            self.takeoff_delay_ms
        );
        true
    }

    /// Handles the fired takeoff timer.
    ///
    /// Returns `true` exactly once, on the taxiing → airborne transition.
    pub fn on_takeoff(&mut self, handle: TimerHandle) -> bool {
        if self.status != FlightStatus::Taxiing || self.takeoff_timer != Some(handle) {
            tracing::debug!("[flight] stale takeoff event ignored");
            return false;
        }

        self.takeoff_timer = None;
        self.status = FlightStatus::Airborne;
        tracing::info!("[flight] Airborne");
        true
    }

    /// Cancels the pending takeoff, if any. The status is left unchanged.
    pub fn shutdown(&mut self, scheduler: &mut impl Scheduler) {
        if let Some(handle) = self.takeoff_timer.take() {
            scheduler.cancel(handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::ManualScheduler;

    fn fire_all(flight: &mut FlightSequence, sched: &mut ManualScheduler, ms: Millis) -> usize {
        sched
            .advance(ms)
            .into_iter()
            .filter(|fired| fired.event == TimerEvent::Takeoff && flight.on_takeoff(fired.handle))
            .count()
    }

    #[test]
    fn test_starts_grounded() {
        let flight = FlightSequence::new(3000);
        assert_eq!(flight.status(), FlightStatus::Grounded);
        assert!(flight.takeoff_timer().is_none());
    }

    #[test]
    fn test_initiate_taxis_then_takes_off() {
        let mut sched = ManualScheduler::new();
        let mut flight = FlightSequence::new(3000);

        assert!(flight.initiate(&mut sched));
        assert_eq!(flight.status(), FlightStatus::Taxiing);

        assert_eq!(fire_all(&mut flight, &mut sched, 2999), 0);
        assert_eq!(flight.status(), FlightStatus::Taxiing);

        assert_eq!(fire_all(&mut flight, &mut sched, 1), 1);
        assert_eq!(flight.status(), FlightStatus::Airborne);
        assert!(flight.takeoff_timer().is_none());
    }

    #[test]
    fn test_repeated_initiate_schedules_nothing() {
        let mut sched = ManualScheduler::new();
        let mut flight = FlightSequence::new(3000);

        assert!(flight.initiate(&mut sched));
        assert!(!flight.initiate(&mut sched));
        assert!(!flight.initiate(&mut sched));
        assert_eq!(sched.armed(), 1);

        assert_eq!(fire_all(&mut flight, &mut sched, 10_000), 1);
        assert!(!flight.initiate(&mut sched));
        assert_eq!(sched.armed(), 0);
        assert_eq!(flight.status(), FlightStatus::Airborne);
    }

    #[test]
    fn test_stale_takeoff_is_ignored() {
        let mut flight = FlightSequence::new(3000);
        assert!(!flight.on_takeoff(TimerHandle::new(7)));
        assert_eq!(flight.status(), FlightStatus::Grounded);
    }

    #[test]
    fn test_shutdown_cancels_pending_takeoff() {
        let mut sched = ManualScheduler::new();
        let mut flight = FlightSequence::new(3000);
        flight.initiate(&mut sched);

        flight.shutdown(&mut sched);

        assert_eq!(sched.armed(), 0);
        assert!(sched.advance(5000).is_empty());
        assert_eq!(flight.status(), FlightStatus::Taxiing);
    }
}
