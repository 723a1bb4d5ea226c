//! Session host owning every state machine and the scheduler.
//!
//! The view holds one `Session` for its lifetime. User controls call the
//! action methods; fired timers come back through [`Session::handle`].
//! Dropping the session (or calling [`Session::teardown`]) disarms every
//! timer it armed.

use crate::config::{CelebrationConfig, ConfigError};
use crate::confetti::ParticleEmitter;
use crate::flight::{FlightSequence, FlightStatus};
use crate::scheduler::{Fired, ManualScheduler, Millis, Scheduler, TimerEvent};
use crate::tab::{ActiveTab, TabSelection};

pub struct Session<S: Scheduler> {
    scheduler: S,
    flight: FlightSequence,
    emitter: ParticleEmitter,
    tabs: TabSelection,
    torn_down: bool,
}

impl<S: Scheduler> Session<S> {
    pub fn new(config: CelebrationConfig, seed: u64, scheduler: S) -> Result<Self, ConfigError> {
        let flight = FlightSequence::new(config.takeoff_delay_ms);
        let emitter = ParticleEmitter::new(config, seed)?;
        Ok(Self {
            scheduler,
            flight,
            emitter,
            tabs: TabSelection::default(),
            torn_down: false,
        })
    }

    pub fn status(&self) -> FlightStatus {
        self.flight.status()
    }

    pub fn emitter(&self) -> &ParticleEmitter {
        &self.emitter
    }

    pub fn is_celebrating(&self) -> bool {
        self.emitter.is_enabled()
    }

    pub fn active_tab(&self) -> ActiveTab {
        self.tabs.current()
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// "Initiate flight". Only has an effect while grounded.
    pub fn initiate_flight(&mut self) -> bool {
        if self.torn_down {
            return false;
        }
        self.flight.initiate(&mut self.scheduler)
    }

    /// Header "celebration mode" toggle. Returns whether confetti is now on.
    pub fn toggle_celebration(&mut self) -> bool {
        if self.torn_down {
            return false;
        }
        self.emitter.toggle(&mut self.scheduler)
    }

    /// "Acknowledge & Celebrate". Always turns confetti on.
    pub fn acknowledge(&mut self) {
        if self.torn_down {
            return;
        }
        self.emitter.set_enabled(true, &mut self.scheduler);
    }

    /// Returns whether the selection changed.
    pub fn select_tab(&mut self, tab: ActiveTab) -> bool {
        self.tabs.select(tab)
    }

    /// Routes a fired timer to its owner.
    pub fn handle(&mut self, fired: Fired) {
        if self.torn_down {
            tracing::debug!("[session] {:?} after teardown ignored", fired.event);
            return;
        }

        match fired.event {
            TimerEvent::Takeoff => {
                if self.flight.on_takeoff(fired.handle) {
                    self.emitter.set_enabled(true, &mut self.scheduler);
                }
            }
            TimerEvent::SpawnTick => self.emitter.on_spawn_tick(fired.handle, &mut self.scheduler),
            TimerEvent::Prune(batch) => {
                self.emitter.on_prune(batch);
            }
        }

        if fired.event.is_one_shot() {
            self.scheduler.release(fired.handle);
        }
    }

    /// Disarms every timer. Safe to call more than once.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        self.flight.shutdown(&mut self.scheduler);
        self.emitter.shutdown(&mut self.scheduler);
        self.scheduler.cancel_all();
        tracing::info!("[session] Torn down");
    }
}

impl<S: Scheduler> Drop for Session<S> {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl Session<ManualScheduler> {
    /// Advances simulated time, handling each timer as it fires.
    pub fn advance(&mut self, ms: Millis) {
        let target = self.scheduler.now() + u64::from(ms);
        while let Some(fired) = self.scheduler.next_due(target) {
            self.handle(fired);
        }
        self.scheduler.advance_clock_to(target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session<ManualScheduler> {
        Session::new(CelebrationConfig::default(), 44, ManualScheduler::new()).unwrap()
    }

    #[test]
    fn test_takeoff_enables_confetti() {
        let mut session = session();
        assert!(session.initiate_flight());
        assert_eq!(session.status(), FlightStatus::Taxiing);
        assert!(!session.is_celebrating());

        session.advance(2999);
        assert_eq!(session.status(), FlightStatus::Taxiing);
        assert!(session.emitter().is_empty());

        session.advance(1);
        assert_eq!(session.status(), FlightStatus::Airborne);
        assert!(session.is_celebrating());
        assert_eq!(session.emitter().len(), 50);
    }

    #[test]
    fn test_initiate_is_one_shot() {
        let mut session = session();
        session.initiate_flight();
        session.initiate_flight();
        assert_eq!(session.scheduler().armed(), 1);

        session.advance(3000);
        assert!(!session.initiate_flight());
        assert_eq!(session.status(), FlightStatus::Airborne);
        // Spawn timer plus the first batch's prune; no second takeoff.
        assert_eq!(session.scheduler().armed(), 2);
    }

    #[test]
    fn test_acknowledge_while_celebrating_keeps_cadence() {
        let mut session = session();
        session.initiate_flight();
        session.advance(3000);

        session.acknowledge();
        assert_eq!(session.emitter().len(), 50);

        session.advance(2000);
        assert_eq!(session.emitter().len(), 100);
    }

    #[test]
    fn test_toggle_off_then_acknowledge() {
        let mut session = session();
        session.initiate_flight();
        session.advance(3000);

        assert!(!session.toggle_celebration());
        session.advance(4500);
        assert!(session.emitter().is_empty());

        session.acknowledge();
        assert!(session.is_celebrating());
        assert_eq!(session.emitter().len(), 50);
    }

    #[test]
    fn test_tab_selection() {
        let mut session = session();
        assert_eq!(session.active_tab(), ActiveTab::Metrics);

        session.select_tab(ActiveTab::Perks);
        session.select_tab(ActiveTab::Metrics);
        assert_eq!(session.active_tab(), ActiveTab::Metrics);
        assert!(!session.select_tab(ActiveTab::Metrics));
    }

    #[test]
    fn test_teardown_while_taxiing() {
        let mut session = session();
        session.initiate_flight();

        session.teardown();
        assert_eq!(session.scheduler().armed(), 0);

        session.advance(10_000);
        assert_eq!(session.status(), FlightStatus::Taxiing);
        assert!(!session.is_celebrating());
    }

    #[test]
    fn test_teardown_while_celebrating() {
        let mut session = session();
        session.initiate_flight();
        session.advance(5000);
        assert!(session.scheduler().armed() > 0);

        session.teardown();
        session.teardown();

        assert_eq!(session.scheduler().armed(), 0);
        assert!(!session.toggle_celebration());
        session.acknowledge();
        assert_eq!(session.scheduler().armed(), 0);
    }

    #[test]
    fn test_count_never_exceeds_bound_within_an_instant() {
        let mut session = session();
        let bound = session.emitter().config().steady_state_bound();
        session.initiate_flight();

        let mut peak = 0;
        let target = 30_000;
        while let Some(fired) = session.scheduler.next_due(target) {
            session.handle(fired);
            peak = peak.max(session.emitter().len());
        }
        assert_eq!(peak, bound);
    }

    #[test]
    fn test_fired_after_teardown_is_ignored() {
        let mut session = session();
        session.initiate_flight();
        let handle = session.flight.takeoff_timer().unwrap();

        session.teardown();
        session.handle(Fired {
            handle,
            event: TimerEvent::Takeoff,
        });

        assert_eq!(session.status(), FlightStatus::Taxiing);
        assert!(!session.is_celebrating());
        assert_eq!(session.scheduler().armed(), 0);
    }

    #[test]
    fn test_duplicate_takeoff_while_airborne() {
        let mut session = session();
        session.initiate_flight();
        let handle = session.flight.takeoff_timer().unwrap();
        session.advance(3000);
        assert_eq!(session.status(), FlightStatus::Airborne);

        session.handle(Fired {
            handle,
            event: TimerEvent::Takeoff,
        });

        assert_eq!(session.status(), FlightStatus::Airborne);
        assert_eq!(session.emitter().len(), 50);
        assert_eq!(session.scheduler().armed(), 2);
    }

    #[test]
    fn test_replaced_spawn_tick_is_ignored() {
        let mut session = session();
        session.initiate_flight();
        session.advance(3000);
        let old = session.emitter().spawn_timer().unwrap();

        session.toggle_celebration();
        session.toggle_celebration();
        let current = session.emitter().spawn_timer().unwrap();
        assert_ne!(old, current);
        assert_eq!(session.emitter().len(), 100);

        session.handle(Fired {
            handle: old,
            event: TimerEvent::SpawnTick,
        });
        assert_eq!(session.emitter().len(), 100);

        session.handle(Fired {
            handle: current,
            event: TimerEvent::SpawnTick,
        });
        assert_eq!(session.emitter().len(), 150);
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = CelebrationConfig {
            batch_size: 0,
            ..CelebrationConfig::default()
        };
        assert!(Session::new(config, 0, ManualScheduler::new()).is_err());
    }
}
