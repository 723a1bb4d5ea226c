//! Hook owning the celebration session for the lifetime of the view.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use celebration_core::{ActiveTab, CelebrationConfig, Fired, FlightStatus, Particle, Session};
use rand::Rng;
use yew::prelude::*;

use crate::scheduler::BrowserScheduler;

type SessionCell = RefCell<Option<Session<BrowserScheduler>>>;

/// Read-only view of the session taken at render time.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub status: FlightStatus,
    pub celebrating: bool,
    pub active_tab: ActiveTab,
    pub particles: Rc<Vec<Particle>>,
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self {
            status: FlightStatus::Grounded,
            celebrating: false,
            active_tab: ActiveTab::default(),
            particles: Rc::new(Vec::new()),
        }
    }
}

/// Handle to the session, dispatching user actions and re-rendering after each.
#[derive(Clone)]
pub struct SessionHandle {
    cell: Rc<SessionCell>,
    trigger: UseForceUpdateHandle,
}

impl SessionHandle {
    pub fn snapshot(&self) -> SessionSnapshot {
        self.cell
            .borrow()
            .as_ref()
            .map(|session| SessionSnapshot {
                status: session.status(),
                celebrating: session.is_celebrating(),
                active_tab: session.active_tab(),
                particles: Rc::new(session.emitter().particles().cloned().collect()),
            })
            .unwrap_or_default()
    }

    fn update<R>(&self, f: impl FnOnce(&mut Session<BrowserScheduler>) -> R) -> Option<R> {
        let result = self.cell.borrow_mut().as_mut().map(f);
        self.trigger.force_update();
        result
    }

    pub fn initiate_flight(&self) {
        self.update(Session::initiate_flight);
    }

    pub fn toggle_celebration(&self) {
        self.update(Session::toggle_celebration);
    }

    pub fn acknowledge(&self) {
        self.update(Session::acknowledge);
    }

    pub fn select_tab(&self, tab: ActiveTab) {
        self.update(|session| session.select_tab(tab));
    }
}

/// Routes fired browser timers back into the session.
///
/// Holds only a weak reference, so the scheduler inside the session does not
/// keep the session alive.
fn timer_sink(cell: Weak<SessionCell>, trigger: UseForceUpdateHandle) -> Callback<Fired> {
    Callback::from(move |fired: Fired| {
        let Some(cell) = cell.upgrade() else {
            return;
        };
        let handled = match cell.borrow_mut().as_mut() {
            Some(session) => {
                session.handle(fired);
                true
            }
            None => false,
        };
        if handled {
            trigger.force_update();
        }
    })
}

fn create_session(
    config: CelebrationConfig,
    scheduler: impl Fn() -> BrowserScheduler,
) -> Option<Session<BrowserScheduler>> {
    let seed = rand::rng().random::<u64>();
    match Session::new(config, seed, scheduler()) {
        Ok(session) => Some(session),
        Err(e) => {
            tracing::error!("Invalid celebration config, using defaults: {}", e);
            Session::new(CelebrationConfig::default(), seed, scheduler()).ok()
        }
    }
}

#[hook]
pub fn use_session(config: CelebrationConfig) -> SessionHandle {
    let cell: Rc<SessionCell> = use_mut_ref(|| None);
    let trigger = use_force_update();

    // Built during the first render. Construction arms no timers.
    if cell.borrow().is_none() {
        let weak = Rc::downgrade(&cell);
        let session = create_session(config, || {
            BrowserScheduler::new(timer_sink(weak.clone(), trigger.clone()))
        });
        *cell.borrow_mut() = session;
    }

    // Teardown on unmount cancels every armed timer.
    {
        let cell = cell.clone();
        use_effect_with((), move |_| {
            move || {
                if let Some(mut session) = cell.borrow_mut().take() {
                    session.teardown();
                }
            }
        });
    }

    SessionHandle { cell, trigger }
}
