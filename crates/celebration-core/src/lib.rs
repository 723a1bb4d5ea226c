//! Flight 44 Celebration Core
//!
//! Platform-independent behavior for the boarding-pass birthday card: the
//! takeoff sequence, the confetti emitter, dashboard tab selection, and the
//! timer scheduling they share.
//!
//! Nothing here touches the browser. Timers go through [`Scheduler`], and
//! [`ManualScheduler`] drives them from a simulated clock in tests.

#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod confetti;
pub mod flight;
pub mod scheduler;
pub mod session;
pub mod tab;

pub use config::{
    CelebrationConfig, Color, ConfigError, DEFAULT_BATCH_SIZE, DEFAULT_LIFETIME_MS,
    DEFAULT_SPAWN_PERIOD_MS, DEFAULT_TAKEOFF_DELAY_MS, FloatRange,
};
pub use confetti::{Batch, BatchId, Particle, ParticleEmitter, ParticleId};
pub use flight::{FlightSequence, FlightStatus};
pub use scheduler::{Fired, ManualScheduler, Millis, Scheduler, TimerEvent, TimerHandle};
pub use session::Session;
pub use tab::{ActiveTab, TabSelection, UnknownTab};
