//! Confetti emitter with batch-scoped lifetimes.
//!
//! While enabled, the emitter spawns one batch immediately and one more per
//! spawn tick. Every batch arms its own prune timer and is removed by
//! identity when that timer fires, so a late timer can never drop a newer
//! batch. The live count therefore stays within
//! [`CelebrationConfig::steady_state_bound`].

use std::collections::{BTreeMap, VecDeque};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::config::{CelebrationConfig, Color, ConfigError, FloatRange};
use crate::scheduler::{Scheduler, TimerEvent, TimerHandle};

/// Unique identifier for a confetti particle.
pub type ParticleId = u64;

/// Identifier for a spawned batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BatchId(u64);

impl BatchId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// A single piece of falling confetti.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub id: ParticleId,
    pub batch: BatchId,
    pub color: Color,
    /// Horizontal spawn offset in viewport-width units (0..100).
    pub left_vw: f32,
    pub top_px: f32,
    pub rotation_deg: f32,
    pub fall_duration_s: f32,
    pub fall_delay_s: f32,
}

/// Particles spawned together and pruned together.
#[derive(Debug, Clone, PartialEq)]
pub struct Batch {
    pub id: BatchId,
    pub particles: Vec<Particle>,
}

fn sample(rng: &mut ChaCha8Rng, range: FloatRange) -> f32 {
    if range.min < range.max {
        rng.random_range(range.min..range.max)
    } else {
        range.min
    }
}

/// Spawns and prunes confetti batches on a scheduler.
#[derive(Debug)]
pub struct ParticleEmitter {
    config: CelebrationConfig,
    rng: ChaCha8Rng,
    enabled: bool,
    spawn_timer: Option<TimerHandle>,
    prune_timers: BTreeMap<BatchId, TimerHandle>,
    batches: VecDeque<Batch>,
    next_particle_id: ParticleId,
    next_batch_id: u64,
}

impl ParticleEmitter {
    /// Creates a disabled emitter. Randomness is seeded for reproducibility.
    pub fn new(config: CelebrationConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            rng: ChaCha8Rng::seed_from_u64(seed),
            enabled: false,
            spawn_timer: None,
            prune_timers: BTreeMap::new(),
            batches: VecDeque::new(),
            next_particle_id: 0,
            next_batch_id: 0,
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn config(&self) -> &CelebrationConfig {
        &self.config
    }

    /// Number of live particles.
    pub fn len(&self) -> usize {
        self.batches.iter().map(|batch| batch.particles.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }

    /// Live batches, oldest first.
    pub fn batches(&self) -> impl Iterator<Item = &Batch> {
        self.batches.iter()
    }

    /// Live particles in spawn order.
    pub fn particles(&self) -> impl Iterator<Item = &Particle> {
        self.batches.iter().flat_map(|batch| batch.particles.iter())
    }

    /// Handle of the armed spawn timer, if enabled.
    pub fn spawn_timer(&self) -> Option<TimerHandle> {
        self.spawn_timer
    }

    /// Pending prune timers, one per live batch.
    pub fn pending_prunes(&self) -> usize {
        self.prune_timers.len()
    }

    /// Turns the spawn loop on or off.
    ///
    /// Enabling when already enabled does nothing. Disabling leaves live
    /// batches to expire on their own.
    pub fn set_enabled(&mut self, enabled: bool, scheduler: &mut impl Scheduler) {
        match (self.enabled, enabled) {
            (false, true) => {
                self.enabled = true;
                self.spawn_batch(scheduler);
                self.spawn_timer = Some(
                    scheduler.schedule_repeating(self.config.spawn_period_ms, TimerEvent::SpawnTick),
                );
                tracing::info!(
                    "[confetti] Enabled, batch every {}ms",
                    self.config.spawn_period_ms
                );
            }
            (true, false) => {
                self.enabled = false;
                if let Some(handle) = self.spawn_timer.take() {
                    scheduler.cancel(handle);
                }
                tracing::info!("[confetti] Disabled, {} particles still falling", self.len());
            }
            _ => {}
        }
    }

    /// Flips the enabled flag. Returns the new value.
    pub fn toggle(&mut self, scheduler: &mut impl Scheduler) -> bool {
        self.set_enabled(!self.enabled, scheduler);
        self.enabled
    }

    /// Handles one tick of the recurring spawn timer.
    pub fn on_spawn_tick(&mut self, handle: TimerHandle, scheduler: &mut impl Scheduler) {
        if !self.enabled || self.spawn_timer != Some(handle) {
            tracing::debug!("[confetti] stale spawn tick ignored");
            return;
        }
        self.spawn_batch(scheduler);
    }

    /// Removes the batch whose lifetime elapsed. Returns the particles removed.
    pub fn on_prune(&mut self, batch_id: BatchId) -> usize {
        self.prune_timers.remove(&batch_id);

        let Some(pos) = self.batches.iter().position(|batch| batch.id == batch_id) else {
            tracing::debug!("[confetti] batch {} already pruned", batch_id.raw());
            return 0;
        };

        let removed = self
            .batches
            .remove(pos)
            .map_or(0, |batch| batch.particles.len());
        tracing::debug!(
            "[confetti] Pruned batch {} ({} particles, {} live)",
            batch_id.raw(),
            removed,
            self.len()
        );
        removed
    }

    /// Cancels the spawn timer and every pending prune.
    ///
    /// Live particles are left in place. Nothing will remove them afterwards,
    /// which is fine because the host is going away.
    pub fn shutdown(&mut self, scheduler: &mut impl Scheduler) {
        self.enabled = false;
        if let Some(handle) = self.spawn_timer.take() {
            scheduler.cancel(handle);
        }
        for (_, handle) in std::mem::take(&mut self.prune_timers) {
            scheduler.cancel(handle);
        }
    }

    fn spawn_batch(&mut self, scheduler: &mut impl Scheduler) {
        let id = BatchId::new(self.next_batch_id);
        self.next_batch_id += 1;

        let particles = (0..self.config.batch_size)
            .map(|_| self.spawn_particle(id))
            .collect();
        self.batches.push_back(Batch { id, particles });

        let prune = scheduler.schedule(self.config.lifetime_ms, TimerEvent::Prune(id));
        self.prune_timers.insert(id, prune);

        tracing::debug!(
            "[confetti] Spawned batch {} ({} live)",
            id.raw(),
            self.len()
        );
    }

    fn spawn_particle(&mut self, batch: BatchId) -> Particle {
        let id = self.next_particle_id;
        self.next_particle_id += 1;

        let color = self.config.palette[self.rng.random_range(0..self.config.palette.len())];

        Particle {
            id,
            batch,
            color,
            left_vw: self.rng.random_range(0.0..100.0),
            top_px: self.config.top_offset_px,
            rotation_deg: self.rng.random_range(0.0..360.0),
            fall_duration_s: sample(&mut self.rng, self.config.fall_duration_s),
            fall_delay_s: sample(&mut self.rng, self.config.fall_delay_s),
        }
    }
}
