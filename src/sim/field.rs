//! Hover shimmer particle field
//!
//! A bounded pool of decaying particles driven by hover/press interaction.
//! While active, a pool that empties is repopulated within the same tick,
//! so no rendered frame ever observes an empty active field. Deactivation
//! only stops repopulation; live particles decay to natural extinction.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::particle::Particle;
use crate::config::FieldConfig;

/// A bounded pool of decaying kinetic particles
#[derive(Debug, Clone)]
pub struct ParticleField {
    config: FieldConfig,
    particles: Vec<Particle>,
    active: bool,
    rng: Pcg32,
}

impl ParticleField {
    /// Create an empty, inactive field with a seeded RNG
    pub fn new(config: FieldConfig, seed: u64) -> Self {
        Self {
            particles: Vec::with_capacity(config.pool_size),
            config,
            active: false,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Activate the field, spawning a full pool if it is currently empty.
    ///
    /// Idempotent: an already-populated field keeps its particles untouched.
    pub fn start(&mut self) {
        self.active = true;
        if self.particles.is_empty() {
            self.spawn_pool();
        }
    }

    /// Stop auto-replenish. Live particles keep decaying naturally.
    pub fn stop(&mut self) {
        self.active = false;
    }

    /// Advance every particle by `dt` seconds and drop the ones that decayed
    /// out. An active field that empties repopulates before returning, so
    /// callers never snapshot an empty active field. Non-positive `dt` is a
    /// no-op. Returns the post-tick snapshot.
    pub fn tick(&mut self, dt: f64) -> &[Particle] {
        if dt <= 0.0 {
            return &self.particles;
        }

        for p in &mut self.particles {
            p.advance(self.config.decay_rate, dt);
        }
        self.particles.retain(Particle::is_visible);

        if self.active && self.particles.is_empty() {
            self.spawn_pool();
        }

        &self.particles
    }

    /// Current particle snapshot (stable order within a tick)
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Whether the field auto-replenishes when emptied
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    fn spawn_pool(&mut self) {
        for _ in 0..self.config.pool_size {
            let p = Particle::spawn(&self.config, &mut self.rng);
            self.particles.push(p);
        }
        log::debug!("spawned pool of {} particles", self.particles.len());
    }
}
