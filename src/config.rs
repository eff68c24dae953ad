//! Particle field tuning
//!
//! Everything the host may override: field extent, pool size, spawn ranges,
//! and the decay rate. Serde-roundtrippable so hosts can ship presets.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tuning for a [`crate::ParticleField`](crate::sim::ParticleField)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldConfig {
    /// Logical field width (spawn x lands in [0, width])
    pub width: f64,
    /// Logical field height (spawn y lands in [0, height])
    pub height: f64,
    /// Particles per spawned pool
    pub pool_size: usize,
    /// Diameter range at spawn
    pub size_min: f64,
    pub size_max: f64,
    /// Opacity range at spawn
    pub opacity_min: f64,
    pub opacity_max: f64,
    /// Speed range at spawn (units/second)
    pub speed_min: f64,
    pub speed_max: f64,
    /// Opacity lost per second
    pub decay_rate: f64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
            pool_size: POOL_SIZE,
            size_min: SIZE_MIN,
            size_max: SIZE_MAX,
            opacity_min: OPACITY_MIN,
            opacity_max: OPACITY_MAX,
            speed_min: SPEED_MIN,
            speed_max: SPEED_MAX,
            decay_rate: DECAY_RATE,
        }
    }
}

impl FieldConfig {
    /// Upper bound on particle lifetime in seconds (fresh spawn at max
    /// opacity, decayed to extinction)
    pub fn lifetime_bound(&self) -> f64 {
        self.opacity_max / self.decay_rate
    }
}
