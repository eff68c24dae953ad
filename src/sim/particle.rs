//! Particle state and spawn sampling
//!
//! A particle is immutable apart from position and opacity: size, color,
//! speed, and heading are fixed at spawn. Sampling goes through a
//! caller-supplied RNG so a seeded generator reproduces exact pools.

use glam::DVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::FieldConfig;

/// Palette for spawned particles (the app theme's gradient stops)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParticleColor {
    Indigo,
    Orchid,
    Amber,
}

impl ParticleColor {
    /// All palette entries, in spawn-sampling order
    pub const PALETTE: [ParticleColor; 3] = [Self::Indigo, Self::Orchid, Self::Amber];

    /// sRGB components for a renderer
    pub fn rgb(&self) -> [u8; 3] {
        match self {
            ParticleColor::Indigo => [0x41, 0x58, 0xD0],
            ParticleColor::Orchid => [0xC8, 0x50, 0xC0],
            ParticleColor::Amber => [0xFF, 0xCC, 0x70],
        }
    }
}

/// An ephemeral shimmer particle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    /// Position in the logical field
    pub pos: DVec2,
    /// Diameter
    pub size: f64,
    pub color: ParticleColor,
    /// In [0, 1], monotonically decreasing after spawn
    pub opacity: f64,
    /// Scalar speed (units/second)
    pub speed: f64,
    /// Heading in radians, [0, 2π)
    pub angle: f64,
}

impl Particle {
    /// Sample a fresh particle from the config's spawn ranges
    pub fn spawn(cfg: &FieldConfig, rng: &mut impl Rng) -> Self {
        Self {
            pos: DVec2::new(
                rng.random_range(0.0..cfg.width),
                rng.random_range(0.0..cfg.height),
            ),
            size: rng.random_range(cfg.size_min..cfg.size_max),
            color: ParticleColor::PALETTE[rng.random_range(0..ParticleColor::PALETTE.len())],
            opacity: rng.random_range(cfg.opacity_min..cfg.opacity_max),
            speed: rng.random_range(cfg.speed_min..cfg.speed_max),
            angle: rng.random_range(0.0..std::f64::consts::TAU),
        }
    }

    /// Advance position and decay opacity by `dt` seconds
    pub(crate) fn advance(&mut self, decay_rate: f64, dt: f64) {
        self.pos.x += self.angle.cos() * self.speed * dt;
        self.pos.y += self.angle.sin() * self.speed * dt;
        self.opacity -= decay_rate * dt;
    }

    /// Particle still contributes to the frame
    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }
}
