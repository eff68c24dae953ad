//! BreathEase simulation core
//!
//! Core modules:
//! - `sim`: Deterministic frame-driven simulation (session timing, particle
//!   kinetics, waveform phase, analysis readout)
//! - `config`: Host-suppliable tuning for the particle field
//!
//! The core holds pure state and exposes it as snapshots; rendering, input
//! mapping, and screen composition belong to the host. An external driver
//! advances everything by calling `tick` once per frame.

pub mod config;
pub mod sim;

pub use config::FieldConfig;
pub use sim::{
    BreathReadout, Particle, ParticleColor, ParticleField, ReadoutSampler, SessionController,
    SessionError, SessionPhase, SessionSnapshot, Waveform,
};

/// Simulation reference constants
pub mod consts {
    /// Reference frame timestep (60 Hz)
    pub const SIM_DT: f64 = 1.0 / 60.0;

    /// Logical particle field extent
    pub const FIELD_WIDTH: f64 = 300.0;
    pub const FIELD_HEIGHT: f64 = 200.0;

    /// Particles spawned per pool
    pub const POOL_SIZE: usize = 20;

    /// Particle diameter range at spawn
    pub const SIZE_MIN: f64 = 2.0;
    pub const SIZE_MAX: f64 = 6.0;

    /// Particle opacity range at spawn
    pub const OPACITY_MIN: f64 = 0.1;
    pub const OPACITY_MAX: f64 = 0.5;

    /// Particle speed range at spawn (units/second)
    pub const SPEED_MIN: f64 = 20.0;
    pub const SPEED_MAX: f64 = 40.0;

    /// Opacity lost per second (0.01 per frame at the 60 Hz reference rate)
    pub const DECAY_RATE: f64 = 0.6;

    /// Waveform phase advance (radians/second, one full cycle per 2 s)
    pub const WAVE_PHASE_RATE: f64 = std::f64::consts::PI;
    /// Horizontal wavelength divisor for waveform sampling
    pub const WAVE_LENGTH: f64 = 50.0;
    /// Peak waveform displacement from the centerline
    pub const WAVE_AMPLITUDE: f64 = 30.0;

    /// Analysis readout value range (inclusive)
    pub const READOUT_MIN: u32 = 70;
    pub const READOUT_MAX: u32 = 100;
    /// Overall score above this reads as "good"
    pub const GOOD_SCORE_THRESHOLD: f64 = 80.0;
}
