//! Deterministic simulation module
//!
//! All time-stepped state lives here. This module must be pure and deterministic:
//! - Advanced only by explicit `tick(dt)` calls from the host frame loop
//! - Seeded RNG only
//! - Stable iteration order within a tick
//! - No rendering or platform dependencies
//!
//! The components are independent of one another; they compose only in the
//! host's presentation layer.

pub mod field;
pub mod particle;
pub mod readout;
pub mod session;
pub mod waveform;

pub use field::ParticleField;
pub use particle::{Particle, ParticleColor};
pub use readout::{BreathReadout, ReadoutSampler};
pub use session::{SessionController, SessionError, SessionPhase, SessionSnapshot};
pub use waveform::Waveform;
