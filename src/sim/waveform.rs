//! Waveform phase oscillator for the analysis card
//!
//! Drives the scrolling sine trace: the phase advances one full cycle every
//! two seconds and wraps at 2π. Sampling is pure, so a renderer can rebuild
//! the polyline at any resolution it likes.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::consts::{WAVE_AMPLITUDE, WAVE_LENGTH, WAVE_PHASE_RATE};

/// Phase state for the scrolling waveform trace
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Waveform {
    phase: f64,
}

impl Waveform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the phase by `dt` seconds, wrapping at 2π.
    /// Non-positive `dt` is a no-op.
    pub fn tick(&mut self, dt_seconds: f64) {
        if dt_seconds <= 0.0 {
            return;
        }
        self.phase = (self.phase + WAVE_PHASE_RATE * dt_seconds) % TAU;
    }

    /// Current phase in [0, 2π)
    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// Vertical displacement of the trace at horizontal position `x`
    pub fn sample(&self, x: f64) -> f64 {
        (x / WAVE_LENGTH + self.phase).sin() * WAVE_AMPLITUDE
    }

    /// Evenly spaced samples across `width`, for building a polyline
    pub fn samples(&self, width: f64, count: usize) -> Vec<f64> {
        let step = width / count.max(1) as f64;
        (0..count).map(|i| self.sample(i as f64 * step)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;

    #[test]
    fn test_phase_advances_and_wraps() {
        let mut w = Waveform::new();
        w.tick(1.0);
        assert!((w.phase() - std::f64::consts::PI).abs() < 1e-12);

        // One more second completes the 2 s cycle and wraps to ~0.
        w.tick(1.0);
        assert!(w.phase() < 1e-12);

        for _ in 0..1000 {
            w.tick(SIM_DT);
            assert!(w.phase() >= 0.0 && w.phase() < TAU);
        }
    }

    #[test]
    fn test_non_positive_dt_is_noop() {
        let mut w = Waveform::new();
        w.tick(0.25);
        let phase = w.phase();

        w.tick(0.0);
        w.tick(-3.0);
        assert_eq!(w.phase(), phase);
    }

    #[test]
    fn test_sample_bounded_by_amplitude() {
        let mut w = Waveform::new();
        for _ in 0..50 {
            w.tick(0.1);
            for y in w.samples(320.0, 64) {
                assert!(y.abs() <= WAVE_AMPLITUDE);
            }
        }
    }

    #[test]
    fn test_samples_shift_with_phase() {
        let mut w = Waveform::new();
        let before = w.samples(320.0, 64);
        w.tick(0.5);
        let after = w.samples(320.0, 64);
        assert_ne!(before, after);
    }
}
