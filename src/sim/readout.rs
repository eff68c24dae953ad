//! Randomized analysis readout
//!
//! While a session is running the home screen shows three stat cards: Rate
//! (bpm), Depth (%), and Quality (%). The values are display numbers drawn
//! uniformly from 70..=100, not measurements; the sampler owns a seeded RNG
//! so a host (or test) can reproduce exact sequences.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::{GOOD_SCORE_THRESHOLD, READOUT_MAX, READOUT_MIN};

/// One refresh of the analysis stat cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreathReadout {
    pub rate_bpm: u32,
    pub depth_pct: u32,
    pub quality_pct: u32,
}

impl BreathReadout {
    /// Mean of the three displayed values
    pub fn overall(&self) -> f64 {
        f64::from(self.rate_bpm + self.depth_pct + self.quality_pct) / 3.0
    }

    /// Whether the status dot shows the success color
    pub fn is_good(&self) -> bool {
        self.overall() > GOOD_SCORE_THRESHOLD
    }
}

/// Seeded source of [`BreathReadout`] values
#[derive(Debug, Clone)]
pub struct ReadoutSampler {
    rng: Pcg32,
}

impl ReadoutSampler {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Draw a fresh readout; each value lands in 70..=100
    pub fn sample(&mut self) -> BreathReadout {
        BreathReadout {
            rate_bpm: self.rng.random_range(READOUT_MIN..=READOUT_MAX),
            depth_pct: self.rng.random_range(READOUT_MIN..=READOUT_MAX),
            quality_pct: self.rng.random_range(READOUT_MIN..=READOUT_MAX),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples_stay_in_display_range() {
        let mut sampler = ReadoutSampler::new(5);
        for _ in 0..500 {
            let r = sampler.sample();
            for v in [r.rate_bpm, r.depth_pct, r.quality_pct] {
                assert!((70..=100).contains(&v));
            }
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = ReadoutSampler::new(31);
        let mut b = ReadoutSampler::new(31);
        for _ in 0..50 {
            assert_eq!(a.sample(), b.sample());
        }
    }

    #[test]
    fn test_overall_and_threshold() {
        let good = BreathReadout {
            rate_bpm: 90,
            depth_pct: 85,
            quality_pct: 95,
        };
        assert_eq!(good.overall(), 90.0);
        assert!(good.is_good());

        let fair = BreathReadout {
            rate_bpm: 70,
            depth_pct: 75,
            quality_pct: 72,
        };
        assert!(!fair.is_good());
    }
}
