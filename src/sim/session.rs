//! Breathing-session lifecycle and progress accounting
//!
//! Two states, explicit transitions. Completion deliberately does NOT
//! transition back to idle: progress pins at 1.0 until the host calls
//! [`SessionController::stop`], matching the app's stop-button flow.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors for rejectable session inputs
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SessionError {
    #[error("session duration must be positive (got {0})")]
    InvalidDuration(f64),
}

/// Current phase of a breathing session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SessionPhase {
    #[default]
    Idle,
    Active,
}

/// Immutable per-frame view of a session, for the host to render
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub phase: SessionPhase,
    /// Elapsed fraction of the target duration, clamped to [0, 1]
    pub progress: f64,
    pub elapsed_seconds: f64,
}

/// Tracks one breathing session at a time
///
/// Reused across sessions for the owning screen's lifetime; it holds no
/// external resources.
#[derive(Debug, Clone, Default)]
pub struct SessionController {
    phase: SessionPhase,
    duration_seconds: f64,
    elapsed_seconds: f64,
    progress: f64,
}

impl SessionController {
    /// Create an idle controller with zero progress
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a session with the given target duration in seconds.
    ///
    /// Rejects non-positive durations without touching any state. Starting
    /// while already active discards the running session and begins anew.
    pub fn start(&mut self, duration_seconds: f64) -> Result<(), SessionError> {
        if duration_seconds <= 0.0 {
            return Err(SessionError::InvalidDuration(duration_seconds));
        }
        self.phase = SessionPhase::Active;
        self.duration_seconds = duration_seconds;
        self.elapsed_seconds = 0.0;
        self.progress = 0.0;
        log::info!("session started ({duration_seconds}s)");
        Ok(())
    }

    /// End the session, discarding its progress. Harmless while idle.
    pub fn stop(&mut self) {
        if self.phase == SessionPhase::Active {
            log::info!(
                "session stopped at {:.1}s ({:.0}%)",
                self.elapsed_seconds,
                self.progress * 100.0
            );
        }
        self.phase = SessionPhase::Idle;
        self.elapsed_seconds = 0.0;
        self.progress = 0.0;
    }

    /// Stop if active, otherwise start — the single start/stop control
    pub fn toggle(&mut self, duration_seconds: f64) -> Result<(), SessionError> {
        match self.phase {
            SessionPhase::Active => {
                self.stop();
                Ok(())
            }
            SessionPhase::Idle => self.start(duration_seconds),
        }
    }

    /// Advance the session clock. Only an active session accumulates time;
    /// negative `dt` counts as zero. Progress clamps at 1.0 with no
    /// automatic stop.
    pub fn tick(&mut self, dt_seconds: f64) -> SessionSnapshot {
        if self.phase == SessionPhase::Active {
            self.elapsed_seconds += dt_seconds.max(0.0);
            self.progress = (self.elapsed_seconds / self.duration_seconds).min(1.0);
        }
        self.snapshot()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            phase: self.phase,
            progress: self.progress,
            elapsed_seconds: self.elapsed_seconds,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase == SessionPhase::Active
    }

    /// Elapsed fraction of the target duration, in [0, 1]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed_seconds
    }

    /// Target length of the current (or last started) session
    pub fn duration_seconds(&self) -> f64 {
        self.duration_seconds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_new_controller_is_idle_with_zero_progress() {
        let c = SessionController::new();
        assert_eq!(c.phase(), SessionPhase::Idle);
        assert_eq!(c.progress(), 0.0);
        assert_eq!(c.elapsed_seconds(), 0.0);
    }

    #[test]
    fn test_start_rejects_non_positive_duration() {
        let mut c = SessionController::new();

        assert_eq!(c.start(0.0), Err(SessionError::InvalidDuration(0.0)));
        assert_eq!(c.start(-5.0), Err(SessionError::InvalidDuration(-5.0)));
        assert_eq!(c.phase(), SessionPhase::Idle);

        // A running session is equally untouched by a bad start.
        c.start(10.0).unwrap();
        c.tick(4.0);
        assert_eq!(c.start(-1.0), Err(SessionError::InvalidDuration(-1.0)));
        assert_eq!(c.phase(), SessionPhase::Active);
        assert_eq!(c.elapsed_seconds(), 4.0);
    }

    #[test]
    fn test_tick_is_inert_while_idle() {
        let mut c = SessionController::new();
        let snap = c.tick(5.0);
        assert_eq!(snap.phase, SessionPhase::Idle);
        assert_eq!(snap.progress, 0.0);
        assert_eq!(snap.elapsed_seconds, 0.0);
    }

    #[test]
    fn test_negative_dt_counts_as_zero() {
        let mut c = SessionController::new();
        c.start(10.0).unwrap();
        c.tick(3.0);
        let snap = c.tick(-2.0);
        assert_eq!(snap.elapsed_seconds, 3.0);
        assert_eq!(snap.progress, 0.3);
    }

    #[test]
    fn test_completion_pins_progress_without_auto_stop() {
        let mut c = SessionController::new();
        c.start(2.0).unwrap();

        c.tick(1.0);
        assert_eq!(c.progress(), 0.5);

        c.tick(5.0);
        assert_eq!(c.progress(), 1.0);
        assert_eq!(c.phase(), SessionPhase::Active, "no auto-stop at completion");

        c.tick(1.0);
        assert_eq!(c.progress(), 1.0);
        assert_eq!(c.elapsed_seconds(), 7.0);
    }

    #[test]
    fn test_stop_discards_session() {
        let mut c = SessionController::new();
        c.start(10.0).unwrap();
        c.tick(6.0);

        c.stop();
        assert_eq!(c.phase(), SessionPhase::Idle);
        assert_eq!(c.progress(), 0.0);
        assert_eq!(c.elapsed_seconds(), 0.0);

        // Stopping an idle controller is a harmless no-op.
        c.stop();
        assert_eq!(c.phase(), SessionPhase::Idle);
    }

    #[test]
    fn test_restart_while_active_begins_fresh() {
        let mut c = SessionController::new();
        c.start(10.0).unwrap();
        c.tick(8.0);

        c.start(20.0).unwrap();
        assert_eq!(c.elapsed_seconds(), 0.0);
        assert_eq!(c.progress(), 0.0);
        assert_eq!(c.duration_seconds(), 20.0);
    }

    #[test]
    fn test_toggle_cycles_between_phases() {
        let mut c = SessionController::new();

        c.toggle(5.0).unwrap();
        assert_eq!(c.phase(), SessionPhase::Active);

        c.toggle(5.0).unwrap();
        assert_eq!(c.phase(), SessionPhase::Idle);
        assert_eq!(c.progress(), 0.0);

        // Toggle-to-start still validates the duration.
        assert!(c.toggle(0.0).is_err());
        assert_eq!(c.phase(), SessionPhase::Idle);
    }

    #[test]
    fn test_full_session_scenario() {
        let mut c = SessionController::new();
        c.start(10.0).unwrap();

        let snap = c.tick(5.0);
        assert_eq!(snap.progress, 0.5);

        let snap = c.tick(6.0);
        assert_eq!(snap.progress, 1.0);
        assert_eq!(snap.elapsed_seconds, 11.0);
        assert_eq!(snap.phase, SessionPhase::Active);

        c.stop();
        assert_eq!(c.progress(), 0.0);
        assert_eq!(c.phase(), SessionPhase::Idle);
    }

    proptest! {
        /// Progress never decreases and never exceeds 1.0 across any tick
        /// sequence, including negative dts.
        #[test]
        fn prop_progress_monotonic_and_clamped(
            duration in 0.1f64..120.0,
            dts in prop::collection::vec(-1.0f64..5.0, 1..100),
        ) {
            let mut c = SessionController::new();
            c.start(duration).unwrap();

            let mut last = 0.0f64;
            for dt in dts {
                let snap = c.tick(dt);
                prop_assert!(snap.progress >= last);
                prop_assert!(snap.progress <= 1.0);
                last = snap.progress;
            }
        }
    }
}
