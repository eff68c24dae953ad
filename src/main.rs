//! BreathEase headless demo driver
//!
//! Stands in for the app's frame loop: fixed 60 Hz stepping through one
//! breathing session with the shimmer field active, logging progress once
//! per simulated second, then draining the field to extinction after the
//! session is stopped. Emits a JSON report of the completion state.
//!
//! Usage: breathease-sim [duration_seconds] [seed]

use serde::Serialize;

use breathease_core::consts::SIM_DT;
use breathease_core::{
    BreathReadout, FieldConfig, Particle, ParticleField, ReadoutSampler, SessionController,
    SessionSnapshot, Waveform,
};

#[derive(Serialize)]
struct DemoReport {
    seed: u64,
    /// Session state the moment progress reached 1.0
    completed: SessionSnapshot,
    last_readout: BreathReadout,
    shimmer_at_completion: Vec<Particle>,
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let duration: f64 = args.next().and_then(|a| a.parse().ok()).unwrap_or(5.0);
    let seed: u64 = args.next().and_then(|a| a.parse().ok()).unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    });

    log::info!("BreathEase sim starting: {duration}s session, seed {seed}");

    let mut session = SessionController::new();
    let mut field = ParticleField::new(FieldConfig::default(), seed);
    let mut waveform = Waveform::new();
    let mut readouts = ReadoutSampler::new(seed ^ 0x9E37_79B9_7F4A_7C15);

    if let Err(e) = session.start(duration) {
        log::error!("cannot start session: {e}");
        std::process::exit(2);
    }
    field.start();

    let mut last_readout = readouts.sample();
    let mut logged_seconds = 0u64;
    let completed = loop {
        let snap = session.tick(SIM_DT);
        field.tick(SIM_DT);
        waveform.tick(SIM_DT);

        let second = snap.elapsed_seconds as u64;
        if second > logged_seconds {
            logged_seconds = second;
            last_readout = readouts.sample();
            log::info!(
                "t={second}s progress={:.0}% rate={}bpm depth={}% quality={}% particles={} wave_phase={:.2}",
                snap.progress * 100.0,
                last_readout.rate_bpm,
                last_readout.depth_pct,
                last_readout.quality_pct,
                field.particles().len(),
                waveform.phase(),
            );
        }

        if snap.progress >= 1.0 {
            break snap;
        }
    };

    let shimmer_at_completion = field.particles().to_vec();

    session.stop();
    field.stop();

    // Let the remaining shimmer fade out the way the screen would.
    let mut drain_ticks = 0u32;
    while !field.particles().is_empty() {
        field.tick(SIM_DT);
        drain_ticks += 1;
    }
    log::info!(
        "shimmer drained {:.2}s after stop",
        f64::from(drain_ticks) * SIM_DT
    );

    let report = DemoReport {
        seed,
        completed,
        last_readout,
        shimmer_at_completion,
    };
    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("report serialization failed: {e}"),
    }
}
