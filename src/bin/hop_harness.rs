//! Headless Bunny-Hop Harness
//!
//! Run with: `cargo run --bin hop_harness -- [config.json] [seconds]`
//!
//! Drives the simulation at 60 Hz with a scripted player: sprint forward,
//! tap jump on every landing, fire one blast ahead mid-run. Tracker text is
//! logged twice per simulated second. Set `RUST_LOG=bunnyhop_engine=debug`
//! to see jumps, landings and run-cap resets.

use std::path::PathBuf;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bunnyhop_engine::{InputState, KeyCode, SimConfig, Simulation};

const TICK_RATE: u32 = 60;
const DEFAULT_SECONDS: f32 = 10.0;
const REPORT_EVERY: u32 = TICK_RATE / 2;

/// Tap jump this often; shorter than the buffer window so a tap is always armed.
const TAP_INTERVAL: u32 = 10;

fn main() -> anyhow::Result<()> {
    init_tracing("info");

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => {
            let path = PathBuf::from(path);
            SimConfig::load(&path)
                .with_context(|| format!("loading config from {}", path.display()))?
        }
        None => SimConfig::default(),
    };
    let seconds = match args.next() {
        Some(raw) => raw
            .parse::<f32>()
            .with_context(|| format!("invalid duration {raw:?}"))?,
        None => DEFAULT_SECONDS,
    };
    anyhow::ensure!(
        seconds.is_finite() && seconds > 0.0,
        "duration must be positive, got {seconds}"
    );

    let ticks = (seconds * TICK_RATE as f32).round() as u32;
    let blast_tick = ticks / 2;
    let dt = 1.0 / TICK_RATE as f32;

    info!(seconds, ticks, boundary = ?config.world.boundary, "starting run");

    let mut sim = Simulation::new(config);
    let mut input = InputState::new();
    input.keyboard.handle_key(KeyCode::W, true);
    input.keyboard.handle_key(KeyCode::ShiftLeft, true);

    let mut jumps = 0u32;
    let mut peak_speed = 0.0f32;
    let mut peak_run_cap = sim.state().run_cap;

    for tick in 0..ticks {
        input
            .keyboard
            .handle_key(KeyCode::Space, tick % TAP_INTERVAL == 0);
        let snapshot = input.poll();

        let explosions = if tick == blast_tick {
            let blast = sim.explosion_ahead();
            info!(origin = ?blast.origin, "blast");
            vec![blast]
        } else {
            Vec::new()
        };

        let was_grounded = sim.state().grounded;
        let state = sim.advance(dt, &snapshot, &explosions);
        if was_grounded && !state.grounded && state.velocity.y > 0.0 {
            jumps += 1;
        }
        peak_speed = peak_speed.max(state.horizontal_speed());
        peak_run_cap = peak_run_cap.max(state.run_cap);

        if (tick + 1) % REPORT_EVERY == 0 {
            let time = (tick + 1) as f32 * dt;
            for line in sim.telemetry().to_string().lines() {
                info!("[{time:5.1}s] {line}");
            }
        }
    }

    let telemetry = sim.telemetry();
    info!(
        jumps,
        peak_speed,
        peak_run_cap,
        final_speed = telemetry.horizontal_speed,
        "run complete"
    );
    info!("final state: {}", serde_json::to_string(&telemetry)?);

    Ok(())
}

/// Initialize tracing/logging
fn init_tracing(log_level: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}
