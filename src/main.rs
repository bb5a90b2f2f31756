//! FocusLamp simulator: main entry point
//!
//! Polls three simulated sensors, classifies each reading and drives a
//! simulated red / yellow / green lamp.
//!
//! ```text
//!  NoiseSensor ─────┐
//!  LightSensor ─────┼─▶ SensorHub ──▶ LampDriver ──▶ IndicatorLamp<SimPin × 3>
//!  HeartbeatSensor ─┘                     │
//!                                         └──▶ LogEventSink
//! ```
//!
//! # Usage
//!
//! ```bash
//! # Run forever at 1 Hz
//! focuslamp
//!
//! # Ten fast, reproducible cycles with GPIO traces
//! RUST_LOG=debug FOCUSLAMP_CYCLES=10 FOCUSLAMP_POLL_MS=100 FOCUSLAMP_SEED=42 focuslamp
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::{Context, Result};
use log::info;
use tracing_subscriber::EnvFilter;

use focuslamp::LampDriver;
use focuslamp::adapters::log_sink::LogEventSink;
use focuslamp::config::LampConfig;
use focuslamp::drivers::sim_pin::SimPin;
use focuslamp::drivers::status_led::IndicatorLamp;
use focuslamp::runner;
use focuslamp::sensors::SimulatedSensors;

fn main() -> Result<()> {
    // ── 1. Logging ────────────────────────────────────────────
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("╔══════════════════════════════════════╗");
    info!("║  FocusLamp v{:<25}║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Configuration ──────────────────────────────────────
    let config = LampConfig::from_env().context("loading lamp configuration")?;
    let stop = Arc::new(AtomicBool::new(false));
    {
        let stop = Arc::clone(&stop);
        ctrlc::set_handler(move || stop.store(true, Ordering::Relaxed))
            .context("installing Ctrl+C handler")?;
    }
    info!(
        "Polling every {} ms, {}",
        config.poll_interval_ms,
        match config.max_cycles {
            Some(n) => format!("stopping after {n} cycles"),
            None => "until Ctrl+C".to_string(),
        }
    );

    // ── 3. Peripherals ────────────────────────────────────────
    let mut sensors = SimulatedSensors::simulated(config.seed);
    let lamp = IndicatorLamp::new(
        SimPin::new(config.red_pin),
        SimPin::new(config.yellow_pin),
        SimPin::new(config.green_pin),
    );
    let mut driver = LampDriver::new(lamp);
    let mut sink = LogEventSink::new();

    // ── 4. Polling loop ───────────────────────────────────────
    runner::run(&mut driver, &mut sensors, &mut sink, &config, &stop);
    info!("Goodbye");
    Ok(())
}
