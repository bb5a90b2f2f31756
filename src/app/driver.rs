//! Lamp driver: the hexagonal core.
//!
//! [`LampDriver`] owns the indicator port and the current focus state.
//! Each update classifies a reading, stores the result and rewrites all
//! three indicator channels so that exactly one is lit.
//!
//! ```text
//!  ReadingSource ──▶ ┌────────────────────────┐ ──▶ EventSink
//!                    │       LampDriver        │
//!                    │  classify · bookkeeping │ ──▶ IndicatorPort
//!                    └────────────────────────┘
//! ```

use log::{debug, info};

use super::classifier::{LampState, Reading};
use super::events::{LampEvent, TelemetryData};
use super::ports::{Channel, EventSink, IndicatorPort, ReadingSource};

/// Drives the three-colour indicator from sensor readings.
///
/// Not internally synchronised: `update` takes `&mut self`, so concurrent
/// callers must serialise access themselves (e.g. behind a mutex).
pub struct LampDriver<P: IndicatorPort> {
    port: P,
    current_state: Option<LampState>,
    update_count: u64,
}

impl<P: IndicatorPort> LampDriver<P> {
    /// Take ownership of the indicator and switch every channel off.
    ///
    /// The state stays unset until the first [`update`](Self::update).
    pub fn new(mut port: P) -> Self {
        for channel in Channel::ALL {
            port.set_active(channel, false);
        }
        Self {
            port,
            current_state: None,
            update_count: 0,
        }
    }

    // ── Updates ───────────────────────────────────────────────

    /// Classify a raw triple and drive the indicator.
    pub fn update(&mut self, noise_db: i32, light_lux: i32, heartbeat_bpm: i32) {
        self.apply(Reading::new(noise_db, light_lux, heartbeat_bpm));
    }

    /// Classify `reading`, store the state and rewrite all three channels.
    ///
    /// The two inactive channels are written before the active one, so
    /// two channels are never lit at the same time.
    pub fn apply(&mut self, reading: Reading) -> LampState {
        let state = reading.classify();
        let previous = self.current_state.replace(state);
        self.update_count += 1;

        let lit = state.channel();
        for channel in Channel::ALL {
            if channel != lit {
                self.port.set_active(channel, false);
            }
        }
        self.port.set_active(lit, true);

        debug!("lamp: {} -> {}", reading, state);
        if previous != Some(state) {
            info!("Lamp set to {} ({})", lit, state);
        }
        state
    }

    // ── Per-cycle orchestration ───────────────────────────────

    /// Run one polling cycle: read sensors → update → emit events.
    pub fn tick(
        &mut self,
        source: &mut impl ReadingSource,
        sink: &mut impl EventSink,
    ) -> LampState {
        let reading = source.read_all();
        let previous = self.current_state;
        let state = self.apply(reading);

        sink.emit(&LampEvent::Telemetry(TelemetryData {
            cycle: self.update_count,
            reading,
            state,
        }));
        if previous != Some(state) {
            sink.emit(&LampEvent::StateChanged {
                from: previous,
                to: state,
            });
        }
        state
    }

    // ── Queries ───────────────────────────────────────────────

    /// State produced by the most recent update; `None` before the first.
    pub fn current_state(&self) -> Option<LampState> {
        self.current_state
    }

    /// Number of updates applied since construction.
    pub fn update_count(&self) -> u64 {
        self.update_count
    }

    pub fn port(&self) -> &P {
        &self.port
    }

    /// Release the indicator port.
    pub fn into_port(self) -> P {
        self.port
    }
}
