//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the `log` facade (the simulator binary routes it to stderr).

use log::info;

use crate::app::events::LampEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`LampEvent`] to the console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &LampEvent) {
        info!("{}", render(event));
    }
}

/// Single-line rendering of an event, as written to the log.
pub fn render(event: &LampEvent) -> String {
    match event {
        LampEvent::Started(pins) => format!(
            "START | pins red={} yellow={} green={}",
            pins.red, pins.yellow, pins.green
        ),
        LampEvent::Telemetry(t) => format!(
            "TELEM | cycle={} | noise={}dB | light={}lux | hr={}bpm | lamp={} ({})",
            t.cycle,
            t.reading.noise_db,
            t.reading.light_lux,
            t.reading.heartbeat_bpm,
            t.state.channel(),
            t.state,
        ),
        LampEvent::StateChanged { from: None, to } => {
            format!("STATE | unset -> {}", to)
        }
        LampEvent::StateChanged { from: Some(from), to } => {
            format!("STATE | {} -> {}", from, to)
        }
        LampEvent::Stopped { cycles } => format!("STOP  | after {} cycles", cycles),
    }
}
