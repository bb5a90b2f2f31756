//! Outbound application events.
//!
//! The polling loop and [`LampDriver::tick`](super::driver::LampDriver::tick)
//! emit these through the [`EventSink`](super::ports::EventSink) port.

use super::classifier::{LampState, Reading};

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LampEvent {
    /// The simulator came up with the given indicator pin map.
    Started(PinMap),

    /// Per-cycle telemetry snapshot.
    Telemetry(TelemetryData),

    /// The lamp changed colour.  `from` is `None` on the first update.
    StateChanged {
        from: Option<LampState>,
        to: LampState,
    },

    /// The polling loop finished after `cycles` cycles.
    Stopped { cycles: u64 },
}

/// GPIO numbers of the three indicator LEDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinMap {
    pub red: i32,
    pub yellow: i32,
    pub green: i32,
}

/// A point-in-time telemetry snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TelemetryData {
    /// 1-based polling cycle number.
    pub cycle: u64,
    pub reading: Reading,
    pub state: LampState,
}
