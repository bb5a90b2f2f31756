//! Port traits: the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Sensors ──▶ SensorPort / ReadingSource ──▶ LampDriver ──▶ IndicatorPort ──▶ LEDs
//!                                                   │
//!                                                   └──▶ EventSink ──▶ log
//! ```
//!
//! Driven adapters (sensors, indicator lamps, event sinks) implement these
//! traits.  The [`LampDriver`](super::driver::LampDriver) consumes them via
//! generics, so the domain core never touches hardware directly.

use core::fmt;

use super::classifier::Reading;
use super::events::LampEvent;

// ───────────────────────────────────────────────────────────────
// Sensor ports (driven adapters: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// A single scalar sensor.
///
/// `read_value` has no default body: a sensor that does not provide it
/// does not compile.
pub trait SensorPort {
    /// Sample the sensor once.
    fn read_value(&mut self) -> i32;
}

impl<S: SensorPort + ?Sized> SensorPort for &mut S {
    fn read_value(&mut self) -> i32 {
        (**self).read_value()
    }
}

/// Produces the full three-value [`Reading`] for one polling cycle.
pub trait ReadingSource {
    fn read_all(&mut self) -> Reading;
}

// ───────────────────────────────────────────────────────────────
// Indicator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// One of the three binary indicator outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Channel {
    Red = 0,
    Yellow = 1,
    Green = 2,
}

impl Channel {
    /// Total number of channels, used to size per-channel arrays.
    pub const COUNT: usize = 3;

    /// Every channel, in index order.
    pub const ALL: [Self; Self::COUNT] = [Self::Red, Self::Yellow, Self::Green];

    /// Position of this channel in per-channel arrays.
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Red => write!(f, "RED"),
            Self::Yellow => write!(f, "YELLOW"),
            Self::Green => write!(f, "GREEN"),
        }
    }
}

/// Write-side port: the domain calls this to drive the indicator LEDs.
///
/// Writes are best-effort and infallible from the caller's point of view.
/// After each call the channel must reflect the requested level.
pub trait IndicatorPort {
    fn set_active(&mut self, channel: Channel, active: bool);
}

impl<P: IndicatorPort + ?Sized> IndicatorPort for &mut P {
    fn set_active(&mut self, channel: Channel, active: bool) {
        (**self).set_active(channel, active);
    }
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`LampEvent`]s through this port.
/// Adapters decide where they go.
pub trait EventSink {
    fn emit(&mut self, event: &LampEvent);
}
