//! Heart-rate sensor (optical pulse monitor), simulated.
//!
//! Produces a uniformly distributed integer in the calibrated
//! 60 – 120 bpm window on every read.

use crate::app::ports::SensorPort;

/// Slowest pulse the sensor reports (bpm).
pub const HEARTBEAT_MIN_BPM: i32 = 60;
/// Fastest pulse the sensor reports (bpm).
pub const HEARTBEAT_MAX_BPM: i32 = 120;

pub struct HeartbeatSensor {
    rng: fastrand::Rng,
}

impl HeartbeatSensor {
    pub fn new() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }
}

impl Default for HeartbeatSensor {
    fn default() -> Self {
        Self::new()
    }
}

impl SensorPort for HeartbeatSensor {
    fn read_value(&mut self) -> i32 {
        self.rng.i32(HEARTBEAT_MIN_BPM..=HEARTBEAT_MAX_BPM)
    }
}
