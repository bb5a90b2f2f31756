//! Ambient noise sensor (sound-level meter), simulated.
//!
//! Produces a uniformly distributed integer in the calibrated
//! 30 – 90 dB window on every read.

use crate::app::ports::SensorPort;

/// Quietest level the sensor reports (dB).
pub const NOISE_MIN_DB: i32 = 30;
/// Loudest level the sensor reports (dB).
pub const NOISE_MAX_DB: i32 = 90;

pub struct NoiseSensor {
    rng: fastrand::Rng,
}

impl NoiseSensor {
    pub fn new() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }

    /// Reproducible sequence for tests and replayable simulations.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }
}

impl Default for NoiseSensor {
    fn default() -> Self {
        Self::new()
    }
}

impl SensorPort for NoiseSensor {
    fn read_value(&mut self) -> i32 {
        self.rng.i32(NOISE_MIN_DB..=NOISE_MAX_DB)
    }
}
