//! Ambient light sensor (photoresistor / lux meter), simulated.
//!
//! Produces a uniformly distributed integer in the calibrated
//! 50 – 500 lux window on every read.

use crate::app::ports::SensorPort;

/// Darkest level the sensor reports (lux).
pub const LIGHT_MIN_LUX: i32 = 50;
/// Brightest level the sensor reports (lux).
pub const LIGHT_MAX_LUX: i32 = 500;

pub struct LightSensor {
    rng: fastrand::Rng,
}

impl LightSensor {
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

impl Default for LightSensor {
    fn default() -> Self {
        Self::new()
    }
}

impl SensorPort for LightSensor {
    fn read_value(&mut self) -> i32 {
        self.rng.i32(LIGHT_MIN_LUX..=LIGHT_MAX_LUX)
    }
}
