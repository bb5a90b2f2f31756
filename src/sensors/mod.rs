//! Sensor subsystem: individual drivers and the aggregating [`SensorHub`].
//!
//! The hub owns one sensor per physical quantity and produces a
//! [`Reading`] each polling cycle.

pub mod heartbeat;
pub mod light;
pub mod noise;

use crate::app::classifier::Reading;
use crate::app::ports::{ReadingSource, SensorPort};
use heartbeat::HeartbeatSensor;
use light::LightSensor;
use noise::NoiseSensor;

/// The hub wired to the three simulated sensors.
pub type SimulatedSensors = SensorHub<NoiseSensor, LightSensor, HeartbeatSensor>;

/// Aggregates the noise, light and heart-rate sensors.
pub struct SensorHub<N, L, H> {
    pub noise: N,
    pub light: L,
    pub heartbeat: H,
}

impl<N: SensorPort, L: SensorPort, H: SensorPort> SensorHub<N, L, H> {
    pub fn new(noise: N, light: L, heartbeat: H) -> Self {
        Self {
            noise,
            light,
            heartbeat,
        }
    }

    /// Read every sensor once, in noise → light → heartbeat order.
    pub fn read_all(&mut self) -> Reading {
        Reading {
            noise_db: self.noise.read_value(),
            light_lux: self.light.read_value(),
            heartbeat_bpm: self.heartbeat.read_value(),
        }
    }
}

impl SimulatedSensors {
    /// Build the simulated hub.  With a seed, each sensor gets its own
    /// derived seed so the whole run is reproducible.
    pub fn simulated(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::new(
                NoiseSensor::with_seed(s),
                LightSensor::with_seed(s.wrapping_add(1)),
                HeartbeatSensor::with_seed(s.wrapping_add(2)),
            ),
            None => Self::new(NoiseSensor::new(), LightSensor::new(), HeartbeatSensor::new()),
        }
    }
}

impl<N: SensorPort, L: SensorPort, H: SensorPort> ReadingSource for SensorHub<N, L, H> {
    fn read_all(&mut self) -> Reading {
        SensorHub::read_all(self)
    }
}
