//! Indicator output drivers and simulated peripherals.

pub mod sim_pin;
pub mod status_led;
