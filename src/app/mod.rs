//! Application core: pure domain logic, zero I/O.
//!
//! This module contains the rules of the FocusLamp: classifying a reading
//! into a focus state and driving the indicator from it.  All interaction
//! with hardware happens through **port traits** defined in [`ports`],
//! keeping this layer fully testable without real peripherals.

pub mod classifier;
pub mod driver;
pub mod events;
pub mod ports;
