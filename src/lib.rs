//! FocusLamp controller library.
//!
//! Exposes the pure classification and driver logic plus the simulated
//! sensor and GPIO adapters, for the simulator binary and for integration
//! testing.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod drivers;
pub mod error;
pub mod pins;
pub mod runner;
pub mod sensors;

pub use app::classifier::{LampState, Reading, classify};
pub use app::driver::LampDriver;
