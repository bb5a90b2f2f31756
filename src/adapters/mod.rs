//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter        | Implements         | Connects to              |
//! |----------------|--------------------|--------------------------|
//! | `log_sink`     | EventSink          | `log` facade             |
//!
//! The sensor and indicator adapters live in [`crate::sensors`] and
//! [`crate::drivers`], next to the peripherals they simulate.

pub mod log_sink;
