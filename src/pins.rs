//! GPIO pin assignments for the FocusLamp board.
//!
//! These are the defaults of [`LampConfig`](crate::config::LampConfig);
//! everything else takes pin numbers from the loaded config.

// ---------------------------------------------------------------------------
// Indicator LEDs (discrete red / yellow / green)
// ---------------------------------------------------------------------------

/// Red LED: lit while the reading classifies as stressed.
pub const LED_RED_GPIO: i32 = 11;
/// Green LED: lit while the reading classifies as calm.
pub const LED_GREEN_GPIO: i32 = 12;
/// Yellow LED: lit while the reading classifies as moderate.
pub const LED_YELLOW_GPIO: i32 = 13;
