//! Focus-state classifier.
//!
//! Maps one [`Reading`] to a [`LampState`] with an ordered cascade of
//! threshold rules.  The first rule that matches wins:
//!
//! | Order | State      | Condition                                          |
//! |-------|------------|----------------------------------------------------|
//! | 1     | `Stressed` | noise > 70 dB **or** light < 150 lux **or** HR > 100 |
//! | 2     | `Moderate` | noise > 50 dB **or** light < 300 lux **or** HR > 90  |
//! | 3     | `Calm`     | otherwise                                          |
//!
//! All comparisons are strict, so a reading sitting exactly on a threshold
//! falls through to the next rule.

use core::fmt;

use super::ports::Channel;

// ---------------------------------------------------------------------------
// Thresholds
// ---------------------------------------------------------------------------

/// Noise above this (dB) is stressful.
pub const STRESSED_NOISE_DB: i32 = 70;
/// Light below this (lux) is stressful.
pub const STRESSED_LIGHT_LUX: i32 = 150;
/// Heart rate above this (bpm) is stressful.
pub const STRESSED_HEARTBEAT_BPM: i32 = 100;

/// Noise above this (dB) is distracting.
pub const MODERATE_NOISE_DB: i32 = 50;
/// Light below this (lux) is distracting.
pub const MODERATE_LIGHT_LUX: i32 = 300;
/// Heart rate above this (bpm) is elevated.
pub const MODERATE_HEARTBEAT_BPM: i32 = 90;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Discrete focus state, ordered by severity (`Calm < Moderate < Stressed`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum LampState {
    Calm = 0,
    Moderate = 1,
    Stressed = 2,
}

impl LampState {
    /// Every state in ascending severity.
    pub const ALL: [Self; 3] = [Self::Calm, Self::Moderate, Self::Stressed];

    /// The indicator channel that represents this state.
    pub const fn channel(self) -> Channel {
        match self {
            Self::Calm => Channel::Green,
            Self::Moderate => Channel::Yellow,
            Self::Stressed => Channel::Red,
        }
    }
}

impl fmt::Display for LampState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Calm => write!(f, "calm"),
            Self::Moderate => write!(f, "moderate"),
            Self::Stressed => write!(f, "stressed"),
        }
    }
}

/// One polling instant's worth of sensor values.
///
/// The fields are independent and unbounded; calibrated ranges belong to
/// the sensors, not to this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Reading {
    /// Ambient noise (dB).
    pub noise_db: i32,
    /// Light intensity (lux).
    pub light_lux: i32,
    /// Heart rate (beats per minute).
    pub heartbeat_bpm: i32,
}

impl Reading {
    pub const fn new(noise_db: i32, light_lux: i32, heartbeat_bpm: i32) -> Self {
        Self {
            noise_db,
            light_lux,
            heartbeat_bpm,
        }
    }

    pub const fn classify(&self) -> LampState {
        classify(self.noise_db, self.light_lux, self.heartbeat_bpm)
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "noise={}dB light={}lux hr={}bpm",
            self.noise_db, self.light_lux, self.heartbeat_bpm
        )
    }
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Classify a reading.  Total and pure: every triple maps to exactly one state.
pub const fn classify(noise_db: i32, light_lux: i32, heartbeat_bpm: i32) -> LampState {
    if noise_db > STRESSED_NOISE_DB
        || light_lux < STRESSED_LIGHT_LUX
        || heartbeat_bpm > STRESSED_HEARTBEAT_BPM
    {
        LampState::Stressed
    } else if noise_db > MODERATE_NOISE_DB
        || light_lux < MODERATE_LIGHT_LUX
        || heartbeat_bpm > MODERATE_HEARTBEAT_BPM
    {
        LampState::Moderate
    } else {
        LampState::Calm
    }
}
