//! Lamp configuration parameters
//!
//! All tunable parameters for the FocusLamp simulator.
//! Values come from the defaults below, an optional JSON file, and
//! `FOCUSLAMP_*` environment overrides, in that order.

use std::env::{self, VarError};
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::pins;

/// Path of an optional JSON configuration file.
pub const ENV_CONFIG_PATH: &str = "FOCUSLAMP_CONFIG";
/// Override for [`LampConfig::poll_interval_ms`].
pub const ENV_POLL_MS: &str = "FOCUSLAMP_POLL_MS";
/// Override for [`LampConfig::max_cycles`].
pub const ENV_CYCLES: &str = "FOCUSLAMP_CYCLES";
/// Override for [`LampConfig::seed`].
pub const ENV_SEED: &str = "FOCUSLAMP_SEED";

/// Core lamp configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LampConfig {
    // --- Indicator pins ---
    /// GPIO driving the red (stressed) LED
    pub red_pin: i32,
    /// GPIO driving the yellow (moderate) LED
    pub yellow_pin: i32,
    /// GPIO driving the green (calm) LED
    pub green_pin: i32,

    // --- Timing ---
    /// Delay between polling cycles (milliseconds)
    pub poll_interval_ms: u64,
    /// Stop after this many cycles; `None` runs until Ctrl+C
    pub max_cycles: Option<u64>,

    // --- Simulation ---
    /// Seed for the simulated sensors; `None` seeds from entropy
    pub seed: Option<u64>,
}

impl Default for LampConfig {
    fn default() -> Self {
        Self {
            red_pin: pins::LED_RED_GPIO,
            yellow_pin: pins::LED_YELLOW_GPIO,
            green_pin: pins::LED_GREEN_GPIO,

            poll_interval_ms: 1000, // 1 Hz
            max_cycles: None,

            seed: None,
        }
    }
}

impl LampConfig {
    /// Reject configurations the simulator cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let pins = [self.red_pin, self.yellow_pin, self.green_pin];
        if pins.iter().any(|&p| p < 0) {
            return Err(ConfigError::ValidationFailed("pin numbers must be non-negative"));
        }
        if pins[0] == pins[1] || pins[0] == pins[2] || pins[1] == pins[2] {
            return Err(ConfigError::ValidationFailed("indicator pins must be distinct"));
        }
        if self.poll_interval_ms == 0 {
            return Err(ConfigError::ValidationFailed("poll_interval_ms must be > 0"));
        }
        if self.max_cycles == Some(0) {
            return Err(ConfigError::ValidationFailed("max_cycles must be > 0 when set"));
        }
        Ok(())
    }

    /// Parse and validate a JSON document. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| ConfigError::from_io(path, &e))?;
        let config = Self::from_json(&json)?;
        info!("Config loaded from {}", path.display());
        Ok(config)
    }

    /// Build the configuration from the process environment.
    ///
    /// Starts from the file named by `FOCUSLAMP_CONFIG` (or the defaults
    /// when unset), then applies the `FOCUSLAMP_POLL_MS`,
    /// `FOCUSLAMP_CYCLES` and `FOCUSLAMP_SEED` overrides.  A variable
    /// that is set but not valid UTF-8 is an error, not "unset".
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env_var(var, env::var(var)))
    }

    /// [`from_env`](Self::from_env) over any variable source (the
    /// environment in production, a map in tests).
    pub fn from_lookup(
        lookup: impl Fn(&'static str) -> Result<Option<String>, ConfigError>,
    ) -> Result<Self, ConfigError> {
        let mut config = match lookup(ENV_CONFIG_PATH)? {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.apply_overrides(&lookup)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply the `FOCUSLAMP_POLL_MS`, `FOCUSLAMP_CYCLES` and
    /// `FOCUSLAMP_SEED` overrides from `lookup`.
    pub fn apply_overrides(
        &mut self,
        lookup: impl Fn(&'static str) -> Result<Option<String>, ConfigError>,
    ) -> Result<(), ConfigError> {
        if let Some(v) = lookup(ENV_POLL_MS)? {
            self.poll_interval_ms = parse_var(ENV_POLL_MS, &v)?;
        }
        if let Some(v) = lookup(ENV_CYCLES)? {
            self.max_cycles = Some(parse_var(ENV_CYCLES, &v)?);
        }
        if let Some(v) = lookup(ENV_SEED)? {
            self.seed = Some(parse_var(ENV_SEED, &v)?);
        }
        Ok(())
    }
}

/// Only an absent variable counts as unset.
fn env_var(var: &'static str, value: Result<String, VarError>) -> Result<Option<String>, ConfigError> {
    match value {
        Ok(v) => Ok(Some(v)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(ConfigError::InvalidEnv(var)),
    }
}

fn parse_var(var: &'static str, value: &str) -> Result<u64, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidEnv(var))
}
