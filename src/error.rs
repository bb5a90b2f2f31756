//! Error types for the FocusLamp controller.
//!
//! The classifier and the lamp driver are total and never fail; the only
//! fallible surface is loading the runtime configuration.

use core::fmt;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

/// Errors from [`LampConfig`](crate::config::LampConfig) loading and validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The configuration file does not exist. Carries the path tried.
    NotFound(PathBuf),
    /// The configuration file exists but could not be read.
    Io(std::io::ErrorKind),
    /// The file contents are not a valid configuration document.
    /// Carries the deserializer's message.
    Corrupted(String),
    /// A config field failed range validation.
    /// The `&'static str` describes which field and why.
    ValidationFailed(&'static str),
    /// An environment override could not be parsed.
    /// The `&'static str` names the variable.
    InvalidEnv(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(path) => write!(f, "config file not found: {}", path.display()),
            Self::Io(kind) => write!(f, "config I/O error: {kind}"),
            Self::Corrupted(msg) => write!(f, "config corrupted: {msg}"),
            Self::ValidationFailed(msg) => write!(f, "validation failed: {msg}"),
            Self::InvalidEnv(var) => write!(f, "invalid value in environment variable {var}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl ConfigError {
    /// Map a failed read of the config file at `path`.
    pub fn from_io(path: &Path, e: &std::io::Error) -> Self {
        match e.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound(path.to_path_buf()),
            kind => Self::Io(kind),
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        Self::Corrupted(e.to_string())
    }
}
