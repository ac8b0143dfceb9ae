//! Top-level error type and its classification.

use core::fmt;

use crate::{DeviceError, ProfileError, ValidationError};

/// Any setup failure a padbridge session can report.
#[derive(Debug, thiserror::Error)]
pub enum PadbridgeError {
    /// Device identification failed
    #[error("Device error: {0}")]
    Device(#[from] DeviceError),

    /// A remap profile or layout table did not compile
    #[error("Profile error: {0}")]
    Profile(#[from] ProfileError),

    /// A device calibration could not be installed
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Session configuration could not be read
    #[error("Configuration error: {0}")]
    Config(String),
}

impl PadbridgeError {
    /// Which part of setup failed.
    pub fn category(&self) -> ErrorCategory {
        match self {
            PadbridgeError::Device(_) => ErrorCategory::Device,
            PadbridgeError::Profile(_) => ErrorCategory::Profile,
            PadbridgeError::Validation(_) => ErrorCategory::Validation,
            PadbridgeError::Config(_) => ErrorCategory::Config,
        }
    }

    /// Create a configuration error with a message.
    pub fn config(msg: impl Into<String>) -> Self {
        PadbridgeError::Config(msg.into())
    }
}

/// Coarse classification of a [`PadbridgeError`], used for exit codes and
/// machine-readable error output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Device identification
    Device,
    /// Profiles and layout tables
    Profile,
    /// Session configuration
    Config,
    /// Calibration values
    Validation,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ErrorCategory::Device => "Device",
            ErrorCategory::Profile => "Profile",
            ErrorCategory::Config => "Config",
            ErrorCategory::Validation => "Validation",
        })
    }
}
