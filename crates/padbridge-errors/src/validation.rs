//! Calibration values rejected at attach time.

/// A device's built-in calibration could not be installed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// The factory calibration for a device family is unusable
    #[error("Calibration for {device} rejected: {reason}")]
    Calibration {
        /// Device family name
        device: String,
        /// Why the calibration is unusable
        reason: String,
    },
}

impl ValidationError {
    /// Create a calibration error for `device`.
    pub fn calibration(device: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::Calibration {
            device: device.into(),
            reason: reason.into(),
        }
    }
}
