//! Device identification errors.

/// Raised by `attach` when the exchanged name cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeviceError {
    /// The name matches no known device family
    #[error("Unsupported device: '{0}'")]
    UnsupportedDevice(String),

    /// A device is already attached to this session
    #[error("Device already attached: {0}")]
    AlreadyAttached(String),
}

impl DeviceError {
    /// Create an unsupported device error.
    pub fn unsupported(name: impl Into<String>) -> Self {
        DeviceError::UnsupportedDevice(name.into())
    }
}
