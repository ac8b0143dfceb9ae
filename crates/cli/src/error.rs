//! Error types for padctl

use std::path::PathBuf;

use padbridge_errors::{ErrorCategory, PadbridgeError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Pipeline(#[from] PadbridgeError),

    #[error("Cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Line {line}: {reason}")]
    InvalidFrame { line: usize, reason: String },

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl CliError {
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Pipeline(e) => match e.category() {
                ErrorCategory::Device => 2,
                ErrorCategory::Profile => 3,
                ErrorCategory::Config | ErrorCategory::Validation => 4,
            },
            CliError::InvalidFrame { .. } | CliError::JsonError(_) => 4,
            CliError::Read { .. } => 1,
        }
    }

    /// Short machine-readable kind for JSON error output.
    pub fn kind(&self) -> String {
        match self {
            CliError::Pipeline(e) => e.category().to_string(),
            CliError::Read { .. } => "IO".to_string(),
            CliError::InvalidFrame { .. } => "Frame".to_string(),
            CliError::JsonError(_) => "Json".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use padbridge_errors::{DeviceError, ProfileError};

    #[test]
    fn exit_codes_follow_category() {
        let device = CliError::from(PadbridgeError::from(DeviceError::unsupported("Pro Controller")));
        assert_eq!(device.exit_code(), 2);
        assert_eq!(device.kind(), "Device");

        let profile = CliError::from(PadbridgeError::from(ProfileError::HatTargetConflict("lx".into())));
        assert_eq!(profile.exit_code(), 3);

        let frame = CliError::InvalidFrame {
            line: 3,
            reason: "odd hex length".into(),
        };
        assert_eq!(frame.exit_code(), 4);
        assert_eq!(frame.to_string(), "Line 3: odd hex length");
    }
}
