//! Stick calibration utilities
//!
//! This crate holds the per-axis calibration a device session normalizes
//! against, and the normalization math itself.

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]

pub mod normalize;
pub mod store;
pub mod types;

pub use normalize::*;
pub use store::*;
pub use types::*;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalibrationError {
    #[error("Deadzone {deadzone} must be smaller than abs_max {abs_max}")]
    DeadzoneTooLarge { deadzone: i32, abs_max: i32 },

    #[error("abs_max must be positive, got {0}")]
    NonPositiveRange(i32),

    #[error("Deadzone must not be negative, got {0}")]
    NegativeDeadzone(i32),

    #[error("Calibration set has {got} axes, expected {expected}")]
    AxisCountMismatch { got: usize, expected: usize },
}

pub type CalibrationResult<T> = Result<T, CalibrationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_types() {
        let err = CalibrationError::DeadzoneTooLarge {
            deadzone: 200,
            abs_max: 100,
        };
        assert_eq!(
            format!("{}", err),
            "Deadzone 200 must be smaller than abs_max 100"
        );

        let err = CalibrationError::NonPositiveRange(0);
        assert_eq!(format!("{}", err), "abs_max must be positive, got 0");
    }
}
