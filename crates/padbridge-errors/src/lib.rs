//! Centralized error types for padbridge
//!
//! Every failure the pipeline can surface is a *setup-time* failure: a device
//! that cannot be identified, a layout table that does not fit its report, a
//! remap profile that contradicts itself. Per-report problems (malformed
//! frames, broken calibration sequences) are never errors at this level; the
//! session turns them into drop outcomes.
//!
//! - [`common`]: top-level error type and its category
//! - [`device`]: device identification errors
//! - [`profile`]: remap profile and layout table errors
//! - [`validation`]: rejected calibration values
//!
//! # Example
//!
//! ```
//! use padbridge_errors::prelude::*;
//!
//! fn check_deadzone(device: &str, deadzone: i32, abs_max: i32) -> Result<()> {
//!     if deadzone >= abs_max {
//!         let reason = format!("deadzone {deadzone} >= abs_max {abs_max}");
//!         return Err(ValidationError::calibration(device, reason).into());
//!     }
//!     Ok(())
//! }
//!
//! assert_eq!(check_deadzone("Joy-Con (L)", 0xAE, 0x578).map_err(|e| e.category()), Ok(()));
//! let err = check_deadzone("Joy-Con (L)", 0x600, 0x578).map_err(|e| e.category());
//! assert_eq!(err, Err(ErrorCategory::Validation));
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs, rust_2018_idioms)]

pub mod common;
pub mod device;
pub mod prelude;
pub mod profile;
pub mod validation;

pub use common::{ErrorCategory, PadbridgeError};
pub use device::DeviceError;
pub use profile::ProfileError;
pub use validation::ValidationError;

/// A specialized `Result` type for padbridge setup operations.
pub type Result<T> = std::result::Result<T, PadbridgeError>;
