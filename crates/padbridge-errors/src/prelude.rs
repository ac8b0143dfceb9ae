//! Glob-importable error types.
//!
//! ```
//! use padbridge_errors::prelude::*;
//!
//! fn attach(name: &str) -> Result<()> {
//!     match name {
//!         "Joy-Con (L)" | "Joy-Con (R)" => Ok(()),
//!         other => Err(DeviceError::unsupported(other).into()),
//!     }
//! }
//! # assert_eq!(attach("Joy-Con (R)").map_err(|e| e.category()), Ok(()));
//! # assert_eq!(attach("Wii Remote").map_err(|e| e.category()), Err(ErrorCategory::Device));
//! ```

pub use crate::{
    Result,
    common::{ErrorCategory, PadbridgeError},
    device::DeviceError,
    profile::ProfileError,
    validation::ValidationError,
};
