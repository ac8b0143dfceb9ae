//! Per-device translation pipeline: wireless HID reports in, wired console
//! reports out.
//!
//! # Stages
//!
//! ```text
//! RawFrame ─ decode ─┬─ WirelessInputState ─ assemble ─ merge ─ GenericInputState
//!                    │                                               │
//!                    └─ CalibrationFragment ─ CalibrationStore       apply_profile
//!                                                                    │
//!                              wire bytes ─ encode ─ WiredOutputState ─ MappedInputState
//! ```
//!
//! A [`Session`] owns everything that survives between reports: the
//! calibration store, the calibration fragment buffer, the sticky generic
//! state, and the priming counter. Sessions share nothing, so any number can
//! run side by side.
//!
//! # Example
//!
//! ```
//! use padbridge_pipeline::{ReportOutcome, Session, SessionConfig};
//! use padbridge_hid_switch_protocol::RawFrame;
//!
//! let mut session = Session::new(SessionConfig::default())?;
//! session.attach("Joy-Con (L)")?;
//!
//! let neutral = [0x00, 0x00, 0x0F, 0x00, 0x80, 0x00, 0x80, 0x00, 0x80, 0x00, 0x80];
//! session.process(RawFrame::new(0x3F, &neutral));
//! session.process(RawFrame::new(0x3F, &neutral));
//!
//! // Hat pointing up-right
//! let mut report = neutral;
//! report[2] = 0x01;
//! let outcome = session.process(RawFrame::new(0x3F, &report));
//! let output = outcome.output().ok_or("no output")?;
//! assert_eq!(&output.mapped.axes[..2], &[100, 100]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(static_mut_refs)]
#![warn(missing_debug_implementations)]

pub mod assembler;
pub mod device;
pub mod records;
pub mod session;

pub use assembler::{assemble, normalize_axes};
pub use device::{AxisBinding, DeviceDescriptor, DeviceFamily};
pub use session::{
    DropReason, PipelineOutput, ReportOutcome, Session, SessionConfig, SessionState,
    DEFAULT_PRIMING_REPORTS,
};
