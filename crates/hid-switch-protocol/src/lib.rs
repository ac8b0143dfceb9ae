//! Nintendo Switch Joy-Con Bluetooth HID report decoding.
//!
//! Joy-Cons stream one of two full-state input reports depending on the
//! report mode the host selected, and answer subcommands (including SPI
//! flash reads used to fetch stick calibration) with a third report.
//!
//! # Report IDs
//! - `0x30`: extended ("standard full") input report, 24-bit button field
//!   and two packed 12-bit stick pairs
//! - `0x3F`: compact ("simple HID") input report, 16-bit button field and a
//!   4-bit hat instead of continuous stick values
//! - `0x21`: subcommand reply; SPI flash reads at the stick calibration
//!   addresses carry the calibration fragments
//!
//! # Byte order
//! Every multi-byte field is transmitted least-significant byte first.
//! The 24-bit button field is read with the first byte as the most
//! significant, which puts the right-hand buttons in bits 16..24 and the
//! left-hand buttons in bits 0..8.
//!
//! Decoding is a pure function of the frame; nothing here performs I/O.

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(static_mut_refs)]
#![deny(clippy::unwrap_used)]

pub mod calibration;
pub mod frame;
pub mod ids;
pub mod input;
pub mod packed;
pub mod report;

pub use calibration::{
    AssemblyStatus, CalibrationAssembler, CalibrationData, CalibrationFragment, StickCalibration,
};
pub use frame::RawFrame;
pub use ids::{
    HID_DATA_INPUT, JOYCON_LEFT_NAME, JOYCON_RIGHT_NAME, REPORT_ID_COMPACT, REPORT_ID_EXTENDED,
    REPORT_ID_SUBCMD_REPLY,
};
pub use input::{ParseError, ReportLayout, WirelessInputState, PHYSICAL_AXES};
pub use packed::{pack_axis_pair, read_u24_reversed, unpack_axis_pair, write_u24_reversed};
pub use report::{decode, DecodedReport};
