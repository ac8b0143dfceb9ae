//! Per-stage JSON records.
//!
//! Each stage's output is logged at `trace` under its own target, as a JSON
//! string, so a harness can subscribe to exactly the stages it inspects:
//!
//! | Target           | Record                 |
//! |------------------|------------------------|
//! | `wireless_input` | `WirelessInputState`   |
//! | `generic_input`  | `GenericInputState`    |
//! | `mapped_input`   | `MappedInputState`     |
//! | `wired_output`   | `WiredOutputState`     |
//! | `calib_data`     | `CalibrationData`      |
//!
//! Serialization is skipped unless the target is enabled.

use padbridge_hid_switch_protocol::{CalibrationData, WirelessInputState};
use padbridge_input_maps::{GenericInputState, MappedInputState};
use padbridge_wired::WiredOutputState;

pub const WIRELESS_INPUT: &str = "wireless_input";
pub const GENERIC_INPUT: &str = "generic_input";
pub const MAPPED_INPUT: &str = "mapped_input";
pub const WIRED_OUTPUT: &str = "wired_output";
pub const CALIB_DATA: &str = "calib_data";

macro_rules! trace_record {
    ($target:literal, $value:expr) => {
        if tracing::enabled!(target: $target, tracing::Level::TRACE) {
            match serde_json::to_string($value) {
                Ok(json) => tracing::trace!(target: $target, "{json}"),
                Err(e) => tracing::debug!(error = %e, record = $target, "record not serializable"),
            }
        }
    };
}

pub(crate) fn wireless(state: &WirelessInputState) {
    trace_record!("wireless_input", state);
}

pub(crate) fn generic(state: &GenericInputState) {
    trace_record!("generic_input", state);
}

pub(crate) fn mapped(state: &MappedInputState) {
    trace_record!("mapped_input", state);
}

pub(crate) fn wired(state: &WiredOutputState) {
    trace_record!("wired_output", state);
}

pub(crate) fn calibration(data: &CalibrationData) {
    trace_record!("calib_data", data);
}
