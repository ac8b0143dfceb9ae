//! Generic state assembly.
//!
//! Turns one decoded wireless report into a [`GenericUpdate`]: the fields this
//! report actually carries. The session merges it into the previous generic
//! state, so a compact report (no sticks) leaves the last stick values alone.
//! The compact hat is the stick itself; it only reaches axes, at the profile
//! mapper, never the D-pad buttons.

use padbridge_calibration::{normalize, CalibrationStore};
use padbridge_hid_switch_protocol::{ReportLayout, WirelessInputState, PHYSICAL_AXES};
use padbridge_input_maps::{GenericUpdate, Hat, HatUpdate, AXIS_SLOT_COUNT};

use crate::device::{AxisBinding, DeviceDescriptor};

/// Normalizes raw physical samples into logical slots.
///
/// Binding `i` is normalized against store axis `i`. Slots without a binding,
/// or whose binding has no calibration, stay `None`.
pub fn normalize_axes(
    raw: &[i32; PHYSICAL_AXES],
    bindings: &[AxisBinding],
    store: &CalibrationStore,
) -> [Option<i32>; AXIS_SLOT_COUNT] {
    let mut axes = [None; AXIS_SLOT_COUNT];
    for (i, binding) in bindings.iter().enumerate() {
        let (Some(sample), Some(axis)) = (raw.get(binding.physical), store.axis(i)) else {
            continue;
        };
        if let Some(slot) = axes.get_mut(binding.slot.index()) {
            *slot = Some(normalize(*sample, axis));
        }
    }
    axes
}

/// What `report` contributes to the generic state.
pub fn assemble(
    report: &WirelessInputState,
    device: &DeviceDescriptor,
    store: &CalibrationStore,
) -> GenericUpdate {
    let btns = device.layout(report.layout).map(report.btns);
    match report.layout {
        ReportLayout::Extended => GenericUpdate {
            btns: Some(btns),
            axes: normalize_axes(&report.axes, device.axes, store),
            hat: HatUpdate::Clear,
        },
        ReportLayout::Compact => GenericUpdate {
            btns: Some(btns),
            axes: [None; AXIS_SLOT_COUNT],
            hat: HatUpdate::Set(Hat::new(report.hat.unwrap_or(Hat::CENTERED.value()))),
        },
    }
}
