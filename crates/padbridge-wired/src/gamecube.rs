//! GameCube controller poll response.
//!
//! # Layout (8 bytes)
//! | Byte | Content                                             |
//! |------|-----------------------------------------------------|
//! | 0    | bit 0 A, 1 B, 2 X, 3 Y, 4 Start                     |
//! | 1    | bit 0 D-left, 1 D-right, 2 D-down, 3 D-up, 4 Z, 5 R, 6 L, 7 always set |
//! | 2–3  | main stick X, Y (`0x80` center)                     |
//! | 4–5  | C-stick X, Y (`0x80` center)                        |
//! | 6–7  | L, R analog (`0x00` released)                       |
//!
//! In [`WiredOutputState::btns`] byte 0 is bits 0..8 and byte 1 bits 8..16,
//! without the always-set bit.

use padbridge_calibration::OUTPUT_SCALE;
use padbridge_input_maps::{AxisSlot, GenericButton, MappedInputState};

use crate::scale::rescale;
use crate::{WiredOutputState, WiredTarget};

pub const REPORT_LEN: usize = 8;

/// Stick byte at rest.
pub const STICK_CENTER: i32 = 0x80;

/// Stick excursion either side of center.
pub const STICK_SCALE: i32 = 100;

/// Analog trigger value when fully pressed.
pub const TRIGGER_MAX: i32 = 0xFF;

const ALWAYS_SET: u8 = 0x80;

/// Button masks within [`WiredOutputState::btns`].
pub mod buttons {
    pub const A: u32 = 1 << 0;
    pub const B: u32 = 1 << 1;
    pub const X: u32 = 1 << 2;
    pub const Y: u32 = 1 << 3;
    pub const START: u32 = 1 << 4;
    pub const DPAD_LEFT: u32 = 1 << 8;
    pub const DPAD_RIGHT: u32 = 1 << 9;
    pub const DPAD_DOWN: u32 = 1 << 10;
    pub const DPAD_UP: u32 = 1 << 11;
    pub const Z: u32 = 1 << 12;
    pub const R: u32 = 1 << 13;
    pub const L: u32 = 1 << 14;

    /// Every bit a report can carry.
    pub const ALL: u32 = 0x1F | 0x7F << 8;
}

const BUTTON_MAP: [(GenericButton, u32); 12] = [
    (GenericButton::FaceSouth, buttons::A),
    (GenericButton::FaceWest, buttons::B),
    (GenericButton::FaceEast, buttons::X),
    (GenericButton::FaceNorth, buttons::Y),
    (GenericButton::Start, buttons::START),
    (GenericButton::DpadLeft, buttons::DPAD_LEFT),
    (GenericButton::DpadRight, buttons::DPAD_RIGHT),
    (GenericButton::DpadDown, buttons::DPAD_DOWN),
    (GenericButton::DpadUp, buttons::DPAD_UP),
    (GenericButton::RightBumper, buttons::Z),
    (GenericButton::LeftTrigger, buttons::L),
    (GenericButton::RightTrigger, buttons::R),
];

pub(crate) fn from_mapped(mapped: &MappedInputState) -> WiredOutputState {
    let btns = BUTTON_MAP
        .iter()
        .filter(|(generic, _)| mapped.is_pressed(*generic))
        .fold(0, |acc, (_, mask)| acc | mask);

    let stick = |slot| rescale(mapped.axis(slot), OUTPUT_SCALE, STICK_SCALE);
    // A digital press with no analog travel reads as a full pull.
    let trigger = |slot, digital: u32| {
        let analog = rescale(mapped.axis(slot).max(0), OUTPUT_SCALE, TRIGGER_MAX);
        if analog == 0 && btns & digital != 0 {
            TRIGGER_MAX
        } else {
            analog
        }
    };

    WiredOutputState {
        target: WiredTarget::GameCube,
        btns,
        axes: [
            stick(AxisSlot::Lx),
            stick(AxisSlot::Ly),
            stick(AxisSlot::Rx),
            stick(AxisSlot::Ry),
            trigger(AxisSlot::Lt, buttons::L),
            trigger(AxisSlot::Rt, buttons::R),
        ],
    }
}

fn to_byte(value: i32) -> u8 {
    u8::try_from(value.clamp(0, 0xFF)).unwrap_or(u8::MAX)
}

pub(crate) fn pack(state: &WiredOutputState) -> [u8; REPORT_LEN] {
    let [lx, ly, rx, ry, lt, rt] = state.axes;
    [
        (state.btns & 0xFF) as u8,
        ((state.btns >> 8) & 0x7F) as u8 | ALWAYS_SET,
        to_byte(STICK_CENTER + lx),
        to_byte(STICK_CENTER + ly),
        to_byte(STICK_CENTER + rx),
        to_byte(STICK_CENTER + ry),
        to_byte(lt),
        to_byte(rt),
    ]
}

pub(crate) fn unpack(report: &[u8; REPORT_LEN]) -> WiredOutputState {
    let [b0, b1, lx, ly, rx, ry, lt, rt] = *report;
    let stick = |byte: u8| i32::from(byte) - STICK_CENTER;
    WiredOutputState {
        target: WiredTarget::GameCube,
        btns: u32::from(b0) | u32::from(b1 & !ALWAYS_SET) << 8,
        axes: [
            stick(lx),
            stick(ly),
            stick(rx),
            stick(ry),
            i32::from(lt),
            i32::from(rt),
        ],
    }
}
