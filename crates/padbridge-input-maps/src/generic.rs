//! Device-agnostic controller state.

use padbridge_calibration::OUTPUT_SCALE;
use serde::{Deserialize, Serialize};

/// Number of generic buttons.
pub const GENERIC_BUTTON_COUNT: usize = 18;

/// Number of generic axis slots.
pub const AXIS_SLOT_COUNT: usize = 6;

/// Generic button, numbered by its bit in `btns`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum GenericButton {
    DpadLeft = 0,
    DpadRight = 1,
    DpadDown = 2,
    DpadUp = 3,
    FaceWest = 4,
    FaceEast = 5,
    FaceSouth = 6,
    FaceNorth = 7,
    Start = 8,
    Select = 9,
    Home = 10,
    Capture = 11,
    LeftBumper = 12,
    LeftTrigger = 13,
    LeftStick = 14,
    RightBumper = 15,
    RightTrigger = 16,
    RightStick = 17,
}

impl GenericButton {
    pub const ALL: [GenericButton; GENERIC_BUTTON_COUNT] = [
        GenericButton::DpadLeft,
        GenericButton::DpadRight,
        GenericButton::DpadDown,
        GenericButton::DpadUp,
        GenericButton::FaceWest,
        GenericButton::FaceEast,
        GenericButton::FaceSouth,
        GenericButton::FaceNorth,
        GenericButton::Start,
        GenericButton::Select,
        GenericButton::Home,
        GenericButton::Capture,
        GenericButton::LeftBumper,
        GenericButton::LeftTrigger,
        GenericButton::LeftStick,
        GenericButton::RightBumper,
        GenericButton::RightTrigger,
        GenericButton::RightStick,
    ];

    pub fn bit(self) -> u8 {
        self as u8
    }

    pub fn mask(self) -> u32 {
        1 << self.bit()
    }

    pub fn from_bit(bit: u8) -> Option<Self> {
        Self::ALL.get(usize::from(bit)).copied()
    }

    /// Name as it appears in profile JSON.
    pub fn name(self) -> &'static str {
        match self {
            GenericButton::DpadLeft => "dpad_left",
            GenericButton::DpadRight => "dpad_right",
            GenericButton::DpadDown => "dpad_down",
            GenericButton::DpadUp => "dpad_up",
            GenericButton::FaceWest => "face_west",
            GenericButton::FaceEast => "face_east",
            GenericButton::FaceSouth => "face_south",
            GenericButton::FaceNorth => "face_north",
            GenericButton::Start => "start",
            GenericButton::Select => "select",
            GenericButton::Home => "home",
            GenericButton::Capture => "capture",
            GenericButton::LeftBumper => "left_bumper",
            GenericButton::LeftTrigger => "left_trigger",
            GenericButton::LeftStick => "left_stick",
            GenericButton::RightBumper => "right_bumper",
            GenericButton::RightTrigger => "right_trigger",
            GenericButton::RightStick => "right_stick",
        }
    }
}

/// Logical axis slot. Y axes are positive up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisSlot {
    Lx,
    Ly,
    Rx,
    Ry,
    /// Left trigger, `0..=OUTPUT_SCALE`.
    Lt,
    /// Right trigger, `0..=OUTPUT_SCALE`.
    Rt,
}

impl AxisSlot {
    pub const ALL: [AxisSlot; AXIS_SLOT_COUNT] = [
        AxisSlot::Lx,
        AxisSlot::Ly,
        AxisSlot::Rx,
        AxisSlot::Ry,
        AxisSlot::Lt,
        AxisSlot::Rt,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn mask(self) -> u32 {
        1 << self as u32
    }

    pub fn name(self) -> &'static str {
        match self {
            AxisSlot::Lx => "lx",
            AxisSlot::Ly => "ly",
            AxisSlot::Rx => "rx",
            AxisSlot::Ry => "ry",
            AxisSlot::Lt => "lt",
            AxisSlot::Rt => "rt",
        }
    }
}

const FULL: i32 = OUTPUT_SCALE;

/// Hat value → (X, Y) at full magnitude. Diagonals are not normalized.
const HAT_TO_AXES: [(i32, i32); 16] = [
    (0, FULL),
    (FULL, FULL),
    (FULL, 0),
    (FULL, -FULL),
    (0, -FULL),
    (-FULL, -FULL),
    (-FULL, 0),
    (-FULL, FULL),
    (0, 0),
    (0, 0),
    (0, 0),
    (0, 0),
    (0, 0),
    (0, 0),
    (0, 0),
    (0, 0),
];

/// A 4-bit discrete direction: 0 is up, clockwise in eighths; 8..=15 centered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hat(u8);

impl Hat {
    pub const CENTERED: Hat = Hat(0x0F);

    /// Keeps the low nibble of `raw`.
    pub fn new(raw: u8) -> Self {
        Hat(raw & 0x0F)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn is_centered(self) -> bool {
        self.0 >= 8
    }

    /// Axis pair for this direction, `(x, y)` with Y positive up.
    pub fn to_axes(self) -> (i32, i32) {
        HAT_TO_AXES.get(usize::from(self.0)).copied().unwrap_or((0, 0))
    }
}

/// Normalized snapshot, carried from report to report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenericInputState {
    /// One bit per [`GenericButton`].
    pub btns: u32,
    /// Indexed by [`AxisSlot`], each within `±OUTPUT_SCALE`.
    pub axes: [i32; AXIS_SLOT_COUNT],
    /// Present while the source reports a discrete direction.
    pub hat: Option<Hat>,
}

impl GenericInputState {
    pub fn is_pressed(&self, button: GenericButton) -> bool {
        self.btns & button.mask() != 0
    }

    pub fn axis(&self, slot: AxisSlot) -> i32 {
        self.axes.get(slot.index()).copied().unwrap_or_default()
    }

    /// Applies the fields `update` carries; everything else is kept.
    pub fn merge(&self, update: &GenericUpdate) -> Self {
        let mut next = *self;
        if let Some(btns) = update.btns {
            next.btns = btns;
        }
        for (slot, value) in next.axes.iter_mut().zip(update.axes) {
            if let Some(value) = value {
                *slot = value;
            }
        }
        match update.hat {
            HatUpdate::Keep => {}
            HatUpdate::Clear => next.hat = None,
            HatUpdate::Set(hat) => next.hat = Some(hat),
        }
        next
    }
}

/// What one report contributes to the generic state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenericUpdate {
    pub btns: Option<u32>,
    pub axes: [Option<i32>; AXIS_SLOT_COUNT],
    pub hat: HatUpdate,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HatUpdate {
    #[default]
    Keep,
    /// The source switched to continuous axes.
    Clear,
    Set(Hat),
}

/// Generic state after a remap profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappedInputState {
    pub btns: u32,
    pub axes: [i32; AXIS_SLOT_COUNT],
}

impl MappedInputState {
    pub fn is_pressed(&self, button: GenericButton) -> bool {
        self.btns & button.mask() != 0
    }

    pub fn axis(&self, slot: AxisSlot) -> i32 {
        self.axes.get(slot.index()).copied().unwrap_or_default()
    }

    pub(crate) fn set_axis(&mut self, slot: AxisSlot, value: i32) {
        if let Some(axis) = self.axes.get_mut(slot.index()) {
            *axis = value;
        }
    }
}
