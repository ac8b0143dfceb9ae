//! Supported wireless devices.
//!
//! A [`DeviceDescriptor`] is everything the pipeline needs to know about one
//! device family: its button tables per report layout, which physical axis
//! feeds each logical slot, and its factory calibration.

use padbridge_calibration::{
    CalibrationAxis, CalibrationResult, CalibrationStore, Polarity,
};
use padbridge_errors::{DeviceError, ProfileError};
use padbridge_hid_switch_protocol::input::{COMPACT_BUTTON_BITS, EXTENDED_BUTTON_BITS};
use padbridge_hid_switch_protocol::{
    CalibrationData, JOYCON_LEFT_NAME, JOYCON_RIGHT_NAME, ReportLayout,
};
use padbridge_input_maps::{AxisSlot, ButtonLayout, GenericButton};
use serde::{Deserialize, Serialize};

/// Factory neutral, raw units.
pub const FACTORY_NEUTRAL: i32 = 0x800;
/// Factory usable excursion, raw units.
pub const FACTORY_ABS_MAX: i32 = 0x578;
/// Factory deadzone, raw units.
pub const FACTORY_DEADZONE: i32 = 0xAE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceFamily {
    JoyConLeft,
    JoyConRight,
}

impl DeviceFamily {
    /// Identifies a device by the name it reported.
    pub fn identify(name: &str) -> Result<Self, DeviceError> {
        match name.trim() {
            JOYCON_LEFT_NAME => Ok(DeviceFamily::JoyConLeft),
            JOYCON_RIGHT_NAME => Ok(DeviceFamily::JoyConRight),
            other => Err(DeviceError::unsupported(other)),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            DeviceFamily::JoyConLeft => JOYCON_LEFT_NAME,
            DeviceFamily::JoyConRight => JOYCON_RIGHT_NAME,
        }
    }

    /// Builds this family's descriptor, validating its button tables.
    pub fn descriptor(self) -> Result<DeviceDescriptor, ProfileError> {
        let (extended, compact, axes) = match self {
            DeviceFamily::JoyConLeft => (JOYCON_L_EXTENDED, JOYCON_L_COMPACT, JOYCON_L_AXES),
            DeviceFamily::JoyConRight => (JOYCON_R_EXTENDED, JOYCON_R_COMPACT, JOYCON_R_AXES),
        };
        Ok(DeviceDescriptor {
            family: self,
            extended: ButtonLayout::new(
                format!("{} extended", self.name()),
                EXTENDED_BUTTON_BITS,
                extended,
            )?,
            compact: ButtonLayout::new(
                format!("{} compact", self.name()),
                COMPACT_BUTTON_BITS,
                compact,
            )?,
            axes,
        })
    }
}

/// Source of one logical axis slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisBinding {
    pub slot: AxisSlot,
    /// Index into the wireless report's physical axes.
    pub physical: usize,
    pub polarity: Polarity,
}

const fn bind(slot: AxisSlot, physical: usize, polarity: Polarity) -> AxisBinding {
    AxisBinding {
        slot,
        physical,
        polarity,
    }
}

// Physical axes: 0 left X, 1 left Y, 2 right X, 3 right Y.
// Held sideways, a single Joy-Con's stick turns a quarter: its Y becomes X.

const JOYCON_L_AXES: &[AxisBinding] = &[
    bind(AxisSlot::Lx, 1, Polarity::Inverted),
    bind(AxisSlot::Ly, 0, Polarity::Normal),
];

const JOYCON_R_AXES: &[AxisBinding] = &[
    bind(AxisSlot::Lx, 3, Polarity::Normal),
    bind(AxisSlot::Ly, 2, Polarity::Inverted),
];

const JOYCON_L_EXTENDED: &[(u8, GenericButton)] = &[
    (0, GenericButton::FaceEast),  // Down
    (1, GenericButton::FaceWest),  // Up
    (2, GenericButton::FaceNorth), // Right
    (3, GenericButton::FaceSouth), // Left
    (4, GenericButton::RightBumper),
    (5, GenericButton::LeftBumper),
    (6, GenericButton::LeftBumper),
    (7, GenericButton::LeftTrigger),
    (8, GenericButton::Start),
    (11, GenericButton::LeftStick),
    (13, GenericButton::Capture),
];

const JOYCON_L_COMPACT: &[(u8, GenericButton)] = &[
    (0, GenericButton::FaceSouth), // Left
    (1, GenericButton::FaceEast),  // Down
    (2, GenericButton::FaceWest),  // Up
    (3, GenericButton::FaceNorth), // Right
    (4, GenericButton::LeftBumper),
    (5, GenericButton::RightBumper),
    (8, GenericButton::Start),
    (10, GenericButton::LeftStick),
    (13, GenericButton::Capture),
    (14, GenericButton::LeftBumper),
    (15, GenericButton::LeftTrigger),
];

const JOYCON_R_EXTENDED: &[(u8, GenericButton)] = &[
    (9, GenericButton::Start),
    (10, GenericButton::LeftStick),
    (12, GenericButton::Home),
    (16, GenericButton::FaceNorth), // Y
    (17, GenericButton::FaceEast),  // X
    (18, GenericButton::FaceWest),  // B
    (19, GenericButton::FaceSouth), // A
    (20, GenericButton::RightBumper),
    (21, GenericButton::LeftBumper),
    (22, GenericButton::RightBumper),
    (23, GenericButton::RightTrigger),
];

const JOYCON_R_COMPACT: &[(u8, GenericButton)] = &[
    (0, GenericButton::FaceSouth), // A
    (1, GenericButton::FaceEast),  // X
    (2, GenericButton::FaceWest),  // B
    (3, GenericButton::FaceNorth), // Y
    (4, GenericButton::LeftBumper),
    (5, GenericButton::RightBumper),
    (9, GenericButton::Start),
    (11, GenericButton::LeftStick),
    (12, GenericButton::Home),
    (14, GenericButton::RightBumper),
    (15, GenericButton::RightTrigger),
];

/// Tables and axis routing for one device family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceDescriptor {
    pub family: DeviceFamily,
    pub extended: ButtonLayout,
    pub compact: ButtonLayout,
    /// One entry per calibrated logical slot; store index follows this order.
    pub axes: &'static [AxisBinding],
}

impl DeviceDescriptor {
    pub fn layout(&self, layout: ReportLayout) -> &ButtonLayout {
        match layout {
            ReportLayout::Extended => &self.extended,
            ReportLayout::Compact => &self.compact,
        }
    }

    /// Calibration installed at attach.
    pub fn factory_calibration(&self) -> CalibrationResult<CalibrationStore> {
        let axes = self
            .axes
            .iter()
            .map(|binding| {
                CalibrationAxis::new(
                    FACTORY_NEUTRAL,
                    FACTORY_ABS_MAX,
                    FACTORY_DEADZONE,
                    binding.polarity,
                )
            })
            .collect::<CalibrationResult<Vec<_>>>()?;
        Ok(CalibrationStore::factory_axes(axes))
    }

    /// Routes a committed per-physical-axis calibration set onto this
    /// device's logical slots.
    pub fn calibration_from(&self, data: &CalibrationData) -> CalibrationResult<CalibrationStore> {
        let axes = self
            .axes
            .iter()
            .filter_map(|binding| {
                let [neutral, rel_min, rel_max, deadzone] = data.axis(binding.physical)?;
                Some(CalibrationAxis::from_excursions(
                    neutral,
                    rel_min,
                    rel_max,
                    deadzone,
                    binding.polarity,
                ))
            })
            .collect::<CalibrationResult<Vec<_>>>()?;
        Ok(CalibrationStore::from_device(axes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use padbridge_calibration::CalibrationSource;

    #[test]
    fn identify_by_name() {
        assert_eq!(DeviceFamily::identify("Joy-Con (L)"), Ok(DeviceFamily::JoyConLeft));
        assert_eq!(DeviceFamily::identify("Joy-Con (R)"), Ok(DeviceFamily::JoyConRight));
        assert_eq!(
            DeviceFamily::identify("Pro Controller"),
            Err(DeviceError::unsupported("Pro Controller"))
        );
    }

    #[test]
    fn builtin_tables_are_valid() -> Result<(), ProfileError> {
        for family in [DeviceFamily::JoyConLeft, DeviceFamily::JoyConRight] {
            let descriptor = family.descriptor()?;
            assert_eq!(descriptor.extended.width(), 24);
            assert_eq!(descriptor.compact.width(), 16);
            assert_eq!(descriptor.axes.len(), 2);
        }
        Ok(())
    }

    #[test]
    fn left_dpad_rotates_onto_face_buttons() -> Result<(), ProfileError> {
        let d = DeviceFamily::JoyConLeft.descriptor()?;
        assert_eq!(d.extended.map(1 << 1), GenericButton::FaceWest.mask());
        assert_eq!(d.compact.map(1 << 0), GenericButton::FaceSouth.mask());
        // SL and L share the left bumper
        assert_eq!(d.extended.map(1 << 5 | 1 << 6), GenericButton::LeftBumper.mask());
        Ok(())
    }

    #[test]
    fn right_hand_bits_ignored_on_left_joycon() -> Result<(), ProfileError> {
        let d = DeviceFamily::JoyConLeft.descriptor()?;
        assert_eq!(d.extended.map(0xFF_0000), 0);
        Ok(())
    }

    #[test]
    fn factory_calibration_carries_polarity() -> Result<(), Box<dyn std::error::Error>> {
        let d = DeviceFamily::JoyConLeft.descriptor()?;
        let store = d.factory_calibration()?;
        assert_eq!(store.source(), CalibrationSource::Factory);
        assert_eq!(store.axis(0).map(|a| a.polarity), Some(Polarity::Inverted));
        assert_eq!(store.axis(1).map(|a| a.polarity), Some(Polarity::Normal));
        assert_eq!(store.axis(1).map(|a| a.abs_max), Some(FACTORY_ABS_MAX));
        Ok(())
    }

    #[test]
    fn device_calibration_swaps_physical_axes() -> Result<(), Box<dyn std::error::Error>> {
        let d = DeviceFamily::JoyConLeft.descriptor()?;
        let data = CalibrationData {
            neutral: [0x7DC, 0x8B9, 0x800, 0x800],
            rel_min: [0x44F, 0x452, 0x500, 0x500],
            rel_max: [0x4B1, 0x442, 0x500, 0x500],
            deadzone: [0xBC; 4],
        };
        let store = d.calibration_from(&data)?;
        let lx = store.axis(0).ok_or("missing lx")?;
        let ly = store.axis(1).ok_or("missing ly")?;
        assert_eq!((lx.neutral, lx.abs_max), (0x8B9, 0x442));
        assert_eq!((ly.neutral, ly.abs_max), (0x7DC, 0x44F));
        Ok(())
    }
}
