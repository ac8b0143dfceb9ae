//! Report identifiers, subcommands, and SPI flash addresses.

/// Bluetooth HID transaction header for DATA/input frames.
pub const HID_DATA_INPUT: u8 = 0xA1;

/// Extended full-state input report.
pub const REPORT_ID_EXTENDED: u8 = 0x30;

/// Compact (simple HID) input report.
pub const REPORT_ID_COMPACT: u8 = 0x3F;

/// Subcommand reply report.
pub const REPORT_ID_SUBCMD_REPLY: u8 = 0x21;

/// Subcommand: SPI flash read.
pub const SUBCMD_SPI_READ: u8 = 0x10;

/// ACK byte bit set when a subcommand reply carries data.
pub const SUBCMD_ACK_DATA: u8 = 0x80;

/// Factory stick calibration, left 9 bytes then right 9 bytes.
pub const SPI_FACTORY_STICK_CAL: u32 = 0x603D;

/// Left stick device parameters (deadzone, range ratio).
pub const SPI_LEFT_STICK_PARAMS: u32 = 0x6086;

/// Right stick device parameters (deadzone, range ratio).
pub const SPI_RIGHT_STICK_PARAMS: u32 = 0x6098;

/// User stick calibration, `B2 A1` magic + 9 bytes per stick.
pub const SPI_USER_STICK_CAL: u32 = 0x8010;

/// Magic prefix marking a programmed user calibration block.
pub const USER_CAL_MAGIC: [u8; 2] = [0xB2, 0xA1];

/// Name a left Joy-Con reports during identification.
pub const JOYCON_LEFT_NAME: &str = "Joy-Con (L)";

/// Name a right Joy-Con reports during identification.
pub const JOYCON_RIGHT_NAME: &str = "Joy-Con (R)";

/// Index of a calibration fragment within a sequence, by SPI address.
pub fn fragment_index(address: u32) -> Option<u8> {
    match address {
        SPI_FACTORY_STICK_CAL => Some(0),
        SPI_LEFT_STICK_PARAMS => Some(1),
        SPI_RIGHT_STICK_PARAMS => Some(2),
        SPI_USER_STICK_CAL => Some(3),
        _ => None,
    }
}
