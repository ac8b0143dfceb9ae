//! Joy-Con input report parsing.
//!
//! # Extended report (`0x30`) payload layout
//! | Offset | Size | Field       | Encoding                                 |
//! |--------|------|-------------|------------------------------------------|
//! | 0      | u8   | timer       | wrapping counter                         |
//! | 1      | u8   | battery/con | high nibble battery, low nibble link     |
//! | 2–4    | u24  | buttons     | first byte most significant              |
//! | 5–7    | 2×12 | left stick  | packed pair, X then Y                    |
//! | 8–10   | 2×12 | right stick | packed pair, X then Y                    |
//! | 11     | u8   | vibrator    | rumble ack, ignored                      |
//!
//! # Compact report (`0x3F`) payload layout
//! | Offset | Size | Field   | Encoding                            |
//! |--------|------|---------|-------------------------------------|
//! | 0–1    | u16  | buttons | LE                                  |
//! | 2      | u4   | hat     | low nibble, 0 = up, clockwise, 8+ = centered |
//! | 3–10   | 4×u16| axes    | LE placeholders, `0x8000` at rest   |

use serde::{Deserialize, Serialize};

use crate::packed::{read_u24_reversed, unpack_axis_pair};

/// Number of physical stick axes (left X/Y, right X/Y).
pub const PHYSICAL_AXES: usize = 4;

/// Minimum extended payload length (through the vibrator byte).
pub const EXTENDED_MIN_LEN: usize = 12;

/// Minimum compact payload length.
pub const COMPACT_MIN_LEN: usize = 11;

/// Width of the extended button field in bits.
pub const EXTENDED_BUTTON_BITS: u8 = 24;

/// Width of the compact button field in bits.
pub const COMPACT_BUTTON_BITS: u8 = 16;

/// Which full-state layout a report used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportLayout {
    Extended,
    Compact,
}

impl ReportLayout {
    /// Width of this layout's button field in bits.
    pub fn button_bits(self) -> u8 {
        match self {
            ReportLayout::Extended => EXTENDED_BUTTON_BITS,
            ReportLayout::Compact => COMPACT_BUTTON_BITS,
        }
    }
}

/// Raw decoded snapshot of one input report.
///
/// Axes are in physical order (left X, left Y, right X, right Y) at the
/// device's native resolution; no orientation correction has happened yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WirelessInputState {
    pub layout: ReportLayout,
    /// Button field in device-native bit order.
    pub btns: u32,
    /// Discrete direction, compact reports only.
    pub hat: Option<u8>,
    pub axes: [i32; PHYSICAL_AXES],
}

/// Errors returned while decoding a frame.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The payload was too short to contain all required fields.
    #[error("report {report_id:#04x} too short: got {got} bytes, need {need}")]
    TooShort { report_id: u8, got: usize, need: usize },

    /// The report identifier is not one this decoder understands.
    #[error("unknown report id {0:#04x}")]
    UnknownReport(u8),

    /// An SPI read reply at a calibration address returned too little data.
    #[error("calibration fragment at {address:#06x} has {got} data bytes, need {need}")]
    ShortFragment { address: u32, got: usize, need: usize },
}

/// Parses an extended (`0x30`) payload.
pub fn parse_extended(payload: &[u8]) -> Result<WirelessInputState, ParseError> {
    let Some(&[_timer, _battery, b0, b1, b2, l0, l1, l2, r0, r1, r2, _vib]) =
        payload.first_chunk::<EXTENDED_MIN_LEN>()
    else {
        return Err(ParseError::TooShort {
            report_id: crate::ids::REPORT_ID_EXTENDED,
            got: payload.len(),
            need: EXTENDED_MIN_LEN,
        });
    };

    let (lx, ly) = unpack_axis_pair([l0, l1, l2]);
    let (rx, ry) = unpack_axis_pair([r0, r1, r2]);

    Ok(WirelessInputState {
        layout: ReportLayout::Extended,
        btns: read_u24_reversed([b0, b1, b2]),
        hat: None,
        axes: [lx.into(), ly.into(), rx.into(), ry.into()],
    })
}

/// Parses a compact (`0x3F`) payload.
pub fn parse_compact(payload: &[u8]) -> Result<WirelessInputState, ParseError> {
    let Some(&[b0, b1, hat, a0, a1, a2, a3, a4, a5, a6, a7]) =
        payload.first_chunk::<COMPACT_MIN_LEN>()
    else {
        return Err(ParseError::TooShort {
            report_id: crate::ids::REPORT_ID_COMPACT,
            got: payload.len(),
            need: COMPACT_MIN_LEN,
        });
    };

    Ok(WirelessInputState {
        layout: ReportLayout::Compact,
        btns: u16::from_le_bytes([b0, b1]).into(),
        hat: Some(hat & 0x0F),
        axes: [
            u16::from_le_bytes([a0, a1]).into(),
            u16::from_le_bytes([a2, a3]).into(),
            u16::from_le_bytes([a4, a5]).into(),
            u16::from_le_bytes([a6, a7]).into(),
        ],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extended(buttons: [u8; 3], left: [u8; 3]) -> Vec<u8> {
        let mut data = vec![0x01, 0x80];
        data.extend_from_slice(&buttons);
        data.extend_from_slice(&left);
        data.extend_from_slice(&[0u8; 3]);
        data.extend_from_slice(&[0u8; 37]);
        data
    }

    #[test]
    fn parse_extended_too_short() {
        assert_eq!(
            parse_extended(&[0u8; 11]),
            Err(ParseError::TooShort {
                report_id: 0x30,
                got: 11,
                need: 12
            })
        );
    }

    #[test]
    fn parse_extended_minimum_length() -> Result<(), ParseError> {
        parse_extended(&[0u8; 12])?;
        parse_extended(&[0u8; 48])?;
        Ok(())
    }

    #[test]
    fn parse_extended_neutral() -> Result<(), ParseError> {
        let state = parse_extended(&extended([0, 0, 0], [0x00, 0x08, 0x80]))?;
        assert_eq!(state.layout, ReportLayout::Extended);
        assert_eq!(state.btns, 0);
        assert_eq!(state.hat, None);
        assert_eq!(&state.axes[..2], &[0x800, 0x800]);
        Ok(())
    }

    #[test]
    fn parse_extended_button_byte_order() -> Result<(), ParseError> {
        // Right byte first, shared middle, left byte last.
        let state = parse_extended(&extended([0x01, 0x02, 0x04], [0; 3]))?;
        assert_eq!(state.btns, 0x01_02_04);
        Ok(())
    }

    #[test]
    fn parse_extended_sticks() -> Result<(), ParseError> {
        let mut data = extended([0; 3], [0xFD, 0xF7, 0x8E]);
        data[8..11].copy_from_slice(&crate::pack_axis_pair(0x123, 0xABC));
        let state = parse_extended(&data)?;
        assert_eq!(state.axes, [0x7FD, 0x8EF, 0x123, 0xABC]);
        Ok(())
    }

    #[test]
    fn parse_compact_fields() -> Result<(), ParseError> {
        let data = [0x04, 0x80, 0x0F, 0x00, 0x80, 0x00, 0x80, 0x00, 0x80, 0x00, 0x80];
        let state = parse_compact(&data)?;
        assert_eq!(state.layout, ReportLayout::Compact);
        assert_eq!(state.btns, 0x8004);
        assert_eq!(state.hat, Some(0x0F));
        assert_eq!(state.axes, [0x8000; 4]);
        Ok(())
    }

    #[test]
    fn parse_compact_hat_uses_low_nibble() -> Result<(), ParseError> {
        let mut data = [0u8; 11];
        data[2] = 0xF3;
        assert_eq!(parse_compact(&data)?.hat, Some(3));
        Ok(())
    }

    #[test]
    fn parse_compact_too_short() {
        assert!(matches!(
            parse_compact(&[0u8; 10]),
            Err(ParseError::TooShort { need: 11, .. })
        ));
    }

    #[test]
    fn layout_properties() {
        assert_eq!(ReportLayout::Extended.button_bits(), 24);
        assert_eq!(ReportLayout::Compact.button_bits(), 16);
    }
}
