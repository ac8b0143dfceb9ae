//! Raw frames as delivered by the Bluetooth transport.

use crate::ids::HID_DATA_INPUT;

/// A report frame tagged by its report identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawFrame<'a> {
    pub report_id: u8,
    /// Report bytes following the identifier.
    pub payload: &'a [u8],
}

impl<'a> RawFrame<'a> {
    pub fn new(report_id: u8, payload: &'a [u8]) -> Self {
        Self { report_id, payload }
    }

    /// Splits a HID DATA transaction (`A1 <id> <payload>`) into a frame.
    ///
    /// The `0xA1` header is optional. Returns `None` for an empty slice or a
    /// lone header byte.
    pub fn from_hid_data(data: &'a [u8]) -> Option<Self> {
        let body = match data {
            [HID_DATA_INPUT, rest @ ..] => rest,
            _ => data,
        };
        let (&report_id, payload) = body.split_first()?;
        Some(Self { report_id, payload })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_transaction_header() {
        let frame = RawFrame::from_hid_data(&[0xA1, 0x3F, 0x01, 0x02]);
        assert_eq!(frame, Some(RawFrame::new(0x3F, &[0x01, 0x02])));
    }

    #[test]
    fn header_is_optional() {
        let frame = RawFrame::from_hid_data(&[0x30, 0x01]);
        assert_eq!(frame, Some(RawFrame::new(0x30, &[0x01])));
    }

    #[test]
    fn empty_input_has_no_frame() {
        assert_eq!(RawFrame::from_hid_data(&[]), None);
        assert_eq!(RawFrame::from_hid_data(&[0xA1]), None);
    }
}
