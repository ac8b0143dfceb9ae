//! Top-level frame dispatch.
//!
//! # Subcommand reply (`0x21`) payload layout
//! | Offset | Size | Field       | Notes                                   |
//! |--------|------|-------------|-----------------------------------------|
//! | 0–11   |      | input state | same as the extended report, ignored    |
//! | 12     | u8   | ack         | bit 7 set when data follows             |
//! | 13     | u8   | subcommand  | echo of the request                     |
//! | 14–17  | u32  | address     | SPI reads only, LE                      |
//! | 18     | u8   | length      | SPI reads only                          |
//! | 19..   |      | data        | SPI reads only                          |

use crate::calibration::CalibrationFragment;
use crate::frame::RawFrame;
use crate::ids::{
    REPORT_ID_COMPACT, REPORT_ID_EXTENDED, REPORT_ID_SUBCMD_REPLY, SUBCMD_ACK_DATA,
    SUBCMD_SPI_READ,
};
use crate::input::{parse_compact, parse_extended, ParseError, WirelessInputState};

const REPLY_ACK: usize = 12;
const REPLY_SUBCMD: usize = 13;
const REPLY_MIN_LEN: usize = REPLY_SUBCMD + 1;
const SPI_HEADER_END: usize = 19;

/// What one frame turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedReport {
    /// A full input snapshot.
    Input(WirelessInputState),
    /// An SPI read reply at one of the stick calibration addresses.
    Calibration(CalibrationFragment),
    /// Any other subcommand reply. Carries nothing the pipeline uses.
    SubcommandReply { subcommand: u8 },
}

/// Decodes a frame by its report identifier.
pub fn decode(frame: RawFrame<'_>) -> Result<DecodedReport, ParseError> {
    match frame.report_id {
        REPORT_ID_EXTENDED => parse_extended(frame.payload).map(DecodedReport::Input),
        REPORT_ID_COMPACT => parse_compact(frame.payload).map(DecodedReport::Input),
        REPORT_ID_SUBCMD_REPLY => decode_reply(frame.payload),
        other => Err(ParseError::UnknownReport(other)),
    }
}

fn decode_reply(payload: &[u8]) -> Result<DecodedReport, ParseError> {
    let too_short = |need| ParseError::TooShort {
        report_id: REPORT_ID_SUBCMD_REPLY,
        got: payload.len(),
        need,
    };

    let Some(&[.., ack, subcommand]) = payload.first_chunk::<REPLY_MIN_LEN>() else {
        return Err(too_short(REPLY_MIN_LEN));
    };
    let other = DecodedReport::SubcommandReply { subcommand };
    if subcommand != SUBCMD_SPI_READ || ack & SUBCMD_ACK_DATA == 0 {
        return Ok(other);
    }

    let Some(&[.., a0, a1, a2, a3, len]) = payload.first_chunk::<SPI_HEADER_END>() else {
        return Err(too_short(SPI_HEADER_END));
    };
    let address = u32::from_le_bytes([a0, a1, a2, a3]);
    let rest = payload.get(SPI_HEADER_END..).unwrap_or_default();
    let data = rest.get(..usize::from(len)).unwrap_or(rest);

    Ok(CalibrationFragment::parse(address, data)?
        .map(DecodedReport::Calibration)
        .unwrap_or(other))
}
