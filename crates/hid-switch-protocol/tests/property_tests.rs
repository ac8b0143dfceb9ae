//! Property-based tests for frame decoding.
//!
//! - Arbitrary frames never panic
//! - Packed 12-bit pairs round-trip across the full range
//! - Button fields survive parsing unchanged

use proptest::prelude::*;
use padbridge_hid_switch_protocol::{
    decode, pack_axis_pair, read_u24_reversed, unpack_axis_pair, write_u24_reversed,
    DecodedReport, RawFrame, REPORT_ID_COMPACT, REPORT_ID_EXTENDED, REPORT_ID_SUBCMD_REPLY,
};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn prop_decode_never_panics(
        report_id in prop_oneof![
            Just(REPORT_ID_EXTENDED),
            Just(REPORT_ID_COMPACT),
            Just(REPORT_ID_SUBCMD_REPLY),
            any::<u8>(),
        ],
        payload in proptest::collection::vec(any::<u8>(), 0..64),
    ) {
        let _decoded = decode(RawFrame::new(report_id, &payload));
    }

    #[test]
    fn prop_from_hid_data_never_panics(data in proptest::collection::vec(any::<u8>(), 0..64)) {
        if let Some(frame) = RawFrame::from_hid_data(&data) {
            prop_assert!(frame.payload.len() < data.len());
        }
    }

    #[test]
    fn prop_axis_pair_round_trip(first in 0u16..=0xFFF, second in 0u16..=0xFFF) {
        prop_assert_eq!(unpack_axis_pair(pack_axis_pair(first, second)), (first, second));
    }

    #[test]
    fn prop_u24_round_trip(value in 0u32..=0xFF_FFFF) {
        prop_assert_eq!(read_u24_reversed(write_u24_reversed(value)), value);
    }

    #[test]
    fn prop_extended_buttons_and_sticks(
        btns in 0u32..=0xFF_FFFF,
        lx in 0u16..=0xFFF,
        ly in 0u16..=0xFFF,
        tail in proptest::collection::vec(any::<u8>(), 0..37),
    ) {
        let mut payload = vec![0x00, 0x80];
        payload.extend_from_slice(&write_u24_reversed(btns));
        payload.extend_from_slice(&pack_axis_pair(lx, ly));
        payload.extend_from_slice(&pack_axis_pair(0x800, 0x800));
        payload.push(0);
        payload.extend_from_slice(&tail);

        let decoded = decode(RawFrame::new(REPORT_ID_EXTENDED, &payload));
        let Ok(DecodedReport::Input(state)) = decoded else {
            return Err(TestCaseError::fail(format!("unexpected {decoded:?}")));
        };
        prop_assert_eq!(state.btns, btns);
        prop_assert_eq!(state.axes, [i32::from(lx), i32::from(ly), 0x800, 0x800]);
    }

    #[test]
    fn prop_compact_hat_is_a_nibble(byte: u8, btns: u16) {
        let mut payload = btns.to_le_bytes().to_vec();
        payload.push(byte);
        payload.extend_from_slice(&[0x00, 0x80].repeat(4));

        let decoded = decode(RawFrame::new(REPORT_ID_COMPACT, &payload));
        let Ok(DecodedReport::Input(state)) = decoded else {
            return Err(TestCaseError::fail(format!("unexpected {decoded:?}")));
        };
        prop_assert_eq!(state.hat, Some(byte & 0x0F));
        prop_assert_eq!(state.btns, u32::from(btns));
    }
}
