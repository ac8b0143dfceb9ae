//! Packed multi-byte field helpers.
//!
//! Two 12-bit samples share three bytes. The bytes form a little-endian
//! 24-bit word; the first sample is its low 12 bits, the second its high 12.

/// Largest value a 12-bit sample can hold.
pub const AXIS_12BIT_MAX: u16 = 0x0FFF;

/// Extracts the two 12-bit samples of a packed pair.
///
/// ```
/// use padbridge_hid_switch_protocol::unpack_axis_pair;
///
/// // "000880" on the wire: both samples centered at 0x800
/// assert_eq!(unpack_axis_pair([0x00, 0x08, 0x80]), (0x800, 0x800));
/// ```
pub fn unpack_axis_pair(bytes: [u8; 3]) -> (u16, u16) {
    let word = u32::from(bytes[0]) | u32::from(bytes[1]) << 8 | u32::from(bytes[2]) << 16;
    ((word & 0xFFF) as u16, (word >> 12) as u16)
}

/// Inverse of [`unpack_axis_pair`]. Bits above 12 are discarded.
pub fn pack_axis_pair(first: u16, second: u16) -> [u8; 3] {
    let word = u32::from(first & AXIS_12BIT_MAX) | u32::from(second & AXIS_12BIT_MAX) << 12;
    let le = word.to_le_bytes();
    [le[0], le[1], le[2]]
}

/// Reads a 24-bit field whose first transmitted byte is the most significant.
pub fn read_u24_reversed(bytes: [u8; 3]) -> u32 {
    u32::from(bytes[0]) << 16 | u32::from(bytes[1]) << 8 | u32::from(bytes[2])
}

/// Inverse of [`read_u24_reversed`]. Bits above 24 are discarded.
pub fn write_u24_reversed(value: u32) -> [u8; 3] {
    [(value >> 16) as u8, (value >> 8) as u8, value as u8]
}
