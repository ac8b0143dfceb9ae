//! Raw sample → canonical axis value

use crate::CalibrationAxis;

/// Magnitude of the canonical axis range, `[-OUTPUT_SCALE, OUTPUT_SCALE]`.
pub const OUTPUT_SCALE: i32 = 100;

/// Normalizes a raw sample into `[-OUTPUT_SCALE, OUTPUT_SCALE]`.
///
/// The offset from neutral is polarity-corrected and clamped to `abs_max`
/// before scaling; the scaled magnitude is rounded half away from zero.
///
/// # Examples
///
/// ```
/// use padbridge_calibration::{normalize, CalibrationAxis, Polarity, OUTPUT_SCALE};
///
/// let axis = CalibrationAxis::new(0x800, 0x578, 0xAE, Polarity::Normal)?;
/// assert_eq!(normalize(0x800 + 0x50, &axis), 0);
/// assert_eq!(normalize(0x800 + 0x578, &axis), OUTPUT_SCALE);
/// assert_eq!(normalize(0x800 - 0x578, &axis), -OUTPUT_SCALE);
/// # Ok::<(), padbridge_calibration::CalibrationError>(())
/// ```
pub fn normalize(raw: i32, axis: &CalibrationAxis) -> i32 {
    let offset = (i64::from(raw) - i64::from(axis.neutral)) * i64::from(axis.polarity.sign());
    let abs_max = i64::from(axis.abs_max);
    let deadzone = i64::from(axis.deadzone);
    let magnitude = offset.abs().min(abs_max);

    if magnitude <= deadzone {
        return 0;
    }

    let span = abs_max - deadzone;
    if span <= 0 {
        return 0;
    }

    let scaled = ((magnitude - deadzone) * i64::from(OUTPUT_SCALE) * 2 + span) / (span * 2);
    let value = i32::try_from(scaled).unwrap_or(OUTPUT_SCALE).min(OUTPUT_SCALE);
    if offset < 0 { -value } else { value }
}
