//! Range conversion between the canonical scale and target units.

/// Maps `value` from `±from` to `±to`, rounding half away from zero.
///
/// `value` is clamped to `±from` first. Equal scales are an identity.
///
/// ```
/// use padbridge_wired::rescale;
///
/// assert_eq!(rescale(-37, 100, 100), -37);
/// assert_eq!(rescale(50, 100, 255), 128);
/// assert_eq!(rescale(250, 100, 255), 255);
/// ```
pub fn rescale(value: i32, from: i32, to: i32) -> i32 {
    if from <= 0 {
        return 0;
    }
    let from = i64::from(from);
    let clamped = i64::from(value).clamp(-from, from);
    let scaled = (clamped.abs() * i64::from(to) * 2 + from) / (from * 2);
    let scaled = i32::try_from(scaled).unwrap_or(i32::MAX);
    if clamped < 0 { -scaled } else { scaled }
}
