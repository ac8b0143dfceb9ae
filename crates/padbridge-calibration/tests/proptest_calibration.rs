//! Property-based tests for normalization: deadzone symmetry, range, and monotonicity.

#[cfg(test)]
mod proptest_calibration {
    use padbridge_calibration::{CalibrationAxis, OUTPUT_SCALE, Polarity, normalize};
    use proptest::prelude::*;

    fn calib_strategy() -> impl Strategy<Value = CalibrationAxis> {
        (0i32..4096, 1i32..2048, any::<bool>()).prop_flat_map(|(neutral, abs_max, inverted)| {
            (0..abs_max).prop_map(move |deadzone| {
                let polarity = if inverted {
                    Polarity::Inverted
                } else {
                    Polarity::Normal
                };
                CalibrationAxis {
                    neutral,
                    abs_max,
                    deadzone,
                    polarity,
                }
            })
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        // --- Deadzone symmetry ---

        #[test]
        fn inside_deadzone_is_zero(axis in calib_strategy(), t in -1.0f64..=1.0) {
            let offset = (t * f64::from(axis.deadzone)).round() as i32;
            prop_assert_eq!(normalize(axis.neutral + offset, &axis), 0);
        }

        #[test]
        fn full_excursion_reaches_scale(axis in calib_strategy()) {
            let sign = axis.polarity.sign();
            prop_assert_eq!(normalize(axis.neutral + axis.abs_max, &axis), OUTPUT_SCALE * sign);
            prop_assert_eq!(normalize(axis.neutral - axis.abs_max, &axis), -OUTPUT_SCALE * sign);
        }

        // --- Output always within canonical range ---

        #[test]
        fn output_is_bounded(axis in calib_strategy(), raw in any::<i32>()) {
            let out = normalize(raw, &axis);
            prop_assert!((-OUTPUT_SCALE..=OUTPUT_SCALE).contains(&out), "output {} out of range", out);
        }

        // --- Monotonic outside the deadzone ---

        #[test]
        fn monotonic_in_raw(axis in calib_strategy(), a in 0i32..4096, b in 0i32..4096) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let (out_lo, out_hi) = (normalize(lo, &axis), normalize(hi, &axis));
            match axis.polarity {
                Polarity::Normal => prop_assert!(out_lo <= out_hi),
                Polarity::Inverted => prop_assert!(out_lo >= out_hi),
            }
        }

        // --- Odd symmetry around neutral ---

        #[test]
        fn symmetric_around_neutral(axis in calib_strategy(), offset in 0i32..4096) {
            let up = normalize(axis.neutral + offset, &axis);
            let down = normalize(axis.neutral - offset, &axis);
            prop_assert_eq!(up, -down);
        }

        // --- Calibration override changes output consistently with the formula ---

        #[test]
        fn tuned_calibration_differs_from_factory(offset in 0x100i32..0x400) {
            let factory = CalibrationAxis { neutral: 0x800, abs_max: 0x578, deadzone: 0xAE, polarity: Polarity::Normal };
            let tuned = CalibrationAxis { neutral: 0x7DC, abs_max: 0x44F, deadzone: 0xBC, polarity: Polarity::Normal };
            let raw = 0x800 + offset;

            let expected = {
                let off = i64::from(raw - tuned.neutral).min(i64::from(tuned.abs_max));
                let span = i64::from(tuned.abs_max - tuned.deadzone);
                ((off - i64::from(tuned.deadzone)) * 200 + span) / (span * 2)
            };
            prop_assert_eq!(i64::from(normalize(raw, &tuned)), expected);
            prop_assert!(normalize(raw, &tuned) > normalize(raw, &factory));
        }
    }
}
