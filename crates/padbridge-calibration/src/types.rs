//! Calibration type definitions

use serde::{Deserialize, Serialize};

use crate::{CalibrationError, CalibrationResult};

/// Direction of a physical axis relative to its logical slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    #[default]
    Normal,
    Inverted,
}

impl Polarity {
    /// `1` for [`Polarity::Normal`], `-1` for [`Polarity::Inverted`].
    pub fn sign(self) -> i32 {
        match self {
            Polarity::Normal => 1,
            Polarity::Inverted => -1,
        }
    }
}

/// Calibration of one logical axis slot.
///
/// `abs_max` is the usable excursion from `neutral` in raw device units and is
/// the same in both directions, so normalized output is symmetric. Within
/// `deadzone` of neutral the axis reads as centered.
///
/// # Examples
///
/// ```
/// use padbridge_calibration::{CalibrationAxis, Polarity};
///
/// let axis = CalibrationAxis::new(0x800, 0x578, 0xAE, Polarity::Normal)?;
/// assert_eq!(axis.neutral, 0x800);
///
/// // abs_max is the smaller of the two measured excursions
/// let axis = CalibrationAxis::from_excursions(0x7DC, 0x44F, 0x4B1, 0xBC, Polarity::Normal)?;
/// assert_eq!(axis.abs_max, 0x44F);
/// # Ok::<(), padbridge_calibration::CalibrationError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalibrationAxis {
    /// Raw value reported at rest.
    pub neutral: i32,
    /// Usable excursion from neutral, in raw units.
    pub abs_max: i32,
    /// Radius around neutral forced to zero, in raw units.
    pub deadzone: i32,
    /// Direction correction applied before scaling.
    pub polarity: Polarity,
}

impl CalibrationAxis {
    /// Creates a calibration axis, rejecting ranges that cannot normalize.
    pub fn new(
        neutral: i32,
        abs_max: i32,
        deadzone: i32,
        polarity: Polarity,
    ) -> CalibrationResult<Self> {
        if abs_max <= 0 {
            return Err(CalibrationError::NonPositiveRange(abs_max));
        }
        if deadzone < 0 {
            return Err(CalibrationError::NegativeDeadzone(deadzone));
        }
        if deadzone >= abs_max {
            return Err(CalibrationError::DeadzoneTooLarge { deadzone, abs_max });
        }
        Ok(Self {
            neutral,
            abs_max,
            deadzone,
            polarity,
        })
    }

    /// Builds an axis from measured excursions below (`rel_min`) and above
    /// (`rel_max`) neutral, keeping the smaller one.
    pub fn from_excursions(
        neutral: i32,
        rel_min: i32,
        rel_max: i32,
        deadzone: i32,
        polarity: Polarity,
    ) -> CalibrationResult<Self> {
        Self::new(neutral, rel_min.min(rel_max), deadzone, polarity)
    }

    /// Same calibration with a different polarity.
    pub fn with_polarity(mut self, polarity: Polarity) -> Self {
        self.polarity = polarity;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_deadzone_at_abs_max() {
        let err = CalibrationAxis::new(0x800, 100, 100, Polarity::Normal);
        assert_eq!(
            err,
            Err(CalibrationError::DeadzoneTooLarge {
                deadzone: 100,
                abs_max: 100
            })
        );
    }

    #[test]
    fn test_rejects_non_positive_range() {
        for abs_max in [0, -5] {
            assert!(matches!(
                CalibrationAxis::new(0x800, abs_max, 0, Polarity::Normal),
                Err(CalibrationError::NonPositiveRange(_))
            ));
        }
    }

    #[test]
    fn test_rejects_negative_deadzone() {
        assert_eq!(
            CalibrationAxis::new(0x800, 100, -1, Polarity::Normal),
            Err(CalibrationError::NegativeDeadzone(-1))
        );
    }

    #[test]
    fn test_from_excursions_picks_smaller_side() -> CalibrationResult<()> {
        let axis = CalibrationAxis::from_excursions(0x8B9, 0x452, 0x442, 0xBC, Polarity::Inverted)?;
        assert_eq!(axis.abs_max, 0x442);
        assert_eq!(axis.polarity, Polarity::Inverted);
        Ok(())
    }

    #[test]
    fn test_polarity_sign() {
        assert_eq!(Polarity::Normal.sign(), 1);
        assert_eq!(Polarity::Inverted.sign(), -1);
        assert_eq!(Polarity::default(), Polarity::Normal);
    }

    #[test]
    fn test_serde_field_names() -> Result<(), Box<dyn std::error::Error>> {
        let axis = CalibrationAxis::new(2048, 1400, 174, Polarity::Inverted)?;
        let json = serde_json::to_value(axis)?;
        assert_eq!(json["neutral"], 2048);
        assert_eq!(json["abs_max"], 1400);
        assert_eq!(json["deadzone"], 174);
        assert_eq!(json["polarity"], "inverted");
        Ok(())
    }
}
