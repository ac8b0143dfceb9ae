//! Remap profiles.
//!
//! A [`Profile`] is the on-disk form: a list of overrides on top of the
//! identity mapping. [`Profile::compile`] validates it once and produces a
//! [`CompiledProfile`], which is what [`apply_profile`] runs against every
//! report.
//!
//! ```json
//! {
//!   "name": "southpaw",
//!   "buttons": [{ "from": "face_south", "to": "face_east" }],
//!   "axes": [
//!     { "from": "lx", "to": "rx" },
//!     { "from": "rx", "to": "lx" }
//!   ],
//!   "hat": { "x": "lx", "y": "ly" }
//! }
//! ```

use padbridge_errors::ProfileError;
use serde::{Deserialize, Serialize};

use crate::generic::{
    AXIS_SLOT_COUNT, AxisSlot, GENERIC_BUTTON_COUNT, GenericButton, GenericInputState,
    MappedInputState,
};

/// On-disk remap profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Profile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default)]
    pub buttons: Vec<ButtonRemap>,

    #[serde(default)]
    pub axes: Vec<AxisRemap>,

    #[serde(default)]
    pub hat: HatTarget,
}

/// Sends generic button `from` to mapped button `to`, or nowhere when `to` is null.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ButtonRemap {
    pub from: GenericButton,
    pub to: Option<GenericButton>,
}

/// Sends generic axis `from` to mapped slot `to`, or nowhere when `to` is null.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AxisRemap {
    pub from: AxisSlot,
    pub to: Option<AxisSlot>,
    #[serde(default)]
    pub invert: bool,
}

/// Mapped slots a hat direction is written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HatTarget {
    pub x: AxisSlot,
    pub y: AxisSlot,
}

impl Default for HatTarget {
    fn default() -> Self {
        Self {
            x: AxisSlot::Lx,
            y: AxisSlot::Ly,
        }
    }
}

impl Profile {
    /// Parses a profile from JSON text. `source_name` only labels errors.
    pub fn from_json(text: &str, source_name: &str) -> Result<Self, ProfileError> {
        serde_json::from_str(text)
            .map_err(|e| ProfileError::invalid_format(source_name, e.to_string()))
    }

    pub fn to_json_pretty(&self) -> Result<String, ProfileError> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ProfileError::invalid_format(self.name.as_deref().unwrap_or("profile"), e.to_string())
        })
    }

    /// Validates the overrides and resolves them against the identity mapping.
    pub fn compile(&self) -> Result<CompiledProfile, ProfileError> {
        let mut compiled = CompiledProfile::default();

        let mut overridden = 0u32;
        for remap in &self.buttons {
            if overridden & remap.from.mask() != 0 {
                return Err(ProfileError::DuplicateButtonOverride(
                    remap.from.name().to_string(),
                ));
            }
            overridden |= remap.from.mask();
            if let Some(slot) = compiled.buttons.get_mut(usize::from(remap.from.bit())) {
                *slot = remap.to;
            }
        }

        let mut axis_overridden = 0u32;
        for remap in &self.axes {
            if axis_overridden & remap.from.mask() != 0 {
                return Err(ProfileError::AxisTargetConflict(
                    remap.from.name().to_string(),
                ));
            }
            axis_overridden |= remap.from.mask();
            if let Some(slot) = compiled.axes.get_mut(remap.from.index()) {
                *slot = remap.to.map(|to| (to, remap.invert));
            }
        }

        let mut targeted = 0u32;
        for (to, _) in compiled.axes.iter().flatten() {
            if targeted & to.mask() != 0 {
                return Err(ProfileError::AxisTargetConflict(to.name().to_string()));
            }
            targeted |= to.mask();
        }

        if self.hat.x == self.hat.y {
            return Err(ProfileError::HatTargetConflict(self.hat.x.name().to_string()));
        }
        compiled.hat = self.hat;

        Ok(compiled)
    }
}

/// A validated profile, resolved into lookup tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompiledProfile {
    buttons: [Option<GenericButton>; GENERIC_BUTTON_COUNT],
    axes: [Option<(AxisSlot, bool)>; AXIS_SLOT_COUNT],
    hat: HatTarget,
}

impl Default for CompiledProfile {
    /// Identity mapping, hat onto the left stick.
    fn default() -> Self {
        Self {
            buttons: GenericButton::ALL.map(Some),
            axes: AxisSlot::ALL.map(|slot| Some((slot, false))),
            hat: HatTarget::default(),
        }
    }
}

impl CompiledProfile {
    fn button_target(&self, button: GenericButton) -> Option<GenericButton> {
        self.buttons.get(usize::from(button.bit())).copied().flatten()
    }

    fn axis_target(&self, slot: AxisSlot) -> Option<(AxisSlot, bool)> {
        self.axes.get(slot.index()).copied().flatten()
    }
}

/// Remaps one generic snapshot.
///
/// When the snapshot carries a hat, the hat's axis pair replaces whatever
/// the remapped axes put in the hat target slots.
pub fn apply_profile(state: &GenericInputState, profile: &CompiledProfile) -> MappedInputState {
    let mut mapped = MappedInputState::default();

    for button in GenericButton::ALL {
        if !state.is_pressed(button) {
            continue;
        }
        if let Some(target) = profile.button_target(button) {
            mapped.btns |= target.mask();
        }
    }

    for slot in AxisSlot::ALL {
        if let Some((target, invert)) = profile.axis_target(slot) {
            let value = state.axis(slot);
            mapped.set_axis(target, if invert { -value } else { value });
        }
    }

    if let Some(hat) = state.hat {
        let (x, y) = hat.to_axes();
        mapped.set_axis(profile.hat.x, x);
        mapped.set_axis(profile.hat.y, y);
    }

    mapped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generic::Hat;

    #[test]
    fn default_profile_is_identity() -> Result<(), ProfileError> {
        let compiled = Profile::default().compile()?;
        assert_eq!(compiled, CompiledProfile::default());

        let state = GenericInputState {
            btns: GenericButton::FaceSouth.mask() | GenericButton::RightStick.mask(),
            axes: [-100, 50, 3, -4, 0, 100],
            hat: None,
        };
        let mapped = apply_profile(&state, &compiled);
        assert_eq!(mapped.btns, state.btns);
        assert_eq!(mapped.axes, state.axes);
        Ok(())
    }

    #[test]
    fn button_override_and_disable() -> Result<(), ProfileError> {
        let profile = Profile {
            buttons: vec![
                ButtonRemap {
                    from: GenericButton::FaceSouth,
                    to: Some(GenericButton::FaceEast),
                },
                ButtonRemap {
                    from: GenericButton::Capture,
                    to: None,
                },
            ],
            ..Profile::default()
        };
        let compiled = profile.compile()?;
        let state = GenericInputState {
            btns: GenericButton::FaceSouth.mask() | GenericButton::Capture.mask(),
            ..GenericInputState::default()
        };
        let mapped = apply_profile(&state, &compiled);
        assert_eq!(mapped.btns, GenericButton::FaceEast.mask());
        Ok(())
    }

    #[test]
    fn axis_swap_with_invert() -> Result<(), ProfileError> {
        let profile = Profile {
            axes: vec![
                AxisRemap {
                    from: AxisSlot::Lx,
                    to: Some(AxisSlot::Rx),
                    invert: true,
                },
                AxisRemap {
                    from: AxisSlot::Rx,
                    to: Some(AxisSlot::Lx),
                    invert: false,
                },
            ],
            ..Profile::default()
        };
        let compiled = profile.compile()?;
        let state = GenericInputState {
            axes: [40, 0, -7, 0, 0, 0],
            ..GenericInputState::default()
        };
        let mapped = apply_profile(&state, &compiled);
        assert_eq!(mapped.axis(AxisSlot::Lx), -7);
        assert_eq!(mapped.axis(AxisSlot::Rx), -40);
        Ok(())
    }

    #[test]
    fn hat_overrides_target_slots() -> Result<(), ProfileError> {
        let compiled = Profile::default().compile()?;
        let state = GenericInputState {
            axes: [12, 34, 56, 0, 0, 0],
            hat: Some(Hat::new(1)),
            ..GenericInputState::default()
        };
        let mapped = apply_profile(&state, &compiled);
        assert_eq!(mapped.axis(AxisSlot::Lx), 100);
        assert_eq!(mapped.axis(AxisSlot::Ly), 100);
        assert_eq!(mapped.axis(AxisSlot::Rx), 56);
        Ok(())
    }

    #[test]
    fn centered_hat_writes_zero() -> Result<(), ProfileError> {
        let compiled = Profile::default().compile()?;
        let state = GenericInputState {
            axes: [12, 34, 0, 0, 0, 0],
            hat: Some(Hat::CENTERED),
            ..GenericInputState::default()
        };
        let mapped = apply_profile(&state, &compiled);
        assert_eq!(&mapped.axes[..2], &[0, 0]);
        Ok(())
    }

    #[test]
    fn hat_onto_right_stick() -> Result<(), ProfileError> {
        let profile = Profile {
            hat: HatTarget {
                x: AxisSlot::Rx,
                y: AxisSlot::Ry,
            },
            ..Profile::default()
        };
        let compiled = profile.compile()?;
        let state = GenericInputState {
            hat: Some(Hat::new(6)),
            ..GenericInputState::default()
        };
        let mapped = apply_profile(&state, &compiled);
        assert_eq!(mapped.axis(AxisSlot::Rx), -100);
        assert_eq!(mapped.axis(AxisSlot::Ry), 0);
        assert_eq!(mapped.axis(AxisSlot::Lx), 0);
        Ok(())
    }

    #[test]
    fn duplicate_button_override_is_rejected() {
        let remap = ButtonRemap {
            from: GenericButton::Start,
            to: Some(GenericButton::Home),
        };
        let profile = Profile {
            buttons: vec![remap, remap],
            ..Profile::default()
        };
        assert_eq!(
            profile.compile(),
            Err(ProfileError::DuplicateButtonOverride("start".to_string()))
        );
    }

    #[test]
    fn two_sources_on_one_slot_is_rejected() {
        // lx → ly while identity ly → ly stays in place
        let profile = Profile {
            axes: vec![AxisRemap {
                from: AxisSlot::Lx,
                to: Some(AxisSlot::Ly),
                invert: false,
            }],
            ..Profile::default()
        };
        assert_eq!(
            profile.compile(),
            Err(ProfileError::AxisTargetConflict("ly".to_string()))
        );
    }

    #[test]
    fn hat_on_one_slot_is_rejected() {
        let profile = Profile {
            hat: HatTarget {
                x: AxisSlot::Lx,
                y: AxisSlot::Lx,
            },
            ..Profile::default()
        };
        assert!(matches!(
            profile.compile(),
            Err(ProfileError::HatTargetConflict(_))
        ));
    }

    #[test]
    fn json_round_trip_and_unknown_fields() -> Result<(), ProfileError> {
        let text = r#"{
            "name": "swap",
            "buttons": [{ "from": "face_south", "to": "face_east" }],
            "hat": { "x": "rx", "y": "ry" }
        }"#;
        let profile = Profile::from_json(text, "swap.json")?;
        assert_eq!(profile.name.as_deref(), Some("swap"));
        assert_eq!(profile.hat.x, AxisSlot::Rx);
        assert!(profile.axes.is_empty());

        let again = Profile::from_json(&profile.to_json_pretty()?, "again")?;
        assert_eq!(again, profile);

        let err = Profile::from_json(r#"{ "buttonz": [] }"#, "typo.json");
        assert!(matches!(err, Err(ProfileError::InvalidFormat { .. })));
        Ok(())
    }
}
