//! Native button bit → generic button tables.

use padbridge_errors::ProfileError;

use crate::generic::GenericButton;

const MAX_NATIVE_BITS: u8 = 32;

/// Static button table for one report layout of one device.
///
/// Several native bits may feed the same generic button; their states are
/// OR-ed. A native bit feeds at most one generic button, and bits without an
/// entry are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonLayout {
    name: String,
    width: u8,
    table: [Option<GenericButton>; MAX_NATIVE_BITS as usize],
}

impl ButtonLayout {
    /// Builds a layout for a `width`-bit button field.
    ///
    /// Fails when an entry lies outside the field or a native bit appears twice.
    pub fn new(
        name: impl Into<String>,
        width: u8,
        entries: &[(u8, GenericButton)],
    ) -> Result<Self, ProfileError> {
        let name = name.into();
        let width = width.min(MAX_NATIVE_BITS);
        let mut table = [None; MAX_NATIVE_BITS as usize];

        for &(bit, button) in entries {
            let slot = match table.get_mut(usize::from(bit)) {
                Some(slot) if bit < width => slot,
                _ => {
                    return Err(ProfileError::NativeBitOutOfRange {
                        layout: name,
                        bit,
                        width,
                    });
                }
            };
            if slot.is_some() {
                return Err(ProfileError::DuplicateNativeBit { layout: name, bit });
            }
            *slot = Some(button);
        }

        Ok(Self { name, width, table })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    /// Generic button fed by `bit`, if any.
    pub fn target(&self, bit: u8) -> Option<GenericButton> {
        self.table.get(usize::from(bit)).copied().flatten()
    }

    pub fn map(&self, raw: u32) -> u32 {
        let mut generic = 0;
        let mut remaining = raw;
        while remaining != 0 {
            let bit = remaining.trailing_zeros();
            remaining &= remaining - 1;
            if let Some(button) = self.table.get(bit as usize).copied().flatten() {
                generic |= button.mask();
            }
        }
        generic
    }
}

/// Maps a native button field through `layout`.
pub fn map_buttons(raw: u32, layout: &ButtonLayout) -> u32 {
    layout.map(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> Result<ButtonLayout, ProfileError> {
        ButtonLayout::new(
            "test",
            16,
            &[
                (0, GenericButton::FaceSouth),
                (3, GenericButton::LeftBumper),
                (4, GenericButton::LeftBumper),
                (15, GenericButton::Start),
            ],
        )
    }

    #[test]
    fn single_bits_map_to_their_target() -> Result<(), ProfileError> {
        let layout = layout()?;
        assert_eq!(map_buttons(1 << 0, &layout), GenericButton::FaceSouth.mask());
        assert_eq!(map_buttons(1 << 15, &layout), GenericButton::Start.mask());
        Ok(())
    }

    #[test]
    fn shared_target_is_or() -> Result<(), ProfileError> {
        let layout = layout()?;
        let bumper = GenericButton::LeftBumper.mask();
        assert_eq!(layout.map(1 << 3), bumper);
        assert_eq!(layout.map(1 << 4), bumper);
        assert_eq!(layout.map(1 << 3 | 1 << 4), bumper);
        Ok(())
    }

    #[test]
    fn unmapped_bits_are_dropped() -> Result<(), ProfileError> {
        let layout = layout()?;
        assert_eq!(layout.map(1 << 1 | 1 << 2 | 1 << 31), 0);
        assert_eq!(layout.target(1), None);
        Ok(())
    }

    #[test]
    fn bit_outside_field_is_rejected() {
        let err = ButtonLayout::new("compact", 16, &[(16, GenericButton::Home)]);
        assert_eq!(
            err,
            Err(ProfileError::NativeBitOutOfRange {
                layout: "compact".to_string(),
                bit: 16,
                width: 16
            })
        );
    }

    #[test]
    fn duplicate_native_bit_is_rejected() {
        let err = ButtonLayout::new(
            "extended",
            24,
            &[(2, GenericButton::Home), (2, GenericButton::Capture)],
        );
        assert!(matches!(
            err,
            Err(ProfileError::DuplicateNativeBit { bit: 2, .. })
        ));
    }
}
