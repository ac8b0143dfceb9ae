//! Wired console output encoding.
//!
//! The last pipeline stage: a [`MappedInputState`] goes in, the bytes the
//! console's controller port expects come out. Encoding first builds a
//! [`WiredOutputState`] (target button bits plus axes in target units) so the
//! result can be inspected, then packs it. [`WiredOutputState::from_bytes`]
//! unpacks a report again.

#![deny(static_mut_refs)]

pub mod gamecube;
pub mod scale;

use padbridge_input_maps::{AXIS_SLOT_COUNT, MappedInputState};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use scale::rescale;

/// Console a session encodes for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WiredTarget {
    #[default]
    #[serde(rename = "gamecube")]
    GameCube,
}

impl WiredTarget {
    pub fn name(self) -> &'static str {
        match self {
            WiredTarget::GameCube => "GameCube",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WiredError {
    #[error("{target} report needs {need} bytes, got {got}")]
    TooShort {
        target: &'static str,
        got: usize,
        need: usize,
    },
}

/// Target-specific controller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WiredOutputState {
    pub target: WiredTarget,
    /// Button bits in the target's report order.
    pub btns: u32,
    /// Generic slot order; sticks are signed around center, triggers unsigned.
    pub axes: [i32; AXIS_SLOT_COUNT],
}

impl WiredOutputState {
    pub fn from_mapped(mapped: &MappedInputState, target: WiredTarget) -> Self {
        match target {
            WiredTarget::GameCube => gamecube::from_mapped(mapped),
        }
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        match self.target {
            WiredTarget::GameCube => gamecube::pack(self).to_vec(),
        }
    }

    pub fn from_bytes(target: WiredTarget, bytes: &[u8]) -> Result<Self, WiredError> {
        match target {
            WiredTarget::GameCube => {
                let report = bytes
                    .first_chunk::<{ gamecube::REPORT_LEN }>()
                    .ok_or(WiredError::TooShort {
                        target: target.name(),
                        got: bytes.len(),
                        need: gamecube::REPORT_LEN,
                    })?;
                Ok(gamecube::unpack(report))
            }
        }
    }
}

/// Encodes a mapped snapshot for `target`.
pub fn encode(mapped: &MappedInputState, target: WiredTarget) -> Vec<u8> {
    WiredOutputState::from_mapped(mapped, target).to_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neutral_gamecube_report() {
        let bytes = encode(&MappedInputState::default(), WiredTarget::GameCube);
        assert_eq!(bytes, vec![0x00, 0x80, 0x80, 0x80, 0x80, 0x80, 0x00, 0x00]);
    }

    #[test]
    fn from_bytes_rejects_short_input() {
        assert_eq!(
            WiredOutputState::from_bytes(WiredTarget::GameCube, &[0x00, 0x80]),
            Err(WiredError::TooShort {
                target: "GameCube",
                got: 2,
                need: 8
            })
        );
    }

    #[test]
    fn target_serializes_snake_case() -> Result<(), serde_json::Error> {
        assert_eq!(serde_json::to_value(WiredTarget::GameCube)?, "gamecube");
        Ok(())
    }
}
