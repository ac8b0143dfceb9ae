//! Stick calibration fragments and their assembly.
//!
//! A complete calibration set takes four SPI flash reads, answered in
//! address order. [`CalibrationAssembler`] collects them with a bitmask of
//! received fragments: a set commits only once every bit is present, and a
//! fragment that does not extend the current prefix throws the partial set
//! away.

use serde::{Deserialize, Serialize};

use crate::ids::{
    SPI_FACTORY_STICK_CAL, SPI_LEFT_STICK_PARAMS, SPI_RIGHT_STICK_PARAMS, SPI_USER_STICK_CAL,
    USER_CAL_MAGIC, fragment_index,
};
use crate::input::{PHYSICAL_AXES, ParseError};
use crate::packed::unpack_axis_pair;

/// Number of fragments in a calibration sequence.
pub const FRAGMENT_COUNT: u8 = 4;

const ALL_FRAGMENTS: u8 = (1 << FRAGMENT_COUNT) - 1;
const STICK_CAL_LEN: usize = 9;
const STICK_PARAMS_LEN: usize = 6;
const USER_CAL_LEN: usize = 2 * (USER_CAL_MAGIC.len() + STICK_CAL_LEN);

/// One stick's calibration, each field as (X, Y) in raw 12-bit units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StickCalibration {
    pub center: [u16; 2],
    /// Excursion above center.
    pub max_above: [u16; 2],
    /// Excursion below center.
    pub min_below: [u16; 2],
}

impl StickCalibration {
    /// Left stick block order: max above, center, min below.
    pub fn from_left_bytes(bytes: &[u8; STICK_CAL_LEN]) -> Self {
        let [max_above, center, min_below] = triples(bytes);
        Self {
            center,
            max_above,
            min_below,
        }
    }

    /// Right stick block order: center, min below, max above.
    pub fn from_right_bytes(bytes: &[u8; STICK_CAL_LEN]) -> Self {
        let [center, min_below, max_above] = triples(bytes);
        Self {
            center,
            max_above,
            min_below,
        }
    }
}

fn triples(bytes: &[u8; STICK_CAL_LEN]) -> [[u16; 2]; 3] {
    let [a0, a1, a2, b0, b1, b2, c0, c1, c2] = *bytes;
    let pair = |packed| {
        let (x, y) = unpack_axis_pair(packed);
        [x, y]
    };
    [pair([a0, a1, a2]), pair([b0, b1, b2]), pair([c0, c1, c2])]
}

/// One decoded calibration reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalibrationFragment {
    FactorySticks {
        left: StickCalibration,
        right: StickCalibration,
    },
    LeftStickParams {
        deadzone: u16,
    },
    RightStickParams {
        deadzone: u16,
    },
    /// `None` for a stick whose user block is not programmed.
    UserSticks {
        left: Option<StickCalibration>,
        right: Option<StickCalibration>,
    },
}

impl CalibrationFragment {
    /// Position of this fragment in the sequence.
    pub fn index(&self) -> u8 {
        match self {
            CalibrationFragment::FactorySticks { .. } => 0,
            CalibrationFragment::LeftStickParams { .. } => 1,
            CalibrationFragment::RightStickParams { .. } => 2,
            CalibrationFragment::UserSticks { .. } => 3,
        }
    }

    /// Parses the data of an SPI read at `address`.
    ///
    /// Returns `Ok(None)` for addresses that are not part of the calibration
    /// sequence.
    pub fn parse(address: u32, data: &[u8]) -> Result<Option<Self>, ParseError> {
        if fragment_index(address).is_none() {
            return Ok(None);
        }

        let fragment = match address {
            SPI_FACTORY_STICK_CAL => {
                let bytes: &[u8; 2 * STICK_CAL_LEN] = fixed(address, data)?;
                let (left, right) = bytes.split_at(STICK_CAL_LEN);
                CalibrationFragment::FactorySticks {
                    left: StickCalibration::from_left_bytes(block(left)?),
                    right: StickCalibration::from_right_bytes(block(right)?),
                }
            }
            SPI_LEFT_STICK_PARAMS => CalibrationFragment::LeftStickParams {
                deadzone: deadzone(fixed(address, data)?),
            },
            SPI_RIGHT_STICK_PARAMS => CalibrationFragment::RightStickParams {
                deadzone: deadzone(fixed(address, data)?),
            },
            SPI_USER_STICK_CAL => {
                let bytes: &[u8; USER_CAL_LEN] = fixed(address, data)?;
                let (left, right) = bytes.split_at(USER_CAL_LEN / 2);
                CalibrationFragment::UserSticks {
                    left: user_block(left).map(StickCalibration::from_left_bytes),
                    right: user_block(right).map(StickCalibration::from_right_bytes),
                }
            }
            _ => return Ok(None),
        };
        Ok(Some(fragment))
    }
}

fn fixed<'a, const N: usize>(address: u32, data: &'a [u8]) -> Result<&'a [u8; N], ParseError> {
    data.first_chunk::<N>().ok_or(ParseError::ShortFragment {
        address,
        got: data.len(),
        need: N,
    })
}

fn block(bytes: &[u8]) -> Result<&[u8; STICK_CAL_LEN], ParseError> {
    fixed(SPI_FACTORY_STICK_CAL, bytes)
}

fn user_block(bytes: &[u8]) -> Option<&[u8; STICK_CAL_LEN]> {
    let rest = bytes.strip_prefix(&USER_CAL_MAGIC[..])?;
    rest.first_chunk::<STICK_CAL_LEN>()
}

fn deadzone(params: &[u8; STICK_PARAMS_LEN]) -> u16 {
    u16::from(params[4] & 0x0F) << 8 | u16::from(params[3])
}

/// A committed calibration set, per physical axis (left X, left Y, right X, right Y).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalibrationData {
    pub neutral: [i32; PHYSICAL_AXES],
    /// Usable excursion below neutral.
    pub rel_min: [i32; PHYSICAL_AXES],
    /// Usable excursion above neutral.
    pub rel_max: [i32; PHYSICAL_AXES],
    pub deadzone: [i32; PHYSICAL_AXES],
}

impl CalibrationData {
    /// `[neutral, rel_min, rel_max, deadzone]` of one physical axis.
    pub fn axis(&self, physical: usize) -> Option<[i32; 4]> {
        Some([
            *self.neutral.get(physical)?,
            *self.rel_min.get(physical)?,
            *self.rel_max.get(physical)?,
            *self.deadzone.get(physical)?,
        ])
    }
}

/// Result of feeding one fragment to the assembler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssemblyStatus {
    /// Fragment accepted, more to come.
    Pending { received: u8 },
    /// Fragment arrived out of sequence; all buffered fragments were dropped.
    Discarded { received: u8, got: u8 },
    /// Every fragment arrived; the assembler is empty again.
    Complete(CalibrationData),
}

/// Accumulates calibration fragments until a set is complete.
#[derive(Debug, Clone, Default)]
pub struct CalibrationAssembler {
    received: u8,
    factory: Option<(StickCalibration, StickCalibration)>,
    deadzones: [Option<u16>; 2],
    user: Option<(Option<StickCalibration>, Option<StickCalibration>)>,
}

impl CalibrationAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bitmask of fragments received so far.
    pub fn received(&self) -> u8 {
        self.received
    }

    pub fn is_empty(&self) -> bool {
        self.received == 0
    }

    /// Drops every buffered fragment.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn push(&mut self, fragment: CalibrationFragment) -> AssemblyStatus {
        let index = fragment.index();
        if index == 0 {
            self.reset();
        } else if self.received != (1 << index) - 1 {
            let received = self.received;
            self.reset();
            return AssemblyStatus::Discarded {
                received,
                got: index,
            };
        }

        match fragment {
            CalibrationFragment::FactorySticks { left, right } => self.factory = Some((left, right)),
            CalibrationFragment::LeftStickParams { deadzone } => self.deadzones[0] = Some(deadzone),
            CalibrationFragment::RightStickParams { deadzone } => self.deadzones[1] = Some(deadzone),
            CalibrationFragment::UserSticks { left, right } => self.user = Some((left, right)),
        }
        self.received |= 1 << index;

        if self.received != ALL_FRAGMENTS {
            return AssemblyStatus::Pending {
                received: self.received,
            };
        }

        let status = match self.build() {
            Some(data) => AssemblyStatus::Complete(data),
            None => AssemblyStatus::Discarded {
                received: self.received,
                got: index,
            },
        };
        self.reset();
        status
    }

    fn build(&self) -> Option<CalibrationData> {
        let (factory_left, factory_right) = self.factory?;
        let (user_left, user_right) = self.user?;
        let [left_dz, right_dz] = self.deadzones;
        let (left_dz, right_dz) = (left_dz?, right_dz?);
        let left = user_left.unwrap_or(factory_left);
        let right = user_right.unwrap_or(factory_right);

        // Physical order: left X, left Y, right X, right Y.
        let per_axis = |field: fn(&StickCalibration) -> [u16; 2]| {
            let ([lx, ly], [rx, ry]) = (field(&left), field(&right));
            [lx, ly, rx, ry].map(i32::from)
        };
        Some(CalibrationData {
            neutral: per_axis(|cal| cal.center),
            rel_min: per_axis(|cal| cal.min_below),
            rel_max: per_axis(|cal| cal.max_above),
            deadzone: [left_dz, left_dz, right_dz, right_dz].map(i32::from),
        })
    }
}
