//! Per-session calibration store

use serde::{Deserialize, Serialize};

use crate::{CalibrationAxis, CalibrationError, CalibrationResult};

/// Where the calibration currently in use came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalibrationSource {
    /// Built-in defaults installed at attach.
    Factory,
    /// A complete calibration report set received from the device.
    Device,
}

/// Calibration for every logical axis slot of a device session.
///
/// A store is never edited in place. A new calibration set builds a new
/// store which then replaces the old one wholesale via [`CalibrationStore::replace`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalibrationStore {
    axes: Vec<CalibrationAxis>,
    source: CalibrationSource,
}

impl CalibrationStore {
    /// Factory calibration with a distinct axis per slot.
    pub fn factory_axes(axes: Vec<CalibrationAxis>) -> Self {
        Self {
            axes,
            source: CalibrationSource::Factory,
        }
    }

    /// Store built from a device calibration set.
    pub fn from_device(axes: Vec<CalibrationAxis>) -> Self {
        Self {
            axes,
            source: CalibrationSource::Device,
        }
    }

    /// Replaces this store with `next`, which must cover the same slots.
    ///
    /// On error `self` is left untouched.
    pub fn replace(&mut self, next: CalibrationStore) -> CalibrationResult<()> {
        if next.axes.len() != self.axes.len() {
            return Err(CalibrationError::AxisCountMismatch {
                got: next.axes.len(),
                expected: self.axes.len(),
            });
        }
        *self = next;
        Ok(())
    }

    pub fn axis(&self, slot: usize) -> Option<&CalibrationAxis> {
        self.axes.get(slot)
    }

    pub fn axes(&self) -> &[CalibrationAxis] {
        &self.axes
    }

    pub fn source(&self) -> CalibrationSource {
        self.source
    }

    pub fn len(&self) -> usize {
        self.axes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.axes.is_empty()
    }
}
