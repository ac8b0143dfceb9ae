//! Remap profile and layout table error types.
//!
//! These are raised once, when a profile or a button layout is compiled at
//! session setup, never while reports are flowing.

/// Profile and layout table errors.
///
/// # Examples
///
/// ```
/// use padbridge_errors::ProfileError;
///
/// let err = ProfileError::DuplicateButtonOverride("face_south".to_string());
/// assert_eq!(err.to_string(), "Button 'face_south' is remapped more than once");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileError {
    /// The same generic button is overridden twice
    #[error("Button '{0}' is remapped more than once")]
    DuplicateButtonOverride(String),

    /// Two sources target the same mapped axis slot
    #[error("Axis slot '{0}' has more than one source")]
    AxisTargetConflict(String),

    /// Hat conversion targets the same slot for both axes
    #[error("Hat target must use two distinct axis slots, got '{0}' twice")]
    HatTargetConflict(String),

    /// Profile text could not be parsed
    #[error("Invalid profile format in {source_name}: {reason}")]
    InvalidFormat {
        /// File path or profile source
        source_name: String,
        /// Parser message
        reason: String,
    },

    /// A layout table names a native bit outside its report field
    #[error("Layout '{layout}': native bit {bit} exceeds the {width}-bit button field")]
    NativeBitOutOfRange {
        /// Layout name
        layout: String,
        /// Offending bit
        bit: u8,
        /// Width of the report's button field
        width: u8,
    },

    /// A layout table maps one native bit twice
    #[error("Layout '{layout}': native bit {bit} is mapped more than once")]
    DuplicateNativeBit {
        /// Layout name
        layout: String,
        /// Offending bit
        bit: u8,
    },
}

impl ProfileError {
    /// Create an invalid format error.
    pub fn invalid_format(source_name: impl Into<String>, reason: impl Into<String>) -> Self {
        ProfileError::InvalidFormat {
            source_name: source_name.into(),
            reason: reason.into(),
        }
    }
}
