//! Generic controller model and the mapping tables around it.
//!
//! Three tables live here:
//! - [`ButtonLayout`]: static per report layout, native bit → generic button
//! - [`Profile`]: user-facing remap, stored as JSON and compiled once into a
//!   [`CompiledProfile`] before reports flow
//! - the fixed hat tables on [`Hat`]
//!
//! Nothing in this crate holds per-session state. [`GenericInputState::merge`]
//! and [`apply_profile`] are pure functions of their inputs.

#![deny(static_mut_refs)]

pub mod generic;
pub mod layout;
pub mod profile;

pub use generic::{
    AxisSlot, GenericButton, GenericInputState, GenericUpdate, Hat, HatUpdate, MappedInputState,
    AXIS_SLOT_COUNT, GENERIC_BUTTON_COUNT,
};
pub use layout::{map_buttons, ButtonLayout};
pub use profile::{apply_profile, AxisRemap, ButtonRemap, CompiledProfile, HatTarget, Profile};
