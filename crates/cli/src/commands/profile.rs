//! Profile commands

use std::path::Path;

use anyhow::Result;
use padbridge_errors::PadbridgeError;
use padbridge_input_maps::{CompiledProfile, HatTarget, Profile};
use serde::Serialize;

use crate::commands::ProfileCommands;
use crate::commands::replay::read_file;
use crate::error::CliError;
use crate::output;

/// What `profile check` reports for a valid profile.
#[derive(Debug, Serialize)]
pub struct ProfileReport {
    pub name: Option<String>,
    pub button_overrides: usize,
    pub axis_overrides: usize,
    pub hat: HatTarget,
}

pub fn execute(cmd: &ProfileCommands, json: bool) -> Result<()> {
    match cmd {
        ProfileCommands::Check { path } => check_profile(path, json),
        ProfileCommands::Default => print_default(),
    }
}

fn check_profile(path: &Path, json: bool) -> Result<()> {
    let text = read_file(path)?;
    let (profile, _) = load_profile(&text, &path.display().to_string())?;

    let report = ProfileReport {
        name: profile.name.clone(),
        button_overrides: profile.buttons.len(),
        axis_overrides: profile.axes.len(),
        hat: profile.hat,
    };
    output::print_profile_report(&report, &path.display().to_string(), json)
}

fn print_default() -> Result<()> {
    let text = Profile::default().to_json_pretty().map_err(PadbridgeError::from)?;
    println!("{text}");
    Ok(())
}

/// Parses and compiles a profile.
pub fn load_profile(text: &str, source_name: &str) -> Result<(Profile, CompiledProfile), CliError> {
    let profile = Profile::from_json(text, source_name).map_err(PadbridgeError::from)?;
    let compiled = profile.compile().map_err(PadbridgeError::from)?;
    Ok((profile, compiled))
}
