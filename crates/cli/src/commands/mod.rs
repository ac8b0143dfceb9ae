//! Command implementations for padctl

pub mod profile;
pub mod replay;

use std::path::PathBuf;

use clap::{Args, Subcommand};

#[derive(Args, Debug)]
pub struct ReplayArgs {
    /// Device name as reported over Bluetooth, e.g. "Joy-Con (L)"
    #[arg(short, long)]
    pub device: String,

    /// Remap profile (JSON); replaces the profile from --config
    #[arg(short, long)]
    pub profile: Option<PathBuf>,

    /// Session configuration (JSON)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Capture file: one hex frame per line, '#' starts a comment line
    pub frames: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum ProfileCommands {
    /// Validate a profile file
    Check {
        /// Profile file path
        path: PathBuf,
    },

    /// Print the identity profile
    Default,
}
