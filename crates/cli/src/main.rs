//! padctl - Joy-Con to GameCube pipeline tool
//!
//! Replays captured Joy-Con HID frames through a padbridge session and checks
//! remap profiles.

#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![deny(clippy::unwrap_used)]

mod commands;
mod completion;
mod error;
mod output;

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::{ProfileCommands, ReplayArgs};
use crate::error::CliError;

/// Crates whose logs `-v` turns up.
const LOG_TARGETS: &[&str] = &["padctl", "padbridge_pipeline"];

#[derive(Parser, Debug)]
#[command(name = "padctl")]
#[command(about = "Joy-Con to GameCube pipeline tool - replay captures and check remap profiles")]
#[command(version)]
#[command(long_about = "
padctl drives the padbridge translation pipeline from the command line.

`replay` feeds a capture of Joy-Con HID frames through one session and prints
one JSON object per line for every wired report (and every committed
calibration set). `profile` validates remap profiles.

Use -v, -vv, -vvv for more logging; RUST_LOG overrides the filter.
Use --json for machine-readable errors.
")]
struct Cli {
    /// Output format (human-readable or JSON)
    #[arg(long, global = true, help = "Output in JSON format for machine parsing")]
    json: bool,

    /// Verbose logging
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Replay a frame capture through a session
    Replay(ReplayArgs),

    /// Profile commands
    #[command(subcommand)]
    Profile(ProfileCommands),

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completion for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

fn log_filter(verbose: u8) -> String {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        // Everything, including the per-stage records.
        _ => return "trace".to_string(),
    };
    LOG_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| log_filter(cli.verbose).into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match execute_command(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                output::print_error_json(&e);
            } else {
                output::print_error_human(&e);
            }

            ExitCode::from(e.downcast_ref::<CliError>().map_or(1, CliError::exit_code))
        }
    }
}

fn execute_command(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Replay(args) => commands::replay::execute(args),
        Commands::Profile(cmd) => commands::profile::execute(cmd, cli.json),
        Commands::Completion { shell } => {
            completion::generate_completion(*shell);
            Ok(())
        }
    }
}
