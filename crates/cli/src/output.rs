//! Output formatting for CLI responses

use anyhow::{Error, Result};
use colored::Colorize;
use padbridge_hid_switch_protocol::CalibrationData;
use padbridge_pipeline::PipelineOutput;
use serde::Serialize;
use serde_json::json;

use crate::commands::profile::ProfileReport;
use crate::error::CliError;

/// One line of `replay` output.
#[derive(Debug, Serialize)]
#[serde(tag = "record", rename_all = "snake_case")]
pub enum ReplayRecord<'a> {
    Output {
        line: usize,
        #[serde(flatten)]
        output: &'a PipelineOutput,
    },
    Calibration {
        line: usize,
        calib_data: &'a CalibrationData,
    },
}

/// Prints a replay record as a single JSON line.
pub fn print_record(record: &ReplayRecord<'_>) -> Result<()> {
    println!("{}", serde_json::to_string(record)?);
    Ok(())
}

pub fn print_profile_report(report: &ProfileReport, source: &str, json: bool) -> Result<()> {
    if json {
        let output = json!({
            "success": true,
            "profile": report,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let label = report.name.as_deref().unwrap_or(source);
    println!("{} {}", "✓".green(), label.bold());
    println!("    Button overrides: {}", report.button_overrides);
    println!("    Axis overrides: {}", report.axis_overrides);
    println!(
        "    Hat: {} / {}",
        report.hat.x.name().cyan(),
        report.hat.y.name().cyan()
    );
    Ok(())
}

/// Print error in JSON format
pub fn print_error_json(error: &Error) {
    let error_json = json!({
        "success": false,
        "error": {
            "message": error.to_string(),
            "type": error_type_name(error)
        }
    });
    match serde_json::to_string_pretty(&error_json) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("Failed to format error as JSON: {e}"),
    }
}

/// Print error in human-readable format
pub fn print_error_human(error: &Error) {
    eprintln!("{} {}", "Error:".red().bold(), error);

    let mut source = error.source();
    while let Some(err) = source {
        eprintln!("  {} {}", "Caused by:".yellow(), err);
        source = err.source();
    }
}

fn error_type_name(error: &Error) -> String {
    match error.downcast_ref::<CliError>() {
        Some(e) => e.kind(),
        None => "Other".to_string(),
    }
}
