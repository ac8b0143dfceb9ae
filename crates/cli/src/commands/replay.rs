//! Capture replay through a pipeline session

use std::fs;
use std::path::Path;

use anyhow::Result;
use padbridge_errors::PadbridgeError;
use padbridge_hid_switch_protocol::RawFrame;
use padbridge_input_maps::Profile;
use padbridge_pipeline::{ReportOutcome, Session, SessionConfig};
use tracing::{debug, info};

use crate::commands::ReplayArgs;
use crate::error::CliError;
use crate::output::{self, ReplayRecord};

/// Outcome counts for one replay.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReplaySummary {
    pub frames: usize,
    pub outputs: usize,
    pub priming: usize,
    pub calibrations: usize,
    pub dropped: usize,
}

pub fn execute(args: &ReplayArgs) -> Result<()> {
    let config = load_config(args.config.as_deref(), args.profile.as_deref())?;
    let frames = parse_frames(&read_file(&args.frames)?)?;

    let mut session = Session::new(config).map_err(CliError::from)?;
    session.attach(&args.device).map_err(CliError::from)?;

    let summary = replay(&mut session, &frames, |record| output::print_record(&record))?;
    info!(
        frames = summary.frames,
        outputs = summary.outputs,
        priming = summary.priming,
        calibrations = summary.calibrations,
        dropped = summary.dropped,
        "Replay finished"
    );
    Ok(())
}

/// Feeds every frame to `session`, handing each emitted record to `emit`.
pub fn replay<F>(session: &mut Session, frames: &[(usize, Vec<u8>)], mut emit: F) -> Result<ReplaySummary>
where
    F: FnMut(ReplayRecord<'_>) -> Result<()>,
{
    let mut summary = ReplaySummary::default();
    for (line, bytes) in frames {
        summary.frames += 1;
        let Some(frame) = RawFrame::from_hid_data(bytes) else {
            summary.dropped += 1;
            debug!(line, "Frame dropped: no report identifier");
            continue;
        };

        match session.process(frame) {
            ReportOutcome::Output(out) => {
                summary.outputs += 1;
                emit(ReplayRecord::Output { line: *line, output: &out })?;
            }
            ReportOutcome::Calibration(data) => {
                summary.calibrations += 1;
                emit(ReplayRecord::Calibration { line: *line, calib_data: &data })?;
            }
            ReportOutcome::Priming { remaining } => {
                summary.priming += 1;
                debug!(line, remaining, "Priming");
            }
            ReportOutcome::CalibrationPending => debug!(line, "Calibration fragment"),
            ReportOutcome::Dropped(reason) => {
                summary.dropped += 1;
                debug!(line, %reason, "Frame dropped");
            }
            ReportOutcome::NotAttached => summary.dropped += 1,
        }
    }
    Ok(summary)
}

/// Parses a capture file into `(line number, bytes)` pairs.
///
/// Blank lines and lines starting with `#` are skipped; whitespace inside a
/// line is ignored so frames may be written byte-spaced.
pub fn parse_frames(text: &str) -> Result<Vec<(usize, Vec<u8>)>, CliError> {
    let mut frames = Vec::new();
    for (index, raw) in text.lines().enumerate() {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let line = index + 1;
        let digits: String = trimmed.split_whitespace().collect();
        let bytes = hex::decode(&digits).map_err(|e| CliError::InvalidFrame {
            line,
            reason: e.to_string(),
        })?;
        frames.push((line, bytes));
    }
    Ok(frames)
}

fn load_config(config: Option<&Path>, profile: Option<&Path>) -> Result<SessionConfig, CliError> {
    let mut session_config = match config {
        Some(path) => {
            let text = read_file(path)?;
            SessionConfig::from_json(&text, &path.display().to_string())?
        }
        None => SessionConfig::default(),
    };

    if let Some(path) = profile {
        let text = read_file(path)?;
        session_config.profile = Profile::from_json(&text, &path.display().to_string())
            .map_err(PadbridgeError::from)?;
    }
    Ok(session_config)
}

pub(crate) fn read_file(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}
