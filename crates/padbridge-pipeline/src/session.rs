//! Per-device session state machine.
//!
//! ```text
//! Disconnected --attach--> Attaching --first data report--> Priming --N neutral--> Streaming
//!      ^                                                                              |
//!      +----------------------------------detach--------------------------------------+
//! ```
//!
//! Calibration replies are accepted in every attached state and never move
//! the state machine. Everything a session knows about its device lives in
//! the session value; detaching drops it.

use padbridge_calibration::{CalibrationError, CalibrationStore};
use padbridge_errors::{DeviceError, PadbridgeError, Result, ValidationError};
use padbridge_hid_switch_protocol::{
    AssemblyStatus, CalibrationAssembler, CalibrationData, CalibrationFragment, DecodedReport,
    ParseError, RawFrame, WirelessInputState, decode,
};
use padbridge_input_maps::{
    CompiledProfile, GenericInputState, Hat, MappedInputState, Profile, apply_profile,
};
use padbridge_wired::{WiredOutputState, WiredTarget};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::assembler::assemble;
use crate::device::{DeviceDescriptor, DeviceFamily};
use crate::records;

/// Neutral reports required before output is trusted.
pub const DEFAULT_PRIMING_REPORTS: u32 = 2;

fn default_priming_reports() -> u32 {
    DEFAULT_PRIMING_REPORTS
}

/// Session setup, loadable from JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SessionConfig {
    #[serde(default)]
    pub target: WiredTarget,

    #[serde(default = "default_priming_reports")]
    pub priming_reports: u32,

    #[serde(default)]
    pub profile: Profile,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            target: WiredTarget::default(),
            priming_reports: DEFAULT_PRIMING_REPORTS,
            profile: Profile::default(),
        }
    }
}

impl SessionConfig {
    pub fn from_json(text: &str, source_name: &str) -> Result<Self> {
        serde_json::from_str(text)
            .map_err(|e| PadbridgeError::config(format!("{source_name}: {e}")))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "state")]
pub enum SessionState {
    Disconnected,
    /// Identified, no data report yet.
    Attaching,
    Priming {
        remaining: u32,
    },
    Streaming,
}

/// Every stage's view of one streamed report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PipelineOutput {
    pub wireless: WirelessInputState,
    pub generic: GenericInputState,
    pub mapped: MappedInputState,
    pub wired: WiredOutputState,
    /// Encoded wired report.
    pub bytes: Vec<u8>,
}

/// Why a frame produced nothing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DropReason {
    #[error("malformed frame: {0}")]
    Malformed(#[from] ParseError),

    #[error("subcommand {subcommand:#04x} reply carries no input")]
    NotInput { subcommand: u8 },

    #[error("calibration fragment {got} out of sequence (had {received:#06b})")]
    CalibrationDiscarded { received: u8, got: u8 },

    #[error("calibration set rejected: {0}")]
    InvalidCalibration(#[from] CalibrationError),
}

/// Result of feeding one frame to a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportOutcome {
    Output(PipelineOutput),
    /// Input accepted while priming; `remaining` neutral reports to go.
    Priming { remaining: u32 },
    /// A calibration set committed and is now in use.
    Calibration(CalibrationData),
    /// A calibration fragment was buffered.
    CalibrationPending,
    Dropped(DropReason),
    NotAttached,
}

impl ReportOutcome {
    pub fn output(&self) -> Option<&PipelineOutput> {
        match self {
            ReportOutcome::Output(output) => Some(output),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
struct AttachedDevice {
    descriptor: DeviceDescriptor,
    calibration: CalibrationStore,
    assembler: CalibrationAssembler,
    generic: GenericInputState,
    last_output: Option<PipelineOutput>,
}

/// One wireless device feeding one wired port.
#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    profile: CompiledProfile,
    state: SessionState,
    device: Option<AttachedDevice>,
}

impl Session {
    /// Compiles the configured profile. Fails on an inconsistent profile.
    pub fn new(config: SessionConfig) -> Result<Self> {
        let profile = config.profile.compile()?;
        Ok(Self {
            config,
            profile,
            state: SessionState::Disconnected,
            device: None,
        })
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn profile(&self) -> &CompiledProfile {
        &self.profile
    }

    pub fn device_family(&self) -> Option<DeviceFamily> {
        self.device.as_ref().map(|d| d.descriptor.family)
    }

    pub fn calibration(&self) -> Option<&CalibrationStore> {
        self.device.as_ref().map(|d| &d.calibration)
    }

    /// Sticky generic state as of the last input report.
    pub fn generic(&self) -> Option<&GenericInputState> {
        self.device.as_ref().map(|d| &d.generic)
    }

    pub fn last_output(&self) -> Option<&PipelineOutput> {
        self.device.as_ref().and_then(|d| d.last_output.as_ref())
    }

    /// Identifies the device by name and installs its factory calibration.
    pub fn attach(&mut self, name: &str) -> Result<()> {
        if let Some(device) = &self.device {
            return Err(DeviceError::AlreadyAttached(device.descriptor.family.name().into()).into());
        }

        let family = DeviceFamily::identify(name)?;
        let descriptor = family.descriptor()?;
        let calibration = descriptor
            .factory_calibration()
            .map_err(|e| ValidationError::calibration(family.name(), e.to_string()))?;

        self.device = Some(AttachedDevice {
            descriptor,
            calibration,
            assembler: CalibrationAssembler::new(),
            generic: GenericInputState::default(),
            last_output: None,
        });
        self.state = SessionState::Attaching;
        info!(device = family.name(), wired = self.config.target.name(), "Device attached");
        Ok(())
    }

    /// Forgets the device, its calibration, and all carried state.
    pub fn detach(&mut self) {
        if let Some(device) = self.device.take() {
            info!(device = device.descriptor.family.name(), "Device detached");
        }
        self.state = SessionState::Disconnected;
    }

    /// Runs one frame through the pipeline. Never fails; see [`ReportOutcome`].
    pub fn process(&mut self, frame: RawFrame<'_>) -> ReportOutcome {
        let Some(device) = self.device.as_mut() else {
            debug!(report_id = frame.report_id, "Frame with no device attached");
            return ReportOutcome::NotAttached;
        };

        let decoded = match decode(frame) {
            Ok(decoded) => decoded,
            Err(e) => {
                debug!(report_id = frame.report_id, error = %e, "Dropping frame");
                return ReportOutcome::Dropped(e.into());
            }
        };

        match decoded {
            DecodedReport::Input(report) => {
                process_input(device, &mut self.state, &self.config, &self.profile, report)
            }
            DecodedReport::Calibration(fragment) => process_calibration(device, fragment),
            DecodedReport::SubcommandReply { subcommand } => {
                debug!(subcommand, "Ignoring subcommand reply");
                ReportOutcome::Dropped(DropReason::NotInput { subcommand })
            }
        }
    }
}

fn is_neutral(report: &WirelessInputState) -> bool {
    report.btns == 0 && report.hat.is_none_or(|hat| Hat::new(hat).is_centered())
}

fn process_input(
    device: &mut AttachedDevice,
    state: &mut SessionState,
    config: &SessionConfig,
    profile: &CompiledProfile,
    report: WirelessInputState,
) -> ReportOutcome {
    let update = assemble(&report, &device.descriptor, &device.calibration);
    device.generic = device.generic.merge(&update);
    records::wireless(&report);
    records::generic(&device.generic);

    if *state == SessionState::Attaching {
        *state = SessionState::Priming {
            remaining: config.priming_reports,
        };
        info!(remaining = config.priming_reports, "Priming");
    }

    if let SessionState::Priming { remaining } = *state {
        if remaining > 0 {
            let remaining = if is_neutral(&report) {
                remaining - 1
            } else {
                debug!(btns = report.btns, "Non-neutral report while priming");
                config.priming_reports
            };
            *state = if remaining == 0 {
                info!(device = device.descriptor.family.name(), "Streaming");
                SessionState::Streaming
            } else {
                SessionState::Priming { remaining }
            };
            return ReportOutcome::Priming { remaining };
        }
        info!(device = device.descriptor.family.name(), "Streaming");
        *state = SessionState::Streaming;
    }

    let mapped = apply_profile(&device.generic, profile);
    let wired = WiredOutputState::from_mapped(&mapped, config.target);
    records::mapped(&mapped);
    records::wired(&wired);

    let output = PipelineOutput {
        wireless: report,
        generic: device.generic,
        mapped,
        bytes: wired.to_bytes(),
        wired,
    };
    device.last_output = Some(output.clone());
    ReportOutcome::Output(output)
}

fn process_calibration(device: &mut AttachedDevice, fragment: CalibrationFragment) -> ReportOutcome {
    let data = match device.assembler.push(fragment) {
        AssemblyStatus::Pending { received } => {
            debug!(received, "Calibration fragment buffered");
            return ReportOutcome::CalibrationPending;
        }
        AssemblyStatus::Discarded { received, got } => {
            debug!(received, got, "Calibration sequence broken, fragments discarded");
            return ReportOutcome::Dropped(DropReason::CalibrationDiscarded { received, got });
        }
        AssemblyStatus::Complete(data) => data,
    };

    let installed = device
        .descriptor
        .calibration_from(&data)
        .and_then(|store| device.calibration.replace(store));
    if let Err(e) = installed {
        warn!(error = %e, "Calibration set rejected, keeping previous calibration");
        return ReportOutcome::Dropped(e.into());
    }

    info!(
        device = device.descriptor.family.name(),
        neutral = ?data.neutral,
        deadzone = ?data.deadzone,
        "Calibration installed"
    );
    records::calibration(&data);
    ReportOutcome::Calibration(data)
}
