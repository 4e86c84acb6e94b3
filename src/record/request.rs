//! Recording requests and output naming.

use super::target::CaptureTarget;
use crate::utils::config::{BUNDLE_EXTENSION, OUTPUT_TIMESTAMP_FORMAT};
use crate::utils::error::TraceError;
use chrono::NaiveDateTime;
use std::path::PathBuf;

/// One recording to perform
///
/// **Public** - built by the CLI commands, consumed by `Recorder`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordingRequest {
    /// Instruments template name
    pub template: String,

    /// Output bundle path; synthesized when absent
    pub output: Option<PathBuf>,

    /// Duration string passed verbatim to the profiler (e.g. "10s", "5m")
    pub time_limit: Option<String>,

    /// Device name or UDID
    pub device: Option<String>,

    pub target: CaptureTarget,

    /// Suppress console narration (and the profiler's own chatter)
    pub quiet: bool,
}

impl RecordingRequest {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            output: None,
            time_limit: None,
            device: None,
            target: CaptureTarget::AllProcesses,
            quiet: false,
        }
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = output;
        self
    }

    /// Blank limits mean "record until stopped"
    pub fn with_time_limit(mut self, time_limit: Option<String>) -> Self {
        self.time_limit = time_limit.filter(|limit| !limit.trim().is_empty());
        self
    }

    pub fn with_device(mut self, device: Option<String>) -> Self {
        self.device = device.filter(|d| !d.trim().is_empty());
        self
    }

    pub fn with_target(mut self, target: CaptureTarget) -> Self {
        self.target = target;
        self
    }

    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Check the request before anything is invoked
    pub fn validate(&self) -> Result<(), TraceError> {
        if self.template.trim().is_empty() {
            return Err(TraceError::InvalidRequest(
                "template name cannot be empty".to_string(),
            ));
        }

        if let Some(output) = &self.output {
            if output.as_os_str().is_empty() {
                return Err(TraceError::InvalidRequest(
                    "output path cannot be empty".to_string(),
                ));
            }
            if output.is_dir() && output.extension().is_none() {
                return Err(TraceError::InvalidRequest(format!(
                    "output path is a directory: {}",
                    output.display()
                )));
            }
        }

        Ok(())
    }
}

/// Lowercase, spaces to underscores
pub fn slug(template: &str) -> String {
    template.to_lowercase().replace(' ', "_")
}

/// `<slug>_<YYYYMMDD_HHMMSS>.trace`
pub fn default_output_name(template: &str, timestamp: NaiveDateTime) -> String {
    format!(
        "{}_{}.{}",
        slug(template),
        timestamp.format(OUTPUT_TIMESTAMP_FORMAT),
        BUNDLE_EXTENSION
    )
}
