//! Drives `xctrace record` and classifies the outcome.

use super::request::{default_output_name, RecordingRequest};
use crate::toolchain::{Invocation, ToolRunner};
use crate::utils::bundle::bundle_size;
use crate::utils::config::{bytes_to_mb, XCTRACE};
use crate::utils::error::TraceError;
use chrono::{Local, NaiveDateTime};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Outcome of one recording
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RecordingResult {
    /// A bundle exists at the expected path
    Saved { output: PathBuf, size_bytes: u64 },

    /// No bundle was written
    Failed { error: String },
}

impl RecordingResult {
    pub fn is_saved(&self) -> bool {
        matches!(self, RecordingResult::Saved { .. })
    }

    pub fn output(&self) -> Option<&Path> {
        match self {
            RecordingResult::Saved { output, .. } => Some(output),
            RecordingResult::Failed { .. } => None,
        }
    }
}

/// Runs recordings through a `ToolRunner`
pub struct Recorder<R> {
    runner: R,
    launcher: String,
    output_dir: PathBuf,
}

impl<R: ToolRunner> Recorder<R> {
    /// Create a recorder invoking `<launcher> xctrace record ...`
    pub fn new(runner: R, launcher: impl Into<String>) -> Self {
        Self {
            runner,
            launcher: launcher.into(),
            output_dir: PathBuf::new(),
        }
    }

    /// Directory for synthesized output names (current directory by default)
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Record using the current local time for a synthesized output name
    pub fn record(&self, request: &RecordingRequest) -> Result<RecordingResult, TraceError> {
        self.record_at(request, Local::now().naive_local())
    }

    /// Record with an explicit clock reading
    ///
    /// # Returns
    /// `Saved` if and only if a bundle exists at the effective output path
    /// once the profiler has returned or been interrupted
    ///
    /// # Errors
    /// * `TraceError::InvalidRequest` - rejected before anything is invoked
    /// * `TraceError::Io` - the output directory could not be created
    pub fn record_at(
        &self,
        request: &RecordingRequest,
        now: NaiveDateTime,
    ) -> Result<RecordingResult, TraceError> {
        request.validate()?;

        let output = self.effective_output(request, now);
        if request.output.is_none() && !self.output_dir.as_os_str().is_empty() {
            std::fs::create_dir_all(&self.output_dir)?;
        }

        let args = build_record_args(request, &output);
        narrate(request, &output);

        let start_time = Instant::now();
        let invocation = self.runner.run(&self.launcher, &args);
        debug!(
            "{} record returned after {:.2}s",
            XCTRACE,
            start_time.elapsed().as_secs_f64()
        );

        // The bundle on disk is authoritative: an interrupted profiler still
        // flushes a valid bundle, and a clean exit does not guarantee one.
        if output.exists() {
            let size_bytes = bundle_size(&output).unwrap_or_else(|e| {
                warn!("Could not size {}: {}", output.display(), e);
                0
            });
            info!(
                "Trace saved: {} ({} MB)",
                output.display(),
                bytes_to_mb(size_bytes)
            );
            return Ok(RecordingResult::Saved { output, size_bytes });
        }

        let error = match invocation {
            Ok(Invocation::Finished(result)) => {
                if result.stderr.trim().is_empty() && result.success() {
                    format!("{} exited without writing {}", XCTRACE, output.display())
                } else {
                    result.diagnostic()
                }
            }
            Ok(Invocation::Interrupted) => "Recording interrupted".to_string(),
            Err(e) => e.to_string(),
        };
        warn!("Recording failed: {}", error);

        Ok(RecordingResult::Failed { error })
    }

    /// Caller-supplied path, or `<output_dir>/<slug>_<timestamp>.trace`
    pub fn effective_output(&self, request: &RecordingRequest, now: NaiveDateTime) -> PathBuf {
        match &request.output {
            Some(path) => path.clone(),
            None => self
                .output_dir
                .join(default_output_name(&request.template, now)),
        }
    }
}

/// Arguments to the launcher for `xctrace record`
///
/// Order: template, output, optional device and time limit, prompt/quiet
/// flags, then the target flags last so nothing trails a launched command.
pub fn build_record_args(request: &RecordingRequest, output: &Path) -> Vec<String> {
    let mut args = vec![
        XCTRACE.to_string(),
        "record".to_string(),
        "--template".to_string(),
        request.template.clone(),
        "--output".to_string(),
        output.display().to_string(),
    ];

    if let Some(device) = &request.device {
        args.push("--device".to_string());
        args.push(device.clone());
    }

    if let Some(time_limit) = &request.time_limit {
        args.push("--time-limit".to_string());
        args.push(time_limit.clone());
    }

    args.push("--no-prompt".to_string());
    if request.quiet {
        args.push("--quiet".to_string());
    }

    args.extend(request.target.to_args());
    args
}

/// Console narration; never affects the recording itself
fn narrate(request: &RecordingRequest, output: &Path) {
    if request.quiet {
        return;
    }

    println!("Recording with template: {}", request.template);
    println!("Target: {}", request.target.describe());
    if let Some(time_limit) = &request.time_limit {
        println!("Time limit: {}", time_limit);
    }
    println!("Output: {}", output.display());
    println!("Recording... (Ctrl+C to stop)\n");
}
