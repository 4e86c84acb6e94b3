//! Record command implementation.
//!
//! The record command:
//! 1. Resolves an attach name to a PID when possible
//! 2. Selects the capture target
//! 3. Runs `xctrace record`
//! 4. Optionally summarizes the saved bundle

use super::models::RecordArgs;
use super::utils::emit_recording;
use crate::pipeline::{Pipeline, RecordingReport};
use crate::record::{CaptureTarget, RecordingRequest};
use crate::toolchain::ToolRunner;
use anyhow::{Context, Result};
use log::{debug, info};
use std::time::Instant;

/// Execute the record command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Invalid arguments (rejected before the profiler runs)
/// * A recording that saved no bundle (`RecordingFailed`)
///
/// With `--analyze`, a saved bundle that cannot be summarized is still a
/// success; the report carries `analysis_error`.
pub fn execute_record<R: ToolRunner>(args: RecordArgs, pipeline: &Pipeline<R>) -> Result<()> {
    validate_record_args(&args)?;
    let start_time = Instant::now();

    let (attach, process) = match args.attach.as_deref().map(str::trim) {
        Some(identifier) if !identifier.is_empty() => {
            let (resolved, process) = pipeline
                .resolve_attach_identifier(identifier)
                .context("Failed to resolve attach target")?;
            (Some(resolved), process)
        }
        _ => (None, None),
    };

    let target = CaptureTarget::select(attach, args.launch.clone());
    if args.all_processes && target != CaptureTarget::AllProcesses {
        debug!("--all-processes overridden by {}", target.describe());
    }

    let request = RecordingRequest::new(args.template.clone())
        .with_output(args.output.clone())
        .with_time_limit(args.time_limit.clone())
        .with_device(args.device.clone())
        .with_target(target)
        .with_quiet(args.json);

    let mut report = if args.analyze {
        pipeline
            .record_and_analyze(&request, args.output_dir.as_deref(), false)
            .context("Failed to record trace")?
    } else {
        let result = pipeline.record(&request, args.output_dir.as_deref())?;
        RecordingReport::new(request.template.clone(), result)
    };
    report.process = process;

    info!(
        "Record command completed in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );
    emit_recording(&report, args.json)
}

/// Validate record arguments
///
/// **Public** - can be called before execute_record for early validation
pub fn validate_record_args(args: &RecordArgs) -> Result<()> {
    if args.template.trim().is_empty() {
        anyhow::bail!("Template name cannot be empty");
    }

    if let Some(output) = &args.output {
        if output.as_os_str().is_empty() {
            anyhow::bail!("Output path cannot be empty");
        }
    }

    if let Some(command) = args.launch.first() {
        if command.trim().is_empty() {
            anyhow::bail!("Launch command cannot be empty");
        }
    }

    Ok(())
}
