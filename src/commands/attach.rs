//! Attach command implementation.
//!
//! Resolves a process by name (or takes a PID) and records it.

use super::models::AttachArgs;
use super::utils::emit_recording;
use crate::pipeline::{Pipeline, RecordingReport};
use crate::record::{CaptureTarget, RecordingRequest};
use crate::toolchain::ToolRunner;
use crate::utils::error::TraceError;
use anyhow::Result;

/// Execute the attach command
pub fn execute_attach<R: ToolRunner>(args: AttachArgs, pipeline: &Pipeline<R>) -> Result<()> {
    validate_attach_args(&args)?;

    let (pid, process) = match args.pid {
        Some(pid) => (pid, None),
        None => {
            let name = args.name.as_deref().unwrap_or_default();
            let process = pipeline
                .resolve_process(name)?
                .ok_or_else(|| TraceError::NotFound(format!("Process not found: {}", name)))?;
            if !args.json {
                println!("Found process: {} (PID {})", process.name, process.pid);
                if process.is_ambiguous() {
                    println!(
                        "  ({} processes matched; using the first)",
                        process.match_count
                    );
                }
            }
            (process.pid, Some(process))
        }
    };

    let request = RecordingRequest::new(args.template.clone())
        .with_output(args.output.clone())
        .with_time_limit(args.time_limit.clone())
        .with_target(CaptureTarget::Attach {
            identifier: pid.to_string(),
        })
        .with_quiet(args.json);

    let result = pipeline.record(&request, args.output_dir.as_deref())?;

    let mut report = RecordingReport::new(request.template.clone(), result);
    report.process = process;
    emit_recording(&report, args.json)
}

/// Either a name or a PID is required
pub fn validate_attach_args(args: &AttachArgs) -> Result<()> {
    let has_name = args
        .name
        .as_deref()
        .is_some_and(|name| !name.trim().is_empty());

    if !has_name && args.pid.is_none() {
        anyhow::bail!(TraceError::InvalidRequest(
            "Either --name or --pid is required".to_string()
        ));
    }

    if args.template.trim().is_empty() {
        anyhow::bail!("Template name cannot be empty");
    }

    Ok(())
}
