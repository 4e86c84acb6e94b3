use crate::output::{error_payload, print_json, render_recording};
use crate::pipeline::RecordingReport;
use crate::record::RecordingResult;
use crate::utils::config::REPORT_VERSION;
use anyhow::Result;
use colored::*;
use thiserror::Error;

/// A recording that produced no bundle.
///
/// In JSON mode the failed result object has already been printed.
#[derive(Error, Debug)]
#[error("{0}")]
pub struct RecordingFailed(pub String);

/// Print a recording report and turn a failed recording into an error
pub fn emit_recording(report: &RecordingReport, json: bool) -> Result<()> {
    if json {
        print_json(report)?;
    } else if report.success {
        print!("{}", render_recording(report));
    }

    match &report.result {
        RecordingResult::Saved { .. } => Ok(()),
        RecordingResult::Failed { error } => Err(RecordingFailed(error.clone()).into()),
    }
}

/// What to print for a command error, `None` when nothing more is due
///
/// JSON mode yields one `{"error": ...}` object, except for a failed
/// recording whose result object was already printed. Text mode yields an
/// `Error:` line for stderr.
pub fn render_error(error: &anyhow::Error, json: bool) -> Option<String> {
    if json {
        if error.is::<RecordingFailed>() {
            return None;
        }
        return Some(error_payload(&format!("{:#}", error)).to_string());
    }
    Some(format!("{} {:#}", "Error:".red().bold(), error))
}

/// Display version information
pub fn display_version() {
    println!("xctrace-studio v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", REPORT_VERSION);
    println!();
    println!("Record, extract and summarize Instruments traces from the command line.");
}
