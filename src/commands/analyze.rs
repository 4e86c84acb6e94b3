//! Analyze command implementation.

use super::models::AnalyzeArgs;
use crate::output::{print_json, render_analysis};
use crate::pipeline::Pipeline;
use crate::toolchain::ToolRunner;
use anyhow::{Context, Result};

/// Execute the analyze command
pub fn execute_analyze<R: ToolRunner>(args: AnalyzeArgs, pipeline: &Pipeline<R>) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input trace path cannot be empty");
    }

    let report = pipeline
        .analyze_bundle(&args.input, args.verbose)
        .context("Failed to analyze trace")?;

    if args.json {
        print_json(&report)?;
    } else {
        print!("{}", render_analysis(&report));
    }

    Ok(())
}
