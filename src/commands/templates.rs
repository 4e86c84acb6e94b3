//! Templates command implementation.

use crate::output::{print_json, render_templates};
use crate::pipeline::Pipeline;
use crate::toolchain::ToolRunner;
use anyhow::{Context, Result};
use serde_json::json;

/// List the profiler's recording templates
pub fn execute_templates<R: ToolRunner>(json: bool, pipeline: &Pipeline<R>) -> Result<()> {
    let templates = pipeline
        .list_templates()
        .context("Failed to list templates")?;

    if json {
        print_json(&json!({ "templates": templates, "count": templates.len() }))?;
    } else {
        print!("{}", render_templates(&templates));
    }

    Ok(())
}
