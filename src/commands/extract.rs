//! Extract command implementation.

use super::models::ExtractArgs;
use crate::export::TocExport;
use crate::output::{print_json, render_export, render_toc};
use crate::pipeline::Pipeline;
use crate::toolchain::ToolRunner;
use anyhow::{Context, Result};
use log::debug;

/// Execute the extract command
///
/// Table of contents unless an XPath query is given.
pub fn execute_extract<R: ToolRunner>(args: ExtractArgs, pipeline: &Pipeline<R>) -> Result<()> {
    validate_extract_args(&args)?;

    match args.xpath.as_deref().filter(|_| !args.toc) {
        Some(query) => {
            let result = pipeline
                .extract_xpath(&args.input, query, args.output.as_deref())
                .context("Failed to export trace data")?;
            if args.json {
                print_json(&result)?;
            } else {
                println!("{}", render_export(&result));
            }
        }
        None => {
            let export = pipeline
                .extract_toc(&args.input)
                .context("Failed to export table of contents")?;
            if let TocExport::Unparsed(unparsed) = &export {
                debug!("Returning raw TOC: {}", unparsed.parse_error);
            }
            if args.json {
                print_json(&export)?;
            } else {
                print!("{}", render_toc(&export));
            }
        }
    }

    Ok(())
}

pub fn validate_extract_args(args: &ExtractArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input trace path cannot be empty");
    }

    if let Some(query) = &args.xpath {
        if query.trim().is_empty() {
            anyhow::bail!("XPath query cannot be empty");
        }
    }

    if args.output.is_some() && (args.xpath.is_none() || args.toc) {
        anyhow::bail!("--output only applies to --xpath exports");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_validate_extract_defaults_to_toc() {
        let args = ExtractArgs {
            input: PathBuf::from("a.trace"),
            ..Default::default()
        };
        assert!(validate_extract_args(&args).is_ok());
    }

    #[test]
    fn test_validate_extract_output_needs_xpath() {
        let args = ExtractArgs {
            input: PathBuf::from("a.trace"),
            output: Some(PathBuf::from("out.xml")),
            ..Default::default()
        };
        assert!(validate_extract_args(&args).is_err());
    }

    #[test]
    fn test_validate_extract_blank_query() {
        let args = ExtractArgs {
            input: PathBuf::from("a.trace"),
            xpath: Some(" ".to_string()),
            ..Default::default()
        };
        assert!(validate_extract_args(&args).is_err());
    }
}
