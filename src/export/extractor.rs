//! Runs `xctrace export` against a bundle.

use super::schema::{ExportResult, TocExport, TraceBundleInfo, UnparsedToc};
use super::toc::parse_toc_xml;
use crate::toolchain::{Invocation, ToolOutput, ToolRunner};
use crate::utils::bundle::bundle_size;
use crate::utils::config::XCTRACE;
use crate::utils::error::TraceError;
use log::{debug, info, warn};
use std::path::Path;

/// Extracts structure and data from trace bundles
pub struct TocExtractor<R> {
    runner: R,
    launcher: String,
}

impl<R: ToolRunner> TocExtractor<R> {
    pub fn new(runner: R, launcher: impl Into<String>) -> Self {
        Self {
            runner,
            launcher: launcher.into(),
        }
    }

    /// Export and parse the bundle's table of contents
    ///
    /// Malformed XML does not fail: the raw text comes back with the parse
    /// error so it can still be inspected.
    ///
    /// # Errors
    /// * `TraceError::NotFound` - bundle does not exist
    /// * `TraceError::ToolMissing` / `TraceError::ToolFailed` - export did not run cleanly
    pub fn extract_toc(&self, bundle: &Path) -> Result<TocExport, TraceError> {
        let size_bytes = require_bundle(bundle)?;

        let args = vec![
            XCTRACE.to_string(),
            "export".to_string(),
            "--input".to_string(),
            bundle.display().to_string(),
            "--toc".to_string(),
        ];
        let output = self.export(&args)?;

        match parse_toc_xml(&output.stdout) {
            Ok(runs) => {
                let info = TraceBundleInfo::new(bundle, size_bytes, runs);
                info!(
                    "TOC for {}: {} runs, {} schemas",
                    bundle.display(),
                    info.runs.len(),
                    info.schemas.len()
                );
                Ok(TocExport::Parsed(info))
            }
            Err(e) => {
                warn!("TOC for {} is not valid XML: {}", bundle.display(), e);
                Ok(TocExport::Unparsed(UnparsedToc {
                    path: bundle.to_path_buf(),
                    size_bytes,
                    raw: output.stdout,
                    parse_error: e.to_string(),
                }))
            }
        }
    }

    /// Export the data selected by an XPath query
    ///
    /// The query is passed through untouched. With an `output` path the
    /// profiler writes the data there and nothing is held in memory.
    pub fn extract_xpath(
        &self,
        bundle: &Path,
        query: &str,
        output: Option<&Path>,
    ) -> Result<ExportResult, TraceError> {
        if query.trim().is_empty() {
            return Err(TraceError::InvalidRequest(
                "XPath query cannot be empty".to_string(),
            ));
        }
        require_bundle(bundle)?;

        let mut args = vec![
            XCTRACE.to_string(),
            "export".to_string(),
            "--input".to_string(),
            bundle.display().to_string(),
            "--xpath".to_string(),
            query.to_string(),
        ];
        if let Some(output) = output {
            args.push("--output".to_string());
            args.push(output.display().to_string());
        }

        let result = self.export(&args)?;

        Ok(match output {
            Some(output) => {
                info!("Exported {} to {}", query, output.display());
                ExportResult::Written {
                    output: output.to_path_buf(),
                }
            }
            None => ExportResult::Inline {
                data: result.stdout,
            },
        })
    }

    /// Run an export; anything but a clean exit is an error
    fn export(&self, args: &[String]) -> Result<ToolOutput, TraceError> {
        let tool = format!("{} export", XCTRACE);
        match self.runner.run(&self.launcher, args)? {
            Invocation::Finished(output) if output.success() => {
                debug!("{} produced {} bytes", tool, output.stdout.len());
                Ok(output)
            }
            Invocation::Finished(output) => Err(TraceError::tool_failed(tool, output.diagnostic())),
            Invocation::Interrupted => Err(TraceError::tool_failed(tool, "interrupted")),
        }
    }
}

/// Size of an existing bundle, `NotFound` otherwise
fn require_bundle(bundle: &Path) -> Result<u64, TraceError> {
    if !bundle.exists() {
        return Err(TraceError::NotFound(format!(
            "Trace not found: {}",
            bundle.display()
        )));
    }
    Ok(bundle_size(bundle)?)
}
