//! End-to-end driver: record -> extract -> analyze.
//!
//! Every stage can also run on its own (extract-only, analyze an existing
//! bundle). All stages share one `ToolRunner`.

use crate::export::{ExportResult, TocExport, TocExtractor};
use crate::insight::{InsightEngine, InsightReport};
use crate::process::{ProcessRef, ProcessResolver};
use crate::record::{Recorder, RecordingRequest, RecordingResult};
use crate::toolchain::{Invocation, ToolRunner};
use crate::utils::config::{ToolchainConfig, REPORT_VERSION, XCTRACE};
use crate::utils::error::TraceError;
use chrono::{DateTime, Utc};
use log::{info, warn};
use serde::Serialize;
use std::path::Path;

/// What a record (or attach) command reports
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordingReport {
    /// Report schema version
    pub version: String,

    pub generated_at: DateTime<Utc>,

    pub success: bool,
    pub template: String,

    #[serde(flatten)]
    pub result: RecordingResult,

    /// Process picked by name, when attaching by name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process: Option<ProcessRef>,

    /// Summary of the new bundle (`record --analyze`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<InsightReport>,

    /// Why the saved bundle could not be summarized
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis_error: Option<String>,
}

impl RecordingReport {
    pub fn new(template: impl Into<String>, result: RecordingResult) -> Self {
        Self {
            version: REPORT_VERSION.to_string(),
            generated_at: Utc::now(),
            success: result.is_saved(),
            template: template.into(),
            result,
            process: None,
            analysis: None,
            analysis_error: None,
        }
    }
}

/// Shared entry point for the CLI commands
pub struct Pipeline<R> {
    runner: R,
    config: ToolchainConfig,
    engine: InsightEngine,
}

impl<R: ToolRunner> Pipeline<R> {
    pub fn new(runner: R, config: ToolchainConfig) -> Self {
        Self {
            runner,
            config,
            engine: InsightEngine::default(),
        }
    }

    pub fn with_engine(mut self, engine: InsightEngine) -> Self {
        self.engine = engine;
        self
    }

    pub fn recorder(&self) -> Recorder<&R> {
        Recorder::new(&self.runner, self.config.launcher.clone())
    }

    pub fn extractor(&self) -> TocExtractor<&R> {
        TocExtractor::new(&self.runner, self.config.launcher.clone())
    }

    pub fn resolver(&self) -> ProcessResolver<&R> {
        ProcessResolver::new(&self.runner, self.config.process_query.clone())
    }

    /// Look up a process by name; see `ProcessResolver::resolve`
    pub fn resolve_process(&self, name: &str) -> Result<Option<ProcessRef>, TraceError> {
        self.resolver().resolve(name)
    }

    /// Turn an attach identifier into a pid when possible
    ///
    /// Numeric identifiers are used as-is. Names the resolver cannot find
    /// are passed through; the profiler resolves names itself too.
    pub fn resolve_attach_identifier(
        &self,
        identifier: &str,
    ) -> Result<(String, Option<ProcessRef>), TraceError> {
        let identifier = identifier.trim();
        if identifier.parse::<u32>().is_ok() {
            return Ok((identifier.to_string(), None));
        }

        match self.resolve_process(identifier)? {
            Some(process) => {
                info!("Resolved {} to PID {}", identifier, process.pid);
                Ok((process.pid.to_string(), Some(process)))
            }
            None => {
                warn!(
                    "No running process matches '{}', passing the name to {}",
                    identifier, XCTRACE
                );
                Ok((identifier.to_string(), None))
            }
        }
    }

    /// Record one bundle; synthesized names land in `output_dir`
    pub fn record(
        &self,
        request: &RecordingRequest,
        output_dir: Option<&Path>,
    ) -> Result<RecordingResult, TraceError> {
        let recorder = match output_dir {
            Some(dir) => self.recorder().with_output_dir(dir),
            None => self.recorder(),
        };
        recorder.record(request)
    }

    pub fn extract_toc(&self, bundle: &Path) -> Result<TocExport, TraceError> {
        self.extractor().extract_toc(bundle)
    }

    pub fn extract_xpath(
        &self,
        bundle: &Path,
        query: &str,
        output: Option<&Path>,
    ) -> Result<ExportResult, TraceError> {
        self.extractor().extract_xpath(bundle, query, output)
    }

    /// Extract the TOC and summarize it
    ///
    /// An unparseable TOC is analysed as a bundle without runs.
    pub fn analyze_bundle(&self, bundle: &Path, verbose: bool) -> Result<InsightReport, TraceError> {
        let export = self.extract_toc(bundle)?;
        if let TocExport::Unparsed(unparsed) = &export {
            warn!(
                "Analyzing {} without structure: {}",
                bundle.display(),
                unparsed.parse_error
            );
        }
        Ok(self.engine.analyze(&export.into_bundle_info(), verbose))
    }

    /// Record, then summarize the bundle if one was saved
    ///
    /// A failed analysis does not hide the saved bundle: the report keeps the
    /// `Saved` result and carries the failure in `analysis_error`.
    pub fn record_and_analyze(
        &self,
        request: &RecordingRequest,
        output_dir: Option<&Path>,
        verbose: bool,
    ) -> Result<RecordingReport, TraceError> {
        let result = self.record(request, output_dir)?;
        let bundle = result.output().map(Path::to_path_buf);
        let mut report = RecordingReport::new(request.template.clone(), result);

        if let Some(bundle) = bundle {
            match self.analyze_bundle(&bundle, verbose) {
                Ok(analysis) => report.analysis = Some(analysis),
                Err(e) => {
                    warn!("Trace saved to {} but not analyzed: {}", bundle.display(), e);
                    report.analysis_error = Some(e.to_string());
                }
            }
        }

        Ok(report)
    }

    /// Names of the templates the profiler knows
    pub fn list_templates(&self) -> Result<Vec<String>, TraceError> {
        let args = vec![XCTRACE.to_string(), "list".to_string(), "templates".to_string()];
        let tool = format!("{} list", XCTRACE);
        match self.runner.run(&self.config.launcher, &args)? {
            Invocation::Finished(output) if output.success() => {
                Ok(parse_template_listing(&output.stdout))
            }
            Invocation::Finished(output) => Err(TraceError::tool_failed(tool, output.diagnostic())),
            Invocation::Interrupted => Err(TraceError::tool_failed(tool, "interrupted")),
        }
    }
}

/// Template names from `xctrace list templates`, minus `== Section ==` headers
pub fn parse_template_listing(listing: &str) -> Vec<String> {
    listing
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with("=="))
        .map(str::to_string)
        .collect()
}
