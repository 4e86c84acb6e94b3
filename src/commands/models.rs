use crate::utils::config::{DEFAULT_ATTACH_TEMPLATE, DEFAULT_ATTACH_TIME_LIMIT};
use std::path::PathBuf;

/// Arguments for the record command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone, Default)]
pub struct RecordArgs {
    /// Instruments template name
    pub template: String,

    /// Output bundle path (synthesized when absent)
    pub output: Option<PathBuf>,

    /// Directory for synthesized output names
    pub output_dir: Option<PathBuf>,

    /// Process name or PID to attach to
    pub attach: Option<String>,

    /// Command line to launch under the profiler
    pub launch: Vec<String>,

    /// Explicit system-wide capture (also the default)
    pub all_processes: bool,

    /// Recording time limit, passed through verbatim (e.g. "10s")
    pub time_limit: Option<String>,

    /// Device name or UDID
    pub device: Option<String>,

    /// Summarize the bundle once it is saved
    pub analyze: bool,

    /// Emit JSON instead of text
    pub json: bool,
}

/// Arguments for the attach command
#[derive(Debug, Clone)]
pub struct AttachArgs {
    /// Process name to resolve
    pub name: Option<String>,

    /// Process ID to attach to
    pub pid: Option<u32>,

    pub template: String,
    pub time_limit: Option<String>,
    pub output: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub json: bool,
}

impl Default for AttachArgs {
    fn default() -> Self {
        Self {
            name: None,
            pid: None,
            template: DEFAULT_ATTACH_TEMPLATE.to_string(),
            time_limit: Some(DEFAULT_ATTACH_TIME_LIMIT.to_string()),
            output: None,
            output_dir: None,
            json: false,
        }
    }
}

/// Arguments for the extract command
#[derive(Debug, Clone, Default)]
pub struct ExtractArgs {
    /// Input bundle
    pub input: PathBuf,

    /// Export the table of contents (the default when no query is given)
    pub toc: bool,

    /// XPath query for a scoped export
    pub xpath: Option<String>,

    /// Where the profiler writes a scoped export
    pub output: Option<PathBuf>,

    pub json: bool,
}

/// Arguments for the analyze command
#[derive(Debug, Clone, Default)]
pub struct AnalyzeArgs {
    pub input: PathBuf,

    /// Attach the full schema list and per-run breakdown
    pub verbose: bool,

    pub json: bool,
}

/// Arguments for the compare command
#[derive(Debug, Clone, Default)]
pub struct CompareArgs {
    pub baseline: PathBuf,
    pub current: PathBuf,
    pub json: bool,
}
