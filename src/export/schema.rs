//! In-memory model of a bundle's table of contents.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One table inside a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Schema name, e.g. "time-profile"
    pub schema: Option<String>,

    /// Process id when the table is scoped to one process
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_pid: Option<String>,
}

/// One recording session within a bundle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run {
    /// Run number as reported by the profiler
    pub number: Option<String>,

    pub tables: Vec<Table>,
}

impl Run {
    /// Schema names of this run's tables, skipping unnamed tables
    pub fn schemas(&self) -> impl Iterator<Item = &str> {
        self.tables.iter().filter_map(|t| t.schema.as_deref())
    }
}

/// Schema names, deduplicated, in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemaSet(Vec<String>);

impl SchemaSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect every named schema across `runs`
    pub fn from_runs(runs: &[Run]) -> Self {
        let mut set = Self::new();
        for run in runs {
            for schema in run.schemas() {
                set.insert(schema);
            }
        }
        set
    }

    /// Returns false if the schema was already present
    pub fn insert(&mut self, schema: &str) -> bool {
        if self.contains(schema) {
            return false;
        }
        self.0.push(schema.to_string());
        true
    }

    pub fn contains(&self, schema: &str) -> bool {
        self.0.iter().any(|s| s == schema)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl<S: AsRef<str>> FromIterator<S> for SchemaSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = SchemaSet::new();
        for schema in iter {
            set.insert(schema.as_ref());
        }
        set
    }
}

/// Structure of one bundle, derived fresh from its TOC
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceBundleInfo {
    pub path: PathBuf,
    pub size_bytes: u64,

    /// Runs in capture order
    pub runs: Vec<Run>,

    pub schemas: SchemaSet,
}

impl TraceBundleInfo {
    pub fn new(path: impl Into<PathBuf>, size_bytes: u64, runs: Vec<Run>) -> Self {
        let schemas = SchemaSet::from_runs(&runs);
        Self {
            path: path.into(),
            size_bytes,
            runs,
            schemas,
        }
    }
}

/// TOC text that could not be parsed as XML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnparsedToc {
    pub path: PathBuf,
    pub size_bytes: u64,
    pub raw: String,
    pub parse_error: String,
}

/// Result of a table-of-contents export
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "format", rename_all = "snake_case")]
pub enum TocExport {
    Parsed(TraceBundleInfo),
    Unparsed(UnparsedToc),
}

impl TocExport {
    /// Bundle info for analysis; an unparsed TOC yields no runs
    pub fn into_bundle_info(self) -> TraceBundleInfo {
        match self {
            TocExport::Parsed(info) => info,
            TocExport::Unparsed(unparsed) => {
                TraceBundleInfo::new(unparsed.path, unparsed.size_bytes, Vec::new())
            }
        }
    }
}

/// Result of a scoped export
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "destination", rename_all = "snake_case")]
pub enum ExportResult {
    /// Exported data printed by the tool
    Inline { data: String },

    /// The tool wrote the data to this path
    Written { output: PathBuf },
}
