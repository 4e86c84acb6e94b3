//! Insight generation from a bundle's schema set.

use super::catalog::{default_rules, InsightRule};
use crate::export::schema::{SchemaSet, TraceBundleInfo};
use crate::utils::config::{bytes_to_mb, REPORT_VERSION};
use chrono::{DateTime, Utc};
use log::debug;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// First-pass summary of a bundle
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsightReport {
    /// Report schema version
    pub version: String,

    pub generated_at: DateTime<Utc>,

    pub file: PathBuf,
    pub size_bytes: u64,
    pub size_mb: f64,

    /// Number of runs in the bundle
    pub runs: usize,

    /// Schema names in first-seen order
    pub available_data: SchemaSet,

    pub insights: Vec<String>,
    pub next_steps: Vec<String>,

    /// Only present in verbose mode
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub detail: Option<VerboseDetail>,
}

/// Full schema list and per-run breakdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerboseDetail {
    pub all_schemas: Vec<String>,
    pub runs_detail: Vec<RunDetail>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunDetail {
    pub number: Option<String>,
    pub tables: Vec<String>,
}

/// Matches schemas against an ordered rule catalog
#[derive(Debug, Clone)]
pub struct InsightEngine {
    rules: Vec<InsightRule>,
}

impl Default for InsightEngine {
    fn default() -> Self {
        Self::with_rules(default_rules())
    }
}

impl InsightEngine {
    pub fn with_rules(rules: Vec<InsightRule>) -> Self {
        Self { rules }
    }

    /// One insight per schema at most (first matching rule wins), in
    /// schema order, without repeating an insight text
    ///
    /// Falls back to a single generic insight when nothing matches.
    pub fn insights(&self, schemas: &SchemaSet) -> Vec<String> {
        let mut insights: Vec<String> = Vec::new();

        for schema in schemas.iter() {
            let schema_lower = schema.to_lowercase();
            let Some(rule) = self.rules.iter().find(|rule| rule.matches(&schema_lower)) else {
                debug!("No insight for schema {}", schema);
                continue;
            };
            if !insights.contains(&rule.insight) {
                insights.push(rule.insight.clone());
            }
        }

        if insights.is_empty() {
            insights.push(format!(
                "Trace contains {} data tables. Open in Instruments.app for detailed analysis.",
                schemas.len()
            ));
        }

        insights
    }

    /// Build the report for one bundle
    pub fn analyze(&self, info: &TraceBundleInfo, verbose: bool) -> InsightReport {
        let detail = verbose.then(|| VerboseDetail {
            all_schemas: info.schemas.as_slice().to_vec(),
            runs_detail: info
                .runs
                .iter()
                .map(|run| RunDetail {
                    number: run.number.clone(),
                    tables: run.schemas().map(str::to_string).collect(),
                })
                .collect(),
        });

        InsightReport {
            version: REPORT_VERSION.to_string(),
            generated_at: Utc::now(),
            file: info.path.clone(),
            size_bytes: info.size_bytes,
            size_mb: bytes_to_mb(info.size_bytes),
            runs: info.runs.len(),
            available_data: info.schemas.clone(),
            insights: self.insights(&info.schemas),
            next_steps: next_steps(&info.path),
            detail,
        }
    }
}

/// Analyze with the built-in catalog
pub fn analyze(info: &TraceBundleInfo, verbose: bool) -> InsightReport {
    InsightEngine::default().analyze(info, verbose)
}

/// Static advice, parameterized only by the bundle path
fn next_steps(bundle: &Path) -> Vec<String> {
    vec![
        format!("Open in Instruments: open '{}'", bundle.display()),
        format!(
            "Export specific data: xctrace-studio extract --input '{}' --xpath '<query>'",
            bundle.display()
        ),
    ]
}
