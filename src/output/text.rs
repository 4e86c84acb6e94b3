//! Human-readable rendering for text mode.

use crate::compare::TraceComparison;
use crate::export::{ExportResult, TocExport};
use crate::insight::InsightReport;
use crate::pipeline::RecordingReport;
use crate::record::RecordingResult;
use crate::utils::config::bytes_to_mb;
use colored::*;

/// Schemas listed before the remainder is summarized
const MAX_LISTED_SCHEMAS: usize = 10;

/// Outcome of a recording, plus its analysis when one was made
pub fn render_recording(report: &RecordingReport) -> String {
    let mut out = String::new();

    match &report.result {
        RecordingResult::Saved { output, size_bytes } => {
            out.push_str(&format!(
                "\n{} Trace saved: {} ({} MB)\n",
                "✓".green(),
                output.display(),
                bytes_to_mb(*size_bytes)
            ));
            out.push_str(&format!("Open in Instruments: open '{}'\n", output.display()));
        }
        RecordingResult::Failed { error } => {
            out.push_str(&format!("{} Recording failed: {}\n", "✗".red(), error));
        }
    }

    if let Some(analysis) = &report.analysis {
        out.push('\n');
        out.push_str(&render_analysis(analysis));
    }
    if let Some(error) = &report.analysis_error {
        out.push_str(&format!("{} Analysis skipped: {}\n", "!".yellow(), error));
    }

    out
}

/// Runs and their tables, or the raw text when the TOC did not parse
pub fn render_toc(export: &TocExport) -> String {
    match export {
        TocExport::Parsed(info) => {
            let mut out = String::new();
            out.push_str(&format!("Trace: {}\n", info.path.display()));
            out.push_str(&format!("Runs: {}\n\n", info.runs.len()));
            for run in &info.runs {
                out.push_str(&format!(
                    "  Run {}:\n",
                    run.number.as_deref().unwrap_or("?")
                ));
                for table in &run.tables {
                    let schema = table.schema.as_deref().unwrap_or("(unnamed)");
                    match &table.target_pid {
                        Some(pid) => out.push_str(&format!("    - {} [pid {}]\n", schema, pid)),
                        None => out.push_str(&format!("    - {}\n", schema)),
                    }
                }
            }
            out
        }
        TocExport::Unparsed(unparsed) => unparsed.raw.clone(),
    }
}

pub fn render_export(result: &ExportResult) -> String {
    match result {
        ExportResult::Inline { data } => data.clone(),
        ExportResult::Written { output } => format!("Exported to: {}", output.display()),
    }
}

pub fn render_analysis(report: &InsightReport) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{} {}\n",
        "Trace Analysis:".bold(),
        report.file.display()
    ));
    out.push_str(&format!("Size: {} MB\n", report.size_mb));
    out.push_str(&format!("Runs: {}\n\n", report.runs));

    out.push_str(&format!("{}\n", "Insights:".bold()));
    for insight in &report.insights {
        out.push_str(&format!("  - {}\n", insight));
    }
    out.push('\n');

    out.push_str(&format!("{}\n", "Available data types:".bold()));
    for schema in report.available_data.iter().take(MAX_LISTED_SCHEMAS) {
        out.push_str(&format!("  - {}\n", schema));
    }
    if report.available_data.len() > MAX_LISTED_SCHEMAS {
        out.push_str(&format!(
            "  ... and {} more\n",
            report.available_data.len() - MAX_LISTED_SCHEMAS
        ));
    }
    out.push('\n');

    if let Some(detail) = &report.detail {
        out.push_str(&format!("{}\n", "Runs detail:".bold()));
        for run in &detail.runs_detail {
            out.push_str(&format!(
                "  Run {}: {}\n",
                run.number.as_deref().unwrap_or("?"),
                run.tables.join(", ")
            ));
        }
        out.push('\n');
    }

    out.push_str(&format!("{}\n", "Next steps:".bold()));
    for step in &report.next_steps {
        out.push_str(&format!("  {}\n", step));
    }

    out
}

pub fn render_templates(templates: &[String]) -> String {
    let mut out = format!("Available templates ({}):\n\n", templates.len());
    for template in templates {
        out.push_str(&format!("  {}\n", template));
    }
    out
}

pub fn render_comparison(comparison: &TraceComparison) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", "Trace Comparison".bold()));
    out.push_str(&format!("{}\n", "=".repeat(40)));
    out.push_str(&format!(
        "Baseline: {} ({} MB)\n",
        comparison.baseline.path.display(),
        comparison.baseline.size_mb
    ));
    out.push_str(&format!(
        "Current:  {} ({} MB)\n\n",
        comparison.current.path.display(),
        comparison.current.size_mb
    ));
    out.push_str(&format!(
        "Size difference: {:+.2} MB ({:+.1}%)\n\n",
        comparison.size_diff_mb, comparison.size_diff_percent
    ));
    out.push_str("To compare in detail:\n");
    for step in &comparison.manual_steps {
        out.push_str(&format!("  {}\n", step));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::{Run, Table, TraceBundleInfo, UnparsedToc};
    use crate::insight::analyze;
    use std::path::PathBuf;

    fn info(schemas: &[&str]) -> TraceBundleInfo {
        let run = Run {
            number: Some("1".to_string()),
            tables: schemas
                .iter()
                .map(|s| Table {
                    schema: Some(s.to_string()),
                    target_pid: None,
                })
                .collect(),
        };
        TraceBundleInfo::new("app.trace", 1024 * 1024, vec![run])
    }

    #[test]
    fn test_render_toc() {
        let rendered = render_toc(&TocExport::Parsed(info(&["time-profile", "kdebug"])));
        assert!(rendered.contains("Trace: app.trace"));
        assert!(rendered.contains("Runs: 1"));
        assert!(rendered.contains("  Run 1:\n    - time-profile\n    - kdebug\n"));
    }

    #[test]
    fn test_render_unparsed_toc_is_raw() {
        let export = TocExport::Unparsed(UnparsedToc {
            path: PathBuf::from("app.trace"),
            size_bytes: 0,
            raw: "not xml".to_string(),
            parse_error: "unexpected text".to_string(),
        });
        assert_eq!(render_toc(&export), "not xml");
    }

    #[test]
    fn test_render_analysis_truncates_schema_list() {
        let schemas: Vec<String> = (0..13).map(|i| format!("schema-{}", i)).collect();
        let names: Vec<&str> = schemas.iter().map(String::as_str).collect();
        let rendered = render_analysis(&analyze(&info(&names), false));
        assert!(rendered.contains("  - schema-9\n"));
        assert!(!rendered.contains("  - schema-10\n"));
        assert!(rendered.contains("... and 3 more"));
    }

    #[test]
    fn test_render_export_written() {
        let result = ExportResult::Written {
            output: PathBuf::from("out.xml"),
        };
        assert_eq!(render_export(&result), "Exported to: out.xml");
    }

    #[test]
    fn test_render_templates() {
        let rendered = render_templates(&["Leaks".to_string(), "Allocations".to_string()]);
        assert!(rendered.starts_with("Available templates (2):"));
        assert!(rendered.contains("  Leaks\n"));
    }
}
