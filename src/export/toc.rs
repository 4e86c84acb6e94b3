//! Parser for `xctrace export --toc` XML.
//!
//! Only the structure is read: every `run` element (attribute `number`)
//! and every `table` element below it (attributes `schema`, `target-pid`).

use super::schema::{Run, Table};
use log::debug;

/// Parse a TOC document into runs, in document order
pub fn parse_toc_xml(xml: &str) -> Result<Vec<Run>, roxmltree::Error> {
    let document = roxmltree::Document::parse(xml)?;

    let runs: Vec<Run> = document
        .descendants()
        .filter(|node| node.has_tag_name("run"))
        .map(|run| Run {
            number: run.attribute("number").map(str::to_string),
            tables: run
                .descendants()
                .filter(|node| node.has_tag_name("table"))
                .map(|table| Table {
                    schema: table.attribute("schema").map(str::to_string),
                    target_pid: table.attribute("target-pid").map(str::to_string),
                })
                .collect(),
        })
        .collect();

    debug!("Parsed TOC: {} runs", runs.len());
    Ok(runs)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOC: &str = r#"<?xml version="1.0"?>
<trace-toc>
  <run number="1">
    <info><target><device platform="macOS"/></target></info>
    <data>
      <table schema="time-profile" target-pid="ALL"/>
      <table schema="kdebug-signpost"/>
    </data>
  </run>
  <run number="2">
    <data>
      <table schema="time-sample" target-pid="311"/>
    </data>
  </run>
</trace-toc>"#;

    #[test]
    fn test_parse_runs_and_tables() {
        let runs = parse_toc_xml(TOC).unwrap();
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].number.as_deref(), Some("1"));
        assert_eq!(runs[0].tables.len(), 2);
        assert_eq!(runs[0].tables[0].schema.as_deref(), Some("time-profile"));
        assert_eq!(runs[0].tables[0].target_pid.as_deref(), Some("ALL"));
        assert_eq!(runs[0].tables[1].target_pid, None);
        assert_eq!(runs[1].tables[0].target_pid.as_deref(), Some("311"));
    }

    #[test]
    fn test_parse_empty_toc() {
        let runs = parse_toc_xml("<trace-toc/>").unwrap();
        assert!(runs.is_empty());
    }

    #[test]
    fn test_parse_malformed() {
        assert!(parse_toc_xml("<trace-toc><run number=\"1\">").is_err());
        assert!(parse_toc_xml("xctrace: not a trace").is_err());
    }
}
