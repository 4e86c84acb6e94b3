//! Trace bundle extraction through `xctrace export`.
//!
//! This module handles:
//! - Table-of-contents export and parsing into runs and tables
//! - Degrading to raw text when the TOC is not valid XML
//! - Scoped (XPath) exports, inline or streamed to a file

pub mod extractor;
pub mod schema;
pub mod toc;

// Re-export main types
pub use extractor::TocExtractor;
pub use schema::{ExportResult, Run, SchemaSet, Table, TocExport, TraceBundleInfo, UnparsedToc};
pub use toc::parse_toc_xml;
