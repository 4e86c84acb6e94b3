//! Rendering of command results.
//!
//! Every command has two modes:
//! - JSON: one pretty-printed document on stdout
//! - Text: human-readable report on stdout, diagnostics on stderr

pub mod json;
pub mod text;

// Re-export main functions
pub use json::{error_payload, print_json, to_json};
pub use text::{
    render_analysis, render_comparison, render_export, render_recording, render_templates,
    render_toc,
};
