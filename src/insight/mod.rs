//! Schema -> insight mapping for trace bundles.
//!
//! Turns the schema names of a bundle into a short list of human hints
//! about what kind of performance data it holds.

pub mod catalog;
pub mod engine;

// Re-export main types
pub use catalog::{InsightRule, DEFAULT_CATALOG};
pub use engine::{analyze, InsightEngine, InsightReport, RunDetail, VerboseDetail};
