//! Invocation of the external toolchain (`xcrun xctrace`, `pgrep`).
//!
//! Every external program goes through [`ToolRunner`] so the pipeline
//! can be exercised against a fake in tests.

mod interrupt;
pub mod runner;
pub mod types;

pub use runner::{SystemRunner, ToolRunner};
pub use types::{Invocation, ToolOutput};
