//! xctrace-studio
//!
//! Record, extract and summarize Instruments traces from the command
//! line by driving `xcrun xctrace`.
//!
//! The pipeline runs in one direction:
//!
//! ```text
//! CaptureTarget -> Recorder -> bundle -> TocExtractor -> SchemaSet -> InsightEngine -> InsightReport
//! ```
//!
//! Every external program is reached through [`toolchain::ToolRunner`],
//! so each stage can be driven by a fake in tests.
//!
//! ## Getting Started
//!
//! ```bash
//! cargo install xctrace-studio
//! xctrace-studio record -t "Time Profiler" --time-limit 10s --analyze
//! xctrace-studio analyze -i time_profiler_20240309_140509.trace
//! ```

pub mod commands;
pub mod compare;
pub mod export;
pub mod insight;
pub mod output;
pub mod pipeline;
pub mod process;
pub mod record;
pub mod toolchain;
pub mod utils;
