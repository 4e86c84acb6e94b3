//! Recording lifecycle: target selection, `xctrace record` invocation,
//! and classification of the outcome.
//!
//! This module handles:
//! - Choosing one capture target (attach > launch > all processes)
//! - Synthesizing a timestamped output name
//! - Building the profiler command line
//! - Deciding Saved/Failed from the filesystem, not the exit code

pub mod recorder;
pub mod request;
pub mod target;

// Re-export main types
pub use recorder::{build_record_args, Recorder, RecordingResult};
pub use request::{default_output_name, slug, RecordingRequest};
pub use target::CaptureTarget;
