//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod analyze;
pub mod attach;
pub mod compare;
pub mod extract;
pub mod models;
pub mod record;
pub mod templates;
pub mod utils;

// Re-export main command functions
pub use analyze::execute_analyze;
pub use attach::{execute_attach, validate_attach_args};
pub use compare::execute_compare;
pub use extract::{execute_extract, validate_extract_args};
pub use models::{AnalyzeArgs, AttachArgs, CompareArgs, ExtractArgs, RecordArgs};
pub use record::{execute_record, validate_record_args};
pub use templates::execute_templates;
pub use utils::{display_version, render_error, RecordingFailed};
