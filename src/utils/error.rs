//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors raised by the trace pipeline
#[derive(Error, Debug)]
pub enum TraceError {
    #[error("{0} not found (is the Xcode command line toolchain installed?)")]
    ToolMissing(String),

    #[error("{tool} failed: {stderr}")]
    ToolFailed { tool: String, stderr: String },

    #[error("Malformed tool output: {0}")]
    MalformedOutput(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TraceError {
    pub fn tool_failed(tool: impl Into<String>, stderr: impl AsRef<str>) -> Self {
        TraceError::ToolFailed {
            tool: tool.into(),
            stderr: stderr.as_ref().trim().to_string(),
        }
    }
}
