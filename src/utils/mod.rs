//! Utility modules for configuration, error handling, and bundle files.

pub mod bundle;
pub mod config;
pub mod error;

// Re-export commonly used error types for convenience
pub use config::ToolchainConfig;
pub use error::TraceError;
