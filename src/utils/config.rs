//! Configuration and constants for the CLI.

/// Launcher used to reach the Xcode toolchain
pub const DEFAULT_LAUNCHER: &str = "xcrun";

/// Profiler executable, run through the launcher
pub const XCTRACE: &str = "xctrace";

/// Host process query used for name -> pid resolution
pub const PROCESS_QUERY: &str = "pgrep";

/// Environment variable overriding the launcher path
pub const LAUNCHER_ENV: &str = "XCTRACE_STUDIO_XCRUN";

/// Extension of bundles written by `xctrace record`
pub const BUNDLE_EXTENSION: &str = "trace";

/// Timestamp suffix of synthesized output names (second granularity)
pub const OUTPUT_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Defaults for the attach command
pub const DEFAULT_ATTACH_TEMPLATE: &str = "Time Profiler";
pub const DEFAULT_ATTACH_TIME_LIMIT: &str = "10s";

/// Current JSON report schema version
pub const REPORT_VERSION: &str = "1.0.0";

pub const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Where external tools are found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolchainConfig {
    /// Launcher program (normally `xcrun`)
    pub launcher: String,

    /// Process listing program (normally `pgrep`)
    pub process_query: String,
}

impl Default for ToolchainConfig {
    fn default() -> Self {
        Self {
            launcher: DEFAULT_LAUNCHER.to_string(),
            process_query: PROCESS_QUERY.to_string(),
        }
    }
}

impl ToolchainConfig {
    pub fn with_launcher(mut self, launcher: impl Into<String>) -> Self {
        self.launcher = launcher.into();
        self
    }
}

/// Convert a byte count to megabytes rounded to two decimals
pub fn bytes_to_mb(bytes: u64) -> f64 {
    (bytes as f64 / BYTES_PER_MB * 100.0).round() / 100.0
}
