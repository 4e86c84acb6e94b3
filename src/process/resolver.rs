//! Resolves a process name through the host process table.
//!
//! Matching (substring, prefix) is whatever the query tool does. When
//! several processes match, the first listed one wins.

use crate::toolchain::{Invocation, ToolRunner};
use crate::utils::error::TraceError;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// A process picked by name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRef {
    pub pid: u32,
    pub name: String,

    /// Number of processes the query matched; the first one was taken
    pub match_count: usize,
}

impl ProcessRef {
    /// True when the pick was made among several candidates
    pub fn is_ambiguous(&self) -> bool {
        self.match_count > 1
    }
}

/// Name resolver backed by `pgrep -l`
pub struct ProcessResolver<R> {
    runner: R,
    program: String,
}

impl<R: ToolRunner> ProcessResolver<R> {
    pub fn new(runner: R, program: impl Into<String>) -> Self {
        Self {
            runner,
            program: program.into(),
        }
    }

    /// Resolve `name` to the first matching process
    ///
    /// # Returns
    /// `Ok(None)` when nothing matches or the query tool is unavailable
    ///
    /// # Errors
    /// * `TraceError::InvalidRequest` - blank name
    pub fn resolve(&self, name: &str) -> Result<Option<ProcessRef>, TraceError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TraceError::InvalidRequest(
                "process name cannot be empty".to_string(),
            ));
        }

        let args = vec!["-l".to_string(), name.to_string()];
        let output = match self.runner.run(&self.program, &args) {
            Ok(Invocation::Finished(output)) if output.success() => output,
            Ok(Invocation::Finished(output)) => {
                debug!("{} found no match for {}: {}", self.program, name, output.diagnostic());
                return Ok(None);
            }
            Ok(Invocation::Interrupted) => {
                debug!("{} interrupted", self.program);
                return Ok(None);
            }
            Err(e) => {
                warn!("Process lookup unavailable: {}", e);
                return Ok(None);
            }
        };

        let lines: Vec<&str> = output
            .stdout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        let Some(first) = lines.first() else {
            return Ok(None);
        };

        match parse_listing_line(first) {
            Ok((pid, process_name)) => {
                if lines.len() > 1 {
                    warn!(
                        "{} processes match '{}', using the first: {} (PID {})",
                        lines.len(),
                        name,
                        process_name,
                        pid
                    );
                }
                Ok(Some(ProcessRef {
                    pid,
                    name: process_name,
                    match_count: lines.len(),
                }))
            }
            Err(e) => {
                warn!("{}", e);
                Ok(None)
            }
        }
    }
}

/// Parse one `<pid> <name>` line of `pgrep -l` output
pub fn parse_listing_line(line: &str) -> Result<(u32, String), TraceError> {
    let malformed = || TraceError::MalformedOutput(format!("unexpected process listing line: {line}"));

    let (pid, name) = line.trim().split_once(char::is_whitespace).ok_or_else(malformed)?;
    let pid = pid.parse::<u32>().map_err(|_| malformed())?;
    let name = name.trim();
    if name.is_empty() {
        return Err(malformed());
    }

    Ok((pid, name.to_string()))
}
