//! Capture target selection.

use serde::{Deserialize, Serialize};

/// What the profiler records. Exactly one variant is active.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CaptureTarget {
    /// Running process, by pid or name
    Attach { identifier: String },

    /// Command line started fresh under the profiler
    Launch {
        command: String,
        arguments: Vec<String>,
    },

    /// System-wide capture
    #[default]
    AllProcesses,
}

impl CaptureTarget {
    /// Pick a target from loosely supplied inputs
    ///
    /// Priority is attach > launch > all processes. Blank identifiers and
    /// empty command lines count as not supplied, and supplying nothing
    /// falls back to all processes.
    pub fn select(attach: Option<String>, launch: Vec<String>) -> Self {
        if let Some(identifier) = attach.filter(|id| !id.trim().is_empty()) {
            return CaptureTarget::Attach { identifier };
        }

        CaptureTarget::launch(launch).unwrap_or(CaptureTarget::AllProcesses)
    }

    /// Launch target from a full command line (`[command, args...]`)
    pub fn launch(command_line: Vec<String>) -> Option<Self> {
        let mut parts = command_line.into_iter();
        let command = parts.next().filter(|c| !c.trim().is_empty())?;
        Some(CaptureTarget::Launch {
            command,
            arguments: parts.collect(),
        })
    }

    /// Profiler flags selecting this target
    ///
    /// A launched command line follows a literal `--` so its own flags are
    /// never read as profiler options.
    pub fn to_args(&self) -> Vec<String> {
        match self {
            CaptureTarget::Attach { identifier } => {
                vec!["--attach".to_string(), identifier.clone()]
            }
            CaptureTarget::Launch { command, arguments } => {
                let mut args = vec!["--launch".to_string(), "--".to_string(), command.clone()];
                args.extend(arguments.iter().cloned());
                args
            }
            CaptureTarget::AllProcesses => vec!["--all-processes".to_string()],
        }
    }

    pub fn describe(&self) -> String {
        match self {
            CaptureTarget::Attach { identifier } => format!("attach to {}", identifier),
            CaptureTarget::Launch { command, arguments } if arguments.is_empty() => {
                format!("launch {}", command)
            }
            CaptureTarget::Launch { command, arguments } => {
                format!("launch {} {}", command, arguments.join(" "))
            }
            CaptureTarget::AllProcesses => "all processes".to_string(),
        }
    }
}
