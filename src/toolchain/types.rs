//! Outcome types for external tool invocations.

/// Captured result of a tool that ran to an exit status
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolOutput {
    /// Exit code
    pub code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl ToolOutput {
    pub fn success(&self) -> bool {
        self.code == 0
    }

    /// Stderr, or a generic note when the tool printed nothing
    pub fn diagnostic(&self) -> String {
        let stderr = self.stderr.trim();
        if stderr.is_empty() {
            format!("exited with status {}", self.code)
        } else {
            stderr.to_string()
        }
    }
}

/// How an external invocation ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// The tool exited on its own (any exit code)
    Finished(ToolOutput),

    /// The tool was stopped by a signal before an exit status was captured
    Interrupted,
}

impl Invocation {
    /// Output of a finished tool, `None` if interrupted
    pub fn output(&self) -> Option<&ToolOutput> {
        match self {
            Invocation::Finished(output) => Some(output),
            Invocation::Interrupted => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_prefers_stderr() {
        let output = ToolOutput {
            code: 1,
            stdout: String::new(),
            stderr: "  no such template\n".to_string(),
        };
        assert_eq!(output.diagnostic(), "no such template");
    }

    #[test]
    fn test_diagnostic_without_stderr() {
        let output = ToolOutput {
            code: 3,
            ..Default::default()
        };
        assert_eq!(output.diagnostic(), "exited with status 3");
        assert!(!output.success());
    }

    #[test]
    fn test_interrupted_has_no_output() {
        assert!(Invocation::Interrupted.output().is_none());
    }
}
