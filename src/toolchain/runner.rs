//! Process runner for the external toolchain.

use super::interrupt::InterruptGuard;
use super::types::{Invocation, ToolOutput};
use crate::utils::error::TraceError;
use log::{debug, info};
use std::io::ErrorKind;
use std::process::{Command, Stdio};

/// Runs an external program to completion.
///
/// Implementations must block until the program exits or is interrupted.
pub trait ToolRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<Invocation, TraceError>;
}

impl<R: ToolRunner + ?Sized> ToolRunner for &R {
    fn run(&self, program: &str, args: &[String]) -> Result<Invocation, TraceError> {
        (**self).run(program, args)
    }
}

/// Runner backed by `std::process::Command`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        SystemRunner
    }
}

impl ToolRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<Invocation, TraceError> {
        debug!("Running: {} {}", program, args.join(" "));

        let guard = InterruptGuard::install();

        let child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => TraceError::ToolMissing(program.to_string()),
                _ => TraceError::Io(e),
            })?;

        let output = child.wait_with_output()?;

        if guard.interrupted() {
            info!("Interrupt received while {} was running", program);
        }

        // No exit code means the process was terminated by a signal
        let Some(code) = output.status.code() else {
            debug!("{} terminated by signal", program);
            return Ok(Invocation::Interrupted);
        };

        Ok(Invocation::Finished(ToolOutput {
            code,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }))
    }
}
