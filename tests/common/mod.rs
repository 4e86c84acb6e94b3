//! Shared fake toolchain for integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::path::PathBuf;
use xctrace_studio::toolchain::{Invocation, ToolOutput, ToolRunner};
use xctrace_studio::utils::error::TraceError;

type Responder = Box<dyn Fn(&str, &[String]) -> Result<Invocation, TraceError>>;

/// Records every invocation and answers with a closure
pub struct FakeRunner {
    pub calls: RefCell<Vec<(String, Vec<String>)>>,
    respond: Responder,
}

impl FakeRunner {
    pub fn new(
        respond: impl Fn(&str, &[String]) -> Result<Invocation, TraceError> + 'static,
    ) -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            respond: Box::new(respond),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    pub fn last_args(&self) -> Vec<String> {
        self.calls
            .borrow()
            .last()
            .map(|(_, args)| args.clone())
            .unwrap_or_default()
    }
}

impl ToolRunner for FakeRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<Invocation, TraceError> {
        self.calls
            .borrow_mut()
            .push((program.to_string(), args.to_vec()));
        (self.respond)(program, args)
    }
}

pub fn finished(code: i32, stdout: &str, stderr: &str) -> Invocation {
    Invocation::Finished(ToolOutput {
        code,
        stdout: stdout.to_string(),
        stderr: stderr.to_string(),
    })
}

pub fn ok(stdout: &str) -> Invocation {
    finished(0, stdout, "")
}

/// Value following `flag` in an argument list
pub fn flag_value(args: &[String], flag: &str) -> Option<String> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

/// Path passed as `--output`
pub fn output_arg(args: &[String]) -> PathBuf {
    PathBuf::from(flag_value(args, "--output").expect("--output present"))
}

pub fn is_record(args: &[String]) -> bool {
    args.len() > 1 && args[0] == "xctrace" && args[1] == "record"
}

pub fn is_toc_export(args: &[String]) -> bool {
    args.len() > 1 && args[0] == "xctrace" && args[1] == "export" && args.iter().any(|a| a == "--toc")
}

pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub const TOC_XML: &str = r#"<?xml version="1.0"?>
<trace-toc>
  <run number="1">
    <data>
      <table schema="time-profile" target-pid="SINGLE"/>
      <table schema="os-signpost"/>
      <table/>
    </data>
  </run>
  <run number="2">
    <data>
      <table schema="time-profile"/>
      <table schema="kdebug-strings" target-pid="311"/>
    </data>
  </run>
  <run number="3">
    <data>
      <table schema="custom-xyz"/>
      <table schema="os-signpost"/>
    </data>
  </run>
</trace-toc>"#;
