mod common;

use common::{finished, is_record, is_toc_export, ok, output_arg, FakeRunner, TOC_XML};
use pretty_assertions::assert_eq;
use std::fs;
use xctrace_studio::pipeline::Pipeline;
use xctrace_studio::record::{CaptureTarget, RecordingRequest, RecordingResult};
use xctrace_studio::utils::config::ToolchainConfig;
use xctrace_studio::utils::error::TraceError;

fn pipeline(runner: &FakeRunner) -> Pipeline<&FakeRunner> {
    Pipeline::new(runner, ToolchainConfig::default())
}

#[test]
fn test_record_and_analyze_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let runner = FakeRunner::new(|_, args| {
        if is_record(args) {
            fs::write(output_arg(args), vec![0u8; 1024 * 1024]).unwrap();
            Ok(ok(""))
        } else if is_toc_export(args) {
            Ok(ok(TOC_XML))
        } else {
            panic!("unexpected invocation: {:?}", args);
        }
    });
    let request = RecordingRequest::new("Time Profiler")
        .with_target(CaptureTarget::AllProcesses)
        .with_time_limit(Some("5s".to_string()))
        .with_quiet(true);

    let report = pipeline(&runner)
        .record_and_analyze(&request, Some(dir.path()), false)
        .unwrap();

    assert!(report.success);
    assert_eq!(report.template, "Time Profiler");
    let analysis = report.analysis.expect("analysis attached");
    assert_eq!(analysis.runs, 3);
    assert_eq!(analysis.size_mb, 1.0);
    assert_eq!(
        analysis.insights,
        vec![
            "CPU profiling data available - look for hot functions",
            "OS-level signposts - system performance data",
            "Kernel debug data - low-level system tracing",
        ]
    );
    assert_eq!(runner.call_count(), 2);
}

#[test]
fn test_saved_bundle_survives_failed_analysis() {
    let dir = tempfile::tempdir().unwrap();
    let runner = FakeRunner::new(|_, args| {
        if is_record(args) {
            fs::write(output_arg(args), vec![0u8; 64]).unwrap();
            Ok(ok(""))
        } else {
            Ok(finished(1, "", "Document is corrupt"))
        }
    });
    let request = RecordingRequest::new("Leaks")
        .with_output(Some(dir.path().join("leaks.trace")))
        .with_quiet(true);

    let report = pipeline(&runner)
        .record_and_analyze(&request, None, false)
        .unwrap();

    assert!(report.success);
    assert_eq!(
        report.result,
        RecordingResult::Saved {
            output: dir.path().join("leaks.trace"),
            size_bytes: 64,
        }
    );
    assert!(report.analysis.is_none());
    assert_eq!(
        report.analysis_error.as_deref(),
        Some("xctrace export failed: Document is corrupt")
    );

    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["status"], "saved");
    assert_eq!(
        value["output"],
        dir.path().join("leaks.trace").display().to_string()
    );
    assert!(value.get("analysis").is_none());
}

#[test]
fn test_failed_recording_skips_analysis() {
    let dir = tempfile::tempdir().unwrap();
    let runner = FakeRunner::new(|_, _| Ok(finished(1, "", "Device locked")));
    let request = RecordingRequest::new("Leaks").with_quiet(true);

    let report = pipeline(&runner)
        .record_and_analyze(&request, Some(dir.path()), false)
        .unwrap();

    assert!(!report.success);
    assert_eq!(
        report.result,
        RecordingResult::Failed {
            error: "Device locked".to_string()
        }
    );
    assert!(report.analysis.is_none());
    assert_eq!(runner.call_count(), 1);
}

#[test]
fn test_report_json_shape() {
    let dir = tempfile::tempdir().unwrap();
    let runner = FakeRunner::new(|_, args| {
        if is_record(args) {
            fs::write(output_arg(args), b"x").unwrap();
        }
        Ok(ok(""))
    });
    let request = RecordingRequest::new("Time Profiler").with_quiet(true);

    let report = pipeline(&runner)
        .record_and_analyze(&request, Some(dir.path()), false)
        .unwrap();
    let value = serde_json::to_value(&report).unwrap();

    assert_eq!(value["version"], "1.0.0");
    assert!(value["generated_at"].as_str().is_some());
    assert_eq!(value["success"], true);
    assert_eq!(value["status"], "saved");
    assert_eq!(value["size_bytes"], 1);
    assert!(value.get("process").is_none());
    assert!(value.get("analysis_error").is_none());
    // empty TOC output is analysed as a bundle without runs
    assert_eq!(value["analysis"]["runs"], 0);
}

#[test]
fn test_analyze_malformed_toc_degrades_to_fallback() {
    let dir = tempfile::tempdir().unwrap();
    let bundle = dir.path().join("broken.trace");
    fs::create_dir(&bundle).unwrap();
    fs::write(bundle.join("data"), vec![0u8; 10]).unwrap();
    let runner = FakeRunner::new(|_, _| Ok(ok("not xml at all <")));

    let report = pipeline(&runner).analyze_bundle(&bundle, false).unwrap();

    assert_eq!(report.runs, 0);
    assert_eq!(report.size_bytes, 10);
    assert!(report.available_data.is_empty());
    assert_eq!(
        report.insights,
        vec!["Trace contains 0 data tables. Open in Instruments.app for detailed analysis."]
    );
}

#[test]
fn test_analyze_missing_bundle() {
    let dir = tempfile::tempdir().unwrap();
    let runner = FakeRunner::new(|_, _| Ok(ok(TOC_XML)));

    let err = pipeline(&runner)
        .analyze_bundle(&dir.path().join("nope.trace"), false)
        .unwrap_err();

    assert!(matches!(err, TraceError::NotFound(_)));
}

#[test]
fn test_numeric_identifier_skips_lookup() {
    let runner = FakeRunner::new(|_, _| panic!("no lookup expected"));

    let (identifier, process) = pipeline(&runner).resolve_attach_identifier("1234").unwrap();

    assert_eq!(identifier, "1234");
    assert_eq!(process, None);
    assert_eq!(runner.call_count(), 0);
}

#[test]
fn test_name_resolves_to_first_match() {
    let runner = FakeRunner::new(|program, args| {
        assert_eq!(program, "pgrep");
        assert_eq!(args, ["-l", "Safari"]);
        Ok(ok("4242 Safari\n4243 Safari Helper\n"))
    });

    let (identifier, process) = pipeline(&runner).resolve_attach_identifier("Safari").unwrap();

    assert_eq!(identifier, "4242");
    let process = process.unwrap();
    assert_eq!(process.name, "Safari");
    assert_eq!(process.match_count, 2);
    assert!(process.is_ambiguous());
}

#[test]
fn test_unmatched_name_passes_through() {
    let runner = FakeRunner::new(|_, _| Ok(finished(1, "", "")));

    let (identifier, process) = pipeline(&runner)
        .resolve_attach_identifier("NoSuchApp")
        .unwrap();

    assert_eq!(identifier, "NoSuchApp");
    assert_eq!(process, None);
}

#[test]
fn test_resolver_tolerates_missing_tool() {
    let runner = FakeRunner::new(|program, _| Err(TraceError::ToolMissing(program.to_string())));

    assert_eq!(pipeline(&runner).resolve_process("Finder").unwrap(), None);
}

#[test]
fn test_resolver_rejects_blank_name() {
    let runner = FakeRunner::new(|_, _| Ok(ok("1 launchd")));

    let err = pipeline(&runner).resolve_process("   ").unwrap_err();

    assert!(matches!(err, TraceError::InvalidRequest(_)));
    assert_eq!(runner.call_count(), 0);
}

#[test]
fn test_list_templates() {
    let runner = FakeRunner::new(|_, args| {
        assert_eq!(args, ["xctrace", "list", "templates"]);
        Ok(ok("== Standard Templates ==\nAllocations\nTime Profiler\n"))
    });

    let templates = pipeline(&runner).list_templates().unwrap();

    assert_eq!(templates, vec!["Allocations", "Time Profiler"]);
}

#[test]
fn test_list_templates_failure() {
    let runner = FakeRunner::new(|_, _| Ok(finished(72, "", "")));

    let err = pipeline(&runner).list_templates().unwrap_err();

    assert!(err.to_string().contains("exited with status 72"));
}
