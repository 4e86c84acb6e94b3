//! xctrace-studio CLI
//!
//! Records Instruments traces, extracts their table of contents and
//! summarizes what kind of performance data they hold.

use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use xctrace_studio::commands::{
    display_version, execute_analyze, execute_attach, execute_compare, execute_extract,
    execute_record, execute_templates, AnalyzeArgs, AttachArgs, CompareArgs, ExtractArgs,
    render_error, RecordArgs,
};
use xctrace_studio::pipeline::Pipeline;
use xctrace_studio::toolchain::SystemRunner;
use xctrace_studio::utils::config::{
    ToolchainConfig, DEFAULT_ATTACH_TEMPLATE, DEFAULT_ATTACH_TIME_LIMIT, DEFAULT_LAUNCHER,
    LAUNCHER_ENV,
};

/// xctrace-studio - record and summarize Instruments traces
#[derive(Parser, Debug)]
#[command(name = "xctrace-studio")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Path to the xcrun launcher
    #[arg(long, global = true, env = LAUNCHER_ENV, default_value = DEFAULT_LAUNCHER)]
    xcrun: String,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Record a trace (all processes unless --attach or a launch command is given)
    #[command(after_help = "Examples:\n  \
        xctrace-studio record -t 'Time Profiler' --attach MyApp --time-limit 10s\n  \
        xctrace-studio record -t Allocations --all-processes --time-limit 30s\n  \
        xctrace-studio record -t 'App Launch' -- /path/to/MyApp.app")]
    Record {
        /// Instruments template name
        #[arg(short, long)]
        template: String,

        /// Output .trace path (default: <template>_<timestamp>.trace)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Directory for synthesized output names
        #[arg(long)]
        output_dir: Option<PathBuf>,

        /// Attach to a process by name or PID
        #[arg(short, long)]
        attach: Option<String>,

        /// Record all processes
        #[arg(long)]
        all_processes: bool,

        /// Recording time limit (e.g. 10s, 5m)
        #[arg(long)]
        time_limit: Option<String>,

        /// Device name or UDID
        #[arg(long)]
        device: Option<String>,

        /// Summarize the trace once it is saved
        #[arg(long)]
        analyze: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Command to launch under the profiler (after `--`)
        #[arg(last = true)]
        launch: Vec<String>,
    },

    /// Attach to a running process and record a trace
    Attach {
        /// Process name to attach to
        #[arg(short, long, required_unless_present = "pid")]
        name: Option<String>,

        /// Process ID to attach to
        #[arg(short, long)]
        pid: Option<u32>,

        /// Instruments template
        #[arg(short, long, default_value = DEFAULT_ATTACH_TEMPLATE)]
        template: String,

        /// Recording time limit
        #[arg(long, default_value = DEFAULT_ATTACH_TIME_LIMIT)]
        time_limit: String,

        /// Output .trace path
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Directory for synthesized output names
        #[arg(long)]
        output_dir: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Export a trace's table of contents or data selected by XPath
    Extract {
        /// Input .trace bundle
        #[arg(short, long)]
        input: PathBuf,

        /// Export the table of contents (default)
        #[arg(long, conflicts_with = "xpath")]
        toc: bool,

        /// XPath query for specific data
        #[arg(long)]
        xpath: Option<String>,

        /// Write XPath results to this file instead of stdout
        #[arg(short, long, requires = "xpath")]
        output: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Summarize the kinds of data a trace holds
    Analyze {
        /// Input .trace bundle
        #[arg(short, long)]
        input: PathBuf,

        /// Include all schemas and a per-run breakdown
        #[arg(short, long)]
        verbose: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List available recording templates
    Templates {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compare two traces (size only; detailed comparison happens in Instruments)
    Compare {
        /// Baseline .trace bundle
        #[arg(short, long)]
        baseline: PathBuf,

        /// Current .trace bundle
        #[arg(short, long)]
        current: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Display version information
    Version,
}

impl Commands {
    fn json(&self) -> bool {
        match self {
            Commands::Record { json, .. }
            | Commands::Attach { json, .. }
            | Commands::Extract { json, .. }
            | Commands::Analyze { json, .. }
            | Commands::Templates { json }
            | Commands::Compare { json, .. } => *json,
            Commands::Version => false,
        }
    }
}

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let json = cli.command.json();
    let pipeline = Pipeline::new(
        SystemRunner::new(),
        ToolchainConfig::default().with_launcher(cli.xcrun),
    );

    if let Err(e) = run(cli.command, &pipeline) {
        if let Some(message) = render_error(&e, json) {
            if json {
                println!("{}", message);
            } else {
                eprintln!("{}", message);
            }
        }
        std::process::exit(1);
    }
}

fn run(command: Commands, pipeline: &Pipeline<SystemRunner>) -> anyhow::Result<()> {
    match command {
        Commands::Record {
            template,
            output,
            output_dir,
            attach,
            all_processes,
            time_limit,
            device,
            analyze,
            json,
            launch,
        } => execute_record(
            RecordArgs {
                template,
                output,
                output_dir,
                attach,
                launch,
                all_processes,
                time_limit,
                device,
                analyze,
                json,
            },
            pipeline,
        ),

        Commands::Attach {
            name,
            pid,
            template,
            time_limit,
            output,
            output_dir,
            json,
        } => execute_attach(
            AttachArgs {
                name,
                pid,
                template,
                time_limit: Some(time_limit),
                output,
                output_dir,
                json,
            },
            pipeline,
        ),

        Commands::Extract {
            input,
            toc,
            xpath,
            output,
            json,
        } => execute_extract(
            ExtractArgs {
                input,
                toc,
                xpath,
                output,
                json,
            },
            pipeline,
        ),

        Commands::Analyze {
            input,
            verbose,
            json,
        } => execute_analyze(
            AnalyzeArgs {
                input,
                verbose,
                json,
            },
            pipeline,
        ),

        Commands::Templates { json } => execute_templates(json, pipeline),

        Commands::Compare {
            baseline,
            current,
            json,
        } => execute_compare(CompareArgs {
            baseline,
            current,
            json,
        }),

        Commands::Version => {
            display_version();
            Ok(())
        }
    }
}
