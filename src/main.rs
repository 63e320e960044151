//! Superscalar Out-of-Order Pipeline Simulator CLI.
//!
//! Reads a dynamic instruction trace and three capacity/width parameters,
//! runs the pipeline to completion, and prints a header, one line per
//! retired instruction, and a final summary to standard output.
//!
//! # Usage
//!
//! ```text
//! ooo-pipeline-sim <rob_size> <iq_size> <width> <trace_file>
//! ```

use clap::Parser;
use std::io::{self, Write};
use std::process;

extern crate ooo_pipeline_sim;

use ooo_pipeline_sim::common::SimError;
use ooo_pipeline_sim::config::PipelineConfig;
use ooo_pipeline_sim::core::Pipeline;
use ooo_pipeline_sim::trace::FileTraceSource;

/// Positional arguments for the pipeline simulator: ROB size, issue-queue
/// size, pipeline width, and the trace file to replay.
#[derive(Parser, Debug)]
#[command(author, version, about = "Superscalar Out-of-Order Pipeline Simulator")]
struct Args {
    rob_size: i64,
    iq_size: i64,
    width: i64,
    trace_file: String,

    /// Print per-cycle stage-occupancy diagnostics to stderr.
    #[arg(long)]
    verbose: bool,
}

/// Runs the simulator end to end; returns `Err` on any fatal condition so
/// `main` can render one consistent diagnostic and exit code.
fn run() -> Result<(), SimError> {
    let args = Args::parse();
    let config = PipelineConfig::new(args.rob_size, args.iq_size, args.width)?;

    let argv: Vec<String> = std::env::args().collect();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "# === Simulator Command =========").map_err(SimError::Io)?;
    writeln!(out, "# {}", argv.join(" ")).map_err(SimError::Io)?;
    writeln!(out, "# === Processor Configuration ===").map_err(SimError::Io)?;
    writeln!(out, "# ROB_SIZE = {}", config.rob_size).map_err(SimError::Io)?;
    writeln!(out, "# IQ_SIZE  = {}", config.iq_size).map_err(SimError::Io)?;
    writeln!(out, "# WIDTH    = {}", config.width).map_err(SimError::Io)?;

    let mut trace = FileTraceSource::open(&args.trace_file)?;
    let mut pipeline = Pipeline::new(config);
    pipeline.verbose = args.verbose;
    pipeline.run(&mut trace, &mut out)?;

    pipeline.stats.print_summary(&mut out)?;
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        process::exit(1);
    }
}
