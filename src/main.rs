//! basecount - Terminal DNA nucleotide composition viewer
//!
//! Counts the A/T/G/C composition of a query DNA sequence and shows it
//! as text, a table, and a bar chart.
//!
//! ## Usage
//!
//! ```bash
//! basecount                      # interactive page, default query
//! basecount query.txt            # interactive page seeded from a file
//! basecount query.txt -o -       # plain-text report to stdout
//! basecount -o report.txt        # report for the default query
//! ```
//!
//! ## Query format
//!
//! The first line is a header/label (conventionally starting with ">") and
//! is ignored; the remaining lines are concatenated into the sequence.

// Use jemalloc for better memory management (returns memory to OS)
#[cfg(not(windows))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use basecount::controller::run_app;
use basecount::model::AppState;
use basecount::report::render_report;
use basecount::sequence::{load_query_file, DEFAULT_QUERY};

/// Runs CLI mode: build the report and write it to the output target.
fn run_cli_mode(raw: &str, output: &str) -> Result<()> {
    let report = render_report(raw);

    if output == "-" {
        // Write to stdout
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        handle.write_all(report.as_bytes())?;
    } else {
        // Write to file
        let mut file = std::fs::File::create(output)?;
        file.write_all(report.as_bytes())?;
        eprintln!("Wrote report to {}", output);
    }

    Ok(())
}

/// basecount - count the nucleotide composition of a query DNA sequence
///
/// When run without -o/--output, opens an interactive page with an
/// editable input area, count sentences, a table, and a bar chart.
/// With -o/--output, writes a plain-text report and exits (use "-" for
/// stdout).
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Query file to seed the input (first line is a header; defaults to
    /// the built-in demo query)
    file: Option<PathBuf>,

    /// Output file for a plain-text report (enables CLI mode). Use "-"
    /// for stdout.
    #[arg(short = 'o', long = "output")]
    output: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let raw = match &args.file {
        Some(path) => load_query_file(path)?,
        None => DEFAULT_QUERY.to_string(),
    };

    if let Some(output) = args.output {
        // CLI mode: one pipeline pass, report to file/stdout
        run_cli_mode(&raw, &output)?;
    } else {
        // TUI mode
        run_app(AppState::new(raw))?;
    }

    Ok(())
}
