use anyhow::Context;
use clap::Parser;
use parser::{process, write_output, Filters};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Input is always read from this file in the current working directory.
const LOG_FILE: &str = "logs.txt";
const DEFAULT_OUT: &str = "filtered_logs.txt";

#[derive(Parser, Debug)]
#[command(
    name = "logsift",
    version,
    about = "Filter pipe-delimited service logs by level and/or service"
)]
struct Cli {
    /// Filter by level (INFO/WARN/ERROR)
    #[arg(long)]
    level: Option<String>,

    /// Filter by exact service name (case-sensitive)
    #[arg(long)]
    service: Option<String>,

    /// Output filename
    #[arg(long, default_value = DEFAULT_OUT)]
    out: PathBuf,
}

#[derive(Debug, PartialEq, Eq)]
struct Summary {
    valid_scanned: usize,
    lines_written: usize,
    out_name: String,
}

/// Run one filtering pass with explicit paths so tests can inject their own.
///
/// Returns None when the input file is absent; nothing is written in that
/// case and any existing file at `out` is left untouched.
fn run(input: &Path, out: &Path, filters: &Filters) -> anyhow::Result<Option<Summary>> {
    if !input.exists() {
        return Ok(None);
    }

    let file = File::open(input)
        .with_context(|| format!("failed to open {}", input.display()))?;
    let report = process(BufReader::new(file), filters)?;

    write_output(out, &report.lines)?;

    let out_name = out
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| out.display().to_string());

    Ok(Some(Summary {
        valid_scanned: report.valid_scanned,
        lines_written: report.lines_written(),
        out_name,
    }))
}

fn init_tracing() {
    // Diagnostics go to stderr; stdout carries only the summary.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "logsift=warn,parser=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let filters = Filters::new(cli.level.as_deref(), cli.service.as_deref());
    tracing::debug!(?filters, out = %cli.out.display(), "starting filter pass");

    match run(Path::new(LOG_FILE), &cli.out, &filters)? {
        Some(summary) => {
            println!("Valid lines scanned: {}", summary.valid_scanned);
            println!("Lines written: {}", summary.lines_written);
            println!("Output file: {}", summary.out_name);
        }
        None => {
            println!("ERROR: Cannot find {LOG_FILE}. Put logs.txt in the current directory.");
        }
    }

    Ok(())
}
