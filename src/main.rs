//! Touch Trace Annotator CLI
//!
//! Prints a recording with a time delta added to every touch event.

use anyhow::Context;
use clap::Parser;
use std::io::{IsTerminal, Write};
use std::path::{Path, PathBuf};
use touch_trace_annotator::{annotate_file, Config, VERSION};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "touch-trace-annotator")]
#[command(version = VERSION)]
#[command(about = "Annotate recorded touch events with the time since the previous event", long_about = None)]
struct Cli {
    /// Recording to annotate (a JSON file with a `touchData` array)
    input: PathBuf,
}

fn main() {
    let cli = Cli::parse();
    init_logging();

    if let Err(e) = run(&cli.input) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

/// Diagnostics go to stderr; stdout carries only the document.
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("warn"))
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}

fn run(input: &Path) -> anyhow::Result<()> {
    let config = Config::default();
    let annotated = annotate_file(input, &config).context("annotation aborted")?;

    let summary = &annotated.summary;
    if !summary.is_monotonic() {
        tracing::warn!(
            negative_deltas = summary.negative_deltas,
            "timestamps are not monotonic; negative deltas were kept"
        );
    }
    tracing::debug!(
        events = summary.event_count,
        duration = ?summary.duration(),
        "annotation complete"
    );

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", annotated.text).context("failed to write to stdout")?;
    stdout.flush().context("failed to write to stdout")?;
    Ok(())
}
