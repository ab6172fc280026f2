use anyhow::{Context, Result};
use clap::Parser;
use quake_log_parser::{create_json_file, process_files_in_parallel, write_json, ErrorPolicy};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Summarizes kills per match from Quake 3 Arena server logs as JSON.
#[derive(Parser, Debug)]
#[command(name = "quake-log-parser", version, about, long_about = None)]
struct Cli {
    /// Server log files to parse.
    #[arg(default_value = "input/qgames.log")]
    inputs: Vec<PathBuf>,

    /// Number of files parsed at once.
    #[arg(short, long, default_value_t = 1)]
    threads: usize,

    /// Write the JSON summary to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Skip malformed kill/userinfo lines instead of aborting.
    #[arg(long)]
    keep_going: bool,

    /// Override log level (trace, debug, info, warn, error). Defaults to RUST_LOG or "warn".
    #[arg(long)]
    log_level: Option<String>,
}

fn init_tracing(log_level: Option<&str>) {
    let filter = match log_level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());

    let policy = if cli.keep_going {
        ErrorPolicy::Collect
    } else {
        ErrorPolicy::FailFast
    };

    let reports = process_files_in_parallel(&cli.inputs, cli.threads, policy)
        .context("failed to parse server log")?;

    match &cli.output {
        Some(path) => create_json_file(path, &reports)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => write_json(io::stdout().lock(), &reports).context("failed to write summary")?,
    }

    Ok(())
}
