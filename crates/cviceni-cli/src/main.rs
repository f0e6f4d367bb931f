#![forbid(unsafe_code)]

//! Cviceni CLI
//!
//! Runs the lesson and prints its transcript to stdout.

use anyhow::{Context, Result};
use clap::Parser;
use cviceni_core::{LessonConfig, run_lesson};
use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Cviceni - first programming exercise
///
/// Arguments the parser does not recognise are ignored; recognised ones
/// still apply.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, ignore_errors = true)]
struct Args {
    /// Enable verbose (debug) logging on stderr
    #[arg(short, long)]
    verbose: bool,

    /// Lesson data file (TOML); built-in data is used when omitted
    #[arg(short, long, env = "CVICENI_CONFIG")]
    config: Option<PathBuf>,
}

/// Parses the command line, keeping every option that was understood.
///
/// Only `--help` and `--version` stop the program.
fn parse_args<I, T>(args: I) -> Args
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Args::try_parse_from(args) {
        Ok(args) => args,
        Err(e) => e.exit(),
    }
}

fn main() -> Result<()> {
    let args = parse_args(std::env::args_os());

    init_logging(args.verbose);

    let config = match &args.config {
        Some(path) => LessonConfig::load(path)
            .with_context(|| format!("Failed to load lesson config from {}", path.display()))?,
        None => LessonConfig::default(),
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_lesson(&config, &mut out).context("Lesson failed")?;
    out.flush()?;

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}
