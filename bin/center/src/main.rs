//! center - write files to standard output, centered
//!
//! Each line is padded with leading spaces so that it sits in the middle of
//! the terminal, or of the width given with `-w`.

use std::env;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::Parser;
use tracing::debug;

use center::config::StdoutTerminal;
use center::{ConfigLoader, InputSource, Settings};

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(name = "center", version)]
#[command(about = "Center lines of text in the terminal")]
struct Args {
    /// Count ANSI color escape sequences as visible text
    #[arg(short = 'e', long)]
    count_escapes: bool,

    /// Align every line of a file by the longest one
    #[arg(short = 'l', long)]
    longest: bool,

    /// Output width in columns (default: terminal width)
    #[arg(short, long, value_parser = parse_integer, allow_negative_numbers = true)]
    width: Option<i64>,

    /// Columns per tab when measuring lines
    #[arg(short, long, value_parser = parse_integer, allow_negative_numbers = true)]
    tab_width: Option<i64>,

    /// Defaults file (also read from $CENTER_CONFIG)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Files to center; `-` reads standard input
    files: Vec<PathBuf>,
}

impl Args {
    /// Settings given on the command line; unset flags defer to the file
    fn settings(&self) -> Settings {
        Settings {
            width: self.width,
            tab_width: self.tab_width,
            count_escapes: self.count_escapes.then_some(true),
            longest: self.longest.then_some(true),
        }
    }
}

fn parse_integer(text: &str) -> Result<i64, String> {
    center::config::parse_integer(text).map_err(|e| e.to_string())
}

/// Install the log subscriber; logs go to stderr
fn init_logging(debug: bool) {
    let log_level = if debug
        || env::var("CENTER_DEBUG").map_or(false, |v| v == "1" || v.to_lowercase() == "true")
    {
        "debug"
    } else {
        "warn"
    };

    let env_filter = env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(env_filter))
        .with_writer(io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();
}

fn try_main(args: Args) -> anyhow::Result<i32> {
    let file_settings = ConfigLoader::load(args.config.as_deref())?;
    let config = args.settings().or(file_settings).resolve(&StdoutTerminal)?;

    let sources = InputSource::from_args(args.files);
    debug!(sources = sources.len(), "Starting run");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let summary = center::run(&sources, &config, &mut out, |failure| {
        eprintln!("center: {}", failure.error);
    })?;
    out.flush().context("failed to flush output")?;

    debug!(
        completed = summary.completed,
        failed = summary.failures.len(),
        lines = summary.lines,
        "Run finished"
    );
    Ok(summary.exit_code())
}

fn main() {
    let args = Args::parse();
    init_logging(args.debug);

    match try_main(args) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("center: {:#}", e);
            process::exit(1);
        }
    }
}
