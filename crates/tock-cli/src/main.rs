#![forbid(unsafe_code)]

mod check;

use std::env;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "tock: chronological-order verifier for rotated log files",
    long_about = "Scan a log file and report every line whose leading timestamp jumps \
                  backwards relative to the previous timestamped line. When the exact \
                  path does not exist, the newest rotated file sharing that name as a \
                  prefix is scanned instead.",
    after_help = "EXAMPLES:\n    # Verify a log file\n    tock app.log\n\n    # Verify the newest rotation of a base name\n    tock stress_test_log\n\nEXIT STATUS:\n    0  every timestamped line is in non-decreasing order\n    1  ordering violations found, or the file could not be resolved"
)]
struct Cli {
    /// Log file path, or the base name of a rotated series.
    #[arg(value_name = "LOG_FILE")]
    path: PathBuf,

    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("TOCK_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if env::var("DEBUG").is_ok() {
            "tock=debug,info"
        } else {
            "tock=warn"
        })
    });

    let format = env::var("TOCK_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    // diagnostics go to stderr; stdout carries the verification report
    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Every failure exits 1, argument errors included; clap's default
    // exit code for those is 2.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            err.print()?;
            process::exit(i32::from(err.use_stderr()));
        }
    };

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    check::run_check(&cli.path)
}
