//! `tock <LOG_FILE>` — resolve the target file, scan it, print the report.

use std::path::Path;

use anyhow::Result;
use tock_core::resolve::{Resolution, resolve_log_path};
use tock_core::scan::{LineIssue, scan_file};

/// Resolve `path`, scan it, and print the chronology report.
///
/// # Errors
///
/// Returns an error when the path cannot be resolved, the scan hits an
/// I/O failure, or ordering violations were found.
pub fn run_check(path: &Path) -> Result<()> {
    let resolution = resolve_log_path(path)?;
    if let Resolution::Rotated { path, candidates } = &resolution {
        println!("Targeting latest log file: {}", path.display());
        tracing::debug!(candidates, "literal path absent, using rotated fallback");
    }

    let target = resolution.path();
    println!("Checking {}...", target.display());

    let report = scan_file(target)?;
    for check in &report.checks {
        match &check.issue {
            LineIssue::OutOfOrder {
                previous,
                current,
                text,
            } => {
                println!(
                    "Error at line {}: time went backwards: {previous} -> {current}",
                    check.line_number
                );
                println!("  {text}");
            }
            LineIssue::Unparseable { reason } => {
                println!("Parse error at line {}: {reason}", check.line_number);
            }
        }
    }

    if report.is_ordered() {
        println!("SUCCESS: log lines are in chronological order.");
        Ok(())
    } else {
        println!(
            "FAILED: found {} ordering violation(s).",
            report.violation_count()
        );
        anyhow::bail!("found {} ordering violation(s)", report.violation_count())
    }
}
