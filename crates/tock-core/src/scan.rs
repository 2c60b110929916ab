//! Single-pass chronological-order scan.
//!
//! Reads a log file line by line and compares each leading timestamp to
//! the previous one. Lines without a leading timestamp are opaque and
//! never move the baseline. An out-of-order value still becomes the new
//! baseline for the next comparison — no rollback.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use chrono::NaiveDateTime;

use crate::timestamp;

/// One diagnostic raised for a scanned line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineIssue {
    /// Timestamp strictly earlier than the previous timestamped line's.
    OutOfOrder {
        /// Baseline the line was compared against.
        previous: NaiveDateTime,
        /// The out-of-order value.
        current: NaiveDateTime,
        /// Offending line, trimmed.
        text: String,
    },
    /// Shape-matched timestamp that failed calendar validation.
    Unparseable {
        /// Human-readable parse failure.
        reason: String,
    },
}

/// A diagnostic anchored to its 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineCheck {
    /// 1-based line number.
    pub line_number: usize,
    /// What went wrong on that line.
    pub issue: LineIssue,
}

/// Aggregate scan result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    /// Diagnostics in line order.
    pub checks: Vec<LineCheck>,
    /// Total lines read.
    pub lines_scanned: usize,
    /// Lines carrying a valid leading timestamp.
    pub timestamped_lines: usize,
}

impl ScanReport {
    /// Number of ordering violations recorded.
    #[must_use]
    pub fn violation_count(&self) -> usize {
        self.checks
            .iter()
            .filter(|check| matches!(check.issue, LineIssue::OutOfOrder { .. }))
            .count()
    }

    /// Return `true` when no ordering violation was recorded.
    ///
    /// Parse failures alone never fail a scan.
    #[must_use]
    pub fn is_ordered(&self) -> bool {
        self.violation_count() == 0
    }
}

/// Scan error.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// Open or read failure, non-UTF-8 content included.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Scan `reader` line by line and collect ordering diagnostics.
///
/// # Errors
///
/// Returns [`ScanError::Io`] when a line cannot be read. Parse
/// failures and ordering violations are diagnostics in the report, not
/// errors; a single corrupt line never aborts the scan.
pub fn scan_reader<R: BufRead>(reader: R) -> Result<ScanReport, ScanError> {
    let mut report = ScanReport::default();
    let mut last_seen: Option<NaiveDateTime> = None;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = index + 1;
        report.lines_scanned = line_number;

        let Some(stamp) = timestamp::leading_timestamp(&line) else {
            continue;
        };
        match timestamp::parse(stamp) {
            Ok(current) => {
                report.timestamped_lines += 1;
                if let Some(previous) = last_seen {
                    if current < previous {
                        report.checks.push(LineCheck {
                            line_number,
                            issue: LineIssue::OutOfOrder {
                                previous,
                                current,
                                text: line.trim().to_string(),
                            },
                        });
                    }
                }
                last_seen = Some(current);
            }
            Err(err) => {
                report.checks.push(LineCheck {
                    line_number,
                    issue: LineIssue::Unparseable {
                        reason: err.to_string(),
                    },
                });
            }
        }
    }

    tracing::debug!(
        lines = report.lines_scanned,
        timestamped = report.timestamped_lines,
        violations = report.violation_count(),
        "scan complete"
    );
    Ok(report)
}

/// Open `path` and scan it.
///
/// The file handle is scoped to this call and released on every exit
/// path.
///
/// # Errors
///
/// Returns [`ScanError::Io`] when the file cannot be opened or read.
pub fn scan_file(path: &Path) -> Result<ScanReport, ScanError> {
    let file = File::open(path)?;
    scan_reader(BufReader::new(file))
}
