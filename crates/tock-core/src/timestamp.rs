//! Leading-timestamp extraction and parsing.
//!
//! Collector log lines start with a fixed `YYYY-MM-DD HH:MM:SS` stamp
//! (no timezone, no sub-second part). Extraction is a shape check only;
//! calendar validation happens in [`parse`]. The two stages stay
//! separate so the scanner can tell "no timestamp" from "malformed
//! timestamp".

use std::sync::OnceLock;

use chrono::NaiveDateTime;
use regex::Regex;

/// Format of the stamp at the head of every collector log line.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Timestamp parse failure.
#[derive(Debug, thiserror::Error)]
pub enum TimestampError {
    /// Shape-matched text that is not a valid calendar date/time.
    #[error("invalid timestamp {text:?}: {source}")]
    Invalid {
        /// The text that matched the shape pattern.
        text: String,
        /// Underlying chrono parse failure.
        source: chrono::format::ParseError,
    },
}

fn leading_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}")
            .expect("timestamp pattern compiles")
    })
}

/// Return the leading `YYYY-MM-DD HH:MM:SS` stamp of `line`, if any.
///
/// Matches at byte offset 0 only; leading whitespace defeats the match.
#[must_use]
pub fn leading_timestamp(line: &str) -> Option<&str> {
    leading_re().find(line).map(|m| m.as_str())
}

/// Parse a shape-matched stamp into a comparable time value.
///
/// # Errors
///
/// Returns [`TimestampError::Invalid`] when the digits do not form a
/// real date/time (month `13`, hour `25`, ...).
pub fn parse(text: &str) -> Result<NaiveDateTime, TimestampError> {
    NaiveDateTime::parse_from_str(text, TIMESTAMP_FORMAT).map_err(|source| {
        TimestampError::Invalid {
            text: text.to_string(),
            source,
        }
    })
}
