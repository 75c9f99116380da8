//! Error types for the data layer.

use std::fmt;

/// Returned by the calendar converter when a day cannot exist in the given year.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// Julian day, month or day-of-month out of range.
    #[error("invalid date: year {year}, {field} {value}")]
    InvalidDate {
        year: i32,
        /// Which component was rejected ("julian day", "month", "day").
        field: &'static str,
        value: u32,
    },
}

/// Failure to parse a `YYYY,DDD,HH:MM:SS.ffff` timestamp.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TimestampError {
    #[error("malformed timestamp '{input}': {reason}")]
    Malformed { input: String, reason: &'static str },

    #[error(transparent)]
    Date(#[from] DateError),
}

/// Error type for SAC waveform decoding.
#[derive(Debug, thiserror::Error)]
pub enum WaveformError {
    #[error("I/O error reading waveform: {0}")]
    Io(#[from] std::io::Error),

    /// The stream ends before the fixed 632-byte header region.
    #[error("malformed waveform file: {len} bytes, header needs {needed}")]
    MalformedWaveformFile { len: u64, needed: u64 },

    /// The LEVEN header flag is zero.
    #[error("waveform samples are not evenly spaced")]
    UnevenlySpacedData,
}

/// A listing row that passed the length filter but could not be split into
/// the nine expected fields. Non-fatal: the row is skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogWarning {
    /// 1-based position of the row in the listing.
    pub line: usize,
    /// Number of whitespace separated fields found.
    pub fields: usize,
}

impl fmt::Display for CatalogWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "listing line {}: expected at least 9 fields, found {}",
            self.line, self.fields
        )
    }
}
