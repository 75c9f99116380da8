use std::borrow::Cow;
use std::path::Path;

use log::{debug, warn};
use serde::Serialize;

use super::error::CatalogWarning;

/// Width of a channel-availability row in the utility's summary listing,
/// line terminator included.
pub const LISTING_ROW_WIDTH: usize = 105;

/// Number of whitespace fields a listing row must carry.
const ROW_FIELDS: usize = 9;

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// One channel of a station as reported by the listing. Fields are kept
/// verbatim; timestamps are `YYYY,DDD,HH:MM:SS.ffff` strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChannelEntry {
    pub channel_code: String,
    pub network: String,
    pub location: String,
    pub start_time: String,
    pub end_time: String,
    pub sample_rate: String,
    pub total_samples: String,
}

impl ChannelEntry {
    /// Widen this entry's time span to cover `start..end`.
    fn merge_span(&mut self, start: &str, end: &str) {
        if start < self.start_time.as_str() {
            self.start_time = start.to_string();
        }
        if end > self.end_time.as_str() {
            self.end_time = end.to_string();
        }
    }
}

/// A station and its channels, in listing order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationRecord {
    pub station_name: String,
    pub channels: Vec<ChannelEntry>,
}

impl StationRecord {
    fn new(station_name: &str) -> Self {
        StationRecord {
            station_name: station_name.to_string(),
            channels: Vec::new(),
        }
    }

    pub fn channel(&self, code: &str) -> Option<&ChannelEntry> {
        self.channels.iter().find(|c| c.channel_code == code)
    }

    fn push_row(&mut self, row: &[&str]) {
        let code = row[2];
        // Administrative log streams, not waveform channels.
        if code.contains("LOG") {
            return;
        }
        match self.channels.iter_mut().find(|c| c.channel_code == code) {
            Some(existing) => existing.merge_span(row[5], row[6]),
            None => self.channels.push(ChannelEntry {
                channel_code: code.to_string(),
                network: row[3].to_string(),
                location: row[4].to_string(),
                start_time: row[5].to_string(),
                end_time: row[6].to_string(),
                sample_rate: row[7].to_string(),
                total_samples: row[8].to_string(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// Stations parsed from one summary listing, plus the rows that were skipped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub stations: Vec<StationRecord>,
    pub warnings: Vec<CatalogWarning>,
}

impl Catalog {
    /// Build a catalog from listing lines.
    ///
    /// Comment lines (`#`) are dropped and only rows exactly
    /// [`LISTING_ROW_WIDTH`] characters long are kept. Consecutive rows for
    /// the same station form one record; a station that reappears after a
    /// different one starts a new record. Repeated channel codes within a
    /// record are merged to the earliest start and latest end.
    pub fn build<I, S>(lines: I) -> Catalog
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut catalog = Catalog::default();
        let mut current: Option<StationRecord> = None;

        for (idx, line) in lines.into_iter().enumerate() {
            let line = line.as_ref();
            if line.starts_with('#') || line.chars().count() != LISTING_ROW_WIDTH {
                continue;
            }

            let row: Vec<&str> = line.split_whitespace().collect();
            if row.len() < ROW_FIELDS {
                let warning = CatalogWarning {
                    line: idx + 1,
                    fields: row.len(),
                };
                warn!("skipping row: {warning}");
                catalog.warnings.push(warning);
                continue;
            }

            let station = row[1];
            if current.as_ref().map_or(true, |r| r.station_name != station) {
                if let Some(done) = current.replace(StationRecord::new(station)) {
                    catalog.stations.push(done);
                }
            }
            if let Some(record) = current.as_mut() {
                record.push_row(&row);
            }
        }

        if let Some(done) = current {
            catalog.stations.push(done);
        }

        debug!(
            "catalog: {} station records, {} skipped rows",
            catalog.stations.len(),
            catalog.warnings.len()
        );
        catalog
    }

    /// Build from the full text of a listing. Line terminators are kept so
    /// row widths match the utility's fixed-width output; `\r\n` counts as
    /// a single `\n`.
    pub fn from_listing_text(text: &str) -> Catalog {
        Catalog::build(text.split_inclusive('\n').map(|line| {
            match line.strip_suffix("\r\n") {
                Some(body) => Cow::Owned(format!("{body}\n")),
                None => Cow::Borrowed(line),
            }
        }))
    }

    /// Read and parse a listing file.
    pub fn read_listing(path: &Path) -> std::io::Result<Catalog> {
        let text = std::fs::read_to_string(path)?;
        Ok(Catalog::from_listing_text(&text))
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Start and end time of the first channel of the first station that
    /// has one, the span a time selector is initialised to.
    pub fn time_bounds(&self) -> Option<(&str, &str)> {
        let first = self.stations.iter().find_map(|s| s.channels.first())?;
        Some((first.start_time.as_str(), first.end_time.as_str()))
    }
}
