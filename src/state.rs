use chrono::{NaiveDateTime, TimeDelta};
use log::info;

use crate::config::ViewerConfig;
use crate::data::catalog::Catalog;
use crate::data::error::{DateError, TimestampError};
use crate::data::selection::ChannelSelection;
use crate::data::timestamp::{format_seed_time, SeedTime};
use crate::request::RdseedRequest;

// ---------------------------------------------------------------------------
// Time window
// ---------------------------------------------------------------------------

/// The requested time window together with the span the data covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    /// Earliest available time.
    pub min: NaiveDateTime,
    /// Latest available time.
    pub max: NaiveDateTime,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl TimeWindow {
    /// Window of `interval_secs` starting at the beginning of the data.
    pub fn from_bounds(min: NaiveDateTime, max: NaiveDateTime, interval_secs: i64) -> Self {
        let end = (min + TimeDelta::seconds(interval_secs)).min(max);
        TimeWindow {
            min,
            max,
            start: min,
            end,
        }
    }

    pub fn clamped_start(&self) -> NaiveDateTime {
        self.start.max(self.min)
    }

    pub fn clamped_end(&self) -> NaiveDateTime {
        self.end.min(self.max)
    }

    /// Seconds between the clamped start and end.
    pub fn interval_secs(&self) -> i64 {
        (self.clamped_end() - self.clamped_start()).num_seconds()
    }

    /// Move to the next window of the same length.
    pub fn step_forward(&mut self) {
        let span = self.end - self.start;
        self.start = self.end;
        self.end += span;
    }

    /// Move to the previous window of the same length.
    pub fn step_back(&mut self) {
        let span = self.end - self.start;
        self.end = self.start;
        self.start -= span;
    }
}

// ---------------------------------------------------------------------------
// Session state
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("no channel listing loaded")]
    NoCatalog,

    #[error("catalog has no channel time span")]
    NoTimeSpan,

    #[error(transparent)]
    Timestamp(#[from] TimestampError),

    #[error(transparent)]
    Date(#[from] DateError),
}

/// Everything a front end needs between loading a listing and plotting,
/// independent of rendering.
#[derive(Debug, Default)]
pub struct ViewerSession {
    pub config: ViewerConfig,

    /// Parsed listing (None until one is loaded).
    pub catalog: Option<Catalog>,

    /// Station/channel picks.
    pub selection: ChannelSelection,

    /// Requested time window (None until a catalog with a channel is loaded).
    pub window: Option<TimeWindow>,

    /// Status message for the user.
    pub status_message: Option<String>,
}

impl ViewerSession {
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Ingest a parsed listing: initialise picks and the time window.
    ///
    /// On error the session keeps its previous catalog, picks and window.
    pub fn set_catalog(&mut self, catalog: Catalog) -> Result<(), SessionError> {
        let window = match catalog.time_bounds() {
            Some((start, end)) => {
                let min = SeedTime::parse(start)?.to_datetime()?;
                let max = SeedTime::parse(end)?.to_datetime()?;
                info!("data spans {min} to {max}");
                Some(TimeWindow::from_bounds(
                    min,
                    max,
                    self.config.default_interval_secs,
                ))
            }
            None => None,
        };
        let selection =
            ChannelSelection::from_catalog(&catalog, &self.config.default_channel_suffix);

        self.status_message = if catalog.warnings.is_empty() {
            None
        } else {
            Some(format!("{} listing rows skipped", catalog.warnings.len()))
        };
        info!("loaded {} station records", catalog.len());
        self.selection = selection;
        self.window = window;
        self.catalog = Some(catalog);
        Ok(())
    }

    /// Build the rdseed request for the current window and picks.
    pub fn request(&self, seed_file: &str) -> Result<RdseedRequest, SessionError> {
        if self.catalog.is_none() {
            return Err(SessionError::NoCatalog);
        }
        let window = self.window.ok_or(SessionError::NoTimeSpan)?;
        let start = format_seed_time(&window.clamped_start())?;
        let end = format_seed_time(&window.clamped_end())?;
        Ok(RdseedRequest::new(seed_file, start, end)
            .with_channels(self.selection.selected_channels()))
    }
}
