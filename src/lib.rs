//! Data ingestion core for a SEED/SAC seismic waveform viewer.
//!
//! * [`data::julian`]: calendar date ⇄ day-of-year arithmetic
//! * [`data::catalog`]: rdseed channel summary listing → station records
//! * [`data::sac`]: SAC binary waveform decoding
//! * [`request`]: the rdseed request script
//! * [`state`]: selection and time-window state shared by front ends

pub mod config;
pub mod data;
pub mod request;
pub mod state;

pub use config::ViewerConfig;
pub use data::catalog::{Catalog, ChannelEntry, StationRecord};
pub use data::error::{CatalogWarning, DateError, TimestampError, WaveformError};
pub use data::julian::{calendar_day_to_julian, day_of_year, is_leap_year, CalendarDate};
pub use data::sac::{decode, read_sac, Waveform, WaveformHeader};
pub use data::timestamp::{format_seed_time, SeedTime};
pub use request::RdseedRequest;
pub use state::{TimeWindow, ViewerSession};
