use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Inspect rdseed listings and SAC waveforms.
#[derive(Parser)]
#[command(name = "seed-viewer", version, about = "SEED/SAC waveform data tools")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to a JSON configuration file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert between calendar dates and Julian days (today if no flag).
    Julday(JuldayArgs),
    /// Parse an rdseed summary listing and print it as JSON.
    Catalog(CatalogArgs),
    /// Decode a SAC file.
    Trace(TraceArgs),
    /// Print an rdseed request script for a time range.
    Request(RequestArgs),
    /// Load a listing, apply default picks and print the request for the first window.
    Plan(PlanArgs),
}

#[derive(clap::Args)]
pub struct JuldayArgs {
    /// Julian day for calendar date MMDDYYYY.
    #[arg(short = 'j', long = "calendar", value_name = "MMDDYYYY")]
    pub calendar: Option<String>,

    /// Calendar date for Julian date DDDYYYY.
    #[arg(short = 'c', long = "julian", value_name = "DDDYYYY")]
    pub julian: Option<String>,
}

#[derive(clap::Args)]
pub struct CatalogArgs {
    /// Listing produced by `rdseed -c -f <seed>`.
    pub listing: PathBuf,
}

#[derive(clap::Args)]
pub struct TraceArgs {
    /// SAC file to decode.
    pub sac: PathBuf,

    /// Write `time,amplitude` rows here.
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Remove the mean before writing.
    #[arg(long)]
    pub demean: bool,
}

#[derive(clap::Args)]
pub struct RequestArgs {
    /// SEED volume.
    pub seed: String,

    /// Start time, e.g. 2011-03-01T00:00:00.
    #[arg(long)]
    pub start: chrono::NaiveDateTime,

    /// End time, e.g. 2011-03-01T01:00:00.
    #[arg(long)]
    pub end: chrono::NaiveDateTime,

    /// Channel code to extract (repeatable).
    #[arg(short = 'C', long = "channel")]
    pub channels: Vec<String>,
}

#[derive(clap::Args)]
pub struct PlanArgs {
    /// Listing produced by `rdseed -c -f <seed>`.
    pub listing: PathBuf,

    /// SEED volume the listing came from.
    pub seed: String,
}
