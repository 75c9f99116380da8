mod cli;
mod logging;

use std::fs::File;
use std::io::BufWriter;
use std::process;

use anyhow::{bail, Context, Result};
use chrono::Datelike;
use clap::Parser;
use log::warn;

use seed_viewer::config::ViewerConfig;
use seed_viewer::data::catalog::Catalog;
use seed_viewer::data::julian::{calendar_day_to_julian, day_of_year};
use seed_viewer::data::sac::read_sac;
use seed_viewer::data::timestamp::format_seed_time;
use seed_viewer::request::{summary_args, RdseedRequest};
use seed_viewer::state::ViewerSession;

use crate::cli::{CatalogArgs, Cli, Command, JuldayArgs, PlanArgs, RequestArgs, TraceArgs};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => ViewerConfig::load(path)?,
        None => ViewerConfig::default(),
    };

    match cli.command {
        Command::Julday(args) => julday(args),
        Command::Catalog(args) => catalog(args),
        Command::Trace(args) => trace(args),
        Command::Request(args) => request(args),
        Command::Plan(args) => plan(args, config),
    }
}

fn parse_num<T>(s: &str, what: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    s.parse()
        .with_context(|| format!("{what} '{s}' is not a number"))
}

fn julday(args: JuldayArgs) -> Result<()> {
    if let Some(date) = &args.calendar {
        if date.len() < 8 || !date.is_ascii() {
            bail!("date must be in the format MMDDYYYY");
        }
        let month = parse_num(&date[0..2], "month")?;
        let day = parse_num(&date[2..4], "day")?;
        let year = parse_num::<i32>(&date[4..], "year")?;
        println!("Julian Day: {}", calendar_day_to_julian(year, month, day)?);
    }

    if let Some(date) = &args.julian {
        if date.len() < 7 || !date.is_ascii() {
            bail!("Julian date must be in the format DDDYYYY");
        }
        let jd = parse_num(&date[0..3], "julian day")?;
        let year = parse_num::<i32>(&date[3..], "year")?;
        println!("Calendar Day: {}", day_of_year(year, jd)?);
    }

    if args.calendar.is_none() && args.julian.is_none() {
        let today = chrono::Local::now().date_naive();
        let jd = calendar_day_to_julian(today.year(), today.month(), today.day())?;
        println!("Julian Day: {jd}");
        println!("Calendar Day: {}", day_of_year(today.year(), jd)?);
    }
    Ok(())
}

fn load_catalog(path: &std::path::Path) -> Result<Catalog> {
    let catalog = Catalog::read_listing(path)
        .with_context(|| format!("reading listing {}", path.display()))?;
    for w in &catalog.warnings {
        warn!("{}: {w}", path.display());
    }
    Ok(catalog)
}

fn catalog(args: CatalogArgs) -> Result<()> {
    let catalog = load_catalog(&args.listing)?;
    let json = serde_json::to_string_pretty(&catalog.stations).context("serialising catalog")?;
    println!("{json}");
    Ok(())
}

fn trace(args: TraceArgs) -> Result<()> {
    let mut waveform =
        read_sac(&args.sac).with_context(|| format!("decoding {}", args.sac.display()))?;
    if args.demean {
        waveform = waveform.demeaned();
    }

    match &args.csv {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating {}", path.display()))?;
            waveform
                .write_csv(BufWriter::new(file))
                .with_context(|| format!("writing {}", path.display()))?;
        }
        None => {
            let h = &waveform.header;
            println!("samples:  {}", waveform.len());
            println!("delta:    {}", h.sample_interval);
            println!("b:        {}", h.reference_offset);
            println!("mean:     {}", waveform.mean());
        }
    }
    Ok(())
}

fn request(args: RequestArgs) -> Result<()> {
    if args.end < args.start {
        bail!("end time {} is before start time {}", args.end, args.start);
    }
    let req = RdseedRequest::new(
        args.seed,
        format_seed_time(&args.start)?,
        format_seed_time(&args.end)?,
    )
    .with_channels(args.channels);
    print!("{}", req.script());
    Ok(())
}

fn plan(args: PlanArgs, config: ViewerConfig) -> Result<()> {
    let catalog = load_catalog(&args.listing)?;
    let mut session = ViewerSession::new(config);
    session.set_catalog(catalog)?;
    if let Some(msg) = &session.status_message {
        warn!("{msg}");
    }

    println!(
        "# listing: {} {}",
        session.config.rdseed_program,
        summary_args(&args.seed).join(" ")
    );
    for (i, station) in session.selection.stations().iter().enumerate() {
        let picks: Vec<&str> = station
            .channels
            .iter()
            .filter(|c| c.selected)
            .map(|c| c.code.as_str())
            .collect();
        println!("# station {i}: {} [{}]", station.station, picks.join(" "));
    }

    let req = session.request(&args.seed)?;
    print!("{}", req.script());

    let dir = &session.config.output_dir;
    if let Ok(entries) = std::fs::read_dir(dir) {
        let names: Vec<String> = entries
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        for name in session.selection.matching_files(&names) {
            println!("# existing: {}", dir.join(name).display());
        }
    }
    Ok(())
}
