//! End-to-end: listing text → session → request, and SAC files on disk.

use std::path::PathBuf;

use seed_viewer::data::sac::DATA_OFFSET;
use seed_viewer::{read_sac, Catalog, ViewerConfig, ViewerSession, WaveformError};

/// A listing row as rdseed prints it: 104 characters plus newline.
fn listing_row(station: &str, channel: &str, start: &str, end: &str) -> String {
    let body = format!("ANMO.seed {station} {channel} IU 00 {start} {end} 20.0000 72000");
    format!("{body:<104}\n")
}

fn listing() -> String {
    let mut text = String::from("# rdseed channel summary\n#\n");
    text.push_str(&listing_row("ANMO", "BHE", "2011,060,00:00:00.0000", "2011,060,06:00:00.0000"));
    text.push_str(&listing_row("ANMO", "BHZ", "2011,060,00:00:00.0000", "2011,060,03:00:00.0000"));
    text.push_str(&listing_row("ANMO", "BHZ", "2011,060,02:00:00.0000", "2011,060,06:00:00.0000"));
    text.push_str(&listing_row("ANMO", "LOG", "2011,060,00:00:00.0000", "2011,060,06:00:00.0000"));
    text.push_str(&listing_row("COLA", "LHZ", "2011,060,00:00:00.0000", "2011,060,06:00:00.0000"));
    text.push_str("not a listing row\n");
    text
}

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("seed-viewer-{}-{name}", std::process::id()))
}

fn sac_bytes(delta: f32, b: f32, leven: i32, samples: &[f32]) -> Vec<u8> {
    let mut buf = vec![0u8; DATA_OFFSET as usize];
    buf[0..4].copy_from_slice(&delta.to_le_bytes());
    buf[20..24].copy_from_slice(&b.to_le_bytes());
    buf[420..424].copy_from_slice(&leven.to_le_bytes());
    for s in samples {
        buf.extend_from_slice(&s.to_le_bytes());
    }
    buf
}

#[test]
fn listing_to_request() {
    let catalog = Catalog::from_listing_text(&listing());
    assert_eq!(catalog.len(), 2);
    assert!(catalog.warnings.is_empty());

    let anmo = &catalog.stations[0];
    let codes: Vec<&str> = anmo.channels.iter().map(|c| c.channel_code.as_str()).collect();
    assert_eq!(codes, vec!["BHE", "BHZ"]);
    assert_eq!(anmo.channels[1].end_time, "2011,060,06:00:00.0000");

    let mut session = ViewerSession::new(ViewerConfig::default());
    session.set_catalog(catalog).unwrap();
    let window = session.window.unwrap();
    assert_eq!(window.interval_secs(), 3600);

    let req = session.request("ANMO.seed").unwrap();
    assert_eq!(req.channels, vec!["BHZ", "LHZ"]);
    assert_eq!(req.start, "2011,060,00:00:00.0000");
    assert_eq!(req.end, "2011,060,01:00:00.0000");
    assert!(req.script().ends_with("2011,060,01:00:00.0000\n\n\nQuit\n"));
}

#[test]
fn listing_file_round_trip() {
    let path = temp_path("listing.txt");
    std::fs::write(&path, listing()).unwrap();
    let catalog = Catalog::read_listing(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(catalog, Catalog::from_listing_text(&listing()));
}

#[test]
fn sac_file_on_disk() {
    let path = temp_path("trace.SAC");
    std::fs::write(&path, sac_bytes(0.01, 0.0, 1, &[1.0, 2.0, 3.0, 4.0])).unwrap();
    let waveform = read_sac(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(waveform.samples, vec![1.0, 2.0, 3.0, 4.0]);
    assert_eq!(waveform.header.sample_interval, 0.01);
    assert_eq!(waveform.header.reference_offset, 0.0);
}

#[test]
fn uneven_sac_file_is_recoverable() {
    let path = temp_path("uneven.SAC");
    std::fs::write(&path, sac_bytes(0.01, 0.0, 0, &[1.0])).unwrap();
    let result = read_sac(&path);
    std::fs::remove_file(&path).unwrap();
    assert!(matches!(result, Err(WaveformError::UnevenlySpacedData)));
}

#[test]
fn missing_sac_file_is_io_error() {
    let result = read_sac(&temp_path("does-not-exist.SAC"));
    assert!(matches!(result, Err(WaveformError::Io(_))));
}
