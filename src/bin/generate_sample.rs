use std::fs::File;
use std::io::{BufWriter, Write};

use byteorder::{LittleEndian, WriteBytesExt};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use seed_viewer::data::sac::DATA_OFFSET;

/// Normal deviate by Box-Muller.
fn gauss(rng: &mut StdRng, std_dev: f64) -> f64 {
    let u1: f64 = rng.gen::<f64>().max(1e-15);
    let u2: f64 = rng.gen();
    std_dev * (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
}

/// Damped wave train arriving at `onset` seconds, plus background noise.
fn synthetic_trace(n: usize, delta: f64, onset: f64, rng: &mut StdRng) -> Vec<f32> {
    (0..n)
        .map(|i| {
            let t = i as f64 * delta;
            let arrival = if t >= onset {
                let dt = t - onset;
                800.0 * (-dt / 8.0).exp() * (2.0 * std::f64::consts::PI * 1.2 * dt).sin()
            } else {
                0.0
            };
            (arrival + gauss(rng, 15.0)) as f32
        })
        .collect()
}

fn write_sac(path: &str, delta: f32, b: f32, samples: &[f32]) -> std::io::Result<()> {
    let mut header = vec![0u8; DATA_OFFSET as usize];
    header[0..4].copy_from_slice(&delta.to_le_bytes());
    header[20..24].copy_from_slice(&b.to_le_bytes());
    // leven
    header[420..424].copy_from_slice(&1i32.to_le_bytes());

    let mut out = BufWriter::new(File::create(path)?);
    out.write_all(&header)?;
    for &s in samples {
        out.write_f32::<LittleEndian>(s)?;
    }
    out.flush()
}

fn listing_row(station: &str, channel: &str, start: &str, end: &str, samples: usize) -> String {
    let body = format!("sample.seed {station} {channel} IU 00 {start} {end} 20.0000 {samples}");
    format!("{body:<104}\n")
}

fn main() {
    let mut rng = StdRng::seed_from_u64(42);

    let delta = 0.05f32;
    let n = 20 * 600;
    let start = "2011,060,00:00:00.0000";
    let end = "2011,060,00:10:00.0000";

    let mut listing = String::from("# synthetic rdseed channel summary\n");
    for (i, channel) in ["BHE", "BHN", "BHZ"].iter().enumerate() {
        let samples = synthetic_trace(n, delta as f64, 120.0 + i as f64, &mut rng);
        let path = format!("2011.060.00.00.00.0000.IU.ANMO.00.{channel}.D.SAC");
        write_sac(&path, delta, 0.0, &samples).expect("Failed to write SAC file");
        listing.push_str(&listing_row("ANMO", channel, start, end, n));
    }
    listing.push_str(&listing_row("ANMO", "LOG", start, end, 0));

    let listing_path = "sample_listing.txt";
    std::fs::write(listing_path, listing).expect("Failed to write listing");

    println!("Wrote 3 SAC traces ({n} samples each) and {listing_path}");
}
