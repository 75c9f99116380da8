use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom, Write};
use std::path::Path;

use byteorder::{LittleEndian, ReadBytesExt};
use log::{debug, warn};
use serde::Serialize;

use super::error::WaveformError;

// ---------------------------------------------------------------------------
// SAC header layout (little-endian, fixed offsets)
// ---------------------------------------------------------------------------

const DELTA_OFFSET: u64 = 0;
const B_OFFSET: u64 = 20;
const LEVEN_OFFSET: u64 = 420;
/// First data sample; everything before it is header.
pub const DATA_OFFSET: u64 = 632;
const SAMPLE_BYTES: u64 = 4;

// ---------------------------------------------------------------------------
// Waveform
// ---------------------------------------------------------------------------

/// The header fields the viewer needs from a SAC file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WaveformHeader {
    /// Begin value of the independent variable (`b`).
    pub reference_offset: f32,
    /// Sample increment in seconds (`delta`).
    pub sample_interval: f32,
    /// `leven`; always true for a decoded waveform.
    pub evenly_spaced: bool,
}

/// One decoded trace.
#[derive(Debug, Clone, PartialEq)]
pub struct Waveform {
    pub header: WaveformHeader,
    /// Samples in chronological order.
    pub samples: Vec<f32>,
}

impl Waveform {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Time axis: `b + (i + 1) * delta` for sample `i`.
    pub fn times(&self) -> Vec<f64> {
        let b = self.header.reference_offset as f64;
        let delta = self.header.sample_interval as f64;
        (0..self.samples.len())
            .map(|i| b + (i + 1) as f64 * delta)
            .collect()
    }

    /// Arithmetic mean of the samples, 0.0 for an empty trace.
    pub fn mean(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        self.samples.iter().map(|&s| s as f64).sum::<f64>() / self.samples.len() as f64
    }

    /// Copy of the trace with its mean removed.
    pub fn demeaned(&self) -> Waveform {
        let mean = self.mean();
        Waveform {
            header: self.header,
            samples: self
                .samples
                .iter()
                .map(|&s| (s as f64 - mean) as f32)
                .collect(),
        }
    }

    /// Write `time,amplitude` rows.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), csv::Error> {
        let mut out = csv::Writer::from_writer(writer);
        out.write_record(["time", "amplitude"])?;
        for (t, y) in self.times().iter().zip(&self.samples) {
            out.write_record([t.to_string(), y.to_string()])?;
        }
        out.flush()?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Decoding
// ---------------------------------------------------------------------------

/// Open and decode a SAC file.
pub fn read_sac(path: &Path) -> Result<Waveform, WaveformError> {
    let file = File::open(path)?;
    let waveform = decode(BufReader::new(file))?;
    debug!(
        "decoded {} samples from {} (delta={}, b={})",
        waveform.len(),
        path.display(),
        waveform.header.sample_interval,
        waveform.header.reference_offset
    );
    Ok(waveform)
}

/// Decode a SAC waveform from a seekable byte stream.
///
/// Each header field is read after an explicit seek, so the stream position
/// on entry does not matter. A trailing chunk shorter than one sample marks
/// the end of data.
pub fn decode<R: Read + Seek>(mut reader: R) -> Result<Waveform, WaveformError> {
    let len = reader.seek(SeekFrom::End(0))?;
    if len < DATA_OFFSET {
        return Err(WaveformError::MalformedWaveformFile {
            len,
            needed: DATA_OFFSET,
        });
    }

    reader.seek(SeekFrom::Start(B_OFFSET))?;
    let reference_offset = reader.read_f32::<LittleEndian>()?;

    reader.seek(SeekFrom::Start(LEVEN_OFFSET))?;
    let leven = reader.read_i32::<LittleEndian>()?;
    if leven == 0 {
        return Err(WaveformError::UnevenlySpacedData);
    }

    reader.seek(SeekFrom::Start(DELTA_OFFSET))?;
    let sample_interval = reader.read_f32::<LittleEndian>()?;

    let data_len = len - DATA_OFFSET;
    let trailing = data_len % SAMPLE_BYTES;
    if trailing != 0 {
        warn!("ignoring {trailing} trailing bytes after last full sample");
    }

    let mut samples = vec![0.0f32; (data_len / SAMPLE_BYTES) as usize];
    reader.seek(SeekFrom::Start(DATA_OFFSET))?;
    reader.read_f32_into::<LittleEndian>(&mut samples)?;

    Ok(Waveform {
        header: WaveformHeader {
            reference_offset,
            sample_interval,
            evenly_spaced: true,
        },
        samples,
    })
}
