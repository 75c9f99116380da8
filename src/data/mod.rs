/// Data layer: date arithmetic, listing and waveform parsing, selection.
///
/// Architecture:
/// ```text
///  rdseed -c listing          rdseed SAC output
///        │                          │
///        ▼                          ▼
///   ┌──────────┐               ┌──────────┐
///   │ catalog   │ → Catalog     │   sac    │ → Waveform
///   └──────────┘               └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ selection  │  station/channel picks → channels, file names
///   └───────────┘
///
///   julian / timestamp: YYYY,DDD,HH:MM:SS.ffff ⇄ calendar dates
/// ```

pub mod catalog;
pub mod error;
pub mod julian;
pub mod sac;
pub mod selection;
pub mod timestamp;
