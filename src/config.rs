use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Viewer settings, read from a JSON file. Every field has a default.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ViewerConfig {
    /// Name or path of the rdseed executable.
    #[serde(default = "default_rdseed_program")]
    pub rdseed_program: String,

    /// Directory rdseed writes SAC files into.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Length of the initial time window and of each step, in seconds.
    #[serde(default = "default_interval_secs")]
    pub default_interval_secs: i64,

    /// Channels ending with this are pre-selected.
    #[serde(default = "default_channel_suffix")]
    pub default_channel_suffix: String,
}

fn default_rdseed_program() -> String {
    "rdseed".to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_interval_secs() -> i64 {
    3600
}

fn default_channel_suffix() -> String {
    "Z".to_string()
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            rdseed_program: default_rdseed_program(),
            output_dir: default_output_dir(),
            default_interval_secs: default_interval_secs(),
            default_channel_suffix: default_channel_suffix(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("reading config {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("parsing config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl ViewerConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_uses_defaults() {
        let cfg = ViewerConfig::from_json("{}").unwrap();
        assert_eq!(cfg, ViewerConfig::default());
        assert_eq!(cfg.rdseed_program, "rdseed");
        assert_eq!(cfg.default_interval_secs, 3600);
    }

    #[test]
    fn overrides() {
        let cfg = ViewerConfig::from_json(
            r#"{
                "rdseed_program": "/opt/rdseed",
                "default_interval_secs": 600,
                "default_channel_suffix": "N"
            }"#,
        )
        .unwrap();
        assert_eq!(cfg.rdseed_program, "/opt/rdseed");
        assert_eq!(cfg.default_interval_secs, 600);
        assert_eq!(cfg.default_channel_suffix, "N");
        assert_eq!(cfg.output_dir, PathBuf::from("."));
    }

    #[test]
    fn unknown_fields_rejected() {
        assert!(ViewerConfig::from_json(r#"{"colour": "red"}"#).is_err());
    }

    #[test]
    fn missing_file() {
        let err = ViewerConfig::load(Path::new("/nonexistent/viewer.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
