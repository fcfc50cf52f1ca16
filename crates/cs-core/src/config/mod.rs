//! # Configuration DTO
//!
//! Maps the TOML file onto plain data. Missing keys are recorded as `None`;
//! defaults and validation belong to the bootstrap layer that resolves this
//! DTO into runtime settings.

use std::path::PathBuf;

/// Application configuration as read from disk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// `[watcher] poll_interval_ms`
    pub poll_interval_ms: Option<u64>,

    /// `[history] capacity`
    pub history_capacity: Option<u64>,

    /// `[hashing] algorithm`, kept verbatim
    pub hash_algorithm: Option<String>,

    /// `[logging] level`
    pub log_level: Option<String>,

    /// `[logging] dir` (path info only, no existence check)
    pub log_dir: Option<PathBuf>,
}

impl AppConfig {
    /// Create AppConfig from a TOML value.
    ///
    /// Values of the wrong TOML type are treated as absent. Negative integers
    /// are kept as facts and rejected later by validation.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let get = |section: &str, key: &str| toml_value.get(section).and_then(|s| s.get(key));

        Ok(Self {
            poll_interval_ms: get("watcher", "poll_interval_ms")
                .and_then(|v| v.as_integer())
                .map(|v| v.max(0) as u64),
            history_capacity: get("history", "capacity")
                .and_then(|v| v.as_integer())
                .map(|v| v.max(0) as u64),
            hash_algorithm: get("hashing", "algorithm")
                .and_then(|v| v.as_str())
                .map(str::to_string),
            log_level: get("logging", "level")
                .and_then(|v| v.as_str())
                .map(str::to_string),
            log_dir: get("logging", "dir")
                .and_then(|v| v.as_str())
                .map(PathBuf::from),
        })
    }

    /// Create an empty AppConfig, as if no file existed.
    pub fn empty() -> Self {
        Self::default()
    }
}
