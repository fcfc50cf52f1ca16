//! # Configuration Loader
//!
//! Two steps, kept apart:
//!
//! 1. [`load_config`] reads a TOML file into the [`AppConfig`] DTO. Pure
//!    data loading, no defaults, no validation.
//! 2. [`Settings::resolve`] fills in defaults and validates, producing the
//!    values the rest of the bootstrap wires with.

use anyhow::Context;
use cs_core::{config::AppConfig, HashAlgorithm, DEFAULT_HISTORY_CAPACITY};
use std::path::{Path, PathBuf};
use std::time::Duration;

const APP_DIR_NAME: &str = "clipshelf";
const CONFIG_FILE_NAME: &str = "config.toml";

pub const DEFAULT_POLL_INTERVAL_MS: u64 = 300;
pub const MIN_POLL_INTERVAL_MS: u64 = 10;

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: PathBuf) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// Loads the config the binary runs with.
///
/// An explicit path must exist. The default path may be missing, in which
/// case every setting takes its default.
pub fn load_app_config(explicit: Option<&Path>) -> anyhow::Result<AppConfig> {
    if let Some(path) = explicit {
        return load_config(path.to_path_buf());
    }

    match default_config_path() {
        Some(path) if path.exists() => load_config(path),
        _ => Ok(AppConfig::empty()),
    }
}

/// `<config dir>/clipshelf/config.toml`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
}

fn default_log_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join(APP_DIR_NAME).join("logs"))
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("watcher.poll_interval_ms must be at least 10, got {0}")]
    PollIntervalTooShort(u64),

    #[error("history.capacity must be at least 1")]
    ZeroCapacity,

    #[error("hashing.algorithm: {0}")]
    UnknownHashAlgorithm(String),

    #[error("logging.level must be one of trace, debug, info, warn, error, off; got {0:?}")]
    UnknownLogLevel(String),
}

/// Validated runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub poll_interval: Duration,
    pub history_capacity: usize,
    pub hash_algorithm: HashAlgorithm,
    /// `None` lets the build profile pick the level.
    pub log_level: Option<String>,
    /// `None` disables file logging.
    pub log_dir: Option<PathBuf>,
}

impl Settings {
    pub fn resolve(config: &AppConfig) -> Result<Self, ConfigError> {
        let poll_interval_ms = config.poll_interval_ms.unwrap_or(DEFAULT_POLL_INTERVAL_MS);
        if poll_interval_ms < MIN_POLL_INTERVAL_MS {
            return Err(ConfigError::PollIntervalTooShort(poll_interval_ms));
        }

        let history_capacity = match config.history_capacity {
            None => DEFAULT_HISTORY_CAPACITY,
            Some(0) => return Err(ConfigError::ZeroCapacity),
            Some(n) => usize::try_from(n).unwrap_or(usize::MAX),
        };

        let hash_algorithm = match config.hash_algorithm.as_deref() {
            None => HashAlgorithm::default(),
            Some(name) => name.parse().map_err(ConfigError::UnknownHashAlgorithm)?,
        };

        let log_level = match config.log_level.as_deref() {
            None => None,
            Some(level) => {
                let normalized = level.trim().to_ascii_lowercase();
                if !LOG_LEVELS.contains(&normalized.as_str()) {
                    return Err(ConfigError::UnknownLogLevel(level.to_string()));
                }
                Some(normalized)
            }
        };

        Ok(Self {
            poll_interval: Duration::from_millis(poll_interval_ms),
            history_capacity,
            hash_algorithm,
            log_level,
            log_dir: config.log_dir.clone().or_else(default_log_dir),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_config_reads_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(
            temp_file,
            "[watcher]\npoll_interval_ms = 500\n\n[hashing]\nalgorithm = \"blake3\""
        )
        .unwrap();

        let config = load_config(temp_file.path().to_path_buf()).unwrap();

        assert_eq!(config.poll_interval_ms, Some(500));
        assert_eq!(config.hash_algorithm.as_deref(), Some("blake3"));
        assert_eq!(config.history_capacity, None);
    }

    #[test]
    fn test_load_config_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");

        let err = load_config(path).unwrap_err();

        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_reports_invalid_toml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "[watcher\npoll_interval_ms = ").unwrap();

        let err = load_config(temp_file.path().to_path_buf()).unwrap_err();

        assert!(err.to_string().contains("Failed to parse config as TOML"));
    }

    #[test]
    fn test_load_app_config_requires_explicit_path_to_exist() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        assert!(load_app_config(Some(&path)).is_err());
    }

    #[test]
    fn test_resolve_defaults() {
        let settings = Settings::resolve(&AppConfig::empty()).unwrap();

        assert_eq!(settings.poll_interval, Duration::from_millis(300));
        assert_eq!(settings.history_capacity, 100);
        assert_eq!(settings.hash_algorithm, HashAlgorithm::Md5);
        assert_eq!(settings.log_level, None);
    }

    #[test]
    fn test_resolve_keeps_configured_values() {
        let config = AppConfig {
            poll_interval_ms: Some(1000),
            history_capacity: Some(5),
            hash_algorithm: Some("BLAKE3".to_string()),
            log_level: Some("Warn".to_string()),
            log_dir: Some(PathBuf::from("/var/log/clipshelf")),
        };

        let settings = Settings::resolve(&config).unwrap();

        assert_eq!(settings.poll_interval, Duration::from_millis(1000));
        assert_eq!(settings.history_capacity, 5);
        assert_eq!(settings.hash_algorithm, HashAlgorithm::Blake3);
        assert_eq!(settings.log_level.as_deref(), Some("warn"));
        assert_eq!(settings.log_dir, Some(PathBuf::from("/var/log/clipshelf")));
    }

    #[test]
    fn test_resolve_rejects_invalid_values() {
        let short = AppConfig {
            poll_interval_ms: Some(9),
            ..AppConfig::empty()
        };
        assert_eq!(
            Settings::resolve(&short),
            Err(ConfigError::PollIntervalTooShort(9))
        );

        let empty_history = AppConfig {
            history_capacity: Some(0),
            ..AppConfig::empty()
        };
        assert_eq!(
            Settings::resolve(&empty_history),
            Err(ConfigError::ZeroCapacity)
        );

        let crc = AppConfig {
            hash_algorithm: Some("crc32".to_string()),
            ..AppConfig::empty()
        };
        assert!(matches!(
            Settings::resolve(&crc),
            Err(ConfigError::UnknownHashAlgorithm(_))
        ));

        let chatty = AppConfig {
            log_level: Some("verbose".to_string()),
            ..AppConfig::empty()
        };
        assert_eq!(
            Settings::resolve(&chatty),
            Err(ConfigError::UnknownLogLevel("verbose".to_string()))
        );
    }

    #[test]
    fn test_minimum_interval_is_accepted() {
        let config = AppConfig {
            poll_interval_ms: Some(MIN_POLL_INTERVAL_MS),
            ..AppConfig::empty()
        };

        let settings = Settings::resolve(&config).unwrap();

        assert_eq!(settings.poll_interval, Duration::from_millis(10));
    }
}
