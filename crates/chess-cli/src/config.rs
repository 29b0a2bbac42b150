//! Configuration file loading.
//!
//! Settings come from an optional TOML file and are overridden by
//! command-line flags.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing_subscriber::filter::LevelFilter;

/// Errors that can occur when loading or resolving configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// The log level is not one of off, error, warn, info, debug, trace.
    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),
}

/// Session settings.
///
/// ```toml
/// fen = "4k3/P7/8/8/8/8/8/4K3 w - - 0 1"
/// log_level = "debug"
/// ```
#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct Config {
    /// Starting position. Defaults to the standard initial position.
    #[serde(default)]
    pub fen: Option<String>,
    /// Maximum level of diagnostics written to stderr. Defaults to "warn".
    #[serde(default)]
    pub log_level: Option<String>,
}

impl Config {
    /// Loads the configuration.
    ///
    /// An explicit `path` must exist. Without one, [`Self::default_path()`]
    /// is read if present, otherwise the defaults are used.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::read(path),
            None => {
                let default_path = Self::default_path();
                if default_path.exists() {
                    Self::read(&default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Returns the path of the implicit configuration file.
    pub fn default_path() -> PathBuf {
        PathBuf::from("chess.toml")
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parses a configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Replaces file values with the ones given on the command line.
    pub fn with_overrides(self, fen: Option<String>, log_level: Option<String>) -> Self {
        Config {
            fen: fen.or(self.fen),
            log_level: log_level.or(self.log_level),
        }
    }

    /// Returns the configured log level, `warn` if unset.
    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        match &self.log_level {
            None => Ok(LevelFilter::WARN),
            Some(level) => level
                .parse()
                .map_err(|_| ConfigError::InvalidLogLevel(level.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = Config::parse(
            r#"
fen = "8/8/8/8/8/8/8/K6k w - - 0 1"
log_level = "debug"
"#,
        )
        .unwrap();
        assert_eq!(config.fen.as_deref(), Some("8/8/8/8/8/8/8/K6k w - - 0 1"));
        assert_eq!(config.level_filter().unwrap(), LevelFilter::DEBUG);
    }

    #[test]
    fn test_parse_empty_config() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.level_filter().unwrap(), LevelFilter::WARN);
    }

    #[test]
    fn test_parse_invalid_toml() {
        let result = Config::parse("fen = ");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_wrong_value_type() {
        let result = Config::parse("log_level = 3");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_overrides_take_precedence() {
        let file = Config {
            fen: Some("file fen".to_string()),
            log_level: Some("info".to_string()),
        };
        let merged = file
            .clone()
            .with_overrides(None, Some("trace".to_string()));
        assert_eq!(merged.fen.as_deref(), Some("file fen"));
        assert_eq!(merged.log_level.as_deref(), Some("trace"));

        let merged = file.with_overrides(Some("flag fen".to_string()), None);
        assert_eq!(merged.fen.as_deref(), Some("flag fen"));
        assert_eq!(merged.log_level.as_deref(), Some("info"));
    }

    #[test]
    fn test_invalid_log_level() {
        let config = Config {
            fen: None,
            log_level: Some("loud".to_string()),
        };
        assert!(matches!(
            config.level_filter(),
            Err(ConfigError::InvalidLogLevel(level)) if level == "loud"
        ));
    }

    #[test]
    fn test_missing_explicit_file() {
        let result = Config::load(Some(Path::new("does/not/exist/chess.toml")));
        assert!(matches!(result, Err(ConfigError::ReadError(_))));
    }

    #[test]
    fn test_config_path() {
        assert_eq!(Config::default_path(), PathBuf::from("chess.toml"));
    }
}
