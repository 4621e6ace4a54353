//! Configuration management for aerocode.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::render::OutputFormat;
use crate::view::View;

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Application directory name under the platform config dir.
const APP_DIR_NAME: &str = "aerocode";

/// Environment variable prefix.
const ENV_PREFIX: &str = "AEROCODE_";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `AEROCODE_`, sections split on `__`)
/// 2. TOML config file at `~/.config/aerocode/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Console presentation settings.
    pub console: ConsoleConfig,
    /// Record data settings.
    pub data: DataConfig,
}

/// Console presentation settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// View used when a command does not name one.
    pub default_view: View,
    /// Output format used when a command does not pass `--format`.
    pub format: OutputFormat,
}

/// Record data settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// JSON seed file replacing the built-in sample records.
    pub seed_path: Option<PathBuf>,
    /// Report stages whose aircraft does not exist whenever records load.
    pub check_references: bool,
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// Configuration is loaded in this order (later sources override earlier):
    /// 1. Default values
    /// 2. TOML config file (if exists)
    /// 3. Environment variables (prefixed with `AEROCODE_`)
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading, parsing or validation fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);
        debug!("Loading configuration from {}", config_file.display());

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(APP_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if let Some(path) = &self.data.seed_path {
            if path.as_os_str().is_empty() {
                return Err(Error::config_validation(
                    "data.seed_path must not be empty; remove it to use the built-in records",
                ));
            }
        }
        Ok(())
    }

    /// The configured seed file, if any.
    #[must_use]
    pub fn seed_path(&self) -> Option<&Path> {
        self.data.seed_path.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.console.default_view, View::Aeronaves);
        assert_eq!(config.console.format, OutputFormat::Table);
        assert!(config.data.seed_path.is_none());
        assert!(!config.data.check_references);
    }

    #[test]
    fn test_validate_valid_config() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_seed_path() {
        let mut config = Config::default();
        config.data.seed_path = Some(PathBuf::new());

        let result = config.validate();
        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("seed_path"));
    }

    #[test]
    fn test_seed_path() {
        let mut config = Config::default();
        assert!(config.seed_path().is_none());

        config.data.seed_path = Some(PathBuf::from("/srv/aerocode/seed.json"));
        assert_eq!(
            config.seed_path(),
            Some(Path::new("/srv/aerocode/seed.json"))
        );
    }

    #[test]
    fn test_config_debug() {
        let config = Config::default();
        let debug_str = format!("{config:?}");
        assert!(debug_str.contains("Config"));
    }

    #[test]
    fn test_config_clone() {
        let config = Config::default();
        let cloned = config.clone();
        assert_eq!(config, cloned);
    }

    #[test]
    fn test_default_config_path() {
        let path = Config::default_config_path();
        assert!(path.to_string_lossy().contains("aerocode"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }

    #[test]
    fn test_load_nonexistent_config() {
        // A missing file falls back to defaults
        let result = Config::load_from(Some(PathBuf::from("/nonexistent/config.toml")));
        assert!(result.is_ok());

        let config = result.unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_file() {
        let file = write_config(
            r#"
[console]
default_view = "etapas"
format = "json"

[data]
seed_path = "/srv/aerocode/seed.json"
check_references = true
"#,
        );

        let config = Config::load_from(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.console.default_view, View::Etapas);
        assert_eq!(config.console.format, OutputFormat::Json);
        assert_eq!(
            config.data.seed_path,
            Some(PathBuf::from("/srv/aerocode/seed.json"))
        );
        assert!(config.data.check_references);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let file = write_config("[console]\nformat = \"plain\"\n");

        let config = Config::load_from(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.console.format, OutputFormat::Plain);
        assert_eq!(config.console.default_view, View::Aeronaves);
        assert_eq!(config.data, DataConfig::default());
    }

    #[test]
    fn test_load_rejects_unknown_view() {
        let file = write_config("[console]\ndefault_view = \"hangar\"\n");

        let err = Config::load_from(Some(file.path().to_path_buf())).unwrap_err();
        assert!(matches!(err, Error::ConfigLoad(_)));
    }

    #[test]
    fn test_load_rejects_empty_seed_path() {
        let file = write_config("[data]\nseed_path = \"\"\n");

        let err = Config::load_from(Some(file.path().to_path_buf())).unwrap_err();
        assert!(matches!(err, Error::ConfigValidation { .. }));
    }

    #[test]
    fn test_console_config_serialize() {
        let console = ConsoleConfig::default();
        let json = serde_json::to_string(&console).unwrap();
        assert!(json.contains("\"default_view\":\"aeronaves\""));
        assert!(json.contains("\"format\":\"table\""));
    }

    #[test]
    fn test_data_config_deserialize() {
        let json = r#"{"check_references": true}"#;
        let data: DataConfig = serde_json::from_str(json).unwrap();
        assert!(data.check_references);
        assert!(data.seed_path.is_none());
    }
}
