//! Configuration management
//!
//! This module handles loading, parsing, and validation of configuration files.
//! The process-wide configuration is a [`Singleton`]: it is loaded on first use
//! and shared from then on.

use crate::base::{NonCopyable, NonMoveable};
use crate::constants::{APP_DIR_NAME, CONFIG_FILE_NAME, CONFIG_GENERATED, CONFIG_HEADER, DEFAULT_LOG_LEVEL, LOCAL_CONFIG_FILE};
use crate::patterns::Singleton;
use crate::utils::datetime;
use anyhow::{Context, Result};
use chrono::format::{Item, StrftimeItems};
use log::{warn, LevelFilter};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Main configuration structure
///
/// Not `Clone`: the process-wide instance from [`Singleton::get_instance`] is
/// the only shared copy.
#[derive(Debug, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub formats: FormatConfig,
    pub logging: LoggingConfig,
    #[serde(skip)]
    non_copyable: NonCopyable,
    #[serde(skip)]
    non_moveable: NonMoveable,
}

/// Default patterns for rendering and parsing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Pattern for a full date and time
    pub datetime: String,
    /// Pattern for a date
    pub date: String,
    /// Pattern for a time of day
    pub time: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging
    pub enabled: bool,
    /// Level filter: "off", "error", "warn", "info", "debug" or "trace"
    pub level: String,
    /// Write to this file instead of stderr
    pub file: Option<PathBuf>,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            datetime: datetime::DEFAULT_DATETIME_FORMAT.to_string(),
            date: datetime::DEFAULT_DATE_FORMAT.to_string(),
            time: datetime::DEFAULT_TIME_FORMAT.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: DEFAULT_LOG_LEVEL.to_string(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Effective level filter. Disabled logging is `Off`.
    pub fn level_filter(&self) -> Result<LevelFilter> {
        if !self.enabled {
            return Ok(LevelFilter::Off);
        }
        LevelFilter::from_str(&self.level)
            .ok()
            .with_context(|| format!("Invalid log level '{}'", self.level))
    }
}

impl Singleton for Config {
    fn create() -> Self {
        Self::load().unwrap_or_else(|e| {
            warn!("Falling back to default configuration: {:#}", e);
            Self::default()
        })
    }

    fn markers(&self) -> (&NonCopyable, &NonMoveable) {
        (&self.non_copyable, &self.non_moveable)
    }
}

impl Config {
    /// Load the first configuration file found, or the defaults when there is none
    ///
    /// Lookup order: `./commonlib.toml`, then the file at
    /// [`Config::get_default_config_path`].
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Load and validate configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config =
            toml::from_str(&content).with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config
            .validate()
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        Ok(config)
    }

    fn find_config_file() -> Option<PathBuf> {
        [Some(PathBuf::from(LOCAL_CONFIG_FILE)), Self::get_default_config_path().ok()]
            .into_iter()
            .flatten()
            .find(|candidate| candidate.exists())
    }

    /// Validate configuration values
    ///
    /// Rendering tolerates unknown pattern tokens, but a configured pattern
    /// with one is almost certainly a typo, so it is rejected here.
    pub fn validate(&self) -> Result<()> {
        validate_pattern("datetime", &self.formats.datetime)?;
        validate_pattern("date", &self.formats.date)?;
        validate_pattern("time", &self.formats.time)?;

        if LevelFilter::from_str(&self.logging.level).is_err() {
            anyhow::bail!(
                "Invalid log level '{}': expected one of off, error, warn, info, debug, trace",
                self.logging.level
            );
        }

        Ok(())
    }

    /// Write the default configuration, with a header comment, to `path`
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        let body = toml::to_string_pretty(&Self::default()).context("Failed to serialize default config")?;
        let content = format!(
            "{}\n# Generated on {}\n\n{}",
            CONFIG_HEADER,
            datetime::current_date_text(datetime::DEFAULT_DATE_FORMAT),
            body
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }
        std::fs::write(path, content).with_context(|| format!("Failed to write config file: {}", path.display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.display());
        Ok(())
    }

    /// `<config_dir>/commonlib/config.toml`
    pub fn get_default_config_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
            .context("Could not determine config directory")
    }
}

fn validate_pattern(name: &str, pattern: &str) -> Result<()> {
    if pattern.is_empty() {
        anyhow::bail!("{} format cannot be empty", name);
    }
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        anyhow::bail!("Invalid {} format '{}'", name, pattern);
    }
    Ok(())
}
