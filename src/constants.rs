//! Constants used throughout the crate
//!
//! File names, directory names and user-facing messages live here so the
//! config, logger and binary agree on them.

// Locations
/// Directory name under the platform config / data directories
pub const APP_DIR_NAME: &str = "commonlib";
/// Config file looked up in the current directory
pub const LOCAL_CONFIG_FILE: &str = "commonlib.toml";
/// Config file name inside the config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";
/// Log file name inside the data directory
pub const LOG_FILE_NAME: &str = "commonlib.log";

// Logging
/// Log level used when the configuration does not name one
pub const DEFAULT_LOG_LEVEL: &str = "info";
/// Pattern used to stamp log lines
pub const LOG_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

// Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const CONFIG_HEADER: &str = "# commonlib configuration file";
pub const ERROR_CONFIG_FALLBACK: &str = "❌ Invalid configuration, using defaults";
pub const ERROR_PARSE_FAILED: &str = "❌ Failed to parse date/time";
pub const USAGE: &str = "Usage: commonlib [--generate-config | --parse <text>]";
