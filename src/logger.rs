//! Logging setup for the `log` facade.
//!
//! The crate itself only emits through `log` macros. Applications (and the
//! bundled binary) call [`init`] once to route those records through `fern`,
//! stamped with local time rendered by [`crate::utils::datetime`].

use crate::config::LoggingConfig;
use crate::constants::{APP_DIR_NAME, LOG_FILE_NAME, LOG_TIMESTAMP_FORMAT};
use crate::utils::datetime;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Build the dispatcher described by `config` without installing it.
///
/// Records go to `config.file` when set, stderr otherwise.
pub fn dispatch(config: &LoggingConfig) -> Result<fern::Dispatch> {
    let base = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                datetime::current_local_text(LOG_TIMESTAMP_FORMAT),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(config.level_filter()?);

    let dispatch = match &config.file {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
            }
            let file = fern::log_file(path).with_context(|| format!("Failed to open log file: {}", path.display()))?;
            base.chain(file)
        }
        None => base.chain(std::io::stderr()),
    };

    Ok(dispatch)
}

/// Install the dispatcher as the global logger. Fails if one is already set.
pub fn init(config: &LoggingConfig) -> Result<()> {
    dispatch(config)?
        .apply()
        .map_err(|e| anyhow::anyhow!("Failed to install logger: {}", e))
}

/// Default log file location: `<data_local_dir>/commonlib/commonlib.log`
pub fn get_log_file_path() -> Result<PathBuf> {
    dirs::data_local_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
        .map(|dir| dir.join(APP_DIR_NAME).join(LOG_FILE_NAME))
}
