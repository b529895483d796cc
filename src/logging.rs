//! File logging for the terminal host.
//!
//! stdout belongs to the game screen, so log records only go to a file, and
//! only when one is configured.

use std::path::Path;

use anyhow::{Context, Result};
use log::LevelFilter;
use log4rs::{
    append::file::FileAppender,
    config::{Appender, Config as LogConfig, Root},
    encode::pattern::PatternEncoder,
    Handle,
};

use crate::config::Config;

const PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S%.3f)} {l} {t} - {m}{n}";

/// Build a log4rs config with a single file appender at `level`.
pub fn file_config(path: &Path, level: LevelFilter) -> Result<LogConfig> {
    let logfile = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .build(path)
        .with_context(|| format!("open log file {}", path.display()))?;

    LogConfig::builder()
        .appender(Appender::builder().build("logfile", Box::new(logfile)))
        .build(Root::builder().appender("logfile").build(level))
        .context("build log config")
}

/// Install the global logger if `--log-file` was given.
pub fn init(config: &Config) -> Result<Option<Handle>> {
    let Some(path) = config.log_file.as_deref() else {
        return Ok(None);
    };
    let handle = log4rs::init_config(file_config(path, config.log_level)?)
        .context("install logger")?;
    Ok(Some(handle))
}
