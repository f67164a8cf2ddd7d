use std::path::Path;

use anyhow::{anyhow, Result};
use tracing::level_filters::LevelFilter;
use tracing_appender::rolling::Rotation;
use tracing_subscriber::EnvFilter;

pub const LOG_PREFIX: &str = "wfh-tracker";
const DEFAULT_LEVEL: LevelFilter = LevelFilter::INFO;

/// Sends diagnostics to daily log files under `<data_dir>/logs`.
///
/// Nothing is written to stdout; the terminal belongs to the menu.
pub fn enable_logging(data_dir: &Path) -> Result<()> {
    let appender = tracing_appender::rolling::Builder::new()
        .rotation(Rotation::DAILY)
        .max_log_files(5)
        .filename_prefix(LOG_PREFIX)
        .filename_suffix("log")
        .build(data_dir.join("logs"))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(format!(
            "wfh_core={level},wfh_cli={level}",
            level = DEFAULT_LEVEL
        )))
        .with_writer(appender)
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow!("Could not install log subscriber: {}", err))?;
    Ok(())
}
