use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};

/// Number of employee slots collected per data-entry session.
pub const ENTRY_BATCH_SIZE: usize = 7;

pub const DAYS_PER_WEEK: usize = 5;

pub const WEEKDAYS: [&str; DAYS_PER_WEEK] = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"];

pub const DATA_DIR_NAME: &str = ".wfh-tracker";
pub const DATA_FILE_NAME: &str = "EmployeeRecords.csv";

// Weekly thresholds
pub const MIN_WEEKLY_HOURS: u64 = 30;
pub const MAX_WEEKLY_HOURS: u64 = 40;
pub const TARGET_WEEKLY_LOW: u64 = 37;
pub const TARGET_WEEKLY_HIGH: u64 = 39;

// Daily thresholds
pub const MIN_DAILY_HOURS: u32 = 4;
pub const MAX_DAILY_HOURS: u32 = 10;

/// Resolves the application data directory, creating it if it does not exist yet.
///
/// An explicit `base_dir` wins; otherwise `~/.wfh-tracker` is used.
pub fn data_dir(base_dir: Option<PathBuf>) -> Result<PathBuf> {
    let path = match base_dir {
        Some(dir) => dir,
        None => {
            let home_dir = dirs::home_dir()
                .ok_or_else(|| anyhow!("Could not determine home directory"))?;
            home_dir.join(DATA_DIR_NAME)
        }
    };
    fs::create_dir_all(&path)
        .with_context(|| format!("Could not create data directory {}", path.display()))?;
    Ok(path)
}
