mod logging;
mod menu;
mod terminal;

use anyhow::Result;
use tracing::info;
use wfh_core::config::DATA_FILE_NAME;
use wfh_core::{reload_records, Console, FileRecordRepository, TimesheetService};

use crate::terminal::TerminalConsole;

fn main() -> Result<()> {
    let mut console = TerminalConsole::new();

    let repo = match FileRecordRepository::new(None) {
        Ok(repo) => repo,
        Err(err) => {
            console.line(&format!("Error preparing data directory: {:#}", err))?;
            FileRecordRepository::with_path(DATA_FILE_NAME)
        }
    };

    if let Some(data_dir) = repo.file_path().parent().filter(|p| !p.as_os_str().is_empty()) {
        if let Err(err) = logging::enable_logging(data_dir) {
            console.line(&format!("Logging disabled: {:#}", err))?;
        }
    }
    info!(path = %repo.file_path().display(), "Starting work from home tracker");

    let mut service = TimesheetService::new(repo);
    reload_records(&mut service, &mut console)?;

    menu::run(&mut service, &mut console)?;

    info!("Exiting");
    Ok(())
}
