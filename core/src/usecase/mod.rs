pub mod data_entry;
pub mod report;

use anyhow::Result;

use crate::console::Console;
use crate::repository::RecordRepository;
use crate::service::timesheet_service::TimesheetService;

pub use data_entry::{DataEntryUseCase, EntryOutcome};
pub use report::{ReportOutcome, ReportUseCase};

/// Reloads the service from storage, telling the user if the file could not be read.
pub fn reload_records<R, C>(service: &mut TimesheetService<R>, console: &mut C) -> Result<()>
where
    R: RecordRepository,
    C: Console,
{
    if let Err(err) = service.reload() {
        console.line(&format!("Error reading file: {:#}", err))?;
    }
    Ok(())
}
