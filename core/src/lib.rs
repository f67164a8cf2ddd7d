pub mod config;
pub mod console;
pub mod input;
pub mod model;
pub mod repository;
pub mod service;
pub mod usecase;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use config::{ENTRY_BATCH_SIZE, WEEKDAYS};
pub use console::Console;
pub use model::record::EmployeeRecord;
pub use model::report::ComplianceReport;
pub use repository::{FileRecordRepository, RecordRepository};
pub use service::timesheet_service::TimesheetService;
pub use usecase::{reload_records, DataEntryUseCase, EntryOutcome, ReportOutcome, ReportUseCase};
