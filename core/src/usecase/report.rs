use anyhow::Result;
use tracing::info;

use crate::console::Console;
use crate::input::parse_record_count;
use crate::model::report::ComplianceReport;
use crate::repository::RecordRepository;
use crate::service::timesheet_service::TimesheetService;
use crate::usecase::reload_records;

pub const LISTING_TITLE: &str = "******** Latest Employee Records ********";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportOutcome {
    NoRecords,
    InvalidCount,
    Listed(usize),
}

/// Prints the weekly compliance counts, or a notice when there was nothing to count.
pub fn show_compliance_report<C: Console>(
    console: &mut C,
    report: Option<ComplianceReport>,
) -> Result<()> {
    let Some(report) = report else {
        return console.centered("No records to summarize.");
    };

    console.centered(ComplianceReport::TITLE)?;
    for line in report.summary_lines() {
        console.centered(&line)?;
    }
    Ok(())
}

/// Main menu option 2: report over the stored file, then the latest records.
pub struct ReportUseCase<'a, R: RecordRepository, C: Console> {
    service: &'a mut TimesheetService<R>,
    console: &'a mut C,
}

impl<'a, R: RecordRepository, C: Console> ReportUseCase<'a, R, C> {
    pub fn new(service: &'a mut TimesheetService<R>, console: &'a mut C) -> Self {
        Self { service, console }
    }

    pub fn run(&mut self) -> Result<ReportOutcome> {
        reload_records(self.service, self.console)?;

        if self.service.records().is_empty() {
            self.console.centered("No records found.")?;
            self.console.wait_for_enter()?;
            return Ok(ReportOutcome::NoRecords);
        }

        show_compliance_report(self.console, self.service.compliance_report())?;
        self.console.blank()?;

        let input = self
            .console
            .centered_prompt("How many recent records would you like to see? ")?
            .unwrap_or_default();
        let Some(limit) = parse_record_count(&input) else {
            self.console.centered("Invalid number. Press Enter to return.")?;
            self.console.wait_for_enter()?;
            return Ok(ReportOutcome::InvalidCount);
        };

        let recent = self.service.recent(limit);
        self.console.centered(LISTING_TITLE)?;
        for record in &recent {
            self.console.centered(&record.to_string())?;
        }
        info!(requested = limit, shown = recent.len(), "Listed recent records");

        self.console.blank()?;
        self.console.centered("Press Enter to return to the Main Menu...")?;
        self.console.wait_for_enter()?;
        Ok(ReportOutcome::Listed(recent.len()))
    }
}
