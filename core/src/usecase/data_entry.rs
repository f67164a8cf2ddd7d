use anyhow::Result;
use tracing::info;

use crate::config::{DAYS_PER_WEEK, ENTRY_BATCH_SIZE, WEEKDAYS};
use crate::console::Console;
use crate::input::{parse_hours, parse_week_number};
use crate::model::record::EmployeeRecord;
use crate::repository::RecordRepository;
use crate::service::report::{day_notice, week_notice};
use crate::service::timesheet_service::TimesheetService;
use crate::usecase::report::show_compliance_report;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryOutcome {
    InvalidWeek,
    Completed { added: usize, saved: bool },
}

/// Main menu option 1: one week of hours for a batch of employees.
pub struct DataEntryUseCase<'a, R: RecordRepository, C: Console> {
    service: &'a mut TimesheetService<R>,
    console: &'a mut C,
}

impl<'a, R: RecordRepository, C: Console> DataEntryUseCase<'a, R, C> {
    pub fn new(service: &'a mut TimesheetService<R>, console: &'a mut C) -> Self {
        Self { service, console }
    }

    pub fn run(&mut self) -> Result<EntryOutcome> {
        let input = self
            .console
            .centered_prompt("Enter current Working Week Number: ")?
            .unwrap_or_default();
        let Some(week_number) = parse_week_number(&input) else {
            self.console
                .centered("Invalid week number. Press Enter to return to menu.")?;
            self.console.wait_for_enter()?;
            return Ok(EntryOutcome::InvalidWeek);
        };

        for slot in 1..=ENTRY_BATCH_SIZE {
            let record = self.collect_slot(week_number, slot)?;
            self.service.add(record);
        }
        info!(week_number, added = ENTRY_BATCH_SIZE, "Collected week entries");

        let saved = match self.service.save() {
            Ok(()) => true,
            Err(err) => {
                self.console
                    .line(&format!("Error saving records to file: {:#}", err))?;
                false
            }
        };

        show_compliance_report(self.console, self.service.compliance_report())?;

        self.console.blank()?;
        self.console.centered("Press Enter to return to the Main Menu...")?;
        self.console.wait_for_enter()?;

        Ok(EntryOutcome::Completed {
            added: ENTRY_BATCH_SIZE,
            saved,
        })
    }

    fn collect_slot(&mut self, week_number: u32, slot: usize) -> Result<EmployeeRecord> {
        self.console.blank()?;
        self.console.centered(&format!("[Employee {}]", slot))?;

        let employee_id = self
            .console
            .prompt("Enter Employee ID: ")?
            .unwrap_or_default();
        let name = self
            .console
            .prompt("Enter Employee Name: ")?
            .unwrap_or_default();

        let mut daily_hours = [0; DAYS_PER_WEEK];
        for (hours, day) in daily_hours.iter_mut().zip(WEEKDAYS) {
            *hours = self.collect_day(day)?;
        }

        let record = EmployeeRecord::new(week_number, employee_id, name, daily_hours);
        let total = record.weekly_total();
        self.console.line(&format!(
            "Total Hours worked for Week {}: {} hours",
            week_number, total
        ))?;
        if let Some(notice) = week_notice(total) {
            self.console.line(notice.message())?;
        }
        self.console.blank()?;

        Ok(record)
    }

    fn collect_day(&mut self, day: &str) -> Result<u32> {
        let input = self
            .console
            .prompt(&format!("Enter Hours Worked for {}: ", day))?
            .unwrap_or_default();
        let hours = match parse_hours(&input) {
            Some(hours) => hours,
            None => {
                self.console.line("  Invalid number; treating as 0 hours.")?;
                0
            }
        };

        if let Some(notice) = day_notice(hours) {
            self.console.line(&notice.message(day))?;
        }
        Ok(hours)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{slot_input, FailingRepo, MockRecordRepo, ScriptedConsole};

    fn full_session(week: &str) -> Vec<String> {
        let mut input = vec![week.to_string()];
        for slot in 1..=ENTRY_BATCH_SIZE {
            let id = format!("E{}", slot);
            input.extend(slot_input(&id, &format!("Name {}", slot), ["8", "8", "8", "8", "8"]));
        }
        // final "Press Enter"
        input.push(String::new());
        input
    }

    #[test]
    fn test_invalid_week_aborts_without_saving() {
        let repo = MockRecordRepo::default();
        let mut service = TimesheetService::new(repo.clone());
        let mut console = ScriptedConsole::new(&["week nine", ""]);

        let outcome = DataEntryUseCase::new(&mut service, &mut console).run().unwrap();

        assert_eq!(outcome, EntryOutcome::InvalidWeek);
        assert!(service.records().is_empty());
        assert_eq!(repo.save_count(), 0);
        assert!(console.printed("Invalid week number. Press Enter to return to menu."));
        assert!(!console.printed("Enter Employee ID: "));
    }

    #[test]
    fn test_week_zero_aborts_without_saving() {
        let repo = MockRecordRepo::default();
        let mut service = TimesheetService::new(repo.clone());
        let mut console = ScriptedConsole::new(&["0", ""]);

        let outcome = DataEntryUseCase::new(&mut service, &mut console).run().unwrap();

        assert_eq!(outcome, EntryOutcome::InvalidWeek);
        assert_eq!(repo.save_count(), 0);
        assert!(!console.printed("[Employee 1]"));
    }

    #[test]
    fn test_batch_appends_and_saves_once() {
        let existing = EmployeeRecord::new(1, "OLD", "Earlier", [7; 5]);
        let repo = MockRecordRepo::with_records(vec![existing.clone()]);
        let mut service = TimesheetService::new(repo.clone());
        service.reload().unwrap();
        let mut console = ScriptedConsole::new(&full_session("12"));

        let outcome = DataEntryUseCase::new(&mut service, &mut console).run().unwrap();

        assert_eq!(outcome, EntryOutcome::Completed { added: 7, saved: true });
        assert_eq!(repo.save_count(), 1);

        let stored = repo.stored();
        assert_eq!(stored.len(), 1 + ENTRY_BATCH_SIZE);
        assert_eq!(stored[0], existing);
        assert_eq!(stored[1], EmployeeRecord::new(12, "E1", "Name 1", [8; 5]));
        assert_eq!(stored[7].employee_id, "E7");
        assert!(stored[1..].iter().all(|r| r.week_number == 12));

        assert_eq!(console.count("Enter Employee ID: "), ENTRY_BATCH_SIZE);
        assert_eq!(console.count("Enter Hours Worked for Wednesday: "), ENTRY_BATCH_SIZE);
        assert!(console.printed("[Employee 7]"));
        assert_eq!(console.remaining_input(), 0);
    }

    #[test]
    fn test_report_covers_whole_list_after_entry() {
        let repo = MockRecordRepo::with_records(vec![EmployeeRecord::new(1, "OLD", "Short", [1; 5])]);
        let mut service = TimesheetService::new(repo);
        service.reload().unwrap();
        let mut console = ScriptedConsole::new(&full_session("3"));

        DataEntryUseCase::new(&mut service, &mut console).run().unwrap();

        assert!(console.printed("Employees who worked less than 30 hours: 1"));
        assert!(console.printed("Employees who worked more than 40 hours: 0"));
        assert!(console.printed("Employees who worked between 37 and 39 hours: 0"));
    }

    #[test]
    fn test_bad_hours_become_zero_and_notices_are_advisory() {
        let mut input = vec!["4".to_string()];
        input.extend(slot_input("E1", "Alice", ["abc", "11", "2", "8", "8"]));
        for slot in 2..=ENTRY_BATCH_SIZE {
            input.extend(slot_input(&format!("E{}", slot), "", ["9", "9", "9", "9", "9"]));
        }
        input.push(String::new());

        let repo = MockRecordRepo::default();
        let mut service = TimesheetService::new(repo.clone());
        let mut console = ScriptedConsole::new(&input);

        DataEntryUseCase::new(&mut service, &mut console).run().unwrap();

        let stored = repo.stored();
        assert_eq!(stored[0].daily_hours, [0, 11, 2, 8, 8]);
        assert_eq!(stored[1].weekly_total(), 45);

        assert!(console.printed("  Invalid number; treating as 0 hours."));
        assert!(console.printed("  Insufficient hours worked on Monday"));
        assert!(console.printed("  Too many hours worked on Tuesday"));
        assert!(console.printed("  Insufficient hours worked on Wednesday"));
        assert!(console.printed("Total Hours worked for Week 4: 29 hours"));
        assert!(console.printed("You didn't do enough work this week"));
        assert_eq!(console.count("You are working too hard!!"), ENTRY_BATCH_SIZE - 1);
    }

    #[test]
    fn test_huge_hours_are_totalled_and_saved() {
        let mut input = vec!["2".to_string()];
        input.extend(slot_input("E1", "Big", ["4294967295", "1", "8", "8", "8"]));
        for slot in 2..=ENTRY_BATCH_SIZE {
            input.extend(slot_input(&format!("E{}", slot), "", ["8", "8", "8", "8", "8"]));
        }
        input.push(String::new());

        let repo = MockRecordRepo::default();
        let mut service = TimesheetService::new(repo.clone());
        let mut console = ScriptedConsole::new(&input);

        let outcome = DataEntryUseCase::new(&mut service, &mut console).run().unwrap();

        assert_eq!(outcome, EntryOutcome::Completed { added: 7, saved: true });
        assert_eq!(repo.stored()[0].daily_hours, [u32::MAX, 1, 8, 8, 8]);
        assert!(console.printed("Total Hours worked for Week 2: 4294967320 hours"));
        assert!(console.printed("  Too many hours worked on Monday"));
        assert!(console.printed("Employees who worked more than 40 hours: 1"));
    }

    #[test]
    fn test_closed_input_still_collects_batch() {
        let repo = MockRecordRepo::default();
        let mut service = TimesheetService::new(repo.clone());
        let mut console = ScriptedConsole::new(&["6"]);

        let outcome = DataEntryUseCase::new(&mut service, &mut console).run().unwrap();

        assert_eq!(outcome, EntryOutcome::Completed { added: 7, saved: true });
        let stored = repo.stored();
        assert_eq!(stored.len(), ENTRY_BATCH_SIZE);
        assert!(stored.iter().all(|r| r.employee_id.is_empty() && r.weekly_total() == 0));
    }

    #[test]
    fn test_save_failure_is_reported_and_records_kept() {
        let mut service = TimesheetService::new(FailingRepo);
        let mut console = ScriptedConsole::new(&full_session("8"));

        let outcome = DataEntryUseCase::new(&mut service, &mut console).run().unwrap();

        assert_eq!(outcome, EntryOutcome::Completed { added: 7, saved: false });
        assert!(console.printed("Error saving records to file: disk unavailable"));
        assert_eq!(service.records().len(), ENTRY_BATCH_SIZE);
        assert!(console.printed("Employees who worked more than 40 hours: 0"));
    }
}
