use anyhow::Result;
use tracing::{debug, info};
use wfh_core::{Console, DataEntryUseCase, RecordRepository, ReportUseCase, TimesheetService};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    EnterHours,
    ProduceReport,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::EnterHours),
            "2" => Some(MenuChoice::ProduceReport),
            "3" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

fn show_menu<C: Console>(console: &mut C) -> Result<()> {
    console.centered("~~Diamond Realty~~")?;
    console.centered("Work From Home Tracker")?;
    console.blank()?;
    console.centered("Press a key from 1 to 3 to select an option")?;
    console.blank()?;
    console.centered("1. Enter Daily Hours Worked")?;
    console.centered("2. Produce Hours Worked Report")?;
    console.centered("3. Exit")?;
    console.blank()
}

/// Runs the main menu until the user exits or input closes.
pub fn run<R, C>(service: &mut TimesheetService<R>, console: &mut C) -> Result<()>
where
    R: RecordRepository,
    C: Console,
{
    loop {
        console.clear()?;
        show_menu(console)?;

        let Some(input) = console.centered_prompt("Select an option: ")? else {
            info!("Input closed");
            return Ok(());
        };
        console.blank()?;

        match MenuChoice::parse(&input) {
            Some(MenuChoice::EnterHours) => {
                let outcome = DataEntryUseCase::new(service, console).run()?;
                debug!(?outcome, "Data entry finished");
            }
            Some(MenuChoice::ProduceReport) => {
                let outcome = ReportUseCase::new(service, console).run()?;
                debug!(?outcome, "Report finished");
            }
            Some(MenuChoice::Exit) => return Ok(()),
            None => {
                console.centered("Invalid choice. Press Enter to continue.")?;
                console.wait_for_enter()?;
            }
        }
    }
}
