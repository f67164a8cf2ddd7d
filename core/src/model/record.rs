use std::fmt;

use crate::config::DAYS_PER_WEEK;

/// One employee's hours for one week.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeRecord {
    pub week_number: u32,
    pub employee_id: String,
    pub name: String,
    /// Monday through Friday.
    pub daily_hours: [u32; DAYS_PER_WEEK],
}

impl EmployeeRecord {
    pub fn new(
        week_number: u32,
        employee_id: impl Into<String>,
        name: impl Into<String>,
        daily_hours: [u32; DAYS_PER_WEEK],
    ) -> Self {
        Self {
            week_number,
            employee_id: employee_id.into(),
            name: name.into(),
            daily_hours,
        }
    }

    /// Widened so five `u32` values can never overflow.
    pub fn weekly_total(&self) -> u64 {
        self.daily_hours.iter().map(|&h| u64::from(h)).sum()
    }
}

// Listing form, e.g. "Week 12, E123, John Doe, 8, 8, 8, 8, 8"
impl fmt::Display for EmployeeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Week {}, {}, {}", self.week_number, self.employee_id, self.name)?;
        for hours in &self.daily_hours {
            write!(f, ", {}", hours)?;
        }
        Ok(())
    }
}
