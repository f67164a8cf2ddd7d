/// Weekly compliance counts over a set of records.
///
/// The buckets are counted independently of each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ComplianceReport {
    pub less_than_30: usize,
    pub more_than_40: usize,
    pub between_37_and_39: usize,
}

impl ComplianceReport {
    pub const TITLE: &'static str = "******** Weekly Employee Report ********";

    pub fn summary_lines(&self) -> [String; 3] {
        [
            format!("Employees who worked less than 30 hours: {}", self.less_than_30),
            format!("Employees who worked more than 40 hours: {}", self.more_than_40),
            format!(
                "Employees who worked between 37 and 39 hours: {}",
                self.between_37_and_39
            ),
        ]
    }
}

/// Advisory feedback on a single day's hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayNotice {
    Insufficient,
    TooMany,
}

impl DayNotice {
    pub fn message(self, day: &str) -> String {
        match self {
            DayNotice::Insufficient => format!("  Insufficient hours worked on {}", day),
            DayNotice::TooMany => format!("  Too many hours worked on {}", day),
        }
    }
}

/// Advisory feedback on a weekly total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeekNotice {
    NotEnough,
    TooHard,
}

impl WeekNotice {
    pub fn message(self) -> &'static str {
        match self {
            WeekNotice::NotEnough => "You didn't do enough work this week",
            WeekNotice::TooHard => "You are working too hard!!",
        }
    }
}
