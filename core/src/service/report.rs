use crate::config::{
    MAX_DAILY_HOURS, MAX_WEEKLY_HOURS, MIN_DAILY_HOURS, MIN_WEEKLY_HOURS, TARGET_WEEKLY_HIGH,
    TARGET_WEEKLY_LOW,
};
use crate::model::record::EmployeeRecord;
use crate::model::report::{ComplianceReport, DayNotice, WeekNotice};

/// Counts records per compliance bucket. Returns `None` for an empty list.
pub fn compliance_report(records: &[EmployeeRecord]) -> Option<ComplianceReport> {
    if records.is_empty() {
        return None;
    }

    let totals: Vec<u64> = records.iter().map(EmployeeRecord::weekly_total).collect();
    let target = TARGET_WEEKLY_LOW..=TARGET_WEEKLY_HIGH;

    Some(ComplianceReport {
        less_than_30: totals.iter().filter(|&&t| t < MIN_WEEKLY_HOURS).count(),
        more_than_40: totals.iter().filter(|&&t| t > MAX_WEEKLY_HOURS).count(),
        between_37_and_39: totals.iter().filter(|t| target.contains(*t)).count(),
    })
}

/// The `limit` records with the highest week numbers, ties kept in input order.
pub fn recent_records(records: &[EmployeeRecord], limit: usize) -> Vec<&EmployeeRecord> {
    let mut sorted: Vec<&EmployeeRecord> = records.iter().collect();
    // sort_by is stable
    sorted.sort_by(|a, b| b.week_number.cmp(&a.week_number));
    sorted.truncate(limit);
    sorted
}

pub fn day_notice(hours: u32) -> Option<DayNotice> {
    if hours < MIN_DAILY_HOURS {
        Some(DayNotice::Insufficient)
    } else if hours > MAX_DAILY_HOURS {
        Some(DayNotice::TooMany)
    } else {
        None
    }
}

pub fn week_notice(total: u64) -> Option<WeekNotice> {
    if total < MIN_WEEKLY_HOURS {
        Some(WeekNotice::NotEnough)
    } else if total > MAX_WEEKLY_HOURS {
        Some(WeekNotice::TooHard)
    } else {
        None
    }
}
