pub mod report;
pub mod timesheet_service;
