use crate::model::record::EmployeeRecord;
use crate::model::report::ComplianceReport;
use crate::repository::RecordRepository;
use crate::service::report::{compliance_report, recent_records};
use anyhow::Result;
use tracing::warn;

/// Owns the in-memory record list and the repository it is persisted to.
pub struct TimesheetService<R: RecordRepository> {
    repo: R,
    records: Vec<EmployeeRecord>,
}

impl<R: RecordRepository> TimesheetService<R> {
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            records: Vec::new(),
        }
    }

    /// Replaces the in-memory list with the stored one.
    ///
    /// On error the list is left empty, as if nothing had been stored.
    pub fn reload(&mut self) -> Result<()> {
        self.records.clear();
        match self.repo.load() {
            Ok(records) => {
                self.records = records;
                Ok(())
            }
            Err(err) => {
                warn!("Load failed: {:#}", err);
                Err(err)
            }
        }
    }

    pub fn records(&self) -> &[EmployeeRecord] {
        &self.records
    }

    pub fn add(&mut self, record: EmployeeRecord) {
        self.records.push(record);
    }

    /// Writes the full in-memory list. The list is kept whether or not this succeeds.
    pub fn save(&self) -> Result<()> {
        self.repo.save(&self.records).inspect_err(|err| {
            warn!("Save failed: {:#}", err);
        })
    }

    pub fn compliance_report(&self) -> Option<ComplianceReport> {
        compliance_report(&self.records)
    }

    pub fn recent(&self, limit: usize) -> Vec<&EmployeeRecord> {
        recent_records(&self.records, limit)
    }
}
