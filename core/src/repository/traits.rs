use crate::model::record::EmployeeRecord;
use anyhow::Result;

pub trait RecordRepository {
    /// Returns every stored record in file order. A missing store is empty, not an error.
    fn load(&self) -> Result<Vec<EmployeeRecord>>;
    /// Replaces the stored contents with `records`.
    fn save(&self, records: &[EmployeeRecord]) -> Result<()>;
}
