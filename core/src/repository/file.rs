use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::config::{self, DATA_FILE_NAME};
use crate::model::record::EmployeeRecord;
use crate::repository::codec;
use crate::repository::traits::RecordRepository;

#[derive(Clone, Debug)]
pub struct FileRecordRepository {
    file_path: PathBuf,
}

impl FileRecordRepository {
    /// Uses `EmployeeRecords.csv` inside the application data directory.
    pub fn new(base_dir: Option<PathBuf>) -> Result<Self> {
        let dir = config::data_dir(base_dir)?;
        Ok(Self::with_path(dir.join(DATA_FILE_NAME)))
    }

    /// Uses exactly `file_path`. Parent directories are not created.
    pub fn with_path(file_path: impl Into<PathBuf>) -> Self {
        FileRecordRepository {
            file_path: file_path.into(),
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }
}

impl RecordRepository for FileRecordRepository {
    fn load(&self) -> Result<Vec<EmployeeRecord>> {
        let content = match fs::read(&self.file_path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.file_path.display(), "No records file yet");
                return Ok(Vec::new());
            }
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("Could not read {}", self.file_path.display()))
            }
        };

        let records = codec::decode_records(&content);
        info!(count = records.len(), path = %self.file_path.display(), "Loaded records");
        Ok(records)
    }

    fn save(&self, records: &[EmployeeRecord]) -> Result<()> {
        let file = File::create(&self.file_path)
            .with_context(|| format!("Could not write {}", self.file_path.display()))?;
        let mut writer = BufWriter::new(file);
        codec::write_records(&mut writer, records)?;
        writer
            .flush()
            .with_context(|| format!("Could not write {}", self.file_path.display()))?;

        info!(count = records.len(), path = %self.file_path.display(), "Saved records");
        Ok(())
    }
}
