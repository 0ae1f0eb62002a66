use std::{
    fs, io,
    path::{Path, PathBuf},
};

use log::debug;
use thiserror::Error;

use tremor_input::MeasurementRecord;

/// Directory measurements land in when none is configured.
pub const DEFAULT_STORE_DIR: &str = "touch";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("measurement write failed: {0}")]
    WriteFailed(#[from] io::Error),
}

/// One human-readable text file per record, date-prefixed.
#[derive(Debug, Clone)]
pub struct MeasurementStore {
    dir: PathBuf,
}

impl MeasurementStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write `record` as its own file. The directory is created on the
    /// first write.
    pub fn record(&self, record: &MeasurementRecord) -> Result<(), StorageError> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir)?;
        }

        let path = self.record_path(record);
        fs::write(
            &path,
            format!(
                "absolute={} target={} delta={}",
                record.touch, record.target, record.delta
            ),
        )?;
        debug!("Recorded measurement {} to {}", record.sequence, path.display());
        Ok(())
    }

    fn record_path(&self, record: &MeasurementRecord) -> PathBuf {
        let name = format!(
            "{}_touch{}.txt",
            record.recorded.format("%y_%m_%d"),
            record.sequence
        );
        self.dir.join(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_one_file_per_record() {
        let dir = tempfile::tempdir().unwrap();
        let store = MeasurementStore::new(dir.path().join("touch"));

        let record = MeasurementRecord::new(7, (50.0, 50.0).into(), (100.0, 100.0).into());
        store.record(&record).unwrap();

        let expected = dir
            .path()
            .join("touch")
            .join(format!("{}_touch7.txt", record.recorded.format("%y_%m_%d")));
        let content = fs::read_to_string(expected).unwrap();
        assert_eq!(content, "absolute=(100, 100) target=(50, 50) delta=(50, 50)");
    }

    #[test]
    fn directory_is_created_lazily() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("touch");
        let store = MeasurementStore::new(&path);
        assert!(!path.exists());

        let record = MeasurementRecord::new(0, (0.0, 0.0).into(), (1.0, 2.0).into());
        store.record(&record).unwrap();
        assert!(store.dir().is_dir());
    }

    #[test]
    fn unwritable_directory_reports_write_failed() {
        // A file where the directory should be.
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("touch");
        fs::write(&path, b"occupied").unwrap();

        let store = MeasurementStore::new(&path);
        let record = MeasurementRecord::new(0, (0.0, 0.0).into(), (1.0, 2.0).into());
        assert!(matches!(
            store.record(&record),
            Err(StorageError::WriteFailed(_))
        ));
    }
}
