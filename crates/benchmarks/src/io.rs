//! Filesystem I/O.
//!
//! [`FsStorage`] persists encoded artifacts under a root directory; the
//! `write_*`/`read_*` functions store and load [`BenchmarkReport`]s.

use crate::error::StorageError;
use crate::markdown;
use crate::result::BenchmarkReport;
use crate::storage::{self, Storage};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Default output directory path.
pub const OUTPUT_DIR: &str = "benchmarks/output";

/// Report JSON file name.
pub const RESULTS_FILE: &str = "results.json";

/// Summary file name.
pub const SUMMARY_FILE: &str = "summary.md";

/// Storage backed by files in one directory.
#[derive(Debug, Clone)]
pub struct FsStorage {
    root: PathBuf,
}

impl FsStorage {
    /// Create a storage rooted at `root`, creating the directory if needed.
    pub fn new(root: impl Into<PathBuf>) -> io::Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Full path of an artifact.
    pub fn path_of(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

impl Storage for FsStorage {
    fn write(&mut self, name: &str, bytes: &[u8]) -> storage::Result<()> {
        let path = self.path_of(name);
        // size() must observe the full write
        fs::File::create(&path)
            .and_then(|mut file| {
                file.write_all(bytes)?;
                file.sync_all()
            })
            .map_err(|e| StorageError::from_io(name, e))
    }

    fn size(&self, name: &str) -> storage::Result<u64> {
        fs::metadata(self.path_of(name))
            .map(|m| m.len())
            .map_err(|e| StorageError::from_io(name, e))
    }

    fn read(&self, name: &str) -> storage::Result<Vec<u8>> {
        fs::read(self.path_of(name)).map_err(|e| StorageError::from_io(name, e))
    }
}

/// Write a report to a JSON file.
pub fn write_report_json(report: &BenchmarkReport, path: impl AsRef<Path>) -> io::Result<()> {
    let json = serde_json::to_string_pretty(report)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    fs::write(path, json)
}

/// Write the markdown summary file.
pub fn write_summary(report: &BenchmarkReport, path: impl AsRef<Path>) -> io::Result<()> {
    fs::write(path, markdown::generate_summary(report))
}

/// Write `results.json` and `summary.md` into `dir`.
pub fn write_all_outputs(report: &BenchmarkReport, dir: impl AsRef<Path>) -> io::Result<()> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;
    write_report_json(report, dir.join(RESULTS_FILE))?;
    write_summary(report, dir.join(SUMMARY_FILE))?;
    Ok(())
}

/// Read a report from a JSON file.
pub fn read_report_json(path: impl AsRef<Path>) -> io::Result<BenchmarkReport> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::Other, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_fs_storage_write_size_read() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = FsStorage::new(dir.path().join("artifacts")).unwrap();

        storage.write("data.proto", &[0x0a, 0x03, 0x01, 0x02, 0x03]).unwrap();
        assert_eq!(storage.size("data.proto").unwrap(), 5);
        assert_eq!(
            storage.read("data.proto").unwrap(),
            vec![0x0a, 0x03, 0x01, 0x02, 0x03]
        );
        assert!(storage.path_of("data.proto").exists());
    }

    #[test]
    fn test_fs_storage_overwrite_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = FsStorage::new(dir.path()).unwrap();

        storage.write("data.json", b"{\"employee\":[]}").unwrap();
        storage.write("data.json", b"{}").unwrap();
        assert_eq!(storage.size("data.json").unwrap(), 2);
        assert_eq!(storage.read("data.json").unwrap(), b"{}".to_vec());
    }

    #[test]
    fn test_fs_storage_missing_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FsStorage::new(dir.path()).unwrap();
        assert!(matches!(storage.size("data.xml"), Err(StorageError::NotFound(_))));
        assert!(matches!(storage.read("data.xml"), Err(StorageError::NotFound(_))));
    }

    #[test]
    fn test_report_json_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let report = BenchmarkReport::from_records(Vec::new(), Utc::now());

        write_all_outputs(&report, dir.path()).unwrap();
        assert!(dir.path().join(SUMMARY_FILE).exists());

        let loaded = read_report_json(dir.path().join(RESULTS_FILE)).unwrap();
        assert_eq!(loaded, report);
    }
}
