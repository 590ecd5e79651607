//! JSON file I/O with atomic writes
//!
//! A write either replaces the target file completely or leaves it as it was.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{LedgerError, LedgerResult};

/// Read JSON from a file, or `None` if the file doesn't exist
pub fn read_json_if_exists<T, P>(path: P) -> LedgerResult<Option<T>>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(None);
    }

    let file = File::open(path)
        .map_err(|e| LedgerError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .map(Some)
        .map_err(|e| LedgerError::Storage(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Write JSON to a file atomically (write to temp, fsync, then rename)
pub fn write_json_atomic<T, P>(path: P, data: &T) -> LedgerResult<()>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            LedgerError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file must live in the same directory for the rename to be atomic
    let temp_path = path.with_extension("json.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| LedgerError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| LedgerError::Storage(format!("Failed to serialize data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| LedgerError::Storage(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| LedgerError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        LedgerError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::LedgerSnapshot;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_reads_as_none() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.json");

        let data: Option<LedgerSnapshot> = read_json_if_exists(&path).unwrap();
        assert!(data.is_none());
    }

    #[test]
    fn test_write_then_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("ledger.json");

        let snapshot = LedgerSnapshot::default();
        write_json_atomic(&path, &snapshot).unwrap();

        let loaded: Option<LedgerSnapshot> = read_json_if_exists(&path).unwrap();
        assert_eq!(loaded, Some(snapshot));
        assert!(!temp_dir.path().join("nested").join("ledger.json.tmp").exists());
    }

    #[test]
    fn test_corrupt_file_is_a_storage_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.json");
        fs::write(&path, "not json at all").unwrap();

        let err = read_json_if_exists::<LedgerSnapshot, _>(&path).unwrap_err();
        assert!(matches!(err, LedgerError::Storage(_)));
    }
}
