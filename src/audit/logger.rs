//! Append-only audit log writer
//!
//! The log is line-delimited JSON: one [`AuditEntry`] per line, flushed as
//! soon as it is written.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::error::{LedgerError, LedgerResult};

use super::entry::AuditEntry;

/// Writes and reads the audit log file
#[derive(Debug, Clone)]
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append one entry
    pub fn log(&self, entry: &AuditEntry) -> LedgerResult<()> {
        let json = serde_json::to_string(entry)
            .map_err(|e| LedgerError::Json(format!("Failed to serialize audit entry: {}", e)))?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| LedgerError::Io(format!("Failed to open audit log: {}", e)))?;

        writeln!(file, "{}", json)
            .map_err(|e| LedgerError::Io(format!("Failed to write audit entry: {}", e)))?;

        file.flush()
            .map_err(|e| LedgerError::Io(format!("Failed to flush audit log: {}", e)))?;

        Ok(())
    }

    /// Every entry, oldest first
    pub fn read_all(&self) -> LedgerResult<Vec<AuditEntry>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.log_path)
            .map_err(|e| LedgerError::Io(format!("Failed to open audit log: {}", e)))?;

        let mut entries = Vec::new();
        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|e| {
                LedgerError::Io(format!("Failed to read audit log line {}: {}", index + 1, e))
            })?;

            if line.trim().is_empty() {
                continue;
            }

            let entry = serde_json::from_str(&line).map_err(|e| {
                LedgerError::Json(format!(
                    "Failed to parse audit entry at line {}: {}",
                    index + 1,
                    e
                ))
            })?;
            entries.push(entry);
        }

        Ok(entries)
    }

    /// The newest `count` entries, oldest first
    pub fn read_recent(&self, count: usize) -> LedgerResult<Vec<AuditEntry>> {
        let mut entries = self.read_all()?;
        let start = entries.len().saturating_sub(count);
        Ok(entries.split_off(start))
    }

    pub fn path(&self) -> &Path {
        &self.log_path
    }
}
