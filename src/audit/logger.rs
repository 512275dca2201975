//! Audit trail for the ledger
//!
//! Every party and entry creation is appended to `audit.log` as one JSON
//! object per line. The file is only ever appended to; the ledger itself is
//! never rebuilt from it.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::error::{LedgerError, LedgerResult};

use super::entry::AuditEntry;

/// Appends creation records to, and reads them back from, a JSONL file
#[derive(Debug, Clone)]
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append `entry` as a single line and flush it
    ///
    /// The store calls this before it mutates, so an error here means the
    /// party or entry was not created.
    pub fn log(&self, entry: &AuditEntry) -> LedgerResult<()> {
        let line = serde_json::to_string(entry).map_err(|e| {
            LedgerError::Json(format!(
                "Cannot encode audit record for {} {}: {}",
                entry.entity_type, entry.entity_id, e
            ))
        })?;

        let io_err = |e: std::io::Error| {
            LedgerError::Io(format!(
                "Cannot record {} {} in {}: {}",
                entry.entity_type,
                entry.entity_id,
                self.log_path.display(),
                e
            ))
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(io_err)?;
        writeln!(file, "{}", line).map_err(io_err)?;
        file.flush().map_err(io_err)
    }

    /// Every record in the log, oldest first; an absent log reads as empty
    pub fn read_all(&self) -> LedgerResult<Vec<AuditEntry>> {
        let Some(reader) = self.open_reader()? else {
            return Ok(Vec::new());
        };

        let mut records = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            let line_no = index + 1;
            let line = line.map_err(|e| {
                LedgerError::Io(format!(
                    "Cannot read {} at line {}: {}",
                    self.log_path.display(),
                    line_no,
                    e
                ))
            })?;
            if line.trim().is_empty() {
                continue;
            }

            let record = serde_json::from_str(&line).map_err(|e| {
                LedgerError::Json(format!(
                    "Malformed audit record in {} at line {}: {}",
                    self.log_path.display(),
                    line_no,
                    e
                ))
            })?;
            records.push(record);
        }

        Ok(records)
    }

    /// The last `count` records, oldest first
    pub fn read_recent(&self, count: usize) -> LedgerResult<Vec<AuditEntry>> {
        let mut records = self.read_all()?;
        let start = records.len().saturating_sub(count);
        Ok(records.split_off(start))
    }

    /// Number of records, without decoding them
    pub fn entry_count(&self) -> LedgerResult<usize> {
        let Some(reader) = self.open_reader()? else {
            return Ok(0);
        };

        Ok(reader
            .lines()
            .map_while(Result::ok)
            .filter(|l| !l.trim().is_empty())
            .count())
    }

    pub fn path(&self) -> &Path {
        &self.log_path
    }

    fn open_reader(&self) -> LedgerResult<Option<BufReader<File>>> {
        match File::open(&self.log_path) {
            Ok(file) => Ok(Some(BufReader::new(file))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(LedgerError::Io(format!(
                "Cannot open {}: {}",
                self.log_path.display(),
                e
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::entry::{EntityType, Operation};
    use serde_json::json;
    use tempfile::TempDir;

    fn create_test_logger() -> (AuditLogger, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));
        (logger, temp_dir)
    }

    fn party_entry(i: usize) -> AuditEntry {
        AuditEntry::create(
            EntityType::Party,
            format!("pty-{}", i),
            Some(format!("Party {}", i)),
            &json!({ "name": format!("Party {}", i) }),
        )
    }

    #[test]
    fn test_log_and_read() {
        let (logger, _temp) = create_test_logger();
        logger.log(&party_entry(0)).unwrap();

        let entries = logger.read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].operation, Operation::Create);
        assert_eq!(entries[0].entity_type, EntityType::Party);
        assert_eq!(entries[0].entity_name.as_deref(), Some("Party 0"));
    }

    #[test]
    fn test_one_line_per_entry() {
        let (logger, _temp) = create_test_logger();
        for i in 0..5 {
            logger.log(&party_entry(i)).unwrap();
        }

        assert_eq!(logger.entry_count().unwrap(), 5);
        let raw = std::fs::read_to_string(logger.path()).unwrap();
        assert_eq!(raw.lines().count(), 5);
        assert!(raw.lines().all(|l| serde_json::from_str::<serde_json::Value>(l).is_ok()));
    }

    #[test]
    fn test_read_recent() {
        let (logger, _temp) = create_test_logger();
        for i in 0..10 {
            logger.log(&party_entry(i)).unwrap();
        }

        let recent = logger.read_recent(3).unwrap();
        let ids: Vec<_> = recent.iter().map(|e| e.entity_id.as_str()).collect();
        assert_eq!(ids, ["pty-7", "pty-8", "pty-9"]);

        assert_eq!(logger.read_recent(50).unwrap().len(), 10);
    }

    #[test]
    fn test_empty_log() {
        let (logger, _temp) = create_test_logger();

        assert!(!logger.path().exists());
        assert_eq!(logger.entry_count().unwrap(), 0);
        assert!(logger.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let (logger, _temp) = create_test_logger();
        logger.log(&party_entry(1)).unwrap();
        let mut raw = std::fs::read_to_string(logger.path()).unwrap();
        raw.push_str("\n\n");
        std::fs::write(logger.path(), raw).unwrap();

        assert_eq!(logger.read_all().unwrap().len(), 1);
        assert_eq!(logger.entry_count().unwrap(), 1);
    }

    #[test]
    fn test_write_failure_names_the_record() {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("missing").join("audit.log"));

        let err = logger.log(&party_entry(4)).unwrap_err();
        assert!(err.to_string().contains("Cannot record Party pty-4"));
    }

    #[test]
    fn test_corrupt_line_reports_line_number() {
        let (logger, _temp) = create_test_logger();
        logger.log(&party_entry(1)).unwrap();
        let mut file = OpenOptions::new().append(true).open(logger.path()).unwrap();
        writeln!(file, "not json").unwrap();

        let err = logger.read_all().unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }
}
