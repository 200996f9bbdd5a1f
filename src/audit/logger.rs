//! Append-only audit log
//!
//! One JSON object per line. A write interrupted mid-line leaves a torn
//! final line; readers skip it, but a bad line anywhere else is an error.

use std::collections::VecDeque;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::error::{LedgerError, LedgerResult};

use super::entry::AuditEntry;

/// Writes and reads the ledger's JSONL audit log
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append one entry and flush it
    pub fn append(&self, entry: &AuditEntry) -> LedgerResult<()> {
        let line = serde_json::to_string(entry)
            .map_err(|e| LedgerError::Json(format!("Cannot encode audit entry: {}", e)))?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| self.io_error("open", e))?;
        writeln!(file, "{}", line).map_err(|e| self.io_error("append to", e))?;
        file.flush().map_err(|e| self.io_error("flush", e))
    }

    /// Every entry, oldest first
    pub fn read_all(&self) -> LedgerResult<Vec<AuditEntry>> {
        let mut entries = Vec::new();
        self.scan(|entry| entries.push(entry))?;
        Ok(entries)
    }

    /// The last `count` entries, oldest first
    ///
    /// Only `count` entries are held in memory while the log is scanned.
    pub fn recent(&self, count: usize) -> LedgerResult<Vec<AuditEntry>> {
        if count == 0 {
            return Ok(Vec::new());
        }
        let mut window = VecDeque::with_capacity(count.min(256));
        self.scan(|entry| {
            if window.len() == count {
                window.pop_front();
            }
            window.push_back(entry);
        })?;
        Ok(window.into())
    }

    pub fn path(&self) -> &Path {
        &self.log_path
    }

    fn scan(&self, mut visit: impl FnMut(AuditEntry)) -> LedgerResult<()> {
        let file = match File::open(&self.log_path) {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(self.io_error("open", e)),
        };

        // A parse failure is held back until we know another line follows it.
        let mut pending: Option<(usize, serde_json::Error)> = None;
        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|e| self.io_error("read", e))?;
            if line.trim().is_empty() {
                continue;
            }
            if let Some((line_no, e)) = pending.take() {
                return Err(corrupt_line(line_no, e));
            }
            match serde_json::from_str(&line) {
                Ok(entry) => visit(entry),
                Err(e) => pending = Some((index + 1, e)),
            }
        }
        Ok(())
    }

    fn io_error(&self, action: &str, e: std::io::Error) -> LedgerError {
        LedgerError::Io(format!(
            "Cannot {} audit log {}: {}",
            action,
            self.log_path.display(),
            e
        ))
    }
}

fn corrupt_line(line_no: usize, e: serde_json::Error) -> LedgerError {
    LedgerError::Json(format!("Corrupt audit entry on line {}: {}", line_no, e))
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

    fn goal_entry(i: usize) -> AuditEntry {
        AuditEntry::create(
            EntityType::SavingsGoal,
            format!("goal-{}", i),
            Some(format!("Goal {}", i)),
            &json!({"name": format!("Goal {}", i), "target_amount": 1000}),
        )
    }

    fn append_raw(logger: &AuditLogger, text: &str) {
        let mut file = OpenOptions::new().append(true).open(logger.path()).unwrap();
        write!(file, "{}", text).unwrap();
    }

    #[test]
    fn test_append_and_read() {
        let (logger, _temp) = create_test_logger();
        logger.append(&goal_entry(0)).unwrap();

        let entries = logger.read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].operation, Operation::Create);
        assert_eq!(entries[0].entity_type, EntityType::SavingsGoal);
        assert_eq!(entries[0].entity_name.as_deref(), Some("Goal 0"));
    }

    #[test]
    fn test_recent_keeps_the_tail() {
        let (logger, _temp) = create_test_logger();
        for i in 0..10 {
            logger.append(&goal_entry(i)).unwrap();
        }

        let recent = logger.recent(3).unwrap();
        let ids: Vec<_> = recent.iter().map(|e| e.entity_id.as_str()).collect();
        assert_eq!(ids, ["goal-7", "goal-8", "goal-9"]);
        assert_eq!(logger.recent(50).unwrap().len(), 10);
        assert!(logger.recent(0).unwrap().is_empty());
    }

    #[test]
    fn test_missing_log_reads_empty() {
        let (logger, _temp) = create_test_logger();
        assert!(logger.read_all().unwrap().is_empty());
        assert!(logger.recent(5).unwrap().is_empty());
    }

    #[test]
    fn test_torn_final_line_is_skipped() {
        let (logger, _temp) = create_test_logger();
        logger.append(&goal_entry(1)).unwrap();
        append_raw(&logger, "{\"timestamp\":\"2024-03-0");

        assert_eq!(logger.read_all().unwrap().len(), 1);

        // Appending after the torn line turns it into a corrupt middle line.
        append_raw(&logger, "\n");
        logger.append(&goal_entry(2)).unwrap();
        let err = logger.read_all().unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_corrupt_middle_line_is_reported() {
        let (logger, _temp) = create_test_logger();
        logger.append(&goal_entry(1)).unwrap();
        append_raw(&logger, "not json\n");
        logger.append(&goal_entry(2)).unwrap();

        let err = logger.recent(1).unwrap_err();
        assert!(err.to_string().contains("Corrupt audit entry on line 2"));
    }
}
