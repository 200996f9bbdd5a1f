//! Monthly note repository backed by `notes.json`

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::LedgerError;
use crate::models::{MonthPeriod, MonthlyNote};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct NoteData {
    notes: Vec<MonthlyNote>,
}

/// Repository for one note per month
pub struct NoteRepository {
    path: PathBuf,
    notes: RwLock<BTreeMap<MonthPeriod, MonthlyNote>>,
}

impl NoteRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            notes: RwLock::new(BTreeMap::new()),
        }
    }

    pub fn load(&self) -> Result<(), LedgerError> {
        let file_data: NoteData = read_json(&self.path)?;

        let mut notes = self
            .notes
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        notes.clear();
        for note in file_data.notes {
            notes.entry(note.month).or_insert(note);
        }

        Ok(())
    }

    pub fn save(&self) -> Result<(), LedgerError> {
        let notes = self
            .notes
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let file_data = NoteData {
            notes: notes.values().cloned().collect(),
        };
        write_json_atomic(&self.path, &file_data)
    }

    pub fn get(&self, month: MonthPeriod) -> Result<Option<MonthlyNote>, LedgerError> {
        let notes = self
            .notes
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(notes.get(&month).cloned())
    }

    pub fn get_all(&self) -> Result<Vec<MonthlyNote>, LedgerError> {
        let notes = self
            .notes
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(notes.values().cloned().collect())
    }

    /// Store a note, returning the one it replaced
    pub fn upsert(&self, note: MonthlyNote) -> Result<Option<MonthlyNote>, LedgerError> {
        let mut notes = self
            .notes
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(notes.insert(note.month, note))
    }
}
