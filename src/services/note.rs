//! Monthly note service

use crate::audit::EntityType;
use crate::error::LedgerResult;
use crate::models::{MonthPeriod, MonthlyNote};
use crate::storage::Storage;

/// Service for monthly notes and reflections
pub struct NoteService<'a> {
    storage: &'a Storage,
}

impl<'a> NoteService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create or update the note for a month
    ///
    /// A field left as `None` keeps its current text.
    pub fn upsert(
        &self,
        month: MonthPeriod,
        notes: Option<&str>,
        reflection: Option<&str>,
    ) -> LedgerResult<MonthlyNote> {
        let existing = self.storage.notes.get(month)?;

        let mut note = existing
            .clone()
            .unwrap_or_else(|| MonthlyNote::new(month, "", ""));
        if let Some(notes) = notes {
            note.notes = notes.to_string();
        }
        if let Some(reflection) = reflection {
            note.reflection = reflection.to_string();
        }
        note.updated_at = chrono::Utc::now();

        self.storage.notes.upsert(note.clone())?;
        self.storage.notes.save()?;

        let id = month.to_string();
        match existing {
            Some(before) => self.storage.log_update(
                EntityType::MonthlyNote,
                id,
                Some(month.label()),
                &before,
                &note,
            )?,
            None => self.storage.log_create(
                EntityType::MonthlyNote,
                id,
                Some(month.label()),
                &note,
            )?,
        }

        Ok(note)
    }

    pub fn get(&self, month: MonthPeriod) -> LedgerResult<Option<MonthlyNote>> {
        self.storage.notes.get(month)
    }

    /// All notes, oldest month first
    pub fn list(&self) -> LedgerResult<Vec<MonthlyNote>> {
        self.storage.notes.get_all()
    }
}
