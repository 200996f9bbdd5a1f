//! Storage layer for monthly-ledger
//!
//! One JSON file per record kind under `<base>/data/`, loaded into memory by
//! a repository and written back atomically. Mutations are recorded in the
//! audit log through the `log_*` helpers on `Storage`.

pub mod budget;
pub mod categories;
pub mod file_io;
pub mod init;
pub mod notes;
pub mod savings_goals;
pub mod transactions;

pub use budget::BudgetRepository;
pub use categories::CategoryRepository;
pub use file_io::{read_json, write_json_atomic};
pub use init::initialize_storage;
pub use notes::NoteRepository;
pub use savings_goals::SavingsGoalRepository;
pub use transactions::TransactionRepository;

use serde::Serialize;

use crate::audit::{generate_diff, AuditEntry, AuditLogger, EntityType};
use crate::config::paths::LedgerPaths;
use crate::error::LedgerError;

/// Owns every repository plus the audit logger
pub struct Storage {
    paths: LedgerPaths,
    audit: AuditLogger,
    pub transactions: TransactionRepository,
    pub categories: CategoryRepository,
    pub budgets: BudgetRepository,
    pub savings_goals: SavingsGoalRepository,
    pub notes: NoteRepository,
}

impl Storage {
    /// Create a storage rooted at `paths`, creating directories as needed
    ///
    /// Repositories start empty; call [`Storage::load_all`] to read the files.
    pub fn new(paths: LedgerPaths) -> Result<Self, LedgerError> {
        paths.ensure_directories()?;

        Ok(Self {
            audit: AuditLogger::new(paths.audit_log()),
            transactions: TransactionRepository::new(paths.transactions_file()),
            categories: CategoryRepository::new(paths.categories_file()),
            budgets: BudgetRepository::new(paths.budgets_file()),
            savings_goals: SavingsGoalRepository::new(paths.savings_goals_file()),
            notes: NoteRepository::new(paths.notes_file()),
            paths,
        })
    }

    pub fn paths(&self) -> &LedgerPaths {
        &self.paths
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    pub fn load_all(&mut self) -> Result<(), LedgerError> {
        self.transactions.load()?;
        self.categories.load()?;
        self.budgets.load()?;
        self.savings_goals.load()?;
        self.notes.load()?;
        Ok(())
    }

    pub fn save_all(&self) -> Result<(), LedgerError> {
        self.transactions.save()?;
        self.categories.save()?;
        self.budgets.save()?;
        self.savings_goals.save()?;
        self.notes.save()?;
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.paths.is_initialized()
    }

    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), LedgerError> {
        self.audit
            .append(&AuditEntry::create(entity_type, entity_id, entity_name, entity))
    }

    /// Log an update, computing the field diff from the two snapshots
    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
    ) -> Result<(), LedgerError> {
        let diff = match (serde_json::to_value(before), serde_json::to_value(after)) {
            (Ok(b), Ok(a)) => generate_diff(&b, &a),
            _ => None,
        };
        self.audit.append(&AuditEntry::update(
            entity_type,
            entity_id,
            entity_name,
            before,
            after,
            diff,
        ))
    }

    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), LedgerError> {
        self.audit
            .append(&AuditEntry::delete(entity_type, entity_id, entity_name, entity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::models::{Category, Money, SavingsGoal};
    use tempfile::TempDir;

    fn create_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_storage_creation() {
        let (temp_dir, storage) = create_storage();

        assert!(temp_dir.path().join("data").exists());
        assert!(!storage.is_initialized());
    }

    #[test]
    fn test_save_all_and_load_all() {
        let (temp_dir, storage) = create_storage();
        storage.categories.upsert(Category::new("Rent")).unwrap();
        storage
            .savings_goals
            .upsert(SavingsGoal::new("Car", Money::from_cents(500000)))
            .unwrap();
        storage.save_all().unwrap();

        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut reopened = Storage::new(paths).unwrap();
        reopened.load_all().unwrap();
        assert_eq!(reopened.categories.count().unwrap(), 1);
        assert_eq!(reopened.savings_goals.get_all().unwrap().len(), 1);
    }

    #[test]
    fn test_log_update_records_diff() {
        let (_temp_dir, storage) = create_storage();
        let before = SavingsGoal::new("Car", Money::from_cents(500000));
        let mut after = before.clone();
        after.deposit(Money::from_cents(1000)).unwrap();

        storage
            .log_update(
                EntityType::SavingsGoal,
                before.id.to_string(),
                Some(before.name.clone()),
                &before,
                &after,
            )
            .unwrap();

        let entries = storage.audit().read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].operation, Operation::Update);
        assert_eq!(
            entries[0].diff_summary.as_deref(),
            Some("current_amount: 0 -> 1000")
        );
    }
}
